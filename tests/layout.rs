mod common;

use common::build;
use pathview::tree::{visible_rows, TreeRow};

#[test]
fn test_rows_exclude_root_and_cover_all_nodes() {
    let root = build(&["a/b", "a/c", "d"]);
    let rows = visible_rows(&root);
    assert_eq!(rows.len(), root.descendant_count());
    assert!(rows.iter().all(|r| !r.name.is_empty()));
}

#[test]
fn test_row_order_is_depth_first_insertion_order() {
    let root = build(&["a/b", "a/c", "d"]);
    let rows = visible_rows(&root);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d"]);
}

#[test]
fn test_full_path_and_depth() {
    let root = build(&["a/b/c"]);
    let rows = visible_rows(&root);
    let c = rows.iter().find(|r| r.name == "c").unwrap();
    assert_eq!(c.full_path, "a/b/c");
    assert_eq!(c.depth, 3);
    assert_eq!(c.index_path, vec![0, 0, 0]);
}

#[test]
fn test_connectors_for_siblings() {
    let root = build(&["a/deep.txt", "b.txt"]);
    let rows = visible_rows(&root);

    let a = rows.iter().find(|r| r.name == "a").unwrap();
    assert!(
        a.prefix.contains('\u{251c}'),
        "Non-last sibling should use \u{251c}\u{2500}\u{2500} (got: {:?})",
        a.prefix
    );

    let b = rows.iter().find(|r| r.name == "b.txt").unwrap();
    assert!(
        b.prefix.contains('\u{2514}'),
        "Last sibling should use \u{2514}\u{2500}\u{2500} (got: {:?})",
        b.prefix
    );
    assert!(b.is_last);
}

#[test]
fn test_continuation_lines_follow_ancestors() {
    // "a" has a following sibling, so its descendants carry a │ continuation;
    // "x" is last, so its descendants get blank padding instead.
    let root = build(&["a/b/c", "x/y"]);
    let rows = visible_rows(&root);

    let c = rows.iter().find(|r| r.name == "c").unwrap();
    assert!(
        c.prefix.starts_with("\u{2502}   "),
        "Descendant of non-last ancestor should start with continuation (got: {:?})",
        c.prefix
    );

    let y = rows.iter().find(|r| r.name == "y").unwrap();
    assert!(
        y.prefix.starts_with("    "),
        "Descendant of last ancestor should start with padding (got: {:?})",
        y.prefix
    );
}

#[test]
fn test_collapsed_branch_hides_descendants() {
    let mut root = build(&["a/b/c", "d"]);
    root.descendants[0].toggle_children();

    let rows = visible_rows(&root);
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["a", "d"]);

    let a: &TreeRow = &rows[0];
    assert!(a.is_collapsed);
    assert_eq!(a.hidden_count, 2);
    assert!(a.has_children);
}

#[test]
fn test_collapse_flag_on_leaf_does_not_mark_row() {
    let mut root = build(&["file.txt"]);
    root.descendants[0].toggle_children();
    let rows = visible_rows(&root);
    assert!(
        !rows[0].is_collapsed,
        "A childless node has nothing to hide and should not render as collapsed"
    );
}

#[test]
fn test_toggle_twice_restores_rows() {
    let mut root = build(&["a/b", "a/c", "d"]);
    let before = visible_rows(&root);
    root.descendants[0].toggle_children();
    root.descendants[0].toggle_children();
    assert_eq!(visible_rows(&root), before);
}
