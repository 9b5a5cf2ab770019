use globset::{Glob, GlobSet, GlobSetBuilder};

use super::{PathNode, TreeConfig};

/// Build a GlobSet from user-supplied exclude patterns.
/// Invalid patterns are skipped and reported to stderr.
pub fn build_ignore_set(user_patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    let mut invalid = Vec::new();
    for pattern in user_patterns {
        match Glob::new(pattern) {
            Ok(g) => {
                builder.add(g);
            }
            Err(_) => {
                invalid.push(pattern.clone());
            }
        }
    }
    if !invalid.is_empty() {
        eprintln!("pathview: invalid ignore pattern(s), skipped: {:?}", invalid);
    }
    builder.build().unwrap_or_else(|e| {
        eprintln!("pathview: failed to build ignore set: {}", e);
        GlobSet::empty()
    })
}

/// Build the tree from an ordered list of delimited path strings.
///
/// Paths sharing a segment prefix share exactly one node chain for that
/// prefix; divergent suffixes become sibling branches. The result is
/// deterministic for a given input list.
pub fn build_tree(paths: &[String], config: &TreeConfig) -> PathNode {
    let mut root = PathNode::root();
    for path in paths {
        insert_path(&mut root, path, config);
    }
    root
}

/// Insert a single path into an existing tree.
///
/// Walks from the root one segment at a time, descending into an existing
/// child whose name equals the segment (first match wins) or appending a new
/// childless node. Matching is by name only; a node inserted as a leaf gains
/// children if a later path reuses it as a prefix. Empty segments (doubled
/// or trailing delimiters) are skipped. Paths matching the ignore set are
/// dropped entirely.
pub fn insert_path(root: &mut PathNode, path: &str, config: &TreeConfig) {
    if is_ignored(path, config) {
        return;
    }

    let mut node = root;
    let segments = path
        .split(config.delimiter)
        .filter(|s| !s.is_empty())
        .enumerate();
    for (depth, segment) in segments {
        if config.max_depth.is_some_and(|max| depth >= max) {
            break;
        }
        let idx = match node.descendants.iter().position(|c| c.name == segment) {
            Some(i) => i,
            None => {
                node.descendants.push(PathNode::new(segment));
                node.descendants.len() - 1
            }
        };
        node = &mut node.descendants[idx];
    }
}

/// A path is excluded when the full string or any of its segments matches
/// the ignore set. Segment matching lets a pattern like `node_modules`
/// drop a whole subtree without glob wildcards.
fn is_ignored(path: &str, config: &TreeConfig) -> bool {
    if config.ignore_patterns.is_empty() {
        return false;
    }
    if config.ignore_patterns.is_match(path) {
        return true;
    }
    path.split(config.delimiter)
        .filter(|s| !s.is_empty())
        .any(|segment| config.ignore_patterns.is_match(segment))
}
