use super::{PathNode, PATH_JOIN};

/// One visible line of the laid-out tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    /// Display name (segment label).
    pub name: String,
    /// Child indexes from the root leading to this node.
    pub index_path: Vec<usize>,
    /// Name chain from the root, delimiter-joined.
    pub full_path: String,
    /// Nesting depth (1 = direct child of root).
    pub depth: usize,
    /// Whether the node has descendants.
    pub has_children: bool,
    /// Whether the node's subtree is currently collapsed.
    pub is_collapsed: bool,
    /// Number of descendants hidden when collapsed.
    pub hidden_count: usize,
    /// Whether this is the last sibling in its parent group.
    pub is_last: bool,
    /// Pre-computed box-drawing prefix string.
    pub prefix: String,
}

/// Flatten the visible portion of the tree into ordered rows.
///
/// Descendants of collapsed nodes are excluded. The root itself does not
/// produce a row. Prefixes use the usual box-drawing scheme, built from an
/// ancestor_is_last stack so continuation lines stop at the last sibling.
pub fn visible_rows(root: &PathNode) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    let mut ancestor_is_last = Vec::new();
    let mut index_path = Vec::new();
    walk(root, "", &mut ancestor_is_last, &mut index_path, &mut rows);
    rows
}

fn walk(
    node: &PathNode,
    parent_path: &str,
    ancestor_is_last: &mut Vec<bool>,
    index_path: &mut Vec<usize>,
    rows: &mut Vec<TreeRow>,
) {
    let count = node.descendants.len();
    for (i, child) in node.descendants.iter().enumerate() {
        let is_last = i + 1 == count;
        let full_path = if parent_path.is_empty() {
            child.name.clone()
        } else {
            format!("{}{}{}", parent_path, PATH_JOIN, child.name)
        };

        // Continuation lines for ancestors, then the connector for this row.
        let mut prefix = String::new();
        for &last in ancestor_is_last.iter() {
            prefix.push_str(if last { "    " } else { "\u{2502}   " }); // │
        }
        if is_last {
            prefix.push_str("\u{2514}\u{2500}\u{2500} "); // └──
        } else {
            prefix.push_str("\u{251c}\u{2500}\u{2500} "); // ├──
        }

        index_path.push(i);
        let collapsed = child.hide_children && !child.descendants.is_empty();
        rows.push(TreeRow {
            name: child.name.clone(),
            index_path: index_path.clone(),
            full_path: full_path.clone(),
            depth: index_path.len(),
            has_children: !child.descendants.is_empty(),
            is_collapsed: collapsed,
            hidden_count: if collapsed { child.descendant_count() } else { 0 },
            is_last,
            prefix,
        });

        if !collapsed {
            ancestor_is_last.push(is_last);
            walk(child, &full_path, ancestor_is_last, index_path, rows);
            ancestor_is_last.pop();
        }
        index_path.pop();
    }
}
