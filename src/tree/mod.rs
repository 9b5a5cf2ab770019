//! Path tree building, visibility state, and row layout.

mod build;
mod layout;

use globset::GlobSet;

pub use build::{build_ignore_set, build_tree, insert_path};
pub use layout::{visible_rows, TreeRow};

/// Joins descendant name chains when reporting toggle results.
pub const PATH_JOIN: char = '/';

/// A single named node in the path tree.
///
/// The root node has an empty name and is never rendered; every other node
/// corresponds to one segment of an input path. Descendants are owned
/// exclusively by their parent and keep first-insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Segment label, unique among siblings under the same parent.
    pub name: String,
    /// Direct children, in first-insertion order (never sorted).
    pub descendants: Vec<PathNode>,
    /// Whether the descendant subtree is currently collapsed.
    pub hide_children: bool,
}

impl PathNode {
    /// Create a childless node with the given segment name.
    pub fn new(name: impl Into<String>) -> Self {
        PathNode {
            name: name.into(),
            descendants: Vec::new(),
            hide_children: false,
        }
    }

    /// Create the unnamed root node.
    pub fn root() -> Self {
        PathNode::new("")
    }

    /// Total number of descendants (direct and transitive).
    pub fn descendant_count(&self) -> usize {
        self.descendants
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Flip the collapsed/expanded state of this node's subtree.
    ///
    /// Returns the joined name chains of every descendant affected by the
    /// flip, relative to this node (the node itself is excluded). Applying
    /// the toggle twice restores the original state.
    pub fn toggle_children(&mut self) -> Vec<String> {
        self.hide_children = !self.hide_children;
        let mut affected = Vec::with_capacity(self.descendant_count());
        for child in &self.descendants {
            collect_chains(child, String::new(), &mut affected);
        }
        affected
    }

    /// Collapse every node in this subtree that has descendants.
    pub fn collapse_all(&mut self) {
        for child in &mut self.descendants {
            if !child.descendants.is_empty() {
                child.hide_children = true;
            }
            child.collapse_all();
        }
    }

    /// Expand every node in this subtree.
    pub fn expand_all(&mut self) {
        for child in &mut self.descendants {
            child.hide_children = false;
            child.expand_all();
        }
    }
}

fn collect_chains(node: &PathNode, prefix: String, out: &mut Vec<String>) {
    let chain = if prefix.is_empty() {
        node.name.clone()
    } else {
        format!("{}{}{}", prefix, PATH_JOIN, node.name)
    };
    out.push(chain.clone());
    for child in &node.descendants {
        collect_chains(child, chain.clone(), out);
    }
}

/// Configuration for tree building.
pub struct TreeConfig {
    /// Segment delimiter used to split input paths.
    pub delimiter: char,
    /// Maximum tree depth (`None` for unlimited); deeper segments are dropped.
    pub max_depth: Option<usize>,
    /// Glob patterns for paths to exclude.
    pub ignore_patterns: GlobSet,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            delimiter: PATH_JOIN,
            max_depth: None,
            ignore_patterns: GlobSet::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_reports_descendants() {
        let mut node = PathNode::new("a");
        node.descendants.push(PathNode::new("b"));
        node.descendants[0].descendants.push(PathNode::new("c"));

        assert!(!node.hide_children);
        let affected = node.toggle_children();
        assert!(node.hide_children);
        assert_eq!(affected, vec!["b".to_string(), "b/c".to_string()]);
    }

    #[test]
    fn toggle_twice_restores_expanded() {
        let mut node = PathNode::new("a");
        node.descendants.push(PathNode::new("b"));
        let before = node.clone();
        node.toggle_children();
        node.toggle_children();
        assert_eq!(node, before);
    }

    #[test]
    fn toggle_on_leaf_affects_nothing() {
        let mut leaf = PathNode::new("file.txt");
        let affected = leaf.toggle_children();
        assert!(affected.is_empty());
        assert!(leaf.hide_children);
    }

    #[test]
    fn descendant_count_is_transitive() {
        let mut node = PathNode::new("a");
        node.descendants.push(PathNode::new("b"));
        node.descendants[0].descendants.push(PathNode::new("c"));
        node.descendants.push(PathNode::new("d"));
        assert_eq!(node.descendant_count(), 3);
    }
}
