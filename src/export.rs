//! Non-interactive output: plain text, nested JSON, and flat record exports.

use crate::tree::{visible_rows, PathNode};
use serde::Serialize;
use serde_json::{Map, Value};

/// A flat view of one node: its name, parent name, and direct child names.
#[derive(Debug, Serialize, PartialEq)]
pub struct NodeRecord {
    pub name: String,
    pub parent: Option<String>,
    pub children: Vec<String>,
}

/// Render the tree as plain prefixed text, one row per visible node.
pub fn ascii_tree(root: &PathNode) -> String {
    visible_rows(root)
        .iter()
        .map(|row| format!("{}{}", row.prefix, row.name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the tree as a nested name-keyed JSON object: each node becomes a
/// key whose value is the object of its descendants, leaves map to `{}`.
pub fn nested_value(node: &PathNode) -> Value {
    let mut map = Map::new();
    for child in &node.descendants {
        map.insert(child.name.clone(), nested_value(child));
    }
    Value::Object(map)
}

/// Flatten the tree into a list of [`NodeRecord`]s in depth-first order.
/// Direct children of the root have no parent.
pub fn record_list(root: &PathNode) -> Vec<NodeRecord> {
    let mut records = Vec::new();
    collect_records(root, None, &mut records);
    records
}

fn collect_records(node: &PathNode, parent: Option<&str>, out: &mut Vec<NodeRecord>) {
    for child in &node.descendants {
        out.push(NodeRecord {
            name: child.name.clone(),
            parent: parent.map(String::from),
            children: child.descendants.iter().map(|c| c.name.clone()).collect(),
        });
        collect_records(child, Some(&child.name), out);
    }
}
