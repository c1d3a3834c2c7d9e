//! Class Rendering
//!
//! Quantizes every node's declarations into utility classes, keyed by node
//! id. Font-relative values resolve against the parent's style.

use std::collections::BTreeMap;

use reflow_css::{utility_classes, SiblingAttributes};
use reflow_node::{Node, StyleTable};

/// Node id → utility classes, style declarations first
pub fn class_map(root: &Node) -> BTreeMap<String, Vec<String>> {
    let mut classes = BTreeMap::new();
    collect(root, None, &mut classes);
    classes
}

/// Classes for one node given its parent's style
pub fn node_classes(node: &Node, parent_style: Option<&StyleTable>) -> Vec<String> {
    let attrs = SiblingAttributes::new(Some(&node.style), parent_style);
    let mut classes = utility_classes(&node.style, &attrs);
    classes.extend(utility_classes(&node.layout, &attrs));
    classes
}

fn collect(node: &Node, parent_style: Option<&StyleTable>, out: &mut BTreeMap<String, Vec<String>>) {
    out.insert(node.id.clone(), node_classes(node, parent_style));
    if node.annotations.vector_group {
        return;
    }
    for child in node.children() {
        collect(child, Some(&node.style), out);
    }
}
