//! Tree traversal helpers

use crate::Node;

/// Depth-first (pre-order) iterator over a node and its descendants
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

impl Node {
    /// Iterate over this node and every descendant, parents before children
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Find a node by id in this subtree
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.descendants().find(|n| n.id == id)
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        self.descendants().filter(|n| n.is_leaf()).count()
    }

    /// Longest path from this node to a leaf (a leaf has depth 0)
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
