//! Conversion Context
//!
//! Per-conversion state threaded through the pipeline: the configuration
//! and the allocator for synthetic group ids.

use reflow_layout::{IdAllocator, LayoutOptions};
use reflow_node::Node;

use crate::Config;

/// State owned by one conversion
#[derive(Debug)]
pub struct Context {
    config: Config,
    ids: IdAllocator,
}

impl Context {
    /// Create a context whose synthetic ids never collide with `nodes`
    pub fn new(config: Config, nodes: &[Node]) -> Self {
        let mut ids = IdAllocator::default();
        ids.reserve(nodes.iter().flat_map(|n| n.descendants()).map(|n| n.id.clone()));
        Self { config, ids }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn layout_options(&self) -> LayoutOptions {
        self.config.tolerances.layout_options()
    }

    pub fn ids_mut(&mut self) -> &mut IdAllocator {
        &mut self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_node::BoundingBox;

    #[test]
    fn test_reserved_ids_skipped() {
        let nodes = vec![Node::visible("group-1", BoundingBox::new(0.0, 0.0, 1.0, 1.0))];
        let mut context = Context::new(Config::default(), &nodes);
        assert_eq!(context.ids_mut().next_id(), "group-2");
    }
}
