//! Reflow Layout Engine
//!
//! Hierarchy construction, flexbox inference and pruning over the design
//! node tree.

mod align;
mod axis;
mod box_model;
mod components;
mod flex;
mod grouping;
mod inference;
mod prune;
mod spacing;
mod stacking;

pub use align::{infer_align, infer_justify, target_lines};
pub use axis::{infer_direction, sort_along};
pub use box_model::{EdgeSizes, Side};
pub use components::connected_components;
pub use flex::{AlignItems, FlexContainerStyle, FlexDirection, JustifyContent};
pub use grouping::{drop_invisible, mark_vector_groups, Grouper, IdAllocator};
pub use inference::infer_layout;
pub use prune::{collapse_wrappers, prune, remove_redundant_sizes};
pub use stacking::z_indices;

/// Numeric knobs of the layout heuristics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Padding at or below this many px is omitted
    pub padding_threshold: f64,
    /// Relative deviation from the average under which gaps count as uniform
    pub gap_uniformity_ratio: f64,
    /// Shrink applied to each end of a projection before overlap tests
    pub overlap_buffer: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            padding_threshold: 0.0,
            gap_uniformity_ratio: 0.1,
            overlap_buffer: 0.0,
        }
    }
}

/// Group a flat node list, infer layout and prune, returning the root.
///
/// A single top-level node becomes the root itself; several are wrapped in
/// a synthetic group. Returns `None` for an empty list.
pub fn layout(nodes: Vec<reflow_node::Node>, ids: &mut IdAllocator, options: &LayoutOptions) -> Option<reflow_node::Node> {
    tracing::info!("Performing layout of {} node(s)", nodes.len());
    let nodes = drop_invisible(nodes);
    let mut nodes = Grouper::new(ids, options).group(nodes);

    let mut root = match nodes.len() {
        0 => return None,
        1 => nodes.pop()?,
        _ => reflow_node::Node::group(ids.next_id(), nodes),
    };
    mark_vector_groups(&mut root);
    infer_layout(&mut root, options);
    prune(&mut root);
    Some(root)
}
