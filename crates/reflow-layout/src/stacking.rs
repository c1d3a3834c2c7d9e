//! Absolute positioning for overlapping siblings
//!
//! Children of an overlap group keep their z-order and are pinned to their
//! design offsets inside a `position: relative` parent. Siblings that reach
//! into a neighbour's shadow are lifted above it, in flex and absolute
//! containers alike.

use reflow_css::format_px;
use reflow_node::{Axis, Node};

use crate::axis::infer_direction;
use crate::LayoutOptions;

/// Tier step used when the group is small enough for tiers
pub const Z_TIER_STEP: i64 = 10;
/// Largest group that gets tiered z-indices
pub const MAX_TIERED_CHILDREN: usize = 5;
/// Lowest z-index for a child crossing a shadowed neighbour
pub const SHADOW_CLEARANCE: i64 = 10;
const SHADOW_BUFFER: f64 = 2.0;

/// Z-index per child, bottom-most first
pub fn z_indices(count: usize) -> Vec<i64> {
    (0..count as i64)
        .map(|k| {
            if count <= MAX_TIERED_CHILDREN {
                (k + 1) * Z_TIER_STEP
            } else {
                k
            }
        })
        .collect()
}

fn casts_shadow(node: &Node) -> bool {
    node.style
        .get("box-shadow")
        .is_some_and(|v| !v.trim().is_empty() && v.trim() != "none")
}

/// Which children overlap, along `axis`, the shadow of the previous or next
/// sibling. Children are in their final order.
pub fn shadow_crossings(children: &[Node], axis: Axis) -> Vec<bool> {
    (0..children.len())
        .map(|i| {
            let line = children[i].bounding_box().line(axis);
            [i.checked_sub(1), Some(i + 1)]
                .into_iter()
                .flatten()
                .filter_map(|j| children.get(j))
                .any(|n| casts_shadow(n) && line.overlaps(&n.rendering_box().line(axis), SHADOW_BUFFER))
        })
        .collect()
}

/// Give flex items that reach into a neighbour's shadow `z-index: 10`
pub fn raise_over_shadows(children: &mut [Node], axis: Axis) {
    let crossings = shadow_crossings(children, axis);
    for (child, crosses) in children.iter_mut().zip(crossings) {
        if crosses {
            tracing::trace!("{} raised above a shadowed neighbour", child.id);
            child
                .layout
                .insert("z-index".to_string(), SHADOW_CLEARANCE.to_string());
        }
    }
}

/// Position every child absolutely and assign stacking order
pub fn position_children(node: &mut Node, options: &LayoutOptions) {
    node.layout
        .insert("position".to_string(), "relative".to_string());

    let parent = *node.bounding_box();
    let children = node.children();
    let axis = infer_direction(children, options.overlap_buffer).main_axis();
    let mut z = z_indices(children.len());

    for (i, crosses) in shadow_crossings(children, axis).into_iter().enumerate() {
        if crosses && z[i] < SHADOW_CLEARANCE {
            tracing::trace!("{} raised above a shadowed neighbour", children[i].id);
            z[i] = SHADOW_CLEARANCE;
        }
    }

    for (child, z) in node.children_mut().iter_mut().zip(z) {
        let b = *child.bounding_box();
        let layout = &mut child.layout;
        layout.insert("position".to_string(), "absolute".to_string());
        layout.insert("top".to_string(), format_px(b.top() - parent.top()));
        layout.insert("left".to_string(), format_px(b.left() - parent.left()));
        layout.insert("z-index".to_string(), z.to_string());
    }
}
