//! Axis inference

use reflow_node::{Axis, Node};

use crate::flex::FlexDirection;

/// Pick the primary axis for `children`.
///
/// Children whose vertical extents are pairwise disjoint stack into a
/// column; anything else is a row. A lone child is a row, and children that
/// all share one box stack into a column.
pub fn infer_direction(children: &[Node], buffer: f64) -> FlexDirection {
    let Some((first, rest)) = children.split_first() else {
        return FlexDirection::Row;
    };
    if rest.is_empty() {
        return FlexDirection::Row;
    }
    if rest.iter().all(|c| c.bounding_box().same_as(first.bounding_box())) {
        return FlexDirection::Column;
    }

    let lines: Vec<_> = children.iter().map(|c| c.bounding_box().line(Axis::Y)).collect();
    for (i, a) in lines.iter().enumerate() {
        if lines[i + 1..].iter().any(|b| a.overlaps(b, buffer)) {
            return FlexDirection::Row;
        }
    }
    FlexDirection::Column
}

/// Stable sort ascending by leading edge along the main axis
pub fn sort_along(children: &mut [Node], direction: FlexDirection) {
    let axis = direction.main_axis();
    children.sort_by(|a, b| {
        a.bounding_box()
            .line(axis)
            .lower
            .total_cmp(&b.bounding_box().line(axis).lower)
    });
}
