//! Layout inference
//!
//! Walks a grouped tree top-down and writes each container's flexbox or
//! absolute-positioning declarations into the layout tables.

use reflow_node::{BoundingBox, Node};

use crate::align::{infer_align, infer_justify, target_lines};
use crate::axis::{infer_direction, sort_along};
use crate::flex::{FlexContainerStyle, JustifyContent};
use crate::spacing::{apply_margins, apply_sizes, padding_for, uniform_gap, write_container};
use crate::stacking::{position_children, raise_over_shadows};
use crate::LayoutOptions;

/// Infer layout for `node` and its whole subtree
pub fn infer_layout(node: &mut Node, options: &LayoutOptions) {
    apply_sizes(node);
    if node.is_leaf() || node.annotations.vector_group {
        return;
    }

    if node.annotations.absolute_positioning_group {
        position_children(node, options);
    } else {
        let style = arrange_flex(node, options);
        tracing::trace!(
            "{}: {} / {} / {}",
            node.id,
            style.direction.css_value(),
            style.justify_content.css_value(),
            style.align_items.css_value()
        );
    }

    for child in node.children_mut() {
        infer_layout(child, options);
    }
}

/// Infer and write flex container properties plus item margins
fn arrange_flex(node: &mut Node, options: &LayoutOptions) -> FlexContainerStyle {
    let direction = infer_direction(node.children(), options.overlap_buffer);
    sort_along(node.children_mut(), direction);

    let main = direction.main_axis();
    raise_over_shadows(node.children_mut(), main);
    let cross = direction.cross_axis();
    let parent = *node.bounding_box();
    let children = node.children();

    let bands = target_lines(children.iter().map(|c| c.bounding_box().line(main)).collect());
    let justify_content = infer_justify(&parent.line(main), &bands, options.gap_uniformity_ratio);
    let cross_lines: Vec<_> = children.iter().map(|c| c.bounding_box().line(cross)).collect();
    let align_items = infer_align(&parent.line(cross), &cross_lines);

    let gap = match justify_content {
        JustifyContent::SpaceBetween => None,
        _ => uniform_gap(children, direction, options.gap_uniformity_ratio),
    };
    let style = FlexContainerStyle {
        direction,
        justify_content,
        align_items,
        gap,
    };

    let content = BoundingBox::union_all(children.iter().map(|c| c.bounding_box())).unwrap_or(parent);
    let padding = padding_for(&parent, &content, &style, options.padding_threshold);

    apply_margins(&parent, &padding, node.children_mut(), &style);
    write_container(node, &style, &padding);
    style
}
