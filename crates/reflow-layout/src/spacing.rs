//! Padding, gap, margins and sizes
//!
//! Which sides receive spacing follows from the inferred distribution: a
//! container packed towards its start keeps the start-side slack as padding
//! and expresses the rest as leading margins on its items, and so on.

use reflow_css::format_px;
use reflow_node::{Axis, BoundingBox, Node};

use crate::align::is_uniform;
use crate::box_model::{is_zero, EdgeSizes, Side};
use crate::flex::{AlignItems, FlexContainerStyle, FlexDirection, JustifyContent};

/// Write `width`/`height` from the bounding box unless already declared
pub fn apply_sizes(node: &mut Node) {
    let (width, height) = (node.bounding_box().width(), node.bounding_box().height());
    node.style
        .entry("width".to_string())
        .or_insert_with(|| format_px(width));
    node.style
        .entry("height".to_string())
        .or_insert_with(|| format_px(height));
}

/// Padding between `parent` and the union of its children, kept only on the
/// sides the container's distribution leaves at the edge
pub fn padding_for(
    parent: &BoundingBox,
    content: &BoundingBox,
    style: &FlexContainerStyle,
    threshold: f64,
) -> EdgeSizes {
    let insets = EdgeSizes::between(parent, content);
    let main = style.direction.main_axis();
    let cross = style.direction.cross_axis();

    let mut sides = Vec::with_capacity(4);
    match style.justify_content {
        JustifyContent::FlexStart => sides.push(Side::leading(main)),
        JustifyContent::FlexEnd => sides.push(Side::trailing(main)),
        JustifyContent::SpaceBetween => {
            sides.push(Side::leading(main));
            sides.push(Side::trailing(main));
        }
        JustifyContent::Center => {}
    }
    match style.align_items {
        AlignItems::FlexStart => sides.push(Side::leading(cross)),
        AlignItems::FlexEnd => sides.push(Side::trailing(cross)),
        AlignItems::Center => {}
    }

    let mut padding = EdgeSizes::default();
    for side in sides {
        let value = insets.get(side);
        if value > threshold {
            padding.set(side, value);
        }
    }
    padding
}

/// Uniform spacing between consecutive children, when every gap is within
/// `ratio` of a positive average. Children must be sorted along the axis.
pub fn uniform_gap(children: &[Node], direction: FlexDirection, ratio: f64) -> Option<f64> {
    if children.len() < 2 {
        return None;
    }
    let gaps = main_gaps(children, direction.main_axis());
    let average = gaps.iter().sum::<f64>() / gaps.len() as f64;
    (average > 0.0 && is_uniform(&gaps, ratio)).then_some(average)
}

fn main_gaps(children: &[Node], axis: Axis) -> Vec<f64> {
    children
        .windows(2)
        .map(|w| w[0].bounding_box().line(axis).gap_to(&w[1].bounding_box().line(axis)))
        .collect()
}

/// Per-child margins along both axes.
///
/// Main-axis margins are skipped when the container carries a `gap`.
pub fn apply_margins(parent: &BoundingBox, padding: &EdgeSizes, children: &mut [Node], style: &FlexContainerStyle) {
    let main = style.direction.main_axis();
    let cross = style.direction.cross_axis();
    let (lead, trail) = (Side::leading(main), Side::trailing(main));
    let count = children.len();
    if count == 0 {
        return;
    }

    let parent_main = parent.line(main);
    let lines: Vec<_> = children.iter().map(|c| c.bounding_box().line(main)).collect();
    let content = BoundingBox::union_all(children.iter().map(|c| c.bounding_box()));

    for (k, child) in children.iter_mut().enumerate() {
        let mut margins = EdgeSizes::default();

        if style.gap.is_none() {
            let line = &lines[k];
            let leading = match k {
                0 => line.lower - parent_main.lower - padding.get(lead),
                _ => lines[k - 1].gap_to(line),
            };
            let trailing = if k + 1 == count {
                parent_main.upper - padding.get(trail) - line.upper
            } else {
                line.gap_to(&lines[k + 1])
            };
            let (use_leading, use_trailing) = match style.justify_content {
                JustifyContent::FlexStart => (true, false),
                JustifyContent::FlexEnd => (false, true),
                JustifyContent::Center => (k > 0, false),
                JustifyContent::SpaceBetween => (k == 0, k + 1 == count),
            };
            if use_leading {
                margins.set(lead, leading);
            }
            if use_trailing {
                margins.set(trail, trailing);
            }
        }

        if let Some(content) = &content {
            let own = child.bounding_box().line(cross);
            let union = content.line(cross);
            match style.align_items {
                AlignItems::FlexStart => margins.set(Side::leading(cross), own.lower - union.lower),
                AlignItems::FlexEnd => margins.set(Side::trailing(cross), union.upper - own.upper),
                AlignItems::Center => {}
            }
        }

        margins.write_to(&mut child.layout, "margin");
    }
}

/// Write the container declarations of a flex parent
pub fn write_container(node: &mut Node, style: &FlexContainerStyle, padding: &EdgeSizes) {
    let layout = &mut node.layout;
    layout.insert("display".to_string(), "flex".to_string());
    if style.direction == FlexDirection::Column {
        layout.insert("flex-direction".to_string(), style.direction.css_value().to_string());
    }
    layout.insert(
        "justify-content".to_string(),
        style.justify_content.css_value().to_string(),
    );
    layout.insert("align-items".to_string(), style.align_items.css_value().to_string());
    if let Some(gap) = style.gap.filter(|g| !is_zero(*g)) {
        layout.insert("gap".to_string(), format_px(gap));
    }
    padding.write_to(layout, "padding");
}
