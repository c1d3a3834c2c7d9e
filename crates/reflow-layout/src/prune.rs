//! Tree pruning
//!
//! Removes structure and declarations the inferred layout already implies:
//! wrappers that add nothing around their only child, and explicit sizes
//! the flex content would produce anyway.

use reflow_css::Length;
use reflow_node::{Axis, Node, StyleTable, EPSILON, PLACEMENT_KEYS};

use crate::box_model::EdgeSizes;
use crate::flex::{FlexDirection, JustifyContent};

/// Content width within this many px of the declared width is redundant
pub const CONTENT_WIDTH_TOLERANCE: f64 = 5.0;

/// Collapse wrappers, drop redundant sizes, then refresh group boxes
pub fn prune(root: &mut Node) {
    collapse_wrappers(root);
    remove_redundant_sizes(root, None);
    root.refresh_bounds();
}

/// Replace every node whose only child covers exactly the same box by that
/// child, repeatedly, at every depth
pub fn collapse_wrappers(node: &mut Node) {
    while node.children().len() == 1 && node.children()[0].bounding_box().same_as(node.bounding_box()) {
        let Some(child) = node.take_children().pop() else {
            break;
        };
        let parent = std::mem::replace(node, child);
        absorb(node, parent);
    }
    for child in node.children_mut() {
        collapse_wrappers(child);
    }
}

/// Merge the removed wrapper into the child that replaced it
fn absorb(child: &mut Node, parent: Node) {
    tracing::debug!("{} {} replaces wrapper {}", child.kind.name(), child.id, parent.id);

    let mut style = parent.style;
    style.append(&mut child.style);
    child.style = style;

    let mut parent_layout = parent.layout;
    for key in PLACEMENT_KEYS {
        child.layout.remove(*key);
        if let Some(value) = parent_layout.remove(*key) {
            child.layout.insert(key.to_string(), value);
        }
    }
    child.annotations.replaced_parent = true;
}

fn px(table: &StyleTable, key: &str) -> Option<f64> {
    table.get(key).and_then(|v| Length::parse(v).ok()).and_then(|l| l.to_px())
}

/// Drop explicit sizes the flex layout reproduces. `parent_layout` is the
/// layout table of `node`'s parent.
pub fn remove_redundant_sizes(node: &mut Node, parent_layout: Option<&StyleTable>) {
    let layout = node.layout.clone();
    for child in node.children_mut() {
        remove_redundant_sizes(child, Some(&layout));
    }

    let constrained = parent_layout.is_some_and(|l| {
        l.get("position").is_some_and(|v| v == "relative")
            || l.get("justify-content").map(String::as_str) == Some(JustifyContent::SpaceBetween.css_value())
    });
    if !constrained && !node.is_leaf() {
        if let Some(declared) = px(&node.style, "width") {
            let content = content_width(node);
            if (content - declared).abs() <= CONTENT_WIDTH_TOLERANCE {
                tracing::trace!("{}: width {} matches content {}", node.id, declared, content);
                node.style.remove("width");
            }
        }
    }

    if let [only] = node.children() {
        let child = only.bounding_box();
        let same = |key: &str, size: f64| px(&node.style, key).is_some_and(|v| (v - size).abs() < EPSILON);
        let (same_width, same_height) = (same("width", child.width()), same("height", child.height()));
        if same_width {
            node.style.remove("width");
        }
        if same_height {
            node.style.remove("height");
        }
    }
}

/// Width the children and padding occupy. Rows add up children and the
/// space between them; columns take the widest child with its side margins.
fn content_width(node: &Node) -> f64 {
    let horizontal_padding = EdgeSizes::from_table(&node.layout, "padding").along(Axis::X);
    let children = node.children();

    let direction = node
        .layout
        .get("flex-direction")
        .and_then(|v| FlexDirection::from_css(v))
        .unwrap_or_default();
    let inner = match direction {
        FlexDirection::Row => {
            let widths: f64 = children.iter().map(|c| c.bounding_box().width()).sum();
            let gaps: f64 = children
                .windows(2)
                .map(|w| w[1].bounding_box().left() - w[0].bounding_box().right())
                .sum();
            widths + gaps
        }
        FlexDirection::Column => children
            .iter()
            .map(|c| {
                c.bounding_box().width() + EdgeSizes::from_table(&c.layout, "margin").along(Axis::X)
            })
            .fold(0.0, f64::max),
    };
    inner + horizontal_padding
}

#[cfg(test)]
mod tests {
    use super::*;
    use reflow_node::{BoundingBox, NodeKind};

    fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Node {
        Node::visible(id, BoundingBox::new(x, y, w, h))
    }

    // ========================================================================
    // Wrapper collapse
    // ========================================================================

    #[test]
    fn test_collapse_identical_child() {
        let mut parent = rect("parent", 0.0, 0.0, 100.0, 100.0)
            .with_style("background-color", "#ffffff")
            .with_style("border-radius", "8px")
            .with_children(vec![Node::text("child", BoundingBox::new(0.0, 0.0, 100.0, 100.0), "Hi")
                .with_style("border-radius", "4px")]);
        parent.layout.insert("margin-top".to_string(), "12px".to_string());
        parent.layout.insert("display".to_string(), "flex".to_string());

        collapse_wrappers(&mut parent);

        assert_eq!(parent.id, "child");
        assert!(matches!(parent.kind, NodeKind::Text { .. }));
        assert!(parent.annotations.replaced_parent);
        assert_eq!(parent.style.get("background-color").map(String::as_str), Some("#ffffff"));
        assert_eq!(parent.style.get("border-radius").map(String::as_str), Some("4px"));
        assert_eq!(parent.layout.get("margin-top").map(String::as_str), Some("12px"));
        assert!(!parent.layout.contains_key("display"));
    }

    #[test]
    fn test_collapse_chain() {
        let b = BoundingBox::new(0.0, 0.0, 50.0, 50.0);
        let mut outer = Node::visible("outer", b)
            .with_children(vec![Node::visible("middle", b).with_children(vec![Node::visible("inner", b)])]);
        collapse_wrappers(&mut outer);
        assert_eq!(outer.id, "inner");
        assert!(outer.is_leaf());
    }

    #[test]
    fn test_smaller_child_not_collapsed() {
        let mut parent =
            rect("parent", 0.0, 0.0, 100.0, 100.0).with_children(vec![rect("child", 10.0, 10.0, 80.0, 80.0)]);
        collapse_wrappers(&mut parent);
        assert_eq!(parent.id, "parent");
        assert_eq!(parent.children().len(), 1);
    }

    // ========================================================================
    // Redundant sizes
    // ========================================================================

    #[test]
    fn test_row_width_matches_content() {
        let mut node = rect("row", 0.0, 0.0, 200.0, 20.0)
            .with_style("width", "200px")
            .with_children(vec![rect("a", 0.0, 0.0, 99.0, 20.0), rect("b", 101.0, 0.0, 99.0, 20.0)]);
        node.layout.insert("justify-content".to_string(), "space-between".to_string());
        remove_redundant_sizes(&mut node, None);
        assert!(!node.style.contains_key("width"));
    }

    #[test]
    fn test_width_kept_under_relative_parent() {
        let mut node = rect("row", 0.0, 0.0, 200.0, 20.0)
            .with_style("width", "200px")
            .with_children(vec![rect("a", 0.0, 0.0, 99.0, 20.0), rect("b", 101.0, 0.0, 99.0, 20.0)]);
        let parent = StyleTable::from([("position".to_string(), "relative".to_string())]);
        remove_redundant_sizes(&mut node, Some(&parent));
        assert!(node.style.contains_key("width"));
    }

    #[test]
    fn test_width_kept_when_content_narrower() {
        let mut node = rect("row", 0.0, 0.0, 300.0, 20.0)
            .with_style("width", "300px")
            .with_children(vec![rect("a", 0.0, 0.0, 99.0, 20.0), rect("b", 101.0, 0.0, 99.0, 20.0)]);
        remove_redundant_sizes(&mut node, None);
        assert!(node.style.contains_key("width"));
    }

    #[test]
    fn test_column_width_uses_widest_child() {
        let mut node = rect("col", 0.0, 0.0, 120.0, 100.0)
            .with_style("width", "120px")
            .with_children(vec![
                rect("a", 0.0, 0.0, 60.0, 20.0),
                rect("b", 10.0, 40.0, 100.0, 20.0).with_style("height", "20px"),
            ]);
        node.layout.insert("flex-direction".to_string(), "column".to_string());
        node.layout.insert("padding-left".to_string(), "10px".to_string());
        node.layout.insert("padding-right".to_string(), "10px".to_string());
        remove_redundant_sizes(&mut node, None);
        assert!(!node.style.contains_key("width"));
    }

    #[test]
    fn test_single_child_identical_height() {
        let mut node = rect("wrap", 0.0, 0.0, 100.0, 40.0)
            .with_style("height", "40px")
            .with_children(vec![rect("only", 10.0, 0.0, 50.0, 40.0).with_style("height", "40px")]);
        node.layout.insert("position".to_string(), "relative".to_string());
        remove_redundant_sizes(&mut node, None);
        assert!(!node.style.contains_key("height"));
        assert_eq!(node.children()[0].style.get("height").map(String::as_str), Some("40px"));
    }

    #[test]
    fn test_single_child_width_after_child_pruned() {
        // The row's own width goes first, the wrapper then compares boxes
        let row = rect("row", 0.0, 0.0, 200.0, 20.0)
            .with_style("width", "200px")
            .with_children(vec![rect("a", 0.0, 0.0, 99.0, 20.0), rect("b", 101.0, 0.0, 99.0, 20.0)]);
        let mut wrap = rect("wrap", 0.0, 0.0, 200.0, 60.0)
            .with_style("width", "200px")
            .with_children(vec![row]);
        let relative = StyleTable::from([("position".to_string(), "relative".to_string())]);
        remove_redundant_sizes(&mut wrap, Some(&relative));
        assert!(!wrap.children()[0].style.contains_key("width"));
        assert!(!wrap.style.contains_key("width"));
    }

    #[test]
    fn test_single_child_different_height_kept() {
        let mut node = rect("wrap", 0.0, 0.0, 100.0, 40.0)
            .with_style("height", "40px")
            .with_children(vec![rect("only", 0.0, 0.0, 100.0, 30.0)]);
        remove_redundant_sizes(&mut node, None);
        assert_eq!(node.style.get("height").map(String::as_str), Some("40px"));
    }

    #[test]
    fn test_prune_refreshes_group_boxes() {
        let b = BoundingBox::new(0.0, 0.0, 40.0, 40.0);
        let mut root = Node::group(
            "root",
            vec![
                Node::visible("wrapper", b).with_children(vec![Node::visible("inner", b)]),
                rect("other", 60.0, 0.0, 20.0, 20.0),
            ],
        );
        prune(&mut root);
        assert_eq!(root.children()[0].id, "inner");
        assert_eq!(*root.bounding_box(), BoundingBox::new(0.0, 0.0, 80.0, 40.0));
    }
}
