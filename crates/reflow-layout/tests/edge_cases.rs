//! Edge case tests for reflow-layout
//!
//! Whole-pipeline scenarios and the structural guarantees of grouping,
//! inference and pruning.

use reflow_layout::{
    infer_direction, layout, FlexDirection, Grouper, IdAllocator, LayoutOptions,
};
use reflow_node::{BoundingBox, Node, NodeKind};

fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Node {
    Node::visible(id, BoundingBox::new(x, y, w, h))
}

fn run(nodes: Vec<Node>) -> Node {
    let mut ids = IdAllocator::default();
    layout(nodes, &mut ids, &LayoutOptions::default()).unwrap()
}

fn layout_value<'a>(node: &'a Node, key: &str) -> Option<&'a str> {
    node.layout.get(key).map(String::as_str)
}

fn assert_group_unions(node: &Node) {
    for n in node.descendants() {
        if n.is_group() && !n.is_leaf() {
            let union = BoundingBox::union_all(n.children().iter().map(|c| c.bounding_box())).unwrap();
            assert!(n.bounding_box().same_as(&union), "group {} box drifted", n.id);
        }
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_three_stacked_boxes() {
    let root = run(vec![
        Node::text("a", BoundingBox::new(0.0, 0.0, 50.0, 20.0), "one"),
        Node::text("b", BoundingBox::new(0.0, 30.0, 50.0, 20.0), "two"),
        Node::text("c", BoundingBox::new(0.0, 60.0, 50.0, 20.0), "three"),
    ]);
    assert_eq!(root.kind, NodeKind::Group);
    assert_eq!(layout_value(&root, "flex-direction"), Some("column"));
    assert_eq!(layout_value(&root, "justify-content"), Some("space-between"));
    assert_eq!(root.children().len(), 3);
}

#[test]
fn test_identical_child_collapses_wrapper() {
    let parent = rect("parent", 0.0, 0.0, 100.0, 100.0)
        .with_style("background-color", "#ef4444")
        .with_children(vec![rect("child", 0.0, 0.0, 100.0, 100.0).with_style("border-radius", "8px")]);
    let root = run(vec![parent]);
    assert_eq!(root.id, "child");
    assert!(root.annotations.replaced_parent);
    assert_eq!(root.style.get("background-color").map(String::as_str), Some("#ef4444"));
    assert_eq!(root.style.get("border-radius").map(String::as_str), Some("8px"));
}

#[test]
fn test_one_pixel_overlap_stays_flat() {
    let root = run(vec![rect("a", 0.0, 0.0, 50.0, 50.0), rect("b", 49.0, 49.0, 50.0, 50.0)]);
    assert!(root.descendants().all(|n| !n.annotations.absolute_positioning_group));
    assert_eq!(root.children().len(), 2);
}

#[test]
fn test_width_pruned_when_children_fill_row() {
    let root = run(vec![
        rect("row", 0.0, 0.0, 200.0, 20.0),
        rect("left", 0.0, 0.0, 99.0, 20.0),
        rect("right", 101.0, 0.0, 99.0, 20.0),
    ]);
    assert_eq!(root.id, "row");
    assert!(!root.style.contains_key("width"));
    assert_eq!(root.style.get("height").map(String::as_str), Some("20px"));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_grouping_reentry_is_idempotent() {
    let nodes = vec![
        rect("card", 0.0, 0.0, 300.0, 200.0),
        rect("avatar", 16.0, 16.0, 40.0, 40.0),
        Node::text("name", BoundingBox::new(64.0, 16.0, 120.0, 20.0), "Ada"),
        Node::text("role", BoundingBox::new(64.0, 36.0, 120.0, 20.0), "Engineer"),
        rect("badge", 40.0, 40.0, 30.0, 30.0),
        rect("footer", 0.0, 160.0, 300.0, 40.0),
    ];
    let options = LayoutOptions::default();
    let mut ids = IdAllocator::default();
    let once = Grouper::new(&mut ids, &options).group(nodes);
    let twice = Grouper::new(&mut ids, &options).group(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_contained_boxes_become_descendants() {
    let nodes = vec![
        rect("page", 0.0, 0.0, 400.0, 400.0),
        rect("panel", 20.0, 20.0, 200.0, 200.0),
        rect("button", 40.0, 40.0, 80.0, 30.0),
        rect("aside", 250.0, 20.0, 100.0, 300.0),
        rect("dot", 260.0, 30.0, 10.0, 10.0),
    ];
    let pairs: Vec<(String, String)> = nodes
        .iter()
        .flat_map(|a| nodes.iter().map(move |b| (a, b)))
        .filter(|(a, b)| a.id != b.id && a.bounding_box().contains(b.bounding_box()))
        .map(|(a, b)| (a.id.clone(), b.id.clone()))
        .collect();

    let root = run(nodes);
    for (outer, inner) in pairs {
        let outer = root.find(&outer).unwrap();
        assert!(outer.find(&inner).is_some(), "{} not below {}", inner, outer.id);
    }
}

#[test]
fn test_group_boxes_match_children() {
    let root = run(vec![
        rect("a", 0.0, 0.0, 40.0, 40.0),
        rect("b", 30.0, 30.0, 40.0, 40.0),
        rect("c", 200.0, 0.0, 40.0, 40.0),
        rect("d", 200.0, 100.0, 40.0, 40.0),
        rect("e", 0.0, 300.0, 10.0, 10.0),
    ]);
    assert_group_unions(&root);
}

#[test]
fn test_axis_inference_totality() {
    let single = [rect("a", 0.0, 0.0, 10.0, 10.0)];
    assert_eq!(infer_direction(&single, 0.0), FlexDirection::Row);
    let coincident = [rect("a", 0.0, 0.0, 10.0, 10.0), rect("b", 0.0, 0.0, 10.0, 10.0)];
    assert_eq!(infer_direction(&coincident, 0.0), FlexDirection::Column);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_input() {
    let mut ids = IdAllocator::default();
    assert!(layout(Vec::new(), &mut ids, &LayoutOptions::default()).is_none());
}

#[test]
fn test_degenerate_boxes_survive() {
    let root = run(vec![
        rect("frame", 0.0, 0.0, 100.0, 100.0),
        rect("hairline", 0.0, 50.0, 100.0, 0.0),
        rect("inverted", 80.0, 80.0, -10.0, -10.0),
    ]);
    for id in ["frame", "hairline", "inverted"] {
        assert!(root.find(id).is_some(), "{} lost", id);
    }
}

#[test]
fn test_overlapping_cards_are_stacked() {
    let root = run(vec![
        rect("back", 0.0, 0.0, 100.0, 100.0).with_style("box-shadow", "0px 4px 6px rgba(0, 0, 0, 0.1)"),
        rect("front", 60.0, 60.0, 100.0, 100.0),
    ]);
    assert!(root.annotations.absolute_positioning_group);
    assert_eq!(layout_value(&root, "position"), Some("relative"));
    let front = root.find("front").unwrap();
    assert_eq!(layout_value(front, "position"), Some("absolute"));
    assert_eq!(layout_value(front, "top"), Some("60px"));
    assert_eq!(layout_value(front, "z-index"), Some("20"));
}

#[test]
fn test_card_next_to_shadow_is_raised() {
    let card = rect("card-a", 0.0, 0.0, 100.0, 100.0)
        .with_style("box-shadow", "0px 8px 24px rgba(0, 0, 0, 0.25)")
        .with_rendering_box(BoundingBox::new(-12.0, -8.0, 124.0, 124.0));
    let root = run(vec![card, rect("card-b", 104.0, 0.0, 100.0, 100.0)]);
    assert!(!root.annotations.absolute_positioning_group);
    assert_eq!(layout_value(&root, "display"), Some("flex"));
    assert_eq!(layout_value(root.find("card-b").unwrap(), "z-index"), Some("10"));
    assert_eq!(layout_value(root.find("card-a").unwrap(), "z-index"), None);
}

#[test]
fn test_hidden_nodes_removed() {
    let mut ghost = rect("ghost", 10.0, 10.0, 10.0, 10.0);
    ghost.visible = false;
    let root = run(vec![rect("frame", 0.0, 0.0, 100.0, 100.0), ghost]);
    assert!(root.find("ghost").is_none());
}

#[test]
fn test_icon_vectors_become_one_graphic() {
    let root = run(vec![
        rect("button", 0.0, 0.0, 120.0, 40.0),
        Node::vector("stroke-1", BoundingBox::new(10.0, 10.0, 20.0, 20.0)),
        Node::vector("stroke-2", BoundingBox::new(15.0, 15.0, 20.0, 20.0)),
        Node::text("label", BoundingBox::new(50.0, 10.0, 60.0, 20.0), "Send"),
    ]);
    let icon = root
        .descendants()
        .find(|n| n.annotations.vector_group)
        .unwrap();
    assert_eq!(icon.kind, NodeKind::VectorGroup);
    assert_eq!(icon.leaf_count(), 2);
}
