//! Integration tests - Full pipeline from design nodes to classes
//!
//! Tests the complete workflow: JSON → nodes → grouping → layout → prune → classes

use std::collections::HashSet;

use reflow_engine::node::{BoundingBox, Node};
use reflow_engine::{Config, ConfigError, CssFramework, Engine, EngineError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn utility_engine() -> Engine {
    Engine::new(Config {
        css_framework: CssFramework::UtilityClasses,
        ..Config::default()
    })
}

fn rect(id: &str, x: f64, y: f64, w: f64, h: f64) -> Node {
    Node::visible(id, BoundingBox::new(x, y, w, h))
}

const TWO_LABELS: &str = r##"[
    {
        "id": "a",
        "kind": { "type": "text", "content": "Left" },
        "boundingBox": {
            "leftTop": { "x": 0, "y": 0 }, "rightTop": { "x": 40, "y": 0 },
            "leftBot": { "x": 0, "y": 16 }, "rightBot": { "x": 40, "y": 16 }
        },
        "style": { "color": "#000000", "font-size": "14px" }
    },
    {
        "id": "group-1",
        "kind": { "type": "text", "content": "Right" },
        "boundingBox": {
            "leftTop": { "x": 200, "y": 0 }, "rightTop": { "x": 240, "y": 0 },
            "leftBot": { "x": 200, "y": 16 }, "rightBot": { "x": 240, "y": 16 }
        }
    }
]"##;

// ============================================================================
// FULL PIPELINE TESTS
// ============================================================================

#[test]
fn test_json_to_tree() -> anyhow::Result<()> {
    init_tracing();
    let conversion = Engine::default().convert_json(TWO_LABELS)?;
    let root = &conversion.root;

    assert_eq!(root.leaf_count(), 2);
    assert!(root.find("a").is_some());
    assert!(root.find("group-1").is_some());

    let mut seen = HashSet::new();
    assert!(root.descendants().all(|n| seen.insert(n.id.clone())), "ids collide");
    Ok(())
}

#[test]
fn test_utility_classes_rendered() -> anyhow::Result<()> {
    init_tracing();
    let nodes = vec![
        rect("row", 0.0, 0.0, 200.0, 20.0)
            .with_style("border-radius", "5px")
            .with_style("background-color", "#ffffff"),
        rect("left", 0.0, 0.0, 99.0, 20.0).with_style("border-radius", "37px"),
        rect("right", 101.0, 0.0, 99.0, 20.0),
    ];
    let conversion = utility_engine().convert(nodes)?;
    assert_eq!(conversion.root.id, "row");

    let row = conversion.classes_for("row").unwrap();
    for expected in ["bg-white", "rounded", "h-5", "flex"] {
        assert!(row.iter().any(|c| c == expected), "{expected} missing from {row:?}");
    }
    assert!(!row.iter().any(|c| c.starts_with("w-")), "width should be pruned: {row:?}");

    let left = conversion.classes_for("left").unwrap();
    assert!(left.iter().any(|c| c == "rounded-[37px]"));
    assert!(left.iter().any(|c| c == "w-[99px]"));
    Ok(())
}

#[test]
fn test_plain_css_output_serializes() -> anyhow::Result<()> {
    let conversion = Engine::default().convert_json(TWO_LABELS)?;
    let value = serde_json::to_value(&conversion)?;
    assert!(value.get("root").is_some());
    assert!(value.get("classes").is_none());
    Ok(())
}

#[test]
fn test_class_map_covers_every_node() -> anyhow::Result<()> {
    let conversion = utility_engine().convert_json(TWO_LABELS)?;
    let classes = conversion.classes.as_ref().unwrap();
    for node in conversion.root.descendants() {
        assert!(classes.contains_key(&node.id), "{} has no entry", node.id);
    }
    assert!(classes["a"].iter().any(|c| c == "text-black"));
    assert!(classes["a"].iter().any(|c| c == "text-sm"));
    Ok(())
}

// ============================================================================
// ERROR TESTS
// ============================================================================

#[test]
fn test_empty_input() {
    let err = Engine::default().convert(Vec::new()).unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput));
}

#[test]
fn test_only_hidden_nodes() {
    let mut hidden = rect("ghost", 0.0, 0.0, 10.0, 10.0);
    hidden.visible = false;
    let err = Engine::default().convert(vec![hidden]).unwrap_err();
    assert!(matches!(err, EngineError::EmptyInput));
}

#[test]
fn test_duplicate_id() {
    let nodes = vec![rect("same", 0.0, 0.0, 10.0, 10.0), rect("same", 20.0, 0.0, 10.0, 10.0)];
    let err = utility_engine().convert(nodes).unwrap_err();
    assert!(matches!(err, EngineError::DuplicateId(ref id) if id == "same"));
}

#[test]
fn test_malformed_json() {
    let err = Engine::default().convert_json("[{ \"id\": 1 }]").unwrap_err();
    assert!(matches!(err, EngineError::Json(_)));
}

#[test]
fn test_config_from_json_drives_engine() -> anyhow::Result<()> {
    let config = Config::from_json(r#"{ "cssFramework": "utility-classes", "tolerances": { "overlapBuffer": 1 } }"#)?;
    let conversion = Engine::new(config).convert_json(TWO_LABELS)?;
    assert!(conversion.classes.is_some());
    Ok(())
}

#[test]
fn test_bad_config_surfaces_error() {
    let err = Config::from_json(r#"{ "tolerances": { "paddingThreshold": -4 } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidTolerance { name: "paddingThreshold", .. }));
}
