//! Conversion Engine
//!
//! Entry point tying the pipeline together: validation, grouping, layout
//! inference, pruning and class rendering.

use std::collections::{BTreeMap, HashSet};

use reflow_node::Node;
use serde::Serialize;

use crate::config::{Config, ConfigError, CssFramework};
use crate::context::Context;
use crate::render;

/// Result of one conversion
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    /// Laid-out and pruned tree
    pub root: Node,
    /// Utility classes per node id, when the configuration asks for them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<BTreeMap<String, Vec<String>>>,
}

impl Conversion {
    /// Classes rendered for `id`, if any
    pub fn classes_for(&self, id: &str) -> Option<&[String]> {
        self.classes.as_ref()?.get(id).map(Vec::as_slice)
    }
}

/// Conversion engine
pub struct Engine {
    config: Config,
}

impl Engine {
    /// Create a new engine
    pub fn new(config: Config) -> Self {
        tracing::info!("Reflow Engine {} initialized", crate::VERSION);
        Self { config }
    }

    /// Get engine configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert a flat list of design nodes into a laid-out tree
    pub fn convert(&self, nodes: Vec<Node>) -> Result<Conversion, EngineError> {
        self.config.validate()?;
        if nodes.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        check_unique_ids(&nodes)?;

        let mut context = Context::new(self.config.clone(), &nodes);
        let options = context.layout_options();
        let root = reflow_layout::layout(nodes, context.ids_mut(), &options).ok_or(EngineError::EmptyInput)?;

        let classes = match context.config().css_framework {
            CssFramework::PlainCss => None,
            CssFramework::UtilityClasses => Some(render::class_map(&root)),
        };
        tracing::info!(
            "Converted tree rooted at {} ({} leaves, depth {})",
            root.id,
            root.leaf_count(),
            root.depth()
        );
        Ok(Conversion { root, classes })
    }

    /// Convert a JSON array of design nodes
    pub fn convert_json(&self, json: &str) -> Result<Conversion, EngineError> {
        let nodes: Vec<Node> = serde_json::from_str(json)?;
        self.convert(nodes)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn check_unique_ids(nodes: &[Node]) -> Result<(), EngineError> {
    let mut seen = HashSet::new();
    for node in nodes.iter().flat_map(|n| n.descendants()) {
        if !seen.insert(node.id.as_str()) {
            return Err(EngineError::DuplicateId(node.id.clone()));
        }
    }
    Ok(())
}

/// Engine error
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("No visible nodes to convert")]
    EmptyInput,

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Malformed input: {0}")]
    Json(#[from] serde_json::Error),
}
