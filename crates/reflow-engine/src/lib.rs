//! Reflow Engine
//!
//! Turns absolutely positioned design nodes into a flexbox tree with CSS
//! declarations and, optionally, utility classes.

mod config;
mod context;
mod engine;
mod render;

pub use config::{Config, ConfigError, CssFramework, Tolerances};
pub use context::Context;
pub use engine::{Conversion, Engine, EngineError};
pub use render::{class_map, node_classes};

pub use reflow_css as css;
pub use reflow_layout as layout;
pub use reflow_node as node;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
