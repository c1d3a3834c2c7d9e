//! Reflow CSS Values & Utility Classes
//!
//! Typed parsing of the CSS values the layout pipeline writes, the
//! design-system scales, and quantization of declarations into utility
//! classes.

pub mod palette;
pub mod properties;
pub mod scale;
pub mod tailwind;

pub use palette::{nearest_color, PaletteColor, PALETTE};
pub use properties::{format_number, format_px, Color, Length, LengthUnit, PropertyId, ROOT_FONT_SIZE};
pub use tailwind::{utility_class, utility_classes, ArbitraryValue, SiblingAttributes};

/// CSS value error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CssError {
    #[error("Invalid length: {0}")]
    InvalidLength(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("Unsupported unit: {0:?}")]
    UnsupportedUnit(String),
}
