//! Engine Configuration

use reflow_layout::LayoutOptions;
use serde::{Deserialize, Serialize};

/// Output vocabulary for style declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssFramework {
    /// Plain CSS declarations only
    #[default]
    PlainCss,
    /// Declarations are also quantized into utility classes
    UtilityClasses,
}

/// Numeric overrides for the layout heuristics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tolerances {
    /// Padding at or below this many px is omitted
    pub padding_threshold: f64,
    /// Gaps within this share of their average count as uniform
    pub gap_uniformity_ratio: f64,
    /// Shrink applied to projections before overlap tests, in px
    pub overlap_buffer: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        let options = LayoutOptions::default();
        Self {
            padding_threshold: options.padding_threshold,
            gap_uniformity_ratio: options.gap_uniformity_ratio,
            overlap_buffer: options.overlap_buffer,
        }
    }
}

impl Tolerances {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            padding_threshold: self.padding_threshold,
            gap_uniformity_ratio: self.gap_uniformity_ratio,
            overlap_buffer: self.overlap_buffer,
        }
    }
}

/// Engine configuration options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Whether utility classes are rendered
    pub css_framework: CssFramework,

    /// Layout heuristic overrides
    pub tolerances: Tolerances,
}

impl Config {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.tolerances;
        for (name, value) in [
            ("paddingThreshold", t.padding_threshold),
            ("overlapBuffer", t.overlap_buffer),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTolerance { name, value });
            }
        }
        if !(0.0..=1.0).contains(&t.gap_uniformity_ratio) {
            return Err(ConfigError::RatioOutOfRange(t.gap_uniformity_ratio));
        }
        Ok(())
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Tolerance {name} must be a non-negative number, got {value}")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("gapUniformityRatio must lie in [0, 1], got {0}")]
    RatioOutOfRange(f64),

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
