//! Flexbox Properties
//!
//! The subset of CSS Flexbox the inference stage can produce, and how each
//! value is written into a layout table.

use reflow_node::Axis;

/// Primary axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlexDirection {
    #[default]
    Row,
    Column,
}

impl FlexDirection {
    /// Axis children are distributed along
    pub fn main_axis(&self) -> Axis {
        match self {
            Self::Row => Axis::X,
            Self::Column => Axis::Y,
        }
    }

    pub fn cross_axis(&self) -> Axis {
        self.main_axis().cross()
    }

    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "row" => Some(Self::Row),
            "column" => Some(Self::Column),
            _ => None,
        }
    }
}

/// Justify content (main axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
}

impl JustifyContent {
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::FlexEnd => "flex-end",
            Self::Center => "center",
            Self::SpaceBetween => "space-between",
        }
    }

    pub fn from_css(value: &str) -> Option<Self> {
        match value {
            "flex-start" => Some(Self::FlexStart),
            "flex-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            _ => None,
        }
    }
}

/// Align items (cross axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    #[default]
    Center,
}

impl AlignItems {
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::FlexStart => "flex-start",
            Self::FlexEnd => "flex-end",
            Self::Center => "center",
        }
    }
}

/// Inferred container properties of one flex parent
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlexContainerStyle {
    /// Main axis direction
    pub direction: FlexDirection,
    /// Main axis alignment
    pub justify_content: JustifyContent,
    /// Cross axis alignment
    pub align_items: AlignItems,
    /// Uniform spacing between items, when there is one
    pub gap: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_axes() {
        assert_eq!(FlexDirection::Row.main_axis(), Axis::X);
        assert_eq!(FlexDirection::Column.main_axis(), Axis::Y);
        assert_eq!(FlexDirection::Column.cross_axis(), Axis::X);
    }

    #[test]
    fn test_css_round_trip() {
        for justify in [
            JustifyContent::FlexStart,
            JustifyContent::FlexEnd,
            JustifyContent::Center,
            JustifyContent::SpaceBetween,
        ] {
            assert_eq!(JustifyContent::from_css(justify.css_value()), Some(justify));
        }
        assert_eq!(FlexDirection::from_css("column"), Some(FlexDirection::Column));
        assert_eq!(FlexDirection::from_css("row-reverse"), None);
    }
}
