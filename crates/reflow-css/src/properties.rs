//! CSS Property Definitions
//!
//! Properties the pipeline emits, and typed parsing of the values it needs
//! to quantize (lengths, angles, colors).

use crate::CssError;

/// Root font size used for px ↔ rem conversion
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Property identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyId {
    // Display & Layout
    Display,
    Position,
    Overflow,

    // Flexbox
    FlexDirection,
    FlexWrap,
    JustifyContent,
    AlignItems,
    Gap,
    RowGap,
    ColumnGap,

    // Box Model
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    Margin,
    MarginTop,
    MarginRight,
    MarginBottom,
    MarginLeft,
    Padding,
    PaddingTop,
    PaddingRight,
    PaddingBottom,
    PaddingLeft,

    // Border
    Border,
    BorderWidth,
    BorderTopWidth,
    BorderRightWidth,
    BorderBottomWidth,
    BorderLeftWidth,
    BorderStyle,
    BorderColor,
    BorderRadius,
    BorderTopLeftRadius,
    BorderTopRightRadius,
    BorderBottomRightRadius,
    BorderBottomLeftRadius,

    // Colors & Background
    Color,
    BackgroundColor,
    Background,
    Fill,
    Stroke,
    Opacity,

    // Text
    FontFamily,
    FontSize,
    FontWeight,
    FontStyle,
    TextAlign,
    TextDecoration,
    TextTransform,
    LineHeight,
    LetterSpacing,

    // Visual
    ZIndex,
    BoxShadow,
    Filter,
    ObjectFit,

    // Positioning
    Top,
    Right,
    Bottom,
    Left,

    // Transform
    Transform,
}

impl PropertyId {
    /// Parse a property name into a PropertyId
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "display" => Self::Display,
            "position" => Self::Position,
            "overflow" => Self::Overflow,

            "flex-direction" => Self::FlexDirection,
            "flex-wrap" => Self::FlexWrap,
            "justify-content" => Self::JustifyContent,
            "align-items" => Self::AlignItems,
            "gap" => Self::Gap,
            "row-gap" => Self::RowGap,
            "column-gap" => Self::ColumnGap,

            "width" => Self::Width,
            "height" => Self::Height,
            "min-width" => Self::MinWidth,
            "min-height" => Self::MinHeight,
            "max-width" => Self::MaxWidth,
            "max-height" => Self::MaxHeight,

            "margin" => Self::Margin,
            "margin-top" => Self::MarginTop,
            "margin-right" => Self::MarginRight,
            "margin-bottom" => Self::MarginBottom,
            "margin-left" => Self::MarginLeft,

            "padding" => Self::Padding,
            "padding-top" => Self::PaddingTop,
            "padding-right" => Self::PaddingRight,
            "padding-bottom" => Self::PaddingBottom,
            "padding-left" => Self::PaddingLeft,

            "border" => Self::Border,
            "border-width" => Self::BorderWidth,
            "border-top-width" => Self::BorderTopWidth,
            "border-right-width" => Self::BorderRightWidth,
            "border-bottom-width" => Self::BorderBottomWidth,
            "border-left-width" => Self::BorderLeftWidth,
            "border-style" => Self::BorderStyle,
            "border-color" => Self::BorderColor,
            "border-radius" => Self::BorderRadius,
            "border-top-left-radius" => Self::BorderTopLeftRadius,
            "border-top-right-radius" => Self::BorderTopRightRadius,
            "border-bottom-right-radius" => Self::BorderBottomRightRadius,
            "border-bottom-left-radius" => Self::BorderBottomLeftRadius,

            "color" => Self::Color,
            "background-color" => Self::BackgroundColor,
            "background" => Self::Background,
            "fill" => Self::Fill,
            "stroke" => Self::Stroke,
            "opacity" => Self::Opacity,

            "font-family" => Self::FontFamily,
            "font-size" => Self::FontSize,
            "font-weight" => Self::FontWeight,
            "font-style" => Self::FontStyle,
            "text-align" => Self::TextAlign,
            "text-decoration" => Self::TextDecoration,
            "text-transform" => Self::TextTransform,
            "line-height" => Self::LineHeight,
            "letter-spacing" => Self::LetterSpacing,

            "z-index" => Self::ZIndex,
            "box-shadow" => Self::BoxShadow,
            "filter" => Self::Filter,
            "object-fit" => Self::ObjectFit,

            "top" => Self::Top,
            "right" => Self::Right,
            "bottom" => Self::Bottom,
            "left" => Self::Left,

            "transform" => Self::Transform,

            _ => return None,
        })
    }
}

/// Length units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Em,
    Rem,
    Percent,
    Vw,
    Vh,
    Deg,
    Rad,
    Turn,
    /// Bare number
    None,
}

impl LengthUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix.to_ascii_lowercase().as_str() {
            "" => Self::None,
            "px" => Self::Px,
            "em" => Self::Em,
            "rem" => Self::Rem,
            "%" => Self::Percent,
            "vw" => Self::Vw,
            "vh" => Self::Vh,
            "deg" => Self::Deg,
            "rad" => Self::Rad,
            "turn" => Self::Turn,
            _ => return None,
        })
    }
}

/// CSS length (or angle / bare number) value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self { value, unit: LengthUnit::Px }
    }

    pub fn em(value: f64) -> Self {
        Self { value, unit: LengthUnit::Em }
    }

    /// Parse `12px`, `1.5rem`, `-4`, `50%`, `45deg` and friends
    pub fn parse(input: &str) -> Result<Self, CssError> {
        let s = input.trim();
        let split = s
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || ((c == '-' || c == '+') && i == 0)))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        let (number, suffix) = s.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| CssError::InvalidLength(input.to_string()))?;
        if !value.is_finite() {
            return Err(CssError::InvalidLength(input.to_string()));
        }
        let unit = LengthUnit::from_suffix(suffix)
            .ok_or_else(|| CssError::UnsupportedUnit(suffix.to_string()))?;
        Ok(Self { value, unit })
    }

    /// Absolute size in px, for units that have one without a font context
    pub fn to_px(&self) -> Option<f64> {
        match self.unit {
            LengthUnit::Px | LengthUnit::None => Some(self.value),
            LengthUnit::Rem => Some(self.value * ROOT_FONT_SIZE),
            _ => None,
        }
    }

    /// Size in px, resolving `em` against `font_size`
    pub fn to_px_with_font(&self, font_size: f64) -> Option<f64> {
        match self.unit {
            LengthUnit::Em => Some(self.value * font_size),
            _ => self.to_px(),
        }
    }

    /// Angle in degrees
    pub fn to_degrees(&self) -> Option<f64> {
        match self.unit {
            LengthUnit::Deg | LengthUnit::None => Some(self.value),
            LengthUnit::Rad => Some(self.value.to_degrees()),
            LengthUnit::Turn => Some(self.value * 360.0),
            _ => None,
        }
    }
}

/// Format a pixel amount the way the pipeline writes it (`12px`, `12.5px`)
pub fn format_px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Format a number with at most two decimals and no trailing zeros
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut s = format!("{:.2}", rounded);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// CSS color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const TRANSPARENT: Color = Color { r: 0, g: 0, b: 0, a: 0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as a fraction in `[0, 1]`
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Parse any supported color syntax: hex, `rgb()`, `rgba()`, or a name
    pub fn parse(input: &str) -> Result<Self, CssError> {
        let s = input.trim().to_ascii_lowercase();
        let parsed = if s.starts_with('#') {
            Self::from_hex(&s)
        } else if let Some(args) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
            Self::from_rgb_args(args.trim_end_matches(')'))
        } else {
            Self::from_name(&s)
        };
        parsed.ok_or_else(|| CssError::InvalidColor(input.to_string()))
    }

    /// Parse a hex color (#RGB, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse the comma separated arguments of `rgb()` / `rgba()`
    fn from_rgb_args(args: &str) -> Option<Self> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return None;
        }
        let channel = |p: &str| -> Option<u8> {
            let v: f64 = p.parse().ok()?;
            Some(v.round().clamp(0.0, 255.0) as u8)
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = match parts.get(3) {
            Some(p) => {
                let alpha = match p.strip_suffix('%') {
                    Some(pct) => pct.parse::<f64>().ok()? / 100.0,
                    None => p.parse::<f64>().ok()?,
                };
                (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            None => 255,
        };
        Some(Self::rgba(r, g, b, a))
    }

    /// Parse a named color
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "transparent" => Self::TRANSPARENT,
            "black" => Self::BLACK,
            "white" => Self::WHITE,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" | "aqua" => Self::rgb(0, 255, 255),
            "magenta" | "fuchsia" => Self::rgb(255, 0, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "silver" => Self::rgb(192, 192, 192),
            "maroon" => Self::rgb(128, 0, 0),
            "olive" => Self::rgb(128, 128, 0),
            "lime" => Self::rgb(0, 255, 0),
            "navy" => Self::rgb(0, 0, 128),
            "purple" => Self::rgb(128, 0, 128),
            "teal" => Self::rgb(0, 128, 128),
            "orange" => Self::rgb(255, 165, 0),
            _ => return None,
        })
    }

    /// Manhattan distance over the RGB channels (alpha ignored)
    pub fn manhattan(&self, other: &Color) -> u32 {
        let d = |a: u8, b: u8| u32::from(a.abs_diff(b));
        d(self.r, other.r) + d(self.g, other.g) + d(self.b, other.b)
    }
}
