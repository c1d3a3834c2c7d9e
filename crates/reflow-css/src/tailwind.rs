//! Utility-Class Quantization
//!
//! Maps a CSS property/value pair onto the nearest class of a fixed
//! design-system scale. When the nearest scale step is further away than the
//! property's tolerance, the value is emitted verbatim as an arbitrary-value
//! token instead (`w-[37px]`), so nothing is silently rounded away.
//!
//! All functions here are pure; there is no cache and no global state.

use std::collections::BTreeMap;

use crate::palette::nearest_color;
use crate::properties::{Color, Length, LengthUnit, PropertyId as P, ROOT_FONT_SIZE};
use crate::scale::{self, ScaleEntry, ShadowEntry};

pub const SIZE_TOLERANCE_PX: f64 = 2.0;
pub const SPACING_TOLERANCE_PX: f64 = 2.0;
pub const BORDER_RADIUS_TOLERANCE_PX: f64 = 2.0;
pub const BORDER_WIDTH_TOLERANCE_PX: f64 = 1.0;
pub const FONT_SIZE_TOLERANCE_PX: f64 = 2.0;
pub const LINE_HEIGHT_TOLERANCE_PX: f64 = 2.0;
pub const LINE_HEIGHT_TOLERANCE_RELATIVE: f64 = 0.1;
pub const LETTER_SPACING_TOLERANCE_EM: f64 = 0.0125;
pub const FONT_WEIGHT_TOLERANCE: f64 = 50.0;
pub const Z_INDEX_TOLERANCE: f64 = 3.0;
pub const ROTATION_TOLERANCE_DEG: f64 = 4.0;
pub const SHADOW_TOLERANCE_PX: f64 = 10.0;
pub const COLOR_TOLERANCE: u32 = 30;
const FRACTION_TOLERANCE_PERCENT: f64 = 0.5;

/// Width/height fractions, in percent
const FRACTIONS: &[ScaleEntry] = &[
    ScaleEntry { suffix: "1/5", value: 20.0 },
    ScaleEntry { suffix: "1/4", value: 25.0 },
    ScaleEntry { suffix: "1/3", value: 100.0 / 3.0 },
    ScaleEntry { suffix: "2/5", value: 40.0 },
    ScaleEntry { suffix: "1/2", value: 50.0 },
    ScaleEntry { suffix: "3/5", value: 60.0 },
    ScaleEntry { suffix: "2/3", value: 200.0 / 3.0 },
    ScaleEntry { suffix: "3/4", value: 75.0 },
    ScaleEntry { suffix: "4/5", value: 80.0 },
    ScaleEntry { suffix: "full", value: 100.0 },
];

/// Other declarations visible while rendering one property: those of the
/// element itself and those of its parent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SiblingAttributes<'a> {
    pub own: Option<&'a BTreeMap<String, String>>,
    pub parent: Option<&'a BTreeMap<String, String>>,
}

impl<'a> SiblingAttributes<'a> {
    pub fn new(
        own: Option<&'a BTreeMap<String, String>>,
        parent: Option<&'a BTreeMap<String, String>>,
    ) -> Self {
        Self { own, parent }
    }

    /// Resolved font size in px: own declaration, else parent's, else root
    pub fn font_size_px(&self) -> f64 {
        [self.own, self.parent]
            .into_iter()
            .flatten()
            .filter_map(|table| table.get("font-size"))
            .filter_map(|v| Length::parse(v).ok()?.to_px())
            .find(|px| *px > 0.0)
            .unwrap_or(ROOT_FONT_SIZE)
    }
}

/// An arbitrary-value token split back into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitraryValue {
    pub prefix: String,
    pub literal: String,
}

impl ArbitraryValue {
    /// Parse `prefix-[literal]`, restoring `_` to spaces
    pub fn parse(class: &str) -> Option<Self> {
        let inner = class.strip_suffix(']')?;
        let open = inner.find("-[")?;
        let literal = inner[open + 2..].replace('_', " ");
        if literal.is_empty() {
            return None;
        }
        Some(Self {
            prefix: inner[..open].to_string(),
            literal,
        })
    }
}

/// Quantize one declaration into a class string.
///
/// Returns `None` for properties or values with no utility-class form; the
/// caller drops those rather than failing. Some declarations (border
/// shorthands, padding shorthands) yield several space-separated classes.
pub fn utility_class(property: &str, value: &str, attrs: &SiblingAttributes<'_>) -> Option<String> {
    let Some(id) = P::from_name(property) else {
        tracing::trace!("No utility class for property {}", property);
        return None;
    };
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let class = match id {
        P::Display => keyword_display(value)?,
        P::Position => keyword(value, &["static", "relative", "absolute", "fixed", "sticky"])?.to_string(),
        P::Overflow => format!("overflow-{}", keyword(value, &["visible", "hidden", "scroll", "auto", "clip"])?),
        P::FlexDirection => match value {
            "row" => "flex-row".to_string(),
            "column" => "flex-col".to_string(),
            "row-reverse" => "flex-row-reverse".to_string(),
            "column-reverse" => "flex-col-reverse".to_string(),
            _ => return None,
        },
        P::FlexWrap => match value {
            "wrap" => "flex-wrap".to_string(),
            "nowrap" => "flex-nowrap".to_string(),
            "wrap-reverse" => "flex-wrap-reverse".to_string(),
            _ => return None,
        },
        P::JustifyContent => match value {
            "flex-start" | "start" => "justify-start".to_string(),
            "flex-end" | "end" => "justify-end".to_string(),
            "center" => "justify-center".to_string(),
            "space-between" => "justify-between".to_string(),
            "space-around" => "justify-around".to_string(),
            "space-evenly" => "justify-evenly".to_string(),
            _ => return None,
        },
        P::AlignItems => match value {
            "flex-start" | "start" => "items-start".to_string(),
            "flex-end" | "end" => "items-end".to_string(),
            "center" => "items-center".to_string(),
            "stretch" => "items-stretch".to_string(),
            "baseline" => "items-baseline".to_string(),
            _ => return None,
        },
        P::Gap => spacing_class("gap", value, false),
        P::RowGap => spacing_class("gap-y", value, false),
        P::ColumnGap => spacing_class("gap-x", value, false),

        P::Width => size_class("w", value),
        P::Height => size_class("h", value),
        P::MinWidth => size_class("min-w", value),
        P::MinHeight => size_class("min-h", value),
        P::MaxWidth => size_class("max-w", value),
        P::MaxHeight => size_class("max-h", value),

        P::Margin => box_shorthand("m", value, true),
        P::MarginTop => spacing_class("mt", value, true),
        P::MarginRight => spacing_class("mr", value, true),
        P::MarginBottom => spacing_class("mb", value, true),
        P::MarginLeft => spacing_class("ml", value, true),
        P::Padding => box_shorthand("p", value, false),
        P::PaddingTop => spacing_class("pt", value, false),
        P::PaddingRight => spacing_class("pr", value, false),
        P::PaddingBottom => spacing_class("pb", value, false),
        P::PaddingLeft => spacing_class("pl", value, false),

        P::Top => spacing_class("top", value, true),
        P::Right => spacing_class("right", value, true),
        P::Bottom => spacing_class("bottom", value, true),
        P::Left => spacing_class("left", value, true),

        P::Border => border_shorthand(value),
        P::BorderWidth => border_width_class("border", value),
        P::BorderTopWidth => border_width_class("border-t", value),
        P::BorderRightWidth => border_width_class("border-r", value),
        P::BorderBottomWidth => border_width_class("border-b", value),
        P::BorderLeftWidth => border_width_class("border-l", value),
        P::BorderStyle => border_style_class(value)?,
        P::BorderColor => color_class("border", value),
        P::BorderRadius => radius_class("rounded", value),
        P::BorderTopLeftRadius => radius_class("rounded-tl", value),
        P::BorderTopRightRadius => radius_class("rounded-tr", value),
        P::BorderBottomRightRadius => radius_class("rounded-br", value),
        P::BorderBottomLeftRadius => radius_class("rounded-bl", value),

        P::Color => color_class("text", value),
        P::BackgroundColor | P::Background => color_class("bg", value),
        P::Fill => color_class("fill", value),
        P::Stroke => color_class("stroke", value),
        P::Opacity => opacity_class(value)?,

        P::FontFamily => font_family_class(value)?,
        P::FontSize => font_size_class(value),
        P::FontWeight => font_weight_class(value),
        P::FontStyle => match value {
            "italic" | "oblique" => "italic".to_string(),
            "normal" => "not-italic".to_string(),
            _ => return None,
        },
        P::TextAlign => format!("text-{}", keyword(value, &["left", "center", "right", "justify", "start", "end"])?),
        P::TextDecoration => match value {
            "underline" => "underline".to_string(),
            "overline" => "overline".to_string(),
            "line-through" => "line-through".to_string(),
            "none" => "no-underline".to_string(),
            _ => return None,
        },
        P::TextTransform => match value {
            "uppercase" | "lowercase" | "capitalize" => value.to_string(),
            "none" => "normal-case".to_string(),
            _ => return None,
        },
        P::LineHeight => line_height_class(value),
        P::LetterSpacing => letter_spacing_class(value, attrs.font_size_px()),

        P::ZIndex => z_index_class(value),
        P::BoxShadow => shadow_class("shadow", value, scale::BOX_SHADOW),
        P::Filter => {
            let args = function_args(value, "drop-shadow")?;
            shadow_class("drop-shadow", args, scale::DROP_SHADOW)
        }
        P::ObjectFit => format!("object-{}", keyword(value, &["cover", "contain", "fill", "none", "scale-down"])?),
        P::Transform => rotation_class(value)?,
    };
    Some(class)
}

/// Quantize every declaration of a table, in property order
pub fn utility_classes(table: &BTreeMap<String, String>, attrs: &SiblingAttributes<'_>) -> Vec<String> {
    table
        .iter()
        .filter_map(|(property, value)| utility_class(property, value, attrs))
        .flat_map(|classes| classes.split(' ').map(str::to_string).collect::<Vec<_>>())
        .filter(|c| !c.is_empty())
        .collect()
}

// ============================================================================
// Building blocks
// ============================================================================

fn class_name(prefix: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, suffix)
    }
}

/// Escaped arbitrary-value token carrying `literal` verbatim
pub fn arbitrary(prefix: &str, literal: &str) -> String {
    let compact = literal.trim().replace(", ", ",");
    let encoded: String = compact
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{}-[{}]", prefix, encoded)
}

fn keyword<'v>(value: &'v str, allowed: &[&str]) -> Option<&'v str> {
    allowed.contains(&value).then_some(value)
}

fn within<'t>(table: &'t [ScaleEntry], magnitude: f64, tolerance: f64) -> Option<&'t ScaleEntry> {
    match scale::nearest(table, magnitude) {
        Some((entry, distance)) if distance <= tolerance => Some(entry),
        _ => None,
    }
}

/// Px-valued property against a px table; negative values get a `-` prefix
/// when `negatable`
fn px_class(prefix: &str, value: &str, table: &[ScaleEntry], tolerance: f64, negatable: bool) -> String {
    let Some(px) = Length::parse(value).ok().and_then(|l| l.to_px()) else {
        return arbitrary(prefix, value);
    };
    let (sign, magnitude) = if negatable && px < 0.0 { ("-", -px) } else { ("", px) };
    match within(table, magnitude, tolerance) {
        Some(entry) => format!("{}{}", sign, class_name(prefix, entry.suffix)),
        None => arbitrary(prefix, value),
    }
}

/// Split on whitespace outside parentheses
fn split_top_level(value: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && (c == separator || (separator == ' ' && c.is_whitespace())) => {
                if start < i {
                    parts.push(value[start..i].trim());
                }
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    if start < value.len() {
        parts.push(value[start..].trim());
    }
    parts.retain(|p| !p.is_empty());
    parts
}

/// Arguments of `name(...)` when `value` starts with that function
fn function_args<'v>(value: &'v str, name: &str) -> Option<&'v str> {
    let rest = value.trim().strip_prefix(name)?.trim_start().strip_prefix('(')?;
    let close = rest.rfind(')')?;
    Some(rest[..close].trim())
}

// ============================================================================
// Property families
// ============================================================================

fn keyword_display(value: &str) -> Option<String> {
    Some(match value {
        "none" => "hidden".to_string(),
        "flex" | "inline-flex" | "block" | "inline-block" | "inline" | "grid" | "contents" => value.to_string(),
        _ => return None,
    })
}

fn spacing_class(prefix: &str, value: &str, negatable: bool) -> String {
    if value == "auto" {
        return class_name(prefix, "auto");
    }
    px_class(prefix, value, scale::SPACING, SPACING_TOLERANCE_PX, negatable)
}

/// `padding` / `margin` shorthands with one to four values
fn box_shorthand(prefix: &str, value: &str, negatable: bool) -> String {
    let parts = split_top_level(value, ' ');
    let side = |suffix: &str, v: &str| spacing_class(&format!("{}{}", prefix, suffix), v, negatable);
    match parts.as_slice() {
        [all] => spacing_class(prefix, all, negatable),
        [vertical, horizontal] => format!("{} {}", side("y", vertical), side("x", horizontal)),
        [top, horizontal, bottom] => {
            format!("{} {} {}", side("t", top), side("x", horizontal), side("b", bottom))
        }
        [top, right, bottom, left] => format!(
            "{} {} {} {}",
            side("t", top),
            side("r", right),
            side("b", bottom),
            side("l", left)
        ),
        _ => arbitrary(prefix, value),
    }
}

fn size_class(prefix: &str, value: &str) -> String {
    match value {
        "auto" => return class_name(prefix, "auto"),
        "fit-content" => return class_name(prefix, "fit"),
        "min-content" => return class_name(prefix, "min"),
        "max-content" => return class_name(prefix, "max"),
        "100vw" | "100vh" => return class_name(prefix, "screen"),
        _ => {}
    }
    match Length::parse(value) {
        Ok(len) if len.unit == LengthUnit::Percent => {
            match within(FRACTIONS, len.value, FRACTION_TOLERANCE_PERCENT) {
                Some(entry) => class_name(prefix, entry.suffix),
                None => arbitrary(prefix, value),
            }
        }
        _ => px_class(prefix, value, scale::SPACING, SIZE_TOLERANCE_PX, false),
    }
}

fn radius_class(prefix: &str, value: &str) -> String {
    if let Ok(len) = Length::parse(value) {
        if len.unit == LengthUnit::Percent && len.value >= 50.0 {
            return class_name(prefix, "full");
        }
    }
    px_class(prefix, value, scale::BORDER_RADIUS, BORDER_RADIUS_TOLERANCE_PX, false)
}

fn border_width_class(prefix: &str, value: &str) -> String {
    px_class(prefix, value, scale::BORDER_WIDTH, BORDER_WIDTH_TOLERANCE_PX, false)
}

fn border_style_class(value: &str) -> Option<String> {
    let style = keyword(value, &["solid", "dashed", "dotted", "double", "none", "hidden"])?;
    Some(format!("border-{}", style))
}

/// `border: <width> <style> <color>` in any order
fn border_shorthand(value: &str) -> String {
    if value == "none" || value == "0" {
        return "border-0".to_string();
    }
    split_top_level(value, ' ')
        .into_iter()
        .map(|token| {
            if Length::parse(token).is_ok() {
                border_width_class("border", token)
            } else if let Some(style) = border_style_class(token) {
                style
            } else {
                color_class("border", token)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Opacity percentage snapped to the nearest 5 % step
fn opacity_step(percent: f64) -> &'static str {
    scale::nearest(scale::OPACITY, percent.clamp(0.0, 100.0))
        .map(|(entry, _)| entry.suffix)
        .unwrap_or("100")
}

fn color_class(prefix: &str, value: &str) -> String {
    match value {
        "transparent" => return class_name(prefix, "transparent"),
        "currentColor" | "currentcolor" => return class_name(prefix, "current"),
        "inherit" => return class_name(prefix, "inherit"),
        _ => {}
    }
    let Ok(color) = Color::parse(value) else {
        return arbitrary(prefix, value);
    };
    let (entry, distance) = nearest_color(&color);
    if distance > COLOR_TOLERANCE {
        return arbitrary(prefix, value);
    }
    let class = class_name(prefix, entry.name);
    if color.a == 255 {
        return class;
    }
    match opacity_step(color.alpha() * 100.0) {
        "100" => class,
        step => format!("{}/{}", class, step),
    }
}

fn opacity_class(value: &str) -> Option<String> {
    let len = Length::parse(value).ok()?;
    let percent = match len.unit {
        LengthUnit::Percent => len.value,
        LengthUnit::None => len.value * 100.0,
        _ => return None,
    };
    Some(class_name("opacity", opacity_step(percent)))
}

fn font_family_class(value: &str) -> Option<String> {
    let first = split_top_level(value, ',').into_iter().next()?;
    let name = first.trim_matches(|c| c == '"' || c == '\'');
    match name {
        "sans-serif" => Some("font-sans".to_string()),
        "serif" => Some("font-serif".to_string()),
        "monospace" => Some("font-mono".to_string()),
        "" => None,
        _ => Some(arbitrary("font", &format!("'{}'", name))),
    }
}

fn font_size_class(value: &str) -> String {
    px_class("text", value, scale::FONT_SIZE, FONT_SIZE_TOLERANCE_PX, false)
}

fn font_weight_class(value: &str) -> String {
    let weight = match value {
        "normal" => 400.0,
        "bold" => 700.0,
        _ => match value.parse::<f64>() {
            Ok(w) => w,
            Err(_) => return arbitrary("font", value),
        },
    };
    match within(scale::FONT_WEIGHT, weight, FONT_WEIGHT_TOLERANCE) {
        Some(entry) => class_name("font", entry.suffix),
        None => arbitrary("font", value),
    }
}

fn line_height_class(value: &str) -> String {
    if value == "normal" {
        return "leading-normal".to_string();
    }
    let Ok(len) = Length::parse(value) else {
        return arbitrary("leading", value);
    };
    let found = match len.unit {
        LengthUnit::None => within(scale::LINE_HEIGHT_RELATIVE, len.value, LINE_HEIGHT_TOLERANCE_RELATIVE),
        LengthUnit::Percent => {
            within(scale::LINE_HEIGHT_RELATIVE, len.value / 100.0, LINE_HEIGHT_TOLERANCE_RELATIVE)
        }
        _ => len
            .to_px()
            .and_then(|px| within(scale::LINE_HEIGHT, px, LINE_HEIGHT_TOLERANCE_PX)),
    };
    match found {
        Some(entry) => class_name("leading", entry.suffix),
        None => arbitrary("leading", value),
    }
}

fn letter_spacing_class(value: &str, font_size: f64) -> String {
    if value == "normal" {
        return "tracking-normal".to_string();
    }
    let Ok(len) = Length::parse(value) else {
        return arbitrary("tracking", value);
    };
    let em = match len.unit {
        LengthUnit::Percent => Some(len.value / 100.0),
        _ => len.to_px_with_font(font_size).map(|px| px / font_size),
    };
    match em.and_then(|em| within(scale::LETTER_SPACING, em, LETTER_SPACING_TOLERANCE_EM)) {
        Some(entry) => class_name("tracking", entry.suffix),
        None => arbitrary("tracking", value),
    }
}

fn z_index_class(value: &str) -> String {
    if value == "auto" {
        return "z-auto".to_string();
    }
    let Ok(z) = value.parse::<f64>() else {
        return arbitrary("z", value);
    };
    let (sign, magnitude) = if z < 0.0 { ("-", -z) } else { ("", z) };
    match within(scale::Z_INDEX, magnitude, Z_INDEX_TOLERANCE) {
        Some(entry) if entry.suffix == "0" => "z-0".to_string(),
        Some(entry) => format!("{}{}", sign, class_name("z", entry.suffix)),
        None => arbitrary("z", value),
    }
}

fn rotation_class(value: &str) -> Option<String> {
    let args = function_args(value, "rotate")?;
    let Some(degrees) = Length::parse(args).ok().and_then(|l| l.to_degrees()) else {
        return Some(arbitrary("rotate", args));
    };
    let (sign, magnitude) = if degrees < 0.0 { ("-", -degrees) } else { ("", degrees) };
    Some(match within(scale::ROTATION, magnitude, ROTATION_TOLERANCE_DEG) {
        Some(entry) if entry.suffix == "0" => "rotate-0".to_string(),
        Some(entry) => format!("{}{}", sign, class_name("rotate", entry.suffix)),
        None => arbitrary("rotate", args),
    })
}

/// `<x> <y> <blur> [<spread>] [<color>]`, first layer only
fn shadow_class(prefix: &str, value: &str, table: &[ShadowEntry]) -> String {
    if value == "none" {
        return class_name(prefix, "none");
    }
    let Some(first) = split_top_level(value, ',').into_iter().next() else {
        return arbitrary(prefix, value);
    };
    let tokens = split_top_level(first, ' ');
    if tokens.contains(&"inset") {
        return class_name(prefix, "inner");
    }
    let lengths: Vec<f64> = tokens
        .iter()
        .filter_map(|t| Length::parse(t).ok()?.to_px())
        .collect();
    let (offset_y, blur) = match lengths.as_slice() {
        [_, y] => (*y, 0.0),
        [_, y, blur, ..] => (*y, *blur),
        _ => return arbitrary(prefix, value),
    };
    match scale::nearest_shadow(table, offset_y, blur) {
        Some((entry, distance)) if distance <= SHADOW_TOLERANCE_PX => class_name(prefix, entry.suffix),
        _ => arbitrary(prefix, value),
    }
}
