//! Comprehensive tests for reflow-css
//!
//! Quantization edge cases and the arbitrary-value contract.

use std::collections::BTreeMap;

use reflow_css::properties::{Color, Length, LengthUnit};
use reflow_css::scale::{self, SPACING};
use reflow_css::{nearest_color, utility_class, utility_classes, ArbitraryValue, SiblingAttributes};

fn class(property: &str, value: &str) -> Option<String> {
    utility_class(property, value, &SiblingAttributes::default())
}

#[test]
fn test_radius_scale_example() {
    assert_eq!(class("border-radius", "5px").as_deref(), Some("rounded"));
    assert_eq!(class("border-radius", "37px").as_deref(), Some("rounded-[37px]"));
}

#[test]
fn test_radius_per_corner() {
    assert_eq!(class("border-top-left-radius", "8px").as_deref(), Some("rounded-tl-lg"));
    assert_eq!(class("border-bottom-right-radius", "0px").as_deref(), Some("rounded-br-none"));
}

#[test]
fn test_arbitrary_literal_recovers_value() {
    // Every value far from the spacing scale must survive verbatim
    for px in [52.0, 50.5, 71.0, 101.0, 137.25, 203.0, 333.0] {
        let (_, distance) = scale::nearest(SPACING, px).unwrap();
        assert!(distance > 2.0, "{px} is on the scale");

        let value = format!("{}px", px);
        let token = class("width", &value).unwrap();
        let parsed = ArbitraryValue::parse(&token).unwrap();
        assert_eq!(parsed.prefix, "w");
        let length = Length::parse(&parsed.literal).unwrap();
        assert_eq!(length.unit, LengthUnit::Px);
        assert_eq!(length.value, px);
    }
}

#[test]
fn test_arbitrary_literal_with_spaces() {
    let token = class("box-shadow", "0px 40px 80px rgba(0, 0, 0, 0.5)").unwrap();
    assert_eq!(token, "shadow-[0px_40px_80px_rgba(0,0,0,0.5)]");
    let parsed = ArbitraryValue::parse(&token).unwrap();
    assert_eq!(parsed.literal, "0px 40px 80px rgba(0,0,0,0.5)");
}

#[test]
fn test_arbitrary_parse_rejects_plain_class() {
    assert!(ArbitraryValue::parse("rounded-lg").is_none());
    assert!(ArbitraryValue::parse("w-[]").is_none());
}

#[test]
fn test_color_alpha_suffix() {
    assert_eq!(class("background-color", "rgba(255, 255, 255, 0.1)").as_deref(), Some("bg-white/10"));
    assert_eq!(class("color", "rgba(0, 0, 0, 1)").as_deref(), Some("text-black"));
    assert_eq!(class("background-color", "transparent").as_deref(), Some("bg-transparent"));
}

#[test]
fn test_color_near_palette() {
    // blue-500 is #3b82f6; a few units off still snaps
    assert_eq!(class("color", "#3d80f4").as_deref(), Some("text-blue-500"));
    let (entry, distance) = nearest_color(&Color::rgb(0x3d, 0x80, 0xf4));
    assert_eq!(entry.name, "blue-500");
    assert!(distance <= 30);
}

#[test]
fn test_fill_and_stroke_prefixes() {
    assert_eq!(class("fill", "#ffffff").as_deref(), Some("fill-white"));
    assert_eq!(class("stroke", "#000").as_deref(), Some("stroke-black"));
}

#[test]
fn test_gradient_background_is_arbitrary() {
    let token = class("background", "linear-gradient(90deg, #fff, #000)").unwrap();
    assert!(token.starts_with("bg-["));
}

#[test]
fn test_inset_classes() {
    assert_eq!(class("top", "16px").as_deref(), Some("top-4"));
    assert_eq!(class("left", "-8px").as_deref(), Some("-left-2"));
    assert_eq!(class("left", "0px").as_deref(), Some("left-0"));
}

#[test]
fn test_gap_variants() {
    assert_eq!(class("gap", "12px").as_deref(), Some("gap-3"));
    assert_eq!(class("row-gap", "24px").as_deref(), Some("gap-y-6"));
    assert_eq!(class("column-gap", "8px").as_deref(), Some("gap-x-2"));
}

#[test]
fn test_border_widths() {
    assert_eq!(class("border-width", "1px").as_deref(), Some("border"));
    assert_eq!(class("border-top-width", "2px").as_deref(), Some("border-t-2"));
    assert_eq!(class("border-left-width", "6px").as_deref(), Some("border-l-[6px]"));
    assert_eq!(class("border-style", "dashed").as_deref(), Some("border-dashed"));
}

#[test]
fn test_letter_spacing_default_font_size() {
    // -0.4px at 16px is -0.025em
    assert_eq!(class("letter-spacing", "-0.4px").as_deref(), Some("tracking-tight"));
    assert_eq!(class("letter-spacing", "0.1em").as_deref(), Some("tracking-widest"));
    assert_eq!(class("letter-spacing", "0.3em").as_deref(), Some("tracking-[0.3em]"));
}

#[test]
fn test_line_height_relative_and_fixed() {
    assert_eq!(class("line-height", "150%").as_deref(), Some("leading-normal"));
    assert_eq!(class("line-height", "2").as_deref(), Some("leading-loose"));
    assert_eq!(class("line-height", "57px").as_deref(), Some("leading-[57px]"));
}

#[test]
fn test_text_keywords() {
    assert_eq!(class("text-align", "center").as_deref(), Some("text-center"));
    assert_eq!(class("text-transform", "uppercase").as_deref(), Some("uppercase"));
    assert_eq!(class("text-decoration", "none").as_deref(), Some("no-underline"));
    assert_eq!(class("font-style", "italic").as_deref(), Some("italic"));
}

#[test]
fn test_unsupported_values_dropped() {
    assert_eq!(class("display", "table-cell"), None);
    assert_eq!(class("flex-direction", "sideways"), None);
    assert_eq!(class("opacity", "12px"), None);
}

#[test]
fn test_table_rendering_uses_parent_font() {
    let own = BTreeMap::from([("letter-spacing".to_string(), "2px".to_string())]);
    let parent = BTreeMap::from([("font-size".to_string(), "40px".to_string())]);
    let attrs = SiblingAttributes::new(Some(&own), Some(&parent));
    assert_eq!(utility_classes(&own, &attrs), vec!["tracking-wider"]);
}
