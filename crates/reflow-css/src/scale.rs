//! Design-system scales
//!
//! Each table maps a class suffix to the magnitude it stands for. Magnitudes
//! are in px unless a table says otherwise. Tables are ordered so that the
//! first entry wins a distance tie.

/// One step of a scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEntry {
    /// Class suffix; empty for the bare prefix (`rounded`, `border`, `shadow`)
    pub suffix: &'static str,
    pub value: f64,
}

const fn e(suffix: &'static str, value: f64) -> ScaleEntry {
    ScaleEntry { suffix, value }
}

/// Spacing and sizing scale (padding, margin, gap, inset, width, height)
pub const SPACING: &[ScaleEntry] = &[
    e("0", 0.0),
    e("px", 1.0),
    e("0.5", 2.0),
    e("1", 4.0),
    e("1.5", 6.0),
    e("2", 8.0),
    e("2.5", 10.0),
    e("3", 12.0),
    e("3.5", 14.0),
    e("4", 16.0),
    e("5", 20.0),
    e("6", 24.0),
    e("7", 28.0),
    e("8", 32.0),
    e("9", 36.0),
    e("10", 40.0),
    e("11", 44.0),
    e("12", 48.0),
    e("14", 56.0),
    e("16", 64.0),
    e("20", 80.0),
    e("24", 96.0),
    e("28", 112.0),
    e("32", 128.0),
    e("36", 144.0),
    e("40", 160.0),
    e("44", 176.0),
    e("48", 192.0),
    e("52", 208.0),
    e("56", 224.0),
    e("60", 240.0),
    e("64", 256.0),
    e("72", 288.0),
    e("80", 320.0),
    e("96", 384.0),
];

pub const BORDER_RADIUS: &[ScaleEntry] = &[
    e("none", 0.0),
    e("sm", 2.0),
    e("", 4.0),
    e("md", 6.0),
    e("lg", 8.0),
    e("xl", 12.0),
    e("2xl", 16.0),
    e("3xl", 24.0),
    e("full", 9999.0),
];

pub const BORDER_WIDTH: &[ScaleEntry] = &[
    e("0", 0.0),
    e("", 1.0),
    e("2", 2.0),
    e("4", 4.0),
    e("8", 8.0),
];

pub const FONT_SIZE: &[ScaleEntry] = &[
    e("xs", 12.0),
    e("sm", 14.0),
    e("base", 16.0),
    e("lg", 18.0),
    e("xl", 20.0),
    e("2xl", 24.0),
    e("3xl", 30.0),
    e("4xl", 36.0),
    e("5xl", 48.0),
    e("6xl", 60.0),
    e("7xl", 72.0),
    e("8xl", 96.0),
    e("9xl", 128.0),
];

/// Fixed line heights, in px
pub const LINE_HEIGHT: &[ScaleEntry] = &[
    e("3", 12.0),
    e("4", 16.0),
    e("5", 20.0),
    e("6", 24.0),
    e("7", 28.0),
    e("8", 32.0),
    e("9", 36.0),
    e("10", 40.0),
];

/// Relative line heights, as multiples of the font size
pub const LINE_HEIGHT_RELATIVE: &[ScaleEntry] = &[
    e("none", 1.0),
    e("tight", 1.25),
    e("snug", 1.375),
    e("normal", 1.5),
    e("relaxed", 1.625),
    e("loose", 2.0),
];

/// Letter spacing, in em
pub const LETTER_SPACING: &[ScaleEntry] = &[
    e("tighter", -0.05),
    e("tight", -0.025),
    e("normal", 0.0),
    e("wide", 0.025),
    e("wider", 0.05),
    e("widest", 0.1),
];

pub const FONT_WEIGHT: &[ScaleEntry] = &[
    e("thin", 100.0),
    e("extralight", 200.0),
    e("light", 300.0),
    e("normal", 400.0),
    e("medium", 500.0),
    e("semibold", 600.0),
    e("bold", 700.0),
    e("extrabold", 800.0),
    e("black", 900.0),
];

pub const Z_INDEX: &[ScaleEntry] = &[
    e("0", 0.0),
    e("10", 10.0),
    e("20", 20.0),
    e("30", 30.0),
    e("40", 40.0),
    e("50", 50.0),
];

/// Rotation, in degrees
pub const ROTATION: &[ScaleEntry] = &[
    e("0", 0.0),
    e("1", 1.0),
    e("2", 2.0),
    e("3", 3.0),
    e("6", 6.0),
    e("12", 12.0),
    e("45", 45.0),
    e("90", 90.0),
    e("180", 180.0),
];

/// Opacity, in percent (5 % steps)
pub const OPACITY: &[ScaleEntry] = &[
    e("0", 0.0),
    e("5", 5.0),
    e("10", 10.0),
    e("15", 15.0),
    e("20", 20.0),
    e("25", 25.0),
    e("30", 30.0),
    e("35", 35.0),
    e("40", 40.0),
    e("45", 45.0),
    e("50", 50.0),
    e("55", 55.0),
    e("60", 60.0),
    e("65", 65.0),
    e("70", 70.0),
    e("75", 75.0),
    e("80", 80.0),
    e("85", 85.0),
    e("90", 90.0),
    e("95", 95.0),
    e("100", 100.0),
];

/// Shadow preset described by its vertical offset and blur radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowEntry {
    pub suffix: &'static str,
    pub offset_y: f64,
    pub blur: f64,
}

const fn s(suffix: &'static str, offset_y: f64, blur: f64) -> ShadowEntry {
    ShadowEntry { suffix, offset_y, blur }
}

pub const BOX_SHADOW: &[ShadowEntry] = &[
    s("sm", 1.0, 2.0),
    s("", 1.0, 3.0),
    s("md", 4.0, 6.0),
    s("lg", 10.0, 15.0),
    s("xl", 20.0, 25.0),
    s("2xl", 25.0, 50.0),
];

pub const DROP_SHADOW: &[ShadowEntry] = &[
    s("sm", 1.0, 1.0),
    s("", 1.0, 2.0),
    s("md", 4.0, 3.0),
    s("lg", 10.0, 8.0),
    s("xl", 20.0, 13.0),
    s("2xl", 25.0, 25.0),
];

/// Nearest entry to `value` and its absolute distance; first entry wins ties
pub fn nearest(table: &[ScaleEntry], value: f64) -> Option<(&ScaleEntry, f64)> {
    let mut best: Option<(&ScaleEntry, f64)> = None;
    for entry in table {
        let distance = (entry.value - value).abs();
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((entry, distance)),
        }
    }
    best
}

/// Nearest shadow preset by Manhattan distance over (offset-y, blur)
pub fn nearest_shadow(table: &[ShadowEntry], offset_y: f64, blur: f64) -> Option<(&ShadowEntry, f64)> {
    let mut best: Option<(&ShadowEntry, f64)> = None;
    for entry in table {
        let distance = (entry.offset_y - offset_y).abs() + (entry.blur - blur).abs();
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((entry, distance)),
        }
    }
    best
}
