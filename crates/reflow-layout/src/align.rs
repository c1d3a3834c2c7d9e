//! Justify-content and align-items inference
//!
//! Children are projected onto the main axis and merged into bands; the
//! number and spacing of bands decides justify-content. Align-items is a
//! vote where each child reports which way it leans inside the parent's
//! cross extent.

use reflow_node::{Line, RelativePosition};

use crate::flex::{AlignItems, JustifyContent};

/// Edge distance under which a child touches its parent
pub const EDGE_TOLERANCE: f64 = 2.0;
/// Share of the parent length within which a lone band counts as centered
pub const CENTER_RATIO: f64 = 0.2;
/// Cross-axis vote threshold for parents up to [`LARGE_PARENT`] px
pub const ALIGN_RATIO: f64 = 0.2;
/// Cross-axis vote threshold for parents longer than [`LARGE_PARENT`] px
pub const ALIGN_RATIO_LARGE: f64 = 0.15;
pub const LARGE_PARENT: f64 = 100.0;

/// Merge projections into bands ("target lines"), ascending
pub fn target_lines(mut lines: Vec<Line>) -> Vec<Line> {
    lines.sort_by(|a, b| a.lower.total_cmp(&b.lower));
    let mut bands: Vec<Line> = Vec::with_capacity(lines.len());
    for line in lines {
        match bands.last_mut() {
            Some(band) if band.overlaps(&line, 0.0) => *band = band.union(&line),
            _ => bands.push(line),
        }
    }
    bands
}

/// Main-axis distribution from the bands inside `parent`
pub fn infer_justify(parent: &Line, bands: &[Line], gap_uniformity_ratio: f64) -> JustifyContent {
    match bands {
        [] => JustifyContent::FlexStart,
        [band] => justify_single(parent, band),
        [_, _] => JustifyContent::SpaceBetween,
        _ => {
            let gaps: Vec<f64> = bands.windows(2).map(|w| w[0].gap_to(&w[1])).collect();
            if is_uniform(&gaps, gap_uniformity_ratio) {
                JustifyContent::SpaceBetween
            } else {
                JustifyContent::FlexStart
            }
        }
    }
}

fn justify_single(parent: &Line, band: &Line) -> JustifyContent {
    let at_start = (band.lower - parent.lower).abs() <= EDGE_TOLERANCE;
    let at_end = (parent.upper - band.upper).abs() <= EDGE_TOLERANCE;
    match (at_start, at_end) {
        (true, true) => JustifyContent::Center,
        (true, false) => JustifyContent::FlexStart,
        (false, true) => JustifyContent::FlexEnd,
        (false, false) if parent.symmetric_difference(band.mid()) <= CENTER_RATIO * parent.length() => {
            JustifyContent::Center
        }
        (false, false) if band.mid() < parent.mid() => JustifyContent::FlexStart,
        (false, false) => JustifyContent::FlexEnd,
    }
}

/// Every value within `ratio` of the average
pub fn is_uniform(values: &[f64], ratio: f64) -> bool {
    if values.is_empty() {
        return false;
    }
    let average = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().all(|v| (v - average).abs() <= ratio * average.abs())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vote {
    NoGap,
    Centered,
    TippingLeft,
    TippingRight,
}

fn vote(parent: &Line, child: &Line, threshold: f64) -> Vote {
    let leading = child.lower - parent.lower;
    let trailing = parent.upper - child.upper;
    if leading.abs() <= EDGE_TOLERANCE && trailing.abs() <= EDGE_TOLERANCE {
        return Vote::NoGap;
    }
    match child.position_of(parent.mid()) {
        // Midline after the child: the child sits in the leading half
        RelativePosition::Right => Vote::TippingLeft,
        RelativePosition::Left => Vote::TippingRight,
        RelativePosition::Contain if (leading - trailing).abs() <= threshold => Vote::Centered,
        RelativePosition::Contain if leading < trailing => Vote::TippingLeft,
        RelativePosition::Contain => Vote::TippingRight,
    }
}

/// Cross-axis alignment from each child's cross projection
pub fn infer_align(parent: &Line, children: &[Line]) -> AlignItems {
    let ratio = if parent.length() > LARGE_PARENT {
        ALIGN_RATIO_LARGE
    } else {
        ALIGN_RATIO
    };
    let threshold = ratio * parent.length();
    let votes: Vec<Vote> = children.iter().map(|c| vote(parent, c, threshold)).collect();

    if votes.iter().all(|v| matches!(v, Vote::NoGap | Vote::Centered)) {
        AlignItems::Center
    } else if votes.contains(&Vote::TippingLeft) {
        AlignItems::FlexStart
    } else if votes.contains(&Vote::TippingRight) {
        AlignItems::FlexEnd
    } else {
        AlignItems::Center
    }
}
