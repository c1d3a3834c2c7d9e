//! Box Model
//!
//! Edge insets between a container and its content, addressed either by
//! physical side or by leading/trailing position along an axis.

use reflow_css::format_px;
use reflow_node::{Axis, BoundingBox, StyleTable};

/// Physical side of a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// First side along `axis`
    pub fn leading(axis: Axis) -> Self {
        match axis {
            Axis::X => Side::Left,
            Axis::Y => Side::Top,
        }
    }

    /// Last side along `axis`
    pub fn trailing(axis: Axis) -> Self {
        match axis {
            Axis::X => Side::Right,
            Axis::Y => Side::Bottom,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// Edge sizes (top, right, bottom, left)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeSizes {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeSizes {
    /// Distances from each edge of `outer` to the matching edge of `inner`
    pub fn between(outer: &BoundingBox, inner: &BoundingBox) -> Self {
        Self {
            top: inner.top() - outer.top(),
            right: outer.right() - inner.right(),
            bottom: outer.bottom() - inner.bottom(),
            left: inner.left() - outer.left(),
        }
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn set(&mut self, side: Side, value: f64) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// Sum of both sides along `axis`
    pub fn along(&self, axis: Axis) -> f64 {
        self.get(Side::leading(axis)) + self.get(Side::trailing(axis))
    }

    /// Read `{prefix}-top` .. `{prefix}-left` px values from a table
    pub fn from_table(table: &StyleTable, prefix: &str) -> Self {
        let mut edges = Self::default();
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            let value = table
                .get(&format!("{}-{}", prefix, side.name()))
                .and_then(|v| reflow_css::Length::parse(v).ok())
                .and_then(|l| l.to_px())
                .unwrap_or(0.0);
            edges.set(side, value);
        }
        edges
    }

    /// Write non-zero sides as `{prefix}-{side}` px values
    pub fn write_to(&self, table: &mut StyleTable, prefix: &str) {
        for side in [Side::Top, Side::Right, Side::Bottom, Side::Left] {
            let value = self.get(side);
            if !is_zero(value) {
                table.insert(format!("{}-{}", prefix, side.name()), format_px(value));
            }
        }
    }
}

/// Whether a px amount renders as zero
pub fn is_zero(value: f64) -> bool {
    value.abs() < 0.005
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between() {
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 50.0);
        let inner = BoundingBox::new(10.0, 5.0, 70.0, 40.0);
        let edges = EdgeSizes::between(&outer, &inner);
        assert_eq!(edges, EdgeSizes { top: 5.0, right: 20.0, bottom: 5.0, left: 10.0 });
        assert_eq!(edges.along(Axis::X), 30.0);
    }

    #[test]
    fn test_table_round_trip() {
        let edges = EdgeSizes { top: 8.0, right: 0.0, bottom: 0.0, left: 12.5 };
        let mut table = StyleTable::new();
        edges.write_to(&mut table, "padding");
        assert_eq!(table.get("padding-top").map(String::as_str), Some("8px"));
        assert_eq!(table.get("padding-left").map(String::as_str), Some("12.5px"));
        assert!(!table.contains_key("padding-right"));
        assert_eq!(EdgeSizes::from_table(&table, "padding"), edges);
    }
}
