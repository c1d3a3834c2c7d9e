//! Geometry primitives
//!
//! Points, four-corner boxes and one-dimensional lines. Almost every spatial
//! decision in the pipeline projects two boxes onto one axis and compares the
//! resulting [`Line`]s.

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing box edges for equality
pub const EPSILON: f64 = 1e-6;

/// Minimum intersection extent (per axis) for two boxes to count as overlapping
pub const MIN_OVERLAP: f64 = 2.0;

/// A point in design space, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Projection axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal extent (x)
    X,
    /// Vertical extent (y)
    Y,
}

impl Axis {
    /// The perpendicular axis
    pub fn cross(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Where a point sits relative to a [`Line`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativePosition {
    /// Point lies before the line's lower bound
    Left,
    /// Point lies after the line's upper bound
    Right,
    /// Point lies within the line (bounds inclusive)
    Contain,
}

/// A closed interval `[lower, upper]` on one axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub lower: f64,
    pub upper: f64,
}

impl Line {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Length of the interval (negative for inverted lines)
    pub fn length(&self) -> f64 {
        self.upper - self.lower
    }

    /// Midpoint of the interval
    pub fn mid(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Position of `point` relative to this line
    pub fn position_of(&self, point: f64) -> RelativePosition {
        if point < self.lower {
            RelativePosition::Left
        } else if point > self.upper {
            RelativePosition::Right
        } else {
            RelativePosition::Contain
        }
    }

    /// Distance of `point` from the midpoint
    pub fn symmetric_difference(&self, point: f64) -> f64 {
        (self.mid() - point).abs()
    }

    /// Buffered overlap test.
    ///
    /// Both lines are shrunk by `buffer` at each end, then tested for a
    /// strict intersection. Lines that merely touch do not overlap, and an
    /// inverted line never overlaps anything.
    pub fn overlaps(&self, other: &Line, buffer: f64) -> bool {
        let a = Line::new(self.lower + buffer, self.upper - buffer);
        let b = Line::new(other.lower + buffer, other.upper - buffer);
        if a.lower > a.upper || b.lower > b.upper {
            return false;
        }
        a.lower < b.upper && b.lower < a.upper
    }

    /// Whether `other` lies entirely within this line
    pub fn contains(&self, other: &Line) -> bool {
        other.lower >= self.lower - EPSILON && other.upper <= self.upper + EPSILON
    }

    /// Smallest line covering both
    pub fn union(&self, other: &Line) -> Line {
        Line::new(self.lower.min(other.lower), self.upper.max(other.upper))
    }

    /// Signed distance from this line's upper bound to `next`'s lower bound
    pub fn gap_to(&self, next: &Line) -> f64 {
        next.lower - self.upper
    }
}

/// How two boxes relate spatially, seen from the first box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxRelation {
    /// Identical boxes
    CompleteOverlap,
    /// The first box fully contains the second
    Include,
    /// The second box fully contains the first
    IncludedBy,
    /// Partial intersection of at least [`MIN_OVERLAP`] on both axes
    Overlap,
    /// Disjoint, touching, or too thin an intersection to matter
    None,
}

/// Axis-aligned rectangle stored as its four corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub left_top: Coordinate,
    pub right_top: Coordinate,
    pub left_bot: Coordinate,
    pub right_bot: Coordinate,
}

impl BoundingBox {
    /// Create a box from origin and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Coordinate::new(x, y), Coordinate::new(x + width, y + height))
    }

    /// Create a box from its top-left and bottom-right corners
    pub fn from_corners(left_top: Coordinate, right_bot: Coordinate) -> Self {
        Self {
            left_top,
            right_top: Coordinate::new(right_bot.x, left_top.y),
            left_bot: Coordinate::new(left_top.x, right_bot.y),
            right_bot,
        }
    }

    pub fn left(&self) -> f64 {
        self.left_top.x
    }

    pub fn right(&self) -> f64 {
        self.right_bot.x
    }

    pub fn top(&self) -> f64 {
        self.left_top.y
    }

    pub fn bottom(&self) -> f64 {
        self.right_bot.y
    }

    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }

    pub fn height(&self) -> f64 {
        self.bottom() - self.top()
    }

    /// Inverted, zero-area, or non-finite boxes
    pub fn is_degenerate(&self) -> bool {
        let finite = [self.left(), self.right(), self.top(), self.bottom()]
            .iter()
            .all(|v| v.is_finite());
        !finite || self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Project onto one axis
    pub fn line(&self, axis: Axis) -> Line {
        match axis {
            Axis::X => Line::new(self.left(), self.right()),
            Axis::Y => Line::new(self.top(), self.bottom()),
        }
    }

    /// Smallest box covering both
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox::from_corners(
            Coordinate::new(self.left().min(other.left()), self.top().min(other.top())),
            Coordinate::new(self.right().max(other.right()), self.bottom().max(other.bottom())),
        )
    }

    /// Union of every box in `boxes`, or `None` when empty
    pub fn union_all<'a, I>(boxes: I) -> Option<BoundingBox>
    where
        I: IntoIterator<Item = &'a BoundingBox>,
    {
        boxes.into_iter().fold(None, |acc, b| match acc {
            Some(u) => Some(b.union(&u)),
            None => Some(*b),
        })
    }

    /// Intersection of two boxes, if it has positive area
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let left = self.left().max(other.left());
        let top = self.top().max(other.top());
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(BoundingBox::from_corners(Coordinate::new(left, top), Coordinate::new(right, bottom)))
    }

    /// Inclusive containment test
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.line(Axis::X).contains(&other.line(Axis::X))
            && self.line(Axis::Y).contains(&other.line(Axis::Y))
    }

    /// Edge-by-edge equality within [`EPSILON`]
    pub fn same_as(&self, other: &BoundingBox) -> bool {
        (self.left() - other.left()).abs() <= EPSILON
            && (self.right() - other.right()).abs() <= EPSILON
            && (self.top() - other.top()).abs() <= EPSILON
            && (self.bottom() - other.bottom()).abs() <= EPSILON
    }

    /// Classify the relation between `self` and `other`.
    ///
    /// Degenerate boxes relate to nothing.
    pub fn relation(&self, other: &BoundingBox) -> BoxRelation {
        if self.is_degenerate() || other.is_degenerate() {
            return BoxRelation::None;
        }
        if self.same_as(other) {
            return BoxRelation::CompleteOverlap;
        }
        if self.contains(other) {
            return BoxRelation::Include;
        }
        if other.contains(self) {
            return BoxRelation::IncludedBy;
        }
        match self.intersection(other) {
            Some(i) if i.width() >= MIN_OVERLAP && i.height() >= MIN_OVERLAP => {
                BoxRelation::Overlap
            }
            _ => BoxRelation::None,
        }
    }
}
