//! Reflow Node Model
//!
//! Geometry primitives and the design node tree shared by every stage of the
//! pipeline.

mod geometry;
mod node;
mod tree;

pub use geometry::{
    Axis, BoundingBox, BoxRelation, Coordinate, Line, RelativePosition, EPSILON, MIN_OVERLAP,
};
pub use node::{Annotations, Node, NodeKind, StyleTable, PLACEMENT_KEYS};
pub use tree::Descendants;
