//! Design Node
//!
//! A node is a shared record (id, geometry, style tables, annotations,
//! children) plus a closed [`NodeKind`] tag carrying variant payloads.
//!
//! `style` describes what a node looks like, `layout` describes where it
//! sits. Grouping and inference rewrite `layout` without touching `style`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;

/// CSS property → value table
pub type StyleTable = BTreeMap<String, String>;

/// Layout keys that describe a node's placement inside its parent rather
/// than the arrangement of its own children
pub const PLACEMENT_KEYS: &[&str] = &[
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "position",
    "top",
    "left",
    "z-index",
];

/// Node variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeKind {
    /// Synthetic container created by grouping
    Group,
    /// Frame or shape with a visible fill, stroke or effect
    Visible,
    /// Text run
    Text { content: String },
    /// Vector path (rendered as an opaque graphic)
    Vector {
        #[serde(default)]
        path: Option<String>,
    },
    /// Group whose leaves are all vectors, exported as one graphic
    VectorGroup,
    /// Raster image
    Image { source: String },
}

impl NodeKind {
    /// Short lowercase name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Group => "group",
            NodeKind::Visible => "visible",
            NodeKind::Text { .. } => "text",
            NodeKind::Vector { .. } => "vector",
            NodeKind::VectorGroup => "vector-group",
            NodeKind::Image { .. } => "image",
        }
    }
}

/// Pipeline annotations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Annotations {
    /// Already processed as a claimer in the inclusion pass
    pub checked_for_inclusion: bool,
    /// Already considered by the overlap pass
    pub checked_for_overlap: bool,
    /// Already produced by a directional segmentation pass
    pub checked_for_segmentation: bool,
    /// Children overlap and are placed absolutely inside this node
    pub absolute_positioning_group: bool,
    /// Every leaf below this node is a vector
    pub vector_group: bool,
    /// This node replaced a redundant wrapper during pruning
    pub replaced_parent: bool,
}

fn default_visible() -> bool {
    true
}

/// A node in the design tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Stable identifier
    pub id: String,
    /// Variant tag and payload
    pub kind: NodeKind,
    /// Appearance: colors, borders, fonts, shadows, sizes
    #[serde(default)]
    pub style: StyleTable,
    /// Placement: display, flex properties, spacing, positioning
    #[serde(default)]
    pub layout: StyleTable,
    #[serde(default)]
    pub annotations: Annotations,
    /// Adapter visibility flag
    #[serde(default = "default_visible")]
    pub visible: bool,
    bounding_box: BoundingBox,
    #[serde(default)]
    rendering_box: Option<BoundingBox>,
    #[serde(default)]
    children: Vec<Node>,
}

impl Node {
    fn with_kind(id: impl Into<String>, kind: NodeKind, bounding_box: BoundingBox) -> Self {
        Self {
            id: id.into(),
            kind,
            style: StyleTable::new(),
            layout: StyleTable::new(),
            annotations: Annotations::default(),
            visible: true,
            bounding_box,
            rendering_box: None,
            children: Vec::new(),
        }
    }

    /// Create a visible frame or shape
    pub fn visible(id: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self::with_kind(id, NodeKind::Visible, bounding_box)
    }

    /// Create a text node
    pub fn text(id: impl Into<String>, bounding_box: BoundingBox, content: impl Into<String>) -> Self {
        Self::with_kind(id, NodeKind::Text { content: content.into() }, bounding_box)
    }

    /// Create a vector node
    pub fn vector(id: impl Into<String>, bounding_box: BoundingBox) -> Self {
        Self::with_kind(id, NodeKind::Vector { path: None }, bounding_box)
    }

    /// Create an image node
    pub fn image(id: impl Into<String>, bounding_box: BoundingBox, source: impl Into<String>) -> Self {
        Self::with_kind(id, NodeKind::Image { source: source.into() }, bounding_box)
    }

    /// Create a synthetic group; its boxes are the union of the children's
    pub fn group(id: impl Into<String>, children: Vec<Node>) -> Self {
        let mut node = Self::with_kind(id, NodeKind::Group, BoundingBox::default());
        node.set_children(children);
        node
    }

    /// Builder: add a style declaration
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    /// Builder: set the rendering (ink) box
    pub fn with_rendering_box(mut self, rendering_box: BoundingBox) -> Self {
        self.rendering_box = Some(rendering_box);
        self
    }

    /// Builder: attach children
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.set_children(children);
        self
    }

    /// Whether the node is a synthetic container (plain or vector group)
    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group | NodeKind::VectorGroup)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Authoritative layout frame
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Visual ink extent; falls back to the bounding box
    pub fn rendering_box(&self) -> &BoundingBox {
        self.rendering_box.as_ref().unwrap_or(&self.bounding_box)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Mutable access to children for reordering and in-place rewrites.
    ///
    /// Callers that change a child's geometry must call
    /// [`Node::refresh_bounds`] afterwards.
    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    /// Replace all children
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
        self.update_group_bounds();
    }

    /// Append one child
    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
        self.update_group_bounds();
    }

    /// Remove and return all children
    pub fn take_children(&mut self) -> Vec<Node> {
        std::mem::take(&mut self.children)
    }

    /// Recompute group boxes bottom-up across the whole subtree
    pub fn refresh_bounds(&mut self) {
        for child in &mut self.children {
            child.refresh_bounds();
        }
        self.update_group_bounds();
    }

    fn update_group_bounds(&mut self) {
        if !self.is_group() {
            return;
        }
        if let Some(bounds) = BoundingBox::union_all(self.children.iter().map(|c| &c.bounding_box)) {
            self.bounding_box = bounds;
        }
        self.rendering_box =
            BoundingBox::union_all(self.children.iter().map(|c| c.rendering_box()));
    }
}
