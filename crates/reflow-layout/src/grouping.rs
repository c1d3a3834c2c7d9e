//! Hierarchy Construction
//!
//! Turns a flat, z-ordered sibling list into a nested tree. Three passes run
//! per level, then grouping recurses into every node of the level:
//!
//! 1. inclusion: a box fully containing others adopts them as children;
//! 2. overlap: partially overlapping boxes are wrapped into a group whose
//!    children are positioned absolutely;
//! 3. directional segmentation: boxes sharing a row or column band are
//!    wrapped into one group per band.
//!
//! Index order is z-order throughout: a later index is drawn on top.

use std::collections::HashSet;

use reflow_node::{Axis, BoxRelation, Node, NodeKind};

use crate::components::connected_components;
use crate::LayoutOptions;

/// Allocates identifiers for synthetic groups
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: String,
    next: usize,
    taken: HashSet<String>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new("group")
    }
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
            taken: HashSet::new(),
        }
    }

    /// Never hand out any of `ids`
    pub fn reserve<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taken.extend(ids.into_iter().map(Into::into));
    }

    /// Next free identifier (`group-1`, `group-2`, ...)
    pub fn next_id(&mut self) -> String {
        loop {
            let id = format!("{}-{}", self.prefix, self.next);
            self.next += 1;
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}

/// Grouping engine for one conversion
pub struct Grouper<'a> {
    ids: &'a mut IdAllocator,
    options: &'a LayoutOptions,
}

impl<'a> Grouper<'a> {
    pub fn new(ids: &'a mut IdAllocator, options: &'a LayoutOptions) -> Self {
        Self { ids, options }
    }

    /// Build the hierarchy for one sibling list, recursing into every
    /// resulting node. Re-running over an already grouped list is a no-op.
    pub fn group(&mut self, nodes: Vec<Node>) -> Vec<Node> {
        let nodes = self.claim_inclusions(nodes);
        let nodes = self.wrap_overlaps(nodes);
        let nodes = self.segment(nodes);

        nodes
            .into_iter()
            .map(|mut node| {
                if !node.is_leaf() {
                    let children = node.take_children();
                    let children = self.group(children);
                    node.set_children(children);
                }
                node
            })
            .collect()
    }

    fn new_group(&mut self, members: Vec<Node>) -> Node {
        let mut group = Node::group(self.ids.next_id(), members);
        group.annotations.checked_for_inclusion = true;
        group.annotations.checked_for_overlap = true;
        group
    }

    /// Inclusion pass, topmost node first
    fn claim_inclusions(&mut self, mut nodes: Vec<Node>) -> Vec<Node> {
        let count = nodes.len();
        let mut claimed_by: Vec<Option<usize>> = vec![None; count];
        let mut claims: Vec<Vec<usize>> = vec![Vec::new(); count];

        for current in (0..count).rev() {
            if claimed_by[current].is_some() || nodes[current].annotations.checked_for_inclusion {
                continue;
            }
            for other in 0..count {
                if other == current || claimed_by[other].is_some() {
                    continue;
                }
                let relation = nodes[current].bounding_box().relation(nodes[other].bounding_box());
                if matches!(relation, BoxRelation::CompleteOverlap | BoxRelation::Include) {
                    claimed_by[other] = Some(current);
                    claims[current].push(other);
                }
            }
            nodes[current].annotations.checked_for_inclusion = true;
            if !claims[current].is_empty() {
                tracing::debug!(
                    "{} claims {} nested node(s)",
                    nodes[current].id,
                    claims[current].len()
                );
            }
        }

        let mut slots: Vec<Option<Node>> = nodes.into_iter().map(Some).collect();
        (0..count)
            .filter(|&i| claimed_by[i].is_none())
            .filter_map(|i| adopt(&mut slots, &claims, i))
            .collect()
    }

    /// Overlap pass: wrap each overlap component into an absolute group
    fn wrap_overlaps(&mut self, mut nodes: Vec<Node>) -> Vec<Node> {
        let unchecked: Vec<usize> = (0..nodes.len())
            .filter(|&i| !nodes[i].annotations.checked_for_overlap)
            .collect();
        let components = connected_components(unchecked.len(), |a, b| {
            let (a, b) = (&nodes[unchecked[a]], &nodes[unchecked[b]]);
            a.bounding_box().relation(b.bounding_box()) == BoxRelation::Overlap
        });

        for node in &mut nodes {
            node.annotations.checked_for_overlap = true;
        }

        let clusters: Vec<Vec<usize>> = components
            .into_iter()
            .filter(|c| c.len() > 1)
            .map(|c| c.into_iter().map(|i| unchecked[i]).collect())
            .collect();
        if clusters.is_empty() {
            return nodes;
        }

        let result = self.regroup(nodes, &clusters, |group| {
            group.annotations.absolute_positioning_group = true;
        });
        tracing::debug!("Wrapped {} overlap cluster(s)", clusters.len());
        result
    }

    /// Directional segmentation into row or column bands
    fn segment(&mut self, mut nodes: Vec<Node>) -> Vec<Node> {
        if nodes.iter().all(|n| n.annotations.checked_for_segmentation) {
            return nodes;
        }

        let buffer = self.options.overlap_buffer;
        let rows = band_partition(&nodes, Axis::Y, buffer);
        let columns = band_partition(&nodes, Axis::X, buffer);
        let chosen = match (segments(&rows), segments(&columns)) {
            (true, true) if columns.len() < rows.len() => Some((Axis::X, columns)),
            (true, _) => Some((Axis::Y, rows)),
            (false, true) => Some((Axis::X, columns)),
            (false, false) => None,
        };

        if let Some((axis, partition)) = chosen {
            let bands: Vec<Vec<usize>> = partition.into_iter().filter(|c| c.len() > 1).collect();
            tracing::debug!(
                "Segmented {} node(s) into {} band(s) along {:?}",
                nodes.len(),
                bands.len(),
                axis
            );
            nodes = self.regroup(nodes, &bands, |_| {});
        }

        for node in &mut nodes {
            node.annotations.checked_for_segmentation = true;
        }
        nodes
    }

    /// Replace each cluster by one new group placed at the position of its
    /// first member. Clusters must be disjoint with ascending members.
    fn regroup<F>(&mut self, nodes: Vec<Node>, clusters: &[Vec<usize>], mut configure: F) -> Vec<Node>
    where
        F: FnMut(&mut Node),
    {
        let mut cluster_of: Vec<Option<usize>> = vec![None; nodes.len()];
        for (c, members) in clusters.iter().enumerate() {
            for &i in members {
                cluster_of[i] = Some(c);
            }
        }

        let mut slots: Vec<Option<Node>> = nodes.into_iter().map(Some).collect();
        let mut result = Vec::with_capacity(slots.len());
        for i in 0..slots.len() {
            match cluster_of[i] {
                None => result.extend(slots[i].take()),
                Some(c) if clusters[c].first() == Some(&i) => {
                    let members: Vec<Node> = clusters[c].iter().filter_map(|&m| slots[m].take()).collect();
                    let mut group = self.new_group(members);
                    configure(&mut group);
                    result.push(group);
                }
                Some(_) => {}
            }
        }
        result
    }
}

/// Move node `index` out of `slots`, with everything it claimed appended
/// to its children in ascending z-order
fn adopt(slots: &mut [Option<Node>], claims: &[Vec<usize>], index: usize) -> Option<Node> {
    let mut node = slots[index].take()?;
    if !claims[index].is_empty() {
        let mut children = node.take_children();
        children.extend(claims[index].iter().filter_map(|&j| adopt(slots, claims, j)));
        node.set_children(children);
    }
    Some(node)
}

/// Components of nodes whose projections onto `axis` transitively overlap
fn band_partition(nodes: &[Node], axis: Axis, buffer: f64) -> Vec<Vec<usize>> {
    connected_components(nodes.len(), |a, b| {
        let (a, b) = (nodes[a].bounding_box(), nodes[b].bounding_box());
        !a.is_degenerate() && !b.is_degenerate() && a.line(axis).overlaps(&b.line(axis), buffer)
    })
}

/// A partition segments a list when it splits it and groups something
fn segments(partition: &[Vec<usize>]) -> bool {
    partition.len() >= 2 && partition.iter().any(|c| c.len() >= 2)
}

/// Drop nodes flagged invisible, at every depth
pub fn drop_invisible(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .filter(|n| n.visible)
        .map(|mut node| {
            if !node.is_leaf() {
                let children = drop_invisible(node.take_children());
                node.set_children(children);
            }
            node
        })
        .collect()
}

/// Convert groups whose leaves are all vectors (at least two) into vector
/// groups, which later stages treat as one graphic
pub fn mark_vector_groups(node: &mut Node) {
    if node.kind == NodeKind::Group && is_vector_only(node) {
        node.kind = NodeKind::VectorGroup;
        node.annotations.vector_group = true;
        tracing::debug!("{} is a vector group", node.id);
        return;
    }
    for child in node.children_mut() {
        mark_vector_groups(child);
    }
}

fn is_vector_only(node: &Node) -> bool {
    let mut count = 0;
    for leaf in node.descendants().filter(|n| n.is_leaf()) {
        if !matches!(leaf.kind, NodeKind::Vector { .. }) {
            return false;
        }
        count += 1;
    }
    count >= 2
}
