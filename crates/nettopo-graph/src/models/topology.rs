//! Labelled network topology with a soft-disable overlay.
//!
//! Storage layout:
//! - `labels[i]` = label of node `NodeId(i)`, in registration order
//! - `adjacency[i]` = ordered (neighbor, weight) entries of node i
//! - `links` = every added link once, in insertion order
//!
//! Links are undirected: adding (u, v, w) appends (v, w) to u's list and
//! (u, w) to v's list. Disabled nodes and disabled link pairs are kept in
//! separate sets so that disabling never touches the adjacency data.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::node::{NodeId, Weight};
use crate::{GraphError, Result};

/// One adjacency entry: the neighbor and the cost of the link to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Neighbor node.
    pub to: NodeId,
    /// Link cost.
    pub weight: Weight,
}

/// An undirected link as it was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkRecord {
    /// First endpoint.
    pub source: NodeId,
    /// Second endpoint.
    pub destination: NodeId,
    /// Link cost.
    pub weight: Weight,
}

/// Network topology graph.
///
/// Parallel links between the same pair are kept as separate entries. A
/// self-loop occupies a single adjacency entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Link>>,
    links: Vec<LinkRecord>,
    disabled_nodes: BTreeSet<NodeId>,
    disabled_links: BTreeSet<(NodeId, NodeId)>,
}

/// Normalize an unordered pair.
fn link_key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Topology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node label.
    ///
    /// Idempotent: returns the existing id if the label is already present.
    /// Fails with [`GraphError::TooManyNodes`] once [`NodeId::MAX_NODES`]
    /// labels are registered.
    pub fn add_node(&mut self, label: &str) -> Result<NodeId> {
        if let Some(&id) = self.index.get(label) {
            return Ok(id);
        }

        let id = NodeId::try_from(self.labels.len())?;
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Add an undirected weighted link between two registered nodes.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        let u = self.node_id(u)?;
        let v = self.node_id(v)?;
        self.add_edge_by_id(u, v, weight);
        Ok(())
    }

    /// Register both endpoints if needed, then add the link.
    pub fn connect(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        let u = self.add_node(u)?;
        let v = self.add_node(v)?;
        self.add_edge_by_id(u, v, weight);
        Ok(())
    }

    pub(crate) fn add_edge_by_id(&mut self, u: NodeId, v: NodeId, weight: Weight) {
        self.adjacency[u.index()].push(Link { to: v, weight });
        if u != v {
            self.adjacency[v.index()].push(Link { to: u, weight });
        }
        self.links.push(LinkRecord {
            source: u,
            destination: v,
            weight,
        });
    }

    /// Mark a node as disabled.
    pub fn disable_node(&mut self, label: &str) -> Result<()> {
        let id = self.node_id(label)?;
        if self.disabled_nodes.insert(id) {
            debug!("Disabled node '{}'", label);
        }
        Ok(())
    }

    /// Clear the disabled mark of a node.
    pub fn enable_node(&mut self, label: &str) -> Result<()> {
        let id = self.node_id(label)?;
        if self.disabled_nodes.remove(&id) {
            debug!("Enabled node '{}'", label);
        }
        Ok(())
    }

    /// Mark the link pair (both directions) as disabled.
    ///
    /// The pair does not need an existing link; every parallel link between
    /// the endpoints is masked.
    pub fn disable_link(&mut self, u: &str, v: &str) -> Result<()> {
        let key = link_key(self.node_id(u)?, self.node_id(v)?);
        if self.disabled_links.insert(key) {
            debug!("Disabled link '{}'-'{}'", u, v);
        }
        Ok(())
    }

    /// Clear the disabled mark of a link pair.
    pub fn enable_link(&mut self, u: &str, v: &str) -> Result<()> {
        let key = link_key(self.node_id(u)?, self.node_id(v)?);
        if self.disabled_links.remove(&key) {
            debug!("Enabled link '{}'-'{}'", u, v);
        }
        Ok(())
    }

    /// Set the disabled flag of a node directly, returning the previous flag.
    pub(crate) fn set_disabled(&mut self, id: NodeId, disabled: bool) -> bool {
        if disabled {
            !self.disabled_nodes.insert(id)
        } else {
            self.disabled_nodes.remove(&id)
        }
    }

    /// Distinct active neighbors of a node, in first-occurrence order.
    ///
    /// Empty if the node is disabled or unregistered.
    pub fn active_neighbors(&self, label: &str) -> Vec<&str> {
        match self.lookup(label) {
            Some(id) => self
                .active_neighbor_ids(id)
                .into_iter()
                .map(|n| self.label(n))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Distinct active neighbor ids of a node, in first-occurrence order.
    pub fn active_neighbor_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = Vec::new();
        for link in self.active_links(id) {
            if !neighbors.contains(&link.to) {
                neighbors.push(link.to);
            }
        }
        neighbors
    }

    /// Traversable adjacency entries of a node, parallel links included.
    pub fn active_links(&self, id: NodeId) -> impl Iterator<Item = Link> + '_ {
        let entries: &[Link] = if self.is_disabled(id) {
            &[]
        } else {
            self.adjacency.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
        };
        entries
            .iter()
            .copied()
            .filter(move |link| self.is_traversable(id, link.to))
    }

    /// Check whether a link between two nodes may be traversed.
    pub fn is_traversable(&self, u: NodeId, v: NodeId) -> bool {
        !self.is_disabled(u)
            && !self.is_disabled(v)
            && !self.disabled_links.contains(&link_key(u, v))
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of registered nodes that are not disabled.
    pub fn active_node_count(&self) -> usize {
        self.labels.len() - self.disabled_nodes.len()
    }

    /// Number of links added (parallel links counted separately).
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Check if the topology has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Check if a label is registered.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Resolve a label, failing with [`GraphError::UnknownNode`].
    pub fn node_id(&self, label: &str) -> Result<NodeId> {
        self.lookup(label)
            .ok_or_else(|| GraphError::UnknownNode(label.to_string()))
    }

    /// Resolve a label.
    pub fn lookup(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Label of a node id.
    ///
    /// Panics if the id does not belong to this topology.
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id.index()]
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Node ids in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.labels.len()).map(NodeId::from_index)
    }

    /// Raw adjacency entries of a node, ignoring the overlay.
    pub fn adjacency(&self, id: NodeId) -> &[Link] {
        self.adjacency.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every link in insertion order, ignoring the overlay.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Check if a node id is disabled.
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.disabled_nodes.contains(&id)
    }

    /// Check if a label is registered and disabled.
    pub fn is_node_disabled(&self, label: &str) -> bool {
        self.lookup(label).is_some_and(|id| self.is_disabled(id))
    }

    /// Check if the link pair between two labels is disabled.
    pub fn is_link_disabled(&self, u: &str, v: &str) -> bool {
        match (self.lookup(u), self.lookup(v)) {
            (Some(u), Some(v)) => self.disabled_links.contains(&link_key(u, v)),
            _ => false,
        }
    }

    /// Disabled node ids in ascending order.
    pub fn disabled_node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.disabled_nodes.iter().copied()
    }

    /// Disabled link pairs, each normalized with the smaller id first.
    pub fn disabled_link_ids(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.disabled_links.iter().copied()
    }

    /// Check the symmetry invariant of the adjacency lists.
    pub fn validate(&self) -> bool {
        self.node_ids().all(|u| {
            self.adjacency(u).iter().all(|link| {
                let forward = self
                    .adjacency(u)
                    .iter()
                    .filter(|l| l.to == link.to && l.weight == link.weight)
                    .count();
                let backward = self
                    .adjacency(link.to)
                    .iter()
                    .filter(|l| l.to == u && l.weight == link.weight)
                    .count();
                forward == backward
            })
        })
    }
}
