//! Node types for topology analysis.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`NodeId`]: Dense index of a registered node
//! - [`Weight`]: Non-negative link cost
//! - [`Distance`]: BFS hop count from a source
//! - [`ComponentId`]: Connected component identifier

use serde::{Deserialize, Serialize};

use crate::GraphError;

/// Dense index of a registered node, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node", e.g. the BFS parent of an unreached node.
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Largest number of nodes a topology can hold; `INVALID` is never issued.
    pub const MAX_NODES: usize = u32::MAX as usize;

    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Check if this is a valid node ID.
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Position in per-node vectors.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Id of an index already known to be below `MAX_NODES`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Self::MAX_NODES);
        NodeId(index as u32)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = GraphError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index)
            .ok()
            .map(NodeId)
            .filter(NodeId::is_valid)
            .ok_or(GraphError::TooManyNodes(index))
    }
}

/// Link cost.
///
/// Weights are non-negative integers; signed input is validated through
/// `TryFrom<i64>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Weight(pub u32);

impl Weight {
    /// Zero-cost link.
    pub const ZERO: Weight = Weight(0);

    /// Create a new weight.
    pub const fn new(w: u32) -> Self {
        Weight(w)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Weight {
    type Error = GraphError;

    fn try_from(w: i64) -> Result<Self, Self::Error> {
        u32::try_from(w)
            .map(Weight)
            .map_err(|_| GraphError::InvalidWeight(w))
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Distance from source in BFS.
///
/// Also known as "hop count".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Distance(pub u32);

impl Distance {
    /// Infinity (unreachable).
    pub const INFINITY: Distance = Distance(u32::MAX);

    /// Zero distance (source node).
    pub const ZERO: Distance = Distance(0);

    /// Create a new distance.
    pub const fn new(d: u32) -> Self {
        Distance(d)
    }

    /// Check if node is reachable.
    pub const fn is_reachable(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Increment distance by 1, saturating at infinity.
    pub const fn increment(&self) -> Self {
        if self.0 == u32::MAX {
            Distance::INFINITY
        } else {
            Distance(self.0.saturating_add(1))
        }
    }
}

/// Connected component identifier.
///
/// Nodes in the same component have the same ComponentId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component (disabled nodes).
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}
