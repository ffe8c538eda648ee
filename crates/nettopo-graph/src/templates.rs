//! Canonical topology shapes.
//!
//! Generates the adjacency data for the classic LAN layouts. Every link in a
//! generated topology gets the same weight.
//!
//! | Kind | Links |
//! |------|-------|
//! | bus  | chain `n0 - n1 - ... - n(k-1)` |
//! | ring | bus plus the closing link (three or more nodes) |
//! | star | first label is the hub, linked to every other label |
//! | tree | binary heap layout, node i links to 2i+1 and 2i+2 |
//! | mesh | every pair |

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{NodeId, Topology, Weight};
use crate::{GraphError, Result};

/// Topology template kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    /// Linear chain.
    Bus,
    /// Closed chain.
    Ring,
    /// Hub and spokes.
    Star,
    /// Binary tree.
    Tree,
    /// Complete graph.
    Mesh,
}

impl TopologyKind {
    /// All kinds, in documentation order.
    pub const ALL: [TopologyKind; 5] = [
        TopologyKind::Bus,
        TopologyKind::Ring,
        TopologyKind::Star,
        TopologyKind::Tree,
        TopologyKind::Mesh,
    ];

    /// Lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TopologyKind::Bus => "bus",
            TopologyKind::Ring => "ring",
            TopologyKind::Star => "star",
            TopologyKind::Tree => "tree",
            TopologyKind::Mesh => "mesh",
        }
    }

    /// Link endpoints (as label positions) for `n` nodes.
    pub fn link_pairs(&self, n: usize) -> Vec<(usize, usize)> {
        match self {
            TopologyKind::Bus => (1..n).map(|i| (i - 1, i)).collect(),
            TopologyKind::Ring => {
                let mut pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
                if n >= 3 {
                    pairs.push((n - 1, 0));
                }
                pairs
            }
            TopologyKind::Star => (1..n).map(|i| (0, i)).collect(),
            TopologyKind::Tree => (1..n).map(|i| ((i - 1) / 2, i)).collect(),
            TopologyKind::Mesh => (0..n)
                .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
                .collect(),
        }
    }
}

impl fmt::Display for TopologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopologyKind {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bus" => Ok(TopologyKind::Bus),
            "ring" => Ok(TopologyKind::Ring),
            "star" => Ok(TopologyKind::Star),
            "tree" => Ok(TopologyKind::Tree),
            "mesh" => Ok(TopologyKind::Mesh),
            _ => Err(GraphError::UnsupportedTopology(s.to_string())),
        }
    }
}

/// Build a topology of the given shape over `labels`.
pub fn build_topology<S: AsRef<str>>(
    kind: TopologyKind,
    labels: &[S],
    weight: Weight,
) -> Result<Topology> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_ref()) {
            return Err(GraphError::DuplicateNode(label.as_ref().to_string()));
        }
    }

    let mut topology = Topology::new();
    let ids = labels
        .iter()
        .map(|label| topology.add_node(label.as_ref()))
        .collect::<Result<Vec<NodeId>>>()?;

    for (u, v) in kind.link_pairs(ids.len()) {
        topology.add_edge_by_id(ids[u], ids[v], weight);
    }

    Ok(topology)
}
