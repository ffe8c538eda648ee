//! Minimum spanning tree (Kruskal).
//!
//! Candidate links are the traversable links of the topology in insertion
//! order, parallel links included as independent candidates. They are stably
//! sorted by weight, so equal weights keep insertion order and the result is
//! reproducible. A link is accepted iff its endpoints are still in different
//! union-find sets. On a disconnected network the result is a spanning forest.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::algorithms::union_find::UnionFind;
use crate::models::{LinkRecord, Topology, Weight};

/// A selected link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint label.
    pub source: String,
    /// Second endpoint label.
    pub destination: String,
    /// Link cost.
    pub weight: Weight,
}

impl Edge {
    /// Create an edge from labels.
    pub fn new(source: &str, destination: &str, weight: Weight) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            weight,
        }
    }
}

/// Minimum spanning forest of the active network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningForest {
    /// Selected links in selection order (ascending weight).
    pub edges: Vec<Edge>,
    /// Number of trees, one per connected component of active nodes.
    pub num_components: usize,
}

impl SpanningForest {
    /// Sum of the selected weights.
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|e| u64::from(e.weight.get())).sum()
    }

    /// True if the forest is a single tree (at most one component).
    pub fn is_spanning_tree(&self) -> bool {
        self.num_components <= 1
    }
}

/// Kruskal's minimum spanning tree over traversable links.
///
/// Returns `active_nodes - 1` edges on a connected network and
/// `active_nodes - components` otherwise.
pub fn build_mst(topology: &Topology) -> Vec<Edge> {
    spanning_forest(topology).edges
}

/// Kruskal's algorithm, also reporting the component count.
pub fn spanning_forest(topology: &Topology) -> SpanningForest {
    let active = topology.active_node_count();
    let wanted = active.saturating_sub(1);

    let mut candidates: Vec<LinkRecord> = topology
        .links()
        .iter()
        .filter(|l| l.source != l.destination)
        .filter(|l| topology.is_traversable(l.source, l.destination))
        .copied()
        .collect();
    candidates.sort_by_key(|l| l.weight);
    debug!("Kruskal over {} candidate links", candidates.len());

    let mut uf = UnionFind::new(topology.node_count());
    let mut edges = Vec::with_capacity(wanted);

    for link in candidates {
        if edges.len() == wanted {
            break;
        }
        if uf.union(link.source, link.destination) {
            edges.push(Edge::new(
                topology.label(link.source),
                topology.label(link.destination),
                link.weight,
            ));
        }
    }

    // Disabled nodes stay singleton sets and are not trees of the forest
    let disabled = topology.node_count() - active;
    let forest = SpanningForest {
        num_components: uf.num_components() - disabled,
        edges,
    };
    info!(
        "Spanning forest: {} edges, {} components, total weight {}",
        forest.edges.len(),
        forest.num_components,
        forest.total_weight()
    );
    forest
}
