//! Read-only plain-data view of a topology.
//!
//! Renderers and reports consume a [`TopologySnapshot`] instead of the live
//! [`Topology`], so they can never mutate analysis state.

use serde::{Deserialize, Serialize};

use super::node::Weight;
use super::topology::Topology;

/// One adjacency entry as seen by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSnapshot {
    /// Neighbor label.
    pub to: String,
    /// Link cost.
    pub weight: Weight,
    /// Whether the link can currently be traversed.
    pub active: bool,
}

/// Snapshot of labels, adjacency and overlay state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologySnapshot {
    /// Labels in registration order.
    pub nodes: Vec<String>,
    /// Adjacency entries, `adjacency[i]` belonging to `nodes[i]`.
    pub adjacency: Vec<Vec<LinkSnapshot>>,
    /// Disabled node labels.
    pub disabled_nodes: Vec<String>,
    /// Disabled link pairs.
    pub disabled_links: Vec<(String, String)>,
}

impl TopologySnapshot {
    /// Adjacency entries of a label, if present.
    pub fn neighbors(&self, label: &str) -> Option<&[LinkSnapshot]> {
        self.nodes
            .iter()
            .position(|n| n == label)
            .map(|i| self.adjacency[i].as_slice())
    }
}

impl Topology {
    /// Capture the current state as plain data.
    pub fn snapshot(&self) -> TopologySnapshot {
        let nodes = self.labels().map(str::to_string).collect();

        let adjacency = self
            .node_ids()
            .map(|u| {
                self.adjacency(u)
                    .iter()
                    .map(|link| LinkSnapshot {
                        to: self.label(link.to).to_string(),
                        weight: link.weight,
                        active: self.is_traversable(u, link.to),
                    })
                    .collect()
            })
            .collect();

        let disabled_nodes = self
            .disabled_node_ids()
            .map(|id| self.label(id).to_string())
            .collect();

        let disabled_links = self
            .disabled_link_ids()
            .map(|(u, v)| (self.label(u).to_string(), self.label(v).to_string()))
            .collect();

        TopologySnapshot {
            nodes,
            adjacency,
            disabled_nodes,
            disabled_links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_overlay() {
        let mut topology = Topology::new();
        topology.connect("A", "B", Weight::new(1)).unwrap();
        topology.connect("B", "C", Weight::new(2)).unwrap();
        topology.disable_node("C").unwrap();
        topology.disable_link("A", "B").unwrap();

        let snapshot = topology.snapshot();
        assert_eq!(snapshot.nodes, vec!["A", "B", "C"]);
        assert_eq!(snapshot.disabled_nodes, vec!["C"]);
        assert_eq!(
            snapshot.disabled_links,
            vec![("A".to_string(), "B".to_string())]
        );

        let b = snapshot.neighbors("B").unwrap();
        assert_eq!(b.len(), 2);
        assert!(b.iter().all(|link| !link.active));
        assert!(snapshot.neighbors("Z").is_none());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut topology = Topology::new();
        topology.connect("A", "B", Weight::new(3)).unwrap();

        let json = serde_json::to_value(topology.snapshot()).unwrap();
        assert_eq!(json["nodes"][1], "B");
        assert_eq!(json["adjacency"][0][0]["to"], "B");
        assert_eq!(json["adjacency"][0][0]["weight"], 3);
        assert_eq!(json["adjacency"][0][0]["active"], true);
    }
}
