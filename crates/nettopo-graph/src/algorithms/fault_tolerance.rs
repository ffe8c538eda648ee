//! Fault-tolerance scoring by single-node removal.
//!
//! Every node is removed in registration order: it is disabled through the
//! overlay, the remaining active network is checked for connectivity, and
//! the node's previous overlay state is restored before the next removal.
//! The ratio of removals that leave the network connected is the
//! fault-tolerance ratio.
//!
//! Semantics at the boundaries:
//! - A single node scores 1.0 (the remaining network is empty).
//! - Two linked nodes score 1.0 (one node is trivially connected).
//! - Three or more nodes without links score 0.0.
//! - A node that was already disabled still counts as a removal.
//!
//! The parallel sweep gives each rayon worker its own copy of the topology,
//! so no overlay state is shared between removals.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::algorithms::reachability::is_active_connected;
use crate::models::{NodeId, Topology};
use crate::{GraphError, Result};

/// Fault-tolerance sweep configuration.
#[derive(Debug, Clone, Default)]
pub struct FaultToleranceConfig {
    /// Run removals on the rayon thread pool.
    pub parallel: bool,
}

impl FaultToleranceConfig {
    /// Create new configuration (sequential).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the parallel sweep.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }
}

/// Result of removing one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureOutcome {
    /// Removed node.
    pub node: String,
    /// Whether the rest of the network stayed connected.
    pub tolerable: bool,
}

/// Per-node removal results and the aggregate ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultToleranceReport {
    /// One outcome per node, in registration order.
    pub outcomes: Vec<FailureOutcome>,
    /// Tolerable failures divided by node count.
    pub ratio: f64,
}

impl FaultToleranceReport {
    fn from_outcomes(outcomes: Vec<FailureOutcome>) -> Self {
        let tolerable = outcomes.iter().filter(|p| p.tolerable).count();
        let ratio = tolerable as f64 / outcomes.len() as f64;
        Self { outcomes, ratio }
    }

    /// Number of nodes whose removal keeps the network connected.
    pub fn tolerable_failures(&self) -> usize {
        self.outcomes.iter().filter(|p| p.tolerable).count()
    }

    /// Nodes whose removal disconnects the network.
    pub fn critical_nodes(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|p| !p.tolerable)
            .map(|p| p.node.as_str())
            .collect()
    }

    /// True if no single node is critical.
    pub fn is_robust(&self) -> bool {
        self.outcomes.iter().all(|p| p.tolerable)
    }
}

/// Disable `id`, check the rest, then put the overlay back as it was.
fn survives_removal(topology: &mut Topology, id: NodeId) -> bool {
    let was_disabled = topology.set_disabled(id, true);
    let tolerable = is_active_connected(topology);
    topology.set_disabled(id, was_disabled);

    debug!(
        "Without '{}': network {}",
        topology.label(id),
        if tolerable { "stays connected" } else { "splits" }
    );
    tolerable
}

fn sweep_sequential(topology: &mut Topology) -> Vec<FailureOutcome> {
    let ids: Vec<NodeId> = topology.node_ids().collect();
    ids.into_iter()
        .map(|id| FailureOutcome {
            tolerable: survives_removal(topology, id),
            node: topology.label(id).to_string(),
        })
        .collect()
}

fn sweep_parallel(topology: &Topology) -> Vec<FailureOutcome> {
    let ids: Vec<NodeId> = topology.node_ids().collect();
    ids.into_par_iter()
        .map_init(
            || topology.clone(),
            |copy, id| FailureOutcome {
                tolerable: survives_removal(copy, id),
                node: topology.label(id).to_string(),
            },
        )
        .collect()
}

/// Fraction of nodes whose removal leaves the remaining network connected.
///
/// Removals mutate `topology` in place and restore it after each node, so it
/// is unchanged when this returns.
pub fn fault_tolerance_ratio(topology: &mut Topology) -> Result<f64> {
    if topology.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let report = FaultToleranceReport::from_outcomes(sweep_sequential(topology));
    info!(
        "Fault tolerance: {}/{} tolerable failures",
        report.tolerable_failures(),
        report.outcomes.len()
    );
    Ok(report.ratio)
}

/// Parallel fault-tolerance ratio over private topology copies.
pub fn fault_tolerance_ratio_parallel(topology: &Topology) -> Result<f64> {
    let config = FaultToleranceConfig::new().parallel();
    fault_tolerance_with_config(topology, &config).map(|report| report.ratio)
}

/// Fault-tolerance sweep returning per-node outcomes.
pub fn fault_tolerance_with_config(
    topology: &Topology,
    config: &FaultToleranceConfig,
) -> Result<FaultToleranceReport> {
    if topology.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let outcomes = if config.parallel {
        sweep_parallel(topology)
    } else {
        sweep_sequential(&mut topology.clone())
    };

    let report = FaultToleranceReport::from_outcomes(outcomes);
    info!(
        "Fault tolerance ({}): {}/{} tolerable failures",
        if config.parallel { "parallel" } else { "sequential" },
        report.tolerable_failures(),
        report.outcomes.len()
    );
    Ok(report)
}

/// Check that no single-node failure disconnects the network.
pub fn is_network_robust(topology: &Topology) -> Result<bool> {
    fault_tolerance_with_config(topology, &FaultToleranceConfig::default())
        .map(|report| report.is_robust())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;

    fn from_links(links: &[(&str, &str)]) -> Topology {
        let mut topology = Topology::new();
        for (u, v) in links {
            topology.connect(u, v, Weight::new(1)).unwrap();
        }
        topology
    }

    fn make_star(leaves: usize) -> Topology {
        let mut topology = Topology::new();
        topology.add_node("hub").unwrap();
        for i in 0..leaves {
            topology.connect("hub", &format!("leaf{}", i), Weight::new(1)).unwrap();
        }
        topology
    }

    #[test]
    fn test_triangle_fully_tolerant() {
        let mut topology = from_links(&[("A", "B"), ("B", "C"), ("A", "C")]);
        assert_eq!(fault_tolerance_ratio(&mut topology).unwrap(), 1.0);
        assert!(is_network_robust(&topology).unwrap());
    }

    #[test]
    fn test_star_center_critical() {
        for leaves in 2..6 {
            let topology = make_star(leaves);
            let report =
                fault_tolerance_with_config(&topology, &FaultToleranceConfig::new()).unwrap();

            assert_eq!(report.critical_nodes(), vec!["hub"]);
            let expected = leaves as f64 / (leaves + 1) as f64;
            assert!((report.ratio - expected).abs() < 1e-12);
            assert!(!report.is_robust());
        }
    }

    #[test]
    fn test_line_middle_critical() {
        let mut topology = from_links(&[("A", "B"), ("B", "C")]);
        let ratio = fault_tolerance_ratio(&mut topology).unwrap();
        assert!((ratio - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_boundaries() {
        // Single node: remainder is empty
        let mut single = Topology::new();
        single.add_node("A").unwrap();
        assert_eq!(fault_tolerance_ratio(&mut single).unwrap(), 1.0);

        // Two linked nodes
        let mut pair = from_links(&[("A", "B")]);
        assert_eq!(fault_tolerance_ratio(&mut pair).unwrap(), 1.0);

        // Two unlinked nodes: one node remains, trivially connected
        let mut two = Topology::new();
        two.add_node("A").unwrap();
        two.add_node("B").unwrap();
        assert_eq!(fault_tolerance_ratio(&mut two).unwrap(), 1.0);

        // Three unlinked nodes
        let mut three = two.clone();
        three.add_node("C").unwrap();
        assert_eq!(fault_tolerance_ratio(&mut three).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_graph_error() {
        assert_eq!(
            fault_tolerance_ratio(&mut Topology::new()),
            Err(GraphError::EmptyGraph)
        );
        assert_eq!(
            fault_tolerance_ratio_parallel(&Topology::new()),
            Err(GraphError::EmptyGraph)
        );
    }

    #[test]
    fn test_state_restored() {
        let mut topology = from_links(&[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
        topology.disable_node("C").unwrap();
        topology.disable_link("A", "B").unwrap();
        let before = topology.clone();

        fault_tolerance_ratio(&mut topology).unwrap();
        assert_eq!(topology, before);
        assert!(topology.is_node_disabled("C"));
        assert!(!topology.is_node_disabled("A"));
    }

    #[test]
    fn test_pre_disabled_node() {
        let mut topology = from_links(&[("A", "B"), ("B", "C"), ("C", "D"), ("A", "D")]);
        topology.disable_node("C").unwrap();

        // Active: B - A - D. Only removing A splits it.
        let report = fault_tolerance_with_config(&topology, &FaultToleranceConfig::new()).unwrap();
        assert_eq!(report.critical_nodes(), vec!["A"]);
        assert_eq!(report.ratio, 0.75);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut topology = from_links(&[
            ("A", "B"),
            ("B", "C"),
            ("C", "A"),
            ("C", "D"),
            ("D", "E"),
            ("E", "F"),
            ("F", "D"),
            ("F", "G"),
        ]);

        let parallel =
            fault_tolerance_with_config(&topology, &FaultToleranceConfig::new().parallel())
                .unwrap();
        let sequential =
            fault_tolerance_with_config(&topology, &FaultToleranceConfig::new()).unwrap();

        assert_eq!(parallel, sequential);
        assert_eq!(parallel.critical_nodes(), vec!["C", "D", "F"]);
        assert_eq!(
            fault_tolerance_ratio_parallel(&topology).unwrap(),
            fault_tolerance_ratio(&mut topology).unwrap()
        );
    }

    #[test]
    fn test_mesh_fully_tolerant() {
        let labels = ["A", "B", "C", "D", "E"];
        let mut topology = Topology::new();
        for (i, u) in labels.iter().enumerate() {
            for v in &labels[i + 1..] {
                topology.connect(u, v, Weight::new(1)).unwrap();
            }
        }
        assert_eq!(fault_tolerance_ratio_parallel(&topology).unwrap(), 1.0);
    }
}
