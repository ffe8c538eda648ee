//! Fuzz target for topology mutations and analysis.
//!
//! Applies random sequences of node/link additions and overlay changes,
//! then checks adjacency symmetry, spanning forest size and that the
//! fault-tolerance sweep leaves the topology untouched.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nettopo_graph::{
    all_simple_paths_with_config, build_mst, connected_components, count_components,
    fault_tolerance_ratio, fault_tolerance_ratio_parallel, path_redundancy,
    reachability_percent, GraphError, PathConfig, Topology, Weight,
};

/// Small label space so operations hit existing nodes often.
const LABELS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn label(i: u8) -> &'static str {
    LABELS[i as usize % LABELS.len()]
}

/// Operations that can be performed on a topology.
#[derive(Debug, Arbitrary)]
enum TopologyOp {
    AddNode(u8),
    AddEdge { u: u8, v: u8, weight: u8 },
    DisableNode(u8),
    EnableNode(u8),
    DisableLink { u: u8, v: u8 },
    EnableLink { u: u8, v: u8 },
}

fuzz_target!(|ops: Vec<TopologyOp>| {
    if ops.len() > 64 {
        return;
    }

    let mut topology = Topology::new();

    for op in &ops {
        let result = match *op {
            TopologyOp::AddNode(i) => topology.add_node(label(i)).map(|_| ()),
            TopologyOp::AddEdge { u, v, weight } => {
                topology.add_edge(label(u), label(v), Weight::new(u32::from(weight)))
            }
            TopologyOp::DisableNode(i) => topology.disable_node(label(i)),
            TopologyOp::EnableNode(i) => topology.enable_node(label(i)),
            TopologyOp::DisableLink { u, v } => topology.disable_link(label(u), label(v)),
            TopologyOp::EnableLink { u, v } => topology.enable_link(label(u), label(v)),
        };

        // Only referential failures are allowed
        if let Err(e) = result {
            assert!(matches!(e, GraphError::UnknownNode(_)), "unexpected error: {}", e);
        }
        assert!(topology.validate(), "adjacency lost symmetry");
    }

    // Spanning forest size matches the component count
    let components = count_components(&connected_components(&topology));
    assert_eq!(build_mst(&topology).len(), topology.active_node_count() - components);

    for start in topology.labels() {
        let percent = reachability_percent(&topology, start);
        assert!((0.0..=100.0).contains(&percent));
    }

    // Capped enumeration never exceeds its cap or the uncapped count
    if topology.node_count() >= 2 {
        let (a, b) = (label(0), label(1));
        let total = path_redundancy(&topology, a, b);
        let capped =
            all_simple_paths_with_config(&topology, a, b, &PathConfig::new().with_max_paths(3));
        assert!(capped.paths.len() <= 3.min(total));
    }

    // The sweep restores the overlay
    let before = topology.clone();
    match fault_tolerance_ratio(&mut topology) {
        Ok(ratio) => {
            assert!((0.0..=1.0).contains(&ratio));
            assert_eq!(fault_tolerance_ratio_parallel(&topology), Ok(ratio));
        }
        Err(e) => assert_eq!(e, GraphError::EmptyGraph),
    }
    assert_eq!(topology, before, "fault-tolerance sweep changed the topology");
});
