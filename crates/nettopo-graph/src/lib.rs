//! Network topology analysis engine.
//!
//! This crate models a weighted, undirected computer network whose nodes and
//! links can be soft-disabled, and provides the structural analyses run over it:
//!
//! - **Topology**: labelled adjacency lists with a disabled-node/disabled-link overlay
//! - **Reachability**: breadth-first reachability percentage and hop distances
//! - **Connectivity**: depth-first full-connectivity checks and connected components
//! - **Paths**: simple-path enumeration and path redundancy
//! - **MST**: Kruskal's minimum spanning tree (or forest) over a union-find
//! - **Fault tolerance**: single-node-removal sweep, sequential or parallel
//! - **Templates**: bus, ring, star, tree and mesh adjacency generation
//!
//! # Example
//!
//! ```
//! use nettopo_graph::{build_mst, reachability_percent, Topology, Weight};
//!
//! let mut topology = Topology::new();
//! for label in ["A", "B", "C", "D"] {
//!     topology.add_node(label)?;
//! }
//! topology.add_edge("A", "B", Weight::new(1))?;
//! topology.add_edge("B", "C", Weight::new(2))?;
//! topology.add_edge("C", "D", Weight::new(1))?;
//! topology.add_edge("A", "D", Weight::new(4))?;
//!
//! let mst = build_mst(&topology);
//! assert_eq!(mst.len(), 3);
//!
//! // D stays reachable over A-D while C is down
//! topology.disable_node("C")?;
//! assert_eq!(reachability_percent(&topology, "A"), 100.0);
//!
//! topology.disable_link("A", "D")?;
//! let percent = reachability_percent(&topology, "A");
//! assert!((percent - 200.0 / 3.0).abs() < 1e-9);
//! # Ok::<(), nettopo_graph::GraphError>(())
//! ```

pub mod algorithms;
pub mod models;
pub mod templates;

// Re-export main types
pub use algorithms::components::{connected_components, count_components};
pub use algorithms::fault_tolerance::{
    fault_tolerance_ratio, fault_tolerance_ratio_parallel, fault_tolerance_with_config,
    is_network_robust, FaultToleranceConfig, FaultToleranceReport, FailureOutcome,
};
pub use algorithms::mst::{build_mst, spanning_forest, Edge, SpanningForest};
pub use algorithms::paths::{
    all_simple_paths, all_simple_paths_with_config, path_redundancy, PathConfig, PathSearch,
};
pub use algorithms::reachability::{
    hop_count, hop_distances, is_active_connected, is_fully_connected, reachability_percent,
    shortest_hop_path,
};
pub use algorithms::union_find::UnionFind;
pub use models::node::{ComponentId, Distance, NodeId, Weight};
pub use models::snapshot::{LinkSnapshot, TopologySnapshot};
pub use models::topology::Topology;
pub use templates::{build_topology, TopologyKind};

/// Topology error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Reference to a node label that was never added.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// Negative or out-of-range link weight.
    #[error("Invalid weight: {0} (weights must be non-negative integers)")]
    InvalidWeight(i64),

    /// Query requires at least one node.
    #[error("Empty graph")]
    EmptyGraph,

    /// Node label supplied twice where labels must be unique.
    #[error("Duplicate node: {0}")]
    DuplicateNode(String),

    /// Unknown topology template name.
    #[error("Unsupported topology type: {0}")]
    UnsupportedTopology(String),

    /// Registering another node would exceed [`NodeId::MAX_NODES`].
    #[error("Too many nodes: index {0} does not fit a node id")]
    TooManyNodes(usize),
}

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, GraphError>;
