//! Topology analysis algorithms.
//!
//! This module provides the analyses run over a [`Topology`](crate::Topology):
//! - [`union_find`]: Disjoint-set forest
//! - [`reachability`]: BFS reachability, hop distances, DFS connectivity
//! - [`paths`]: Simple-path enumeration and redundancy
//! - [`components`]: Connected components of the active network
//! - [`mst`]: Kruskal's minimum spanning tree
//! - [`fault_tolerance`]: Single-node-removal sweep

pub mod components;
pub mod fault_tolerance;
pub mod mst;
pub mod paths;
pub mod reachability;
pub mod union_find;

pub use components::{connected_components, count_components};
pub use fault_tolerance::{
    fault_tolerance_ratio, fault_tolerance_ratio_parallel, fault_tolerance_with_config,
    is_network_robust, FaultToleranceConfig, FaultToleranceReport, FailureOutcome,
};
pub use mst::{build_mst, spanning_forest, Edge, SpanningForest};
pub use paths::{
    all_simple_paths, all_simple_paths_with_config, path_redundancy, PathConfig, PathSearch,
};
pub use reachability::{
    hop_count, hop_distances, is_active_connected, is_fully_connected, reachability_percent,
    shortest_hop_path,
};
pub use union_find::UnionFind;
