//! Topology data models.
//!
//! This module provides the core data structures for representing networks:
//! - [`Topology`]: Labelled adjacency lists with a disabled-node/link overlay
//! - [`TopologySnapshot`]: Read-only plain-data view for renderers
//! - [`NodeId`], [`Weight`], [`Distance`], [`ComponentId`]: Graph value types

pub mod node;
pub mod snapshot;
pub mod topology;

pub use node::{ComponentId, Distance, NodeId, Weight};
pub use snapshot::{LinkSnapshot, TopologySnapshot};
pub use topology::{Link, LinkRecord, Topology};
