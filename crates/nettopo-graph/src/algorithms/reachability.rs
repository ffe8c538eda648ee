//! Reachability and connectivity analysis.
//!
//! Breadth-first search answers "how much of the active network can this node
//! reach" and "how many hops away is that node". Depth-first search answers
//! "is the whole network connected". All traversals follow only traversable
//! links (see [`Topology::active_links`]) and keep a visited set, so cycles and
//! parallel links never cause repeated visits.

use std::collections::VecDeque;

use tracing::trace;

use crate::models::{Distance, NodeId, Topology};
use crate::{GraphError, Result};

/// BFS from a single source, returning hop distances and parent pointers.
///
/// A disabled source reaches nothing, not even itself.
fn bfs_with_parents(topology: &Topology, source: NodeId) -> (Vec<Distance>, Vec<NodeId>) {
    let n = topology.node_count();
    let mut distances = vec![Distance::INFINITY; n];
    let mut parents = vec![NodeId::INVALID; n];

    if topology.is_disabled(source) {
        return (distances, parents);
    }

    let mut queue = VecDeque::new();
    distances[source.index()] = Distance::ZERO;
    parents[source.index()] = source;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let current = distances[node.index()];
        for link in topology.active_links(node) {
            let next = link.to.index();
            if distances[next] == Distance::INFINITY {
                distances[next] = current.increment();
                parents[next] = node;
                queue.push_back(link.to);
            }
        }
    }

    (distances, parents)
}

/// Iterative DFS marking every node reachable from `start`.
fn dfs_visited(topology: &Topology, start: NodeId) -> Vec<bool> {
    let mut visited = vec![false; topology.node_count()];
    let mut stack = vec![start];
    visited[start.index()] = true;

    while let Some(node) = stack.pop() {
        for link in topology.active_links(node) {
            if !visited[link.to.index()] {
                visited[link.to.index()] = true;
                stack.push(link.to);
            }
        }
    }

    visited
}

/// Percentage of active nodes reachable from `start`, including itself.
///
/// Returns 0.0 if `start` is unregistered or disabled, or if no node is
/// active.
pub fn reachability_percent(topology: &Topology, start: &str) -> f64 {
    let Some(source) = topology.lookup(start) else {
        return 0.0;
    };
    let total = topology.active_node_count();
    if total == 0 || topology.is_disabled(source) {
        return 0.0;
    }

    let (distances, _) = bfs_with_parents(topology, source);
    let reached = distances.iter().filter(|d| d.is_reachable()).count();
    trace!("'{}' reaches {} of {} active nodes", start, reached, total);

    reached as f64 / total as f64 * 100.0
}

/// Hop distance from `start` to every node, indexed by [`NodeId`].
///
/// Unreachable and disabled nodes get [`Distance::INFINITY`].
pub fn hop_distances(topology: &Topology, start: &str) -> Result<Vec<Distance>> {
    if topology.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let source = topology.node_id(start)?;
    Ok(bfs_with_parents(topology, source).0)
}

/// Number of links on a shortest path between two nodes.
///
/// `None` if either node is unknown or no active path exists.
pub fn hop_count(topology: &Topology, start: &str, end: &str) -> Option<u32> {
    let source = topology.lookup(start)?;
    let target = topology.lookup(end)?;
    let (distances, _) = bfs_with_parents(topology, source);
    let distance = distances[target.index()];
    distance.is_reachable().then_some(distance.get())
}

/// Labels along a shortest path from `start` to `end`, both included.
pub fn shortest_hop_path(topology: &Topology, start: &str, end: &str) -> Option<Vec<String>> {
    let source = topology.lookup(start)?;
    let target = topology.lookup(end)?;
    let (_, parents) = bfs_with_parents(topology, source);

    if !parents[target.index()].is_valid() {
        return None;
    }

    let mut path = vec![target];
    let mut current = target;
    while parents[current.index()] != current {
        current = parents[current.index()];
        path.push(current);
    }
    path.reverse();

    Some(
        path.into_iter()
            .map(|id| topology.label(id).to_string())
            .collect(),
    )
}

/// Check whether every registered node is reachable from the first one.
///
/// Disabled nodes still count as nodes that must be reached, so any disabled
/// node in a graph of two or more nodes makes this false. Use
/// [`is_active_connected`] to judge only the surviving network.
pub fn is_fully_connected(topology: &Topology) -> Result<bool> {
    if topology.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    let visited = dfs_visited(topology, NodeId::new(0));
    Ok(visited.iter().all(|&v| v))
}

/// Check whether all non-disabled nodes form one connected network.
///
/// Vacuously true when at most one node is active.
pub fn is_active_connected(topology: &Topology) -> bool {
    let Some(start) = topology.node_ids().find(|&id| !topology.is_disabled(id)) else {
        return true;
    };

    let visited = dfs_visited(topology, start);
    topology
        .node_ids()
        .all(|id| topology.is_disabled(id) || visited[id.index()])
}
