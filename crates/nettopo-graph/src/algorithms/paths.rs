//! Simple-path enumeration and path redundancy.
//!
//! Enumerates every path between two nodes that visits no node twice, using
//! an explicit stack of frames instead of recursion. The number of simple
//! paths grows exponentially on dense graphs; [`PathConfig`] can cap the
//! search by path count or path length. The defaults are unbounded.

use tracing::{debug, warn};

use crate::models::{NodeId, Topology};

/// Path enumeration limits.
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Stop after this many paths.
    pub max_paths: Option<usize>,
    /// Ignore paths with more links than this.
    pub max_depth: Option<usize>,
}

impl PathConfig {
    /// Create an unbounded configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of paths.
    pub fn with_max_paths(mut self, max: usize) -> Self {
        self.max_paths = Some(max);
        self
    }

    /// Set the maximum number of links per path.
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }
}

/// Result of a path enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSearch {
    /// Paths found, each listing labels from start to end.
    pub paths: Vec<Vec<String>>,
    /// Set when a path beyond `max_paths` exists or `max_depth` pruned a branch.
    pub truncated: bool,
}

/// One DFS level: a node on the current path and its unexplored neighbors.
struct Frame {
    node: NodeId,
    neighbors: Vec<NodeId>,
    next: usize,
}

fn enumerate(
    topology: &Topology,
    source: NodeId,
    target: NodeId,
    config: &PathConfig,
) -> (Vec<Vec<NodeId>>, bool) {
    if topology.is_disabled(source) || topology.is_disabled(target) {
        return (Vec::new(), false);
    }
    if source == target {
        return (vec![vec![source]], false);
    }

    let mut paths = Vec::new();
    let mut truncated = false;
    let mut on_path = vec![false; topology.node_count()];
    let mut path = vec![source];
    let mut stack = vec![Frame {
        node: source,
        neighbors: topology.active_neighbor_ids(source),
        next: 0,
    }];
    on_path[source.index()] = true;

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.neighbors.len() {
            let node = frame.node;
            stack.pop();
            path.pop();
            on_path[node.index()] = false;
            continue;
        }

        let next = frame.neighbors[frame.next];
        frame.next += 1;

        if on_path[next.index()] {
            continue;
        }

        if next == target {
            // A path past the cap exists, so the count is a lower bound
            if config.max_paths.is_some_and(|max| paths.len() >= max) {
                truncated = true;
                break;
            }
            let mut found = path.clone();
            found.push(next);
            paths.push(found);
            continue;
        }

        // Reaching the target from `next` takes at least path.len() + 1 links
        if config.max_depth.is_some_and(|max| path.len() >= max) {
            truncated = true;
            continue;
        }

        on_path[next.index()] = true;
        path.push(next);
        stack.push(Frame {
            node: next,
            neighbors: topology.active_neighbor_ids(next),
            next: 0,
        });
    }

    (paths, truncated)
}

/// Every simple path from `start` to `end` over active links.
///
/// Empty if either endpoint is unknown or disabled. `start == end` yields
/// the single one-node path.
pub fn all_simple_paths(topology: &Topology, start: &str, end: &str) -> Vec<Vec<String>> {
    all_simple_paths_with_config(topology, start, end, &PathConfig::default()).paths
}

/// Simple-path enumeration with limits.
pub fn all_simple_paths_with_config(
    topology: &Topology,
    start: &str,
    end: &str,
    config: &PathConfig,
) -> PathSearch {
    let (Some(source), Some(target)) = (topology.lookup(start), topology.lookup(end)) else {
        return PathSearch::default();
    };

    let (paths, truncated) = enumerate(topology, source, target, config);
    if truncated {
        warn!(
            "Path search '{}' -> '{}' stopped early at {} paths",
            start,
            end,
            paths.len()
        );
    } else {
        debug!("Found {} simple paths '{}' -> '{}'", paths.len(), start, end);
    }

    PathSearch {
        paths: paths
            .into_iter()
            .map(|p| p.into_iter().map(|id| topology.label(id).to_string()).collect())
            .collect(),
        truncated,
    }
}

/// Number of simple paths between two nodes; 0 if either is unknown.
pub fn path_redundancy(topology: &Topology, start: &str, end: &str) -> usize {
    match (topology.lookup(start), topology.lookup(end)) {
        (Some(source), Some(target)) => {
            enumerate(topology, source, target, &PathConfig::default())
                .0
                .len()
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weight;

    fn make_square() -> Topology {
        let mut topology = Topology::new();
        for label in ["A", "B", "C", "D"] {
            topology.add_node(label).unwrap();
        }
        topology.add_edge("A", "B", Weight::new(1)).unwrap();
        topology.add_edge("B", "C", Weight::new(2)).unwrap();
        topology.add_edge("C", "D", Weight::new(1)).unwrap();
        topology.add_edge("A", "D", Weight::new(4)).unwrap();
        topology
    }

    fn make_complete(n: usize) -> Topology {
        let mut topology = Topology::new();
        for i in 0..n {
            topology.add_node(&i.to_string()).unwrap();
        }
        for i in 0..n {
            for j in (i + 1)..n {
                topology
                    .add_edge(&i.to_string(), &j.to_string(), Weight::new(1))
                    .unwrap();
            }
        }
        topology
    }

    #[test]
    fn test_square_paths() {
        let topology = make_square();
        let mut paths = all_simple_paths(&topology, "A", "C");
        paths.sort();

        assert_eq!(paths, vec![vec!["A", "B", "C"], vec!["A", "D", "C"]]);
        assert_eq!(path_redundancy(&topology, "A", "C"), 2);
    }

    #[test]
    fn test_same_endpoint() {
        let topology = make_square();
        assert_eq!(all_simple_paths(&topology, "B", "B"), vec![vec!["B"]]);
        assert_eq!(path_redundancy(&topology, "B", "B"), 1);
    }

    #[test]
    fn test_unknown_endpoint() {
        let topology = make_square();
        assert!(all_simple_paths(&topology, "A", "Z").is_empty());
        assert_eq!(path_redundancy(&topology, "Z", "A"), 0);
    }

    #[test]
    fn test_disconnected_components() {
        let mut topology = make_square();
        topology.connect("X", "Y", Weight::new(1)).unwrap();
        assert_eq!(path_redundancy(&topology, "A", "X"), 0);
    }

    #[test]
    fn test_new_edge_adds_path() {
        let mut topology = make_square();
        let before = path_redundancy(&topology, "A", "C");

        topology.add_edge("A", "C", Weight::new(7)).unwrap();
        let after = path_redundancy(&topology, "A", "C");
        assert!(after > before);
        assert_eq!(after, 3);
    }

    #[test]
    fn test_parallel_edges_not_double_counted() {
        let mut topology = make_square();
        topology.add_edge("A", "B", Weight::new(9)).unwrap();
        assert_eq!(path_redundancy(&topology, "A", "C"), 2);
        assert_eq!(path_redundancy(&topology, "A", "B"), 2);
    }

    #[test]
    fn test_overlay_respected() {
        let mut topology = make_square();
        topology.disable_node("D").unwrap();
        assert_eq!(all_simple_paths(&topology, "A", "C"), vec![vec!["A", "B", "C"]]);

        topology.disable_link("B", "C").unwrap();
        assert_eq!(path_redundancy(&topology, "A", "C"), 0);

        // Disabled endpoint has no paths
        assert_eq!(path_redundancy(&topology, "D", "A"), 0);
    }

    #[test]
    fn test_complete_graph_count() {
        // Between two nodes of K6: sum of arrangements of the 4 others
        // 1 + 4 + 12 + 24 + 24
        let topology = make_complete(6);
        assert_eq!(path_redundancy(&topology, "0", "5"), 65);

        let paths = all_simple_paths(&topology, "0", "5");
        for path in &paths {
            let mut sorted = path.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), path.len(), "repeated node in {:?}", path);
        }
    }

    #[test]
    fn test_max_paths_cap() {
        let topology = make_complete(6);
        let config = PathConfig::new().with_max_paths(10);
        let search = all_simple_paths_with_config(&topology, "0", "5", &config);

        assert_eq!(search.paths.len(), 10);
        assert!(search.truncated);
    }

    #[test]
    fn test_max_paths_exact_fit() {
        // Exactly two paths exist, so a cap of two loses nothing
        let topology = make_square();
        let config = PathConfig::new().with_max_paths(2);
        let search = all_simple_paths_with_config(&topology, "A", "C", &config);

        assert_eq!(search.paths.len(), 2);
        assert!(!search.truncated);

        let config = PathConfig::new().with_max_paths(1);
        let search = all_simple_paths_with_config(&topology, "A", "C", &config);
        assert_eq!(search.paths.len(), 1);
        assert!(search.truncated);
    }

    #[test]
    fn test_max_paths_zero() {
        let topology = make_square();
        let config = PathConfig::new().with_max_paths(0);

        let search = all_simple_paths_with_config(&topology, "A", "C", &config);
        assert!(search.paths.is_empty());
        assert!(search.truncated);

        // No path at all: nothing was cut off
        let search = all_simple_paths_with_config(&topology, "A", "Z", &config);
        assert!(!search.truncated);
    }

    #[test]
    fn test_max_depth_cap() {
        let topology = make_complete(6);
        let config = PathConfig::new().with_max_depth(2);
        let search = all_simple_paths_with_config(&topology, "0", "5", &config);

        // Direct link plus one path through each of the 4 other nodes
        assert_eq!(search.paths.len(), 5);
        assert!(search.paths.iter().all(|p| p.len() <= 3));
        assert!(search.truncated);
    }

    #[test]
    fn test_uncapped_not_truncated() {
        let topology = make_square();
        let search = all_simple_paths_with_config(&topology, "A", "C", &PathConfig::new());
        assert_eq!(search.paths.len(), 2);
        assert!(!search.truncated);
    }
}
