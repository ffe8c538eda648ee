//! Disjoint-set forest.
//!
//! Tracks which nodes have been joined into the same tree while Kruskal's
//! algorithm grows a spanning forest, and labels connected components.
//!
//! - `find(x)`: Representative of x's set, compressing the path on the way
//! - `union(x, y)`: Merge the sets of x and y by rank
//!
//! `find` is iterative so chain-shaped forests cannot exhaust the stack.
//! Indices are trusted: an out-of-range `NodeId` panics.

use crate::models::{ComponentId, NodeId};

/// Union-find with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `parent[i]` is the parent of node i, or i itself for a root.
    parent: Vec<NodeId>,
    /// Upper bound on the height of the tree rooted at i.
    rank: Vec<u32>,
    /// Number of disjoint sets.
    num_components: usize,
}

impl UnionFind {
    /// Create `n` singleton sets, each its own representative.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).map(NodeId::from_index).collect(),
            rank: vec![0; n],
            num_components: n,
        }
    }

    /// Number of disjoint sets.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node visited on the way up is re-pointed at the root.
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x;
        while self.parent[root.index()] != root {
            root = self.parent[root.index()];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node.index()];
            self.parent[node.index()] = root;
            node = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns false (and changes nothing) if they already share a set.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank[root_x.index()];
        let rank_y = self.rank[root_y.index()];
        match rank_x.cmp(&rank_y) {
            std::cmp::Ordering::Less => self.parent[root_x.index()] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y.index()] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y.index()] = root_x;
                self.rank[root_x.index()] += 1;
            }
        }

        self.num_components -= 1;
        true
    }

    /// Dense component id per node, numbered in order of first appearance.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut ids = vec![ComponentId::UNASSIGNED; n];
        let mut next = 0u32;

        for i in 0..n {
            let root = self.find(NodeId::from_index(i)).index();
            if !ids[root].is_assigned() {
                ids[root] = ComponentId::new(next);
                next += 1;
            }
            ids[i] = ids[root];
        }

        ids
    }

    #[cfg(test)]
    fn parent_of(&self, x: NodeId) -> NodeId {
        self.parent[x.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singleton_sets() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.num_components(), 5);

        for i in 0..5 {
            assert_eq!(uf.find(NodeId(i)), NodeId(i));
        }
    }

    #[test]
    fn test_union_basic() {
        let mut uf = UnionFind::new(5);

        assert!(uf.union(NodeId(0), NodeId(1)));
        assert_eq!(uf.num_components(), 4);
        assert_eq!(uf.find(NodeId(0)), uf.find(NodeId(1)));

        assert!(uf.union(NodeId(2), NodeId(3)));
        assert!(uf.union(NodeId(0), NodeId(2)));
        assert_eq!(uf.num_components(), 2);
        assert_eq!(uf.find(NodeId(1)), uf.find(NodeId(3)));
        assert_ne!(uf.find(NodeId(1)), uf.find(NodeId(4)));
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut uf = UnionFind::new(3);
        uf.union(NodeId(0), NodeId(1));
        uf.union(NodeId(1), NodeId(2));

        assert!(!uf.union(NodeId(0), NodeId(2)));
        assert_eq!(uf.num_components(), 1);
    }

    #[test]
    fn test_union_by_rank() {
        let mut uf = UnionFind::new(4);

        // Equal ranks: second root goes under the first
        uf.union(NodeId(0), NodeId(1));
        assert_eq!(uf.find(NodeId(1)), NodeId(0));

        // Singleton (rank 0) goes under the rank-1 root regardless of order
        uf.union(NodeId(2), NodeId(0));
        assert_eq!(uf.find(NodeId(2)), NodeId(0));
    }

    #[test]
    fn test_find_idempotent_after_compression() {
        let mut uf = UnionFind::new(6);
        for i in 0..5 {
            uf.union(NodeId(i), NodeId(i + 1));
        }

        for i in 0..6 {
            let root = uf.find(NodeId(i));
            assert_eq!(uf.find(root), root);
        }
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut uf = UnionFind::new(8);

        // Build a deeper tree by merging pairs, then pairs of pairs
        uf.union(NodeId(0), NodeId(1));
        uf.union(NodeId(2), NodeId(3));
        uf.union(NodeId(4), NodeId(5));
        uf.union(NodeId(6), NodeId(7));
        uf.union(NodeId(0), NodeId(2));
        uf.union(NodeId(4), NodeId(6));
        uf.union(NodeId(0), NodeId(4));

        let root = uf.find(NodeId(7));
        for i in 0..8 {
            uf.find(NodeId(i));
            let parent = uf.parent_of(NodeId(i));
            assert!(parent == root || NodeId(i) == root);
        }
    }

    #[test]
    fn test_long_chain_no_overflow() {
        let n = 200_000;
        let mut uf = UnionFind::new(n);
        for i in 0..(n as u32 - 1) {
            uf.union(NodeId(i + 1), NodeId(i));
        }
        assert_eq!(uf.num_components(), 1);
        assert_eq!(uf.find(NodeId(0)), uf.find(NodeId(n as u32 - 1)));
    }

    #[test]
    fn test_component_ids() {
        let mut uf = UnionFind::new(5);
        uf.union(NodeId(0), NodeId(1));
        uf.union(NodeId(2), NodeId(3));

        let ids = uf.component_ids();
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2], ids[3]);
        assert_ne!(ids[4], ids[0]);
        assert_ne!(ids[4], ids[2]);

        // Numbered in order of first appearance
        assert_eq!(ids[0], ComponentId::new(0));
        assert_eq!(ids[2], ComponentId::new(1));
        assert_eq!(ids[4], ComponentId::new(2));
    }

    #[test]
    fn test_empty_union_find() {
        let uf = UnionFind::new(0);
        assert_eq!(uf.num_components(), 0);
    }
}
