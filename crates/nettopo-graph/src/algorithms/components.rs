//! Connected components of the active network.

use crate::algorithms::union_find::UnionFind;
use crate::models::{ComponentId, Topology};

/// Component id per node, indexed by [`NodeId`](crate::NodeId).
///
/// Only traversable links join components. Disabled nodes are left
/// [`ComponentId::UNASSIGNED`]; active ids are dense, numbered in
/// registration order of each component's first node.
pub fn connected_components(topology: &Topology) -> Vec<ComponentId> {
    let mut uf = UnionFind::new(topology.node_count());

    for link in topology.links() {
        if topology.is_traversable(link.source, link.destination) {
            uf.union(link.source, link.destination);
        }
    }

    let roots = uf.component_ids();
    let mut remap = vec![ComponentId::UNASSIGNED; roots.len()];
    let mut next = 0u32;

    topology
        .node_ids()
        .map(|id| {
            if topology.is_disabled(id) {
                return ComponentId::UNASSIGNED;
            }
            let root = roots[id.index()].get() as usize;
            if !remap[root].is_assigned() {
                remap[root] = ComponentId::new(next);
                next += 1;
            }
            remap[root]
        })
        .collect()
}

/// Number of distinct assigned components.
pub fn count_components(components: &[ComponentId]) -> usize {
    components
        .iter()
        .filter(|c| c.is_assigned())
        .map(|c| c.get())
        .max()
        .map_or(0, |m| m as usize + 1)
}
