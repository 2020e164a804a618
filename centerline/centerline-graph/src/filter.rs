//! Subgraph extraction shared by the cleanup passes.

use centerline_types::{NodeId, SkeletonGraph};

/// Copies the nodes flagged in `keep` (indexed by node id) into a new
/// graph with dense ids, carrying every edge whose ends both survive.
pub(crate) fn retain_nodes(graph: &SkeletonGraph, keep: &[bool]) -> SkeletonGraph {
    let survivors = keep.iter().filter(|&&k| k).count();
    let mut out = SkeletonGraph::with_capacity(survivors);
    let mut remap: Vec<Option<NodeId>> = vec![None; graph.node_count()];

    for node in graph.nodes() {
        if keep[node.id as usize] {
            remap[node.id as usize] = Some(out.add_node(node.voxel, node.position));
        }
    }
    for node in graph.nodes() {
        let Some(a) = remap[node.id as usize] else { continue };
        for &neighbor in graph.neighbors(node.id) {
            if neighbor > node.id {
                if let Some(b) = remap[neighbor as usize] {
                    out.add_edge(a, b);
                }
            }
        }
    }

    out
}
