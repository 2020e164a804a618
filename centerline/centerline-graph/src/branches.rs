//! Branch segmentation.

use centerline_types::{Branch, GraphError, GraphResult, NodeId, SkeletonGraph};
use nalgebra::Point3;
use tracing::info;

/// Per-direction edge consumption, parallel to the adjacency lists.
struct UsedLinks {
    used: Vec<Vec<bool>>,
}

impl UsedLinks {
    fn new(graph: &SkeletonGraph) -> Self {
        Self {
            used: graph
                .nodes()
                .iter()
                .map(|node| vec![false; graph.neighbors(node.id).len()])
                .collect(),
        }
    }

    fn is_used(&self, node: NodeId, slot: usize) -> bool {
        self.used[node as usize][slot]
    }

    /// Consumes the edge in both directions.
    fn mark(&mut self, graph: &SkeletonGraph, a: NodeId, b: NodeId) {
        if let Ok(slot) = graph.neighbors(a).binary_search(&b) {
            self.used[a as usize][slot] = true;
        }
        if let Ok(slot) = graph.neighbors(b).binary_search(&a) {
            self.used[b as usize][slot] = true;
        }
    }
}

/// Decomposes a skeleton graph into branches.
///
/// A branch runs from one key node (degree ≠ 2) to another through
/// interior degree-2 nodes. Walks consume each edge in both directions,
/// so a junction-to-junction segment appears exactly once no matter
/// which end it is first walked from. Components made entirely of
/// degree-2 nodes have no key node; their lowest-id node anchors the
/// cycle, which becomes a single closed branch whose first and last
/// points coincide.
///
/// Every edge lands in exactly one branch: the sum over branches of
/// (point count − 1) equals the graph's edge count. Isolated nodes
/// produce no branch.
///
/// # Errors
///
/// Returns [`GraphError::NoStructure`] when the graph is empty or
/// contains only isolated nodes.
pub fn segment_branches(graph: &SkeletonGraph) -> GraphResult<Vec<Branch>> {
    if graph.is_empty() {
        return Err(GraphError::NoStructure { nodes: 0, edges: 0 });
    }

    let mut used = UsedLinks::new(graph);
    let mut branches = Vec::new();

    // Walks out of every key node first.
    for node in graph.nodes() {
        if graph.degree(node.id) == 2 {
            continue;
        }
        for slot in 0..graph.neighbors(node.id).len() {
            if !used.is_used(node.id, slot) {
                branches.push(trace_branch(graph, &mut used, node.id, slot));
            }
        }
    }

    // Whatever is left is a pure cycle; anchor it at its lowest id.
    for node in graph.nodes() {
        for slot in 0..graph.neighbors(node.id).len() {
            if !used.is_used(node.id, slot) {
                branches.push(trace_branch(graph, &mut used, node.id, slot));
            }
        }
    }

    if branches.is_empty() {
        return Err(GraphError::NoStructure {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        });
    }

    info!(
        branches = branches.len(),
        edges = graph.edge_count(),
        "Segmented skeleton into branches"
    );
    Ok(branches)
}

/// Walks from `start` through its neighbor at `slot` until the next key
/// node, or until the walk returns to `start` (a cycle).
fn trace_branch(
    graph: &SkeletonGraph,
    used: &mut UsedLinks,
    start: NodeId,
    slot: usize,
) -> Branch {
    let mut points = vec![position(graph, start)];
    let mut prev = start;
    let mut cur = graph.neighbors(start)[slot];
    used.mark(graph, start, cur);

    for _ in 0..graph.edge_count().max(1) {
        points.push(position(graph, cur));
        if cur == start || graph.degree(cur) != 2 {
            break;
        }
        let neighbors = graph.neighbors(cur);
        let next = if neighbors[0] == prev {
            neighbors[1]
        } else {
            neighbors[0]
        };
        used.mark(graph, cur, next);
        prev = cur;
        cur = next;
    }

    Branch::new(points, start, cur)
}

fn position(graph: &SkeletonGraph, id: NodeId) -> Point3<f64> {
    graph.nodes()[id as usize].position
}

#[cfg(test)]
mod tests {
    use vc_spatial::VoxelCoord;

    use super::*;

    #[allow(clippy::cast_possible_truncation)]
    fn add(graph: &mut SkeletonGraph, x: f64, y: f64) -> NodeId {
        let index = graph.node_count() as i32;
        graph.add_node(VoxelCoord::new(index, 0, 0), Point3::new(x, y, 0.0))
    }

    fn covered_edges(branches: &[Branch]) -> usize {
        branches.iter().map(|b| b.point_count() - 1).sum()
    }

    #[test]
    fn empty_graph_is_an_error() {
        let graph = SkeletonGraph::new();
        let err = segment_branches(&graph).unwrap_err();
        assert_eq!(err, GraphError::NoStructure { nodes: 0, edges: 0 });
    }

    #[test]
    fn isolated_nodes_only_is_an_error() {
        let mut graph = SkeletonGraph::new();
        add(&mut graph, 0.0, 0.0);
        add(&mut graph, 5.0, 0.0);

        let err = segment_branches(&graph).unwrap_err();
        assert_eq!(err, GraphError::NoStructure { nodes: 2, edges: 0 });
    }

    #[test]
    fn simple_path_is_one_branch() {
        let mut graph = SkeletonGraph::new();
        let ids: Vec<_> = (0..4).map(|x| add(&mut graph, f64::from(x), 0.0)).collect();
        for pair in ids.windows(2) {
            graph.add_edge(pair[0], pair[1]);
        }

        let branches = segment_branches(&graph).unwrap();
        assert_eq!(branches.len(), 1);
        assert_eq!(branches[0].point_count(), 4);
        assert_eq!(branches[0].start_node, 0);
        assert_eq!(branches[0].end_node, 3);
        assert_eq!(covered_edges(&branches), graph.edge_count());
    }

    #[test]
    fn bifurcation_yields_one_branch_per_arm() {
        let mut graph = SkeletonGraph::new();
        let junction = add(&mut graph, 0.0, 0.0);
        for (dx, dy) in [(1.0, 0.0), (0.0, 1.0), (-1.0, -1.0)] {
            let mut prev = junction;
            for step in 1..=3 {
                let id = add(&mut graph, dx * f64::from(step), dy * f64::from(step));
                graph.add_edge(prev, id);
                prev = id;
            }
        }

        let branches = segment_branches(&graph).unwrap();
        assert_eq!(branches.len(), 3);
        assert_eq!(covered_edges(&branches), graph.edge_count());
        for branch in &branches {
            assert!(branch.start_node == junction || branch.end_node == junction);
            assert_eq!(branch.point_count(), 4);
        }
    }

    #[test]
    fn pure_cycle_becomes_one_closed_branch() {
        let mut graph = SkeletonGraph::new();
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let ids: Vec<_> = corners.iter().map(|&(x, y)| add(&mut graph, x, y)).collect();
        for i in 0..4 {
            graph.add_edge(ids[i], ids[(i + 1) % 4]);
        }

        let branches = segment_branches(&graph).unwrap();
        assert_eq!(branches.len(), 1);
        let cycle = &branches[0];
        assert_eq!(cycle.start_node, cycle.end_node);
        assert!(cycle.is_closed());
        assert_eq!(cycle.point_count(), 5);
        assert_eq!(covered_edges(&branches), graph.edge_count());
    }

    #[test]
    fn cycle_attached_to_a_junction_closes_on_it() {
        // Square cycle with a two-node tail hanging off one corner.
        let mut graph = SkeletonGraph::new();
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let ids: Vec<_> = corners.iter().map(|&(x, y)| add(&mut graph, x, y)).collect();
        for i in 0..4 {
            graph.add_edge(ids[i], ids[(i + 1) % 4]);
        }
        let tail = add(&mut graph, -1.0, 0.0);
        graph.add_edge(ids[0], tail);
        let tip = add(&mut graph, -2.0, 0.0);
        graph.add_edge(tail, tip);

        let branches = segment_branches(&graph).unwrap();
        assert_eq!(branches.len(), 2);
        assert_eq!(covered_edges(&branches), graph.edge_count());

        let cycle = branches
            .iter()
            .find(|b| b.start_node == b.end_node)
            .unwrap();
        assert!(cycle.is_closed());
        assert_eq!(cycle.point_count(), 5);

        let tail_branch = branches
            .iter()
            .find(|b| b.start_node != b.end_node)
            .unwrap();
        assert_eq!(tail_branch.point_count(), 3);
    }

    #[test]
    fn isolated_node_beside_a_path_contributes_nothing() {
        let mut graph = SkeletonGraph::new();
        let a = add(&mut graph, 0.0, 0.0);
        let b = add(&mut graph, 1.0, 0.0);
        graph.add_edge(a, b);
        add(&mut graph, 9.0, 9.0);

        let branches = segment_branches(&graph).unwrap();
        assert_eq!(branches.len(), 1);
        assert_eq!(covered_edges(&branches), graph.edge_count());
    }

    #[test]
    fn segmentation_is_deterministic() {
        let mut graph = SkeletonGraph::new();
        let junction = add(&mut graph, 0.0, 0.0);
        for (dx, dy) in [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)] {
            let id = add(&mut graph, dx, dy);
            graph.add_edge(junction, id);
        }

        let first = segment_branches(&graph).unwrap();
        let second = segment_branches(&graph).unwrap();
        assert_eq!(first, second);
    }
}
