//! Spur pruning.
//!
//! Thinning leaves short terminal twigs where the surface was locally
//! thick or noisy. Pruning walks outward from every leaf, measures the
//! candidate spur it sits on, and removes the candidates that fail the
//! length heuristics. Junctions are never removed, and all removal
//! decisions are made against the unmodified input graph before any
//! node is dropped.

use std::fmt;

use centerline_types::{NodeId, SkeletonGraph};
use nalgebra::{Point3, Vector3};
use tracing::info;

use crate::filter::retain_nodes;
use crate::params::PruneParams;

/// Result of a pruning pass.
#[derive(Debug, Clone)]
pub struct PruneOutcome {
    /// The cleaned graph, node ids re-densified.
    pub graph: SkeletonGraph,
    /// Leaves evaluated as spur candidates.
    pub leaves_examined: usize,
    /// Candidate spurs removed.
    pub spurs_removed: usize,
    /// Spurs under the normal threshold kept by the sensitive region.
    pub spurs_preserved_sensitive: usize,
    /// Nodes removed across all pruned spurs.
    pub nodes_removed: usize,
}

impl fmt::Display for PruneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "removed {}/{} spur candidates ({} nodes), {} preserved in sensitive region",
            self.spurs_removed,
            self.leaves_examined,
            self.nodes_removed,
            self.spurs_preserved_sensitive,
        )
    }
}

/// A candidate spur: the leaf-side chain of degree-≤2 nodes, plus the
/// junction the walk reached when it did not dead-end. The junction is
/// never part of `nodes`.
struct SpurPath {
    nodes: Vec<NodeId>,
    junction: Option<NodeId>,
}

/// Removes spurs that fail the length heuristics.
///
/// From each leaf, the walk follows degree-≤2 nodes until a junction or
/// a dead end. The candidate is preserved when its physical length
/// exceeds `min_spur_length_mm`, or when it lies in the sensitive
/// region and exceeds half that threshold. Otherwise every walked node
/// is marked; marks are applied in one batch after all leaves are
/// evaluated. A dead-ended candidate has no junction, so a fragment
/// shorter than the threshold disappears entirely. Junction-to-junction
/// segments are never candidates: walks only start at leaves.
#[must_use]
pub fn prune_spurs(graph: &SkeletonGraph, params: &PruneParams) -> PruneOutcome {
    let mut marked = vec![false; graph.node_count()];
    let mut leaves_examined = 0_usize;
    let mut spurs_removed = 0_usize;
    let mut spurs_preserved_sensitive = 0_usize;

    let bounds = position_bounds(graph);

    for leaf in graph.leaves() {
        // An isolated path is walked once; its far leaf is already marked.
        if marked[leaf as usize] {
            continue;
        }
        leaves_examined += 1;

        let spur = trace_spur(graph, leaf);
        let length = spur_length(graph, &spur);
        if length > params.min_spur_length_mm {
            continue;
        }

        if let (Some(region), Some((lo, hi))) =
            (params.sensitive_region.as_ref(), bounds.as_ref())
        {
            if length > params.min_spur_length_mm * 0.5
                && region.contains(&mean_position(graph, &spur.nodes), lo, hi)
            {
                spurs_preserved_sensitive += 1;
                continue;
            }
        }

        spurs_removed += 1;
        for &node in &spur.nodes {
            marked[node as usize] = true;
        }
    }

    let keep: Vec<bool> = marked.iter().map(|&m| !m).collect();
    let pruned = retain_nodes(graph, &keep);
    let nodes_removed = graph.node_count() - pruned.node_count();

    info!(
        leaves_examined,
        spurs_removed,
        spurs_preserved_sensitive,
        nodes_removed,
        "Spur pruning complete"
    );

    PruneOutcome {
        graph: pruned,
        leaves_examined,
        spurs_removed,
        spurs_preserved_sensitive,
        nodes_removed,
    }
}

fn trace_spur(graph: &SkeletonGraph, leaf: NodeId) -> SpurPath {
    let mut nodes = vec![leaf];
    let mut prev: Option<NodeId> = None;
    let mut cur = leaf;

    // A degree-≤2 chain cannot revisit a node; the cap only guards
    // against malformed input.
    for _ in 0..graph.node_count() {
        let next = graph
            .neighbors(cur)
            .iter()
            .copied()
            .find(|&n| Some(n) != prev);
        let Some(next) = next else { break };
        if graph.degree(next) >= 3 {
            return SpurPath {
                nodes,
                junction: Some(next),
            };
        }
        nodes.push(next);
        prev = Some(cur);
        cur = next;
    }

    SpurPath {
        nodes,
        junction: None,
    }
}

/// Physical length of a candidate, including the final hop onto the
/// junction when the walk reached one.
fn spur_length(graph: &SkeletonGraph, spur: &SpurPath) -> f64 {
    let mut length = 0.0;
    for pair in spur.nodes.windows(2) {
        length += (position(graph, pair[1]) - position(graph, pair[0])).norm();
    }
    if let (Some(junction), Some(&last)) = (spur.junction, spur.nodes.last()) {
        length += (position(graph, junction) - position(graph, last)).norm();
    }
    length
}

#[allow(clippy::cast_precision_loss)]
fn mean_position(graph: &SkeletonGraph, nodes: &[NodeId]) -> Point3<f64> {
    let mut sum = Vector3::zeros();
    for &id in nodes {
        sum += position(graph, id).coords;
    }
    Point3::from(sum / nodes.len().max(1) as f64)
}

fn position_bounds(graph: &SkeletonGraph) -> Option<(Point3<f64>, Point3<f64>)> {
    let mut nodes = graph.nodes().iter();
    let first = nodes.next()?;
    let (mut lo, mut hi) = (first.position, first.position);
    for node in nodes {
        for i in 0..3 {
            lo[i] = lo[i].min(node.position[i]);
            hi[i] = hi[i].max(node.position[i]);
        }
    }
    Some((lo, hi))
}

fn position(graph: &SkeletonGraph, id: NodeId) -> Point3<f64> {
    graph.nodes()[id as usize].position
}

#[cfg(test)]
mod tests {
    use vc_spatial::VoxelCoord;

    use crate::params::SensitiveRegion;

    use super::*;

    #[allow(clippy::cast_possible_truncation)]
    fn add_at(graph: &mut SkeletonGraph, x: f64, y: f64) -> NodeId {
        let index = graph.node_count() as i32;
        graph.add_node(VoxelCoord::new(index, 0, 0), Point3::new(x, y, 0.0))
    }

    fn chain(graph: &mut SkeletonGraph, from: NodeId, points: &[(f64, f64)]) -> NodeId {
        let mut prev = from;
        for &(x, y) in points {
            let id = add_at(graph, x, y);
            graph.add_edge(prev, id);
            prev = id;
        }
        prev
    }

    /// Junction at the origin with two 2.0 mm arms and one short stub.
    fn junction_with_stub(stub: &[(f64, f64)]) -> (SkeletonGraph, NodeId) {
        let mut graph = SkeletonGraph::new();
        let junction = add_at(&mut graph, 0.0, 0.0);
        chain(
            &mut graph,
            junction,
            &[(-0.5, 0.0), (-1.0, 0.0), (-1.5, 0.0), (-2.0, 0.0)],
        );
        chain(
            &mut graph,
            junction,
            &[(0.0, -0.5), (0.0, -1.0), (0.0, -1.5), (0.0, -2.0)],
        );
        chain(&mut graph, junction, stub);
        (graph, junction)
    }

    fn no_region() -> PruneParams {
        PruneParams::new().with_sensitive_region(None)
    }

    #[test]
    fn short_spur_below_threshold_is_pruned() {
        let (graph, junction) = junction_with_stub(&[(0.5, 0.0)]);
        let before = graph.node_count();

        let outcome = prune_spurs(&graph, &no_region());

        assert_eq!(outcome.spurs_removed, 1);
        assert_eq!(outcome.nodes_removed, 1);
        assert_eq!(outcome.graph.node_count(), before - 1);
        // The junction itself survives and drops to degree 2.
        let voxel = graph.node(junction).voxel;
        let kept = outcome
            .graph
            .nodes()
            .iter()
            .find(|n| n.voxel == voxel)
            .unwrap();
        assert_eq!(outcome.graph.degree(kept.id), 2);
    }

    #[test]
    fn long_spur_above_threshold_is_preserved() {
        let (graph, _) = junction_with_stub(&[(0.5, 0.0), (1.0, 0.0), (1.5, 0.0)]);
        let outcome = prune_spurs(&graph, &no_region());

        assert_eq!(outcome.spurs_removed, 0);
        assert_eq!(outcome.nodes_removed, 0);
        assert_eq!(outcome.graph.node_count(), graph.node_count());
        assert_eq!(outcome.leaves_examined, 3);
    }

    #[test]
    fn sensitive_region_relaxes_the_threshold() {
        // Backbone spanning y in [0, 10] with identical 0.7 mm stubs at
        // y = 8 (inside the upper-half region) and y = 2 (outside).
        let mut graph = SkeletonGraph::new();
        let base = add_at(&mut graph, 0.0, 0.0);
        chain(
            &mut graph,
            base,
            &(1..=10).map(|y| (0.0, f64::from(y))).collect::<Vec<_>>(),
        );
        let high = graph
            .nodes()
            .iter()
            .find(|n| n.position.y == 8.0)
            .unwrap()
            .id;
        let low = graph
            .nodes()
            .iter()
            .find(|n| n.position.y == 2.0)
            .unwrap()
            .id;
        chain(&mut graph, high, &[(0.7, 8.0)]);
        chain(&mut graph, low, &[(0.7, 2.0)]);

        let params = PruneParams::new()
            .with_sensitive_region(Some(SensitiveRegion::default()));
        let outcome = prune_spurs(&graph, &params);

        assert_eq!(outcome.spurs_preserved_sensitive, 1);
        assert_eq!(outcome.spurs_removed, 1);
        assert_eq!(outcome.graph.node_count(), graph.node_count() - 1);

        // Without the region both stubs go.
        let outcome = prune_spurs(&graph, &no_region());
        assert_eq!(outcome.spurs_preserved_sensitive, 0);
        assert_eq!(outcome.spurs_removed, 2);
    }

    #[test]
    fn short_isolated_fragment_disappears_entirely() {
        let mut graph = SkeletonGraph::new();
        let a = add_at(&mut graph, 0.0, 0.0);
        chain(&mut graph, a, &[(0.4, 0.0)]);

        let outcome = prune_spurs(&graph, &no_region());

        assert_eq!(outcome.leaves_examined, 1);
        assert_eq!(outcome.spurs_removed, 1);
        assert_eq!(outcome.nodes_removed, 2);
        assert!(outcome.graph.is_empty());
    }

    #[test]
    fn long_isolated_path_survives_from_both_ends() {
        let mut graph = SkeletonGraph::new();
        let a = add_at(&mut graph, 0.0, 0.0);
        chain(&mut graph, a, &[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);

        let outcome = prune_spurs(&graph, &no_region());
        assert_eq!(outcome.spurs_removed, 0);
        assert_eq!(outcome.graph.node_count(), 4);
        assert_eq!(outcome.graph.edge_count(), 3);
    }

    #[test]
    fn pruning_never_grows_the_graph_and_keeps_junctions() {
        let (graph, junction) = junction_with_stub(&[(0.5, 0.0)]);
        let junction_voxel = graph.node(junction).voxel;

        let outcome = prune_spurs(&graph, &PruneParams::default());

        assert!(outcome.graph.node_count() <= graph.node_count());
        assert!(outcome
            .graph
            .nodes()
            .iter()
            .any(|n| n.voxel == junction_voxel));
    }

    #[test]
    fn outcome_display_summarizes_counts() {
        let (graph, _) = junction_with_stub(&[(0.5, 0.0)]);
        let outcome = prune_spurs(&graph, &no_region());
        assert_eq!(
            outcome.to_string(),
            "removed 1/3 spur candidates (1 nodes), 0 preserved in sensitive region"
        );
    }
}
