//! Skeleton graph construction.

use std::collections::HashMap;

use centerline_extract::Skeleton;
use centerline_types::{GraphError, GraphResult, NodeId, SkeletonGraph};
use tracing::info;
use vc_spatial::VoxelCoord;

/// Builds the adjacency graph of a voxel skeleton.
///
/// One node per skeleton voxel, positioned at the voxel's world center,
/// and one edge per voxel pair within each other's 26-neighborhood.
/// Node ids follow the skeleton's scan order and adjacency lists are
/// kept sorted, so the same skeleton always yields the same graph.
///
/// # Errors
///
/// Returns [`GraphError::EmptySkeleton`] when the skeleton has no
/// voxels.
pub fn build_graph(skeleton: &Skeleton) -> GraphResult<SkeletonGraph> {
    if skeleton.is_empty() {
        return Err(GraphError::EmptySkeleton);
    }

    let mut graph = SkeletonGraph::with_capacity(skeleton.voxel_count());
    let mut index: HashMap<VoxelCoord, NodeId> =
        HashMap::with_capacity(skeleton.voxel_count());
    for &voxel in &skeleton.voxels {
        let id = graph.add_node(voxel, skeleton.world_center(voxel));
        index.insert(voxel, id);
    }

    for &voxel in &skeleton.voxels {
        let Some(&id) = index.get(&voxel) else { continue };
        for neighbor in voxel.all_neighbors() {
            if let Some(&other) = index.get(&neighbor) {
                // Each unordered pair is visited from both sides; insert
                // from the lower id only.
                if other > id {
                    graph.add_edge(id, other);
                }
            }
        }
    }

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        junctions = graph.num_junctions(),
        endpoints = graph.num_endpoints(),
        "Built skeleton graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use centerline_types::NodeKind;
    use nalgebra::Point3;

    use super::*;

    fn skeleton_of(voxels: Vec<VoxelCoord>) -> Skeleton {
        Skeleton {
            voxels,
            origin: Point3::origin(),
            spacing: 1.0,
            iterations: 1,
            removed_voxels: 0,
        }
    }

    #[test]
    fn empty_skeleton_is_an_error() {
        let err = build_graph(&skeleton_of(Vec::new())).unwrap_err();
        assert_eq!(err, GraphError::EmptySkeleton);
    }

    #[test]
    fn straight_line_becomes_a_path() {
        let skeleton = skeleton_of((0..5).map(|x| VoxelCoord::new(x, 0, 0)).collect());
        let graph = build_graph(&skeleton).unwrap();

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.kind(0), NodeKind::Endpoint);
        assert_eq!(graph.kind(2), NodeKind::Interior);
        assert_eq!(graph.kind(4), NodeKind::Endpoint);
        assert_eq!(graph.leaves().collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn corner_voxels_form_a_triangle() {
        // The diagonal pair is Chebyshev-adjacent, closing the corner.
        let skeleton = skeleton_of(vec![
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(1, 0, 0),
            VoxelCoord::new(1, 1, 0),
        ]);
        let graph = build_graph(&skeleton).unwrap();

        assert_eq!(graph.edge_count(), 3);
        for id in 0..3 {
            assert_eq!(graph.degree(id), 2);
        }
    }

    #[test]
    fn node_positions_are_voxel_world_centers() {
        let skeleton = Skeleton {
            voxels: vec![VoxelCoord::new(2, 3, 4)],
            origin: Point3::new(-1.0, 0.5, 2.0),
            spacing: 0.4,
            iterations: 1,
            removed_voxels: 0,
        };
        let graph = build_graph(&skeleton).unwrap();
        let node = graph.node(0);
        assert_eq!(node.position, skeleton.world_center(VoxelCoord::new(2, 3, 4)));
        assert_eq!(node.voxel, VoxelCoord::new(2, 3, 4));
    }

    #[test]
    fn distant_voxels_stay_disconnected() {
        let skeleton = skeleton_of(vec![
            VoxelCoord::new(0, 0, 0),
            VoxelCoord::new(5, 5, 5),
        ]);
        let graph = build_graph(&skeleton).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.kind(0), NodeKind::Isolated);
        assert_eq!(graph.kind(1), NodeKind::Isolated);
    }
}
