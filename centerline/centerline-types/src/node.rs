//! Skeleton graph nodes.

use nalgebra::Point3;
use vc_spatial::VoxelCoord;

/// Dense node identifier within one [`SkeletonGraph`](crate::SkeletonGraph).
pub type NodeId = u32;

/// Topological role of a node, determined by its degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Degree 0: a stray voxel with no neighbors.
    Isolated,
    /// Degree 1: the free end of a branch.
    Endpoint,
    /// Degree 2: a run-of-branch node.
    Interior,
    /// Degree 3 or more: a branching point.
    Junction,
}

impl NodeKind {
    /// Classify a node by its degree.
    #[must_use]
    pub const fn from_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Isolated,
            1 => Self::Endpoint,
            2 => Self::Interior,
            _ => Self::Junction,
        }
    }
}

/// One skeleton voxel lifted into the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkeletonNode {
    /// Dense id; equals the node's index in the graph arena.
    pub id: NodeId,
    /// Grid coordinate of the originating skeleton voxel.
    pub voxel: VoxelCoord,
    /// World position (voxel center) in millimetres.
    pub position: Point3<f64>,
}
