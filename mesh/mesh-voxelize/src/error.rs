//! Error types for voxelization.

use thiserror::Error;
use vc_spatial::SpatialError;

/// Result type for voxelization operations.
pub type VoxelizeResult<T> = Result<T, VoxelizeError>;

/// Errors that can occur while voxelizing a surface mesh.
#[derive(Debug, Error)]
pub enum VoxelizeError {
    /// Mesh has no usable geometry (no vertices or no faces).
    #[error("mesh is empty: {vertices} vertices, {faces} faces")]
    EmptyMesh {
        /// Number of vertices in the rejected mesh.
        vertices: usize,
        /// Number of faces in the rejected mesh.
        faces: usize,
    },

    /// Requested voxel spacing cannot produce a grid.
    #[error("invalid voxel spacing: {0} mm (must be positive and finite)")]
    InvalidSpacing(f64),

    /// Occupancy grid allocation failed.
    #[error("grid allocation failed: {0}")]
    Spatial(#[from] SpatialError),
}
