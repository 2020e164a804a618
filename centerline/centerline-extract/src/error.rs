//! Error types for skeleton extraction.

use thiserror::Error;

/// Result type for skeleton extraction.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Errors that can occur during skeleton extraction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    /// The occupancy grid has no occupied voxels to thin.
    #[error("occupancy grid has no occupied voxels ({nx}x{ny}x{nz})")]
    EmptyGrid {
        /// Grid cells along X.
        nx: u32,
        /// Grid cells along Y.
        ny: u32,
        /// Grid cells along Z.
        nz: u32,
    },
}
