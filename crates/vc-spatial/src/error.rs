//! Error types for spatial operations.

use crate::VoxelCoord;

/// Errors that can occur during spatial operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The voxel spacing must be positive and finite.
    #[error("voxel spacing must be positive and finite, got {0} mm")]
    InvalidSpacing(f64),

    /// The grid dimensions are invalid (every axis needs at least one voxel).
    #[error("invalid grid dimensions: {nx}x{ny}x{nz}")]
    InvalidDimensions {
        /// Voxel count along X.
        nx: u32,
        /// Voxel count along Y.
        ny: u32,
        /// Voxel count along Z.
        nz: u32,
    },

    /// A coordinate lies outside the allocated grid.
    #[error("coordinate {coord:?} is outside the grid")]
    OutOfBounds {
        /// The offending coordinate.
        coord: VoxelCoord,
    },

    /// The requested grid does not fit in addressable memory.
    #[error("grid cell count overflows the address space")]
    IntegerOverflow,
}
