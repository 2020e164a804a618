//! Spatial data structures for VascuForge.
//!
//! This crate provides the voxel-space foundation used across the VascuForge
//! ecosystem for voxelization, skeletonization, and grid traversal:
//!
//! - [`VoxelGrid`] - Dense 3D voxel lattice with world/grid conversion
//! - [`VoxelCoord`] - Integer voxel coordinates with 6/26 neighborhoods
//! - [`GridBounds`] - Axis-aligned inclusive bounds in grid space
//!
//! # Coordinate Systems
//!
//! The grid uses a **right-handed coordinate system** consistent with
//! mesh-types:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! World coordinates are continuous `f64` millimetres. Grid coordinates are
//! discrete `i32` indices. The [`VoxelGrid`] handles conversion between the
//! two: grid coordinate `(0, 0, 0)` owns the world box starting at the grid
//! origin.
//!
//! # Example
//!
//! ```
//! use vc_spatial::{VoxelGrid, VoxelCoord};
//! use nalgebra::Point3;
//!
//! // A 0.4mm grid big enough for a 10mm cube of anatomy plus margin.
//! let mut grid: VoxelGrid<bool> = VoxelGrid::from_world_bounds(
//!     0.4,
//!     Point3::origin(),
//!     Point3::new(10.0, 10.0, 10.0),
//!     1,
//! )?;
//!
//! // Mark the voxel containing a world point as occupied.
//! let coord = grid.world_to_grid(Point3::new(5.0, 5.0, 5.0));
//! grid.set(coord, true);
//!
//! assert!(grid.is_occupied(coord));
//! assert_eq!(grid.count_occupied(), 1);
//!
//! // Walk the occupied voxels' 26-neighborhoods.
//! for neighbor in coord.all_neighbors() {
//!     assert!(!grid.is_occupied(neighbor));
//! }
//! # Ok::<(), vc_spatial::SpatialError>(())
//! ```

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod grid;
mod voxel;

// Re-export core types
pub use error::SpatialError;
pub use grid::{GridBounds, GridBoundsIter, VoxelGrid};
pub use voxel::VoxelCoord;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
