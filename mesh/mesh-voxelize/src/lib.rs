//! Solid voxelization of triangle meshes.
//!
//! Converts a closed surface mesh into a dense boolean occupancy grid: a
//! surface stencil marks every voxel within half a voxel diagonal of a
//! triangle, a 6-connected exterior flood classifies the enclosed volume,
//! and an optional per-slice pass fills cross-section holes left by small
//! surface gaps. Skeleton extraction thins the resulting solid, so the
//! grid must be filled rather than a hollow shell.
//!
//! # Example
//!
//! ```
//! use mesh_types::cylinder;
//! use mesh_voxelize::{voxelize_surface, VoxelizeParams};
//! use nalgebra::Point3;
//!
//! let mesh = cylinder(Point3::origin(), Point3::new(0.0, 0.0, 10.0), 2.0, 24);
//! let result = voxelize_surface(&mesh, &VoxelizeParams::default())?;
//!
//! assert!(result.interior_voxels > 0);
//! assert_eq!(result.occupied_voxels(), result.grid.count_occupied());
//! # Ok::<(), mesh_voxelize::VoxelizeError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod distance;
mod error;
mod fill;
mod params;
mod raster;
mod voxelize;

pub use error::{VoxelizeError, VoxelizeResult};
pub use params::VoxelizeParams;
pub use voxelize::{voxelize_surface, Voxelization};

pub use distance::{closest_point_on_triangle, point_triangle_distance_squared};
