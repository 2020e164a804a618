//! Topological thinning of voxel occupancy grids.
//!
//! Reduces a solid occupancy grid to a one-voxel-thick skeleton that
//! preserves the connectivity of the original volume. Voxels are peeled
//! from the surface inward; a voxel is only removed when doing so cannot
//! split the structure, open a tunnel, or shorten a free end.
//!
//! ```
//! use nalgebra::Point3;
//! use vc_spatial::{VoxelCoord, VoxelGrid};
//! use centerline_extract::{extract_skeleton, SkeletonParams};
//!
//! let mut grid = VoxelGrid::try_new(0.5, Point3::origin(), (10, 3, 3))?;
//! for x in 0..10 {
//!     grid.set(VoxelCoord::new(x, 1, 1), true);
//! }
//! let skeleton = extract_skeleton(&grid, &SkeletonParams::default())?;
//! assert_eq!(skeleton.voxel_count(), 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod extract;
mod params;
mod result;
mod thin;
mod topology;

pub use error::{SkeletonError, SkeletonResult};
pub use extract::extract_skeleton;
pub use params::{SkeletonParams, ThinningAlgorithm};
pub use result::Skeleton;
