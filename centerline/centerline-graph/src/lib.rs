//! Topology cleanup and branch decomposition for voxel skeletons.
//!
//! Turns a voxel skeleton into an adjacency graph ([`build_graph`]),
//! removes thinning artifacts ([`prune_spurs`], [`select_components`]),
//! and decomposes the cleaned graph into branches
//! ([`segment_branches`]) ready for smoothing and measurement.
//!
//! ```
//! use centerline_extract::Skeleton;
//! use centerline_graph::{build_graph, segment_branches};
//! use nalgebra::Point3;
//! use vc_spatial::VoxelCoord;
//!
//! let skeleton = Skeleton {
//!     voxels: (0..5).map(|x| VoxelCoord::new(x, 0, 0)).collect(),
//!     origin: Point3::origin(),
//!     spacing: 0.4,
//!     iterations: 1,
//!     removed_voxels: 0,
//! };
//! let graph = build_graph(&skeleton)?;
//! let branches = segment_branches(&graph)?;
//! assert_eq!(branches.len(), 1);
//! assert_eq!(branches[0].point_count(), 5);
//! # Ok::<(), centerline_types::GraphError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod branches;
mod build;
mod components;
mod filter;
mod params;
mod prune;

pub use branches::segment_branches;
pub use build::build_graph;
pub use components::{select_components, ComponentOutcome};
pub use params::{Axis, ComponentParams, PruneParams, SensitiveRegion};
pub use prune::{prune_spurs, PruneOutcome};
