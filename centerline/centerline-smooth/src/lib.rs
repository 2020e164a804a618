//! Smoothing for voxel-derived centerline branches.
//!
//! Skeleton branches inherit the staircase geometry of the voxel grid.
//! This crate flattens that staircase with damped midpoint relaxation and
//! then resamples each branch at a uniform arc-length spacing, without
//! ever moving a branch endpoint. Endpoint stability matters because
//! junction positions are shared between branches and feed the angle
//! measurements downstream.
//!
//! # Examples
//!
//! ```
//! use centerline_smooth::{smooth_branch, SmoothParams};
//! use centerline_types::Branch;
//! use nalgebra::Point3;
//!
//! let branch = Branch::new(
//!     (0..5).map(|i| Point3::new(f64::from(i), 0.0, 0.0)).collect(),
//!     0,
//!     4,
//! );
//! let smoothed = smooth_branch(&branch, &SmoothParams::default());
//! assert_eq!(smoothed.point_count(), 21);
//! assert_eq!(smoothed.first(), branch.first());
//! assert_eq!(smoothed.last(), branch.last());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod params;
mod smooth;

pub use params::{SmoothError, SmoothParams};
pub use smooth::{smooth_branch, smooth_branches, SmoothOutcome};
