//! Clinical geometry indicators for vascular centerlines.
//!
//! Takes the smoothed branch set and derives the quantities reported to
//! clinicians: global tortuosity of the principal branch, take-off and
//! bifurcation angles, the curvature extremum, and the aortic arch type.
//! Bifurcations are found by matching shared branch endpoints, so the
//! smoother's endpoint stability is what this crate relies on.
//!
//! # Examples
//!
//! ```
//! use centerline_metrics::{compute_indicators, MetricsParams};
//! use centerline_types::Branch;
//! use nalgebra::Point3;
//!
//! let trunk = Branch::new(
//!     (0..11).map(|i| Point3::new(0.0, f64::from(i), 0.0)).collect(),
//!     0,
//!     1,
//! );
//! let report = compute_indicators(&[trunk], &MetricsParams::default())?;
//! assert!((report.global_tortuosity.unwrap().tortuosity - 1.0).abs() < 1e-9);
//! assert!(report.takeoff_angles.is_empty());
//! # Ok::<(), centerline_metrics::MetricsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bifurcation;
mod error;
mod indicators;
mod params;
mod report;
mod tangent;

pub use bifurcation::{find_bifurcations, Bifurcation, BranchEnd, Incidence};
pub use error::{MetricsError, MetricsResult};
pub use indicators::{branch_stats, compute_indicators};
pub use params::MetricsParams;
pub use report::{
    ArchClassification, ArchType, BifurcationAngles, BranchStats, GlobalTortuosity,
    IndicatorReport, MaximumCurvature, PairAngle, TakeoffAngle,
};
