//! Piecewise-linear curve geometry for centerline analysis.
//!
//! This crate provides the [`Polyline`] type used to represent vessel
//! centerline branches: an ordered run of 3D points with precomputed arc
//! lengths. It supports the queries the rest of the VascuForge ecosystem
//! needs:
//!
//! - **Evaluation**: Position and tangent at a parameter `t ∈ [0, 1]` or at
//!   an arc-length distance from the start
//! - **Arc length**: Total curve length and straight-line chord length
//! - **Resampling**: Uniform arc-length resampling by vertex count or by
//!   maximum spacing, with endpoints preserved exactly
//!
//! # Example
//!
//! ```
//! use curve_types::Polyline;
//! use nalgebra::Point3;
//!
//! let branch = Polyline::new(vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(4.0, 0.0, 0.0),
//!     Point3::new(4.0, 3.0, 0.0),
//! ]);
//!
//! // Arc length follows the segments, chord cuts straight across
//! assert!((branch.arc_length() - 7.0).abs() < 1e-10);
//! assert!((branch.chord_length() - 5.0).abs() < 1e-10);
//!
//! // Resample to 0.5mm spacing for downstream analysis
//! let dense = branch.resampled_by_spacing(0.5)?;
//! assert_eq!(dense.num_segments(), 14);
//! # Ok::<(), curve_types::CurveError>(())
//! ```
//!
//! # Coordinate System
//!
//! This crate uses a **right-handed coordinate system** with all distances
//! in millimetres, consistent with the rest of the VascuForge ecosystem:
//!
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! # Feature Flags
//!
//! - `serde`: Enable serialization/deserialization for all types

#![doc(html_root_url = "https://docs.rs/curve-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::module_name_repetitions
)]

mod error;
mod polyline;

pub use error::CurveError;
pub use polyline::Polyline;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
