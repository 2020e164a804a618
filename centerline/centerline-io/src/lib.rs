//! Artifact I/O for VascuForge centerlines.
//!
//! This crate persists the pipeline outputs: the centerline itself as a
//! JSON polyline set, the clinical indicator report as pretty-printed
//! JSON, and a per-branch CSV for quick inspection in a spreadsheet.
//! Saving and reloading a centerline reproduces every branch point in
//! its original order.
//!
//! # Example
//!
//! ```no_run
//! use centerline_io::{load_centerline, save_branch_csv, save_centerline};
//!
//! let branches = load_centerline("case_012_centerline.json").unwrap();
//! save_centerline("copy.json", &branches).unwrap();
//! save_branch_csv("branches.csv", &branches).unwrap();
//! ```
//!
//! # Units
//!
//! All coordinates and lengths are millimetres, matching the rest of
//! the pipeline.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod csv;
mod error;
mod json;

pub use csv::save_branch_csv;
pub use error::{ArtifactError, ArtifactResult};
pub use json::{load_centerline, load_report, save_centerline, save_report};
