//! Vascular centerline reconstruction and clinical indicators.
//!
//! This umbrella crate re-exports the whole VascuForge pipeline and adds
//! the staged runner that connects it: a closed surface mesh of a vessel
//! tree goes in, and out come smoothed centerline branches, a clinical
//! indicator report (tortuosity, take-off and bifurcation angles,
//! curvature extremum, aortic arch type), and per-stage counters.
//!
//! # Quick Start
//!
//! ```no_run
//! use centerline::prelude::*;
//!
//! // Load a segmented vessel surface
//! let mesh = load_stl("aorta_surface.stl").unwrap();
//!
//! // Voxelize, thin, clean, smooth, measure
//! let output = run_pipeline(&mesh, &PipelineParams::for_aortic_arch()).unwrap();
//! println!("{}", output.stats);
//!
//! // Persist the artifacts
//! save_centerline("centerline.json", &output.branches).unwrap();
//! save_report("indicators.json", &output.report).unwrap();
//! save_branch_csv("branches.csv", &output.branches).unwrap();
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`spatial`] - Voxel grids and coordinates
//! - [`mesh`] - Triangle mesh types: `IndexedMesh`, `Vertex`, `Triangle`
//! - [`stl`] - STL loading and saving
//! - [`types`] - Centerline types: `SkeletonGraph`, `Branch`
//!
//! ## Pipeline Stages
//! - [`voxelize`] - Solid voxelization of the surface
//! - [`extract`] - Topological thinning to a voxel skeleton
//! - [`graph`] - Graph construction, spur pruning, component selection,
//!   branch segmentation
//! - [`smooth`] - Branch relaxation and resampling
//! - [`metrics`] - Clinical indicator computation
//!
//! ## Results
//! - [`io`] - Centerline, report, and CSV artifacts
//!
//! All coordinates and lengths are millimetres.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

// =============================================================================
// Re-exports
// =============================================================================

/// Voxel grids and coordinates.
pub use vc_spatial as spatial;

/// Triangle mesh types: `IndexedMesh`, `Vertex`, `Triangle`.
pub use mesh_types as mesh;

/// STL loading and saving.
pub use mesh_io as stl;

/// Solid voxelization of surface meshes.
pub use mesh_voxelize as voxelize;

/// Centerline types: `SkeletonGraph`, `Branch`.
pub use centerline_types as types;

/// Topological thinning to a voxel skeleton.
pub use centerline_extract as extract;

/// Graph construction, spur pruning, component selection, segmentation.
pub use centerline_graph as graph;

/// Branch relaxation and resampling.
pub use centerline_smooth as smooth;

/// Clinical indicator computation.
pub use centerline_metrics as metrics;

/// Centerline, report, and CSV artifacts.
pub use centerline_io as io;

mod error;
mod params;
mod pipeline;

pub use error::{PipelineError, PipelineResult};
pub use params::PipelineParams;
pub use pipeline::{run_from_grid, run_pipeline, PipelineOutput, PipelineStats};

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for centerline work.
///
/// # Usage
///
/// ```
/// use centerline::prelude::*;
/// ```
pub mod prelude {
    pub use centerline_io::{
        load_centerline, load_report, save_branch_csv, save_centerline, save_report,
    };
    pub use centerline_metrics::{IndicatorReport, MetricsParams};
    pub use centerline_smooth::SmoothParams;
    pub use centerline_types::{Axis, Branch};
    pub use mesh_io::{load_stl, save_stl};
    pub use mesh_types::IndexedMesh;

    pub use crate::{run_from_grid, run_pipeline, PipelineOutput, PipelineParams};
}

// =============================================================================
// Tests
// =============================================================================
