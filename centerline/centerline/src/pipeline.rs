//! The staged run from surface mesh to branches and indicators.

use std::fmt;

use centerline_extract::extract_skeleton;
use centerline_graph::{build_graph, prune_spurs, segment_branches, select_components};
use centerline_metrics::{compute_indicators, IndicatorReport};
use centerline_smooth::smooth_branches;
use centerline_types::Branch;
use mesh_types::{IndexedMesh, MeshTopology};
use mesh_voxelize::voxelize_surface;
use tracing::info;
use vc_spatial::VoxelGrid;

use crate::error::PipelineResult;
use crate::params::PipelineParams;

/// Everything a pipeline run produces.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The centerline, one polyline per vessel branch.
    pub branches: Vec<Branch>,
    /// Clinical indicators computed from the branches.
    pub report: IndicatorReport,
    /// Per-stage counters.
    pub stats: PipelineStats,
}

/// Per-stage counters of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Occupied voxels entering the thinning stage.
    pub occupied_voxels: usize,
    /// Voxels in the thinned skeleton.
    pub skeleton_voxels: usize,
    /// Thinning passes run.
    pub thinning_iterations: u32,
    /// Spurs removed by pruning.
    pub spurs_removed: usize,
    /// Connected components in the pruned graph.
    pub components_found: usize,
    /// Components carried into segmentation.
    pub components_kept: usize,
    /// Branches segmented from the cleaned graph.
    pub branch_count: usize,
    /// Branches changed by the smoothing stage.
    pub branches_smoothed: usize,
}

impl fmt::Display for PipelineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} voxels → {} skeleton voxels in {} passes, {} spurs removed, \
             {}/{} components kept, {} branches ({} smoothed)",
            self.occupied_voxels,
            self.skeleton_voxels,
            self.thinning_iterations,
            self.spurs_removed,
            self.components_kept,
            self.components_found,
            self.branch_count,
            self.branches_smoothed,
        )
    }
}

/// Run the full pipeline on a closed surface mesh.
///
/// Voxelizes the surface, thins the solid to a skeleton, cleans and
/// segments the skeleton graph, smooths the branches, and computes the
/// indicator report.
///
/// # Errors
///
/// [`PipelineError::Config`](crate::PipelineError::Config) for invalid
/// parameters, otherwise the failing stage's error. Degenerate geometry
/// downstream of segmentation yields null metrics, not an error.
pub fn run_pipeline(mesh: &IndexedMesh, params: &PipelineParams) -> PipelineResult<PipelineOutput> {
    params.validate()?;
    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        spacing_mm = params.voxel_spacing_mm,
        "Starting centerline pipeline"
    );

    let voxelization = voxelize_surface(mesh, &params.voxelize_params())?;
    stages(&voxelization.grid, voxelization.occupied_voxels(), params)
}

/// Run the pipeline on an already-voxelized occupancy grid.
///
/// Entry point for pre-segmented volumes that never had a surface mesh.
///
/// # Errors
///
/// Same contract as [`run_pipeline`], minus the voxelization stage.
pub fn run_from_grid(
    grid: VoxelGrid<bool>,
    params: &PipelineParams,
) -> PipelineResult<PipelineOutput> {
    params.validate()?;
    let occupied = grid.count_occupied();
    info!(occupied, "Starting centerline pipeline from an occupancy grid");

    stages(&grid, occupied, params)
}

/// The mesh-independent stages: thin, clean, segment, smooth, measure.
fn stages(
    grid: &VoxelGrid<bool>,
    occupied_voxels: usize,
    params: &PipelineParams,
) -> PipelineResult<PipelineOutput> {
    let skeleton = extract_skeleton(grid, &params.skeleton_params())?;
    let graph = build_graph(&skeleton)?;
    let pruned = prune_spurs(&graph, &params.prune_params());
    let components = select_components(&pruned.graph, &params.component_params())?;
    let branches = segment_branches(&components.graph)?;
    let smoothed = smooth_branches(&branches, &params.smooth_params());
    let report = compute_indicators(&smoothed.branches, &params.metrics)?;

    let stats = PipelineStats {
        occupied_voxels,
        skeleton_voxels: skeleton.voxel_count(),
        thinning_iterations: skeleton.iterations,
        spurs_removed: pruned.spurs_removed,
        components_found: components.components_found,
        components_kept: components.components_kept,
        branch_count: smoothed.branches.len(),
        branches_smoothed: smoothed.branches_smoothed,
    };
    info!(%stats, "Centerline pipeline complete");

    Ok(PipelineOutput {
        branches: smoothed.branches,
        report,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_display_summarizes_the_run() {
        let stats = PipelineStats {
            occupied_voxels: 5000,
            skeleton_voxels: 120,
            thinning_iterations: 7,
            spurs_removed: 3,
            components_found: 2,
            components_kept: 1,
            branch_count: 4,
            branches_smoothed: 4,
        };
        assert_eq!(
            stats.to_string(),
            "5000 voxels → 120 skeleton voxels in 7 passes, 3 spurs removed, \
             1/2 components kept, 4 branches (4 smoothed)"
        );
    }
}
