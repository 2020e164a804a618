//! Error type aggregating every pipeline stage.

use centerline_extract::SkeletonError;
use centerline_io::ArtifactError;
use centerline_metrics::MetricsError;
use centerline_types::GraphError;
use mesh_io::IoError;
use mesh_voxelize::VoxelizeError;
use thiserror::Error;

/// Errors that can end a pipeline run.
///
/// Stage errors convert with `?`, so code composing the pipeline with
/// mesh loading and artifact saving needs only this one error type.
/// Degenerate geometry does not surface here; the indicator stage
/// reports it as null metrics with a warning instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Parameters rejected before any compute.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Mesh loading or saving failed.
    #[error("input error: {0}")]
    Input(#[from] IoError),

    /// Surface voxelization failed.
    #[error("voxelization failed: {0}")]
    Voxelize(#[from] VoxelizeError),

    /// Topological thinning failed.
    #[error("skeleton extraction failed: {0}")]
    Skeleton(#[from] SkeletonError),

    /// Graph construction, cleanup, or branch segmentation failed.
    #[error("graph reduction failed: {0}")]
    Graph(#[from] GraphError),

    /// Indicator computation failed.
    #[error("indicator computation failed: {0}")]
    Metrics(#[from] MetricsError),

    /// Artifact reading or writing failed.
    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

/// Result alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
