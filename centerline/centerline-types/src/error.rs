//! Error types for skeleton graph operations.

use thiserror::Error;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while building or reducing a skeleton graph.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The skeleton has no voxels to build a graph from.
    #[error("skeleton contains no voxels")]
    EmptySkeleton,

    /// Cleaning or segmentation left no usable structure.
    #[error("no vascular structure remains: {nodes} nodes, {edges} edges")]
    NoStructure {
        /// Node count at the point of failure.
        nodes: usize,
        /// Edge count at the point of failure.
        edges: usize,
    },
}

impl GraphError {
    /// True when the error reports an empty or fully-reduced structure.
    #[must_use]
    pub const fn is_empty_structure(&self) -> bool {
        matches!(self, Self::EmptySkeleton | Self::NoStructure { .. })
    }
}
