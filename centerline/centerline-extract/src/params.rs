//! Skeleton extraction parameters.

/// Thinning algorithm to use.
///
/// Skeletonization is a replaceable primitive: anything that reduces the
/// occupancy to a ≤1-voxel-thick, connectivity-preserving centerline with
/// curve endpoints kept satisfies the downstream stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThinningAlgorithm {
    /// Iterative sequential peel of simple border voxels.
    ///
    /// Each pass sweeps the occupied voxels in scan order and removes a
    /// voxel immediately when it is a border voxel, topologically simple
    /// and not a curve endpoint; later voxels in the same pass see the
    /// updated grid.
    #[default]
    SequentialPeel,
}

/// Parameters for skeleton extraction.
#[derive(Debug, Clone)]
pub struct SkeletonParams {
    /// The thinning algorithm to run.
    pub algorithm: ThinningAlgorithm,

    /// Upper bound on thinning passes; a safety cap for inputs that fail
    /// to converge. Default: 512.
    pub max_iterations: u32,
}

impl Default for SkeletonParams {
    fn default() -> Self {
        Self {
            algorithm: ThinningAlgorithm::default(),
            max_iterations: 512,
        }
    }
}

impl SkeletonParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the iteration cap.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
