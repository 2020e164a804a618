//! Skeleton extraction results.

use std::fmt;

use nalgebra::Point3;
use vc_spatial::VoxelCoord;

/// A voxel skeleton: the ≤1-voxel-thick remainder of a thinned occupancy
/// grid, with the grid's world mapping carried along.
#[derive(Debug, Clone)]
pub struct Skeleton {
    /// Remaining voxels in scan order (Z, then Y, then X ascending).
    pub voxels: Vec<VoxelCoord>,
    /// World position of the source grid's minimum corner.
    pub origin: Point3<f64>,
    /// Voxel spacing of the source grid in millimetres.
    pub spacing: f64,
    /// Thinning passes executed.
    pub iterations: u32,
    /// Voxels removed by thinning.
    pub removed_voxels: usize,
}

impl Skeleton {
    /// Number of skeleton voxels.
    #[must_use]
    pub fn voxel_count(&self) -> usize {
        self.voxels.len()
    }

    /// True when thinning left nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// World-space center of a skeleton voxel, identical to the source
    /// grid's mapping.
    #[must_use]
    pub fn world_center(&self, voxel: VoxelCoord) -> Point3<f64> {
        let half = self.spacing * 0.5;
        Point3::new(
            f64::from(voxel.x).mul_add(self.spacing, self.origin.x) + half,
            f64::from(voxel.y).mul_add(self.spacing, self.origin.y) + half,
            f64::from(voxel.z).mul_add(self.spacing, self.origin.z) + half,
        )
    }
}

impl fmt::Display for Skeleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Skeleton: {} → {} voxels in {} passes",
            self.voxels.len() + self.removed_voxels,
            self.voxels.len(),
            self.iterations,
        )
    }
}
