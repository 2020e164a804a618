//! Skeleton extraction from occupancy grids.

use tracing::{info, warn};
use vc_spatial::VoxelGrid;

use crate::error::{SkeletonError, SkeletonResult};
use crate::params::{SkeletonParams, ThinningAlgorithm};
use crate::result::Skeleton;
use crate::thin::sequential_peel;

/// Thins an occupancy grid to a voxel skeleton.
///
/// The input grid is not modified; thinning runs on a working copy. The
/// returned skeleton carries the grid's origin and spacing so voxel
/// coordinates can be mapped back to world space.
///
/// # Errors
///
/// Returns [`SkeletonError::EmptyGrid`] when the grid has no occupied
/// voxels.
pub fn extract_skeleton(
    grid: &VoxelGrid<bool>,
    params: &SkeletonParams,
) -> SkeletonResult<Skeleton> {
    let (nx, ny, nz) = grid.dims();
    let occupied = grid.count_occupied();
    if occupied == 0 {
        return Err(SkeletonError::EmptyGrid { nx, ny, nz });
    }

    info!(occupied, nx, ny, nz, "Starting skeleton extraction");

    let mut work = grid.clone();
    let outcome = match params.algorithm {
        ThinningAlgorithm::SequentialPeel => sequential_peel(&mut work, params.max_iterations),
    };

    if !outcome.converged {
        warn!(
            max_iterations = params.max_iterations,
            "Thinning stopped at the iteration cap before reaching a fixpoint"
        );
    }

    let voxels: Vec<_> = work.occupied().collect();
    info!(
        skeleton_voxels = voxels.len(),
        removed = outcome.removed,
        iterations = outcome.iterations,
        "Skeleton extraction complete"
    );

    Ok(Skeleton {
        voxels,
        origin: *work.origin(),
        spacing: work.spacing(),
        iterations: outcome.iterations,
        removed_voxels: outcome.removed,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use nalgebra::Point3;
    use vc_spatial::VoxelCoord;

    use super::*;

    /// A solid rod along Z: radius 2.6 cells around (5, 5) for z in 2..18.
    fn solid_rod() -> VoxelGrid<bool> {
        let mut grid =
            VoxelGrid::try_new(0.5, Point3::new(0.0, 0.0, 0.0), (11, 11, 20)).unwrap();
        for z in 2..18 {
            for y in 0..11_i32 {
                for x in 0..11_i32 {
                    let dx = f64::from(x - 5);
                    let dy = f64::from(y - 5);
                    if (dx * dx + dy * dy).sqrt() <= 2.6 {
                        grid.set(VoxelCoord::new(x, y, z), true);
                    }
                }
            }
        }
        grid
    }

    fn connected_components(voxels: &[VoxelCoord]) -> usize {
        let occupied: HashSet<_> = voxels.iter().copied().collect();
        let mut seen: HashSet<VoxelCoord> = HashSet::new();
        let mut components = 0;
        for &start in voxels {
            if seen.contains(&start) {
                continue;
            }
            components += 1;
            let mut frontier = vec![start];
            seen.insert(start);
            while let Some(coord) = frontier.pop() {
                for neighbor in coord.all_neighbors() {
                    if occupied.contains(&neighbor) && seen.insert(neighbor) {
                        frontier.push(neighbor);
                    }
                }
            }
        }
        components
    }

    #[test]
    fn empty_grid_is_an_error() {
        let grid = VoxelGrid::<bool>::try_new(0.5, Point3::origin(), (4, 5, 6)).unwrap();
        let err = extract_skeleton(&grid, &SkeletonParams::default()).unwrap_err();
        assert_eq!(err, SkeletonError::EmptyGrid { nx: 4, ny: 5, nz: 6 });
    }

    #[test]
    fn rod_thins_to_a_connected_curve() {
        let grid = solid_rod();
        let input = grid.count_occupied();
        assert_eq!(input, 21 * 16);

        let skeleton = extract_skeleton(&grid, &SkeletonParams::default()).unwrap();

        // A 16-slice rod should collapse to a thin curve, not vanish or
        // stay a tube.
        assert!(skeleton.voxel_count() >= 6);
        assert!(skeleton.voxel_count() <= 40);
        assert_eq!(connected_components(&skeleton.voxels), 1);
        assert_eq!(skeleton.removed_voxels + skeleton.voxel_count(), input);
        assert!(skeleton.iterations < SkeletonParams::default().max_iterations);

        // Thinning only removes voxels.
        for voxel in &skeleton.voxels {
            assert!(grid.is_occupied(*voxel));
        }
    }

    #[test]
    fn skeleton_world_mapping_matches_the_grid() {
        let grid = solid_rod();
        let skeleton = extract_skeleton(&grid, &SkeletonParams::default()).unwrap();
        assert_eq!(skeleton.spacing, 0.5);
        for &voxel in &skeleton.voxels {
            assert_eq!(skeleton.world_center(voxel), grid.grid_to_world_center(voxel));
        }
    }

    #[test]
    fn single_voxel_survives_unchanged() {
        let mut grid = VoxelGrid::try_new(0.4, Point3::origin(), (5, 5, 5)).unwrap();
        grid.set(VoxelCoord::new(2, 2, 2), true);
        let skeleton = extract_skeleton(&grid, &SkeletonParams::default()).unwrap();
        assert_eq!(skeleton.voxels, vec![VoxelCoord::new(2, 2, 2)]);
        assert_eq!(skeleton.removed_voxels, 0);
    }
}
