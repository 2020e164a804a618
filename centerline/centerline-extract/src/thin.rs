//! Sequential thinning passes.

use vc_spatial::{VoxelCoord, VoxelGrid};

use crate::topology::{foreground_neighbors, is_border, is_simple_point};

/// Outcome of the peel loop: passes executed, voxels removed, and whether
/// a fixpoint was reached before the iteration cap.
pub(crate) struct PeelOutcome {
    pub iterations: u32,
    pub removed: usize,
    pub converged: bool,
}

/// Iteratively remove simple border voxels until nothing changes.
///
/// Each pass sweeps occupied voxels in scan order (Z, then Y, then X) and
/// removes a voxel immediately when it is a border voxel, not a curve
/// endpoint, and topologically simple; voxels later in the sweep see the
/// already-updated grid. The pass that removes nothing ends the loop.
pub(crate) fn sequential_peel(grid: &mut VoxelGrid<bool>, max_iterations: u32) -> PeelOutcome {
    let mut iterations = 0;
    let mut removed = 0;
    let mut converged = false;

    while iterations < max_iterations {
        iterations += 1;
        let candidates: Vec<VoxelCoord> = grid.occupied().collect();
        let mut removed_this_pass = 0;

        for coord in candidates {
            let window = window_at(grid, coord);
            if !is_border(&window) {
                continue;
            }
            if foreground_neighbors(&window) <= 1 {
                continue;
            }
            if !is_simple_point(&window) {
                continue;
            }
            grid.set(coord, false);
            removed_this_pass += 1;
        }

        removed += removed_this_pass;
        if removed_this_pass == 0 {
            converged = true;
            break;
        }
    }

    PeelOutcome {
        iterations,
        removed,
        converged,
    }
}

/// Snapshot the 3x3x3 occupancy window around a voxel. Out-of-grid cells
/// read as background.
fn window_at(grid: &VoxelGrid<bool>, coord: VoxelCoord) -> [bool; 27] {
    let mut window = [false; 27];
    let mut i = 0;
    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                window[i] = grid.is_occupied(coord.offset(dx, dy, dz));
                i += 1;
            }
        }
    }
    window
}
