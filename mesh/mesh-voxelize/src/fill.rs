//! Interior and per-slice hole filling.

use vc_spatial::{VoxelCoord, VoxelGrid};

/// Occupy every voxel the exterior flood cannot reach. Returns the number
/// of voxels filled.
///
/// Seeds a 6-connected flood from all empty voxels on the grid boundary.
/// With a gap-free surface shell the unreachable set is exactly the
/// enclosed volume; if the shell leaks, the flood enters and the leaked
/// region stays empty.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn fill_interior(grid: &mut VoxelGrid<bool>) -> usize {
    let (nx, ny, nz) = grid.dims();
    let (nx, ny, nz) = (nx as i32, ny as i32, nz as i32);
    let linear = |c: VoxelCoord| {
        (c.z as usize * ny as usize + c.y as usize) * nx as usize + c.x as usize
    };

    let mut exterior = vec![false; grid.cell_count()];
    let mut frontier: Vec<VoxelCoord> = Vec::new();

    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                let on_border =
                    x == 0 || y == 0 || z == 0 || x == nx - 1 || y == ny - 1 || z == nz - 1;
                if !on_border {
                    continue;
                }
                let coord = VoxelCoord::new(x, y, z);
                if !grid.is_occupied(coord) {
                    exterior[linear(coord)] = true;
                    frontier.push(coord);
                }
            }
        }
    }

    while let Some(coord) = frontier.pop() {
        for neighbor in coord.face_neighbors() {
            if !grid.in_bounds(neighbor) || grid.is_occupied(neighbor) {
                continue;
            }
            let idx = linear(neighbor);
            if !exterior[idx] {
                exterior[idx] = true;
                frontier.push(neighbor);
            }
        }
    }

    let mut filled = 0;
    for z in 0..nz {
        for y in 0..ny {
            for x in 0..nx {
                let coord = VoxelCoord::new(x, y, z);
                if !grid.is_occupied(coord) && !exterior[linear(coord)] {
                    grid.set(coord, true);
                    filled += 1;
                }
            }
        }
    }
    filled
}

/// Fill 2D-enclosed empty cells slice by slice along Z. Returns the number
/// of voxels filled.
///
/// Within one slice, empty cells 4-connected to the slice border are open;
/// whatever empty cells remain are ringed by occupied cells in that slice.
/// A lumen whose shell leaks in 3D still reads as a closed ring in most
/// cross-sections, so this pass recovers it.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn fill_slice_holes(grid: &mut VoxelGrid<bool>) -> usize {
    let (nx, ny, nz) = grid.dims();
    let slice_cells = nx as usize * ny as usize;
    let (nx, ny, nz) = (nx as i32, ny as i32, nz as i32);
    let linear = |x: i32, y: i32| y as usize * nx as usize + x as usize;

    let mut open = vec![false; slice_cells];
    let mut frontier: Vec<(i32, i32)> = Vec::new();
    let mut filled = 0;

    for z in 0..nz {
        open.fill(false);
        frontier.clear();

        for y in 0..ny {
            for x in 0..nx {
                let on_border = x == 0 || y == 0 || x == nx - 1 || y == ny - 1;
                if on_border && !grid.is_occupied(VoxelCoord::new(x, y, z)) {
                    open[linear(x, y)] = true;
                    frontier.push((x, y));
                }
            }
        }

        while let Some((x, y)) = frontier.pop() {
            for (dx, dy) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
                let (qx, qy) = (x + dx, y + dy);
                if qx < 0 || qy < 0 || qx >= nx || qy >= ny {
                    continue;
                }
                if grid.is_occupied(VoxelCoord::new(qx, qy, z)) || open[linear(qx, qy)] {
                    continue;
                }
                open[linear(qx, qy)] = true;
                frontier.push((qx, qy));
            }
        }

        for y in 0..ny {
            for x in 0..nx {
                let coord = VoxelCoord::new(x, y, z);
                if !grid.is_occupied(coord) && !open[linear(x, y)] {
                    grid.set(coord, true);
                    filled += 1;
                }
            }
        }
    }
    filled
}
