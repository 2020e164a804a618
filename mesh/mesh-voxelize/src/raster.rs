//! Surface stencil rasterization.

use mesh_types::{MeshTopology, Triangle};
use nalgebra::{Point3, Vector3};
use vc_spatial::{GridBounds, VoxelGrid};

use crate::distance::point_triangle_distance_squared;

/// Mark every voxel whose center lies within half a voxel diagonal of the
/// surface. Returns the number of voxels marked.
///
/// Any voxel whose cube the surface cuts has its center within
/// `spacing * sqrt(3) / 2` of the surface, so the marked shell of a closed
/// mesh has no face-connected gaps and the exterior flood cannot cross it.
pub(crate) fn stencil_surface(grid: &mut VoxelGrid<bool>, mesh: &impl MeshTopology) -> usize {
    let threshold = grid.spacing() * 3.0_f64.sqrt() * 0.5;
    let threshold_sq = threshold * threshold;

    let mut marked = 0;
    for tri in mesh.triangles() {
        marked += stencil_triangle(grid, &tri, threshold, threshold_sq);
    }
    marked
}

/// Walk the voxel-space box around one triangle and mark cells in range.
fn stencil_triangle(
    grid: &mut VoxelGrid<bool>,
    tri: &Triangle,
    threshold: f64,
    threshold_sq: f64,
) -> usize {
    let [a, b, c] = tri.vertices();
    let pad = Vector3::repeat(threshold);
    let lo = Point3::new(
        a.x.min(b.x).min(c.x),
        a.y.min(b.y).min(c.y),
        a.z.min(b.z).min(c.z),
    ) - pad;
    let hi = Point3::new(
        a.x.max(b.x).max(c.x),
        a.y.max(b.y).max(c.y),
        a.z.max(b.z).max(c.z),
    ) + pad;

    let tri_bounds = GridBounds::new(grid.world_to_grid(lo), grid.world_to_grid(hi));
    let Some(cells) = tri_bounds.intersection(&grid.bounds()) else {
        return 0;
    };

    let mut marked = 0;
    for coord in cells {
        if grid.is_occupied(coord) {
            continue;
        }
        let center = grid.grid_to_world_center(coord);
        if point_triangle_distance_squared(center, tri) <= threshold_sq {
            grid.set(coord, true);
            marked += 1;
        }
    }
    marked
}
