//! Solid voxelization of a surface mesh.

use std::fmt;

use mesh_types::{IndexedMesh, MeshBounds, MeshTopology};
use tracing::{debug, info, warn};
use vc_spatial::VoxelGrid;

use crate::fill::{fill_interior, fill_slice_holes};
use crate::raster::stencil_surface;
use crate::{VoxelizeError, VoxelizeParams, VoxelizeResult};

/// Bounding-box extents below this are treated as a collapsed surface.
const COLLAPSED_EXTENT: f64 = 1e-9;

/// A solid occupancy grid produced from a surface mesh.
#[derive(Debug, Clone)]
pub struct Voxelization {
    /// The occupancy grid. Occupied cells are on or inside the surface.
    pub grid: VoxelGrid<bool>,
    /// Voxels marked by the surface stencil.
    pub surface_voxels: usize,
    /// Voxels added by the interior fill.
    pub interior_voxels: usize,
    /// Voxels added by the per-slice hole fill.
    pub holes_filled: usize,
}

impl Voxelization {
    /// Total number of occupied voxels across all three passes.
    #[must_use]
    pub const fn occupied_voxels(&self) -> usize {
        self.surface_voxels + self.interior_voxels + self.holes_filled
    }
}

impl fmt::Display for Voxelization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (nx, ny, nz) = self.grid.dims();
        write!(
            f,
            "{nx}x{ny}x{nz} grid @ {:.3}mm: {} surface + {} interior voxels",
            self.grid.spacing(),
            self.surface_voxels,
            self.interior_voxels,
        )?;
        if self.holes_filled > 0 {
            write!(f, ", {} hole voxels filled", self.holes_filled)?;
        }
        Ok(())
    }
}

/// Voxelize a closed surface mesh into a solid occupancy grid.
///
/// Three passes build the solid. The surface stencil marks every voxel
/// whose center lies within half a voxel diagonal of a triangle. A
/// 6-connected flood from the grid border then classifies the exterior,
/// and everything unreached becomes interior. When
/// [`fill_slice_holes`](VoxelizeParams::fill_slice_holes) is set, a final
/// pass fills 2D-enclosed empty cells in each axial slice, recovering
/// lumens behind small surface gaps.
///
/// A mesh whose bounding box is collapsed (near-zero extent on some axis)
/// encloses no volume; that is not an error, the result is a grid with no
/// occupied voxels.
///
/// # Errors
///
/// - [`VoxelizeError::InvalidSpacing`] if `params.spacing_mm` is not
///   positive and finite.
/// - [`VoxelizeError::EmptyMesh`] if the mesh has no vertices or no faces.
/// - [`VoxelizeError::Spatial`] if the grid would exceed addressable
///   memory.
pub fn voxelize_surface(
    mesh: &IndexedMesh,
    params: &VoxelizeParams,
) -> VoxelizeResult<Voxelization> {
    params.validate()?;

    let vertex_count = mesh.vertex_count();
    let face_count = mesh.face_count();
    if mesh.is_empty() {
        return Err(VoxelizeError::EmptyMesh {
            vertices: vertex_count,
            faces: face_count,
        });
    }

    info!(
        vertices = vertex_count,
        faces = face_count,
        spacing_mm = params.spacing_mm,
        "Starting surface voxelization"
    );

    let bounds = mesh.bounds();
    let mut grid = VoxelGrid::from_world_bounds(
        params.spacing_mm,
        bounds.min,
        bounds.max,
        params.margin_voxels,
    )?;
    let (nx, ny, nz) = grid.dims();
    debug!(nx, ny, nz, "Allocated occupancy grid");

    let size = bounds.size();
    if size.x < COLLAPSED_EXTENT || size.y < COLLAPSED_EXTENT || size.z < COLLAPSED_EXTENT {
        warn!(
            extent_x = size.x,
            extent_y = size.y,
            extent_z = size.z,
            "Surface bounding box is collapsed, returning empty occupancy grid"
        );
        return Ok(Voxelization {
            grid,
            surface_voxels: 0,
            interior_voxels: 0,
            holes_filled: 0,
        });
    }

    let surface_voxels = stencil_surface(&mut grid, mesh);
    debug!(surface_voxels, "Surface stencil complete");

    let interior_voxels = fill_interior(&mut grid);
    debug!(interior_voxels, "Interior fill complete");

    let holes_filled = if params.fill_slice_holes {
        let holes = fill_slice_holes(&mut grid);
        debug!(holes_filled = holes, "Per-slice hole fill complete");
        holes
    } else {
        0
    };

    let result = Voxelization {
        grid,
        surface_voxels,
        interior_voxels,
        holes_filled,
    };
    info!(
        surface_voxels,
        interior_voxels,
        holes_filled,
        occupied = result.occupied_voxels(),
        "Voxelization complete"
    );
    Ok(result)
}
