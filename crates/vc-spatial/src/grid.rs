//! Dense voxel grid data structure.

use nalgebra::Point3;

use crate::error::SpatialError;
use crate::voxel::VoxelCoord;

/// Axis-aligned bounds in grid (voxel) space.
///
/// A rectangular block of voxels between two inclusive corners.
///
/// # Example
///
/// ```
/// use vc_spatial::{GridBounds, VoxelCoord};
///
/// let bounds = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(4, 4, 4));
/// assert!(bounds.contains(VoxelCoord::new(2, 3, 4)));
/// assert_eq!(bounds.volume(), 125);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    /// Minimum corner (inclusive).
    pub min: VoxelCoord,
    /// Maximum corner (inclusive).
    pub max: VoxelCoord,
}

impl GridBounds {
    /// Creates bounds from two corners, ordering them so `min <= max` per axis.
    #[must_use]
    pub fn new(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            min: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Creates bounds covering a single voxel.
    #[must_use]
    pub const fn from_point(coord: VoxelCoord) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Returns the voxel counts along each axis. Never zero.
    #[must_use]
    pub const fn size(&self) -> (u32, u32, u32) {
        (
            self.max.x.abs_diff(self.min.x).saturating_add(1),
            self.max.y.abs_diff(self.min.y).saturating_add(1),
            self.max.z.abs_diff(self.min.z).saturating_add(1),
        )
    }

    /// Returns the total number of voxels covered.
    #[must_use]
    pub fn volume(&self) -> u64 {
        let (nx, ny, nz) = self.size();
        u64::from(nx)
            .saturating_mul(u64::from(ny))
            .saturating_mul(u64::from(nz))
    }

    /// Checks whether a coordinate falls inside (both corners inclusive).
    #[must_use]
    pub const fn contains(&self, coord: VoxelCoord) -> bool {
        coord.x >= self.min.x
            && coord.x <= self.max.x
            && coord.y >= self.min.y
            && coord.y <= self.max.y
            && coord.z >= self.min.z
            && coord.z <= self.max.z
    }

    /// Grows the bounds to cover a coordinate.
    pub fn expand_to_include(&mut self, coord: VoxelCoord) {
        self.min = VoxelCoord::new(
            self.min.x.min(coord.x),
            self.min.y.min(coord.y),
            self.min.z.min(coord.z),
        );
        self.max = VoxelCoord::new(
            self.max.x.max(coord.x),
            self.max.y.max(coord.y),
            self.max.z.max(coord.z),
        );
    }

    /// Returns the overlap of two bounds, or `None` when they are disjoint.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_spatial::{GridBounds, VoxelCoord};
    ///
    /// let a = GridBounds::new(VoxelCoord::new(0, 0, 0), VoxelCoord::new(8, 8, 8));
    /// let b = GridBounds::new(VoxelCoord::new(6, 6, 6), VoxelCoord::new(12, 12, 12));
    /// let clamped = a.intersection(&b).unwrap();
    /// assert_eq!(clamped.min, VoxelCoord::new(6, 6, 6));
    /// assert_eq!(clamped.max, VoxelCoord::new(8, 8, 8));
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let min = VoxelCoord::new(
            self.min.x.max(other.min.x),
            self.min.y.max(other.min.y),
            self.min.z.max(other.min.z),
        );
        let max = VoxelCoord::new(
            self.max.x.min(other.max.x),
            self.max.y.min(other.max.y),
            self.max.z.min(other.max.z),
        );

        (min.x <= max.x && min.y <= max.y && min.z <= max.z).then_some(Self { min, max })
    }

    /// Iterates every coordinate in the bounds in Z-Y-X order (X fastest).
    #[must_use]
    pub const fn iter(&self) -> GridBoundsIter {
        GridBoundsIter {
            bounds: *self,
            next: Some(self.min),
        }
    }
}

impl IntoIterator for GridBounds {
    type Item = VoxelCoord;
    type IntoIter = GridBoundsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over all coordinates in a [`GridBounds`].
#[derive(Debug, Clone)]
pub struct GridBoundsIter {
    bounds: GridBounds,
    next: Option<VoxelCoord>,
}

impl Iterator for GridBoundsIter {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut n = current;
        if n.x < self.bounds.max.x {
            n.x += 1;
        } else if n.y < self.bounds.max.y {
            n.x = self.bounds.min.x;
            n.y += 1;
        } else if n.z < self.bounds.max.z {
            n.x = self.bounds.min.x;
            n.y = self.bounds.min.y;
            n.z += 1;
        } else {
            self.next = None;
            return Some(current);
        }
        self.next = Some(n);

        Some(current)
    }
}

/// A dense 3D voxel grid with isotropic spacing.
///
/// Storage is a flat `Vec<T>` addressed by explicit per-axis dimensions, so
/// every cell inside the allocated block exists and reads/writes are plain
/// index arithmetic. Grid coordinate `(0, 0, 0)` is the voxel whose minimum
/// corner sits at `origin` in world space.
///
/// # Coordinate Systems
///
/// - **World space**: continuous `f64` millimetres.
/// - **Grid space**: discrete `i32` voxel indices, valid in
///   `[0, dims)` per axis.
///
/// # Example
///
/// ```
/// use vc_spatial::{VoxelGrid, VoxelCoord};
/// use nalgebra::Point3;
///
/// let mut grid: VoxelGrid<bool> =
///     VoxelGrid::try_new(0.4, Point3::origin(), (16, 16, 16)).unwrap();
///
/// grid.set(VoxelCoord::new(3, 0, 0), true);
/// assert_eq!(grid.get(VoxelCoord::new(3, 0, 0)), Some(&true));
///
/// // World point 1.35mm along X lands in voxel 3 at 0.4mm spacing.
/// assert_eq!(
///     grid.world_to_grid(Point3::new(1.35, 0.1, 0.1)),
///     VoxelCoord::new(3, 0, 0),
/// );
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelGrid<T> {
    /// Edge length of each voxel in millimetres.
    spacing: f64,
    /// Cached reciprocal for world-to-grid conversion.
    inv_spacing: f64,
    /// World position of the minimum corner of voxel (0, 0, 0).
    origin: Point3<f64>,
    /// Voxel counts along X, Y, Z.
    dims: (u32, u32, u32),
    /// Row-major cell storage, X fastest.
    data: Vec<T>,
}

impl<T: Clone + Default> VoxelGrid<T> {
    /// Allocates a grid of `dims` voxels filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// - [`SpatialError::InvalidSpacing`] if `spacing` is not positive and finite.
    /// - [`SpatialError::InvalidDimensions`] if any axis is zero.
    /// - [`SpatialError::IntegerOverflow`] if the cell count exceeds `usize`.
    pub fn try_new(
        spacing: f64,
        origin: Point3<f64>,
        dims: (u32, u32, u32),
    ) -> Result<Self, SpatialError> {
        if spacing <= 0.0 || !spacing.is_finite() {
            return Err(SpatialError::InvalidSpacing(spacing));
        }
        let (nx, ny, nz) = dims;
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(SpatialError::InvalidDimensions { nx, ny, nz });
        }
        let cells = (nx as usize)
            .checked_mul(ny as usize)
            .and_then(|v| v.checked_mul(nz as usize))
            .ok_or(SpatialError::IntegerOverflow)?;

        Ok(Self {
            spacing,
            inv_spacing: 1.0 / spacing,
            origin,
            dims,
            data: vec![T::default(); cells],
        })
    }

    /// Allocates a grid covering the world-space box `[min, max]` at the
    /// given spacing, padded by `margin` voxels of default cells on every
    /// side. Each axis gets `ceil(extent / spacing) + 1` voxels before the
    /// margin, so the far corner always falls inside the grid.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`VoxelGrid::try_new`].
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_world_bounds(
        spacing: f64,
        min: Point3<f64>,
        max: Point3<f64>,
        margin: u32,
    ) -> Result<Self, SpatialError> {
        if spacing <= 0.0 || !spacing.is_finite() {
            return Err(SpatialError::InvalidSpacing(spacing));
        }

        let cells_along = |lo: f64, hi: f64| -> Result<u32, SpatialError> {
            let extent = (hi - lo).max(0.0);
            let cells = (extent / spacing).ceil() + 1.0;
            if !cells.is_finite() || cells > f64::from(u32::MAX) {
                return Err(SpatialError::IntegerOverflow);
            }
            (cells as u32)
                .checked_add(margin.saturating_mul(2))
                .ok_or(SpatialError::IntegerOverflow)
        };

        let dims = (
            cells_along(min.x, max.x)?,
            cells_along(min.y, max.y)?,
            cells_along(min.z, max.z)?,
        );
        let pad = f64::from(margin) * spacing;
        let origin = Point3::new(min.x - pad, min.y - pad, min.z - pad);

        Self::try_new(spacing, origin, dims)
    }
}

impl<T> VoxelGrid<T> {
    /// Returns the voxel spacing in millimetres.
    #[must_use]
    pub const fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Returns the world position of the minimum corner of voxel (0, 0, 0).
    #[must_use]
    pub const fn origin(&self) -> &Point3<f64> {
        &self.origin
    }

    /// Returns the voxel counts along each axis.
    #[must_use]
    pub const fn dims(&self) -> (u32, u32, u32) {
        self.dims
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the full grid extent as inclusive bounds.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn bounds(&self) -> GridBounds {
        let (nx, ny, nz) = self.dims;
        GridBounds::new(
            VoxelCoord::origin(),
            VoxelCoord::new(nx as i32 - 1, ny as i32 - 1, nz as i32 - 1),
        )
    }

    /// Checks whether a coordinate addresses an allocated cell.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn in_bounds(&self, coord: VoxelCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && coord.z >= 0
            && (coord.x as u32) < self.dims.0
            && (coord.y as u32) < self.dims.1
            && (coord.z as u32) < self.dims.2
    }

    #[allow(clippy::cast_sign_loss)]
    fn linear_index(&self, coord: VoxelCoord) -> Option<usize> {
        if !self.in_bounds(coord) {
            return None;
        }
        let (nx, ny) = (self.dims.0 as usize, self.dims.1 as usize);
        Some((coord.z as usize * ny + coord.y as usize) * nx + coord.x as usize)
    }

    /// Gets a reference to the cell at a coordinate, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, coord: VoxelCoord) -> Option<&T> {
        self.linear_index(coord).map(|i| &self.data[i])
    }

    /// Gets a mutable reference to the cell at a coordinate.
    pub fn get_mut(&mut self, coord: VoxelCoord) -> Option<&mut T> {
        self.linear_index(coord).map(move |i| &mut self.data[i])
    }

    /// Writes `value` at a coordinate. Returns `false` when the coordinate
    /// is out of bounds (the grid is unchanged).
    pub fn set(&mut self, coord: VoxelCoord, value: T) -> bool {
        match self.linear_index(coord) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    /// Converts a world-space point to the grid coordinate containing it.
    ///
    /// The result may lie outside the allocated block; pair with
    /// [`VoxelGrid::in_bounds`] before indexing.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn world_to_grid(&self, point: Point3<f64>) -> VoxelCoord {
        let rel = point - self.origin;
        VoxelCoord::new(
            (rel.x * self.inv_spacing).floor() as i32,
            (rel.y * self.inv_spacing).floor() as i32,
            (rel.z * self.inv_spacing).floor() as i32,
        )
    }

    /// Converts a grid coordinate to the world-space center of its voxel.
    #[must_use]
    pub fn grid_to_world_center(&self, coord: VoxelCoord) -> Point3<f64> {
        let half = self.spacing * 0.5;
        Point3::new(
            f64::from(coord.x).mul_add(self.spacing, self.origin.x) + half,
            f64::from(coord.y).mul_add(self.spacing, self.origin.y) + half,
            f64::from(coord.z).mul_add(self.spacing, self.origin.z) + half,
        )
    }

    /// Converts a grid coordinate to the world-space minimum corner of its voxel.
    #[must_use]
    pub fn grid_to_world_min(&self, coord: VoxelCoord) -> Point3<f64> {
        Point3::new(
            f64::from(coord.x).mul_add(self.spacing, self.origin.x),
            f64::from(coord.y).mul_add(self.spacing, self.origin.y),
            f64::from(coord.z).mul_add(self.spacing, self.origin.z),
        )
    }

    /// Iterates every cell with its coordinate in Z-Y-X order (X fastest).
    pub fn iter(&self) -> impl Iterator<Item = (VoxelCoord, &T)> + '_ {
        self.bounds().iter().zip(self.data.iter())
    }
}

impl VoxelGrid<bool> {
    /// Checks whether the cell at `coord` is occupied. Out-of-bounds
    /// coordinates read as unoccupied.
    #[must_use]
    pub fn is_occupied(&self, coord: VoxelCoord) -> bool {
        matches!(self.get(coord), Some(&true))
    }

    /// Iterates the coordinates of all occupied cells in Z-Y-X order.
    pub fn occupied(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.iter().filter_map(|(coord, &v)| v.then_some(coord))
    }

    /// Counts occupied cells.
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Computes the bounding box of occupied cells, or `None` when nothing
    /// is occupied.
    #[must_use]
    pub fn occupied_bounds(&self) -> Option<GridBounds> {
        let mut occupied = self.occupied();
        let first = occupied.next()?;
        let mut bounds = GridBounds::from_point(first);
        for coord in occupied {
            bounds.expand_to_include(coord);
        }
        Some(bounds)
    }
}
