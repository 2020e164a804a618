//! Voxel coordinate types.

use nalgebra::Point3;

/// A discrete 3D coordinate in grid space.
///
/// Coordinates are `i32` so that positions relative to an arbitrary world
/// origin can go negative, e.g. when a grid is padded with a margin below
/// its data.
///
/// # Example
///
/// ```
/// use vc_spatial::VoxelCoord;
///
/// let coord = VoxelCoord::new(12, 4, 31);
/// assert_eq!(coord.as_tuple(), (12, 4, 31));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoxelCoord {
    /// X index (width axis).
    pub x: i32,
    /// Y index (depth axis).
    pub y: i32,
    /// Z index (height axis).
    pub z: i32,
}

impl VoxelCoord {
    /// Creates a new voxel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Creates a coordinate at the origin (0, 0, 0).
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the coordinate as a tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// Returns the coordinate as an array.
    #[must_use]
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns this coordinate displaced by `(dx, dy, dz)`.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_spatial::VoxelCoord;
    ///
    /// let c = VoxelCoord::new(5, 5, 5).offset(-1, 0, 2);
    /// assert_eq!(c, VoxelCoord::new(4, 5, 7));
    /// ```
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(
            self.x.wrapping_add(dx),
            self.y.wrapping_add(dy),
            self.z.wrapping_add(dz),
        )
    }

    /// Converts to a floating-point point in grid units.
    #[must_use]
    pub fn to_point(self) -> Point3<f64> {
        Point3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }

    /// Returns the 6 face-adjacent neighbors (von Neumann neighborhood).
    ///
    /// # Example
    ///
    /// ```
    /// use vc_spatial::VoxelCoord;
    ///
    /// let neighbors = VoxelCoord::origin().face_neighbors();
    /// assert_eq!(neighbors.len(), 6);
    /// assert!(neighbors.contains(&VoxelCoord::new(0, 0, -1)));
    /// ```
    #[must_use]
    pub const fn face_neighbors(self) -> [Self; 6] {
        [
            self.offset(1, 0, 0),
            self.offset(-1, 0, 0),
            self.offset(0, 1, 0),
            self.offset(0, -1, 0),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
        ]
    }

    /// Returns all 26 neighbors (Moore neighborhood): face-adjacent (6),
    /// edge-adjacent (12), and corner-adjacent (8).
    ///
    /// # Example
    ///
    /// ```
    /// use vc_spatial::VoxelCoord;
    ///
    /// let neighbors = VoxelCoord::origin().all_neighbors();
    /// assert_eq!(neighbors.len(), 26);
    /// assert!(neighbors.iter().all(|n| VoxelCoord::origin().chebyshev_distance(*n) == 1));
    /// ```
    #[must_use]
    pub fn all_neighbors(self) -> [Self; 26] {
        let mut result = [Self::origin(); 26];
        let mut idx = 0;

        for dz in -1i32..=1 {
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    if dx == 0 && dy == 0 && dz == 0 {
                        continue;
                    }
                    result[idx] = self.offset(dx, dy, dz);
                    idx += 1;
                }
            }
        }

        result
    }

    /// Computes the Chebyshev distance to another coordinate: the maximum of
    /// the per-axis absolute differences. Two voxels are 26-adjacent exactly
    /// when this distance is 1.
    ///
    /// # Example
    ///
    /// ```
    /// use vc_spatial::VoxelCoord;
    ///
    /// let a = VoxelCoord::new(2, 2, 2);
    /// let b = VoxelCoord::new(3, 1, 2);
    /// assert_eq!(a.chebyshev_distance(b), 1);
    /// ```
    #[must_use]
    pub fn chebyshev_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }
}

impl From<(i32, i32, i32)> for VoxelCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for VoxelCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::ops::Add for VoxelCoord {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.offset(other.x, other.y, other.z)
    }
}

impl std::ops::Sub for VoxelCoord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x.wrapping_sub(other.x),
            self.y.wrapping_sub(other.y),
            self.z.wrapping_sub(other.z),
        )
    }
}
