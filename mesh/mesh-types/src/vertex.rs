//! Vertex type.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mesh vertex: a position in 3D space with an optional surface normal.
///
/// Vascular surface meshes carry geometry only, so the vertex type stays
/// minimal. Normals are optional because most mesh sources (and the STL
/// loader) do not provide reliable per-vertex normals.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let v = Vertex::from_coords(1.0, 2.0, 3.0);
/// assert_eq!(v.position, Point3::new(1.0, 2.0, 3.0));
/// assert!(v.normal.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// Position in 3D space (millimetres).
    pub position: Point3<f64>,

    /// Optional unit surface normal.
    pub normal: Option<Vector3<f64>>,
}

impl Vertex {
    /// Create a vertex at the given position with no normal.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with a normal.
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal: Some(normal),
        }
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(coords: [f64; 3]) -> Self {
        Self::from_coords(coords[0], coords[1], coords[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_new_has_no_normal() {
        let v = Vertex::new(Point3::new(1.0, 2.0, 3.0));
        assert_eq!(v.position.x, 1.0);
        assert!(v.normal.is_none());
    }

    #[test]
    fn vertex_with_normal() {
        let v = Vertex::with_normal(Point3::origin(), Vector3::z());
        assert_eq!(v.normal, Some(Vector3::z()));
    }

    #[test]
    fn vertex_from_point() {
        let v: Vertex = Point3::new(4.0, 5.0, 6.0).into();
        assert_eq!(v.position, Point3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn vertex_from_array() {
        let v: Vertex = [7.0, 8.0, 9.0].into();
        assert_eq!(v.position, Point3::new(7.0, 8.0, 9.0));
    }
}
