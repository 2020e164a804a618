//! Indexed triangle mesh.

use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// The primary surface type for VascuForge: vertices and faces stored
/// separately, with faces referencing vertices by index.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule. A closed mesh with this
/// winding has positive [`IndexedMesh::signed_volume`].
///
/// # Example
///
/// ```
/// use mesh_types::{IndexedMesh, Vertex, MeshTopology};
///
/// let mut mesh = IndexedMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Create a mesh from vertices and faces.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, faces: Vec<[u32; 3]>) -> Self {
        Self { vertices, faces }
    }

    /// Translate the mesh by the given vector.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Scale the mesh uniformly around the origin.
    pub fn scale(&mut self, factor: f64) {
        for vertex in &mut self.vertices {
            vertex.position.coords *= factor;
        }
    }

    /// Compute the signed volume of the mesh.
    ///
    /// Uses the divergence theorem: the sum of signed tetrahedra volumes
    /// formed by each face and the origin. For a closed mesh with CCW
    /// winding viewed from outside this is positive; near-zero means the
    /// surface is not closed, has inconsistent winding, or encloses no
    /// volume.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0;

        for &[i0, i1, i2] in &self.faces {
            let v0 = &self.vertices[i0 as usize].position;
            let v1 = &self.vertices[i1 as usize].position;
            let v2 = &self.vertices[i2 as usize].position;

            // Signed tetra volume with the origin = (v0 . (v1 x v2)) / 6.
            let cross = Vector3::new(
                v1.y.mul_add(v2.z, -(v1.z * v2.y)),
                v1.z.mul_add(v2.x, -(v1.x * v2.z)),
                v1.x.mul_add(v2.y, -(v1.y * v2.x)),
            );
            volume += v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y));
        }

        volume / 6.0
    }

    /// Compute the absolute volume of the mesh.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.signed_volume().abs()
    }

    /// Compute the total surface area of the mesh.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        self.triangles().map(|tri| tri.area()).sum()
    }

    /// Flip all face normals by reversing winding order.
    pub fn flip_normals(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
        for vertex in &mut self.vertices {
            if let Some(ref mut normal) = vertex.normal {
                *normal = -*normal;
            }
        }
    }

    /// Merge another mesh into this one, appending its vertices and faces
    /// with indices rebased.
    #[allow(clippy::cast_possible_truncation)]
    // Mesh indices are u32; vertex counts beyond 4B are unsupported
    pub fn merge(&mut self, other: &Self) {
        let vertex_offset = self.vertices.len() as u32;

        self.vertices.extend(other.vertices.iter().copied());

        for face in &other.faces {
            self.faces.push([
                face[0] + vertex_offset,
                face[1] + vertex_offset,
                face[2] + vertex_offset,
            ]);
        }
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        if self.vertices.is_empty() {
            return Aabb::empty();
        }

        let positions = self.vertices.iter().map(|v| &v.position);
        Aabb::from_points(positions)
    }
}

/// Create a unit cube mesh from (0,0,0) to (1,1,1) with outward normals.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 12);
/// assert!((cube.signed_volume() - 1.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn unit_cube() -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12);

    // Corner i has coordinates from the low three bits: (x, y, z) = (i&1, i>>1&1, i>>2&1).
    for i in 0..8u32 {
        mesh.vertices.push(Vertex::from_coords(
            f64::from(i & 1),
            f64::from((i >> 1) & 1),
            f64::from((i >> 2) & 1),
        ));
    }

    // Two CCW triangles per face, normals outward.
    const FACES: [[u32; 3]; 12] = [
        [0, 2, 1], // z = 0
        [1, 2, 3],
        [4, 5, 6], // z = 1
        [5, 7, 6],
        [0, 1, 5], // y = 0
        [0, 5, 4],
        [2, 6, 7], // y = 1
        [2, 7, 3],
        [0, 4, 6], // x = 0
        [0, 6, 2],
        [1, 3, 7], // x = 1
        [1, 7, 5],
    ];
    mesh.faces.extend_from_slice(&FACES);

    mesh
}

/// Create a closed cylinder mesh between two points.
///
/// The side wall is a `segments`-sided prism; both ends are capped with
/// triangle fans, so the result is watertight with outward normals. Returns
/// an empty mesh if the axis has near-zero length, the radius is not
/// positive, or `segments < 3`.
///
/// # Example
///
/// ```
/// use mesh_types::{cylinder, MeshTopology, Point3};
///
/// let tube = cylinder(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(0.0, 0.0, 20.0),
///     2.0,
///     32,
/// );
/// assert!(!tube.is_empty());
/// assert!(tube.signed_volume() > 0.0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
// Truncation: ring indices fit u32 for any sane segment count
pub fn cylinder(start: Point3<f64>, end: Point3<f64>, radius: f64, segments: u32) -> IndexedMesh {
    let axis = end - start;
    let length = axis.norm();
    if length < 1e-12 || radius <= 0.0 || segments < 3 {
        return IndexedMesh::new();
    }

    let w = axis / length;
    // Any direction not parallel to the axis seeds the frame.
    let seed = if w.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    let u = w.cross(&seed).normalize();
    let v = w.cross(&u);

    let n = segments as usize;
    let mut mesh = IndexedMesh::with_capacity(2 * n + 2, 4 * n);

    for ring_base in [start, end] {
        for i in 0..n {
            let theta = 2.0 * std::f64::consts::PI * (i as f64) / (segments as f64);
            let radial = u * theta.cos() + v * theta.sin();
            mesh.vertices
                .push(Vertex::new(ring_base + radial * radius));
        }
    }
    let bottom_center = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex::new(start));
    let top_center = bottom_center + 1;
    mesh.vertices.push(Vertex::new(end));

    let seg = segments;
    for i in 0..seg {
        let next = (i + 1) % seg;
        let (b0, b1) = (i, next);
        let (t0, t1) = (seg + i, seg + next);

        // Side wall.
        mesh.faces.push([b0, b1, t1]);
        mesh.faces.push([b0, t1, t0]);
        // End caps face away from the axis.
        mesh.faces.push([bottom_center, b1, b0]);
        mesh.faces.push([top_center, t0, t1]);
    }

    mesh
}
