//! Core mesh types for VascuForge.
//!
//! This crate provides the foundational types for working with vascular
//! surface meshes:
//!
//! - [`Vertex`] - A point in 3D space with an optional normal
//! - [`IndexedMesh`] - A triangle mesh with indexed vertices
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! All coordinates are `f64` **millimetres**, matching clinical surface
//! exports.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system**:
//! - X: width (left/right)
//! - Y: depth (front/back)
//! - Z: height (up/down)
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule, so closed surfaces have
//! positive signed volume.
//!
//! # Example
//!
//! ```
//! use mesh_types::{cylinder, MeshBounds, MeshTopology, Point3};
//!
//! // An idealized 20mm vessel segment of radius 2mm.
//! let vessel = cylinder(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 20.0),
//!     2.0,
//!     32,
//! );
//!
//! assert!(!vessel.is_empty());
//! assert!(vessel.signed_volume() > 0.0);
//! assert!((vessel.bounds().size().z - 20.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod mesh;
mod traits;
mod triangle;
mod vertex;

// Re-export core types
pub use bounds::Aabb;
pub use mesh::{cylinder, unit_cube, IndexedMesh};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
