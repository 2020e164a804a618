//! Mesh file I/O for VascuForge.
//!
//! This crate loads and saves triangle meshes in the STL format, the
//! de-facto export format of medical image segmentation tools. Both
//! binary and ASCII STL are supported, with content-based detection on
//! load.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_stl, save_stl};
//!
//! // Format (binary vs ASCII) is detected from content
//! let mesh = load_stl("aorta_surface.stl").unwrap();
//!
//! // Save it back, binary
//! save_stl(&mesh, "output.stl", true).unwrap();
//! ```
//!
//! # Units
//!
//! STL files carry no unit information. VascuForge assumes millimetres
//! throughout; surfaces exported in other units must be scaled before
//! loading.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, save_stl};
