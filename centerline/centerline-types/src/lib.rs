//! Core types for vascular centerline graphs.
//!
//! A skeletonized occupancy grid becomes a [`SkeletonGraph`]: one node per
//! skeleton voxel, one undirected edge per 26-adjacent voxel pair. Cleaning
//! and segmentation reduce the graph to [`Branch`]es, ordered runs of world
//! points between degree-≠2 nodes, which are what smoothing, indicator
//! computation and the saved artifacts all operate on.
//!
//! # Example
//!
//! ```
//! use centerline_types::{Branch, NodeKind, SkeletonGraph};
//! use nalgebra::Point3;
//! use vc_spatial::VoxelCoord;
//!
//! let mut graph = SkeletonGraph::new();
//! let a = graph.add_node(VoxelCoord::new(0, 0, 0), Point3::new(0.0, 0.0, 0.0));
//! let b = graph.add_node(VoxelCoord::new(1, 0, 0), Point3::new(0.4, 0.0, 0.0));
//! graph.add_edge(a, b);
//!
//! assert_eq!(graph.kind(a), NodeKind::Endpoint);
//! assert_eq!(graph.edge_count(), 1);
//!
//! let branch = Branch::new(
//!     vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.4, 0.0, 0.0)],
//!     a,
//!     b,
//! );
//! assert!((branch.length_mm() - 0.4).abs() < 1e-12);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: serialization for [`Branch`] (the durable artifact type).

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod axis;
mod branch;
mod error;
mod graph;
mod node;

pub use axis::Axis;
pub use branch::Branch;
pub use error::{GraphError, GraphResult};
pub use graph::SkeletonGraph;
pub use node::{NodeId, NodeKind, SkeletonNode};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
