//! Arena-style skeleton graph.

use std::fmt;

use nalgebra::Point3;
use vc_spatial::VoxelCoord;

use crate::{NodeId, NodeKind, SkeletonNode};

/// Undirected graph over skeleton voxels.
///
/// Nodes live in an arena indexed by dense [`NodeId`]s; adjacency lists are
/// kept sorted and deduplicated, so the edge set is deterministic no matter
/// what order edges were discovered in.
#[derive(Debug, Clone, Default)]
pub struct SkeletonGraph {
    nodes: Vec<SkeletonNode>,
    adjacency: Vec<Vec<NodeId>>,
    edges: usize,
}

impl SkeletonGraph {
    /// Create an empty graph.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            edges: 0,
        }
    }

    /// Create an empty graph with room for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            edges: 0,
        }
    }

    /// Append a node and return its id.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: skeletons are bounded by grid cells, far below u32::MAX nodes
    pub fn add_node(&mut self, voxel: VoxelCoord, position: Point3<f64>) -> NodeId {
        let id = self.nodes.len() as NodeId;
        self.nodes.push(SkeletonNode {
            id,
            voxel,
            position,
        });
        self.adjacency.push(Vec::new());
        id
    }

    /// Insert an undirected edge. Returns false for self-loops, duplicate
    /// edges and out-of-range ids, which leave the graph unchanged.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        if a == b || a as usize >= self.nodes.len() || b as usize >= self.nodes.len() {
            return false;
        }
        let list = &mut self.adjacency[a as usize];
        match list.binary_search(&b) {
            Ok(_) => return false,
            Err(pos) => list.insert(pos, b),
        }
        let list = &mut self.adjacency[b as usize];
        if let Err(pos) = list.binary_search(&a) {
            list.insert(pos, a);
        }
        self.edges += 1;
        true
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges
    }

    /// True when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in id order.
    #[must_use]
    pub fn nodes(&self) -> &[SkeletonNode] {
        &self.nodes
    }

    /// The node with the given id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SkeletonNode {
        &self.nodes[id as usize]
    }

    /// Sorted neighbor ids of a node.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id as usize]
    }

    /// Degree of a node.
    #[must_use]
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency[id as usize].len()
    }

    /// Topological role of a node.
    #[must_use]
    pub fn kind(&self, id: NodeId) -> NodeKind {
        NodeKind::from_degree(self.degree(id))
    }

    /// Ids of all degree-1 nodes.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|n| self.degree(n.id) == 1)
            .map(|n| n.id)
    }

    /// Number of junction nodes (degree ≥ 3).
    #[must_use]
    pub fn num_junctions(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| self.kind(n.id) == NodeKind::Junction)
            .count()
    }

    /// Number of endpoint nodes (degree 1).
    #[must_use]
    pub fn num_endpoints(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| self.kind(n.id) == NodeKind::Endpoint)
            .count()
    }
}

impl fmt::Display for SkeletonGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} nodes, {} edges, {} junctions, {} endpoints",
            self.node_count(),
            self.edge_count(),
            self.num_junctions(),
            self.num_endpoints(),
        )
    }
}
