//! Centerline branches.

use nalgebra::Point3;

use crate::NodeId;

/// Chords shorter than this are treated as closed (zero displacement).
const CHORD_EPSILON: f64 = 1e-10;

/// One centerline branch: an ordered run of world points between two
/// degree-≠2 graph nodes.
///
/// Consecutive points are graph-adjacent when the branch comes straight
/// from segmentation; smoothing resamples the interior but never moves the
/// endpoints. A closed branch (a pure cycle) repeats its first point last
/// and carries the same node id at both ends.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Branch {
    /// Ordered points in millimetres, endpoints inclusive.
    pub points: Vec<Point3<f64>>,
    /// Graph node id of the first point.
    pub start_node: NodeId,
    /// Graph node id of the last point.
    pub end_node: NodeId,
}

impl Branch {
    /// Create a branch from ordered points and its end node ids.
    #[must_use]
    pub const fn new(points: Vec<Point3<f64>>, start_node: NodeId, end_node: NodeId) -> Self {
        Self {
            points,
            start_node,
            end_node,
        }
    }

    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// First point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point3<f64>> {
        self.points.first()
    }

    /// Last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point3<f64>> {
        self.points.last()
    }

    /// True when the branch is a closed cycle (first point repeated last).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.points.len() > 2 && self.points.first() == self.points.last()
    }

    /// Path length in millimetres: the sum of segment lengths.
    #[must_use]
    pub fn length_mm(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }

    /// Straight-line distance between the endpoints in millimetres.
    #[must_use]
    pub fn chord_mm(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (last - first).norm(),
            _ => 0.0,
        }
    }

    /// Tortuosity: path length over chord.
    ///
    /// `None` when the chord is (near) zero: closed cycles and
    /// single-point branches have no meaningful tortuosity.
    #[must_use]
    pub fn tortuosity(&self) -> Option<f64> {
        let chord = self.chord_mm();
        if chord < CHORD_EPSILON {
            return None;
        }
        Some(self.length_mm() / chord)
    }
}
