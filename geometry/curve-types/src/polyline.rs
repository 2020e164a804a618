//! Polyline (piecewise linear) curves.
//!
//! A polyline is a sequence of connected line segments defined by vertices.
//! Centerline branches are represented this way: each vertex is a point in
//! millimeter world space, and consecutive vertices are joined by straight
//! segments. Arc lengths are precomputed once so evaluation and resampling
//! are cheap.

use crate::{CurveError, Result};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A piecewise linear curve defined by a sequence of vertices.
///
/// The curve passes through all vertices in order, with linear
/// interpolation between consecutive points.
///
/// # Parameterization
///
/// The parameter `t ∈ [0, 1]` maps to the polyline based on arc length.
/// - `t = 0`: First vertex
/// - `t = 1`: Last vertex
/// - `t = 0.5`: Point at half the total arc length
///
/// # Example
///
/// ```
/// use curve_types::Polyline;
/// use nalgebra::Point3;
///
/// let polyline = Polyline::new(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.0),
/// ]);
///
/// // Length is 2 (two unit segments), chord is the straight-line diagonal
/// assert!((polyline.arc_length() - 2.0).abs() < 1e-10);
/// assert!((polyline.chord_length() - 2.0_f64.sqrt()).abs() < 1e-10);
///
/// // Midpoint by arc length is at the corner
/// let mid = polyline.point_at(0.5);
/// assert!((mid.x - 1.0).abs() < 1e-10);
/// assert!(mid.y.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polyline {
    /// The vertices of the polyline.
    vertices: Vec<Point3<f64>>,
    /// Cumulative arc lengths at each vertex (precomputed).
    cumulative_lengths: Vec<f64>,
    /// Total arc length (cached).
    total_length: f64,
}

impl Polyline {
    /// Create a new polyline from vertices.
    ///
    /// # Panics
    ///
    /// Panics if fewer than 2 vertices are provided. Use [`Self::try_new`]
    /// when the vertex count is not known statically.
    #[must_use]
    pub fn new(vertices: Vec<Point3<f64>>) -> Self {
        assert!(vertices.len() >= 2, "Polyline requires at least 2 vertices");

        let (cumulative_lengths, total_length) = compute_cumulative_lengths(&vertices);

        Self {
            vertices,
            cumulative_lengths,
            total_length,
        }
    }

    /// Try to create a new polyline, returning an error if invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientPoints`] if fewer than 2 vertices.
    pub fn try_new(vertices: Vec<Point3<f64>>) -> Result<Self> {
        if vertices.len() < 2 {
            return Err(CurveError::insufficient_points(2, vertices.len()));
        }

        let (cumulative_lengths, total_length) = compute_cumulative_lengths(&vertices);

        Ok(Self {
            vertices,
            cumulative_lengths,
            total_length,
        })
    }

    /// Create a polyline from a single line segment.
    #[must_use]
    pub fn from_segment(start: Point3<f64>, end: Point3<f64>) -> Self {
        Self::new(vec![start, end])
    }

    /// Get the vertices of the polyline.
    #[must_use]
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Get the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the polyline is empty (never true for a valid polyline).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Get the number of segments (edges).
    #[must_use]
    pub fn num_segments(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Get the first vertex.
    #[must_use]
    pub fn start(&self) -> Point3<f64> {
        self.vertices[0]
    }

    /// Get the last vertex.
    #[must_use]
    pub fn end(&self) -> Point3<f64> {
        self.vertices[self.vertices.len() - 1]
    }

    /// Total arc length of the polyline.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.total_length
    }

    /// Straight-line distance between the first and last vertex.
    ///
    /// The ratio of [`Self::arc_length`] to chord length measures how far
    /// the curve deviates from a straight path. It approaches zero for a
    /// closed polyline.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.end() - self.start()).norm()
    }

    /// Check if the polyline is closed (first and last vertex coincide).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.chord_length() < 1e-10
    }

    /// Evaluate the position at parameter `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.point_at_arc(t.clamp(0.0, 1.0) * self.total_length)
    }

    /// Evaluate the position at an arc-length distance from the start.
    ///
    /// Distances outside `[0, total]` clamp to the nearest endpoint.
    #[must_use]
    pub fn point_at_arc(&self, arc: f64) -> Point3<f64> {
        let (seg_idx, local_t) = self.segment_at_arc(arc);

        let p0 = self.vertices[seg_idx];
        let p1 = self.vertices[seg_idx + 1];

        p0 + (p1 - p0) * local_t
    }

    /// Compute the unit tangent at parameter `t`, clamped to `[0, 1]`.
    ///
    /// The tangent points in the direction of increasing `t`. Degenerate
    /// (zero length) segments fall back to a neighboring segment.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3<f64> {
        let arc = t.clamp(0.0, 1.0) * self.total_length;
        let (seg_idx, _) = self.segment_at_arc(arc);

        let p0 = self.vertices[seg_idx];
        let p1 = self.vertices[seg_idx + 1];
        let dir = p1 - p0;

        if dir.norm() > 1e-10 {
            dir.normalize()
        } else if seg_idx + 2 < self.vertices.len() {
            (self.vertices[seg_idx + 2] - p1).normalize()
        } else if seg_idx > 0 {
            (p0 - self.vertices[seg_idx - 1]).normalize()
        } else {
            Vector3::x()
        }
    }

    /// Find which segment contains the given arc length.
    ///
    /// Returns `(segment_index, local_t)` where `local_t ∈ [0, 1]`
    /// is the parameter within that segment.
    fn segment_at_arc(&self, arc: f64) -> (usize, f64) {
        if arc <= 0.0 {
            return (0, 0.0);
        }
        if arc >= self.total_length {
            return (self.num_segments() - 1, 1.0);
        }

        // Binary search for the first cumulative length >= arc
        let mut lo = 0;
        let mut hi = self.cumulative_lengths.len() - 1;

        while lo < hi {
            let mid = (lo + hi) / 2;
            if self.cumulative_lengths[mid] < arc {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        let seg_idx = lo.saturating_sub(1);
        let seg_start = self.cumulative_lengths[seg_idx];
        let seg_len = self.cumulative_lengths[seg_idx + 1] - seg_start;

        let local_t = if seg_len > 1e-10 {
            (arc - seg_start) / seg_len
        } else {
            0.0
        };

        (seg_idx, local_t)
    }

    /// Create a reversed copy of this polyline.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut vertices = self.vertices.clone();
        vertices.reverse();
        Self::new(vertices)
    }

    /// Resample the polyline to `n` vertices with uniform arc length spacing.
    ///
    /// The first and last vertices are copied rather than re-evaluated, so
    /// resampling never moves the endpoints. Requests for fewer than 2
    /// vertices are treated as 2.
    #[must_use]
    pub fn resampled(&self, n: usize) -> Self {
        let n = n.max(2);
        let mut points = Vec::with_capacity(n);

        points.push(self.start());
        for i in 1..n - 1 {
            let arc = i as f64 / (n - 1) as f64 * self.total_length;
            points.push(self.point_at_arc(arc));
        }
        points.push(self.end());

        Self::new(points)
    }

    /// Resample the polyline so that consecutive vertices are at most
    /// `spacing` apart along the curve.
    ///
    /// The resampled polyline has `ceil(arc_length / spacing)` segments of
    /// equal length, so the actual spacing never exceeds the request. The
    /// endpoints are preserved exactly, as in [`Self::resampled`].
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidSpacing`] if `spacing` is not positive
    /// and finite.
    pub fn resampled_by_spacing(&self, spacing: f64) -> Result<Self> {
        if !spacing.is_finite() || spacing <= 0.0 {
            return Err(CurveError::InvalidSpacing(spacing));
        }

        let segments = (self.total_length / spacing).ceil() as usize;
        Ok(self.resampled(segments + 1))
    }

    /// Compute the axis-aligned bounding box of the vertices.
    ///
    /// Returns `(min, max)` corners.
    #[must_use]
    pub fn bounding_box(&self) -> (Point3<f64>, Point3<f64>) {
        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for p in &self.vertices[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        (min, max)
    }
}

/// Compute cumulative arc lengths for a vertex list.
fn compute_cumulative_lengths(vertices: &[Point3<f64>]) -> (Vec<f64>, f64) {
    let mut cumulative = Vec::with_capacity(vertices.len());
    let mut total = 0.0;

    cumulative.push(0.0);
    for i in 1..vertices.len() {
        let seg_len = (vertices[i] - vertices[i - 1]).norm();
        total += seg_len;
        cumulative.push(total);
    }

    (cumulative, total)
}
