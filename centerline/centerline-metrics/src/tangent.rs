//! Tangent estimation near junctions.
//!
//! Single-segment differences are too noisy on resampled branches, so
//! tangents come from a linear least-squares fit over a short window of
//! points: the slope of each coordinate against the sample index, as a
//! direction vector. For a two-point window the fit degenerates to the
//! plain difference.

use centerline_types::Branch;
use nalgebra::{Point3, Vector3};

use crate::bifurcation::BranchEnd;

/// Direction vectors shorter than this have no usable orientation.
const NORM_EPSILON: f64 = 1e-12;

/// Least-squares slope of the points against their index, normalized.
///
/// `None` when fewer than two points are given or the fitted direction
/// has (near) zero norm, which happens when every point coincides.
pub(crate) fn fit_tangent(points: &[Point3<f64>]) -> Option<Vector3<f64>> {
    let n = points.len();
    if n < 2 {
        return None;
    }
    let mean_index = (n - 1) as f64 * 0.5;
    let mut centroid = Vector3::zeros();
    for point in points {
        centroid += point.coords;
    }
    let centroid = centroid / n as f64;

    let mut numerator = Vector3::zeros();
    let mut denominator = 0.0_f64;
    for (index, point) in points.iter().enumerate() {
        let offset = index as f64 - mean_index;
        numerator += (point.coords - centroid) * offset;
        denominator += offset * offset;
    }
    let slope = numerator / denominator;
    let norm = slope.norm();
    if norm < NORM_EPSILON {
        return None;
    }
    Some(slope / norm)
}

/// Unit tangent at one end of a branch, directed away from that end.
pub(crate) fn outward_tangent(
    branch: &Branch,
    end: BranchEnd,
    window: usize,
) -> Option<Vector3<f64>> {
    let points = &branch.points;
    if points.len() < 2 {
        return None;
    }
    let take = (window + 1).min(points.len());
    match end {
        BranchEnd::Start => fit_tangent(&points[..take]),
        BranchEnd::End => {
            let reversed: Vec<Point3<f64>> =
                points[points.len() - take..].iter().rev().copied().collect();
            fit_tangent(&reversed)
        }
    }
}

/// Unit tangent of a branch at the end touching a junction, directed
/// toward the junction (the direction of travel into it).
pub(crate) fn junction_tangent(
    branch: &Branch,
    end: BranchEnd,
    window: usize,
) -> Option<Vector3<f64>> {
    outward_tangent(branch, end, window).map(|tangent| -tangent)
}

/// Angle between two unit vectors in degrees, clamped into [0°, 180°].
pub(crate) fn angle_degrees(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos().to_degrees()
}
