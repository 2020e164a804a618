//! Two-pass branch smoothing.
//!
//! Voxel-derived branches are staircases: every segment is an axis or
//! diagonal step of the grid. Pass one relaxes interior points toward the
//! midpoint of their neighbors, which flattens the stairs; pass two
//! resamples the relaxed polyline at a uniform arc-length spacing so that
//! downstream tangent and curvature estimates see evenly spaced points.
//! Neither pass moves a branch endpoint: junction positions are shared
//! between branches and must stay bitwise identical across all of them.

use std::fmt;

use centerline_types::Branch;
use curve_types::{CurveError, Polyline};
use nalgebra::Point3;
use tracing::{info, warn};

use crate::params::SmoothParams;

/// Branches shorter than this are left untouched.
const LENGTH_EPSILON: f64 = 1e-9;

/// Summary of one smoothing run over a set of branches.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothOutcome {
    /// The smoothed branches, in input order.
    pub branches: Vec<Branch>,
    /// How many branches were actually modified.
    pub branches_smoothed: usize,
    /// Total point count before smoothing.
    pub points_before: usize,
    /// Total point count after smoothing.
    pub points_after: usize,
}

impl fmt::Display for SmoothOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "smoothed {}/{} branches ({} → {} points)",
            self.branches_smoothed,
            self.branches.len(),
            self.points_before,
            self.points_after
        )
    }
}

/// Smooths a single branch.
///
/// Runs `iterations` rounds of damped midpoint relaxation over the
/// interior points, then resamples the result at
/// `resample_spacing_mm`. The first and last points of the output are
/// the original endpoints, bitwise. Branches with fewer than three
/// points or near-zero length pass through unchanged, as does every
/// branch when the stage is disabled.
///
/// # Examples
///
/// ```
/// use centerline_smooth::{smooth_branch, SmoothParams};
/// use centerline_types::Branch;
/// use nalgebra::Point3;
///
/// let jagged = Branch::new(
///     vec![
///         Point3::new(0.0, 0.0, 0.0),
///         Point3::new(1.0, 1.0, 0.0),
///         Point3::new(2.0, 0.0, 0.0),
///         Point3::new(3.0, 1.0, 0.0),
///         Point3::new(4.0, 0.0, 0.0),
///     ],
///     0,
///     4,
/// );
/// let smoothed = smooth_branch(&jagged, &SmoothParams::default());
/// assert!(smoothed.length_mm() < jagged.length_mm());
/// assert_eq!(smoothed.first(), jagged.first());
/// assert_eq!(smoothed.last(), jagged.last());
/// ```
#[must_use]
pub fn smooth_branch(branch: &Branch, params: &SmoothParams) -> Branch {
    smooth_one(branch, params).0
}

/// Smooths every branch in a set and reports what changed.
///
/// # Examples
///
/// ```
/// use centerline_smooth::{smooth_branches, SmoothParams};
/// use centerline_types::Branch;
/// use nalgebra::Point3;
///
/// let branch = Branch::new(
///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
///     0,
///     1,
/// );
/// let params = SmoothParams::new().with_enabled(false);
/// let outcome = smooth_branches(&[branch.clone()], &params);
/// assert_eq!(outcome.branches, vec![branch]);
/// assert_eq!(outcome.branches_smoothed, 0);
/// ```
#[must_use]
pub fn smooth_branches(branches: &[Branch], params: &SmoothParams) -> SmoothOutcome {
    let points_before: usize = branches.iter().map(Branch::point_count).sum();
    let mut branches_smoothed = 0_usize;
    let smoothed: Vec<Branch> = branches
        .iter()
        .map(|branch| {
            let (result, changed) = smooth_one(branch, params);
            if changed {
                branches_smoothed += 1;
            }
            result
        })
        .collect();
    let points_after: usize = smoothed.iter().map(Branch::point_count).sum();
    info!(
        branches = branches.len(),
        branches_smoothed,
        points_before,
        points_after,
        "Smoothed centerline branches"
    );
    SmoothOutcome {
        branches: smoothed,
        branches_smoothed,
        points_before,
        points_after,
    }
}

fn smooth_one(branch: &Branch, params: &SmoothParams) -> (Branch, bool) {
    if !params.enabled || branch.point_count() < 3 || branch.length_mm() <= LENGTH_EPSILON {
        return (branch.clone(), false);
    }

    let mut points = relax(&branch.points, params.iterations, params.damping);
    match resample(&points, params.resample_spacing_mm) {
        Ok(resampled) => points = resampled,
        Err(error) => warn!(%error, "Keeping relaxed points without resampling"),
    }

    // Junction positions are shared across branches; pin them exactly.
    let last = points.len() - 1;
    points[0] = branch.points[0];
    points[last] = branch.points[branch.points.len() - 1];

    (Branch::new(points, branch.start_node, branch.end_node), true)
}

/// Damped midpoint relaxation. Interior point `i` moves `damping` of the
/// way toward the midpoint of its neighbors each round; endpoints stay
/// where they are. All updates within a round read the previous round.
fn relax(points: &[Point3<f64>], iterations: u32, damping: f64) -> Vec<Point3<f64>> {
    let mut current = points.to_vec();
    if current.len() < 3 {
        return current;
    }
    let mut next = current.clone();
    for _ in 0..iterations {
        for i in 1..current.len() - 1 {
            let midpoint = Point3::from((current[i - 1].coords + current[i + 1].coords) * 0.5);
            next[i] = current[i] + (midpoint - current[i]) * damping;
        }
        std::mem::swap(&mut current, &mut next);
    }
    current
}

fn resample(points: &[Point3<f64>], spacing_mm: f64) -> Result<Vec<Point3<f64>>, CurveError> {
    let polyline = Polyline::try_new(points.to_vec())?;
    let resampled = polyline.resampled_by_spacing(spacing_mm)?;
    Ok(resampled.vertices().to_vec())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn zigzag() -> Branch {
        Branch::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(3.0, 1.0, 0.0),
                Point3::new(4.0, 0.0, 0.0),
            ],
            0,
            4,
        )
    }

    fn straight_line() -> Branch {
        Branch::new(
            (0..5)
                .map(|i| Point3::new(f64::from(i), 0.0, 0.0))
                .collect(),
            0,
            4,
        )
    }

    #[test]
    fn straight_line_points_stay_on_the_line() {
        let branch = straight_line();
        let smoothed = smooth_branch(&branch, &SmoothParams::default());
        assert_eq!(smoothed.point_count(), 21);
        for point in &smoothed.points {
            assert_eq!(point.y, 0.0);
            assert_eq!(point.z, 0.0);
        }
        assert_relative_eq!(smoothed.length_mm(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn zigzag_relaxation_shortens_the_path() {
        let branch = zigzag();
        let smoothed = smooth_branch(&branch, &SmoothParams::default());
        assert!(smoothed.length_mm() < branch.length_mm());
        assert!(smoothed.length_mm() >= branch.chord_mm());
    }

    #[test]
    fn endpoints_survive_bitwise() {
        let branch = Branch::new(
            vec![
                Point3::new(0.123, -4.5, 7.89),
                Point3::new(1.1, -3.3, 8.2),
                Point3::new(2.7, -2.0, 9.9),
                Point3::new(3.4, -1.1, 10.5),
            ],
            3,
            9,
        );
        let smoothed = smooth_branch(&branch, &SmoothParams::default());
        assert_eq!(smoothed.points[0], branch.points[0]);
        assert_eq!(smoothed.points.last(), branch.points.last());
        assert_eq!(smoothed.start_node, 3);
        assert_eq!(smoothed.end_node, 9);
    }

    #[test]
    fn two_point_branch_passes_through() {
        let branch = Branch::new(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            0,
            1,
        );
        let smoothed = smooth_branch(&branch, &SmoothParams::default());
        assert_eq!(smoothed, branch);
    }

    #[test]
    fn coincident_points_pass_through() {
        let point = Point3::new(2.0, 2.0, 2.0);
        let branch = Branch::new(vec![point, point, point], 0, 0);
        let smoothed = smooth_branch(&branch, &SmoothParams::default());
        assert_eq!(smoothed, branch);
    }

    #[test]
    fn disabled_stage_is_a_passthrough() {
        let branches = vec![zigzag(), straight_line()];
        let params = SmoothParams::new().with_enabled(false);
        let outcome = smooth_branches(&branches, &params);
        assert_eq!(outcome.branches, branches);
        assert_eq!(outcome.branches_smoothed, 0);
        assert_eq!(outcome.points_before, outcome.points_after);
    }

    #[test]
    fn closed_branch_keeps_its_anchor() {
        let anchor = Point3::new(0.0, 0.0, 0.0);
        let branch = Branch::new(
            vec![
                anchor,
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
                anchor,
            ],
            7,
            7,
        );
        let smoothed = smooth_branch(&branch, &SmoothParams::default());
        assert!(smoothed.is_closed());
        assert_eq!(smoothed.points[0], anchor);
        assert_eq!(*smoothed.points.last().unwrap(), anchor);
        assert_eq!(smoothed.start_node, 7);
        assert_eq!(smoothed.end_node, 7);
    }

    #[test]
    fn resample_spacing_sets_point_density() {
        let branch = straight_line();
        let params = SmoothParams::new().with_resample_spacing_mm(0.5);
        let smoothed = smooth_branch(&branch, &params);
        assert_eq!(smoothed.point_count(), 9);
        for pair in smoothed.points.windows(2) {
            assert_relative_eq!((pair[1] - pair[0]).norm(), 0.5, epsilon = 1e-9);
        }
    }

    #[test]
    fn full_damping_pulls_interior_points_to_the_neighbor_midpoint() {
        let branch = Branch::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            0,
            2,
        );
        // An unusable spacing skips the resample pass, exposing the raw
        // relaxation result.
        let params = SmoothParams::new()
            .with_iterations(1)
            .with_damping(1.0)
            .with_resample_spacing_mm(-1.0);
        let smoothed = smooth_branch(&branch, &params);
        assert_eq!(smoothed.point_count(), 3);
        assert_eq!(smoothed.points[1], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(smoothed.points[0], branch.points[0]);
        assert_eq!(smoothed.points[2], branch.points[2]);
    }

    #[test]
    fn outcome_display_summarizes_counts() {
        let branches = vec![
            zigzag(),
            Branch::new(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)], 0, 1),
        ];
        let outcome = smooth_branches(&branches, &SmoothParams::default());
        assert_eq!(outcome.branches_smoothed, 1);
        assert_eq!(outcome.points_before, 7);
        let expected = format!(
            "smoothed 1/2 branches (7 → {} points)",
            outcome.points_after
        );
        assert_eq!(outcome.to_string(), expected);
    }
}
