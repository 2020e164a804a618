//! Property-based tests for branch smoothing.
//!
//! Two invariants hold for every branch and every valid parameter set:
//! the endpoints never move, and relaxation plus on-curve resampling
//! never lengthens the path.

use centerline_smooth::{smooth_branch, SmoothParams};
use centerline_types::Branch;
use nalgebra::Point3;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A branch of 3 to 23 points with coordinates in [-10, 10] mm.
fn arb_branch() -> impl Strategy<Value = Branch> {
    prop::collection::vec(
        (-10.0..10.0_f64, -10.0..10.0_f64, -10.0..10.0_f64),
        3..24,
    )
    .prop_map(|coords| {
        let points: Vec<Point3<f64>> = coords
            .into_iter()
            .map(|(x, y, z)| Point3::new(x, y, z))
            .collect();
        Branch::new(points, 0, 1)
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// The first and last points of a smoothed branch are the original
    /// endpoints, bitwise, for any iteration count and damping factor.
    #[test]
    fn endpoints_are_invariant(
        branch in arb_branch(),
        iterations in 0_u32..=20,
        damping in 0.0..=1.0_f64,
    ) {
        let params = SmoothParams::new()
            .with_iterations(iterations)
            .with_damping(damping);
        let smoothed = smooth_branch(&branch, &params);
        prop_assert_eq!(smoothed.first(), branch.first());
        prop_assert_eq!(smoothed.last(), branch.last());
        prop_assert!(smoothed.point_count() >= 2);
    }

    /// Midpoint relaxation averages segment vectors and resampling keeps
    /// points on the relaxed curve, so the path can only get shorter.
    #[test]
    fn smoothing_never_lengthens(
        branch in arb_branch(),
        damping in 0.0..=1.0_f64,
    ) {
        let params = SmoothParams::new().with_damping(damping);
        let smoothed = smooth_branch(&branch, &params);
        prop_assert!(smoothed.length_mm() <= branch.length_mm() + 1e-6);
    }
}
