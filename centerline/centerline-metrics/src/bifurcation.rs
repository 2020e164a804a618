//! Bifurcation detection from shared branch endpoints.

use std::collections::BTreeMap;

use centerline_types::Branch;
use nalgebra::Point3;
use tracing::info;

/// Endpoint coordinates are quantized to this step (in mm) before
/// comparison, so floating-point noise cannot split a junction.
const QUANTUM_MM: f64 = 1e-3;

/// Which end of a branch touches a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchEnd {
    /// The branch's first point.
    Start,
    /// The branch's last point.
    End,
}

/// One branch endpoint meeting a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incidence {
    /// Index of the branch in the analyzed set.
    pub branch: usize,
    /// Which end of that branch sits on the junction.
    pub end: BranchEnd,
}

/// A junction where more than two branch endpoints coincide.
///
/// A shared endpoint touched by exactly two branches is just a
/// continuation and is not reported. A closed branch contributes both
/// of its (identical) endpoints, so a lollipop junction counts three.
#[derive(Debug, Clone, PartialEq)]
pub struct Bifurcation {
    /// Junction position, quantized to the detection grid.
    pub position: Point3<f64>,
    /// Branch endpoints meeting here, in branch order.
    pub incidences: Vec<Incidence>,
}

impl Bifurcation {
    /// Number of branch endpoints meeting at this junction.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.incidences.len()
    }
}

fn quantize(point: &Point3<f64>) -> (i64, i64, i64) {
    let key = |value: f64| (value / QUANTUM_MM).round() as i64;
    (key(point.x), key(point.y), key(point.z))
}

fn dequantize(key: (i64, i64, i64)) -> Point3<f64> {
    Point3::new(
        key.0 as f64 * QUANTUM_MM,
        key.1 as f64 * QUANTUM_MM,
        key.2 as f64 * QUANTUM_MM,
    )
}

/// Finds every position where more than two branch endpoints meet.
///
/// Branches with fewer than two points carry no endpoints and are
/// skipped. The result is ordered by quantized position, so repeated
/// runs over the same branches agree exactly.
#[must_use]
pub fn find_bifurcations(branches: &[Branch]) -> Vec<Bifurcation> {
    let mut meetings: BTreeMap<(i64, i64, i64), Vec<Incidence>> = BTreeMap::new();
    for (branch, points) in branches.iter().map(|b| &b.points).enumerate() {
        if points.len() < 2 {
            continue;
        }
        let ends = [
            (quantize(&points[0]), BranchEnd::Start),
            (quantize(&points[points.len() - 1]), BranchEnd::End),
        ];
        for (key, end) in ends {
            meetings.entry(key).or_default().push(Incidence { branch, end });
        }
    }

    let bifurcations: Vec<Bifurcation> = meetings
        .into_iter()
        .filter(|(_, incidences)| incidences.len() > 2)
        .map(|(key, incidences)| Bifurcation {
            position: dequantize(key),
            incidences,
        })
        .collect();
    info!(count = bifurcations.len(), "Detected bifurcations");
    bifurcations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(points: Vec<Point3<f64>>) -> Branch {
        Branch::new(points, 0, 0)
    }

    #[test]
    fn three_endpoints_at_one_position_are_a_bifurcation() {
        let junction = Point3::new(0.0, 10.0, 0.0);
        let branches = vec![
            branch(vec![Point3::new(0.0, 0.0, 0.0), junction]),
            branch(vec![junction, Point3::new(5.0, 15.0, 0.0)]),
            branch(vec![junction, Point3::new(-5.0, 15.0, 0.0)]),
        ];
        let found = find_bifurcations(&branches);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, junction);
        assert_eq!(found[0].degree(), 3);
        assert_eq!(
            found[0].incidences,
            vec![
                Incidence { branch: 0, end: BranchEnd::End },
                Incidence { branch: 1, end: BranchEnd::Start },
                Incidence { branch: 2, end: BranchEnd::Start },
            ]
        );
    }

    #[test]
    fn quantization_merges_nearby_endpoints() {
        let branches = vec![
            branch(vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]),
            branch(vec![Point3::new(1.0002, 0.0, 0.0), Point3::new(2.0, 1.0, 0.0)]),
            branch(vec![Point3::new(0.9998, 0.0, 0.0), Point3::new(2.0, -1.0, 0.0)]),
        ];
        let found = find_bifurcations(&branches);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].position, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn two_way_continuation_is_not_a_bifurcation() {
        let shared = Point3::new(1.0, 1.0, 1.0);
        let branches = vec![
            branch(vec![Point3::new(0.0, 0.0, 0.0), shared]),
            branch(vec![shared, Point3::new(2.0, 2.0, 2.0)]),
        ];
        assert!(find_bifurcations(&branches).is_empty());
    }

    #[test]
    fn closed_branch_endpoints_both_count() {
        let anchor = Point3::new(0.0, 0.0, 0.0);
        let branches = vec![
            branch(vec![
                anchor,
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                anchor,
            ]),
            branch(vec![anchor, Point3::new(0.0, -2.0, 0.0)]),
        ];
        let found = find_bifurcations(&branches);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].degree(), 3);
    }

    #[test]
    fn bifurcations_come_back_in_position_order() {
        let low = Point3::new(0.0, 0.0, 0.0);
        let high = Point3::new(5.0, 0.0, 0.0);
        let branches = vec![
            branch(vec![high, Point3::new(9.0, 5.0, 0.0)]),
            branch(vec![high, Point3::new(9.0, -5.0, 0.0)]),
            branch(vec![low, high]),
            branch(vec![low, Point3::new(-4.0, 5.0, 0.0)]),
            branch(vec![low, Point3::new(-4.0, -5.0, 0.0)]),
        ];
        let found = find_bifurcations(&branches);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].position, low);
        assert_eq!(found[1].position, high);
    }
}
