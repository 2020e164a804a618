//! Indicator computation over a branch set.

use centerline_types::Branch;
use nalgebra::{Point3, Vector3};
use tracing::{info, warn};

use crate::bifurcation::{find_bifurcations, Bifurcation};
use crate::error::{MetricsError, MetricsResult};
use crate::params::MetricsParams;
use crate::report::{
    ArchClassification, ArchType, BifurcationAngles, BranchStats, GlobalTortuosity,
    IndicatorReport, MaximumCurvature, PairAngle, TakeoffAngle,
};
use crate::tangent::{angle_degrees, junction_tangent, outward_tangent};

/// Axis extents smaller than this cannot anchor a relative height.
const EXTENT_EPSILON: f64 = 1e-9;

/// Curvatures below this (radius beyond 10^9 mm) are rounding noise from
/// straight runs, not geometry.
const CURVATURE_EPSILON: f64 = 1e-9;

/// Computes the full indicator report for a set of branches.
///
/// Bifurcations are derived from shared branch endpoints first; every
/// metric then reads the same branch and bifurcation sets. Degenerate
/// geometry (zero chords, zero-norm tangents) nulls the affected metric
/// with a warning instead of failing the run.
///
/// # Errors
///
/// Returns [`MetricsError::NoBranches`] when `branches` is empty.
pub fn compute_indicators(
    branches: &[Branch],
    params: &MetricsParams,
) -> MetricsResult<IndicatorReport> {
    if branches.is_empty() {
        return Err(MetricsError::NoBranches);
    }
    let bifurcations = find_bifurcations(branches);
    info!(
        branches = branches.len(),
        bifurcations = bifurcations.len(),
        "Computing vascular indicators"
    );

    Ok(IndicatorReport {
        global_tortuosity: global_tortuosity(branches),
        takeoff_angles: takeoff_angles(branches, &bifurcations, params),
        bifurcation_angles: bifurcation_angles(branches, &bifurcations, params),
        maximum_curvature: maximum_curvature(branches),
        aortic_arch_type: classify_arch(branches, &bifurcations, params),
    })
}

/// Per-branch length, chord and tortuosity rows for the diagnostic CSV.
#[must_use]
pub fn branch_stats(branches: &[Branch]) -> Vec<BranchStats> {
    branches
        .iter()
        .enumerate()
        .map(|(branch_id, branch)| BranchStats {
            branch_id,
            length_mm: branch.length_mm(),
            chord_mm: branch.chord_mm(),
            tortuosity: branch.tortuosity(),
        })
        .collect()
}

/// Index of the longest branch. Ties keep the earliest index.
fn principal_branch(branches: &[Branch]) -> usize {
    let mut best = 0;
    let mut max_length = 0.0_f64;
    for (index, branch) in branches.iter().enumerate() {
        let length = branch.length_mm();
        if length > max_length {
            max_length = length;
            best = index;
        }
    }
    best
}

fn global_tortuosity(branches: &[Branch]) -> Option<GlobalTortuosity> {
    let branch_index = principal_branch(branches);
    let principal = &branches[branch_index];
    match principal.tortuosity() {
        Some(tortuosity) => {
            info!(
                branch = branch_index,
                tortuosity,
                path_length_mm = principal.length_mm(),
                "Global tortuosity"
            );
            Some(GlobalTortuosity {
                tortuosity,
                path_length_mm: principal.length_mm(),
                euclidean_distance_mm: principal.chord_mm(),
                branch_index,
            })
        }
        None => {
            warn!(
                branch = branch_index,
                "Principal branch has a zero chord; tortuosity is undefined"
            );
            None
        }
    }
}

fn takeoff_angles(
    branches: &[Branch],
    bifurcations: &[Bifurcation],
    params: &MetricsParams,
) -> Vec<TakeoffAngle> {
    let principal = principal_branch(branches);
    let mut angles = Vec::new();

    for bifurcation in bifurcations {
        let Some(anchor) = bifurcation
            .incidences
            .iter()
            .find(|incidence| incidence.branch == principal)
        else {
            continue;
        };
        let Some(main_direction) =
            junction_tangent(&branches[principal], anchor.end, params.tangent_window)
        else {
            warn!(
                branch = principal,
                "Principal tangent is degenerate at a bifurcation"
            );
            continue;
        };

        for incidence in &bifurcation.incidences {
            if incidence.branch == principal {
                continue;
            }
            let Some(side_direction) = outward_tangent(
                &branches[incidence.branch],
                incidence.end,
                params.tangent_window,
            ) else {
                warn!(
                    branch = incidence.branch,
                    "Skipping a side branch with a degenerate tangent"
                );
                continue;
            };
            angles.push(TakeoffAngle {
                branch_index: incidence.branch,
                angle_degrees: angle_degrees(&main_direction, &side_direction),
                bifurcation_position: position_array(&bifurcation.position),
            });
        }
    }

    info!(count = angles.len(), "Computed take-off angles");
    angles
}

fn bifurcation_angles(
    branches: &[Branch],
    bifurcations: &[Bifurcation],
    params: &MetricsParams,
) -> Vec<BifurcationAngles> {
    let mut results = Vec::new();

    for bifurcation in bifurcations {
        let mut directions: Vec<(usize, Vector3<f64>)> = Vec::new();
        for incidence in &bifurcation.incidences {
            match outward_tangent(
                &branches[incidence.branch],
                incidence.end,
                params.tangent_window,
            ) {
                Some(direction) => directions.push((incidence.branch, direction)),
                None => warn!(
                    branch = incidence.branch,
                    "Skipping a degenerate tangent at a bifurcation"
                ),
            }
        }
        if directions.len() < 2 {
            continue;
        }

        let mut angles = Vec::new();
        for i in 0..directions.len() {
            for j in i + 1..directions.len() {
                angles.push(PairAngle {
                    branch1: directions[i].0,
                    branch2: directions[j].0,
                    angle_degrees: angle_degrees(&directions[i].1, &directions[j].1),
                });
            }
        }
        let mean_angle =
            angles.iter().map(|pair| pair.angle_degrees).sum::<f64>() / angles.len() as f64;

        results.push(BifurcationAngles {
            bifurcation_position: position_array(&bifurcation.position),
            branches: bifurcation
                .incidences
                .iter()
                .map(|incidence| incidence.branch)
                .collect(),
            angles,
            mean_angle,
        });
    }

    info!(count = results.len(), "Computed bifurcation angles");
    results
}

fn maximum_curvature(branches: &[Branch]) -> Option<MaximumCurvature> {
    let mut max_curvature = CURVATURE_EPSILON;
    let mut best_branch = None;

    for (index, branch) in branches.iter().enumerate() {
        let branch_max = curvature_profile(&branch.points)
            .into_iter()
            .fold(0.0_f64, f64::max);
        if branch_max > max_curvature {
            max_curvature = branch_max;
            best_branch = Some(index);
        }
    }

    best_branch.map(|branch_index| {
        let min_radius_mm = max_curvature.recip();
        info!(
            branch = branch_index,
            max_curvature, min_radius_mm, "Curvature extremum"
        );
        MaximumCurvature {
            branch_index,
            min_radius_mm,
        }
    })
}

/// Discrete curvature along a branch: unit tangents by central
/// difference at each interior point, then |Δtangent| over the step to
/// the next sample. Zero-length steps contribute zero curvature.
fn curvature_profile(points: &[Point3<f64>]) -> Vec<f64> {
    if points.len() < 3 {
        return Vec::new();
    }
    let tangents: Vec<Vector3<f64>> = (1..points.len() - 1)
        .map(|i| {
            let tangent = (points[i + 1] - points[i - 1]) * 0.5;
            let norm = tangent.norm();
            if norm > 0.0 {
                tangent / norm
            } else {
                Vector3::zeros()
            }
        })
        .collect();

    tangents
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let step = (points[i + 2] - points[i + 1]).norm();
            if step > 0.0 {
                (pair[1] - pair[0]).norm() / step
            } else {
                0.0
            }
        })
        .collect()
}

fn classify_arch(
    branches: &[Branch],
    bifurcations: &[Bifurcation],
    params: &MetricsParams,
) -> ArchClassification {
    if bifurcations.is_empty() {
        warn!("No bifurcations; arch type is indeterminate");
        return ArchClassification::indeterminate();
    }

    let axis = params.arch_axis.index();
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for branch in branches {
        for point in &branch.points {
            lo = lo.min(point[axis]);
            hi = hi.max(point[axis]);
        }
    }
    let extent = hi - lo;
    if extent <= EXTENT_EPSILON {
        warn!("Structure is flat along the arch axis; arch type is indeterminate");
        return ArchClassification::indeterminate();
    }

    let mean_height = bifurcations
        .iter()
        .map(|bifurcation| bifurcation.position[axis])
        .sum::<f64>()
        / bifurcations.len() as f64;
    let relative_height = (mean_height - lo) / extent;

    let arch_type = if relative_height > params.high_threshold {
        ArchType::I
    } else if relative_height > params.mid_threshold {
        ArchType::II
    } else {
        ArchType::III
    };
    info!(%arch_type, relative_height, "Classified aortic arch");

    ArchClassification {
        arch_type,
        description: arch_type.description().to_owned(),
        relative_height: Some(relative_height),
    }
}

fn position_array(position: &Point3<f64>) -> [f64; 3] {
    [position.x, position.y, position.z]
}
