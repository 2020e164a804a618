//! The indicator report document.
//!
//! Field names and nesting mirror the published JSON schema; metrics
//! that could not be computed (degenerate geometry, nothing to measure)
//! serialize as `null` rather than being omitted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Complete indicator report for one centerline analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Tortuosity of the principal branch, or null when its chord is zero.
    pub global_tortuosity: Option<GlobalTortuosity>,
    /// One entry per side branch per bifurcation it leaves from.
    pub takeoff_angles: Vec<TakeoffAngle>,
    /// One entry per bifurcation with at least two usable tangents.
    pub bifurcation_angles: Vec<BifurcationAngles>,
    /// Sharpest bend over all branches, or null when everything is straight.
    pub maximum_curvature: Option<MaximumCurvature>,
    /// Aortic arch classification.
    pub aortic_arch_type: ArchClassification,
}

/// Tortuosity of the principal (longest) branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalTortuosity {
    /// Path length over chord, ≥ 1.
    pub tortuosity: f64,
    /// Path length of the principal branch in millimetres.
    pub path_length_mm: f64,
    /// Straight-line distance between its endpoints in millimetres.
    pub euclidean_distance_mm: f64,
    /// Index of the principal branch in the analyzed set.
    pub branch_index: usize,
}

/// Angle at which a side branch leaves the principal branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffAngle {
    /// Index of the side branch.
    pub branch_index: usize,
    /// Angle between the principal direction of travel and the side
    /// branch, in degrees within [0°, 180°].
    pub angle_degrees: f64,
    /// Position of the bifurcation the branch leaves from.
    pub bifurcation_position: [f64; 3],
}

/// Pairwise angles between the branches leaving one bifurcation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BifurcationAngles {
    /// Position of the bifurcation.
    pub bifurcation_position: [f64; 3],
    /// Indices of the branches meeting here, one per incident endpoint.
    pub branches: Vec<usize>,
    /// Angle for every unordered pair of outgoing directions.
    pub angles: Vec<PairAngle>,
    /// Mean of the pairwise angles in degrees.
    pub mean_angle: f64,
}

/// Angle between one pair of branches at a bifurcation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairAngle {
    /// First branch of the pair.
    pub branch1: usize,
    /// Second branch of the pair.
    pub branch2: usize,
    /// Angle between their outgoing directions in degrees.
    pub angle_degrees: f64,
}

/// The sharpest bend found along any branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaximumCurvature {
    /// Branch containing the bend.
    pub branch_index: usize,
    /// Radius of the osculating circle at the bend, in millimetres.
    pub min_radius_mm: f64,
}

/// Aortic arch type from the branch take-off height heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchClassification {
    /// The three-class label, or indeterminate.
    #[serde(rename = "type")]
    pub arch_type: ArchType,
    /// Human-readable summary of the classification.
    pub description: String,
    /// Mean bifurcation height relative to the overall extent, in [0, 1];
    /// null when no bifurcation exists.
    pub relative_height: Option<f64>,
}

impl ArchClassification {
    /// Classification used when no bifurcation is available.
    #[must_use]
    pub fn indeterminate() -> Self {
        Self {
            arch_type: ArchType::Indeterminate,
            description: ArchType::Indeterminate.description().to_owned(),
            relative_height: None,
        }
    }
}

/// Three-class aortic arch label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchType {
    /// Branches take off high on the arch.
    I,
    /// Branches take off at mid height.
    II,
    /// Branches take off low on the arch.
    III,
    /// Not enough bifurcations to classify.
    #[serde(rename = "indeterminate")]
    Indeterminate,
}

impl ArchType {
    /// Standard description for this label.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::I => "High branch take-off - Type I",
            Self::II => "Mid branch take-off - Type II",
            Self::III => "Low branch take-off - Type III",
            Self::Indeterminate => "Not enough bifurcations to classify",
        }
    }
}

impl fmt::Display for ArchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::Indeterminate => "indeterminate",
        };
        f.write_str(label)
    }
}

/// Per-branch geometry for the diagnostic CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchStats {
    /// Index of the branch in the analyzed set.
    pub branch_id: usize,
    /// Path length in millimetres.
    pub length_mm: f64,
    /// Endpoint-to-endpoint distance in millimetres.
    pub chord_mm: f64,
    /// Path length over chord, or `None` for a (near) closed branch.
    pub tortuosity: Option<f64>,
}
