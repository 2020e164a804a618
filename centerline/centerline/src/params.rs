//! Whole-pipeline parameters.

use centerline_extract::SkeletonParams;
use centerline_graph::{ComponentParams, PruneParams, SensitiveRegion};
use centerline_metrics::MetricsParams;
use centerline_smooth::SmoothParams;
use mesh_voxelize::VoxelizeParams;

use crate::error::{PipelineError, PipelineResult};

/// Parameters for a full centerline run.
///
/// The scalar fields cover the knobs that vary between studies; each
/// stage keeps its remaining settings at the stage-crate defaults.
///
/// # Example
///
/// ```
/// use centerline::PipelineParams;
///
/// let params = PipelineParams::fine().with_min_spur_length_mm(0.5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Voxel edge length for surface voxelization, in millimetres.
    /// Default: 0.4.
    pub voxel_spacing_mm: f64,

    /// Empty voxels of padding around the surface. Default: 1.
    pub margin_voxels: u32,

    /// Terminal stubs up to this length are pruned as thinning noise.
    /// Default: 1.0 mm.
    pub min_spur_length_mm: f64,

    /// Region where short spurs survive with a relaxed threshold, or
    /// `None` to prune uniformly. Default: the upper half along Y.
    pub sensitive_region: Option<SensitiveRegion>,

    /// Keep significant secondary components instead of only the
    /// largest one. Default: true.
    pub preserve_components: bool,

    /// Run the smoothing stage. Default: true.
    pub smoothing: bool,

    /// Relaxation and resampling settings. Its `enabled` flag is
    /// superseded by [`smoothing`](Self::smoothing).
    pub smooth: SmoothParams,

    /// Indicator computation settings.
    pub metrics: MetricsParams,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            voxel_spacing_mm: 0.4,
            margin_voxels: 1,
            min_spur_length_mm: 1.0,
            sensitive_region: Some(SensitiveRegion::default()),
            preserve_components: true,
            smoothing: true,
            smooth: SmoothParams::default(),
            metrics: MetricsParams::default(),
        }
    }
}

impl PipelineParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The aortic arch configuration, with the anatomical heuristics
    /// spelled out: spur pruning relaxed in the upper half of the
    /// volume along Y, arch classification along Y with the 0.7 / 0.4
    /// height thresholds.
    #[must_use]
    pub fn for_aortic_arch() -> Self {
        Self {
            sensitive_region: Some(SensitiveRegion::default()),
            metrics: MetricsParams::default()
                .with_arch_axis(centerline_types::Axis::Y)
                .with_high_threshold(0.7)
                .with_mid_threshold(0.4),
            ..Self::default()
        }
    }

    /// Double-resolution parameters for small vessels: 0.2 mm voxels,
    /// a wider margin, and denser resampling.
    #[must_use]
    pub fn fine() -> Self {
        Self {
            voxel_spacing_mm: 0.2,
            margin_voxels: 2,
            smooth: SmoothParams::default().with_resample_spacing_mm(0.1),
            ..Self::default()
        }
    }

    /// Set the voxel spacing in millimetres.
    #[must_use]
    pub const fn with_voxel_spacing_mm(mut self, spacing_mm: f64) -> Self {
        self.voxel_spacing_mm = spacing_mm;
        self
    }

    /// Set the minimum spur length in millimetres.
    #[must_use]
    pub const fn with_min_spur_length_mm(mut self, length_mm: f64) -> Self {
        self.min_spur_length_mm = length_mm;
        self
    }

    /// Set or disable the sensitive pruning region.
    #[must_use]
    pub const fn with_sensitive_region(mut self, region: Option<SensitiveRegion>) -> Self {
        self.sensitive_region = region;
        self
    }

    /// Enable or disable secondary-component preservation.
    #[must_use]
    pub const fn with_preserve_components(mut self, preserve: bool) -> Self {
        self.preserve_components = preserve;
        self
    }

    /// Enable or disable the smoothing stage.
    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Replace the smoothing settings.
    #[must_use]
    pub fn with_smooth(mut self, smooth: SmoothParams) -> Self {
        self.smooth = smooth;
        self
    }

    /// Replace the indicator settings.
    #[must_use]
    pub fn with_metrics(mut self, metrics: MetricsParams) -> Self {
        self.metrics = metrics;
        self
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// [`PipelineError::Config`] naming the offending value. Runs
    /// before any compute, so a misconfigured run fails immediately.
    pub fn validate(&self) -> PipelineResult<()> {
        if self.voxel_spacing_mm <= 0.0 || !self.voxel_spacing_mm.is_finite() {
            return Err(PipelineError::Config(format!(
                "voxel spacing {} mm must be positive and finite",
                self.voxel_spacing_mm
            )));
        }
        if self.min_spur_length_mm < 0.0 || !self.min_spur_length_mm.is_finite() {
            return Err(PipelineError::Config(format!(
                "minimum spur length {} mm must be non-negative and finite",
                self.min_spur_length_mm
            )));
        }
        if let Some(region) = &self.sensitive_region {
            if !(0.0..=1.0).contains(&region.from_fraction) || !region.from_fraction.is_finite() {
                return Err(PipelineError::Config(format!(
                    "sensitive region fraction {} must lie within [0, 1]",
                    region.from_fraction
                )));
            }
        }
        self.smooth
            .validate()
            .map_err(|e| PipelineError::Config(e.to_string()))?;
        if self.metrics.tangent_window == 0 {
            return Err(PipelineError::Config(
                "tangent window must cover at least one point".to_string(),
            ));
        }
        for (name, value) in [
            ("high", self.metrics.high_threshold),
            ("mid", self.metrics.mid_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(PipelineError::Config(format!(
                    "{name} arch threshold {value} must lie within [0, 1]"
                )));
            }
        }
        if self.metrics.mid_threshold > self.metrics.high_threshold {
            return Err(PipelineError::Config(format!(
                "mid arch threshold {} exceeds high threshold {}",
                self.metrics.mid_threshold, self.metrics.high_threshold
            )));
        }
        Ok(())
    }

    /// Voxelization settings for this run.
    pub(crate) fn voxelize_params(&self) -> VoxelizeParams {
        VoxelizeParams::new()
            .with_spacing_mm(self.voxel_spacing_mm)
            .with_margin_voxels(self.margin_voxels)
    }

    /// Thinning settings for this run.
    pub(crate) fn skeleton_params(&self) -> SkeletonParams {
        SkeletonParams::default()
    }

    /// Pruning settings for this run.
    pub(crate) fn prune_params(&self) -> PruneParams {
        PruneParams::new()
            .with_min_spur_length_mm(self.min_spur_length_mm)
            .with_sensitive_region(self.sensitive_region)
    }

    /// Component selection settings for this run.
    pub(crate) fn component_params(&self) -> ComponentParams {
        ComponentParams::new().with_preserve(self.preserve_components)
    }

    /// Smoothing settings for this run.
    pub(crate) fn smooth_params(&self) -> SmoothParams {
        self.smooth.with_enabled(self.smoothing)
    }
}
