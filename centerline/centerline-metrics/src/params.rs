//! Tuning parameters for indicator computation.

use centerline_types::Axis;

/// Controls for tangent estimation and arch classification.
///
/// The arch thresholds and axis mirror the published heuristic (branch
/// take-off height relative to the vertical extent, type I above 0.7,
/// type II above 0.4) but stay configurable: both depend on the scan
/// orientation convention and the vessel anatomy under study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsParams {
    /// Window of points on either side of a junction sample used to fit
    /// a branch tangent. Default: `5`.
    pub tangent_window: usize,
    /// World axis along which arch height is measured. Default:
    /// [`Axis::Y`].
    pub arch_axis: Axis,
    /// Relative bifurcation height above which the arch is type I.
    /// Default: `0.7`.
    pub high_threshold: f64,
    /// Relative bifurcation height above which the arch is type II.
    /// Default: `0.4`.
    pub mid_threshold: f64,
}

impl Default for MetricsParams {
    fn default() -> Self {
        Self {
            tangent_window: 5,
            arch_axis: Axis::Y,
            high_threshold: 0.7,
            mid_threshold: 0.4,
        }
    }
}

impl MetricsParams {
    /// Creates the default parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tangent fit window.
    #[must_use]
    pub const fn with_tangent_window(mut self, window: usize) -> Self {
        self.tangent_window = window;
        self
    }

    /// Sets the arch height axis.
    #[must_use]
    pub const fn with_arch_axis(mut self, axis: Axis) -> Self {
        self.arch_axis = axis;
        self
    }

    /// Sets the type I relative-height threshold.
    #[must_use]
    pub const fn with_high_threshold(mut self, threshold: f64) -> Self {
        self.high_threshold = threshold;
        self
    }

    /// Sets the type II relative-height threshold.
    #[must_use]
    pub const fn with_mid_threshold(mut self, threshold: f64) -> Self {
        self.mid_threshold = threshold;
        self
    }
}
