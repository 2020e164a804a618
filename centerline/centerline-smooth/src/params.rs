//! Tuning parameters for branch smoothing.

use thiserror::Error;

/// Validation failures for [`SmoothParams`].
#[derive(Debug, Error, PartialEq)]
pub enum SmoothError {
    /// The damping factor fell outside the stable range.
    #[error("invalid damping factor {0}: must lie within [0, 1]")]
    InvalidDamping(f64),
    /// The resample spacing was zero, negative, or not finite.
    #[error("invalid resample spacing {0} mm: must be positive and finite")]
    InvalidSpacing(f64),
}

/// Controls for the two-pass branch smoother.
///
/// Pass one relaxes interior points toward the midpoint of their
/// neighbors; pass two resamples the relaxed polyline at a uniform
/// arc-length spacing. Branch endpoints are never moved by either pass.
///
/// # Examples
///
/// ```
/// use centerline_smooth::SmoothParams;
///
/// let params = SmoothParams::new()
///     .with_iterations(10)
///     .with_damping(0.3);
/// assert!(params.validate().is_ok());
/// assert_eq!(params.iterations, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothParams {
    /// Whether the smoothing stage runs at all. When `false` the
    /// smoother passes branches through untouched.
    pub enabled: bool,
    /// Number of relaxation rounds.
    pub iterations: u32,
    /// Fraction of the distance toward the neighbor midpoint that an
    /// interior point moves per round. Must lie within `[0, 1]`.
    pub damping: f64,
    /// Target spacing between consecutive points after resampling, in
    /// millimetres.
    pub resample_spacing_mm: f64,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            enabled: true,
            iterations: 5,
            damping: 0.5,
            resample_spacing_mm: 0.2,
        }
    }
}

impl SmoothParams {
    /// Creates the default parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the stage.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets the number of relaxation rounds.
    #[must_use]
    pub const fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the relaxation damping factor.
    #[must_use]
    pub const fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Sets the resample spacing in millimetres.
    #[must_use]
    pub const fn with_resample_spacing_mm(mut self, spacing: f64) -> Self {
        self.resample_spacing_mm = spacing;
        self
    }

    /// Checks that every scalar lies in its stable range.
    ///
    /// # Errors
    ///
    /// Returns [`SmoothError::InvalidDamping`] when `damping` is not a
    /// finite value within `[0, 1]`, and [`SmoothError::InvalidSpacing`]
    /// when `resample_spacing_mm` is not positive and finite.
    pub fn validate(&self) -> Result<(), SmoothError> {
        if !self.damping.is_finite() || self.damping < 0.0 || self.damping > 1.0 {
            return Err(SmoothError::InvalidDamping(self.damping));
        }
        if !self.resample_spacing_mm.is_finite() || self.resample_spacing_mm <= 0.0 {
            return Err(SmoothError::InvalidSpacing(self.resample_spacing_mm));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = SmoothParams::default();
        assert!(params.enabled);
        assert_eq!(params.iterations, 5);
        assert!((params.damping - 0.5).abs() < f64::EPSILON);
        assert!((params.resample_spacing_mm - 0.2).abs() < f64::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn damping_outside_the_unit_interval_is_rejected() {
        let low = SmoothParams::new().with_damping(-0.1);
        assert_eq!(low.validate(), Err(SmoothError::InvalidDamping(-0.1)));

        let high = SmoothParams::new().with_damping(1.1);
        assert_eq!(high.validate(), Err(SmoothError::InvalidDamping(1.1)));

        let nan = SmoothParams::new().with_damping(f64::NAN);
        assert!(matches!(nan.validate(), Err(SmoothError::InvalidDamping(_))));
    }

    #[test]
    fn damping_boundaries_are_accepted() {
        assert!(SmoothParams::new().with_damping(0.0).validate().is_ok());
        assert!(SmoothParams::new().with_damping(1.0).validate().is_ok());
    }

    #[test]
    fn spacing_must_be_positive_and_finite() {
        let zero = SmoothParams::new().with_resample_spacing_mm(0.0);
        assert_eq!(zero.validate(), Err(SmoothError::InvalidSpacing(0.0)));

        let negative = SmoothParams::new().with_resample_spacing_mm(-0.2);
        assert_eq!(negative.validate(), Err(SmoothError::InvalidSpacing(-0.2)));

        let inf = SmoothParams::new().with_resample_spacing_mm(f64::INFINITY);
        assert!(matches!(inf.validate(), Err(SmoothError::InvalidSpacing(_))));
    }

    #[test]
    fn builders_compose() {
        let params = SmoothParams::new()
            .with_enabled(false)
            .with_iterations(12)
            .with_damping(0.25)
            .with_resample_spacing_mm(0.5);
        assert!(!params.enabled);
        assert_eq!(params.iterations, 12);
        assert!((params.damping - 0.25).abs() < f64::EPSILON);
        assert!((params.resample_spacing_mm - 0.5).abs() < f64::EPSILON);
    }
}
