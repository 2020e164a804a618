//! Parameters for spur pruning and component selection.

use nalgebra::Point3;

pub use centerline_types::Axis;

/// Spatial region where pruning applies a relaxed length threshold.
///
/// Short terminal branches near expected take-off zones are more likely
/// to be real anatomy than thinning noise, so spurs whose mean position
/// falls in this region survive down to half the configured minimum
/// length. The region is the part of the structure's bounding extent at
/// or above `from_fraction` along `axis`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitiveRegion {
    /// Axis along which the region is measured. Default: `Axis::Y`.
    pub axis: Axis,
    /// Fraction of the bounding extent where the region starts, in
    /// `[0, 1]`. Default: `0.5` (the upper half).
    pub from_fraction: f64,
}

impl Default for SensitiveRegion {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            from_fraction: 0.5,
        }
    }
}

impl SensitiveRegion {
    /// True when `position` lies inside the region, given the bounding
    /// corners of the structure.
    #[must_use]
    pub fn contains(&self, position: &Point3<f64>, lo: &Point3<f64>, hi: &Point3<f64>) -> bool {
        let i = self.axis.index();
        position[i] >= (hi[i] - lo[i]).mul_add(self.from_fraction, lo[i])
    }
}

/// Parameters for spur pruning.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneParams {
    /// Spurs no longer than this are removed. Default: `1.0` mm.
    pub min_spur_length_mm: f64,
    /// Region with the relaxed threshold, or `None` to disable it.
    /// Default: the upper half of the volume along Y.
    pub sensitive_region: Option<SensitiveRegion>,
}

impl Default for PruneParams {
    fn default() -> Self {
        Self {
            min_spur_length_mm: 1.0,
            sensitive_region: Some(SensitiveRegion::default()),
        }
    }
}

impl PruneParams {
    /// Default pruning parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum spur length in millimetres.
    #[must_use]
    pub const fn with_min_spur_length_mm(mut self, length: f64) -> Self {
        self.min_spur_length_mm = length;
        self
    }

    /// Sets or disables the sensitive region.
    #[must_use]
    pub const fn with_sensitive_region(mut self, region: Option<SensitiveRegion>) -> Self {
        self.sensitive_region = region;
        self
    }
}

/// Parameters for connected-component selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentParams {
    /// Keep significant secondary components instead of only the
    /// largest one. Default: `true`.
    pub preserve: bool,
    /// A component is significant when its node count is at least this
    /// fraction of the largest component. Default: `0.1`.
    pub keep_ratio: f64,
    /// A component is never significant below this node count.
    /// Default: `50`.
    pub min_nodes: usize,
}

impl Default for ComponentParams {
    fn default() -> Self {
        Self {
            preserve: true,
            keep_ratio: 0.1,
            min_nodes: 50,
        }
    }
}

impl ComponentParams {
    /// Default selection parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables secondary-component preservation.
    #[must_use]
    pub const fn with_preserve(mut self, preserve: bool) -> Self {
        self.preserve = preserve;
        self
    }

    /// Sets the significance ratio against the largest component.
    #[must_use]
    pub const fn with_keep_ratio(mut self, ratio: f64) -> Self {
        self.keep_ratio = ratio;
        self
    }

    /// Sets the absolute node-count floor for significance.
    #[must_use]
    pub const fn with_min_nodes(mut self, nodes: usize) -> Self {
        self.min_nodes = nodes;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_clinical_configuration() {
        let prune = PruneParams::default();
        assert_eq!(prune.min_spur_length_mm, 1.0);
        let region = prune.sensitive_region.unwrap();
        assert_eq!(region.axis, Axis::Y);
        assert_eq!(region.from_fraction, 0.5);

        let components = ComponentParams::default();
        assert!(components.preserve);
        assert_eq!(components.keep_ratio, 0.1);
        assert_eq!(components.min_nodes, 50);
    }

    #[test]
    fn region_contains_splits_the_extent() {
        let region = SensitiveRegion::default();
        let lo = Point3::new(0.0, 0.0, 0.0);
        let hi = Point3::new(10.0, 20.0, 10.0);
        assert!(region.contains(&Point3::new(5.0, 10.0, 5.0), &lo, &hi));
        assert!(region.contains(&Point3::new(0.0, 19.0, 0.0), &lo, &hi));
        assert!(!region.contains(&Point3::new(5.0, 9.9, 5.0), &lo, &hi));
    }

    #[test]
    fn region_axis_is_configurable() {
        let region = SensitiveRegion {
            axis: Axis::Z,
            from_fraction: 0.8,
        };
        let lo = Point3::new(0.0, 0.0, 0.0);
        let hi = Point3::new(10.0, 10.0, 10.0);
        assert!(region.contains(&Point3::new(0.0, 0.0, 8.5), &lo, &hi));
        assert!(!region.contains(&Point3::new(9.0, 9.0, 7.5), &lo, &hi));
    }

    #[test]
    fn builders_override_fields() {
        let prune = PruneParams::new()
            .with_min_spur_length_mm(2.5)
            .with_sensitive_region(None);
        assert_eq!(prune.min_spur_length_mm, 2.5);
        assert!(prune.sensitive_region.is_none());

        let components = ComponentParams::new()
            .with_preserve(false)
            .with_keep_ratio(0.25)
            .with_min_nodes(5);
        assert!(!components.preserve);
        assert_eq!(components.keep_ratio, 0.25);
        assert_eq!(components.min_nodes, 5);
    }
}
