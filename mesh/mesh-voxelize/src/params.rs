//! Voxelization parameters.

use crate::{VoxelizeError, VoxelizeResult};

/// Parameters controlling surface voxelization.
///
/// # Example
///
/// ```
/// use mesh_voxelize::VoxelizeParams;
///
/// let params = VoxelizeParams::new()
///     .with_spacing_mm(0.25)
///     .with_margin_voxels(2);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct VoxelizeParams {
    /// Edge length of each voxel in millimetres. Default: 0.4.
    pub spacing_mm: f64,

    /// Empty voxels of padding on every side of the grid, so the exterior
    /// flood always has a seed layer around the surface. Default: 1.
    pub margin_voxels: u32,

    /// Fill 2D-enclosed empty cells in each axial slice after the interior
    /// fill, recovering lumens behind small gaps in the surface.
    /// Default: true.
    pub fill_slice_holes: bool,
}

impl Default for VoxelizeParams {
    fn default() -> Self {
        Self {
            spacing_mm: 0.4,
            margin_voxels: 1,
            fill_slice_holes: true,
        }
    }
}

impl VoxelizeParams {
    /// Create parameters with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Half-resolution parameters for quick previews.
    #[must_use]
    pub const fn coarse() -> Self {
        Self {
            spacing_mm: 0.8,
            margin_voxels: 1,
            fill_slice_holes: true,
        }
    }

    /// Double-resolution parameters for small vessels.
    #[must_use]
    pub const fn fine() -> Self {
        Self {
            spacing_mm: 0.2,
            margin_voxels: 2,
            fill_slice_holes: true,
        }
    }

    /// Set the voxel spacing in millimetres.
    #[must_use]
    pub const fn with_spacing_mm(mut self, spacing_mm: f64) -> Self {
        self.spacing_mm = spacing_mm;
        self
    }

    /// Set the empty-voxel margin around the mesh bounds.
    #[must_use]
    pub const fn with_margin_voxels(mut self, margin_voxels: u32) -> Self {
        self.margin_voxels = margin_voxels;
        self
    }

    /// Enable or disable per-slice hole filling.
    #[must_use]
    pub const fn with_fill_slice_holes(mut self, fill: bool) -> Self {
        self.fill_slice_holes = fill;
        self
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// [`VoxelizeError::InvalidSpacing`] if `spacing_mm` is not positive
    /// and finite.
    pub fn validate(&self) -> VoxelizeResult<()> {
        if self.spacing_mm <= 0.0 || !self.spacing_mm.is_finite() {
            return Err(VoxelizeError::InvalidSpacing(self.spacing_mm));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let params = VoxelizeParams::default();
        assert!((params.spacing_mm - 0.4).abs() < f64::EPSILON);
        assert_eq!(params.margin_voxels, 1);
        assert!(params.fill_slice_holes);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let params = VoxelizeParams::new()
            .with_spacing_mm(1.0)
            .with_margin_voxels(3)
            .with_fill_slice_holes(false);
        assert!((params.spacing_mm - 1.0).abs() < f64::EPSILON);
        assert_eq!(params.margin_voxels, 3);
        assert!(!params.fill_slice_holes);
    }

    #[test]
    fn presets_are_valid() {
        assert!(VoxelizeParams::coarse().validate().is_ok());
        assert!(VoxelizeParams::fine().validate().is_ok());
        assert!(VoxelizeParams::fine().spacing_mm < VoxelizeParams::coarse().spacing_mm);
    }

    #[test]
    fn validate_rejects_bad_spacing() {
        for bad in [0.0, -0.4, f64::NAN, f64::INFINITY] {
            let params = VoxelizeParams::new().with_spacing_mm(bad);
            assert!(matches!(
                params.validate(),
                Err(VoxelizeError::InvalidSpacing(_))
            ));
        }
    }
}
