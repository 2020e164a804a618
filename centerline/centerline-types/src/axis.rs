//! Coordinate axes.

/// Coordinate axis through the volume.
///
/// Anatomical heuristics (the pruning sensitive region, arch
/// classification) measure positions along one world axis; which one
/// depends on the scan orientation, so it is always a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X-axis.
    X,
    /// Y-axis.
    Y,
    /// Z-axis.
    Z,
}

impl Axis {
    /// Coordinate index of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}
