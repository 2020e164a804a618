//! Error types for curve operations.

use thiserror::Error;

/// Errors that can occur during curve operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Insufficient points to define the curve.
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// Sample spacing must be positive and finite.
    #[error("invalid sample spacing: {0} (must be positive and finite)")]
    InvalidSpacing(f64),
}

impl CurveError {
    /// Create an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Check if this is an insufficient points error.
    #[must_use]
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CurveError::insufficient_points(2, 1);
        assert!(err.to_string().contains("need at least 2"));
        assert!(err.to_string().contains("got 1"));

        let err = CurveError::InvalidSpacing(-0.5);
        assert!(err.to_string().contains("-0.5"));
    }

    #[test]
    fn test_error_predicates() {
        let err = CurveError::insufficient_points(2, 0);
        assert!(err.is_insufficient_points());

        let err = CurveError::InvalidSpacing(0.0);
        assert!(!err.is_insufficient_points());
    }
}
