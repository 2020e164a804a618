//! Indicator computation errors.

use thiserror::Error;

/// Failures while computing indicators.
///
/// Degenerate geometry (zero-norm tangents, zero chords) is not an
/// error: the affected metric comes back null and the run continues.
/// Only a structurally empty input stops the computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    /// The branch set is empty, so there is nothing to measure.
    #[error("no branches to analyze")]
    NoBranches,
}

/// Result alias for indicator computation.
pub type MetricsResult<T> = Result<T, MetricsError>;
