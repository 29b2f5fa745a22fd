//! Error types for the numerical kernels.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type NumericsResult<T> = Result<T, NumericsError>;

/// Errors that can occur while constructing numerical objects.
///
/// All of these are construction-time failures: evaluation of a built
/// spline and the per-step work of an integrator never error.
#[derive(Error, Debug, Clone)]
pub enum NumericsError {
    /// Paired input sequences disagree in shape or length.
    #[error("shape mismatch: {what} has shape {actual}, expected {expected}")]
    ShapeMismatch {
        /// Which input was the wrong shape.
        what: String,
        /// The shape required by its companion inputs.
        expected: String,
        /// The shape actually supplied.
        actual: String,
    },

    /// The node sequence cannot index segments.
    #[error("invalid nodes: {reason}")]
    InvalidNodes {
        /// Why the nodes were rejected.
        reason: String,
    },

    /// Tridiagonal elimination hit a zero or near-zero pivot.
    #[error("singular system: elimination pivot {pivot:.2e} is below tolerance")]
    SingularSystem {
        /// The offending pivot value.
        pivot: f64,
    },

    /// The integration time grid is unusable.
    #[error("invalid time grid: {reason}")]
    InvalidTimeGrid {
        /// Why the grid was rejected.
        reason: String,
    },
}

impl NumericsError {
    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(
        what: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Creates an invalid nodes error.
    #[must_use]
    pub fn invalid_nodes(reason: impl Into<String>) -> Self {
        Self::InvalidNodes {
            reason: reason.into(),
        }
    }

    /// Creates an invalid time grid error.
    #[must_use]
    pub fn invalid_time_grid(reason: impl Into<String>) -> Self {
        Self::InvalidTimeGrid {
            reason: reason.into(),
        }
    }
}
