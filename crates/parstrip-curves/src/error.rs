//! Error types for curve operations.

use parstrip_core::types::Date;
use parstrip_core::CoreError;
use parstrip_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve construction, bootstrapping and valuation.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Requested date is outside the curve's pillar range.
    #[error("Date {requested} out of curve range [{min}, {max}]")]
    DateOutOfRange {
        /// The requested date.
        requested: Date,
        /// First pillar date.
        min: Date,
        /// Last pillar date.
        max: Date,
    },

    /// Schedule generation produced no accrual periods.
    #[error("Empty schedule: no periods between {start} and {maturity}")]
    EmptySchedule {
        /// Schedule start date.
        start: Date,
        /// Schedule maturity date.
        maturity: Date,
    },

    /// Pillar dates are not strictly increasing.
    #[error("Non-monotonic pillars at index {index}: {prev} >= {current}")]
    NonMonotonicPillars {
        /// Index where monotonicity breaks.
        index: usize,
        /// Previous pillar date.
        prev: Date,
        /// Current pillar date.
        current: Date,
    },

    /// Not enough pillars for the chosen interpolation method.
    #[error("Insufficient pillars: need at least {required}, got {got}")]
    InsufficientPillars {
        /// Minimum required pillars.
        required: usize,
        /// Actual number of pillars.
        got: usize,
    },

    /// Invalid calibration instrument.
    #[error("Invalid instrument: {reason}")]
    InvalidInstrument {
        /// Description of what's wrong with the instrument.
        reason: String,
    },

    /// Curve calibration failed to converge.
    #[error(
        "Calibration failed after {iterations} iterations (residual: {residual:.2e}): {message}"
    )]
    CalibrationFailure {
        /// Number of iterations attempted.
        iterations: u32,
        /// Largest absolute pricing residual.
        residual: f64,
        /// Description of the failure.
        message: String,
    },

    /// Error from the core date/day-count layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Error from the numerical layer.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CurveError {
    /// Creates a date out of range error.
    #[must_use]
    pub fn date_out_of_range(requested: Date, min: Date, max: Date) -> Self {
        Self::DateOutOfRange {
            requested,
            min,
            max,
        }
    }

    /// Creates an empty schedule error.
    #[must_use]
    pub fn empty_schedule(start: Date, maturity: Date) -> Self {
        Self::EmptySchedule { start, maturity }
    }

    /// Creates a non-monotonic pillars error.
    #[must_use]
    pub fn non_monotonic_pillars(index: usize, prev: Date, current: Date) -> Self {
        Self::NonMonotonicPillars {
            index,
            prev,
            current,
        }
    }

    /// Creates an insufficient pillars error.
    #[must_use]
    pub fn insufficient_pillars(required: usize, got: usize) -> Self {
        Self::InsufficientPillars { required, got }
    }

    /// Creates an invalid instrument error.
    #[must_use]
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates a calibration failure error.
    #[must_use]
    pub fn calibration_failed(iterations: u32, residual: f64, message: impl Into<String>) -> Self {
        Self::CalibrationFailure {
            iterations,
            residual,
            message: message.into(),
        }
    }
}
