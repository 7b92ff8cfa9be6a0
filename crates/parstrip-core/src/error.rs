//! Error types for the Parstrip core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Tenor string could not be parsed.
    #[error("Invalid tenor '{tenor}': {reason}")]
    InvalidTenor {
        /// The offending tenor string.
        tenor: String,
        /// Reason for the parse failure.
        reason: String,
    },

    /// Day count convention token was not recognized.
    #[error("Invalid day count convention '{token}'")]
    InvalidDayCount {
        /// The unrecognized convention token.
        token: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid tenor error.
    #[must_use]
    pub fn invalid_tenor(tenor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTenor {
            tenor: tenor.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid day count error.
    #[must_use]
    pub fn invalid_day_count(token: impl Into<String>) -> Self {
        Self::InvalidDayCount {
            token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_invalid_tenor_display() {
        let err = CoreError::invalid_tenor("6q", "unknown unit 'q'");
        let msg = err.to_string();
        assert!(msg.contains("6q"));
        assert!(msg.contains("unknown unit"));
    }

    #[test]
    fn test_invalid_day_count_display() {
        let err = CoreError::invalid_day_count("ACT/ACT");
        assert!(err.to_string().contains("ACT/ACT"));
    }
}
