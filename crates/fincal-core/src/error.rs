//! Error types for the Fincal library.
//!
//! This module defines the error types used throughout Fincal,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Fincal operations.
pub type FincalResult<T> = Result<T, FincalError>;

/// The main error type for Fincal operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FincalError {
    /// A (year, month, day) triple does not denote a real Gregorian date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A malformed tenor string, an out-of-order date pair, or an
    /// out-of-domain holiday rule parameter.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what's invalid.
        reason: String,
    },

    /// A holiday rule has no valid date in the requested year.
    ///
    /// Recovered locally when scanning a calendar for holidays (the rule
    /// is skipped); surfaced when the rule is queried directly.
    #[error("Rule '{rule}' has no date in year {year}")]
    RuleNotApplicable {
        /// Name of the rule that was queried.
        rule: String,
        /// The year the rule was queried for.
        year: i32,
    },

    /// A bounded business day search did not converge.
    ///
    /// Signals a degenerate calendar configuration, e.g. an entire year
    /// marked as holidays.
    #[error("Business day search exhausted after {limit} steps during {operation}")]
    SearchExhausted {
        /// The operation that gave up.
        operation: &'static str,
        /// The iteration ceiling that was exceeded.
        limit: u32,
    },
}

impl FincalError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Creates a rule-not-applicable error.
    #[must_use]
    pub fn rule_not_applicable(rule: impl Into<String>, year: i32) -> Self {
        Self::RuleNotApplicable {
            rule: rule.into(),
            year,
        }
    }

    /// Creates a search exhausted error.
    #[must_use]
    pub fn search_exhausted(operation: &'static str, limit: u32) -> Self {
        Self::SearchExhausted { operation, limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FincalError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_search_exhausted_display() {
        let err = FincalError::search_exhausted("business day adjustment", 366);
        assert!(err.to_string().contains("366 steps"));
        assert!(err.to_string().contains("adjustment"));
    }

    #[test]
    fn test_rule_not_applicable_display() {
        let err = FincalError::rule_not_applicable("Leap Day", 2025);
        assert!(err.to_string().contains("Leap Day"));
        assert!(err.to_string().contains("2025"));
    }
}
