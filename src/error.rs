//! Error conditions raised by the GPA pipeline and its configuration.

use thiserror::Error;

/// Recoverable conditions the caller reports back to the student.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GpaError {
    /// A grade token outside {A, B+, B, C+, C, D, F}.
    #[error("unrecognized grade '{0}' (expected one of A, B+, B, C+, C, D, F)")]
    InvalidGrade(String),

    /// Hours that are non-numeric or below the allowed minimum.
    #[error("invalid credit hours '{0}'")]
    InvalidHours(String),

    /// Prior cumulative GPA outside the 0.0–4.0 scale.
    #[error("previous GPA {0} is outside the 0.0-4.0 scale")]
    OutOfRangeGpa(f64),

    /// Prior GPA field that is not a number at all.
    #[error("previous GPA '{0}' is not a number")]
    InvalidPriorGpa(String),

    /// Target GPA for a projection outside the 0.0–4.0 scale.
    #[error("target GPA {0} is outside the 0.0-4.0 scale")]
    OutOfRangeTarget(f64),

    /// No valid course hours and no prior record to compute from.
    #[error("no valid grades or hours entered")]
    NoData,
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown locale '{0}' (expected en or ar)")]
    UnknownLocale(String),

    #[error("unknown grade policy '{0}' (expected reject, skip or zero)")]
    UnknownGradePolicy(String),

    #[error("invalid decimal places '{0}'")]
    InvalidDecimals(String),
}
