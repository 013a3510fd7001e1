//! Error types for typed CVE parsing and validation.

use thiserror::Error;

/// Why a CVE was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CveError {
    /// Does not match `CVE-<digits>-<digits>`.
    #[error("not a CVE identifier: {0:?}")]
    Malformed(String),

    /// A numeric segment does not fit in an `i64`.
    #[error("{component} out of integer range: {value}")]
    InvalidNumber {
        component: &'static str,
        value: String,
    },

    /// Year outside the accepted window.
    #[error("year {year} outside {min}..={max}")]
    YearOutOfRange { year: i64, min: i64, max: i64 },

    /// Sequence number is zero.
    #[error("sequence must be positive, got {0}")]
    NonPositiveSequence(i64),
}

/// Result type for CVE operations.
pub type Result<T> = std::result::Result<T, CveError>;
