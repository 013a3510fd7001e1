//! CVE construction from components

use chrono::{Datelike, Timelike};

use crate::config::{FAKE_SEQUENCE_MIN, FAKE_SEQUENCE_SPAN};
use crate::normalize::format_cve;

/// Build `CVE-{year}-{sequence}`.
///
/// Nothing is validated: out-of-range years and negative sequences are
/// rendered as given.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn generate_cve(year: i64, sequence: i64) -> String {
    format_cve(&format!("CVE-{year}-{sequence}"))
}

/// Build a CVE for the current year with a five-digit sequence.
///
/// Meant for test fixtures. Not random in any strong sense and not unique.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn generate_fake_cve() -> String {
    generate_fake_cve_at(&chrono::Local::now())
}

/// [`generate_fake_cve`] for a given instant.
///
/// The sequence comes from the sub-second nanoseconds, in `[10000, 99999]`.
pub fn generate_fake_cve_at<T: Datelike + Timelike>(now: &T) -> String {
    let sequence = FAKE_SEQUENCE_MIN + i64::from(now.nanosecond()) % FAKE_SEQUENCE_SPAN;
    generate_cve(i64::from(now.year()), sequence)
}
