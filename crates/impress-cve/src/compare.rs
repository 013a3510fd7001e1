//! Chronological comparison and sorting of CVEs
//!
//! Identifiers that are not well-formed compare as year `0`, sequence `0`.

use std::cmp::Ordering;

use crate::extractors::{extract_sequence_int, extract_year_int};
use crate::normalize::format_cve;

/// Difference between the years of two CVEs (`a - b`), saturating at the `i64` bounds.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn compare_by_year(cve_a: &str, cve_b: &str) -> i64 {
    extract_year_int(cve_a).saturating_sub(extract_year_int(cve_b))
}

/// How many years `cve_a` is after `cve_b`. Same value as [`compare_by_year`].
#[cfg_attr(feature = "native", uniffi::export)]
pub fn year_delta(cve_a: &str, cve_b: &str) -> i64 {
    compare_by_year(cve_a, cve_b)
}

/// Compare two CVEs by year, then by sequence number.
pub fn compare_cves(cve_a: &str, cve_b: &str) -> Ordering {
    compare_by_year(cve_a, cve_b)
        .cmp(&0)
        .then_with(|| extract_sequence_int(cve_a).cmp(&extract_sequence_int(cve_b)))
}

/// Format and sort CVEs in ascending order, returning a new vector.
pub fn sort_cves<S: AsRef<str>>(cves: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = cves.iter().map(|c| format_cve(c.as_ref())).collect();
    sorted.sort_by(|a, b| compare_cves(a, b));
    sorted
}
