//! UniFFI wrappers for operations whose Rust signatures are not FFI-safe
//! (slices, tuples, `Ordering`, `BTreeMap`).

use std::collections::HashMap;

use crate::{
    compare_cves, dedup_cves, extract_cves, extract_cves_with_positions, filter_by_year,
    filter_by_year_range, group_by_year, recent_cves, sort_cves, split_cve, ExtractedCve,
};

/// Year and sequence segments, empty when the input does not split.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct CveParts {
    pub year: String,
    pub sequence: String,
}

#[uniffi::export]
pub fn split_cve_ffi(cve: String) -> CveParts {
    let (year, sequence) = split_cve(&cve);
    CveParts { year, sequence }
}

#[uniffi::export]
pub fn extract_cves_ffi(text: String) -> Vec<String> {
    extract_cves(&text)
}

#[uniffi::export]
pub fn extract_cves_with_positions_ffi(text: String) -> Vec<ExtractedCve> {
    extract_cves_with_positions(&text)
}

/// `-1`, `0` or `1`.
#[uniffi::export]
pub fn compare_cves_ffi(cve_a: String, cve_b: String) -> i32 {
    compare_cves(&cve_a, &cve_b) as i32
}

#[uniffi::export]
pub fn sort_cves_ffi(cves: Vec<String>) -> Vec<String> {
    sort_cves(&cves)
}

#[uniffi::export]
pub fn group_by_year_ffi(cves: Vec<String>) -> HashMap<String, Vec<String>> {
    group_by_year(&cves).into_iter().collect()
}

#[uniffi::export]
pub fn filter_by_year_ffi(cves: Vec<String>, year: i64) -> Vec<String> {
    filter_by_year(&cves, year)
}

#[uniffi::export]
pub fn filter_by_year_range_ffi(cves: Vec<String>, start: i64, end: i64) -> Vec<String> {
    filter_by_year_range(&cves, start, end)
}

#[uniffi::export]
pub fn recent_cves_ffi(cves: Vec<String>, years: i64) -> Vec<String> {
    recent_cves(&cves, years)
}

#[uniffi::export]
pub fn dedup_cves_ffi(cves: Vec<String>) -> Vec<String> {
    dedup_cves(&cves)
}
