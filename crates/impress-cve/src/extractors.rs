//! CVE extraction from text and year/sequence decomposition

use serde::{Deserialize, Serialize};

use crate::normalize::{format_cve, is_cve, CVE_REGEX};

/// Extracted CVE with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct ExtractedCve {
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

/// Split a CVE into its year and sequence segments.
///
/// The input is formatted first. Returns `("", "")` unless splitting on `-`
/// yields exactly three segments. Numeric content is not checked.
pub fn split_cve(cve: &str) -> (String, String) {
    let formatted = format_cve(cve);
    let segments: Vec<&str> = formatted.split('-').collect();
    match segments.as_slice() {
        [_, year, seq] => (year.to_string(), seq.to_string()),
        _ => (String::new(), String::new()),
    }
}

/// Year segment of a CVE, as text.
///
/// Not gated on [`is_cve`]: anything that splits into three segments yields
/// its middle segment.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn extract_year(cve: &str) -> String {
    split_cve(cve).0
}

/// Year of a well-formed CVE, or `0`.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn extract_year_int(cve: &str) -> i64 {
    if !is_cve(cve) {
        return 0;
    }
    extract_year(cve).parse().unwrap_or(0)
}

/// Sequence segment of a well-formed CVE, or `""`.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn extract_sequence(cve: &str) -> String {
    if !is_cve(cve) {
        return String::new();
    }
    split_cve(cve).1
}

/// Sequence of a well-formed CVE, or `0`.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn extract_sequence_int(cve: &str) -> i64 {
    extract_sequence(cve).parse().unwrap_or(0)
}

/// Extract all CVEs from text, in order of appearance
pub fn extract_cves(text: &str) -> Vec<String> {
    CVE_REGEX
        .find_iter(text)
        .map(|m| format_cve(m.as_str()))
        .collect()
}

/// First CVE in the text, or `""`
#[cfg_attr(feature = "native", uniffi::export)]
pub fn extract_first_cve(text: &str) -> String {
    CVE_REGEX
        .find(text)
        .map(|m| format_cve(m.as_str()))
        .unwrap_or_default()
}

/// Last CVE in the text, or `""`
#[cfg_attr(feature = "native", uniffi::export)]
pub fn extract_last_cve(text: &str) -> String {
    extract_cves(text).pop().unwrap_or_default()
}

/// Extract all CVEs with their byte offsets in the text
pub fn extract_cves_with_positions(text: &str) -> Vec<ExtractedCve> {
    CVE_REGEX
        .find_iter(text)
        .map(|m| ExtractedCve {
            value: format_cve(m.as_str()),
            start_index: m.start() as u32,
            end_index: m.end() as u32,
        })
        .collect()
}
