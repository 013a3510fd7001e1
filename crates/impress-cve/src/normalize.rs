//! CVE format normalization and grammar checks

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Whole-string match. Surrounding whitespace is ASCII only: tab, LF, FF, CR, space
    pub(crate) static ref EXACT_CVE_REGEX: Regex =
        Regex::new(r"(?i)^[\t\n\x0C\r ]*CVE-[0-9]+-[0-9]+[\t\n\x0C\r ]*$").unwrap();

    // Match anywhere in text
    pub(crate) static ref CVE_REGEX: Regex = Regex::new(r"(?i)CVE-[0-9]+-[0-9]+").unwrap();
}

/// Normalize a CVE to canonical form: trimmed and upper-cased.
///
/// ```
/// use impress_cve::format_cve;
/// assert_eq!(format_cve(" cve-2022-12345 "), "CVE-2022-12345");
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn format_cve(cve: &str) -> String {
    cve.trim().to_uppercase()
}

/// Check whether the whole string is a CVE (surrounding whitespace allowed).
///
/// `CVE-2022-1234-5` is rejected: it has three numeric groups.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn is_cve(text: &str) -> bool {
    EXACT_CVE_REGEX.is_match(text)
}

/// Check whether a CVE occurs anywhere in the text.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn contains_cve(text: &str) -> bool {
    CVE_REGEX.is_match(text)
}
