//! CVE validation functions
//!
//! Two year checks with different strictness:
//! - [`is_year_plausible_with_cutoff`] reads the year from any three-segment
//!   string and allows a cutoff past the current year.
//! - [`validate_cve`] requires a well-formed CVE, a year no later than the
//!   current one and a positive sequence.

use crate::config::{current_year, YearPolicy};
use crate::cve_id::CveId;
use crate::error::Result;
use crate::extractors::split_cve;

/// Year check with no cutoff, against the wall clock.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn is_year_plausible(cve: &str) -> bool {
    is_year_plausible_at(cve, 0, current_year())
}

/// Year check allowing `cutoff` years past the current one.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn is_year_plausible_with_cutoff(cve: &str, cutoff: i64) -> bool {
    is_year_plausible_at(cve, cutoff, current_year())
}

/// Year check against an explicit current year.
///
/// The year is not gated on the CVE grammar; anything that does not yield a
/// number counts as year `0` and fails.
pub fn is_year_plausible_at(cve: &str, cutoff: i64, current_year: i64) -> bool {
    let year = split_cve(cve).0.parse().unwrap_or(0);
    YearPolicy::with_cutoff(cutoff).allows(year, current_year)
}

/// Full validation against the wall clock.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn validate_cve(cve: &str) -> bool {
    validate_cve_at(cve, current_year())
}

/// Full validation against an explicit current year.
pub fn validate_cve_at(cve: &str, current_year: i64) -> bool {
    check_cve_at(cve, current_year).is_ok()
}

/// Full validation reporting the reason for rejection.
pub fn check_cve_at(cve: &str, current_year: i64) -> Result<CveId> {
    let id = CveId::parse(cve).and_then(|id| id.check_at(current_year).map(|()| id));
    if let Err(err) = &id {
        tracing::debug!(cve, %err, "rejected CVE");
    }
    id
}
