//! Year bounds and clock defaults.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// Earliest year a CVE can carry.
pub const MIN_YEAR: i64 = 1999;

/// Lowest sequence produced by [`crate::generate_fake_cve`].
pub const FAKE_SEQUENCE_MIN: i64 = 10_000;

/// Number of distinct sequences produced by [`crate::generate_fake_cve`].
pub const FAKE_SEQUENCE_SPAN: i64 = 90_000;

/// Current year from the local wall clock.
pub fn current_year() -> i64 {
    i64::from(chrono::Local::now().year())
}

/// Inclusive year window: `[min_year, current_year + cutoff]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearPolicy {
    pub min_year: i64,
    /// Years past the current one still accepted (reserved identifiers).
    pub cutoff: i64,
}

impl Default for YearPolicy {
    fn default() -> Self {
        Self {
            min_year: MIN_YEAR,
            cutoff: 0,
        }
    }
}

impl YearPolicy {
    /// Policy with the default lower bound and the given cutoff.
    pub fn with_cutoff(cutoff: i64) -> Self {
        Self {
            cutoff,
            ..Self::default()
        }
    }

    /// Upper bound of the window for the given current year.
    pub fn max_year(&self, current_year: i64) -> i64 {
        current_year.saturating_add(self.cutoff)
    }

    /// Whether `year` falls inside the window.
    pub fn allows(&self, year: i64, current_year: i64) -> bool {
        year >= self.min_year && year <= self.max_year(current_year)
    }
}
