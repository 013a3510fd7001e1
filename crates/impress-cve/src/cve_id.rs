//! Parsed CVE identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::YearPolicy;
use crate::error::{CveError, Result};
use crate::extractors::split_cve;
use crate::generate::generate_cve;
use crate::normalize::{format_cve, is_cve};

/// A well-formed CVE with its numeric components.
///
/// The canonical text is kept next to the numbers, so `CVE-2022-0001`
/// displays with its padding even though its sequence is `1`. Ordering is by
/// year, then sequence, then text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CveId {
    year: i64,
    sequence: i64,
    text: String,
}

impl CveId {
    /// Build from components. No range checks, see [`generate_cve`].
    pub fn new(year: i64, sequence: i64) -> Self {
        Self {
            year,
            sequence,
            text: generate_cve(year, sequence),
        }
    }

    /// Parse a well-formed CVE. Year and sequence ranges are not checked.
    pub fn parse(cve: &str) -> Result<Self> {
        if !is_cve(cve) {
            return Err(CveError::Malformed(cve.to_string()));
        }
        let (year, sequence) = split_cve(cve);
        Ok(Self {
            year: parse_component("year", &year)?,
            sequence: parse_component("sequence", &sequence)?,
            text: format_cve(cve),
        })
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn sequence(&self) -> i64 {
        self.sequence
    }

    /// Canonical text, padding preserved.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check year against `[MIN_YEAR, current_year]` and that the sequence is positive.
    pub fn check_at(&self, current_year: i64) -> Result<()> {
        self.check_with(&YearPolicy::default(), current_year)
    }

    /// Same as [`CveId::check_at`] with a custom year window.
    pub fn check_with(&self, policy: &YearPolicy, current_year: i64) -> Result<()> {
        if !policy.allows(self.year, current_year) {
            return Err(CveError::YearOutOfRange {
                year: self.year,
                min: policy.min_year,
                max: policy.max_year(current_year),
            });
        }
        if self.sequence <= 0 {
            return Err(CveError::NonPositiveSequence(self.sequence));
        }
        Ok(())
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| CveError::InvalidNumber {
        component,
        value: value.to_string(),
    })
}

impl FromStr for CveId {
    type Err = CveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CveId {
    type Error = CveError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CveId> for String {
    fn from(id: CveId) -> Self {
        id.text
    }
}

impl fmt::Display for CveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CveId {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
