//! Grouping, filtering and deduplication of CVE lists
//!
//! All functions format their output, so results are always canonical.

use std::collections::{BTreeMap, HashSet};

use crate::config::current_year;
use crate::extractors::{extract_year, extract_year_int};
use crate::normalize::format_cve;

/// Group CVEs by year string, keeping input order within each group.
///
/// Entries without a year segment land in the `""` group.
pub fn group_by_year<S: AsRef<str>>(cves: &[S]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for cve in cves {
        let cve = cve.as_ref();
        let year = extract_year(cve);
        if year.is_empty() {
            tracing::debug!(cve, "no year segment, grouping under empty key");
        }
        groups.entry(year).or_default().push(format_cve(cve));
    }
    groups
}

/// Keep CVEs whose year segment is exactly `year`.
///
/// Comparison is textual, so `CVE-02022-1` does not match `2022`.
pub fn filter_by_year<S: AsRef<str>>(cves: &[S], year: i64) -> Vec<String> {
    let year = year.to_string();
    cves.iter()
        .map(|c| format_cve(c.as_ref()))
        .filter(|c| extract_year(c) == year)
        .collect()
}

/// Keep CVEs with `start <= year <= end`. No swap when `start > end`.
pub fn filter_by_year_range<S: AsRef<str>>(cves: &[S], start: i64, end: i64) -> Vec<String> {
    cves.iter()
        .map(|c| format_cve(c.as_ref()))
        .filter(|c| (start..=end).contains(&extract_year_int(c)))
        .collect()
}

/// CVEs from the last `years` years, the current one included.
pub fn recent_cves<S: AsRef<str>>(cves: &[S], years: i64) -> Vec<String> {
    recent_cves_at(cves, years, current_year())
}

/// [`recent_cves`] against an explicit current year.
pub fn recent_cves_at<S: AsRef<str>>(cves: &[S], years: i64, current_year: i64) -> Vec<String> {
    let start = current_year.saturating_sub(years).saturating_add(1);
    filter_by_year_range(cves, start, current_year)
}

/// Format and remove duplicate CVEs, keeping first occurrences in order.
pub fn dedup_cves<S: AsRef<str>>(cves: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    cves.iter()
        .map(|c| format_cve(c.as_ref()))
        .filter(|c| seen.insert(c.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_year() {
        let groups = group_by_year(&["CVE-2021-1111", "CVE-2022-2222", "cve-2021-3333"]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["2021"], vec!["CVE-2021-1111", "CVE-2021-3333"]);
        assert_eq!(groups["2022"], vec!["CVE-2022-2222"]);
    }

    #[test]
    fn test_group_keeps_malformed_bucket() {
        let groups = group_by_year(&["junk", "CVE-2021-1", "CVE-2021-1-2"]);
        assert_eq!(groups[""], vec!["JUNK", "CVE-2021-1-2"]);
        assert_eq!(groups["2021"], vec!["CVE-2021-1"]);
    }

    #[test]
    fn test_group_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(group_by_year(&empty).is_empty());
    }

    #[test]
    fn test_filter_by_year() {
        let cves = ["CVE-2021-1", "cve-2022-2", "CVE-02022-3", "CVE-2022-4"];
        assert_eq!(filter_by_year(&cves, 2022), vec!["CVE-2022-2", "CVE-2022-4"]);
        assert!(filter_by_year(&cves, 2030).is_empty());
    }

    #[test]
    fn test_filter_by_year_range() {
        let cves = ["CVE-2019-1", "CVE-2020-2", "CVE-2021-3", "CVE-2022-4"];
        assert_eq!(
            filter_by_year_range(&cves, 2020, 2021),
            vec!["CVE-2020-2", "CVE-2021-3"]
        );
        assert!(filter_by_year_range(&cves, 2021, 2020).is_empty());
    }

    #[test]
    fn test_filter_by_year_range_malformed_is_year_zero() {
        assert_eq!(filter_by_year_range(&["junk"], 0, 0), vec!["JUNK"]);
        assert!(filter_by_year_range(&["junk"], 1999, 2030).is_empty());
    }

    #[test]
    fn test_recent_cves() {
        let cves = ["CVE-2021-1", "CVE-2022-2", "CVE-2023-3", "CVE-2024-4"];
        assert_eq!(recent_cves_at(&cves, 2, 2024), vec!["CVE-2023-3", "CVE-2024-4"]);
        assert_eq!(recent_cves_at(&cves, 1, 2024), vec!["CVE-2024-4"]);
        assert!(recent_cves_at(&cves, 0, 2024).is_empty());
        assert!(recent_cves_at(&cves, -3, 2024).is_empty());
        assert_eq!(recent_cves_at(&cves, i64::MAX, 2024).len(), 4);
    }

    #[test]
    fn test_recent_cves_wall_clock() {
        let this_year = format!("CVE-{}-1", current_year());
        let recent = recent_cves(&[this_year.as_str(), "CVE-1999-1"], 1);
        assert_eq!(recent, vec![this_year.clone()]);
    }

    #[test]
    fn test_dedup_cves() {
        assert_eq!(
            dedup_cves(&["CVE-2022-1111", "cve-2022-1111", "CVE-2022-2222"]),
            vec!["CVE-2022-1111", "CVE-2022-2222"]
        );
        assert_eq!(
            dedup_cves(&[" CVE-2022-2 ", "CVE-2022-1", "cve-2022-2"]),
            vec!["CVE-2022-2", "CVE-2022-1"]
        );
    }
}
