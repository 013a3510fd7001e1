//! impress-cve CLI
//!
//! Command-line front end for the CVE helpers. Inputs come from positional
//! arguments, or from stdin (one per line) when none are given.

use std::io::{self, BufRead, Read};

use clap::{ArgGroup, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use impress_cve::{
    check_cve_at, compare_cves, contains_cve, current_year, dedup_cves, extract_cves,
    extract_cves_with_positions, extract_first_cve, extract_last_cve, filter_by_year,
    filter_by_year_range, format_cve, generate_cve, generate_fake_cve, group_by_year, is_cve,
    is_year_plausible_at, recent_cves_at, sort_cves, split_cve,
};

#[derive(Parser)]
#[command(name = "impress-cve", version, about = "Recognize, validate and order CVE identifiers")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize identifiers to canonical form
    Format { inputs: Vec<String> },

    /// Report grammar, year and validity checks for each input
    Check {
        /// Years past the current one accepted by the plausibility check
        #[arg(long, default_value_t = 0)]
        cutoff: i64,
        inputs: Vec<String>,
    },

    /// Find identifiers in free text
    #[command(group(ArgGroup::new("which").args(["first", "last", "positions"])))]
    Extract {
        #[arg(long)]
        first: bool,
        #[arg(long)]
        last: bool,
        /// Include byte offsets of each match
        #[arg(long)]
        positions: bool,
        text: Vec<String>,
    },

    /// Split identifiers into year and sequence
    Split { inputs: Vec<String> },

    /// Compare two identifiers chronologically
    Compare { a: String, b: String },

    /// Sort identifiers chronologically
    Sort { inputs: Vec<String> },

    /// Group identifiers by year
    Group { inputs: Vec<String> },

    /// Keep identifiers from a year, a year range or the last N years
    #[command(group(ArgGroup::new("window").required(true).args(["year", "from", "recent"])))]
    Filter {
        #[arg(long)]
        year: Option<i64>,
        #[arg(long, requires = "to")]
        from: Option<i64>,
        #[arg(long, requires = "from")]
        to: Option<i64>,
        #[arg(long)]
        recent: Option<i64>,
        inputs: Vec<String>,
    },

    /// Remove duplicates, keeping first occurrences
    Dedup { inputs: Vec<String> },

    /// Build an identifier from components, or a fixture for the current year
    Generate {
        #[arg(long, requires = "sequence")]
        year: Option<i64>,
        #[arg(long, requires = "year")]
        sequence: Option<i64>,
    },
}

#[derive(Debug, Serialize)]
struct CheckReport {
    input: String,
    well_formed: bool,
    contains: bool,
    plausible_year: bool,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

#[derive(Debug, Serialize)]
struct SplitReport {
    input: String,
    year: String,
    sequence: String,
}

/// Which matches `extract` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    All,
    First,
    Last,
}

impl Pick {
    fn from_flags(first: bool, last: bool) -> Self {
        match (first, last) {
            (true, _) => Self::First,
            (_, true) => Self::Last,
            _ => Self::All,
        }
    }
}

/// Year window for `filter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Window {
    Year(i64),
    Range(i64, i64),
    Recent(i64),
}

impl Window {
    /// `--year` wins over `--from/--to`, which win over `--recent`.
    fn from_args(
        year: Option<i64>,
        from: Option<i64>,
        to: Option<i64>,
        recent: Option<i64>,
    ) -> Option<Self> {
        year.map(Self::Year)
            .or_else(|| from.zip(to).map(|(start, end)| Self::Range(start, end)))
            .or_else(|| recent.map(Self::Recent))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match cli.command {
        Command::Format { inputs } => {
            let formatted: Vec<String> = read_inputs(inputs)?.iter().map(|s| format_cve(s)).collect();
            print_list(&formatted, json)?;
        }
        Command::Check { cutoff, inputs } => {
            let reports = check_reports(read_inputs(inputs)?, cutoff, current_year());
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                reports.iter().for_each(|r| println!("{}", check_line(r)));
            }
        }
        Command::Extract {
            first,
            last,
            positions,
            text,
        } => {
            let text = if text.is_empty() {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.join(" ")
            };
            tracing::debug!(bytes = text.len(), "scanning text");
            if positions {
                let found = extract_cves_with_positions(&text);
                if json {
                    println!("{}", serde_json::to_string_pretty(&found)?);
                } else {
                    for f in &found {
                        println!("{}\t{}\t{}", f.value, f.start_index, f.end_index);
                    }
                }
            } else {
                print_list(&pick_matches(&text, Pick::from_flags(first, last)), json)?;
            }
        }
        Command::Split { inputs } => {
            let reports = split_reports(read_inputs(inputs)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for r in &reports {
                    println!("{}\t{}\t{}", r.input, r.year, r.sequence);
                }
            }
        }
        Command::Compare { a, b } => {
            let sign = compare_sign(&a, &b);
            if json {
                println!("{}", serde_json::to_string(&sign)?);
            } else {
                println!("{sign}");
            }
        }
        Command::Sort { inputs } => print_list(&sort_cves(&read_inputs(inputs)?), json)?,
        Command::Group { inputs } => {
            let groups = group_by_year(&read_inputs(inputs)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for (year, cves) in &groups {
                    println!("{}\t{}", year, cves.join(","));
                }
            }
        }
        Command::Filter {
            year,
            from,
            to,
            recent,
            inputs,
        } => {
            let inputs = read_inputs(inputs)?;
            let kept = match Window::from_args(year, from, to, recent) {
                Some(window) => apply_window(&inputs, window, current_year()),
                None => Vec::new(),
            };
            print_list(&kept, json)?;
        }
        Command::Dedup { inputs } => print_list(&dedup_cves(&read_inputs(inputs)?), json)?,
        Command::Generate { year, sequence } => {
            let cve = match year.zip(sequence) {
                Some((year, sequence)) => generate_cve(year, sequence),
                None => generate_fake_cve(),
            };
            print_list(&[cve], json)?;
        }
    }

    Ok(())
}

fn check_reports(inputs: Vec<String>, cutoff: i64, now: i64) -> Vec<CheckReport> {
    inputs
        .into_iter()
        .map(|input| {
            let checked = check_cve_at(&input, now);
            CheckReport {
                well_formed: is_cve(&input),
                contains: contains_cve(&input),
                plausible_year: is_year_plausible_at(&input, cutoff, now),
                valid: checked.is_ok(),
                reason: checked.err().map(|e| e.to_string()),
                input,
            }
        })
        .collect()
}

fn check_line(report: &CheckReport) -> String {
    match &report.reason {
        None => format!("{}\tvalid", report.input),
        Some(reason) => format!("{}\tinvalid\t{}", report.input, reason),
    }
}

/// Matches to print; a missing first/last match prints nothing.
fn pick_matches(text: &str, pick: Pick) -> Vec<String> {
    let single = match pick {
        Pick::All => return extract_cves(text),
        Pick::First => extract_first_cve(text),
        Pick::Last => extract_last_cve(text),
    };
    Some(single).filter(|s| !s.is_empty()).into_iter().collect()
}

fn split_reports(inputs: Vec<String>) -> Vec<SplitReport> {
    inputs
        .into_iter()
        .map(|input| {
            let (year, sequence) = split_cve(&input);
            SplitReport {
                input,
                year,
                sequence,
            }
        })
        .collect()
}

fn compare_sign(a: &str, b: &str) -> i32 {
    compare_cves(a, b) as i32
}

fn apply_window(inputs: &[String], window: Window, now: i64) -> Vec<String> {
    match window {
        Window::Year(year) => filter_by_year(inputs, year),
        Window::Range(start, end) => filter_by_year_range(inputs, start, end),
        Window::Recent(years) => recent_cves_at(inputs, years, now),
    }
}

/// Positional inputs, or non-empty stdin lines when there are none.
fn read_inputs(inputs: Vec<String>) -> io::Result<Vec<String>> {
    if !inputs.is_empty() {
        return Ok(inputs);
    }
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    tracing::debug!(count = lines.len(), "read inputs from stdin");
    Ok(lines)
}

fn print_list(items: &[String], json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{item}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const NOW: i64 = 2024;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn window_precedence() {
        assert_eq!(
            Window::from_args(Some(2022), Some(1), Some(2), Some(3)),
            Some(Window::Year(2022))
        );
        assert_eq!(
            Window::from_args(None, Some(2020), Some(2021), Some(3)),
            Some(Window::Range(2020, 2021))
        );
        assert_eq!(
            Window::from_args(None, Some(2020), None, Some(3)),
            Some(Window::Recent(3))
        );
        assert_eq!(Window::from_args(None, None, None, None), None);
    }

    #[test]
    fn window_from_parsed_args() {
        let args = ["impress-cve", "filter", "--from", "2020", "--to", "2021", "CVE-2020-1"];
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Filter {
            year,
            from,
            to,
            recent,
            inputs,
        } = cli.command
        else {
            panic!("expected filter");
        };
        assert_eq!(Window::from_args(year, from, to, recent), Some(Window::Range(2020, 2021)));
        assert_eq!(inputs, vec!["CVE-2020-1"]);
    }

    #[test]
    fn filter_requires_a_window() {
        assert!(Cli::try_parse_from(["impress-cve", "filter", "CVE-2020-1"]).is_err());
        assert!(Cli::try_parse_from(["impress-cve", "filter", "--from", "2020", "CVE-2020-1"]).is_err());
    }

    #[test]
    fn apply_each_window() {
        let cves = strings(&["CVE-2019-1", "cve-2022-2", "CVE-2023-3", "CVE-2024-4"]);
        assert_eq!(apply_window(&cves, Window::Year(2022), NOW), vec!["CVE-2022-2"]);
        assert_eq!(
            apply_window(&cves, Window::Range(2019, 2022), NOW),
            vec!["CVE-2019-1", "CVE-2022-2"]
        );
        assert!(apply_window(&cves, Window::Range(2022, 2019), NOW).is_empty());
        assert_eq!(
            apply_window(&cves, Window::Recent(2), NOW),
            vec!["CVE-2023-3", "CVE-2024-4"]
        );
    }

    #[test]
    fn pick_first_last_and_all() {
        let text = "CVE-2021-44228 and cve-2022-12345";
        assert_eq!(pick_matches(text, Pick::All), vec!["CVE-2021-44228", "CVE-2022-12345"]);
        assert_eq!(pick_matches(text, Pick::First), vec!["CVE-2021-44228"]);
        assert_eq!(pick_matches(text, Pick::Last), vec!["CVE-2022-12345"]);
    }

    #[test]
    fn pick_without_match_is_empty() {
        assert!(pick_matches("nothing", Pick::First).is_empty());
        assert!(pick_matches("nothing", Pick::Last).is_empty());
        assert!(pick_matches("nothing", Pick::All).is_empty());
    }

    #[test]
    fn pick_from_flags() {
        assert_eq!(Pick::from_flags(false, false), Pick::All);
        assert_eq!(Pick::from_flags(true, false), Pick::First);
        assert_eq!(Pick::from_flags(false, true), Pick::Last);
        assert!(Cli::try_parse_from(["impress-cve", "extract", "--first", "--last", "x"]).is_err());
    }

    #[test]
    fn check_report_fields() {
        let inputs = strings(&["CVE-2022-1", "CVE-2026-1", "see CVE-2022-1"]);
        let reports = check_reports(inputs, 2, NOW);

        let valid = &reports[0];
        assert!(valid.well_formed && valid.contains && valid.plausible_year && valid.valid);
        assert_eq!(valid.reason, None);
        assert_eq!(check_line(valid), "CVE-2022-1\tvalid");

        // Within the cutoff, but validation has none
        let future = &reports[1];
        assert!(future.well_formed && future.plausible_year);
        assert!(!future.valid);
        assert_eq!(future.reason.as_deref(), Some("year 2026 outside 1999..=2024"));
        assert_eq!(check_line(future), "CVE-2026-1\tinvalid\tyear 2026 outside 1999..=2024");

        let embedded = &reports[2];
        assert!(!embedded.well_formed && embedded.contains && !embedded.valid);
        assert!(embedded.reason.as_deref().unwrap().starts_with("not a CVE identifier"));
    }

    #[test]
    fn check_report_json_skips_missing_reason() {
        let reports = check_reports(strings(&["CVE-2022-1"]), 0, NOW);
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["valid"], true);
        assert!(json[0].get("reason").is_none());
    }

    #[test]
    fn split_and_compare() {
        let reports = split_reports(strings(&["cve-2021-44228", "junk"]));
        assert_eq!((reports[0].year.as_str(), reports[0].sequence.as_str()), ("2021", "44228"));
        assert_eq!((reports[1].year.as_str(), reports[1].sequence.as_str()), ("", ""));
        assert_eq!(compare_sign("CVE-2020-1", "CVE-2021-1"), -1);
        assert_eq!(compare_sign("cve-2021-1", "CVE-2021-1"), 0);
        assert_eq!(compare_sign("CVE-2021-2", "CVE-2021-1"), 1);
    }
}
