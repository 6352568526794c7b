use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use spendgen_core::commands::dataset::{DEFAULT_DAYS, DEFAULT_OUT};
use spendgen_core::commands::series::DEFAULT_OUT_DIR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoDate(pub String);

impl IsoDate {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn parse_iso_date(value: &str) -> Result<IsoDate, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(IsoDate(value.to_string()))
}

/// Extended help shown after `spendgen dataset --help`.
/// Describes the output schema and the optional icon-source workflow.
pub const DATASET_AFTER_HELP: &str = "\
What dataset generates:
  One JSON document with two top-level keys:
    expenses    randomized transactions: {id, category, amount, date, note}
    categories  full category catalog: {id, name, color, icon_code, icon_name}

  Amounts are snapped to the nearest 0.5 currency unit. Dates cover
  [end-date - days + 1, end-date] inclusive. The expense order is shuffled,
  so dates in the file are intentionally unsorted.

Reproducibility:
  Pass --seed to fix the random sequence. The same seed, --days, and
  --end-date always produce a byte-identical file. Omit --seed for a fresh
  dataset on every run.

Icon source (optional):
  --icon-file points at a declarative UI source file containing an
  `iconCategories = { 'Key': [Icons.some_icon, ...], ... }` map literal.
  Matching keys lend their first icon to similarly named categories.
  A missing or unparseable file is never an error; every category then
  falls back to a synthesized `Icons.default_*` icon with a stable code.
";

#[derive(Debug, Parser)]
#[command(
    name = "spendgen",
    version,
    about = "fixture data generator for expense tracker import and chart testing",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a randomized expense dataset across the category catalog
    #[command(after_long_help = DATASET_AFTER_HELP)]
    Dataset {
        /// Number of days to cover, ending at --end-date inclusive
        #[arg(long, default_value_t = DEFAULT_DAYS, value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,
        /// End date (YYYY-MM-DD); defaults to today
        #[arg(long, value_parser = parse_iso_date)]
        end_date: Option<IsoDate>,
        /// Source file to borrow category icon names from
        #[arg(long)]
        icon_file: Option<String>,
        /// RNG seed for byte-identical reruns; omit for a fresh dataset
        #[arg(long)]
        seed: Option<u64>,
        /// Output JSON file path
        #[arg(long, default_value = DEFAULT_OUT)]
        out: String,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Write six deterministic time-series datasets for chart validation
    Series {
        /// Directory for the six JSON files (created if absent)
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: String,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
    /// Preview the category catalog with resolved icon metadata
    Catalog {
        /// Source file to borrow category icon names from
        #[arg(long)]
        icon_file: Option<String>,
        /// Emit structured JSON object output for machine parsing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::{Commands, parse_from};

    #[test]
    fn parse_command_paths() {
        let cases: [Vec<&str>; 12] = [
            vec!["spendgen", "dataset"],
            vec!["spendgen", "dataset", "--days", "60"],
            vec!["spendgen", "dataset", "--end-date", "2025-10-05"],
            vec!["spendgen", "dataset", "--seed", "42", "--out", "sample.json"],
            vec!["spendgen", "dataset", "--icon-file", "./icon_categories.dart"],
            vec!["spendgen", "dataset", "--json"],
            vec!["spendgen", "series"],
            vec!["spendgen", "series", "--out-dir", "./fixtures"],
            vec!["spendgen", "series", "--json"],
            vec!["spendgen", "catalog"],
            vec!["spendgen", "catalog", "--icon-file", "./icon_categories.dart"],
            vec!["spendgen", "catalog", "--json"],
        ];

        for case in cases {
            let parsed = parse_from(case.clone());
            assert!(parsed.is_ok(), "failed to parse: {case:?}");
        }
    }

    #[test]
    fn dataset_defaults_match_documented_values() {
        let parsed = parse_from(["spendgen", "dataset"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Dataset {
                    days: 30,
                    end_date: None,
                    seed: None,
                    json: false,
                    ..
                }
            ));
            if let Commands::Dataset { out, .. } = cli.command {
                assert_eq!(out, "expenses.json");
            }
        }
    }

    #[test]
    fn invalid_end_date_is_rejected() {
        let parsed = parse_from(["spendgen", "dataset", "--end-date", "2025-99-01"]);
        assert!(parsed.is_err());

        let malformed = parse_from(["spendgen", "dataset", "--end-date", "05-10-2025"]);
        assert!(malformed.is_err());
    }

    #[test]
    fn zero_days_is_rejected() {
        let parsed = parse_from(["spendgen", "dataset", "--days", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn non_numeric_seed_is_rejected() {
        let parsed = parse_from(["spendgen", "dataset", "--seed", "abc"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn series_defaults_to_data_directory() {
        let parsed = parse_from(["spendgen", "series"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            if let Commands::Series { out_dir, json } = cli.command {
                assert_eq!(out_dir, "./data");
                assert!(!json);
            }
        }
    }

    #[test]
    fn help_command_is_rejected() {
        let parsed = parse_from(["spendgen", "help"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn subcommand_help_uses_clap_display_help() {
        let parsed = parse_from(["spendgen", "dataset", "--help"]);
        assert!(parsed.is_err());
        if let Err(err) = parsed {
            assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        }
    }

    #[test]
    fn unknown_command_is_rejected() {
        let parsed = parse_from(["spendgen", "import"]);
        assert!(parsed.is_err());
    }
}
