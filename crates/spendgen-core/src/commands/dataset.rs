use std::fs;
use std::path::{Path, PathBuf};

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::DatasetData;
use crate::dataset::{DatasetOptions, generate};
use crate::dates::{format_iso_date, parse_iso_date_strict};
use crate::error::{CoreError, CoreResult};
use crate::icons::load_icon_hints;

pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_OUT: &str = "expenses.json";

#[derive(Debug, Clone)]
pub struct DatasetRunOptions {
    pub days: u32,
    /// `YYYY-MM-DD`; defaults to today when absent.
    pub end_date: Option<String>,
    pub icon_file: Option<String>,
    pub seed: Option<u64>,
    pub out: String,
}

impl Default for DatasetRunOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            end_date: None,
            icon_file: None,
            seed: None,
            out: DEFAULT_OUT.to_string(),
        }
    }
}

pub fn run(
    days: u32,
    end_date: Option<&str>,
    icon_file: Option<&str>,
    seed: Option<u64>,
    out: &str,
) -> CoreResult<SuccessEnvelope> {
    run_with_options(DatasetRunOptions {
        days,
        end_date: end_date.map(std::string::ToString::to_string),
        icon_file: icon_file.map(std::string::ToString::to_string),
        seed,
        out: out.to_string(),
    })
}

/// Generates the randomized dataset and writes it as pretty-printed JSON.
/// The document is serialized in memory first, so the output file is either
/// written whole or not at all.
pub fn run_with_options(options: DatasetRunOptions) -> CoreResult<SuccessEnvelope> {
    let end_date = match options.end_date.as_deref() {
        Some(value) => parse_iso_date_strict(value, "end-date", "dataset")?,
        None => chrono::Local::now().date_naive(),
    };

    let hints = load_icon_hints(options.icon_file.as_deref().map(Path::new));

    let generation = DatasetOptions {
        days: options.days,
        end_date,
        seed: options.seed,
    };
    let dataset = generate(&generation, &hints)?;

    let body = serde_json::to_string_pretty(&dataset)
        .map_err(|err| CoreError::internal_serialization(&err.to_string()))?;
    let out_path = PathBuf::from(&options.out);
    fs::write(&out_path, body)
        .map_err(|err| CoreError::output_write_failed(&out_path, &err.to_string()))?;

    success(
        "dataset",
        DatasetData {
            out_path: out_path.display().to_string(),
            expense_count: dataset.expenses.len(),
            category_count: dataset.categories.len(),
            days: options.days,
            start_date: format_iso_date(&generation.start_date()),
            end_date: format_iso_date(&end_date),
            seed: options.seed,
            icon_source: options.icon_file,
            icon_hint_keys: hints.len(),
        },
    )
}
