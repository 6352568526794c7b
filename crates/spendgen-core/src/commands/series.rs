use std::fs;
use std::path::PathBuf;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{SeriesData, SeriesFileData};
use crate::error::{CoreError, CoreResult};
use crate::series::all_series;

pub const DEFAULT_OUT_DIR: &str = "./data";

#[derive(Debug, Clone)]
pub struct SeriesRunOptions {
    pub out_dir: String,
}

impl Default for SeriesRunOptions {
    fn default() -> Self {
        Self {
            out_dir: DEFAULT_OUT_DIR.to_string(),
        }
    }
}

pub fn run(out_dir: &str) -> CoreResult<SuccessEnvelope> {
    run_with_options(SeriesRunOptions {
        out_dir: out_dir.to_string(),
    })
}

/// Writes all six synthetic series documents into the output directory,
/// one file per series shape.
pub fn run_with_options(options: SeriesRunOptions) -> CoreResult<SuccessEnvelope> {
    let out_dir = PathBuf::from(&options.out_dir);
    fs::create_dir_all(&out_dir)
        .map_err(|err| CoreError::output_dir_failed(&out_dir, &err.to_string()))?;

    let mut files = Vec::new();
    for (file_name, export) in all_series() {
        let body = serde_json::to_string_pretty(&export)
            .map_err(|err| CoreError::internal_serialization(&err.to_string()))?;
        let path = out_dir.join(file_name);
        fs::write(&path, body)
            .map_err(|err| CoreError::output_write_failed(&path, &err.to_string()))?;

        files.push(SeriesFileData {
            file: file_name.to_string(),
            shape: file_name.trim_end_matches(".json").to_string(),
            records: export.expenses.len(),
        });
    }

    success(
        "series",
        SeriesData {
            out_dir: out_dir.display().to_string(),
            files,
        },
    )
}
