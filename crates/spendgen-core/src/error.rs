use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CoreError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl CoreError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `spendgen {cmd} --help` for usage."),
            None => "Run `spendgen --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn output_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "output_write_failed",
            &format!("Cannot write output file `{location}`: {detail}"),
            vec![format!(
                "Check that the directory for `{location}` exists and is writable, then rerun."
            )],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn output_dir_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "output_write_failed",
            &format!("Cannot create output directory `{location}`: {detail}"),
            vec![format!(
                "Choose a writable output directory instead of `{location}` and rerun."
            )],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn internal_generation(message: &str) -> Self {
        Self::new("internal_generation_error", message, Vec::new())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
