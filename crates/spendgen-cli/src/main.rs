mod cli;
mod dispatch;
mod output;
mod stdout_io;

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use spendgen_core::CoreError;
use stdout_io::write_stdout_text;

const ROOT_HELP: &str = "Spendgen - fixture data generator for expense tracker testing

Usage:
  spendgen <command>

Start here:
  spendgen dataset --seed 42
  spendgen series
  spendgen catalog
";

const TOP_LEVEL_HELP: &str = "Spendgen - fixture data generator for expense tracker testing

USAGE: spendgen <command>

Generate a randomized import dataset:
  spendgen dataset                                        30 days ending today, random each run
  spendgen dataset --seed 42                              Reproducible dataset (same bytes every run)
  spendgen dataset --days 90 --end-date 2025-10-05        Fixed 90-day window
  spendgen dataset --icon-file icon_categories.dart       Borrow category icons from a UI source file

Generate chart-validation series:
  spendgen series                                         Six fixed-shape time series under ./data
  spendgen series --out-dir ./fixtures                    Same series, custom directory

Inspect the category catalog:
  spendgen catalog                                        All 116 categories with icon metadata
  spendgen catalog --icon-file icon_categories.dart       Preview icon matching before generating

Any command accepts --json for machine-readable output.
Run `spendgen <command> --help` for full option details.
";

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(code) => code,
    }
}

fn run() -> Result<ExitCode, ExitCode> {
    let raw_args = std::env::args().collect::<Vec<String>>();
    if raw_args.len() == 1 {
        if write_stdout_text(ROOT_HELP).is_err() {
            return Err(ExitCode::from(2));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let parsed = cli::Cli::try_parse();
    let cli = match parsed {
        Ok(value) => value,
        Err(err) => {
            if matches!(
                err.kind(),
                ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) && is_top_level_help_request(&raw_args)
                {
                    if write_stdout_text(TOP_LEVEL_HELP).is_err() {
                        return Err(ExitCode::from(2));
                    }
                } else if write_stdout_text(&err.to_string()).is_err() {
                    return Err(ExitCode::from(2));
                }
                return Ok(ExitCode::SUCCESS);
            }

            let command_hint = if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument
                    | ErrorKind::InvalidValue
                    | ErrorKind::ValueValidation
                    | ErrorKind::WrongNumberOfValues
                    | ErrorKind::UnknownArgument
                    | ErrorKind::InvalidSubcommand
            ) {
                command_path_from_args(&raw_args)
            } else {
                None
            };
            let clean_message = strip_clap_boilerplate(&err.to_string());
            let parse_error =
                CoreError::invalid_argument_for_command(&clean_message, command_hint.as_deref());
            let mode = infer_requested_output_mode(&raw_args);
            if output::print_failure(&parse_error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            return Err(ExitCode::from(1));
        }
    };
    let mode = output::mode_for_command(&cli.command);

    let dispatched = dispatch::dispatch(&cli);
    match dispatched {
        Ok(success) => {
            if output::print_success(&success, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            if output::print_failure(&error, mode).is_err() {
                return Err(ExitCode::from(2));
            }
            Err(exit_code_for_error(&error))
        }
    }
}

fn is_top_level_help_request(raw_args: &[String]) -> bool {
    raw_args.len() == 2 && matches!(raw_args[1].as_str(), "--help" | "-h")
}

/// Strips clap's trailing boilerplate (Usage line, "For more information"
/// hint) so the rendered recovery steps are the single source of guidance.
fn strip_clap_boilerplate(message: &str) -> String {
    let trimmed = if let Some(pos) = message.find("\n\nUsage:") {
        &message[..pos]
    } else if let Some(pos) = message.find("\nFor more information") {
        &message[..pos]
    } else {
        message
    };
    trimmed.trim_end().to_string()
}

/// Builds the subcommand path from raw CLI args for use in help hints.
fn command_path_from_args(raw_args: &[String]) -> Option<String> {
    let non_flags: Vec<&str> = raw_args
        .iter()
        .skip(1)
        .filter(|value| !value.starts_with('-'))
        .map(String::as_str)
        .collect();
    if non_flags.is_empty() {
        return None;
    }

    let hint = match non_flags.as_slice() {
        ["dataset", ..] => Some("dataset"),
        ["series", ..] => Some("series"),
        ["catalog", ..] => Some("catalog"),
        _ => None,
    };
    hint.map(std::string::ToString::to_string)
}

fn exit_code_for_error(error: &CoreError) -> ExitCode {
    if error.code.starts_with("internal_") {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}

fn infer_requested_output_mode(raw_args: &[String]) -> output::OutputMode {
    if raw_args.iter().skip(1).any(|value| value == "--json") {
        return output::OutputMode::Json;
    }
    output::OutputMode::Text
}

#[cfg(test)]
mod tests {
    use super::{command_path_from_args, infer_requested_output_mode, strip_clap_boilerplate};
    use crate::output::OutputMode;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn command_path_recognizes_known_commands() {
        let hint = command_path_from_args(&args(&["spendgen", "dataset", "--days", "0"]));
        assert_eq!(hint.as_deref(), Some("dataset"));

        let unknown = command_path_from_args(&args(&["spendgen", "--json"]));
        assert!(unknown.is_none());
    }

    #[test]
    fn json_flag_is_detected_for_parse_failures() {
        let mode = infer_requested_output_mode(&args(&["spendgen", "dataset", "--json"]));
        assert_eq!(mode, OutputMode::Json);

        let text = infer_requested_output_mode(&args(&["spendgen", "dataset"]));
        assert_eq!(text, OutputMode::Text);
    }

    #[test]
    fn boilerplate_strip_cuts_at_usage_section() {
        let message = "invalid value '0' for '--days <DAYS>'\n\nUsage: spendgen dataset";
        assert_eq!(
            strip_clap_boilerplate(message),
            "invalid value '0' for '--days <DAYS>'"
        );
    }
}
