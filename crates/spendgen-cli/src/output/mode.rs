use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    let json = match command {
        Commands::Dataset { json, .. }
        | Commands::Series { json, .. }
        | Commands::Catalog { json, .. } => *json,
    };
    if json { OutputMode::Json } else { OutputMode::Text }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, mode_for_command};
    use crate::cli::parse_from;

    #[test]
    fn json_flag_switches_each_command_to_json_mode() {
        for args in [
            vec!["spendgen", "dataset", "--json"],
            vec!["spendgen", "series", "--json"],
            vec!["spendgen", "catalog", "--json"],
        ] {
            let parsed = parse_from(args.clone());
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Json, "{args:?}");
            }
        }
    }

    #[test]
    fn commands_default_to_text_mode() {
        for args in [
            vec!["spendgen", "dataset"],
            vec!["spendgen", "series"],
            vec!["spendgen", "catalog"],
        ] {
            let parsed = parse_from(args.clone());
            assert!(parsed.is_ok());
            if let Ok(cli) = parsed {
                assert_eq!(mode_for_command(&cli.command), OutputMode::Text, "{args:?}");
            }
        }
    }
}
