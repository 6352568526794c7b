use spendgen_core::commands;
use spendgen_core::{CoreResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> CoreResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Dataset {
            days,
            end_date,
            icon_file,
            seed,
            out,
            json: _,
        } => commands::dataset::run(
            *days,
            end_date.as_ref().map(|value| value.as_str()),
            icon_file.as_deref(),
            *seed,
            out,
        ),
        Commands::Series { out_dir, .. } => commands::series::run(out_dir),
        Commands::Catalog { icon_file, .. } => commands::catalog::run(icon_file.as_deref()),
    }
}
