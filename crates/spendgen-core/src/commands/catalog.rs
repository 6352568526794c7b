use std::path::Path;

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::CatalogData;
use crate::error::CoreResult;
use crate::icons::{load_icon_hints, resolve_catalog};

#[derive(Debug, Clone, Default)]
pub struct CatalogRunOptions {
    pub icon_file: Option<String>,
}

pub fn run(icon_file: Option<&str>) -> CoreResult<SuccessEnvelope> {
    run_with_options(CatalogRunOptions {
        icon_file: icon_file.map(std::string::ToString::to_string),
    })
}

/// Previews the category catalog with resolved icon metadata, without
/// generating any expenses. Useful for checking what an icon source file
/// actually contributes before generating a dataset against it.
pub fn run_with_options(options: CatalogRunOptions) -> CoreResult<SuccessEnvelope> {
    let hints = load_icon_hints(options.icon_file.as_deref().map(Path::new));
    let resolved = resolve_catalog(&hints);
    let fallback = resolved.categories.len() - resolved.matched;

    success(
        "catalog",
        CatalogData {
            icon_source: options.icon_file,
            icon_hint_keys: hints.len(),
            matched: resolved.matched,
            fallback,
            categories: resolved.categories,
        },
    )
}
