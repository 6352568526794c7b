//! Icon metadata for the category catalog.
//!
//! Hints are borrowed from an external declarative source file when one is
//! supplied; everything else falls back to synthesized names and codes. The
//! scan, the matching chain, and the fallback derivation are deliberately
//! independent so the ad hoc scan can be replaced without touching the rest.

mod fallback;
mod matching;
mod scan;

pub use fallback::{fallback_icon_name, icon_code};
pub use matching::best_match_key;
pub use scan::{IconHints, extract_icon_map, load_icon_hints};

use crate::catalog::DEFAULT_CATEGORIES;
use crate::contracts::types::Category;

#[derive(Debug, Clone)]
pub struct ResolvedCatalog {
    pub categories: Vec<Category>,
    pub matched: usize,
}

/// Builds the full category catalog, resolving each category's icon through
/// the hint-matching chain and falling back to a synthesized icon otherwise.
pub fn resolve_catalog(hints: &IconHints) -> ResolvedCatalog {
    let keys = hints.keys();
    let mut matched = 0usize;

    let categories = DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, color)| {
            let hinted = best_match_key(name, &keys)
                .and_then(|key| hints.tokens_for(key))
                .and_then(|tokens| tokens.first());

            let icon_name = match hinted {
                Some(token) => {
                    matched += 1;
                    token.clone()
                }
                None => fallback_icon_name(name),
            };
            let code = icon_code(&icon_name);

            Category {
                id: *id,
                name: (*name).to_string(),
                color: *color,
                icon_code: code,
                icon_name,
            }
        })
        .collect();

    ResolvedCatalog {
        categories,
        matched,
    }
}
