use std::path::Path;

use serde::Serialize;
use storefront_core::{Product, SearchEngine, SearchMode};

use crate::commands::{load_catalog, CommandResult};

#[derive(Debug, Serialize)]
struct SearchReport {
    command: &'static str,
    status: &'static str,
    mode: SearchMode,
    /// "ranked", "closest" (degraded fallback) or "empty" (no results).
    provenance: &'static str,
    count: usize,
    products: Vec<Product>,
}

pub fn run(query: &str, relaxed: bool, catalog_path: Option<&Path>) -> CommandResult {
    let catalog = match load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err(message) => return CommandResult::failure("search", "catalog", message, 2),
    };

    let mode = if relaxed { SearchMode::Relaxed } else { SearchMode::Strict };
    let outcome = SearchEngine::new().search(&catalog, query, mode);

    CommandResult::report(&SearchReport {
        command: "search",
        status: "ok",
        mode,
        provenance: outcome.provenance(),
        count: outcome.products().len(),
        products: outcome.products().to_vec(),
    })
}
