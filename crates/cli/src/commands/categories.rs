use std::path::Path;

use serde::Serialize;

use crate::commands::{load_catalog, CommandResult};

#[derive(Debug, Serialize)]
struct CategoriesReport {
    command: &'static str,
    status: &'static str,
    count: usize,
    categories: Vec<String>,
}

pub fn run(catalog_path: Option<&Path>) -> CommandResult {
    let catalog = match load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err(message) => return CommandResult::failure("categories", "catalog", message, 2),
    };

    let categories = catalog.categories();
    CommandResult::report(&CategoriesReport {
        command: "categories",
        status: "ok",
        count: categories.len(),
        categories,
    })
}
