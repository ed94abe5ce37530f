use std::path::Path;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use storefront_core::{price_for, FixedClock, ProductId};

use crate::commands::{load_catalog, CommandResult};

#[derive(Debug, Serialize)]
struct PriceReport {
    command: &'static str,
    status: &'static str,
    product_id: String,
    title: String,
    base: Decimal,
    adjusted: Decimal,
    factor: Decimal,
    evaluated_at: DateTime<Utc>,
}

pub fn run(product_id: &str, at: Option<&str>, catalog_path: Option<&Path>) -> CommandResult {
    let catalog = match load_catalog(catalog_path) {
        Ok(catalog) => catalog,
        Err(message) => return CommandResult::failure("price", "catalog", message, 2),
    };

    // Resolve the instant once at the boundary and pin the engine's clock to
    // it, so the reported timestamp is exactly the one that was priced.
    let instant = match at {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(instant) => instant.with_timezone(&Utc),
            Err(error) => {
                return CommandResult::failure(
                    "price",
                    "invalid_timestamp",
                    format!("could not parse `{raw}` as RFC 3339: {error}"),
                    2,
                );
            }
        },
        None => Utc::now(),
    };

    let id = ProductId(product_id.to_string());
    let Some(product) = catalog.find(&id) else {
        return CommandResult::failure(
            "price",
            "unknown_product",
            format!("no product with id `{product_id}` in the catalog"),
            3,
        );
    };

    let adjustment = price_for(product, &FixedClock(instant));

    CommandResult::report(&PriceReport {
        command: "price",
        status: "ok",
        product_id: product.id.0.clone(),
        title: product.title.clone(),
        base: product.price,
        adjusted: adjustment.adjusted,
        factor: adjustment.factor,
        evaluated_at: instant,
    })
}
