use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use storefront_cli::commands::{categories, price, search};

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output must be valid JSON")
}

#[test]
fn search_ranks_the_demo_catalog() {
    let result = search::run("under $100", false, None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "search");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["provenance"], "ranked");
    assert_eq!(payload["mode"], "strict");

    let products = payload["products"].as_array().expect("products array");
    assert_eq!(products.len(), payload["count"].as_u64().unwrap() as usize);
    assert!(!products.is_empty());
    for product in products {
        let price: f64 = product["price"].as_str().expect("decimal string").parse().unwrap();
        assert!(price <= 100.0, "price {price} exceeds the bound");
    }
}

#[test]
fn search_reports_empty_for_hopeless_queries() {
    let result = search::run("quantum flux capacitor", false, None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["provenance"], "empty");
    assert_eq!(payload["count"], 0);
}

#[test]
fn relaxed_search_uses_the_relaxed_mode() {
    let result = search::run("drive", true, None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["mode"], "relaxed");
    assert_eq!(payload["status"], "ok");
}

#[test]
fn price_with_pinned_clock_is_reproducible() {
    // Wednesday 15:00 UTC: category 0.06 + rating 0.05 - afternoon 0.05 +
    // demand 0.01 for product 7.
    let result = price::run("7", Some("2026-08-05T15:00:00Z"), None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["command"], "price");
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["factor"], "0.07");
    assert_eq!(payload["adjusted"], "68.48");
    assert_eq!(payload["base"], "64.00");
}

#[test]
fn price_rejects_unknown_products() {
    let result = price::run("nope", None, None);
    assert_eq!(result.exit_code, 3);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "unknown_product");
}

#[test]
fn price_rejects_invalid_timestamps() {
    let result = price::run("7", Some("next tuesday"), None);
    assert_eq!(result.exit_code, 2);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "invalid_timestamp");
}

#[test]
fn categories_lists_the_demo_set() {
    let result = categories::run(None);
    assert_eq!(result.exit_code, 0);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["count"], 4);
    let names: Vec<&str> = payload["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|value| value.as_str().unwrap())
        .collect();
    assert!(names.contains(&"electronics"));
    assert!(names.contains(&"jewelery"));
}

#[test]
fn commands_load_catalogs_from_disk() {
    let path = temp_catalog_path("runtime");
    let json = r#"[{
        "id": "p1",
        "title": "Tiny Gadget",
        "description": "A very small gadget",
        "category": "electronics",
        "price": "19.99",
        "rating": 4.2,
        "stock": 3
    }]"#;
    fs::write(&path, json).expect("write temp catalog");

    let result = search::run("gadget", false, Some(path.as_path()));
    let payload = parse_payload(&result.output);
    assert_eq!(payload["count"], 1);
    assert_eq!(payload["products"][0]["id"], "p1");

    fs::remove_file(&path).ok();
}

#[test]
fn unreadable_catalog_fails_with_the_catalog_class() {
    let path = PathBuf::from("/definitely/not/here/catalog.json");
    let result = search::run("gadget", false, Some(path.as_path()));
    assert_eq!(result.exit_code, 2);

    let payload = parse_payload(&result.output);
    assert_eq!(payload["error_class"], "catalog");
}

fn temp_catalog_path(tag: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("storefront-cli-test-{tag}-{}.json", std::process::id()));
    path
}
