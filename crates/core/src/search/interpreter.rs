use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::Catalog;

use super::fuzzy::{is_fuzzy_match, DEFAULT_MAX_DISTANCE};
use super::normalize::normalize;
use super::synonyms;
use super::SearchMode;

/// Structured form of a free-text query. Built once per search and applied
/// by the ranking engine; holds no references into the catalog.
///
/// A contradictory price range (min above max) is representable on purpose:
/// the parser does not validate it, the filter simply matches nothing and
/// strict searches degrade through the fallback pass.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryFilter {
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    /// Canonical category names. Empty means "no category constraint".
    pub categories: Vec<String>,
    /// Normalized keyword tokens in query order.
    pub keywords: Vec<String>,
    /// Whether every keyword must clear the per-keyword match floor.
    pub strict: bool,
}

impl QueryFilter {
    pub fn has_keywords(&self) -> bool {
        !self.keywords.is_empty()
    }
}

/// Directive, comparison, sort, currency and rating words that never count
/// as product keywords.
const STOP_WORDS: &[&str] = &[
    "show", "me", "with", "and", "or", "the", "a", "an", "under", "over", "below", "above",
    "less", "than", "greater", "between", "to", "for", "good", "reviews", "rating", "stars",
    "$", "usd", "cheapest", "expensive", "lowest", "highest", "price", "top", "best", "rated",
    "ascending", "descending", "low", "high", "at", "least", ">=", "minimum", "min",
];

/// Query patterns, compiled once on first use.
struct QueryPatterns {
    between: Regex,
    under: Regex,
    over: Regex,
    stars: Regex,
    rating_floor: Regex,
    quality: Regex,
    amount: Regex,
}

static QUERY_PATTERNS: OnceLock<QueryPatterns> = OnceLock::new();

impl QueryPatterns {
    fn new() -> Self {
        Self {
            between: Regex::new(r"between\s*\$?(\d+(?:\.\d+)?)\s*(?:and|-|to)\s*\$?(\d+(?:\.\d+)?)")
                .expect("between pattern must compile"),
            under: Regex::new(r"(?:under|below|less than)\s*\$?(\d+(?:\.\d+)?)")
                .expect("under pattern must compile"),
            over: Regex::new(r"(?:over|above|greater than)\s*\$?(\d+(?:\.\d+)?)")
                .expect("over pattern must compile"),
            stars: Regex::new(r"(\d(?:\.\d)?)\s*\+?\s*stars?")
                .expect("stars pattern must compile"),
            rating_floor: Regex::new(r"(?:at least|minimum|min|>=)\s*(\d(?:\.\d)?)")
                .expect("rating floor pattern must compile"),
            quality: Regex::new(r"good reviews|high rating|4\+ stars|great reviews|well reviewed")
                .expect("quality pattern must compile"),
            amount: Regex::new(r"\$?\d+(?:\.\d+)?").expect("amount pattern must compile"),
        }
    }
}

fn patterns() -> &'static QueryPatterns {
    QUERY_PATTERNS.get_or_init(QueryPatterns::new)
}

/// Parse a free-text query against a catalog's category set. Pure function
/// of the two inputs plus the caller's mode; unparseable fragments leave
/// their field unset instead of failing.
pub fn interpret(catalog: &Catalog, query_text: &str, mode: SearchMode) -> QueryFilter {
    let text = query_text.to_lowercase();
    let patterns = patterns();

    let mut min_price = None;
    let mut max_price = None;

    // "between $A and $B" first; a later under/over match overwrites the
    // bound it targets.
    if let Some(captures) = patterns.between.captures(&text) {
        min_price = parse_price(captures.get(1).map_or("", |m| m.as_str()));
        max_price = parse_price(captures.get(2).map_or("", |m| m.as_str()));
    }
    if let Some(captures) = patterns.under.captures(&text) {
        max_price = parse_price(captures.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(captures) = patterns.over.captures(&text) {
        min_price = parse_price(captures.get(1).map_or("", |m| m.as_str()));
    }

    // Explicit star/rating thresholds overwrite each other in evaluation
    // order; the qualitative phrases only ever raise the floor.
    let mut min_rating = None;
    if let Some(captures) = patterns.stars.captures(&text) {
        min_rating = parse_rating(captures.get(1).map_or("", |m| m.as_str()));
    }
    if let Some(captures) = patterns.rating_floor.captures(&text) {
        min_rating = parse_rating(captures.get(1).map_or("", |m| m.as_str()));
    }
    if patterns.quality.is_match(&text) {
        min_rating = Some(min_rating.unwrap_or(0.0).max(4.0));
    }

    let categories = detect_categories(catalog, &text);
    let keywords = extract_keywords(&text);

    let filter = QueryFilter {
        min_price,
        max_price,
        min_rating,
        categories,
        keywords,
        strict: mode.is_strict(),
    };

    tracing::debug!(
        min_price = ?filter.min_price,
        max_price = ?filter.max_price,
        min_rating = ?filter.min_rating,
        categories = filter.categories.len(),
        keywords = filter.keywords.len(),
        strict = filter.strict,
        "interpreted query"
    );

    filter
}

fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw).ok()
}

fn parse_rating(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}

/// Catalog categories named (or misspelled) in the query, unioned with the
/// synonym table's hits, deduplicated in first-match order.
fn detect_categories(catalog: &Catalog, text: &str) -> Vec<String> {
    let text_normalized = normalize(text);
    let mut matches: Vec<String> = Vec::new();

    for category in catalog.categories() {
        let category_normalized = normalize(&category);
        if text_normalized.contains(&category_normalized)
            || is_fuzzy_match(&text_normalized, &category_normalized, DEFAULT_MAX_DISTANCE)
        {
            matches.push(category);
        }
    }

    for category in synonyms::resolve(text) {
        if !matches.contains(&category) {
            matches.push(category);
        }
    }

    matches
}

/// Everything left after numeric/currency tokens and stop words are removed,
/// normalized, in query order.
fn extract_keywords(text: &str) -> Vec<String> {
    let stripped = patterns().amount.replace_all(text, " ");

    stripped
        .split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}
