use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::domain::product::Product;

use super::fuzzy::{is_fuzzy_match, SemanticMatcher, DEFAULT_MAX_DISTANCE, RELAXED_MAX_DISTANCE};
use super::interpreter::QueryFilter;
use super::normalize::normalize;
use super::SearchOutcome;

/// A product plus its transient relevance score. Only alive during a ranking
/// pass; the score never leaves this module.
struct ScoredCandidate<'a> {
    product: &'a Product,
    score: f64,
}

/// Apply a filter to a catalog and return survivors ordered by relevance.
/// When a strict pass comes up empty the relaxed whole-text fallback runs,
/// and the outcome's provenance tells the caller which pass produced it.
pub fn rank<M: SemanticMatcher>(
    catalog: &Catalog,
    filter: &QueryFilter,
    query_text: &str,
    matcher: &M,
) -> SearchOutcome {
    let mut candidates: Vec<ScoredCandidate<'_>> = catalog
        .products()
        .iter()
        .filter_map(|product| {
            score_product(product, filter, matcher)
                .map(|score| ScoredCandidate { product, score })
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.product
                    .rating_or_zero()
                    .partial_cmp(&a.product.rating_or_zero())
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.product.price.cmp(&b.product.price))
    });

    if candidates.is_empty() {
        if filter.strict {
            tracing::debug!(query = query_text, "strict pass empty, running whole-text fallback");
            let closest = fallback(catalog, query_text, matcher);
            if !closest.is_empty() {
                return SearchOutcome::Closest(closest);
            }
        }
        return SearchOutcome::Empty;
    }

    SearchOutcome::Ranked(
        candidates.into_iter().map(|candidate| candidate.product.clone()).collect(),
    )
}

/// Hard filters, keyword gating and relevance scoring for one product.
/// `None` means rejected.
fn score_product<M: SemanticMatcher>(
    product: &Product,
    filter: &QueryFilter,
    matcher: &M,
) -> Option<f64> {
    if filter.min_price.is_some_and(|min| product.price < min) {
        return None;
    }
    if filter.max_price.is_some_and(|max| product.price > max) {
        return None;
    }

    let rating = product.rating_or_zero();
    if filter.min_rating.is_some_and(|floor| rating < floor) {
        return None;
    }

    if !filter.categories.is_empty() && !filter.categories.contains(&product.category) {
        return None;
    }

    let haystack = haystack(product);
    let mut keyword_score = 0.0;
    if filter.has_keywords() {
        for keyword in &filter.keywords {
            keyword_score += keyword_points(&haystack, keyword, matcher);
        }

        // Strict: every keyword must have cleared at least the fuzzy floor.
        // Relaxed: one hit among many is enough.
        if filter.strict && keyword_score < filter.keywords.len() as f64 {
            return None;
        }
        if !filter.strict && keyword_score == 0.0 {
            return None;
        }
    }

    let mut score = 2.0 * rating + keyword_score;
    if filter.min_price.is_some_and(|min| product.price >= min) {
        score += 1.0;
    }
    if filter.max_price.is_some_and(|max| product.price <= max) {
        score += 1.0;
    }
    if !filter.categories.is_empty() {
        score += 2.0;
    }

    Some(score)
}

/// Per-keyword contribution: literal containment beats a fuzzy hit beats a
/// semantic-stub hit.
fn keyword_points<M: SemanticMatcher>(haystack: &str, keyword: &str, matcher: &M) -> f64 {
    if haystack.contains(keyword) {
        2.0
    } else if is_fuzzy_match(haystack, keyword, DEFAULT_MAX_DISTANCE) {
        1.0
    } else if matcher.matches(haystack, keyword) {
        1.0
    } else {
        0.0
    }
}

/// Filter-free degradation pass: whole haystack against the whole query at
/// relaxed slack, scored by rating alone.
fn fallback<M: SemanticMatcher>(
    catalog: &Catalog,
    query_text: &str,
    matcher: &M,
) -> Vec<Product> {
    let query_normalized = normalize(query_text);

    let mut candidates: Vec<ScoredCandidate<'_>> = catalog
        .products()
        .iter()
        .filter(|product| {
            let haystack = haystack(product);
            is_fuzzy_match(&haystack, &query_normalized, RELAXED_MAX_DISTANCE)
                || matcher.matches(&haystack, &query_normalized)
        })
        .map(|product| ScoredCandidate { product, score: 2.0 * product.rating_or_zero() })
        .collect();

    candidates
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    candidates.into_iter().map(|candidate| candidate.product.clone()).collect()
}

fn haystack(product: &Product) -> String {
    normalize(&format!("{} {}", product.title, product.description))
}
