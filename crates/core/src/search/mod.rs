//! Free-text product search: query interpretation, filtering, relevance
//! ranking and the relaxed whole-text fallback.

pub mod fuzzy;
pub mod interpreter;
pub mod normalize;
pub mod ranking;
pub mod synonyms;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::domain::product::Product;

pub use fuzzy::{FuzzySemanticMatcher, SemanticMatcher};
pub use interpreter::QueryFilter;

/// How keyword gating behaves for a search call. Strict is the explicit
/// submission path (all keywords must clear the floor, fallback may engage);
/// relaxed is the live-suggestion path (one hit is enough, no fallback).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    Strict,
    Relaxed,
}

impl SearchMode {
    pub fn is_strict(self) -> bool {
        matches!(self, SearchMode::Strict)
    }
}

/// A ranked result plus its provenance. There is no error variant: a query
/// that matches nothing is an `Empty` outcome, and a strict query that only
/// matched through the degraded whole-text pass is `Closest` so callers can
/// say "no exact matches, showing closest" instead of presenting the list as
/// exact. Transient scores are stripped before the outcome is built.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "provenance", content = "products", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// Products from the filtered, scored pass in relevance order.
    Ranked(Vec<Product>),
    /// Non-empty fallback result; never constructed empty.
    Closest(Vec<Product>),
    /// Nothing matched, even after fallback where applicable.
    Empty,
}

impl SearchOutcome {
    pub fn products(&self) -> &[Product] {
        match self {
            SearchOutcome::Ranked(products) | SearchOutcome::Closest(products) => products,
            SearchOutcome::Empty => &[],
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SearchOutcome::Closest(_))
    }

    pub fn is_empty(&self) -> bool {
        self.products().is_empty()
    }

    pub fn provenance(&self) -> &'static str {
        match self {
            SearchOutcome::Ranked(_) => "ranked",
            SearchOutcome::Closest(_) => "closest",
            SearchOutcome::Empty => "empty",
        }
    }
}

/// Entry point for both search paths. Owns the semantic matcher seam so a
/// future embedding-backed matcher slots in without touching callers.
#[derive(Clone, Debug)]
pub struct SearchEngine<M = FuzzySemanticMatcher> {
    matcher: M,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self { matcher: FuzzySemanticMatcher }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SemanticMatcher> SearchEngine<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// Interpret `query_text` against the catalog and rank the matches.
    /// Blank queries are the identity search: the whole catalog, in catalog
    /// order, as a ranked (non-fallback) outcome.
    pub fn search(&self, catalog: &Catalog, query_text: &str, mode: SearchMode) -> SearchOutcome {
        if query_text.trim().is_empty() {
            return SearchOutcome::Ranked(catalog.products().to_vec());
        }

        let filter = interpreter::interpret(catalog, query_text, mode);
        ranking::rank(catalog, &filter, query_text, &self.matcher)
    }
}
