use thiserror::Error;

/// Failures at the catalog data boundary. Search and pricing themselves are
/// total functions and never error; anomalous queries degrade to empty or
/// fallback results instead.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product `{id}`: {reason}")]
    InvalidProduct { id: String, reason: String },
}
