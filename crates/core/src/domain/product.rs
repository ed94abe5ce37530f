use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque product identifier. Callers may put anything in here (numeric ids
/// serialized as strings included); the core never interprets it except for
/// the demand-spike digit extraction in pricing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl ProductId {
    /// The concatenated decimal digits of the id, as a number. Ids without
    /// digits (or with too many to fit) count as 0.
    pub fn numeric_portion(&self) -> u64 {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        digits.parse().unwrap_or(0)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog entry. Immutable input to search and pricing; the core never
/// mutates a product, it only reads and clones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: Decimal,
    /// Average review rating in [0, 5]. Absent ratings are treated as 0 by
    /// every filter and scoring rule.
    pub rating: Option<f64>,
    pub stock: u32,
}

impl Product {
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ProductId;

    #[test]
    fn numeric_portion_extracts_digits() {
        assert_eq!(ProductId("prod-42".to_string()).numeric_portion(), 42);
        assert_eq!(ProductId("7".to_string()).numeric_portion(), 7);
        assert_eq!(ProductId("a1b2c3".to_string()).numeric_portion(), 123);
    }

    #[test]
    fn numeric_portion_without_digits_is_zero() {
        assert_eq!(ProductId("sku-misc".to_string()).numeric_portion(), 0);
        assert_eq!(ProductId(String::new()).numeric_portion(), 0);
    }
}
