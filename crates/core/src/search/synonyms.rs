use super::fuzzy::{is_fuzzy_match, DEFAULT_MAX_DISTANCE};
use super::normalize::normalize;

/// Informal shopper vocabulary mapped to canonical catalog categories.
/// Static lookup data, never written to after construction.
const SYNONYM_SEEDS: &[(&str, &str)] = &[
    ("men", "men's clothing"),
    ("male", "men's clothing"),
    ("man", "men's clothing"),
    ("women", "women's clothing"),
    ("female", "women's clothing"),
    ("woman", "women's clothing"),
    ("jewelry", "jewelery"),
    ("jewelery", "jewelery"),
    ("earring", "jewelery"),
    ("earrings", "jewelery"),
    ("necklace", "jewelery"),
    ("bracelet", "jewelery"),
    ("ring", "jewelery"),
    ("rings", "jewelery"),
    ("phone", "electronics"),
    ("phones", "electronics"),
    ("smartphone", "electronics"),
    ("headphone", "electronics"),
    ("headphones", "electronics"),
    ("earbud", "electronics"),
    ("earbuds", "electronics"),
    ("dress", "women's clothing"),
    ("dresses", "women's clothing"),
    ("tshirt", "men's clothing"),
    ("t-shirt", "men's clothing"),
    ("shirt", "men's clothing"),
    ("shirts", "men's clothing"),
    ("shoe", "men's clothing"),
    ("shoes", "men's clothing"),
];

/// Resolve every synonym the query text fires: a key matches when the
/// normalized text contains it as a substring or fuzzy-matches it whole.
/// Several keys may fire at once; the result keeps first-fire order and is
/// deduplicated, not reduced to a single best guess.
pub fn resolve(query_text: &str) -> Vec<String> {
    let text = normalize(query_text);
    let mut categories: Vec<String> = Vec::new();

    for (key, category) in SYNONYM_SEEDS {
        let key_normalized = normalize(key);
        if text.contains(&key_normalized) || is_fuzzy_match(&text, key, DEFAULT_MAX_DISTANCE) {
            if !categories.iter().any(|existing| existing == category) {
                categories.push((*category).to_owned());
            }
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn informal_terms_map_to_canonical_categories() {
        assert_eq!(resolve("cheap headphones"), vec!["electronics"]);
        assert_eq!(resolve("summer dresses"), vec!["women's clothing"]);
        assert_eq!(resolve("necklace for a gift"), vec!["jewelery"]);
    }

    #[test]
    fn common_spelling_of_jewelry_resolves_by_substring() {
        assert_eq!(resolve("jewelry"), vec!["jewelery"]);
    }

    #[test]
    fn misspelled_whole_query_resolves_by_fuzzy_match() {
        // "jewlery" is two edits from the "jewelry" key.
        assert_eq!(resolve("jewlery"), vec!["jewelery"]);
    }

    #[test]
    fn multiple_keys_union_without_duplicates() {
        let categories = resolve("t-shirt and shoes for men");
        assert_eq!(categories, vec!["men's clothing"]);

        let categories = resolve("phone and earrings");
        assert!(categories.contains(&"electronics".to_string()));
        assert!(categories.contains(&"jewelery".to_string()));
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn unrelated_text_fires_nothing() {
        assert!(resolve("portable hard drive").is_empty());
    }
}
