/// Canonical form for tolerant string comparison: lowercase with everything
/// outside `[a-z0-9]` removed. Case, punctuation and whitespace differences
/// all collapse, so "T-Shirt" and "tshirt" compare equal.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
