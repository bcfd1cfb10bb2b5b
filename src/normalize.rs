//! Specification label normalization
//!
//! Turns human-readable table labels such as `"Fuel Capacity (gal.)"` into
//! stable field keys such as `"fuel_capacity_gal"`.

/// Normalizes a specification label into a field key
///
/// # Normalization Steps
///
/// 1. Lower-case the label
/// 2. Drop every character that is neither a word character (alphanumeric or
///    `_`) nor whitespace
/// 3. Join the remaining whitespace-separated words with single underscores
///
/// Lower-casing happens first because some upper-case letters lower-case into
/// a letter plus a combining mark; filtering afterwards keeps the function
/// idempotent.
///
/// # Examples
///
/// ```
/// use motospec::normalize::normalize_key;
///
/// assert_eq!(normalize_key("Fuel Capacity (gal.)"), "fuel_capacity_gal");
/// assert_eq!(normalize_key("fuel_capacity_gal"), "fuel_capacity_gal");
/// ```
pub fn normalize_key(label: &str) -> String {
    let cleaned: String = label
        .to_lowercase()
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Builds the record key for a label found in the given spec category
pub fn category_key(category: &str, label: &str) -> String {
    format!("{}_{}", category, normalize_key(label))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
