//! String conversion utilities.

/// Normalizes a skill or roll-data key: every space is removed and the rest
/// is lowercased.
///
/// # Examples
///
/// ```
/// use hypermall_domain::common::normalize_key;
///
/// assert_eq!(normalize_key("Fast Talk"), "fasttalk");
/// assert_eq!(normalize_key("  Hard  Sell "), "hardsell");
/// assert_eq!(normalize_key("savvy"), "savvy");
/// ```
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Converts an empty or whitespace-only string to `None`, otherwise returns
/// the trimmed value.
///
/// # Examples
///
/// ```
/// use hypermall_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank(" 12 "), Some("12"));
/// assert_eq!(none_if_blank("   "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
