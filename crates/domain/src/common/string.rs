//! String helpers for user-entered names.

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// Whitespace is not treated as empty: a skill named `" "` is still a name.
///
/// # Examples
///
/// ```
/// use tmplbldr_domain::common::none_if_empty;
///
/// assert_eq!(none_if_empty("Magery"), Some("Magery"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" "));
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Key used when comparing template names: trimmed and lowercased.
///
/// # Examples
///
/// ```
/// use tmplbldr_domain::common::normalize_name;
///
/// assert_eq!(normalize_name("  Mage/Necro "), "mage/necro");
/// ```
pub fn normalize_name(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Case-insensitive, whitespace-trimmed name equality.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
