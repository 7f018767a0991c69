//! Key name sanitization.
//!
//! Registered parameter names and incoming query keys share one normal
//! form: lowercase ASCII letters, digits and underscores. Every other
//! character, accented letters included, is dropped. An incoming key that
//! is not already in this form is rejected by the parser, which blocks
//! case variants and punctuation/injection style keys from matching a
//! registered parameter.

/// Reduces a key to lowercase ASCII letters, digits and underscores.
///
/// ```
/// use helios_querystring::sanitize_key;
///
/// assert_eq!(sanitize_key("Offset"), "offset");
/// assert_eq!(sanitize_key("age'--DROP TABLE"), "agedroptable");
/// ```
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Returns true if `key` already equals its sanitized form.
pub fn is_sanitized(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
