//! Per-type parsing rules.
//!
//! Each rule reads its own configuration and writes only the state of the
//! parameter being parsed. A rule that fails may leave a partial value
//! behind alongside the returned error.

pub mod boolean;
pub mod integer;
pub mod range;
pub mod search;
pub mod sort;
pub mod strings;

use tracing::debug;

use crate::error::{ParseError, Result};

/// Splits a list value, dropping empty tokens.
///
/// An empty raw value yields an empty list.
pub(crate) fn split_list(raw: &str, separator: char) -> impl Iterator<Item = &str> {
    raw.split(separator).filter(|token| !token.is_empty())
}

/// Returns true if `token` passes the allow-list. An empty allow-list accepts anything.
pub(crate) fn is_allowed(allowed_values: &[String], token: &str) -> bool {
    allowed_values.is_empty() || allowed_values.iter().any(|allowed| allowed == token)
}

/// Applies the allow-list and, optionally, first-occurrence deduplication.
pub(crate) fn filter_tokens<T>(
    name: &str,
    tokens: impl Iterator<Item = T>,
    allowed_values: &[String],
    deduplicate: bool,
    key: impl Fn(&T) -> &str,
) -> Vec<T> {
    let mut kept: Vec<T> = Vec::new();
    for token in tokens {
        let token_key = key(&token);
        if !is_allowed(allowed_values, token_key) {
            debug!(parameter = name, token = token_key, "dropping token outside allow-list");
            continue;
        }
        if deduplicate && kept.iter().any(|existing| key(existing) == token_key) {
            continue;
        }
        kept.push(token);
    }
    kept
}

/// Parses a base-10 integer, naming the parameter on failure.
pub(crate) fn parse_int(name: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|_| ParseError::InvalidInteger {
        name: name.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_empty() {
        assert_eq!(split_list("", ',').count(), 0);
    }

    #[test]
    fn test_split_list_drops_empty_tokens() {
        let tokens: Vec<_> = split_list("alfa,,beta,", ',').collect();
        assert_eq!(tokens, vec!["alfa", "beta"]);
    }

    #[test]
    fn test_is_allowed() {
        let allowed = vec!["age".to_string(), "name".to_string()];
        assert!(is_allowed(&allowed, "age"));
        assert!(!is_allowed(&allowed, "height"));
        assert!(is_allowed(&[], "anything"));
    }

    #[test]
    fn test_filter_tokens_dedup() {
        let kept = filter_tokens("x", ["a", "b", "a"].into_iter(), &[], true, |t| *t);
        assert_eq!(kept, vec!["a", "b"]);

        let kept = filter_tokens("x", ["a", "b", "a"].into_iter(), &[], false, |t| *t);
        assert_eq!(kept, vec!["a", "b", "a"]);
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("age", "42"), Ok(42));
        assert_eq!(parse_int("age", "-7"), Ok(-7));
        assert!(matches!(
            parse_int("age", "4x"),
            Err(ParseError::InvalidInteger { .. })
        ));
    }
}
