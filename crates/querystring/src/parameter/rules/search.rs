//! Rule for `SearchString` parameters.

use tracing::debug;

use crate::error::{ParseError, Result};
use crate::parameter::{ParameterState, ParameterValue};
use crate::spec::SearchStringRule;
use crate::types::MatchPosition;

/// Derives the wildcard position and literal term from the raw value.
///
/// The term has every wildcard removed. A term longer than `max_length` is
/// truncated and reported; a term shorter than `min_length` is kept as-is
/// and reported. Lengths count characters.
pub fn parse(
    name: &str,
    rule: &SearchStringRule,
    raw: &str,
    state: &mut ParameterState,
) -> Result<()> {
    let position =
        MatchPosition::from_wildcards(raw.starts_with(rule.wildcard), raw.ends_with(rule.wildcard));

    let term: String = raw.chars().filter(|c| *c != rule.wildcard).collect();
    let length = term.chars().count();
    state.parsed = length > 0;

    if rule.max_length > 0 && length > rule.max_length {
        debug!(parameter = name, length, max = rule.max_length, "truncating search term");
        state.value = Some(ParameterValue::SearchString {
            term: term.chars().take(rule.max_length).collect(),
            position,
        });
        return Err(ParseError::StringTooLong {
            name: name.to_string(),
            length,
            max: rule.max_length,
        });
    }

    state.value = Some(ParameterValue::SearchString { term, position });

    if length < rule.min_length {
        return Err(ParseError::StringTooShort {
            name: name.to_string(),
            length,
            min: rule.min_length,
        });
    }

    Ok(())
}
