//! Rule for `IntegerRange` parameters.

use crate::error::{ParseError, Result};
use crate::parameter::{ParameterState, ParameterValue};
use crate::spec::IntegerRangeRule;

use super::parse_int;

/// Parses `min<sep>max`.
///
/// Either side may be empty, in which case the configured bound is used.
/// Inverted bounds are swapped, never rejected.
pub fn parse(
    name: &str,
    rule: &IntegerRangeRule,
    raw: &str,
    state: &mut ParameterState,
) -> Result<()> {
    let (raw_min, raw_max) = raw
        .split_once(rule.range_separator)
        .ok_or_else(|| ParseError::InvalidRange {
            name: name.to_string(),
            value: raw.to_string(),
        })?;

    let min = if raw_min.is_empty() {
        rule.min_value
    } else {
        parse_int(name, raw_min)?
    };

    let max = if raw_max.is_empty() {
        rule.max_value
    } else {
        parse_int(name, raw_max)?
    };

    let (min, max) = if min > max { (max, min) } else { (min, max) };

    state.value = Some(ParameterValue::IntegerRange { min, max });
    state.parsed = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &IntegerRangeRule, raw: &str) -> Result<(i64, i64)> {
        let mut state = ParameterState::default();
        parse("age", rule, raw, &mut state)?;
        assert!(state.parsed);
        match state.value {
            Some(ParameterValue::IntegerRange { min, max }) => Ok((min, max)),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_integer_range() {
        assert_eq!(run(&IntegerRangeRule::default(), "15-35"), Ok((15, 35)));
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        assert_eq!(run(&IntegerRangeRule::default(), "118-35"), Ok((35, 118)));
    }

    #[test]
    fn test_min_default() {
        let rule = IntegerRangeRule::default().with_bounds(10, 0);
        assert_eq!(run(&rule, "-35"), Ok((10, 35)));
    }

    #[test]
    fn test_max_default() {
        let rule = IntegerRangeRule::default().with_bounds(0, 80);
        assert_eq!(run(&rule, "18-"), Ok((18, 80)));
    }

    #[test]
    fn test_defaults_do_not_leak_between_parses() {
        let rule = IntegerRangeRule::default().with_bounds(0, 99);
        assert_eq!(run(&rule, "20-30"), Ok((20, 30)));
        assert_eq!(run(&rule, "-50"), Ok((0, 50)));
    }

    #[test]
    fn test_missing_separator() {
        let err = run(&IntegerRangeRule::default(), "18").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidRange {
                name: "age".to_string(),
                value: "18".to_string(),
            }
        );
    }

    #[test]
    fn test_non_numeric_bound() {
        let mut state = ParameterState::default();
        let err = parse("age", &IntegerRangeRule::default(), "x-30", &mut state).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { ref value, .. } if value == "x"));
        assert!(!state.parsed);

        let err = run(&IntegerRangeRule::default(), "10-3-0").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInteger { .. }));
    }

    #[test]
    fn test_custom_separator() {
        let rule = IntegerRangeRule {
            range_separator: ':',
            ..Default::default()
        };
        assert_eq!(run(&rule, "-10:-2"), Ok((-10, -2)));
    }
}
