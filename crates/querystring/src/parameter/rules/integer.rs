//! Rule for `Integer` parameters.

use crate::error::Result;
use crate::parameter::{ParameterState, ParameterValue};
use crate::spec::IntegerRule;

use super::parse_int;

/// Parses a base-10 integer and clamps it into `[min_value, max_value]`.
///
/// A `max_value` of zero leaves the value unbounded above.
pub fn parse(name: &str, rule: &IntegerRule, raw: &str, state: &mut ParameterState) -> Result<()> {
    let mut value = parse_int(name, raw)?;

    if rule.max_value != 0 && value > rule.max_value {
        value = rule.max_value;
    }

    if value < rule.min_value {
        value = rule.min_value;
    }

    state.value = Some(ParameterValue::Integer(value));
    state.parsed = true;
    Ok(())
}
