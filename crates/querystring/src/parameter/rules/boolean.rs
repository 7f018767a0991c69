//! Rule for `Boolean` parameters.

use crate::error::{ParseError, Result};
use crate::parameter::{ParameterState, ParameterValue};

/// Accepts `true`/`t` and `false`/`f`, case-insensitively.
pub fn parse(name: &str, raw: &str, state: &mut ParameterState) -> Result<()> {
    let value = match raw.to_lowercase().as_str() {
        "true" | "t" => true,
        "false" | "f" => false,
        _ => {
            return Err(ParseError::InvalidBoolean {
                name: name.to_string(),
                value: raw.to_string(),
            });
        }
    };

    state.value = Some(ParameterValue::Boolean(value));
    state.parsed = true;
    Ok(())
}
