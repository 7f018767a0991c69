//! Rule for `Strings` parameters.

use crate::error::Result;
use crate::parameter::{ParameterState, ParameterValue};
use crate::spec::StringsRule;

use super::{filter_tokens, split_list};

/// Splits the raw value into list items and applies the allow-list.
pub fn parse(name: &str, rule: &StringsRule, raw: &str, state: &mut ParameterState) -> Result<()> {
    let tokens = split_list(raw, rule.list_separator).map(String::from);
    let items = filter_tokens(
        name,
        tokens,
        &rule.allowed_values,
        rule.deduplicate,
        |item: &String| item.as_str(),
    );

    state.value = Some(ParameterValue::Strings(items));
    state.parsed = true;
    Ok(())
}
