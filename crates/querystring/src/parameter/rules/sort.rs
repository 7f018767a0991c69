//! Rule for `SortStrings` parameters.

use crate::error::Result;
use crate::parameter::{ParameterState, ParameterValue};
use crate::spec::SortStringsRule;
use crate::types::SortItem;

use super::{filter_tokens, split_list};

/// Splits the raw value into sort keys.
///
/// A leading sort modifier marks the key descending and is stripped before
/// the allow-list check. Keys that are empty once stripped are dropped.
pub fn parse(
    name: &str,
    rule: &SortStringsRule,
    raw: &str,
    state: &mut ParameterState,
) -> Result<()> {
    let items = split_list(raw, rule.list_separator).filter_map(|token| {
        let item = match token.strip_prefix(rule.sort_modifier) {
            Some(field) => SortItem::descending(field),
            None => SortItem::ascending(token),
        };
        (!item.field.is_empty()).then_some(item)
    });

    let items = filter_tokens(
        name,
        items,
        &rule.allowed_values,
        rule.deduplicate,
        |item: &SortItem| item.field.as_str(),
    );

    state.value = Some(ParameterValue::SortStrings(items));
    state.parsed = true;
    Ok(())
}
