//! Full-text query rendering.
//!
//! Translates a parsed [`Parser`] into the query string syntax of the
//! downstream full-text search engine and into its sort-key sequence.
//!
//! Clause shapes, where `p` is the conditional modifier (`+`, `-` or
//! nothing):
//!
//! | Type | Output |
//! |------|--------|
//! | `Integer`, `Boolean` | `pfield:value` |
//! | `IntegerRange` | `pfield:>=min pfield:<=max` |
//! | `Strings` (should) | `field:a,b,c` |
//! | `Strings` (must/not) | `pfield:a pfield:b pfield:c` |
//! | `SearchString` | `pfield:term*`, `pfield:*term`, `pfield:*term*`, or unqualified without a field |
//!
//! Clauses are joined with a single space in registration order. Parameters
//! that were not parsed, or are excluded from output, contribute nothing.

use tracing::trace;

use crate::config::{LIST_SEPARATOR, WILDCARD};
use crate::error::Result;
use crate::parameter::{Parameter, ParameterValue};
use crate::parser::Parser;
use crate::spec::ParameterKind;
use crate::types::{Condition, MatchPosition, ParameterType, SortDirection};

/// Renders a parser's final state.
#[derive(Debug, Clone, Copy)]
pub struct QuerySerializer<'a> {
    parser: &'a Parser,
}

impl<'a> QuerySerializer<'a> {
    /// Creates a serializer over a parsed parser.
    pub fn new(parser: &'a Parser) -> Self {
        Self { parser }
    }

    /// Builds the space-joined query string.
    pub fn query(&self) -> String {
        self.parser
            .parameters()
            .map(Parameter::to_query_clause)
            .filter(|clause| !clause.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds the sort-key sequence for a `SortStrings` parameter.
    ///
    /// Ascending keys are bare field names; descending keys carry the sort
    /// modifier. Returns an empty sequence when nothing was parsed.
    pub fn sort_slice(&self, name: &str) -> Result<Vec<String>> {
        let parameter = self
            .parser
            .typed_parameter(name, ParameterType::SortStrings)?;
        Ok(render_sort_slice(parameter))
    }
}

impl Parameter {
    /// Renders this parameter's clauses.
    ///
    /// Returns an empty string when the parameter is unparsed or excluded
    /// from output.
    pub fn to_query_clause(&self) -> String {
        let spec = self.spec();
        if !self.is_parsed() || !spec.include_in_output {
            return String::new();
        }

        let Some(value) = self.value() else {
            return String::new();
        };

        let clause = render_value(
            spec.output_name(),
            spec.output_condition,
            &spec.kind,
            value,
        );
        trace!(parameter = %spec.name, clause = %clause, "rendered clause");
        clause
    }
}

fn render_value(
    field: &str,
    condition: Condition,
    kind: &ParameterKind,
    value: &ParameterValue,
) -> String {
    let prefix = condition.prefix();

    match value {
        ParameterValue::Integer(value) => format!("{}{}:{}", prefix, field, value),
        ParameterValue::Boolean(value) => format!("{}{}:{}", prefix, field, value),
        ParameterValue::IntegerRange { min, max } => format!(
            "{}{}:>={} {}{}:<={}",
            prefix, field, min, prefix, field, max
        ),
        ParameterValue::Strings(items) => render_strings(field, condition, kind, items),
        ParameterValue::SearchString { term, position } => {
            render_search_string(field, prefix, kind, term, *position)
        }
        // Sort parameters feed the sort sequence, not the query.
        ParameterValue::SortStrings(_) => String::new(),
    }
}

fn render_strings(
    field: &str,
    condition: Condition,
    kind: &ParameterKind,
    items: &[String],
) -> String {
    if items.is_empty() {
        return String::new();
    }

    if condition == Condition::Should {
        let separator = match kind {
            ParameterKind::Strings(rule) => rule.list_separator,
            _ => LIST_SEPARATOR,
        };
        let joined = items.join(separator.to_string().as_str());
        return format!("{}:{}", field, joined);
    }

    let prefix = condition.prefix();
    items
        .iter()
        .map(|item| format!("{}{}:{}", prefix, field, item))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_search_string(
    field: &str,
    prefix: &str,
    kind: &ParameterKind,
    term: &str,
    position: MatchPosition,
) -> String {
    let wildcard = match kind {
        ParameterKind::SearchString(rule) => rule.wildcard,
        _ => WILDCARD,
    };

    let qualifier = if field.is_empty() {
        String::new()
    } else {
        format!("{}:", field)
    };

    match position {
        MatchPosition::Prefix => format!("{}{}{}{}", prefix, qualifier, term, wildcard),
        MatchPosition::Suffix => format!("{}{}{}{}", prefix, qualifier, wildcard, term),
        MatchPosition::Surrounded => {
            format!("{}{}{}{}{}", prefix, qualifier, wildcard, term, wildcard)
        }
    }
}

fn render_sort_slice(parameter: &Parameter) -> Vec<String> {
    let (ParameterKind::SortStrings(rule), Some(ParameterValue::SortStrings(items))) =
        (&parameter.spec().kind, parameter.value())
    else {
        return Vec::new();
    };

    if !parameter.is_parsed() {
        return Vec::new();
    }

    items
        .iter()
        .map(|item| match item.direction {
            SortDirection::Ascending => item.field.clone(),
            SortDirection::Descending => format!("{}{}", rule.sort_modifier, item.field),
        })
        .collect()
}
