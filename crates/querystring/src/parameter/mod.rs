//! Registered parameters and their runtime state.
//!
//! A [`Parameter`] pairs an immutable [`ParameterSpec`] with the state a
//! parse leaves behind: a parsed flag and a typed [`ParameterValue`]. The
//! per-type rules live in [`rules`]; each reads only its own configuration
//! and writes only its own parameter's state.

pub mod rules;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::spec::{ParameterKind, ParameterSpec};
use crate::types::{MatchPosition, ParameterType, SortItem};

/// Typed value produced by a parameter rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParameterValue {
    /// Parsed list items, allow-list applied.
    Strings(Vec<String>),
    /// Literal search term with its wildcard position.
    SearchString {
        /// Term with all wildcards removed.
        term: String,
        /// Where the wildcard appeared.
        position: MatchPosition,
    },
    /// Parsed sort keys in input order.
    SortStrings(Vec<SortItem>),
    /// Integer range with `min <= max`.
    IntegerRange {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Clamped integer.
    Integer(i64),
    /// Boolean flag.
    Boolean(bool),
}

impl ParameterValue {
    /// Returns the parameter type this value belongs to.
    pub fn param_type(&self) -> ParameterType {
        match self {
            ParameterValue::Strings(_) => ParameterType::Strings,
            ParameterValue::SearchString { .. } => ParameterType::SearchString,
            ParameterValue::SortStrings(_) => ParameterType::SortStrings,
            ParameterValue::IntegerRange { .. } => ParameterType::IntegerRange,
            ParameterValue::Integer(_) => ParameterType::Integer,
            ParameterValue::Boolean(_) => ParameterType::Boolean,
        }
    }
}

/// Runtime state of a parameter.
///
/// A failing rule may still leave a value behind (for example a truncated
/// search term) so callers can inspect best-effort data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterState {
    /// Set once a rule has populated a usable value.
    pub parsed: bool,
    /// Value written by the last rule run, if any.
    pub value: Option<ParameterValue>,
}

/// A registered parameter: its spec plus post-parse state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    spec: ParameterSpec,
    state: ParameterState,
}

impl Parameter {
    /// Creates an unparsed parameter from a spec.
    pub fn new(spec: ParameterSpec) -> Self {
        Self {
            spec,
            state: ParameterState::default(),
        }
    }

    /// Interprets one raw value according to the parameter's type.
    ///
    /// Each call overwrites the previous state of this parameter.
    pub fn parse(&mut self, raw: &str) -> Result<()> {
        trace!(parameter = %self.spec.name, raw, "parsing parameter value");

        self.state = ParameterState::default();
        let name = self.spec.name.as_str();

        match &self.spec.kind {
            ParameterKind::Strings(rule) => rules::strings::parse(name, rule, raw, &mut self.state),
            ParameterKind::SearchString(rule) => {
                rules::search::parse(name, rule, raw, &mut self.state)
            }
            ParameterKind::SortStrings(rule) => {
                rules::sort::parse(name, rule, raw, &mut self.state)
            }
            ParameterKind::IntegerRange(rule) => {
                rules::range::parse(name, rule, raw, &mut self.state)
            }
            ParameterKind::Integer(rule) => rules::integer::parse(name, rule, raw, &mut self.state),
            ParameterKind::Boolean => rules::boolean::parse(name, raw, &mut self.state),
        }
    }

    /// Clears all runtime state.
    pub fn reset(&mut self) {
        self.state = ParameterState::default();
    }

    /// Returns the parameter's spec.
    pub fn spec(&self) -> &ParameterSpec {
        &self.spec
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Returns the parameter type.
    pub fn param_type(&self) -> ParameterType {
        self.spec.param_type()
    }

    /// Returns true once a rule has populated a usable value.
    pub fn is_parsed(&self) -> bool {
        self.state.parsed
    }

    /// Returns the current value, including partial values left by a failed rule.
    pub fn value(&self) -> Option<&ParameterValue> {
        self.state.value.as_ref()
    }

    /// Returns the runtime state.
    pub fn state(&self) -> &ParameterState {
        &self.state
    }

    /// Returns the integer value, or the configured default if never parsed.
    ///
    /// Returns `None` for non-integer parameters.
    pub fn int_value(&self) -> Option<i64> {
        match (&self.spec.kind, &self.state.value) {
            (ParameterKind::Integer(_), Some(ParameterValue::Integer(value)))
                if self.state.parsed =>
            {
                Some(*value)
            }
            (ParameterKind::Integer(rule), _) => Some(rule.default_value),
            _ => None,
        }
    }
}
