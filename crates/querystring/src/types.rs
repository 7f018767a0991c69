//! Core enumerations for query string parameters.
//!
//! This module defines the closed sets that drive parsing and rendering:
//! the parameter type, the output condition, the wildcard match position,
//! and the sort direction of a parsed sort item.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The type of a registered parameter.
///
/// Each variant selects one parsing rule and one clause shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    /// A delimited list of strings (e.g., `interest=friends,soccer`).
    Strings,
    /// A free-text term with optional leading/trailing wildcards (e.g., `q=*smith*`).
    SearchString,
    /// A delimited list of sort keys with a direction modifier (e.g., `sort=name,-age`).
    SortStrings,
    /// A bounded integer range (e.g., `age=18-30`, `age=-30`, `age=18-`).
    IntegerRange,
    /// A clamped integer (e.g., `offset=50`).
    Integer,
    /// A boolean (`true`/`t`/`false`/`f`, case-insensitive).
    Boolean,
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterType::Strings => write!(f, "strings"),
            ParameterType::SearchString => write!(f, "search_string"),
            ParameterType::SortStrings => write!(f, "sort_strings"),
            ParameterType::IntegerRange => write!(f, "integer_range"),
            ParameterType::Integer => write!(f, "integer"),
            ParameterType::Boolean => write!(f, "boolean"),
        }
    }
}

impl FromStr for ParameterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strings" => Ok(ParameterType::Strings),
            "search_string" => Ok(ParameterType::SearchString),
            "sort_strings" => Ok(ParameterType::SortStrings),
            "integer_range" => Ok(ParameterType::IntegerRange),
            "integer" => Ok(ParameterType::Integer),
            "boolean" => Ok(ParameterType::Boolean),
            _ => Err(format!("unknown parameter type: {}", s)),
        }
    }
}

/// Controls how a parameter's clauses are emitted in the rendered query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// The clause is required (`+` prefix).
    Must,
    /// The clause is optional (no prefix).
    #[default]
    Should,
    /// The clause must not match (`-` prefix).
    Not,
}

impl Condition {
    /// Returns the conditional modifier written in front of each clause.
    pub fn prefix(&self) -> &'static str {
        match self {
            Condition::Must => "+",
            Condition::Should => "",
            Condition::Not => "-",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Must => write!(f, "must"),
            Condition::Should => write!(f, "should"),
            Condition::Not => write!(f, "not"),
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "must" => Ok(Condition::Must),
            "should" => Ok(Condition::Should),
            "not" => Ok(Condition::Not),
            _ => Err(format!("unknown condition: {}", s)),
        }
    }
}

/// Where the wildcard appeared in a raw search string.
///
/// The naming follows the literal term: a wildcard only at the start
/// (`*beta`) means the term is a suffix of the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPosition {
    /// Wildcard only at the end (`alfa*`): the term is a prefix.
    Prefix,
    /// Wildcard only at the start (`*beta`): the term is a suffix.
    Suffix,
    /// Wildcards at both ends, or at neither.
    #[default]
    Surrounded,
}

impl MatchPosition {
    /// Derives the position from the presence of leading/trailing wildcards.
    pub fn from_wildcards(leading: bool, trailing: bool) -> Self {
        match (leading, trailing) {
            (true, false) => MatchPosition::Suffix,
            (false, true) => MatchPosition::Prefix,
            _ => MatchPosition::Surrounded,
        }
    }
}

impl fmt::Display for MatchPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPosition::Prefix => write!(f, "prefix"),
            MatchPosition::Suffix => write!(f, "suffix"),
            MatchPosition::Surrounded => write!(f, "surrounded"),
        }
    }
}

impl FromStr for MatchPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "prefix" => Ok(MatchPosition::Prefix),
            "suffix" => Ok(MatchPosition::Suffix),
            "surrounded" => Ok(MatchPosition::Surrounded),
            _ => Err(format!("unknown match position: {}", s)),
        }
    }
}

/// Sort direction of a parsed sort item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending (no modifier).
    #[default]
    Ascending,
    /// Descending (sort modifier present).
    Descending,
}

/// One field of a parsed sort parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortItem {
    /// The field to sort by, modifier stripped.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortItem {
    /// Creates an ascending sort item.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Creates a descending sort item.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Returns true if the item sorts ascending.
    pub fn is_ascending(&self) -> bool {
        self.direction == SortDirection::Ascending
    }
}
