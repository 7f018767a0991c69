//! Parameter definitions.
//!
//! A [`ParameterSpec`] declares one recognized query key: its canonical
//! name, the field it renders to, whether and how it is rendered, and a
//! [`ParameterKind`] carrying the configuration of exactly one parameter
//! type. Specs are built once when the registry is set up and never
//! mutated afterwards.
//!
//! # Example
//!
//! ```
//! use helios_querystring::{Condition, ParameterKind, ParameterSpec, SortStringsRule};
//!
//! let villages = ParameterSpec::strings("villages")
//!     .with_output_name("profile.villages")
//!     .with_condition(Condition::Must);
//!
//! let sort = ParameterSpec::with_kind(
//!     "sort",
//!     ParameterKind::SortStrings(
//!         SortStringsRule::default().with_allowed_values(["age", "name", "last_online"]),
//!     ),
//! )
//! .exclude_from_output();
//!
//! assert_eq!(villages.output_name(), "profile.villages");
//! assert!(!sort.include_in_output);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{
    LIST_SEPARATOR, MAX_LENGTH, MIN_LENGTH, ParserConfig, RANGE_SEPARATOR, SORT_MODIFIER, WILDCARD,
};
use crate::types::{Condition, ParameterType};

/// Declaration of one recognized query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Canonical key name. Must already be in sanitized form.
    pub name: String,

    /// Field name used in the rendered query. Defaults to `name`; an empty
    /// string renders search strings as unqualified free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_name: Option<String>,

    /// Whether the parameter contributes to the rendered query.
    ///
    /// Pagination and sorting parameters are typically excluded.
    #[serde(default = "default_include_in_output")]
    pub include_in_output: bool,

    /// Conditional modifier applied to each rendered clause.
    #[serde(default)]
    pub output_condition: Condition,

    /// Type and type-specific configuration.
    #[serde(flatten)]
    pub kind: ParameterKind,
}

fn default_include_in_output() -> bool {
    true
}

impl ParameterSpec {
    /// Creates a spec of the given type with registry-wide defaults.
    pub fn new(name: impl Into<String>, param_type: ParameterType) -> Self {
        Self::with_kind(name, ParameterKind::from_type(param_type, &ParserConfig::default()))
    }

    /// Creates a spec from a fully configured kind.
    pub fn with_kind(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            output_name: None,
            include_in_output: true,
            output_condition: Condition::Should,
            kind,
        }
    }

    /// Creates a `Strings` spec with default configuration.
    pub fn strings(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::Strings)
    }

    /// Creates a `SearchString` spec with default configuration.
    pub fn search_string(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::SearchString)
    }

    /// Creates a `SortStrings` spec with default configuration.
    pub fn sort_strings(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::SortStrings)
    }

    /// Creates an `IntegerRange` spec with default configuration.
    pub fn integer_range(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::IntegerRange)
    }

    /// Creates an `Integer` spec with default configuration.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::Integer)
    }

    /// Creates a `Boolean` spec.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ParameterType::Boolean)
    }

    /// Sets the output field name.
    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = Some(output_name.into());
        self
    }

    /// Sets the output condition.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.output_condition = condition;
        self
    }

    /// Excludes the parameter from the rendered query.
    pub fn exclude_from_output(mut self) -> Self {
        self.include_in_output = false;
        self
    }

    /// Returns the field name used in the rendered query.
    pub fn output_name(&self) -> &str {
        self.output_name.as_deref().unwrap_or(&self.name)
    }

    /// Returns the parameter type.
    pub fn param_type(&self) -> ParameterType {
        self.kind.param_type()
    }
}

/// Type of a parameter together with its type-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterKind {
    /// Delimited list of strings.
    Strings(StringsRule),
    /// Wildcarded free-text term.
    SearchString(SearchStringRule),
    /// Delimited list of sort keys.
    SortStrings(SortStringsRule),
    /// Bounded integer range.
    IntegerRange(IntegerRangeRule),
    /// Clamped integer.
    Integer(IntegerRule),
    /// Boolean flag.
    Boolean,
}

impl ParameterKind {
    /// Builds a kind of the given type using the defaults in `config`.
    pub fn from_type(param_type: ParameterType, config: &ParserConfig) -> Self {
        match param_type {
            ParameterType::Strings => ParameterKind::Strings(StringsRule::new(config)),
            ParameterType::SearchString => {
                ParameterKind::SearchString(SearchStringRule::new(config))
            }
            ParameterType::SortStrings => ParameterKind::SortStrings(SortStringsRule::new(config)),
            ParameterType::IntegerRange => {
                ParameterKind::IntegerRange(IntegerRangeRule::new(config))
            }
            ParameterType::Integer => ParameterKind::Integer(IntegerRule::default()),
            ParameterType::Boolean => ParameterKind::Boolean,
        }
    }

    /// Returns the parameter type this kind configures.
    pub fn param_type(&self) -> ParameterType {
        match self {
            ParameterKind::Strings(_) => ParameterType::Strings,
            ParameterKind::SearchString(_) => ParameterType::SearchString,
            ParameterKind::SortStrings(_) => ParameterType::SortStrings,
            ParameterKind::IntegerRange(_) => ParameterType::IntegerRange,
            ParameterKind::Integer(_) => ParameterType::Integer,
            ParameterKind::Boolean => ParameterType::Boolean,
        }
    }
}

/// Configuration of a `Strings` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsRule {
    /// Separator between list items.
    pub list_separator: char,
    /// Accepted tokens. Empty accepts anything.
    pub allowed_values: Vec<String>,
    /// Collapse repeated tokens to their first occurrence.
    pub deduplicate: bool,
}

impl StringsRule {
    /// Creates a rule with the defaults in `config`.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            list_separator: config.list_separator,
            allowed_values: Vec::new(),
            deduplicate: false,
        }
    }

    /// Restricts accepted tokens to `values`.
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Collapses repeated tokens.
    pub fn deduplicated(mut self) -> Self {
        self.deduplicate = true;
        self
    }
}

impl Default for StringsRule {
    fn default() -> Self {
        Self {
            list_separator: LIST_SEPARATOR,
            allowed_values: Vec::new(),
            deduplicate: false,
        }
    }
}

/// Configuration of a `SortStrings` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortStringsRule {
    /// Separator between sort keys.
    pub list_separator: char,
    /// Leading character marking a descending key.
    pub sort_modifier: char,
    /// Accepted field names (modifier stripped). Empty accepts anything.
    pub allowed_values: Vec<String>,
    /// Keep only the first occurrence of a field.
    pub deduplicate: bool,
}

impl SortStringsRule {
    /// Creates a rule with the defaults in `config`.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            list_separator: config.list_separator,
            sort_modifier: config.sort_modifier,
            allowed_values: Vec::new(),
            deduplicate: false,
        }
    }

    /// Restricts accepted fields to `values`.
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps only the first occurrence of a field.
    pub fn deduplicated(mut self) -> Self {
        self.deduplicate = true;
        self
    }
}

impl Default for SortStringsRule {
    fn default() -> Self {
        Self {
            list_separator: LIST_SEPARATOR,
            sort_modifier: SORT_MODIFIER,
            allowed_values: Vec::new(),
            deduplicate: false,
        }
    }
}

/// Configuration of an `IntegerRange` parameter.
///
/// `min_value`/`max_value` are the bounds used when a side of the raw range
/// is left empty (`age=-30`, `age=18-`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerRangeRule {
    /// Separator between the two bounds.
    pub range_separator: char,
    /// Lower bound used when the raw minimum is empty.
    pub min_value: i64,
    /// Upper bound used when the raw maximum is empty.
    pub max_value: i64,
}

impl IntegerRangeRule {
    /// Creates a rule with the defaults in `config`.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            range_separator: config.range_separator,
            min_value: 0,
            max_value: 0,
        }
    }

    /// Sets the default bounds.
    pub fn with_bounds(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }
}

impl Default for IntegerRangeRule {
    fn default() -> Self {
        Self {
            range_separator: RANGE_SEPARATOR,
            min_value: 0,
            max_value: 0,
        }
    }
}

/// Configuration of a `SearchString` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchStringRule {
    /// Wildcard character.
    pub wildcard: char,
    /// Minimum term length in characters.
    pub min_length: usize,
    /// Maximum term length in characters (0 disables the limit).
    pub max_length: usize,
}

impl SearchStringRule {
    /// Creates a rule with the defaults in `config`.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            wildcard: config.wildcard,
            min_length: config.min_length,
            max_length: config.max_length,
        }
    }

    /// Sets the length bounds.
    pub fn with_lengths(mut self, min_length: usize, max_length: usize) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }
}

impl Default for SearchStringRule {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

/// Configuration of an `Integer` parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerRule {
    /// Lower clamp bound.
    pub min_value: i64,
    /// Upper clamp bound (0 means unbounded).
    pub max_value: i64,
    /// Value reported when the key is absent from the input.
    pub default_value: i64,
}

impl IntegerRule {
    /// Sets the clamp bounds.
    pub fn with_bounds(mut self, min_value: i64, max_value: i64) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    /// Sets the default value.
    pub fn with_default(mut self, default_value: i64) -> Self {
        self.default_value = default_value;
        self
    }
}
