//! Parser configuration.
//!
//! [`ParserConfig`] carries the separators used to split a request's query
//! string and the registry-wide defaults applied when parameter rules are
//! built. It supports programmatic construction, environment variable
//! overrides, and serde (de)serialization alongside parameter definitions.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `QUERYSTRING_QUERY_SEPARATOR` | `?` | Separates the path prefix from the query |
//! | `QUERYSTRING_PARAMETER_SEPARATOR` | `&` | Separates key/value pairs |
//! | `QUERYSTRING_KEY_VALUE_SEPARATOR` | `=` | Separates a key from its value |
//! | `QUERYSTRING_LIST_SEPARATOR` | `,` | Default list separator |
//! | `QUERYSTRING_RANGE_SEPARATOR` | `-` | Default range separator |
//! | `QUERYSTRING_SORT_MODIFIER` | `-` | Default descending sort modifier |
//! | `QUERYSTRING_WILDCARD` | `*` | Default search wildcard |
//! | `QUERYSTRING_MIN_LENGTH` | 1 | Default minimum search string length |
//! | `QUERYSTRING_MAX_LENGTH` | 100 | Default maximum search string length (0 = unbounded) |
//!
//! # Example
//!
//! ```rust
//! use helios_querystring::ParserConfig;
//!
//! let config = ParserConfig {
//!     parameter_separator: ';',
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

use clap::Parser;
use serde::{Deserialize, Serialize};

/// Default query separator.
pub const QUERY_SEPARATOR: char = '?';
/// Default parameter separator.
pub const PARAMETER_SEPARATOR: char = '&';
/// Default key/value separator.
pub const KEY_VALUE_SEPARATOR: char = '=';
/// Default list separator.
pub const LIST_SEPARATOR: char = ',';
/// Default range separator.
pub const RANGE_SEPARATOR: char = '-';
/// Default sort modifier (marks a descending sort key).
pub const SORT_MODIFIER: char = '-';
/// Default wildcard character.
pub const WILDCARD: char = '*';
/// Default minimum search string length.
pub const MIN_LENGTH: usize = 1;
/// Default maximum search string length.
pub const MAX_LENGTH: usize = 100;

/// Separators and registry-wide defaults for a [`Parser`](crate::Parser).
#[derive(Debug, Clone, PartialEq, Eq, Parser, Serialize, Deserialize)]
#[command(name = "querystring")]
#[command(about = "Query string parser configuration")]
#[serde(default)]
pub struct ParserConfig {
    /// Separates the path prefix from the query.
    #[arg(long, env = "QUERYSTRING_QUERY_SEPARATOR", default_value = "?")]
    pub query_separator: char,

    /// Separates key/value pairs.
    #[arg(long, env = "QUERYSTRING_PARAMETER_SEPARATOR", default_value = "&")]
    pub parameter_separator: char,

    /// Separates a key from its value.
    #[arg(long, env = "QUERYSTRING_KEY_VALUE_SEPARATOR", default_value = "=")]
    pub key_value_separator: char,

    /// Default list separator for list-typed parameters.
    #[arg(long, env = "QUERYSTRING_LIST_SEPARATOR", default_value = ",")]
    pub list_separator: char,

    /// Default range separator for integer ranges.
    #[arg(long, env = "QUERYSTRING_RANGE_SEPARATOR", default_value = "-")]
    pub range_separator: char,

    /// Default sort modifier for sort parameters.
    #[arg(long, env = "QUERYSTRING_SORT_MODIFIER", default_value = "-")]
    pub sort_modifier: char,

    /// Default wildcard for search strings.
    #[arg(long, env = "QUERYSTRING_WILDCARD", default_value = "*")]
    pub wildcard: char,

    /// Default minimum search string length.
    #[arg(long, env = "QUERYSTRING_MIN_LENGTH", default_value = "1")]
    pub min_length: usize,

    /// Default maximum search string length (0 disables the limit).
    #[arg(long, env = "QUERYSTRING_MAX_LENGTH", default_value = "100")]
    pub max_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            query_separator: QUERY_SEPARATOR,
            parameter_separator: PARAMETER_SEPARATOR,
            key_value_separator: KEY_VALUE_SEPARATOR,
            list_separator: LIST_SEPARATOR,
            range_separator: RANGE_SEPARATOR,
            sort_modifier: SORT_MODIFIER,
            wildcard: WILDCARD,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Creates a configuration from environment variables.
    ///
    /// Command line arguments are never consulted. Any unparsable variable
    /// makes the whole configuration fall back to defaults.
    pub fn from_env() -> Self {
        Self::try_parse_from(["querystring"]).unwrap_or_default()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.query_separator == self.parameter_separator {
            errors.push("Query separator cannot equal parameter separator".to_string());
        }

        if self.query_separator == self.key_value_separator {
            errors.push("Query separator cannot equal key/value separator".to_string());
        }

        if self.parameter_separator == self.key_value_separator {
            errors.push("Parameter separator cannot equal key/value separator".to_string());
        }

        if self.max_length > 0 && self.min_length > self.max_length {
            errors.push("Min length cannot exceed max length".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
