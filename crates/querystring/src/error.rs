//! Error types for query string parsing.
//!
//! [`ParseError`] covers everything that can go wrong while parsing a query
//! string or reading values back out of a [`Parser`](crate::Parser).
//! [`LoaderError`] covers loading parameter definitions from configuration.
//!
//! | Category | Variants | Effect |
//! |----------|----------|--------|
//! | Configuration | `NoParameters` | always fatal to the call |
//! | Structural input | `NoQueryString`, `InvalidKeyName` | aborts the whole parse |
//! | Field validation | `InvalidRange`, `InvalidInteger`, `InvalidBoolean`, `StringTooLong`, `StringTooShort` | aborts the parse, partial state stays set |
//! | Lookup | `ParameterNotFound`, `TypeMismatch` | returned by typed getters |

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::ParameterType;

/// Result alias defaulting to [`ParseError`].
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Errors raised while parsing a query string or reading parsed values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parser has no registered parameters.
    #[error("no parameters to parse")]
    NoParameters,

    /// The input was empty, or carried a query separator with nothing after it.
    #[error("no query string to parse")]
    NoQueryString,

    /// An incoming key does not equal its own sanitized form.
    #[error("invalid key name '{key}'")]
    InvalidKeyName { key: String },

    /// No parameter is registered under the requested name.
    #[error("could not find parameter '{name}'")]
    ParameterNotFound { name: String },

    /// A typed lookup was made against a parameter of another type.
    #[error("invalid parameter type for parameter '{name}' (expected {expected}, found {actual})")]
    TypeMismatch {
        name: String,
        expected: ParameterType,
        actual: ParameterType,
    },

    /// A range value did not contain the range separator.
    #[error("invalid range value '{value}' for parameter '{name}'")]
    InvalidRange { name: String, value: String },

    /// A value that must be a base-10 integer was not.
    #[error("invalid integer value '{value}' for parameter '{name}'")]
    InvalidInteger { name: String, value: String },

    /// A boolean value was not one of `true`, `t`, `false`, `f`.
    #[error("parameter '{name}' has unrecognized value ('{value}')")]
    InvalidBoolean { name: String, value: String },

    /// A search string exceeded its maximum length and was truncated.
    #[error("invalid length ({length}) for parameter '{name}' (max {max})")]
    StringTooLong {
        name: String,
        length: usize,
        max: usize,
    },

    /// A search string was shorter than its minimum length.
    #[error("invalid length ({length}) for parameter '{name}' (min {min})")]
    StringTooShort {
        name: String,
        length: usize,
        min: usize,
    },
}

impl ParseError {
    /// Returns true for per-field validation errors.
    ///
    /// After one of these the offending parameter may still hold partial
    /// state (for example a truncated search term).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ParseError::InvalidRange { .. }
                | ParseError::InvalidInteger { .. }
                | ParseError::InvalidBoolean { .. }
                | ParseError::StringTooLong { .. }
                | ParseError::StringTooShort { .. }
        )
    }

    /// Returns true for the string-length-out-of-bounds kind.
    pub fn is_length_violation(&self) -> bool {
        matches!(
            self,
            ParseError::StringTooLong { .. } | ParseError::StringTooShort { .. }
        )
    }
}

/// Errors raised while loading parameter definitions.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The configuration file could not be read.
    #[error("failed to load config from '{path}': {message}")]
    ConfigLoadFailed { path: String, message: String },

    /// The configuration was not valid JSON or did not match the schema.
    #[error("invalid parameter definitions: {message}")]
    InvalidJson { message: String },

    /// A parameter name is not in sanitized form.
    #[error("parameter name '{name}' is not sanitized (expected '{sanitized}')")]
    InvalidParameterName { name: String, sanitized: String },

    /// Two definitions share a name.
    #[error("duplicate parameter definition '{name}'")]
    DuplicateParameter { name: String },

    /// The parser configuration failed validation.
    #[error("invalid parser configuration: {message}")]
    InvalidConfig { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_messages() {
        let err = ParseError::StringTooLong {
            name: "q".to_string(),
            length: 5,
            max: 3,
        };
        assert_eq!(err.to_string(), "invalid length (5) for parameter 'q' (max 3)");

        let err = ParseError::StringTooShort {
            name: "q".to_string(),
            length: 2,
            min: 3,
        };
        assert_eq!(err.to_string(), "invalid length (2) for parameter 'q' (min 3)");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = ParseError::TypeMismatch {
            name: "sort".to_string(),
            expected: ParameterType::Integer,
            actual: ParameterType::SortStrings,
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter type for parameter 'sort' (expected integer, found sort_strings)"
        );
    }

    #[test]
    fn test_classification() {
        assert!(!ParseError::NoParameters.is_validation());
        assert!(
            ParseError::InvalidBoolean {
                name: "active".to_string(),
                value: "maybe".to_string(),
            }
            .is_validation()
        );
        assert!(
            ParseError::StringTooShort {
                name: "q".to_string(),
                length: 0,
                min: 1,
            }
            .is_length_violation()
        );
        assert!(!ParseError::NoQueryString.is_length_violation());
    }
}
