//! Query string parser.
//!
//! The [`Parser`] owns the parameter registry for one request. It splits a
//! raw query string into key/value pairs, rejects keys that are not in
//! sanitized form, routes each known key to its [`Parameter`], and exposes
//! typed accessors for the results.
//!
//! A parser is not meant to be shared between concurrent requests. Each
//! call to [`Parser::parse`] resets every parameter first, so reusing an
//! instance sequentially never leaks state from a previous input.
//!
//! # Example
//!
//! ```
//! use helios_querystring::{IntegerRule, ParameterKind, ParameterSpec, Parser};
//!
//! let mut parser = Parser::new();
//! parser.add_parameter(ParameterSpec::search_string("q"));
//! parser.add_parameter(
//!     ParameterSpec::with_kind(
//!         "size",
//!         ParameterKind::Integer(IntegerRule::default().with_bounds(50, 500).with_default(50)),
//!     )
//!     .exclude_from_output(),
//! );
//!
//! parser.parse("https://www.domain.com/search?q=alfa*").unwrap();
//! assert_eq!(parser.get_int_value("size").unwrap(), 50);
//! assert_eq!(parser.parsed_parameter_count(), 1);
//! ```

use std::collections::HashMap;

use tracing::{debug, debug_span, warn};

use crate::config::ParserConfig;
use crate::error::{ParseError, Result};
use crate::parameter::{Parameter, ParameterValue};
use crate::sanitize::{is_sanitized, sanitize_key};
use crate::serializer::QuerySerializer;
use crate::spec::ParameterSpec;
use crate::types::{MatchPosition, ParameterType, SortItem};

/// Parses raw query strings against a registry of parameters.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
    /// Parameters in registration order.
    parameters: Vec<Parameter>,
    /// Canonical name to position in `parameters`.
    index: HashMap<String, usize>,
}

impl Parser {
    /// Creates a parser with default separators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            parameters: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a parameter and returns the parser, for chained setup.
    pub fn with_parameter(mut self, spec: ParameterSpec) -> Self {
        self.add_parameter(spec);
        self
    }

    /// Registers a parameter.
    ///
    /// `spec.name` must already be in sanitized form. Registering a name
    /// twice replaces the earlier spec and keeps its position.
    pub fn add_parameter(&mut self, spec: ParameterSpec) {
        debug_assert_eq!(
            spec.name,
            sanitize_key(&spec.name),
            "parameter names must be registered in sanitized form"
        );

        match self.index.get(&spec.name) {
            Some(&position) => {
                debug!(parameter = %spec.name, "replacing registered parameter");
                self.parameters[position] = Parameter::new(spec);
            }
            None => {
                self.index.insert(spec.name.clone(), self.parameters.len());
                self.parameters.push(Parameter::new(spec));
            }
        }
    }

    /// Parses a query string, updating every matched parameter.
    ///
    /// Anything up to and including the first query separator is treated
    /// as a path prefix. Pairs without a key/value separator and unknown
    /// keys are skipped. An unsanitized key or a failing parameter rule
    /// aborts the parse; the failing parameter keeps any partial state.
    pub fn parse(&mut self, input: &str) -> Result<()> {
        let span = debug_span!(
            "parse_query_string",
            input_len = input.len(),
            parameters = self.parameters.len()
        );
        let _guard = span.enter();

        if self.parameters.is_empty() {
            return Err(ParseError::NoParameters);
        }

        self.reset();

        let query = match input.split_once(self.config.query_separator) {
            Some((_, query)) => query,
            None => input,
        };

        if query.is_empty() {
            return Err(ParseError::NoQueryString);
        }

        for pair in query.split(self.config.parameter_separator) {
            let Some((key, value)) = pair.split_once(self.config.key_value_separator) else {
                debug!(pair, "skipping malformed pair");
                continue;
            };

            if !is_sanitized(key) {
                warn!(key, "rejecting unsanitized key");
                return Err(ParseError::InvalidKeyName {
                    key: key.to_string(),
                });
            }

            let Some(&position) = self.index.get(key) else {
                debug!(key, "skipping unknown parameter");
                continue;
            };

            if let Err(err) = self.parameters[position].parse(value) {
                warn!(key, error = %err, "parameter validation failed");
                return Err(err);
            }
        }

        debug!(parsed = self.parsed_parameter_count(), "parsed query string");
        Ok(())
    }

    /// Clears the runtime state of every parameter.
    pub fn reset(&mut self) {
        self.parameters.iter_mut().for_each(Parameter::reset);
    }

    /// Returns the integer value of an `Integer` parameter.
    ///
    /// Falls back to the configured default when the key was absent.
    pub fn get_int_value(&self, name: &str) -> Result<i64> {
        let parameter = self.typed_parameter(name, ParameterType::Integer)?;
        parameter
            .int_value()
            .ok_or_else(|| ParseError::TypeMismatch {
                name: name.to_string(),
                expected: ParameterType::Integer,
                actual: parameter.param_type(),
            })
    }

    /// Returns the value of a `Boolean` parameter, or `None` if absent.
    pub fn get_bool_value(&self, name: &str) -> Result<Option<bool>> {
        let parameter = self.typed_parameter(name, ParameterType::Boolean)?;
        Ok(match parsed_value(parameter) {
            Some(ParameterValue::Boolean(value)) => Some(*value),
            _ => None,
        })
    }

    /// Returns the items of a `Strings` parameter, or `None` if absent.
    pub fn get_strings_value(&self, name: &str) -> Result<Option<&[String]>> {
        let parameter = self.typed_parameter(name, ParameterType::Strings)?;
        Ok(match parsed_value(parameter) {
            Some(ParameterValue::Strings(items)) => Some(items.as_slice()),
            _ => None,
        })
    }

    /// Returns the term and wildcard position of a `SearchString` parameter.
    pub fn get_search_string(&self, name: &str) -> Result<Option<(&str, MatchPosition)>> {
        let parameter = self.typed_parameter(name, ParameterType::SearchString)?;
        Ok(match parsed_value(parameter) {
            Some(ParameterValue::SearchString { term, position }) => {
                Some((term.as_str(), *position))
            }
            _ => None,
        })
    }

    /// Returns the `(min, max)` bounds of an `IntegerRange` parameter.
    pub fn get_range(&self, name: &str) -> Result<Option<(i64, i64)>> {
        let parameter = self.typed_parameter(name, ParameterType::IntegerRange)?;
        Ok(match parsed_value(parameter) {
            Some(ParameterValue::IntegerRange { min, max }) => Some((*min, *max)),
            _ => None,
        })
    }

    /// Returns the items of a `SortStrings` parameter, or `None` if absent.
    pub fn get_sort_items(&self, name: &str) -> Result<Option<&[SortItem]>> {
        let parameter = self.typed_parameter(name, ParameterType::SortStrings)?;
        Ok(match parsed_value(parameter) {
            Some(ParameterValue::SortStrings(items)) => Some(items.as_slice()),
            _ => None,
        })
    }

    /// Counts registered parameters that were parsed.
    pub fn parsed_parameter_count(&self) -> usize {
        self.parameters.iter().filter(|p| p.is_parsed()).count()
    }

    /// Renders the parsed parameters as a full-text query string.
    pub fn to_query_string(&self) -> String {
        QuerySerializer::new(self).query()
    }

    /// Renders a `SortStrings` parameter as a sort-key sequence.
    pub fn to_sort_slice(&self, name: &str) -> Result<Vec<String>> {
        QuerySerializer::new(self).sort_slice(name)
    }

    /// Returns a registered parameter by canonical name.
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.index.get(name).map(|&position| &self.parameters[position])
    }

    /// Returns registered parameters in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    /// Returns the number of registered parameters.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns true if no parameters are registered.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Returns the parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Looks up a parameter and checks its type.
    pub(crate) fn typed_parameter(&self, name: &str, expected: ParameterType) -> Result<&Parameter> {
        let parameter = self
            .parameter(name)
            .ok_or_else(|| ParseError::ParameterNotFound {
                name: name.to_string(),
            })?;

        if parameter.param_type() != expected {
            return Err(ParseError::TypeMismatch {
                name: name.to_string(),
                expected,
                actual: parameter.param_type(),
            });
        }

        Ok(parameter)
    }
}

fn parsed_value(parameter: &Parameter) -> Option<&ParameterValue> {
    if parameter.is_parsed() {
        parameter.value()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{IntegerRangeRule, IntegerRule, ParameterKind, SearchStringRule};

    fn interest_parser() -> Parser {
        Parser::new()
            .with_parameter(ParameterSpec::strings("interest").with_output_name("profile.interest"))
    }

    #[test]
    fn test_no_parameters() {
        let mut parser = Parser::new();
        let err = parser
            .parse("http://www.domain.com/search?interest=alfa,beta,gamma,delta")
            .unwrap_err();
        assert_eq!(err, ParseError::NoParameters);
    }

    #[test]
    fn test_empty_query() {
        let mut parser = interest_parser();
        assert_eq!(
            parser.parse("http://www.domain.com/search?"),
            Err(ParseError::NoQueryString)
        );
        assert_eq!(parser.parse(""), Err(ParseError::NoQueryString));
    }

    #[test]
    fn test_without_query_separator() {
        let mut parser = interest_parser();
        parser.parse("http://www.domain.com/search").unwrap();
        assert_eq!(parser.parsed_parameter_count(), 0);

        parser.parse("interest=alfa,beta").unwrap();
        assert_eq!(
            parser.get_strings_value("interest").unwrap(),
            Some(&["alfa".to_string(), "beta".to_string()][..])
        );
    }

    #[test]
    fn test_strings_parameter() {
        let mut parser = interest_parser();
        parser
            .parse("http://www.domain.com/search?interest=alfa,beta,gamma,delta")
            .unwrap();

        let items = parser.get_strings_value("interest").unwrap().unwrap();
        assert_eq!(items, ["alfa", "beta", "gamma", "delta"]);
    }

    #[test]
    fn test_empty_strings_parameter() {
        let mut parser = interest_parser();
        parser.parse("http://www.domain.com/search?interest=").unwrap();

        let items = parser.get_strings_value("interest").unwrap().unwrap();
        assert!(items.is_empty());
        assert_eq!(parser.parsed_parameter_count(), 1);
    }

    #[test]
    fn test_integer_range_parameter() {
        let mut parser = Parser::new().with_parameter(ParameterSpec::with_kind(
            "age",
            ParameterKind::IntegerRange(IntegerRangeRule::default().with_bounds(10, 99)),
        ));

        parser.parse("http://www.domain.com/search?age=15-35").unwrap();
        assert_eq!(parser.get_range("age").unwrap(), Some((15, 35)));

        parser.parse("http://www.domain.com/search?age=45-35").unwrap();
        assert_eq!(parser.get_range("age").unwrap(), Some((35, 45)));

        parser.parse("http://www.domain.com/search?age=45-").unwrap();
        assert_eq!(parser.get_range("age").unwrap(), Some((45, 99)));
    }

    #[test]
    fn test_search_string_parameter() {
        let mut parser = Parser::new().with_parameter(ParameterSpec::with_kind(
            "q",
            ParameterKind::SearchString(SearchStringRule::default().with_lengths(1, 4)),
        ));

        parser.parse("https://www.domain.com/search?q=*beta*").unwrap();
        assert_eq!(
            parser.get_search_string("q").unwrap(),
            Some(("beta", MatchPosition::Surrounded))
        );
    }

    #[test]
    fn test_integer_parameter_defaults() {
        let mut parser = Parser::new()
            .with_parameter(ParameterSpec::search_string("q"))
            .with_parameter(
                ParameterSpec::with_kind(
                    "offset",
                    ParameterKind::Integer(IntegerRule::default().with_bounds(0, 1000)),
                )
                .exclude_from_output(),
            )
            .with_parameter(
                ParameterSpec::with_kind(
                    "size",
                    ParameterKind::Integer(
                        IntegerRule::default().with_bounds(50, 500).with_default(50),
                    ),
                )
                .exclude_from_output(),
            );

        parser
            .parse("https://www.domain.com/search?q=alfa*&offset=1&size=50")
            .unwrap();
        assert_eq!(parser.get_int_value("size").unwrap(), 50);
        assert_eq!(parser.get_int_value("offset").unwrap(), 1);

        parser.parse("https://www.domain.com/search?q=alfa*").unwrap();
        assert_eq!(parser.get_int_value("size").unwrap(), 50);
        assert_eq!(parser.get_int_value("offset").unwrap(), 0);
    }

    #[test]
    fn test_get_int_value_errors() {
        let mut parser = interest_parser();
        parser.add_parameter(ParameterSpec::integer("offset"));

        assert_eq!(
            parser.get_int_value("missing"),
            Err(ParseError::ParameterNotFound {
                name: "missing".to_string()
            })
        );
        assert!(matches!(
            parser.get_int_value("interest"),
            Err(ParseError::TypeMismatch {
                expected: ParameterType::Integer,
                actual: ParameterType::Strings,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_key_names() {
        let mut parser = interest_parser();
        for query in [
            "?Interest=alfa",
            "?interest'--=alfa",
            "?inte%72est=alfa",
            "?interest =alfa",
        ] {
            assert!(
                matches!(parser.parse(query), Err(ParseError::InvalidKeyName { .. })),
                "query {:?}",
                query
            );
        }
    }

    #[test]
    fn test_unknown_and_malformed_pairs_are_skipped() {
        let mut parser = interest_parser();
        parser
            .parse("?utm_source=mail&flag&interest=alfa&&tracking_id=42")
            .unwrap();
        assert_eq!(parser.parsed_parameter_count(), 1);
    }

    #[test]
    fn test_value_may_contain_separators() {
        let mut parser = Parser::new().with_parameter(ParameterSpec::search_string("q"));
        parser.parse("/search?q=a=b?c").unwrap();
        assert_eq!(
            parser.get_search_string("q").unwrap(),
            Some(("a=b?c", MatchPosition::Surrounded))
        );
    }

    #[test]
    fn test_rule_error_aborts_parse() {
        let mut parser = interest_parser().with_parameter(ParameterSpec::boolean("active"));
        let err = parser.parse("?active=maybe&interest=alfa").unwrap_err();
        assert!(matches!(err, ParseError::InvalidBoolean { .. }));
        assert_eq!(parser.parsed_parameter_count(), 0);
    }

    #[test]
    fn test_partial_state_survives_validation_error() {
        let mut parser = Parser::new().with_parameter(ParameterSpec::with_kind(
            "q",
            ParameterKind::SearchString(SearchStringRule::default().with_lengths(1, 3)),
        ));
        let err = parser.parse("?q=*gamma*").unwrap_err();
        assert!(err.is_length_violation());
        assert_eq!(
            parser.get_search_string("q").unwrap(),
            Some(("gam", MatchPosition::Surrounded))
        );
    }

    #[test]
    fn test_reparse_does_not_leak() {
        let mut parser = interest_parser().with_parameter(ParameterSpec::boolean("active"));
        parser.parse("?interest=alfa&active=t").unwrap();
        assert_eq!(parser.parsed_parameter_count(), 2);

        parser.parse("?active=f").unwrap();
        assert_eq!(parser.parsed_parameter_count(), 1);
        assert_eq!(parser.get_strings_value("interest").unwrap(), None);
        assert_eq!(parser.get_bool_value("active").unwrap(), Some(false));
    }

    #[test]
    fn test_last_occurrence_wins() {
        let mut parser = interest_parser();
        parser.parse("?interest=alfa&interest=beta").unwrap();
        assert_eq!(
            parser.get_strings_value("interest").unwrap().unwrap(),
            ["beta"]
        );
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut parser = interest_parser().with_parameter(ParameterSpec::boolean("active"));
        parser.add_parameter(ParameterSpec::integer("interest"));

        assert_eq!(parser.len(), 2);
        let names: Vec<_> = parser.parameters().map(|p| p.name()).collect();
        assert_eq!(names, vec!["interest", "active"]);
        assert_eq!(
            parser.parameter("interest").unwrap().param_type(),
            ParameterType::Integer
        );
    }

    #[test]
    fn test_custom_separators() {
        let config = ParserConfig {
            parameter_separator: ';',
            key_value_separator: ':',
            ..Default::default()
        };
        let mut parser = Parser::with_config(config)
            .with_parameter(ParameterSpec::boolean("active"))
            .with_parameter(ParameterSpec::integer("offset"));

        parser.parse("/search?active:true;offset:20").unwrap();
        assert_eq!(parser.get_bool_value("active").unwrap(), Some(true));
        assert_eq!(parser.get_int_value("offset").unwrap(), 20);
    }
}
