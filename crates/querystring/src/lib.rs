//! Helios Query String Parser
//!
//! This crate interprets the flat key/value query string of a search request
//! into strongly-typed, bounds-checked parameter values, and renders the
//! validated subset into the query syntax of a full-text search engine:
//! field-qualified clauses, wildcard terms, numeric ranges, and a sort-key
//! sequence.
//!
//! # Architecture
//!
//! - [`types`] - Parameter type, output condition, wildcard position, sort items
//! - [`spec`] - Immutable parameter definitions with per-type configuration
//! - [`parameter`] - Registered parameters, runtime state, and per-type rules
//! - [`parser`] - Query string splitting, key sanitization, and dispatch
//! - [`serializer`] - Rendering to the search engine's query syntax
//! - [`sanitize`] - Key name normalization
//! - [`config`] - Separators and registry-wide defaults
//! - [`loader`] - Parameter definitions from JSON configuration
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ```
//! use helios_querystring::{
//!     Condition, IntegerRangeRule, ParameterKind, ParameterSpec, Parser,
//! };
//!
//! let mut parser = Parser::new()
//!     .with_parameter(
//!         ParameterSpec::search_string("q")
//!             .with_output_name("")
//!             .with_condition(Condition::Must),
//!     )
//!     .with_parameter(ParameterSpec::boolean("active").with_condition(Condition::Must))
//!     .with_parameter(
//!         ParameterSpec::with_kind(
//!             "age",
//!             ParameterKind::IntegerRange(IntegerRangeRule::default().with_bounds(0, 99)),
//!         )
//!         .with_condition(Condition::Must),
//!     )
//!     .with_parameter(
//!         ParameterSpec::strings("villages")
//!             .with_output_name("profile.villages")
//!             .with_condition(Condition::Must),
//!     )
//!     .with_parameter(ParameterSpec::strings("interests").with_output_name("profile.interest"));
//!
//! parser
//!     .parse("q=*hello*&age=18-45&active=T&villages=alfa,beta&interests=gamma,delta")
//!     .unwrap();
//!
//! assert_eq!(
//!     parser.to_query_string(),
//!     "+*hello* +active:true +age:>=18 +age:<=45 \
//!      +profile.villages:alfa +profile.villages:beta profile.interest:gamma,delta"
//! );
//! ```
//!
//! # Sorting
//!
//! ```
//! use helios_querystring::{ParameterKind, ParameterSpec, Parser, SortStringsRule};
//!
//! let mut parser = Parser::new().with_parameter(
//!     ParameterSpec::with_kind(
//!         "sort",
//!         ParameterKind::SortStrings(
//!             SortStringsRule::default().with_allowed_values(["age", "name", "last_online"]),
//!         ),
//!     )
//!     .exclude_from_output(),
//! );
//!
//! parser.parse("/search?sort=-age,name,-last_online").unwrap();
//! assert_eq!(parser.to_sort_slice("sort").unwrap(), ["-age", "name", "-last_online"]);
//! ```
//!
//! # Concurrency
//!
//! A [`Parser`] holds mutable per-request state. Build one per request (or
//! clone a prepared template) rather than sharing an instance.

pub mod config;
pub mod error;
pub mod loader;
pub mod parameter;
pub mod parser;
pub mod sanitize;
pub mod serializer;
pub mod spec;
pub mod types;

pub use config::ParserConfig;
pub use error::{LoaderError, ParseError, Result};
pub use loader::ParameterLoader;
pub use parameter::{Parameter, ParameterState, ParameterValue};
pub use parser::Parser;
pub use sanitize::{is_sanitized, sanitize_key};
pub use serializer::QuerySerializer;
pub use spec::{
    IntegerRangeRule, IntegerRule, ParameterKind, ParameterSpec, SearchStringRule,
    SortStringsRule, StringsRule,
};
pub use types::{Condition, MatchPosition, ParameterType, SortDirection, SortItem};
