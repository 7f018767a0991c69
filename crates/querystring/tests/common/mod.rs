//! Common test utilities for query string parsing.
//!
//! Provides the registries shared by the integration tests.

#![allow(dead_code)]

use helios_querystring::{
    Condition, IntegerRangeRule, IntegerRule, ParameterKind, ParameterSpec, Parser,
    SearchStringRule, SortStringsRule,
};

/// Registry of a profile search endpoint, every search field required.
pub fn profile_search_parser() -> Parser {
    Parser::new()
        .with_parameter(
            ParameterSpec::search_string("q")
                .with_output_name("")
                .with_condition(Condition::Must),
        )
        .with_parameter(ParameterSpec::boolean("active").with_condition(Condition::Must))
        .with_parameter(
            ParameterSpec::with_kind(
                "age",
                ParameterKind::IntegerRange(IntegerRangeRule::default().with_bounds(0, 99)),
            )
            .with_condition(Condition::Must),
        )
        .with_parameter(
            ParameterSpec::strings("villages")
                .with_output_name("profile.villages")
                .with_condition(Condition::Must),
        )
        .with_parameter(ParameterSpec::strings("interests").with_output_name("profile.interest"))
}

/// Registry with pagination and sorting parameters that stay out of the query.
pub fn paginated_search_parser() -> Parser {
    Parser::new()
        .with_parameter(ParameterSpec::strings("interests").with_output_name("profile.interest"))
        .with_parameter(ParameterSpec::strings("villages").with_output_name("profile.villages"))
        .with_parameter(ParameterSpec::with_kind(
            "age",
            ParameterKind::IntegerRange(IntegerRangeRule::default().with_bounds(0, 99)),
        ))
        .with_parameter(
            ParameterSpec::with_kind(
                "q",
                ParameterKind::SearchString(SearchStringRule::default().with_lengths(1, 80)),
            )
            .with_output_name(""),
        )
        .with_parameter(
            ParameterSpec::with_kind(
                "offset",
                ParameterKind::Integer(IntegerRule::default().with_bounds(0, 999)),
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
        )
        .with_parameter(
            ParameterSpec::with_kind(
                "sort",
                ParameterKind::SortStrings(
                    SortStringsRule::default().with_allowed_values(["age", "name", "last_online"]),
                ),
            )
            .exclude_from_output(),
        )
}
