//! Parameter definition loader.
//!
//! Loads [`ParameterSpec`] definitions from JSON so a service can declare
//! its recognized query parameters in configuration rather than code.
//!
//! Accepted shapes:
//! - an array of parameter definitions
//! - an object with a `"parameters"` array and an optional `"config"`
//!   object holding [`ParserConfig`] overrides
//!
//! ```json
//! {
//!   "config": { "max_length": 80 },
//!   "parameters": [
//!     { "name": "q", "type": "search_string", "output_name": "", "output_condition": "must" },
//!     { "name": "age", "type": "integer_range", "min_value": 0, "max_value": 99 },
//!     { "name": "sort", "type": "sort_strings", "allowed_values": ["age", "name"],
//!       "include_in_output": false }
//!   ]
//! }
//! ```
//!
//! Type-specific fields that a definition omits are filled from the
//! loader's [`ParserConfig`]. Unlike programmatic registration, loaded
//! names are validated: each must already be sanitized and unique.

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::ParserConfig;
use crate::error::LoaderError;
use crate::parser::Parser;
use crate::sanitize::sanitize_key;
use crate::spec::ParameterSpec;

/// Loader for parameter definitions.
#[derive(Debug, Clone, Default)]
pub struct ParameterLoader {
    config: ParserConfig,
}

impl ParameterLoader {
    /// Creates a loader whose defaults come from `config`.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the loader configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Loads definitions from JSON text.
    pub fn load_from_str(&self, json: &str) -> Result<Vec<ParameterSpec>, LoaderError> {
        let value: Value = serde_json::from_str(json).map_err(|e| LoaderError::InvalidJson {
            message: e.to_string(),
        })?;
        self.load_from_json(&value)
    }

    /// Loads definitions from a JSON value.
    pub fn load_from_json(&self, json: &Value) -> Result<Vec<ParameterSpec>, LoaderError> {
        let entries = parameter_entries(json)?;

        let mut specs = Vec::with_capacity(entries.len());
        let mut seen = HashSet::new();

        for entry in entries {
            let spec = self.parse_definition(entry)?;

            let sanitized = sanitize_key(&spec.name);
            if sanitized != spec.name {
                return Err(LoaderError::InvalidParameterName {
                    name: spec.name,
                    sanitized,
                });
            }

            if !seen.insert(spec.name.clone()) {
                return Err(LoaderError::DuplicateParameter { name: spec.name });
            }

            debug!(parameter = %spec.name, param_type = %spec.param_type(), "loaded parameter definition");
            specs.push(spec);
        }

        Ok(specs)
    }

    /// Loads definitions from a JSON configuration file.
    pub fn load_config(&self, config_path: &Path) -> Result<Vec<ParameterSpec>, LoaderError> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            LoaderError::ConfigLoadFailed {
                path: config_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let specs = self.load_from_str(&content)?;
        info!(
            path = %config_path.display(),
            count = specs.len(),
            "loaded parameter definitions"
        );
        Ok(specs)
    }

    /// Builds a parser over `specs` using the loader configuration.
    pub fn build_parser(&self, specs: Vec<ParameterSpec>) -> Result<Parser, LoaderError> {
        self.config
            .validate()
            .map_err(|errors| LoaderError::InvalidConfig {
                message: errors.join("; "),
            })?;

        let mut parser = Parser::with_config(self.config.clone());
        for spec in specs {
            parser.add_parameter(spec);
        }
        Ok(parser)
    }

    /// Builds a parser from a JSON document, honoring an embedded `"config"`.
    pub fn parser_from_json(json: &Value) -> Result<Parser, LoaderError> {
        let config = match json.get("config") {
            Some(config) => serde_json::from_value::<ParserConfig>(config.clone()).map_err(
                |e| LoaderError::InvalidJson {
                    message: format!("invalid config: {}", e),
                },
            )?,
            None => ParserConfig::default(),
        };

        let loader = Self::new(config);
        let specs = loader.load_from_json(json)?;
        loader.build_parser(specs)
    }

    /// Builds a parser from a JSON configuration file.
    pub fn parser_from_file(config_path: &Path) -> Result<Parser, LoaderError> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            LoaderError::ConfigLoadFailed {
                path: config_path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        let json: Value = serde_json::from_str(&content).map_err(|e| {
            LoaderError::ConfigLoadFailed {
                path: config_path.display().to_string(),
                message: format!("Invalid JSON: {}", e),
            }
        })?;

        Self::parser_from_json(&json)
    }

    /// Parses one definition, filling omitted type-specific fields from the config.
    fn parse_definition(&self, entry: &Value) -> Result<ParameterSpec, LoaderError> {
        let Some(object) = entry.as_object() else {
            return Err(LoaderError::InvalidJson {
                message: format!("parameter definition must be an object, found {}", entry),
            });
        };

        let mut object = object.clone();
        self.apply_defaults(&mut object);

        serde_json::from_value(Value::Object(object)).map_err(|e| LoaderError::InvalidJson {
            message: e.to_string(),
        })
    }

    fn apply_defaults(&self, object: &mut Map<String, Value>) {
        let defaults = [
            ("list_separator", Value::from(self.config.list_separator.to_string())),
            ("range_separator", Value::from(self.config.range_separator.to_string())),
            ("sort_modifier", Value::from(self.config.sort_modifier.to_string())),
            ("wildcard", Value::from(self.config.wildcard.to_string())),
            ("min_length", Value::from(self.config.min_length)),
            ("max_length", Value::from(self.config.max_length)),
        ];

        for (key, value) in defaults {
            object.entry(key).or_insert(value);
        }
    }
}

fn parameter_entries(json: &Value) -> Result<&Vec<Value>, LoaderError> {
    if let Some(array) = json.as_array() {
        return Ok(array);
    }

    json.get("parameters")
        .and_then(Value::as_array)
        .ok_or_else(|| LoaderError::InvalidJson {
            message: "expected an array of parameters or an object with a \"parameters\" array"
                .to_string(),
        })
}
