// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Parser Configuration
//!
//! Strictness knobs handed to the underlying SQL parser.
//!
//! Configuration can be built in code, read from the `"queryVis"` section of a
//! JSON settings payload, or loaded from YAML:
//!
//! ```yaml
//! recursionLimit: 32
//! trailingCommas: false
//! defaultDatabase: postgresql
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlparser::dialect::dialect_from_str;

use crate::dialect::map_dialect;

/// Key of the settings section owned by this workspace
pub const SETTINGS_SECTION: &str = "queryVis";

/// Configuration for [`SqlParser`](crate::SqlParser)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserConfig {
    /// Maximum expression/query nesting the parser accepts
    pub recursion_limit: usize,

    /// Accept a trailing comma in projection lists
    pub trailing_commas: bool,

    /// Database type used when the caller does not name one
    pub default_database: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            recursion_limit: 50,
            trailing_commas: false,
            default_database: "postgresql".to_string(),
        }
    }
}

impl ParserConfig {
    /// Set the recursion limit
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Allow or reject trailing commas
    pub fn with_trailing_commas(mut self, enabled: bool) -> Self {
        self.trailing_commas = enabled;
        self
    }

    /// Set the default database type
    pub fn with_default_database(mut self, db_type: impl Into<String>) -> Self {
        self.default_database = db_type.into();
        self
    }

    /// Validate the configuration
    ///
    /// Checks that:
    /// - The recursion limit is non-zero
    /// - The default database resolves to a dialect the parser knows
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recursion_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "recursionLimit",
                reason: "must be > 0".to_string(),
            });
        }

        let dialect = map_dialect(&self.default_database);
        if dialect_from_str(dialect).is_none() {
            return Err(ConfigError::UnknownDatabase(self.default_database.clone()));
        }

        Ok(())
    }

    /// Parse parser config from a settings payload.
    ///
    /// Expected shape:
    /// {
    ///   "queryVis": {
    ///     "parser": { "recursionLimit": 32, "defaultDatabase": "mysql" }
    ///   }
    /// }
    ///
    /// A missing section yields the defaults.
    pub fn from_settings(settings: &Value) -> Result<Self, ConfigError> {
        let config = match settings
            .get(SETTINGS_SECTION)
            .and_then(|section| section.get("parser"))
        {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load parser config from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A field holds a value outside its accepted range
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    /// Default database does not map to a known parser dialect
    #[error("Unknown database type: {0}")]
    UnknownDatabase(String),

    /// Malformed JSON settings
    #[error("Invalid settings payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed YAML configuration
    #[error("Invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.recursion_limit, 50);
        assert!(!config.trailing_commas);
        assert_eq!(config.default_database, "postgresql");
    }

    #[test]
    fn test_zero_recursion_limit_rejected() {
        let config = ParserConfig::default().with_recursion_limit(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "recursionLimit",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_default_database_rejected() {
        let config = ParserConfig::default().with_default_database("oracle");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownDatabase(name)) if name == "oracle"
        ));
    }

    #[test]
    fn test_from_settings() {
        let settings = json!({
            "queryVis": {
                "parser": {
                    "recursionLimit": 20,
                    "defaultDatabase": "mysql"
                }
            }
        });

        let config = ParserConfig::from_settings(&settings).unwrap();
        assert_eq!(config.recursion_limit, 20);
        assert_eq!(config.default_database, "mysql");
        assert!(!config.trailing_commas);
    }

    #[test]
    fn test_from_settings_missing_section() {
        let config = ParserConfig::from_settings(&json!({})).unwrap();
        assert_eq!(config, ParserConfig::default());
    }

    #[test]
    fn test_from_settings_wrong_type() {
        let settings = json!({ "queryVis": { "parser": { "recursionLimit": "deep" } } });
        assert!(matches!(
            ParserConfig::from_settings(&settings),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_yaml() {
        let config = ParserConfig::from_yaml_str(
            "recursionLimit: 32\ntrailingCommas: true\ndefaultDatabase: sqlite\n",
        )
        .unwrap();
        assert_eq!(config.recursion_limit, 32);
        assert!(config.trailing_commas);
        assert_eq!(config.default_database, "sqlite");
    }
}
