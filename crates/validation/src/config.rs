// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Validator Configuration
//!
//! Which rules run, how deep the walk may go, and which extra function names
//! count as aggregates.
//!
//! ```yaml
//! maxDepth: 32
//! extraAggregates: [median, approx_count_distinct]
//! disabledRules: [window-in-having]
//! ```

use queryvis_sql_parser::config::SETTINGS_SECTION;
use queryvis_sql_parser::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::IssueCode;

/// Configuration for [`SqlValidator`](crate::SqlValidator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Deepest expression/query nesting the walker descends into
    pub max_depth: usize,

    /// Function names treated as aggregates on top of the builtin registry
    pub extra_aggregates: Vec<String>,

    /// Rules that never produce issues
    pub disabled_rules: Vec<IssueCode>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_depth: 64,
            extra_aggregates: Vec::new(),
            disabled_rules: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Treat `name` as an aggregate function
    pub fn with_extra_aggregate(mut self, name: impl Into<String>) -> Self {
        self.extra_aggregates.push(name.into());
        self
    }

    /// Turn off the rule identified by `code`
    pub fn disable_rule(mut self, code: IssueCode) -> Self {
        if !self.disabled_rules.contains(&code) {
            self.disabled_rules.push(code);
        }
        self
    }

    /// Whether the rule identified by `code` runs
    pub fn is_enabled(&self, code: IssueCode) -> bool {
        !self.disabled_rules.contains(&code)
    }

    /// Case-insensitive match against `extra_aggregates`
    pub fn is_extra_aggregate(&self, name: &str) -> bool {
        let name = name.rsplit('.').next().unwrap_or(name);
        self.extra_aggregates
            .iter()
            .any(|extra| extra.eq_ignore_ascii_case(name))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxDepth",
                reason: "must be > 0".to_string(),
            });
        }

        if let Some(blank) = self.extra_aggregates.iter().find(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "extraAggregates",
                reason: format!("function name '{}' is empty", blank),
            });
        }

        Ok(())
    }

    /// Parse validator config from a settings payload.
    ///
    /// Reads `queryVis.validator`; a missing section yields the defaults.
    pub fn from_settings(settings: &Value) -> Result<Self, ConfigError> {
        let config = match settings
            .get(SETTINGS_SECTION)
            .and_then(|section| section.get("validator"))
        {
            Some(value) => serde_json::from_value(value.clone())?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load validator config from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = ValidatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_depth, 64);
        for code in IssueCode::all() {
            assert!(config.is_enabled(*code));
        }
    }

    #[test]
    fn test_zero_depth_rejected() {
        let config = ValidatorConfig::default().with_max_depth(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "maxDepth", .. })
        ));
    }

    #[test]
    fn test_blank_extra_aggregate_rejected() {
        let config = ValidatorConfig::default().with_extra_aggregate("  ");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "extraAggregates",
                ..
            })
        ));
    }

    #[test]
    fn test_disable_rule() {
        let config = ValidatorConfig::default()
            .disable_rule(IssueCode::WindowInHaving)
            .disable_rule(IssueCode::WindowInHaving);

        assert_eq!(config.disabled_rules.len(), 1);
        assert!(!config.is_enabled(IssueCode::WindowInHaving));
        assert!(config.is_enabled(IssueCode::AggregateInWhere));
    }

    #[test]
    fn test_extra_aggregate_matching() {
        let config = ValidatorConfig::default().with_extra_aggregate("median");
        assert!(config.is_extra_aggregate("MEDIAN"));
        assert!(config.is_extra_aggregate("stats.median"));
        assert!(!config.is_extra_aggregate("mode"));
    }

    #[test]
    fn test_from_settings() {
        let settings = json!({
            "queryVis": {
                "validator": {
                    "maxDepth": 16,
                    "extraAggregates": ["median"],
                    "disabledRules": ["nested-aggregate"]
                }
            }
        });

        let config = ValidatorConfig::from_settings(&settings).unwrap();
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.extra_aggregates, vec!["median".to_string()]);
        assert!(!config.is_enabled(IssueCode::NestedAggregate));
    }

    #[test]
    fn test_from_settings_missing_section() {
        let config = ValidatorConfig::from_settings(&json!({ "queryVis": {} })).unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_from_settings_unknown_rule() {
        let settings = json!({
            "queryVis": { "validator": { "disabledRules": ["no-such-rule"] } }
        });
        assert!(matches!(
            ValidatorConfig::from_settings(&settings),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
maxDepth: 8
disabledRules:
  - window-in-where
  - aggregate-in-group-by
"#;
        let config = ValidatorConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.max_depth, 8);
        assert!(config.extra_aggregates.is_empty());
        assert!(!config.is_enabled(IssueCode::WindowInWhere));
        assert!(!config.is_enabled(IssueCode::AggregateInGroupBy));
    }

    #[test]
    fn test_from_yaml_str_invalid_depth() {
        assert!(ValidatorConfig::from_yaml_str("maxDepth: 0").is_err());
    }
}
