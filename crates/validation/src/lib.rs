// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query Visualisation - SQL Validation
//!
//! Context-sensitive checks on statements produced by
//! [`queryvis_sql_parser`]. The validator threads an immutable
//! [`ValidationContext`] through the AST and reports aggregate and window
//! functions that appear where SQL does not allow them.
//!
//! ## Usage
//!
//! ```rust
//! use queryvis_sql_validation::{IssueCode, validate_sql};
//!
//! let report = validate_sql("SELECT id FROM orders WHERE COUNT(*) > 1", "postgresql").unwrap();
//! assert!(!report.is_valid());
//! assert!(report.has_code(IssueCode::AggregateInWhere));
//!
//! let report = validate_sql(
//!     "SELECT user_id FROM orders GROUP BY user_id HAVING COUNT(*) > 1",
//!     "postgresql",
//! )
//! .unwrap();
//! assert!(report.is_valid());
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod validator;

pub use config::ValidatorConfig;
pub use context::ValidationContext;
pub use error::{
    IssueCode, ValidationError, ValidationIssue, ValidationReport, ValidationResult,
    ValidationSeverity,
};
pub use validator::SqlValidator;

use queryvis_sql_parser::{ParserConfig, SqlParser, parse_sql};

/// Parse `text` for `db_type` and validate it with default configuration
///
/// Parse failures come back as [`ValidationError::Parse`]; rule violations
/// are in the returned report.
pub fn validate_sql(text: &str, db_type: &str) -> ValidationResult<ValidationReport> {
    let stmt = parse_sql(text, db_type)?;
    Ok(SqlValidator::new().validate(&stmt))
}

/// Like [`validate_sql`], with explicit parser and validator configuration
///
/// Both configurations are checked first; an invalid one is reported as
/// [`ValidationError::Config`] before any SQL is parsed.
pub fn validate_sql_with(
    text: &str,
    db_type: &str,
    parser_config: &ParserConfig,
    validator_config: &ValidatorConfig,
) -> ValidationResult<ValidationReport> {
    parser_config.validate()?;
    validator_config.validate()?;

    let stmt = SqlParser::with_config(parser_config.clone()).parse_select(text, db_type)?;
    Ok(SqlValidator::with_config(validator_config.clone()).validate(&stmt))
}
