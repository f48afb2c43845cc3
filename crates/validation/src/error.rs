// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details
//
//! # Validation issues and errors
//!
//! A walk produces a [`ValidationReport`] of [`ValidationIssue`]s. Callers that
//! want a hard failure turn the report into a [`ValidationError`] with
//! [`ValidationReport::into_result`].

use queryvis_sql_parser::{ConfigError, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::ValidationContext;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors surfaced by the validation entry points
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The text never became a SELECT statement
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid parser or validator configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The statement broke a validation rule
    #[error("Query failed validation ({code}): {message}")]
    Rejected { code: IssueCode, message: String },
}

/// Rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCode {
    /// Aggregate function directly in `WHERE`
    AggregateInWhere,
    /// Aggregate function in `GROUP BY`
    AggregateInGroupBy,
    /// Aggregate function inside another aggregate's arguments
    NestedAggregate,
    /// Window function in `WHERE`
    WindowInWhere,
    /// Window function in `GROUP BY`
    WindowInGroupBy,
    /// Window function in `HAVING`
    WindowInHaving,
    /// Window function inside an aggregate's arguments
    WindowInAggregate,
    /// The walk stopped descending because of the depth limit
    RecursionLimit,
}

impl IssueCode {
    /// All rule identifiers
    pub fn all() -> &'static [IssueCode] {
        &[
            IssueCode::AggregateInWhere,
            IssueCode::AggregateInGroupBy,
            IssueCode::NestedAggregate,
            IssueCode::WindowInWhere,
            IssueCode::WindowInGroupBy,
            IssueCode::WindowInHaving,
            IssueCode::WindowInAggregate,
            IssueCode::RecursionLimit,
        ]
    }

    /// Stable string code
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::AggregateInWhere => "aggregate-in-where",
            IssueCode::AggregateInGroupBy => "aggregate-in-group-by",
            IssueCode::NestedAggregate => "nested-aggregate",
            IssueCode::WindowInWhere => "window-in-where",
            IssueCode::WindowInGroupBy => "window-in-group-by",
            IssueCode::WindowInHaving => "window-in-having",
            IssueCode::WindowInAggregate => "window-in-aggregate",
            IssueCode::RecursionLimit => "recursion-limit",
        }
    }

    /// Severity issues with this code are reported at
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            IssueCode::RecursionLimit => ValidationSeverity::Warning,
            _ => ValidationSeverity::Error,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidationSeverity {
    Hint,
    Info,
    Warning,
    Error,
}

/// Information about a validation issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Code identifying the type of issue
    pub code: IssueCode,

    /// The issue message
    pub message: String,

    /// The severity of the issue
    pub severity: ValidationSeverity,

    /// Where in the statement the issue was found
    pub context: ValidationContext,
}

impl ValidationIssue {
    pub fn new(code: IssueCode, message: impl Into<String>, context: ValidationContext) -> Self {
        Self {
            code,
            message: message.into(),
            severity: code.severity(),
            context,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == ValidationSeverity::Error
    }
}

/// Issues found while validating one statement, in walk order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// No error-severity issues
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(ValidationIssue::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|issue| issue.code == code)
    }

    /// Fail on the first error; otherwise return the remaining issues
    pub fn into_result(self) -> ValidationResult<Vec<ValidationIssue>> {
        if let Some(first) = self.issues.iter().find(|issue| issue.is_error()) {
            return Err(ValidationError::Rejected {
                code: first.code,
                message: first.message.clone(),
            });
        }
        Ok(self.issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(code: IssueCode) -> ValidationIssue {
        ValidationIssue::new(code, format!("{} triggered", code), ValidationContext::new())
    }

    #[test]
    fn test_issue_code_strings_unique() {
        let mut codes: Vec<&str> = IssueCode::all().iter().map(IssueCode::as_str).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_issue_code_serde_matches_as_str() {
        for code in IssueCode::all() {
            let json = serde_json::to_string(code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(ValidationSeverity::Error > ValidationSeverity::Warning);
        assert!(ValidationSeverity::Warning > ValidationSeverity::Info);
        assert!(ValidationSeverity::Info > ValidationSeverity::Hint);
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert_eq!(report.errors().count(), 0);
        assert!(report.into_result().unwrap().is_empty());
    }

    #[test]
    fn test_warning_only_report_is_valid() {
        let report = ValidationReport::new(vec![issue(IssueCode::RecursionLimit)]);
        assert!(report.is_valid());
        assert!(report.has_code(IssueCode::RecursionLimit));

        let warnings = report.into_result().unwrap();
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_into_result_reports_first_error() {
        let report = ValidationReport::new(vec![
            issue(IssueCode::RecursionLimit),
            issue(IssueCode::AggregateInWhere),
            issue(IssueCode::NestedAggregate),
        ]);
        assert!(!report.is_valid());
        assert_eq!(report.errors().count(), 2);

        match report.into_result() {
            Err(ValidationError::Rejected { code, message }) => {
                assert_eq!(code, IssueCode::AggregateInWhere);
                assert!(message.contains("aggregate-in-where"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err = ValidationError::from(ParseError::Empty);
        assert_eq!(err.to_string(), ParseError::Empty.to_string());
    }

    #[test]
    fn test_error_display_rejected() {
        let err = ValidationError::Rejected {
            code: IssueCode::NestedAggregate,
            message: "Aggregate function MAX cannot be nested".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("nested-aggregate"));
        assert!(msg.contains("MAX"));
    }
}
