// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQL-specific test helpers and custom assertions

use queryvis_sql_parser::{ParseError, SelectStatement, parse_sql};
use queryvis_sql_validation::{IssueCode, ValidationReport};

/// Custom assertion helpers for parser testing
pub struct SqlAssertions;

impl SqlAssertions {
    /// Assert that `sql` parses as a SELECT for `db_type` and return it
    pub fn assert_parses(sql: &str, db_type: &str) -> SelectStatement {
        match parse_sql(sql, db_type) {
            Ok(stmt) => stmt,
            Err(e) => panic!("Expected '{}' to parse as {}, got error: {}", sql, db_type, e),
        }
    }

    /// Assert that `sql` fails to parse for `db_type` and return the error
    pub fn assert_rejected(sql: &str, db_type: &str) -> ParseError {
        match parse_sql(sql, db_type) {
            Ok(stmt) => panic!("Expected '{}' to be rejected, parsed as: {}", sql, stmt),
            Err(e) => e,
        }
    }
}

/// Custom assertion helpers for validation reports
pub struct ValidationAssertions;

impl ValidationAssertions {
    /// Assert that the report carries no error-severity issues
    pub fn assert_valid(report: &ValidationReport) {
        assert!(
            report.is_valid(),
            "Expected a valid query, found issues: {:?}",
            report.issues()
        );
    }

    /// Assert that the report carries an issue with `code`
    pub fn assert_issue(report: &ValidationReport, code: IssueCode) {
        assert!(
            report.has_code(code),
            "Expected issue '{}', found: {:?}",
            code,
            report.issues()
        );
    }

    /// Assert that the report carries no issue with `code`
    pub fn assert_no_issue(report: &ValidationReport, code: IssueCode) {
        assert!(
            !report.has_code(code),
            "Did not expect issue '{}', found: {:?}",
            code,
            report.issues()
        );
    }

    /// Assert that the report carries exactly `codes`, in walk order
    pub fn assert_codes(report: &ValidationReport, codes: &[IssueCode]) {
        let found: Vec<IssueCode> = report.issues().iter().map(|issue| issue.code).collect();
        assert_eq!(found, codes, "Issue codes mismatch");
    }
}
