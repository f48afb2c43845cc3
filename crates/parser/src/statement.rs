// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! The parsed SELECT statement handed to validators

use sqlparser::ast::{Query, Select, SetExpr, Statement};
use std::fmt;

use crate::error::{ParseError, ParseResult};

/// A query whose body is a single `SELECT`
///
/// Only the parser builds these, so [`SelectStatement::select`] always finds
/// a `SELECT`. CTEs, `ORDER BY` and `LIMIT` around the `SELECT` are
/// kept; set operations and `VALUES` bodies are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    query: Box<Query>,
    dialect: String,
}

impl SelectStatement {
    pub(crate) fn from_statement(statement: Statement, dialect: &str) -> ParseResult<Self> {
        let query = match statement {
            Statement::Query(query) => query,
            other => {
                return Err(ParseError::NotSelect {
                    found: leading_keyword(&other.to_string()),
                });
            }
        };

        match select_body(&query.body) {
            Some(select) if select.projection.is_empty() => {
                return Err(ParseError::EmptyProjection);
            }
            Some(_) => {}
            None => {
                return Err(ParseError::NotSelect {
                    found: body_kind(&query.body),
                });
            }
        }

        Ok(Self {
            query,
            dialect: dialect.to_string(),
        })
    }

    /// The full query, including CTEs and query-level `ORDER BY`
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The `SELECT` at the core of the query
    ///
    /// Always `Some` for statements built by [`SqlParser`](crate::SqlParser).
    pub fn select(&self) -> Option<&Select> {
        select_body(&self.query.body)
    }

    /// Parser dialect the statement was parsed with
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Give up the wrapper and return the raw query
    pub fn into_query(self) -> Query {
        *self.query
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query)
    }
}

/// Find the `SELECT` behind any number of parentheses
fn select_body(body: &SetExpr) -> Option<&Select> {
    match body {
        SetExpr::Select(select) => Some(&**select),
        SetExpr::Query(inner) => select_body(&inner.body),
        _ => None,
    }
}

fn body_kind(body: &SetExpr) -> String {
    match body {
        SetExpr::SetOperation { op, .. } => op.to_string().to_uppercase(),
        SetExpr::Query(inner) => body_kind(&inner.body),
        other => leading_keyword(&other.to_string()),
    }
}

fn leading_keyword(rendered: &str) -> String {
    rendered
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_keyword() {
        assert_eq!(leading_keyword("DELETE FROM t"), "DELETE");
        assert_eq!(leading_keyword("  insert into t values (1)"), "INSERT");
        assert_eq!(leading_keyword(""), "");
    }
}
