// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Query Visualisation - SQL Parser Adapter
//!
//! This crate turns raw SQL text into a [`SelectStatement`] using
//! [`sqlparser`] as the grammar.
//!
//! ## Overview
//!
//! The adapter is responsible for:
//! - Mapping canonical database types to parser dialect names ([`map_dialect`])
//! - Parsing exactly one `SELECT` statement, and nothing else
//! - Surfacing every rejection as a typed [`ParseError`]
//!
//! ## Parsing Pipeline
//!
//! ```text
//! db_type ──map_dialect──→ parser dialect
//!                              │
//! SQL text ──────────────→ sqlparser ──→ Statement ──→ SelectStatement
//!                              │              │
//!                          ParseError     ParseError::NotSelect
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use queryvis_sql_parser::{ParseError, parse_sql};
//!
//! let stmt = parse_sql("SELECT id FROM users WHERE id > 1", "postgresql").unwrap();
//! assert_eq!(stmt.dialect(), "postgres");
//!
//! let err = parse_sql("DELETE FROM users", "postgresql").unwrap_err();
//! assert!(matches!(err, ParseError::NotSelect { .. }));
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod statement;

pub use config::{ConfigError, ParserConfig};
pub use dialect::{DIALECT_MAP, DatabaseType, DialectFamily, map_dialect};
pub use error::{ParseError, ParseResult, SourcePosition};
pub use statement::SelectStatement;

use sqlparser::dialect::dialect_from_str;
use sqlparser::parser::{Parser, ParserOptions};
use tracing::{debug, warn};

/// Strict SELECT parser
///
/// Holds a [`ParserConfig`]; cheap to share between threads.
#[derive(Debug, Clone, Default)]
pub struct SqlParser {
    config: ParserConfig,
}

impl SqlParser {
    /// Create a parser with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse `text` as a single SELECT statement of the given database type
    ///
    /// # Arguments
    ///
    /// * `text` - SQL text holding exactly one statement
    /// * `db_type` - Canonical database type (`"postgresql"`, `"mysql"`, ...)
    ///
    /// # Returns
    ///
    /// - `Ok(SelectStatement)` - The parsed statement
    /// - `Err(ParseError)` - Syntax error, empty input, several statements,
    ///   a non-SELECT statement, or an unknown dialect
    pub fn parse_select(&self, text: &str, db_type: &str) -> ParseResult<SelectStatement> {
        let dialect_name = map_dialect(db_type);
        let dialect = dialect_from_str(dialect_name).ok_or_else(|| ParseError::UnknownDialect {
            name: dialect_name.to_string(),
        })?;

        debug!(
            "Parsing {} bytes of SQL as {} (db_type={})",
            text.len(),
            dialect_name,
            db_type
        );

        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let options = ParserOptions {
            trailing_commas: self.config.trailing_commas,
            ..ParserOptions::default()
        };

        let mut statements = Parser::new(&*dialect)
            .with_recursion_limit(self.config.recursion_limit)
            .with_options(options)
            .try_with_sql(text)
            .and_then(|mut parser| parser.parse_statements())
            .map_err(|e| {
                let err = ParseError::from(e);
                warn!("SQL rejected by parser: {}", err);
                err
            })?;

        let statement = match statements.len() {
            0 => return Err(ParseError::Empty),
            1 => statements.remove(0),
            count => return Err(ParseError::MultipleStatements { count }),
        };

        let select = SelectStatement::from_statement(statement, dialect_name)?;
        debug!(
            "Parsed SELECT statement with {} projection items",
            select.select().map_or(0, |core| core.projection.len())
        );
        Ok(select)
    }

    /// Parse `text` using the configured default database type
    pub fn parse_default(&self, text: &str) -> ParseResult<SelectStatement> {
        self.parse_select(text, &self.config.default_database)
    }
}

/// Parse `text` as a single SELECT statement with default configuration
///
/// See [`SqlParser::parse_select`].
pub fn parse_sql(text: &str, db_type: &str) -> ParseResult<SelectStatement> {
    SqlParser::new().parse_select(text, db_type)
}
