// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Dialect Mapping
//!
//! The application identifies databases by a canonical database-type string
//! (`"postgresql"`, `"mysql"`, ...). The SQL parser has its own dialect
//! vocabulary, which mostly agrees but not everywhere. This module owns the
//! translation between the two.
//!
//! ## Design
//!
//! - [`map_dialect`] is a total function over a fixed lookup table. Anything
//!   not in the table passes through unchanged, and the parser decides later
//!   whether it knows that name.
//! - [`DatabaseType`] names the database kinds the application supports.
//! - [`DialectFamily`] groups parser dialects that share builtin functions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Canonical database type -> parser dialect name.
///
/// Only identifiers whose spelling differs between the two vocabularies
/// need an entry here.
pub const DIALECT_MAP: &[(&str, &str)] = &[("postgresql", "postgres")];

/// Map a canonical database-type identifier to the parser's dialect name.
///
/// Unknown identifiers map to themselves.
///
/// # Examples
///
/// ```
/// use queryvis_sql_parser::map_dialect;
///
/// assert_eq!(map_dialect("postgresql"), "postgres");
/// assert_eq!(map_dialect("mysql"), "mysql");
/// ```
pub fn map_dialect(db_type: &str) -> &str {
    DIALECT_MAP
        .iter()
        .find(|(canonical, _)| *canonical == db_type)
        .map(|(_, dialect)| *dialect)
        .unwrap_or(db_type)
}

/// Database kinds supported by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum DatabaseType {
    PostgreSQL,
    MySQL,
    SQLite,
    BigQuery,
    Snowflake,
    Redshift,
    MsSql,
    ClickHouse,
    DuckDB,
    Generic,
}

impl DatabaseType {
    /// All supported database types
    pub fn all() -> &'static [DatabaseType] {
        &[
            DatabaseType::PostgreSQL,
            DatabaseType::MySQL,
            DatabaseType::SQLite,
            DatabaseType::BigQuery,
            DatabaseType::Snowflake,
            DatabaseType::Redshift,
            DatabaseType::MsSql,
            DatabaseType::ClickHouse,
            DatabaseType::DuckDB,
            DatabaseType::Generic,
        ]
    }

    /// Canonical identifier, as stored by the application
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::PostgreSQL => "postgresql",
            DatabaseType::MySQL => "mysql",
            DatabaseType::SQLite => "sqlite",
            DatabaseType::BigQuery => "bigquery",
            DatabaseType::Snowflake => "snowflake",
            DatabaseType::Redshift => "redshift",
            DatabaseType::MsSql => "mssql",
            DatabaseType::ClickHouse => "clickhouse",
            DatabaseType::DuckDB => "duckdb",
            DatabaseType::Generic => "generic",
        }
    }

    /// The parser dialect name for this database type
    pub fn parser_dialect(&self) -> &'static str {
        map_dialect(self.as_str())
    }

    /// Builtin function family of this database type
    pub fn family(&self) -> DialectFamily {
        DialectFamily::of(self.parser_dialect())
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatabaseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DatabaseType::all()
            .iter()
            .copied()
            .find(|db| db.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownDialect {
                name: s.to_string(),
            })
    }
}

/// Dialect family groupings
///
/// Dialects in the same family share a builtin function catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialectFamily {
    /// PostgreSQL and its derivatives (Redshift)
    PostgreSQL,
    /// MySQL
    MySQL,
    SQLite,
    BigQuery,
    Snowflake,
    /// SQL Server
    MsSql,
    ClickHouse,
    DuckDB,
    /// Everything else; ANSI builtins only
    Generic,
}

impl DialectFamily {
    /// All dialect families
    pub fn all() -> &'static [DialectFamily] {
        &[
            DialectFamily::PostgreSQL,
            DialectFamily::MySQL,
            DialectFamily::SQLite,
            DialectFamily::BigQuery,
            DialectFamily::Snowflake,
            DialectFamily::MsSql,
            DialectFamily::ClickHouse,
            DialectFamily::DuckDB,
            DialectFamily::Generic,
        ]
    }

    /// Family of a parser dialect name (as returned by [`map_dialect`])
    pub fn of(parser_dialect: &str) -> Self {
        match parser_dialect.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "redshift" => DialectFamily::PostgreSQL,
            "mysql" => DialectFamily::MySQL,
            "sqlite" => DialectFamily::SQLite,
            "bigquery" => DialectFamily::BigQuery,
            "snowflake" => DialectFamily::Snowflake,
            "mssql" => DialectFamily::MsSql,
            "clickhouse" => DialectFamily::ClickHouse,
            "duckdb" => DialectFamily::DuckDB,
            _ => DialectFamily::Generic,
        }
    }
}
