// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Builtin SQL function definitions
//!
//! This module contains function definitions for different SQL dialect
//! families. Family modules extend the ANSI set; [`functions_for`] picks
//! the table for a family.

pub mod ansi;
pub mod bigquery;
pub mod clickhouse;
pub mod duckdb;
pub mod mssql;
pub mod mysql;
pub mod postgresql;
pub mod snowflake;
pub mod sqlite;

use crate::{DialectFamily, FunctionMetadata, FunctionType};

/// Builtin functions of a dialect family
pub fn functions_for(family: DialectFamily) -> Vec<FunctionMetadata> {
    match family {
        DialectFamily::PostgreSQL => postgresql::all_functions(),
        DialectFamily::MySQL => mysql::all_functions(),
        DialectFamily::SQLite => sqlite::all_functions(),
        DialectFamily::BigQuery => bigquery::all_functions(),
        DialectFamily::Snowflake => snowflake::all_functions(),
        DialectFamily::MsSql => mssql::all_functions(),
        DialectFamily::ClickHouse => clickhouse::all_functions(),
        DialectFamily::DuckDB => duckdb::all_functions(),
        DialectFamily::Generic => ansi::all_functions(),
    }
}

fn aggregate(name: &str, description: &str) -> FunctionMetadata {
    FunctionMetadata::new(name)
        .with_type(FunctionType::Aggregate)
        .with_description(description)
}

fn window(name: &str, description: &str) -> FunctionMetadata {
    FunctionMetadata::new(name)
        .with_type(FunctionType::Window)
        .with_description(description)
}

fn scalar(name: &str, description: &str) -> FunctionMetadata {
    FunctionMetadata::new(name).with_description(description)
}
