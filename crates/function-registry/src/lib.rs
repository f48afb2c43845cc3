// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # SQL Function Registry
//!
//! This crate provides a centralized registry for builtin SQL functions
//! across dialect families.
//!
//! ## Features
//!
//! - Function definitions per database family (PostgreSQL, MySQL, SQLite,
//!   BigQuery, Snowflake, SQL Server, ClickHouse, DuckDB), each on top of the
//!   ANSI set every dialect shares
//! - Case-insensitive lookup by dialect family
//! - Aggregate / window classification used by the validator
//!
//! ## Usage
//!
//! ```rust
//! use queryvis_function_registry::{DialectFamily, FunctionRegistry};
//!
//! let registry = FunctionRegistry::new();
//! assert!(registry.is_aggregate(DialectFamily::PostgreSQL, "string_agg"));
//! assert!(registry.is_aggregate(DialectFamily::MySQL, "GROUP_CONCAT"));
//! assert!(registry.is_window(DialectFamily::Generic, "row_number"));
//! ```

pub mod builtin;
pub mod metadata;
pub mod registry;

pub use metadata::{FunctionMetadata, FunctionType};
pub use queryvis_sql_parser::DialectFamily;
pub use registry::FunctionRegistry;
