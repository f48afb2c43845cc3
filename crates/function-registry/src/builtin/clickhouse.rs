// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! ClickHouse builtin function definitions
//!
//! ClickHouse names are camelCase; lookup is case-insensitive, so they are
//! stored upper case like every other builtin.

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin ClickHouse functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("UNIQ", "Approximate count of distinct values"),
        aggregate("UNIQEXACT", "Exact count of distinct values"),
        aggregate("GROUPARRAY", "Collect values into an array"),
        aggregate("GROUPUNIQARRAY", "Collect distinct values into an array"),
        aggregate("ARGMIN", "Value at the row with the minimum key"),
        aggregate("ARGMAX", "Value at the row with the maximum key"),
        aggregate("MEDIAN", "Approximate median"),
        aggregate("QUANTILE", "Approximate quantile"),
        aggregate("TOPK", "Approximate most frequent values"),
        aggregate("SUMIF", "Sum of values where the condition is true"),
        aggregate("COUNTIF", "Count of rows where the condition is true"),
        aggregate("AVGIF", "Average of values where the condition is true"),
        // Scalar functions
        scalar("TOSTARTOFDAY", "Round a date down to the start of the day"),
        scalar("TOSTRING", "Convert a value to text"),
    ]);
    functions
}
