// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! BigQuery builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin BigQuery functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("ARRAY_AGG", "Collect values into an array"),
        aggregate("ARRAY_CONCAT_AGG", "Concatenate arrays from multiple rows"),
        aggregate("STRING_AGG", "Concatenate values with delimiter"),
        aggregate("LOGICAL_AND", "True if all values are true"),
        aggregate("LOGICAL_OR", "True if any value is true"),
        aggregate("COUNTIF", "Count of rows where the condition is true"),
        aggregate("BIT_AND", "Bitwise AND of all values"),
        aggregate("BIT_OR", "Bitwise OR of all values"),
        aggregate("BIT_XOR", "Bitwise XOR of all values"),
        aggregate("APPROX_COUNT_DISTINCT", "Approximate count of distinct values"),
        aggregate("APPROX_QUANTILES", "Approximate quantile boundaries"),
        aggregate("APPROX_TOP_COUNT", "Approximate most frequent values"),
        // Scalar functions
        scalar("SAFE_DIVIDE", "Division that returns null on error"),
        scalar("FORMAT_DATE", "Format a date as text"),
    ]);
    functions
}
