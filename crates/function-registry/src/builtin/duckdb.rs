// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! DuckDB builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin DuckDB functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("STRING_AGG", "Concatenate values with delimiter"),
        aggregate("GROUP_CONCAT", "Concatenate values with delimiter"),
        aggregate("LISTAGG", "Concatenate values with delimiter"),
        aggregate("ARRAY_AGG", "Collect values into a list"),
        aggregate("LIST", "Collect values into a list"),
        aggregate("BOOL_AND", "True if all values are true"),
        aggregate("BOOL_OR", "True if any value is true"),
        aggregate("MEDIAN", "Middle value"),
        aggregate("MODE", "Most frequent value"),
        aggregate("ARG_MIN", "Value at the row with the minimum key"),
        aggregate("ARG_MAX", "Value at the row with the maximum key"),
        aggregate("APPROX_COUNT_DISTINCT", "Approximate count of distinct values"),
        aggregate("QUANTILE_CONT", "Interpolated quantile"),
        aggregate("QUANTILE_DISC", "Discrete quantile"),
        aggregate("HISTOGRAM", "Map of value to count"),
        aggregate("PRODUCT", "Product of values"),
        // Scalar functions
        scalar("LIST_VALUE", "Build a list from the arguments"),
        scalar("STRFTIME", "Format a timestamp as text"),
    ]);
    functions
}
