// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Snowflake builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin Snowflake functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("LISTAGG", "Concatenate values with delimiter"),
        aggregate("ARRAY_AGG", "Collect values into an array"),
        aggregate("OBJECT_AGG", "Aggregate key/value pairs as an object"),
        aggregate("MEDIAN", "Middle value"),
        aggregate("MODE", "Most frequent value"),
        aggregate("BOOLAND_AGG", "True if all values are true"),
        aggregate("BOOLOR_AGG", "True if any value is true"),
        aggregate("COUNT_IF", "Count of rows where the condition is true"),
        aggregate("APPROX_COUNT_DISTINCT", "Approximate count of distinct values"),
        aggregate("HLL", "HyperLogLog distinct count estimate"),
        aggregate("KURTOSIS", "Excess kurtosis of values"),
        aggregate("SKEW", "Skewness of values"),
        // Scalar functions
        scalar("IFF", "One of two values depending on a condition"),
        scalar("ZEROIFNULL", "Zero if the argument is null"),
    ]);
    functions
}
