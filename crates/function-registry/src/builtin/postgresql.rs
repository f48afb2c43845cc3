// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! PostgreSQL builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin PostgreSQL functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("STRING_AGG", "Concatenate values with delimiter"),
        aggregate("ARRAY_AGG", "Collect values into an array"),
        aggregate("JSON_AGG", "Aggregate values as JSON"),
        aggregate("JSONB_AGG", "Aggregate values as JSONB"),
        aggregate("JSON_OBJECT_AGG", "Aggregate key/value pairs as a JSON object"),
        aggregate("JSONB_OBJECT_AGG", "Aggregate key/value pairs as a JSONB object"),
        aggregate("BOOL_AND", "True if all values are true"),
        aggregate("BOOL_OR", "True if any value is true"),
        aggregate("BIT_AND", "Bitwise AND of all values"),
        aggregate("BIT_OR", "Bitwise OR of all values"),
        aggregate("STDDEV", "Sample standard deviation"),
        aggregate("VARIANCE", "Sample variance"),
        aggregate("PERCENTILE_CONT", "Continuous percentile"),
        aggregate("PERCENTILE_DISC", "Discrete percentile"),
        aggregate("MODE", "Most frequent value"),
        aggregate("REGR_SLOPE", "Slope of the least-squares-fit line"),
        aggregate("REGR_INTERCEPT", "Intercept of the least-squares-fit line"),
        // Scalar functions
        scalar("DATE_TRUNC", "Truncate a timestamp to the given precision"),
        scalar("TO_CHAR", "Format a value as text"),
        scalar("GENERATE_SERIES", "Set of values from start to stop"),
    ]);
    functions
}
