// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! MySQL builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin MySQL functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("GROUP_CONCAT", "Concatenate values from multiple rows"),
        aggregate("JSON_ARRAYAGG", "Aggregate values as a JSON array"),
        aggregate("JSON_OBJECTAGG", "Aggregate key/value pairs as a JSON object"),
        aggregate("BIT_AND", "Bitwise AND of all values"),
        aggregate("BIT_OR", "Bitwise OR of all values"),
        aggregate("BIT_XOR", "Bitwise XOR of all values"),
        aggregate("STD", "Population standard deviation"),
        aggregate("STDDEV", "Population standard deviation"),
        aggregate("VARIANCE", "Population variance"),
        // Scalar functions
        scalar("IFNULL", "Second argument if the first is null"),
        scalar("DATE_FORMAT", "Format a date as text"),
        scalar("SUBSTRING_INDEX", "Substring before a delimiter occurrence"),
    ]);
    functions
}
