// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQLite builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin SQLite functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("GROUP_CONCAT", "Concatenate values from multiple rows"),
        aggregate("STRING_AGG", "Concatenate values with delimiter"),
        aggregate("TOTAL", "Floating-point sum of values"),
        aggregate("JSON_GROUP_ARRAY", "Aggregate values as a JSON array"),
        aggregate("JSON_GROUP_OBJECT", "Aggregate key/value pairs as a JSON object"),
        // Scalar functions
        scalar("IFNULL", "Second argument if the first is null"),
        scalar("SUBSTR", "Substring of a string"),
        scalar("STRFTIME", "Format a date as text"),
    ]);
    functions
}
