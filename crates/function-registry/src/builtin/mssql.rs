// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! SQL Server builtin function definitions

use super::{aggregate, ansi, scalar};
use crate::FunctionMetadata;

/// Get all builtin SQL Server functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    let mut functions = ansi::all_functions();
    functions.extend([
        // Aggregate functions
        aggregate("STRING_AGG", "Concatenate values with delimiter"),
        aggregate("COUNT_BIG", "Count of rows as bigint"),
        aggregate("STDEV", "Sample standard deviation"),
        aggregate("STDEVP", "Population standard deviation"),
        aggregate("VAR", "Sample variance"),
        aggregate("VARP", "Population variance"),
        aggregate("CHECKSUM_AGG", "Checksum of the values in a group"),
        aggregate("APPROX_COUNT_DISTINCT", "Approximate count of distinct values"),
        // Scalar functions
        scalar("ISNULL", "Replacement value if the first is null"),
        scalar("GETDATE", "Current date and time"),
        scalar("DATEADD", "Add an interval to a date"),
    ]);
    functions
}
