// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! ANSI builtin function definitions shared by every dialect

use super::{aggregate, scalar, window};
use crate::FunctionMetadata;

/// Get all ANSI builtin functions
pub fn all_functions() -> Vec<FunctionMetadata> {
    vec![
        // Aggregate functions
        aggregate("COUNT", "Count the number of rows"),
        aggregate("SUM", "Sum of values"),
        aggregate("AVG", "Average of values"),
        aggregate("MIN", "Minimum value"),
        aggregate("MAX", "Maximum value"),
        aggregate("EVERY", "True if all values are true"),
        aggregate("STDDEV_POP", "Population standard deviation"),
        aggregate("STDDEV_SAMP", "Sample standard deviation"),
        aggregate("VAR_POP", "Population variance"),
        aggregate("VAR_SAMP", "Sample variance"),
        aggregate("COVAR_POP", "Population covariance"),
        aggregate("COVAR_SAMP", "Sample covariance"),
        aggregate("CORR", "Correlation coefficient"),
        aggregate("ANY_VALUE", "An arbitrary value from the group"),
        // Window functions
        window("ROW_NUMBER", "Number of the current row within its partition"),
        window("RANK", "Rank of the current row with gaps"),
        window("DENSE_RANK", "Rank of the current row without gaps"),
        window("PERCENT_RANK", "Relative rank of the current row"),
        window("CUME_DIST", "Cumulative distribution of the current row"),
        window("NTILE", "Bucket number of the current row"),
        window("LAG", "Value from a preceding row"),
        window("LEAD", "Value from a following row"),
        window("FIRST_VALUE", "Value from the first row of the window frame"),
        window("LAST_VALUE", "Value from the last row of the window frame"),
        window("NTH_VALUE", "Value from the n-th row of the window frame"),
        // Scalar functions
        scalar("ABS", "Absolute value"),
        scalar("COALESCE", "First non-null argument"),
        scalar("NULLIF", "Null if both arguments are equal"),
        scalar("UPPER", "Convert to uppercase"),
        scalar("LOWER", "Convert to lowercase"),
        scalar("LENGTH", "String length"),
        scalar("ROUND", "Round to nearest decimal"),
        scalar("CONCAT", "Concatenate strings"),
    ]
}
