// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Function metadata types

use serde::{Deserialize, Serialize};

/// Function classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionType {
    Scalar,
    Aggregate,
    Window,
}

/// Metadata for a builtin function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    /// Function name (upper case)
    pub name: String,
    /// Function type (scalar, aggregate, window)
    pub function_type: FunctionType,
    /// Function description/documentation
    pub description: Option<String>,
}

impl FunctionMetadata {
    /// Create new scalar function metadata with builder pattern
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function_type: FunctionType::Scalar,
            description: None,
        }
    }

    /// Builder method: set function type
    pub fn with_type(mut self, function_type: FunctionType) -> Self {
        self.function_type = function_type;
        self
    }

    /// Builder method: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn is_aggregate(&self) -> bool {
        self.function_type == FunctionType::Aggregate
    }

    pub fn is_window(&self) -> bool {
        self.function_type == FunctionType::Window
    }
}
