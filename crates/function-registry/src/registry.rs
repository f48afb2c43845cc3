// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

use crate::{DialectFamily, FunctionMetadata, FunctionType, builtin};
use std::collections::HashMap;

/// Function registry for builtin SQL functions
///
/// This struct stores and provides lookup for builtin functions
/// across dialect families.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    /// Functions organized by dialect family
    functions: HashMap<DialectFamily, Vec<FunctionMetadata>>,
}

impl FunctionRegistry {
    /// Create a new function registry with all builtin functions loaded
    pub fn new() -> Self {
        let functions = DialectFamily::all()
            .iter()
            .map(|&family| (family, builtin::functions_for(family)))
            .collect();

        Self { functions }
    }

    /// Get all functions for a dialect family
    ///
    /// Returns an empty vector if the family has no functions loaded.
    pub fn get_functions(&self, family: DialectFamily) -> Vec<FunctionMetadata> {
        self.functions.get(&family).cloned().unwrap_or_default()
    }

    /// Lookup a single function by name and dialect family
    ///
    /// # Arguments
    ///
    /// * `family` - The dialect family to search in
    /// * `name` - The function name to lookup (case-insensitive). A qualified
    ///   name such as `pg_catalog.count` is looked up by its last part.
    ///
    /// # Returns
    ///
    /// `Some(&FunctionMetadata)` if found, `None` otherwise
    pub fn get_function(&self, family: DialectFamily, name: &str) -> Option<&FunctionMetadata> {
        let name = name.rsplit('.').next().unwrap_or(name);
        self.functions
            .get(&family)?
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// Check if a function exists for a dialect family
    pub fn has_function(&self, family: DialectFamily, name: &str) -> bool {
        self.get_function(family, name).is_some()
    }

    /// Check if `name` is a builtin aggregate function
    pub fn is_aggregate(&self, family: DialectFamily, name: &str) -> bool {
        self.function_type(family, name) == Some(FunctionType::Aggregate)
    }

    /// Check if `name` is a builtin window-only function
    pub fn is_window(&self, family: DialectFamily, name: &str) -> bool {
        self.function_type(family, name) == Some(FunctionType::Window)
    }

    fn function_type(&self, family: DialectFamily, name: &str) -> Option<FunctionType> {
        self.get_function(family, name).map(|f| f.function_type)
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
