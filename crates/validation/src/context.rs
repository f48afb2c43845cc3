// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Validation Context
//!
//! Where the walker currently is inside a `SELECT`, as a set of flags.
//!
//! A context is a plain value. The walker starts from
//! [`ValidationContext::new`] and, when it descends into a clause or an
//! aggregate call, derives a child with one more flag set and hands the child
//! to the recursive call. The parent is untouched and is still what sibling
//! subtrees see.
//!
//! ```text
//! SELECT  COUNT(x)   FROM t  WHERE  a > MAX(b)   GROUP BY c
//!         └ aggregate         └ where └ where+aggregate
//!                                                └ group_by
//! ```
//!
//! Flags are booleans, not counters: entering a scope that is already set
//! yields an equal context.

use serde::{Deserialize, Serialize};

/// Nesting state during a walk of one `SELECT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ValidationContext {
    in_where: bool,
    in_group_by: bool,
    in_aggregate: bool,
    in_order_by: bool,
    in_having: bool,
}

impl ValidationContext {
    /// Top-level SELECT scope; every flag false
    pub const fn new() -> Self {
        Self {
            in_where: false,
            in_group_by: false,
            in_aggregate: false,
            in_order_by: false,
            in_having: false,
        }
    }

    /// Context for the operands of a `WHERE` clause
    #[must_use]
    pub const fn enter_where(self) -> Self {
        Self {
            in_where: true,
            ..self
        }
    }

    /// Context for the expressions of a `GROUP BY` clause
    #[must_use]
    pub const fn enter_group_by(self) -> Self {
        Self {
            in_group_by: true,
            ..self
        }
    }

    /// Context for the arguments of an aggregate function call
    #[must_use]
    pub const fn enter_aggregate(self) -> Self {
        Self {
            in_aggregate: true,
            ..self
        }
    }

    /// Context for the expressions of an `ORDER BY` clause
    #[must_use]
    pub const fn enter_order_by(self) -> Self {
        Self {
            in_order_by: true,
            ..self
        }
    }

    /// Context for the condition of a `HAVING` clause
    #[must_use]
    pub const fn enter_having(self) -> Self {
        Self {
            in_having: true,
            ..self
        }
    }

    pub const fn in_where(&self) -> bool {
        self.in_where
    }

    pub const fn in_group_by(&self) -> bool {
        self.in_group_by
    }

    pub const fn in_aggregate(&self) -> bool {
        self.in_aggregate
    }

    pub const fn in_order_by(&self) -> bool {
        self.in_order_by
    }

    pub const fn in_having(&self) -> bool {
        self.in_having
    }

    /// True when no flag is set
    pub const fn is_top_level(&self) -> bool {
        !(self.in_where
            || self.in_group_by
            || self.in_aggregate
            || self.in_order_by
            || self.in_having)
    }

    /// Name of the innermost clause, for diagnostics
    pub fn clause_name(&self) -> &'static str {
        if self.in_where {
            "WHERE"
        } else if self.in_group_by {
            "GROUP BY"
        } else if self.in_having {
            "HAVING"
        } else if self.in_order_by {
            "ORDER BY"
        } else {
            "SELECT"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_new_context_all_false() {
        let ctx = ValidationContext::new();
        assert!(!ctx.in_where());
        assert!(!ctx.in_group_by());
        assert!(!ctx.in_aggregate());
        assert!(!ctx.in_order_by());
        assert!(!ctx.in_having());
        assert!(ctx.is_top_level());
        assert_eq!(ctx, ValidationContext::default());
    }

    #[test]
    fn test_enter_aggregate_keeps_where_and_leaves_original() {
        let where_ctx = ValidationContext::new().enter_where();
        let agg_ctx = where_ctx.enter_aggregate();

        assert!(agg_ctx.in_where());
        assert!(agg_ctx.in_aggregate());
        assert!(where_ctx.in_where());
        assert!(!where_ctx.in_aggregate());
        assert_ne!(where_ctx, agg_ctx);
    }

    #[test]
    fn test_each_enter_flips_exactly_one_flag() {
        let base = ValidationContext::new();

        let ctx = base.enter_where();
        assert!(ctx.in_where() && !ctx.in_group_by() && !ctx.in_aggregate());
        assert!(!ctx.in_order_by() && !ctx.in_having());

        let ctx = base.enter_group_by();
        assert!(ctx.in_group_by() && !ctx.in_where() && !ctx.in_aggregate());
        assert!(!ctx.in_order_by() && !ctx.in_having());

        let ctx = base.enter_aggregate();
        assert!(ctx.in_aggregate() && !ctx.in_where() && !ctx.in_group_by());
        assert!(!ctx.in_order_by() && !ctx.in_having());

        let ctx = base.enter_order_by();
        assert!(ctx.in_order_by() && !ctx.in_where() && !ctx.in_group_by());
        assert!(!ctx.in_aggregate() && !ctx.in_having());

        let ctx = base.enter_having();
        assert!(ctx.in_having() && !ctx.in_where() && !ctx.in_group_by());
        assert!(!ctx.in_aggregate() && !ctx.in_order_by());

        assert!(base.is_top_level());
    }

    #[test]
    fn test_enter_is_idempotent() {
        let once = ValidationContext::new().enter_aggregate();
        let twice = once.enter_aggregate();
        assert_eq!(once, twice);

        let once = ValidationContext::new().enter_having();
        assert_eq!(once, once.enter_having());
    }

    #[test]
    fn test_enter_order_is_irrelevant() {
        let a = ValidationContext::new().enter_where().enter_aggregate();
        let b = ValidationContext::new().enter_aggregate().enter_where();
        assert_eq!(a, b);
    }

    #[test]
    fn test_clause_name() {
        assert_eq!(ValidationContext::new().clause_name(), "SELECT");
        assert_eq!(ValidationContext::new().enter_where().clause_name(), "WHERE");
        assert_eq!(
            ValidationContext::new().enter_group_by().enter_aggregate().clause_name(),
            "GROUP BY"
        );
        assert_eq!(ValidationContext::new().enter_having().clause_name(), "HAVING");
        assert_eq!(ValidationContext::new().enter_order_by().clause_name(), "ORDER BY");
    }

    #[test]
    fn test_concurrent_derivation_from_shared_context() {
        let shared = Arc::new(ValidationContext::new().enter_where());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let mut derived = Vec::new();
                    for _ in 0..1000 {
                        derived.push(shared.enter_aggregate());
                    }
                    derived
                })
            })
            .collect();

        for handle in handles {
            for ctx in handle.join().unwrap() {
                assert!(ctx.in_where());
                assert!(ctx.in_aggregate());
                assert!(!ctx.in_group_by());
            }
        }

        assert!(shared.in_where());
        assert!(!shared.in_aggregate());
    }

    #[test]
    fn test_context_serialization() {
        let ctx = ValidationContext::new().enter_having().enter_aggregate();
        let json = serde_json::to_string(&ctx).unwrap();
        let back: ValidationContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}
