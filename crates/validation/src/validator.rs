// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Context-sensitive SELECT validation
//!
//! [`SqlValidator`] walks a [`SelectStatement`] depth-first. Each clause is
//! visited with a [`ValidationContext`] derived from its parent, and every
//! function call is checked against the flags of the context it sits in.
//!
//! | Clause | Context handed to its expressions |
//! |--------|-----------------------------------|
//! | projection | unchanged |
//! | `WHERE` | `enter_where` |
//! | `GROUP BY` | `enter_group_by` |
//! | `HAVING` | `enter_having` |
//! | query `ORDER BY` | `enter_order_by` |
//! | aggregate arguments | `enter_aggregate` |
//!
//! Subqueries, derived tables and CTEs restart from [`ValidationContext::new`].

use queryvis_function_registry::{DialectFamily, FunctionRegistry};
use queryvis_sql_parser::SelectStatement;
use sqlparser::ast::{
    Distinct, Expr, Function, FunctionArg, FunctionArgExpr, FunctionArguments, GroupByExpr,
    JoinConstraint, JoinOperator, NamedWindowDefinition, NamedWindowExpr, Query, Select,
    SelectItem, SetExpr, TableFactor, TableWithJoins, WindowSpec, WindowType,
};
use tracing::{debug, trace};

use crate::config::ValidatorConfig;
use crate::context::ValidationContext;
use crate::error::{IssueCode, ValidationIssue, ValidationReport};

/// Validator for parsed SELECT statements
///
/// Holds the builtin [`FunctionRegistry`] and a [`ValidatorConfig`]. The
/// dialect is read from each statement, so one validator serves every
/// database type.
#[derive(Debug, Clone)]
pub struct SqlValidator {
    registry: FunctionRegistry,
    config: ValidatorConfig,
}

impl SqlValidator {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            registry: FunctionRegistry::new(),
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate one statement
    ///
    /// Never fails; rule violations are collected in the returned report in
    /// the order the walk meets them.
    pub fn validate(&self, stmt: &SelectStatement) -> ValidationReport {
        let family = DialectFamily::of(stmt.dialect());
        debug!(
            "Validating SELECT as {} ({:?} functions)",
            stmt.dialect(),
            family
        );

        let mut walker = Walker {
            registry: &self.registry,
            config: &self.config,
            family,
            issues: Vec::new(),
            depth_reported: false,
        };
        walker.visit_query(stmt.query(), ValidationContext::new(), 0);

        debug!("Validation finished with {} issue(s)", walker.issues.len());
        ValidationReport::new(walker.issues)
    }
}

impl Default for SqlValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// How a call site is classified for the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Aggregate,
    Window,
    Other,
}

/// Mutable state of one walk
struct Walker<'a> {
    registry: &'a FunctionRegistry,
    config: &'a ValidatorConfig,
    family: DialectFamily,
    issues: Vec<ValidationIssue>,
    depth_reported: bool,
}

impl Walker<'_> {
    fn report(&mut self, code: IssueCode, message: String, ctx: ValidationContext) {
        if !self.config.is_enabled(code) {
            trace!("Rule {} disabled, dropping: {}", code, message);
            return;
        }
        debug!("{} in {}: {}", code, ctx.clause_name(), message);
        self.issues.push(ValidationIssue::new(code, message, ctx));
    }

    /// Returns false once the walk is deeper than the configured limit
    fn within_depth(&mut self, depth: usize, ctx: ValidationContext) -> bool {
        if depth <= self.config.max_depth {
            return true;
        }
        if !self.depth_reported {
            self.depth_reported = true;
            let message = format!(
                "Query nesting exceeds {} levels; deeper expressions were not validated",
                self.config.max_depth
            );
            self.report(IssueCode::RecursionLimit, message, ctx);
        }
        false
    }

    fn visit_query(&mut self, query: &Query, ctx: ValidationContext, depth: usize) {
        if !self.within_depth(depth, ctx) {
            return;
        }
        let next = depth + 1;

        if let Some(with) = &query.with {
            for cte in &with.cte_tables {
                trace!("Entering CTE {}", cte.alias.name);
                self.visit_query(&cte.query, ValidationContext::new(), next);
            }
        }

        self.visit_set_expr(&query.body, ctx, next);

        if let Some(order_by) = &query.order_by {
            let order_ctx = ctx.enter_order_by();
            trace!("Entering ORDER BY: {:?}", order_ctx);
            for item in &order_by.exprs {
                self.visit_expr(&item.expr, order_ctx, next);
            }
        }

        let paging = query
            .limit
            .iter()
            .chain(query.offset.iter().map(|offset| &offset.value))
            .chain(&query.limit_by);
        for expr in paging {
            self.visit_expr(expr, ctx, next);
        }
    }

    fn visit_set_expr(&mut self, body: &SetExpr, ctx: ValidationContext, depth: usize) {
        if !self.within_depth(depth, ctx) {
            return;
        }

        match body {
            SetExpr::Select(select) => self.visit_select(select, ctx, depth + 1),
            SetExpr::Query(query) => self.visit_query(query, ctx, depth + 1),
            SetExpr::SetOperation { left, right, .. } => {
                self.visit_set_expr(left, ctx, depth + 1);
                self.visit_set_expr(right, ctx, depth + 1);
            }
            _ => {}
        }
    }

    fn visit_select(&mut self, select: &Select, ctx: ValidationContext, depth: usize) {
        let next = depth + 1;

        if let Some(Distinct::On(exprs)) = &select.distinct {
            for expr in exprs {
                self.visit_expr(expr, ctx, next);
            }
        }

        for item in &select.projection {
            match item {
                SelectItem::UnnamedExpr(expr) | SelectItem::ExprWithAlias { expr, .. } => {
                    self.visit_expr(expr, ctx, next);
                }
                _ => {}
            }
        }

        for table in &select.from {
            self.visit_table_with_joins(table, ctx, next);
        }

        let where_ctx = ctx.enter_where();
        for selection in select.prewhere.iter().chain(&select.selection) {
            trace!("Entering WHERE: {:?}", where_ctx);
            self.visit_expr(selection, where_ctx, next);
        }

        if let GroupByExpr::Expressions(exprs, _) = &select.group_by {
            let group_ctx = ctx.enter_group_by();
            trace!("Entering GROUP BY: {:?}", group_ctx);
            for expr in exprs {
                self.visit_expr(expr, group_ctx, next);
            }
        }

        if let Some(having) = &select.having {
            let having_ctx = ctx.enter_having();
            trace!("Entering HAVING: {:?}", having_ctx);
            self.visit_expr(having, having_ctx, next);
        }

        for NamedWindowDefinition(name, window) in &select.named_window {
            if let NamedWindowExpr::WindowSpec(spec) = window {
                trace!("Entering WINDOW {}", name);
                self.visit_window_spec(spec, ctx, next);
            }
        }

        if let Some(qualify) = &select.qualify {
            self.visit_expr(qualify, ctx, next);
        }
    }

    fn visit_table_with_joins(
        &mut self,
        table: &TableWithJoins,
        ctx: ValidationContext,
        depth: usize,
    ) {
        self.visit_table_factor(&table.relation, depth + 1);
        for join in &table.joins {
            self.visit_table_factor(&join.relation, depth + 1);
            for condition in join_conditions(&join.join_operator) {
                self.visit_expr(condition, ctx, depth + 1);
            }
        }
    }

    fn visit_table_factor(&mut self, factor: &TableFactor, depth: usize) {
        match factor {
            TableFactor::Derived { subquery, .. } => {
                trace!("Entering derived table");
                self.visit_query(subquery, ValidationContext::new(), depth + 1);
            }
            TableFactor::NestedJoin {
                table_with_joins, ..
            } => {
                let ctx = ValidationContext::new();
                self.visit_table_with_joins(table_with_joins, ctx, depth + 1);
            }
            _ => {}
        }
    }

    fn visit_exprs<'e>(
        &mut self,
        exprs: impl IntoIterator<Item = &'e Expr>,
        ctx: ValidationContext,
        depth: usize,
    ) {
        for expr in exprs {
            self.visit_expr(expr, ctx, depth);
        }
    }

    fn visit_expr(&mut self, expr: &Expr, ctx: ValidationContext, depth: usize) {
        if !self.within_depth(depth, ctx) {
            return;
        }
        let next = depth + 1;

        match expr {
            Expr::Function(func) => self.visit_function(func, ctx, depth),
            Expr::BinaryOp { left, right, .. }
            | Expr::AnyOp { left, right, .. }
            | Expr::AllOp { left, right, .. }
            | Expr::IsDistinctFrom(left, right)
            | Expr::IsNotDistinctFrom(left, right)
            | Expr::AtTimeZone {
                timestamp: left,
                time_zone: right,
            }
            | Expr::Position {
                expr: left,
                r#in: right,
            }
            | Expr::InUnnest {
                expr: left,
                array_expr: right,
                ..
            }
            | Expr::Like {
                expr: left,
                pattern: right,
                ..
            }
            | Expr::ILike {
                expr: left,
                pattern: right,
                ..
            }
            | Expr::SimilarTo {
                expr: left,
                pattern: right,
                ..
            }
            | Expr::RLike {
                expr: left,
                pattern: right,
                ..
            } => {
                self.visit_expr(left, ctx, next);
                self.visit_expr(right, ctx, next);
            }
            Expr::UnaryOp { expr, .. }
            | Expr::Nested(expr)
            | Expr::Cast { expr, .. }
            | Expr::Convert { expr, .. }
            | Expr::Collate { expr, .. }
            | Expr::Extract { expr, .. }
            | Expr::Ceil { expr, .. }
            | Expr::Floor { expr, .. }
            | Expr::IsNull(expr)
            | Expr::IsNotNull(expr)
            | Expr::IsTrue(expr)
            | Expr::IsNotTrue(expr)
            | Expr::IsFalse(expr)
            | Expr::IsNotFalse(expr)
            | Expr::IsUnknown(expr)
            | Expr::IsNotUnknown(expr) => self.visit_expr(expr, ctx, next),
            Expr::Interval(interval) => self.visit_expr(&interval.value, ctx, next),
            Expr::Between {
                expr, low, high, ..
            } => {
                self.visit_exprs([&**expr, &**low, &**high], ctx, next);
            }
            Expr::InList { expr, list, .. } => {
                self.visit_expr(expr, ctx, next);
                self.visit_exprs(list, ctx, next);
            }
            Expr::InSubquery { expr, subquery, .. } => {
                self.visit_expr(expr, ctx, next);
                self.visit_subquery(subquery, next);
            }
            Expr::Subquery(query) | Expr::Exists { subquery: query, .. } => {
                self.visit_subquery(query, next);
            }
            Expr::Case {
                operand,
                conditions,
                results,
                else_result,
            } => {
                let branches = operand
                    .iter()
                    .map(|operand| &**operand)
                    .chain(conditions)
                    .chain(results)
                    .chain(else_result.iter().map(|other| &**other));
                self.visit_exprs(branches, ctx, next);
            }
            Expr::Tuple(items) | Expr::Struct { values: items, .. } => {
                self.visit_exprs(items, ctx, next);
            }
            Expr::Array(array) => self.visit_exprs(&array.elem, ctx, next),
            Expr::Rollup(sets) | Expr::Cube(sets) | Expr::GroupingSets(sets) => {
                self.visit_exprs(sets.iter().flatten(), ctx, next);
            }
            Expr::Substring {
                expr,
                substring_from,
                substring_for,
                ..
            } => {
                self.visit_expr(expr, ctx, next);
                let parts = substring_from.iter().chain(substring_for).map(|part| &**part);
                self.visit_exprs(parts, ctx, next);
            }
            Expr::Trim {
                expr,
                trim_what,
                trim_characters,
                ..
            } => {
                self.visit_expr(expr, ctx, next);
                self.visit_exprs(trim_what.iter().map(|what| &**what), ctx, next);
                self.visit_exprs(trim_characters.iter().flatten(), ctx, next);
            }
            Expr::Overlay {
                expr,
                overlay_what,
                overlay_from,
                overlay_for,
            } => {
                self.visit_exprs([&**expr, &**overlay_what, &**overlay_from], ctx, next);
                self.visit_exprs(overlay_for.iter().map(|part| &**part), ctx, next);
            }
            // identifiers, literals and other leaves
            _ => {}
        }
    }

    fn visit_subquery(&mut self, query: &Query, depth: usize) {
        trace!("Entering subquery");
        self.visit_query(query, ValidationContext::new(), depth);
    }

    fn visit_window_spec(&mut self, spec: &WindowSpec, ctx: ValidationContext, depth: usize) {
        self.visit_exprs(&spec.partition_by, ctx, depth);
        self.visit_exprs(spec.order_by.iter().map(|item| &item.expr), ctx, depth);
    }

    fn visit_function(&mut self, func: &Function, ctx: ValidationContext, depth: usize) {
        let name = function_name(func);
        let kind = self.classify(func, &name);
        let display = name.to_uppercase();

        match kind {
            CallKind::Aggregate => self.check_aggregate(&display, ctx),
            CallKind::Window => self.check_window(&display, ctx),
            CallKind::Other => {}
        }

        let arg_ctx = if kind == CallKind::Aggregate {
            ctx.enter_aggregate()
        } else {
            ctx
        };
        let next = depth + 1;

        match &func.args {
            FunctionArguments::List(list) => {
                let args = list.args.iter().filter_map(function_arg_expr);
                self.visit_exprs(args, arg_ctx, next);
            }
            FunctionArguments::Subquery(query) => self.visit_subquery(query, next),
            FunctionArguments::None => {}
        }

        if let Some(filter) = &func.filter {
            self.visit_expr(filter, arg_ctx, next);
        }
        let within_group = func.within_group.iter().map(|item| &item.expr);
        self.visit_exprs(within_group, arg_ctx, next);

        if let Some(WindowType::WindowSpec(spec)) = &func.over {
            self.visit_window_spec(spec, ctx, next);
        }
    }

    fn classify(&self, func: &Function, name: &str) -> CallKind {
        if func.over.is_some() || self.registry.is_window(self.family, name) {
            CallKind::Window
        } else if self.registry.is_aggregate(self.family, name)
            || self.config.is_extra_aggregate(name)
        {
            CallKind::Aggregate
        } else {
            CallKind::Other
        }
    }

    fn check_aggregate(&mut self, name: &str, ctx: ValidationContext) {
        if ctx.in_where() {
            self.report(
                IssueCode::AggregateInWhere,
                format!("Aggregate function {} is not allowed in WHERE clause", name),
                ctx,
            );
        }
        if ctx.in_group_by() {
            self.report(
                IssueCode::AggregateInGroupBy,
                format!("Aggregate function {} is not allowed in GROUP BY clause", name),
                ctx,
            );
        }
        if ctx.in_aggregate() {
            self.report(
                IssueCode::NestedAggregate,
                format!(
                    "Aggregate function {} cannot be nested inside another aggregate",
                    name
                ),
                ctx,
            );
        }
    }

    fn check_window(&mut self, name: &str, ctx: ValidationContext) {
        let checks = [
            (ctx.in_where(), IssueCode::WindowInWhere, "WHERE clause"),
            (ctx.in_group_by(), IssueCode::WindowInGroupBy, "GROUP BY clause"),
            (ctx.in_having(), IssueCode::WindowInHaving, "HAVING clause"),
            (
                ctx.in_aggregate(),
                IssueCode::WindowInAggregate,
                "aggregate function arguments",
            ),
        ];
        for (applies, code, place) in checks {
            if applies {
                self.report(
                    code,
                    format!("Window function {} is not allowed in {}", name, place),
                    ctx,
                );
            }
        }
    }
}

/// Unquoted last part of the function name
fn function_name(func: &Function) -> String {
    match func.name.0.last() {
        Some(ident) => ident.value.clone(),
        None => func.name.to_string(),
    }
}

fn function_arg_expr(arg: &FunctionArg) -> Option<&Expr> {
    let arg_expr = match arg {
        FunctionArg::Unnamed(arg_expr)
        | FunctionArg::Named { arg: arg_expr, .. }
        | FunctionArg::ExprNamed { arg: arg_expr, .. } => arg_expr,
    };
    match arg_expr {
        FunctionArgExpr::Expr(expr) => Some(expr),
        _ => None,
    }
}

/// `ON` and `MATCH_CONDITION` expressions of a join
fn join_conditions(op: &JoinOperator) -> Vec<&Expr> {
    let (constraint, match_condition) = match op {
        JoinOperator::Inner(constraint)
        | JoinOperator::LeftOuter(constraint)
        | JoinOperator::RightOuter(constraint)
        | JoinOperator::FullOuter(constraint)
        | JoinOperator::LeftSemi(constraint)
        | JoinOperator::RightSemi(constraint)
        | JoinOperator::LeftAnti(constraint)
        | JoinOperator::RightAnti(constraint) => (constraint, None),
        JoinOperator::AsOf {
            match_condition,
            constraint,
        } => (constraint, Some(match_condition)),
        _ => return Vec::new(),
    };

    let mut conditions: Vec<&Expr> = match_condition.into_iter().collect();
    if let JoinConstraint::On(expr) = constraint {
        conditions.push(expr);
    }
    conditions
}

#[cfg(test)]
mod tests {
    use super::*;
    use queryvis_sql_parser::parse_sql;

    fn codes(sql: &str, validator: &SqlValidator) -> Vec<IssueCode> {
        let stmt = parse_sql(sql, "postgresql").unwrap();
        validator
            .validate(&stmt)
            .issues()
            .iter()
            .map(|issue| issue.code)
            .collect()
    }

    #[test]
    fn test_clean_query_has_no_issues() {
        let validator = SqlValidator::new();
        assert!(codes("SELECT id, name FROM users WHERE id > 1", &validator).is_empty());
    }

    #[test]
    fn test_issue_context_recorded() {
        let validator = SqlValidator::new();
        let stmt = parse_sql("SELECT a FROM t WHERE SUM(a) > 1", "postgresql").unwrap();
        let report = validator.validate(&stmt);

        let issue = &report.issues()[0];
        assert_eq!(issue.code, IssueCode::AggregateInWhere);
        assert!(issue.context.in_where());
        assert!(!issue.context.in_aggregate());
        assert!(issue.message.contains("SUM"));
    }

    #[test]
    fn test_depth_limit_reported_once() {
        let validator = SqlValidator::with_config(ValidatorConfig::default().with_max_depth(3));
        let found = codes("SELECT ((((a + 1) + 2) + 3) + 4), ((((b)))) FROM t", &validator);
        assert_eq!(found, vec![IssueCode::RecursionLimit]);
    }

    #[test]
    fn test_window_over_aggregate_is_legal() {
        let validator = SqlValidator::new();
        let found = codes("SELECT SUM(SUM(x)) OVER () FROM t GROUP BY y", &validator);
        assert!(found.is_empty(), "unexpected issues: {:?}", found);
    }

    #[test]
    fn test_join_condition_visited() {
        let validator = SqlValidator::new();
        let found = codes(
            "SELECT a.id FROM a JOIN b ON a.id = (SELECT MAX(id) FROM c WHERE COUNT(*) > 0)",
            &validator,
        );
        assert_eq!(found, vec![IssueCode::AggregateInWhere]);
    }

    #[test]
    fn test_semi_and_anti_join_conditions_visited() {
        let validator = SqlValidator::new();
        for join in ["LEFT SEMI JOIN", "LEFT ANTI JOIN"] {
            let sql = format!("SELECT a.id FROM a {join} b ON MAX(COUNT(b.id)) > 0");
            let stmt = parse_sql(&sql, "generic").unwrap();
            let report = validator.validate(&stmt);
            assert!(report.has_code(IssueCode::NestedAggregate), "{}", sql);
        }
    }

    #[test]
    fn test_validator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqlValidator>();
    }
}
