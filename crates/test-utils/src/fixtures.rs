// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Test fixtures and sample SQL queries

/// Sample SQL queries for testing
pub struct SqlFixtures;

impl SqlFixtures {
    // ===== Basic SELECT queries =====

    /// Simple SELECT with column list
    pub const fn simple_select() -> &'static str {
        "SELECT id, email, name FROM users"
    }

    /// SELECT with all columns
    pub const fn select_all() -> &'static str {
        "SELECT * FROM users"
    }

    /// SELECT with WHERE clause
    pub const fn select_with_where() -> &'static str {
        "SELECT id, name FROM users WHERE email LIKE '%@example.com'"
    }

    /// SELECT with ORDER BY and LIMIT
    pub const fn select_with_order_limit() -> &'static str {
        "SELECT id, name FROM users ORDER BY name ASC LIMIT 10"
    }

    /// Parenthesised SELECT
    pub const fn parenthesised_select() -> &'static str {
        "(SELECT id FROM users)"
    }

    // ===== JOIN queries =====

    /// INNER JOIN
    pub const fn inner_join() -> &'static str {
        "SELECT users.name, orders.total
         FROM users
         INNER JOIN orders ON users.id = orders.user_id"
    }

    // ===== Aggregation queries =====

    /// Simple COUNT
    pub const fn count_aggregation() -> &'static str {
        "SELECT COUNT(*) FROM users"
    }

    /// GROUP BY
    pub const fn group_by() -> &'static str {
        "SELECT status, COUNT(*) AS count
         FROM orders
         GROUP BY status"
    }

    /// GROUP BY with HAVING
    pub const fn group_by_having() -> &'static str {
        "SELECT user_id, SUM(total) AS total_spent
         FROM orders
         GROUP BY user_id
         HAVING SUM(total) > 1000"
    }

    /// Aggregate in ORDER BY
    pub const fn order_by_aggregate() -> &'static str {
        "SELECT user_id FROM orders GROUP BY user_id ORDER BY COUNT(*) DESC"
    }

    /// Window function over an aggregate
    pub const fn window_over_aggregate() -> &'static str {
        "SELECT user_id, SUM(SUM(total)) OVER (ORDER BY user_id) AS running
         FROM orders
         GROUP BY user_id"
    }

    // ===== Subqueries =====

    /// Simple subquery
    pub const fn simple_subquery() -> &'static str {
        "SELECT name FROM users
         WHERE id IN (SELECT user_id FROM orders WHERE total > 100)"
    }

    /// Aggregate inside a scalar subquery in WHERE
    pub const fn aggregate_subquery_in_where() -> &'static str {
        "SELECT id FROM orders WHERE total > (SELECT AVG(total) FROM orders)"
    }

    /// Correlated subquery
    pub const fn correlated_subquery() -> &'static str {
        "SELECT u.name, (SELECT COUNT(*) FROM orders o WHERE o.user_id = u.id) AS order_count
         FROM users u"
    }

    /// Derived table with aggregation
    pub const fn derived_table() -> &'static str {
        "SELECT t.user_id FROM (SELECT user_id, COUNT(*) AS n FROM orders GROUP BY user_id) AS t
         WHERE t.n > 3"
    }

    // ===== CTE (Common Table Expressions) =====

    /// CTE query
    pub const fn with_cte() -> &'static str {
        "WITH user_orders AS (
             SELECT user_id, COUNT(*) AS order_count
             FROM orders
             GROUP BY user_id
         )
         SELECT u.name, uo.order_count
         FROM users u
         INNER JOIN user_orders uo ON u.id = uo.user_id"
    }

    // ===== Invalid aggregate placement =====

    /// Aggregate directly in WHERE
    pub const fn aggregate_in_where() -> &'static str {
        "SELECT id FROM orders WHERE COUNT(*) > 1"
    }

    /// Aggregate in GROUP BY
    pub const fn aggregate_in_group_by() -> &'static str {
        "SELECT user_id FROM orders GROUP BY SUM(total)"
    }

    /// Aggregate nested inside another aggregate
    pub const fn nested_aggregate() -> &'static str {
        "SELECT MAX(COUNT(id)) FROM orders"
    }

    /// Window function in WHERE
    pub const fn window_in_where() -> &'static str {
        "SELECT id FROM orders WHERE ROW_NUMBER() OVER (ORDER BY id) = 1"
    }

    // ===== Statements that are not a single SELECT =====

    /// Simple INSERT
    pub const fn simple_insert() -> &'static str {
        "INSERT INTO users (email, name) VALUES ('test@example.com', 'Test User')"
    }

    /// Simple UPDATE
    pub const fn simple_update() -> &'static str {
        "UPDATE users SET name = 'Updated Name' WHERE id = 1"
    }

    /// DELETE
    pub const fn simple_delete() -> &'static str {
        "DELETE FROM t"
    }

    /// Set operation
    pub const fn union() -> &'static str {
        "SELECT id FROM users UNION SELECT user_id FROM orders"
    }

    /// Two statements
    pub const fn two_statements() -> &'static str {
        "SELECT 1; SELECT 2"
    }

    // ===== Syntax errors =====

    /// Bare SELECT keyword
    pub const fn bare_select() -> &'static str {
        "SELECT"
    }

    /// Dangling comparison operator
    pub const fn dangling_operator() -> &'static str {
        "SELECT id FROM users WHERE id = = 1"
    }

    /// Unterminated string literal
    pub const fn unterminated_string() -> &'static str {
        "SELECT id FROM users WHERE name = 'abc"
    }

    /// Every query expected to parse and validate cleanly
    pub fn valid_queries() -> Vec<&'static str> {
        vec![
            Self::simple_select(),
            Self::select_all(),
            Self::select_with_where(),
            Self::select_with_order_limit(),
            Self::parenthesised_select(),
            Self::inner_join(),
            Self::count_aggregation(),
            Self::group_by(),
            Self::group_by_having(),
            Self::order_by_aggregate(),
            Self::window_over_aggregate(),
            Self::simple_subquery(),
            Self::aggregate_subquery_in_where(),
            Self::correlated_subquery(),
            Self::derived_table(),
            Self::with_cte(),
        ]
    }

    /// Every statement expected to parse but not as a SELECT
    pub fn non_select_statements() -> Vec<&'static str> {
        vec![
            Self::simple_insert(),
            Self::simple_update(),
            Self::simple_delete(),
            Self::union(),
        ]
    }

    /// Every text expected to fail parsing
    pub fn unparseable() -> Vec<&'static str> {
        vec![
            "",
            "   ",
            Self::bare_select(),
            Self::dangling_operator(),
            Self::unterminated_string(),
            Self::two_statements(),
        ]
    }
}
