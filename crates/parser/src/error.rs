// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Error types for the parser adapter
//!
//! Every rejection is a distinct variant so callers can render a specific
//! message. Nothing here is recovered from locally.

use serde::Serialize;
use sqlparser::parser::ParserError;
use std::fmt;

/// Result type alias for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Location of a syntax error in the original SQL text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourcePosition {
    /// Line number (1-based)
    pub line: u64,
    /// Column number (1-based)
    pub column: u64,
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors raised while turning SQL text into a SELECT statement
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq, Serialize)]
pub enum ParseError {
    /// The tokenizer or parser rejected the text
    #[error("SQL syntax error: {message}")]
    Syntax {
        message: String,
        position: Option<SourcePosition>,
    },

    /// No statement in the input
    #[error("No SQL statement found")]
    Empty,

    /// More than one statement in the input
    #[error("Expected a single SELECT statement, found {count} statements")]
    MultipleStatements { count: usize },

    /// A SELECT with nothing to select
    #[error("SELECT statement has an empty select list")]
    EmptyProjection,

    /// A single statement that is not a SELECT
    #[error("Expected a SELECT statement, found {found}")]
    NotSelect { found: String },

    /// Expression or query nesting exceeded the configured limit
    #[error("SQL nesting exceeds the parser recursion limit")]
    RecursionLimitExceeded,

    /// The parser has no dialect by this name
    #[error("Unknown SQL dialect: {name}")]
    UnknownDialect { name: String },
}

impl ParseError {
    /// Position of the error in the source text, if known
    pub fn position(&self) -> Option<SourcePosition> {
        match self {
            ParseError::Syntax { position, .. } => *position,
            _ => None,
        }
    }

    /// Check if this error came from the tokenizer or grammar
    pub fn is_syntax(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }

    fn syntax(message: String) -> Self {
        let position = extract_position(&message);
        ParseError::Syntax { message, position }
    }
}

impl From<ParserError> for ParseError {
    fn from(err: ParserError) -> Self {
        match err {
            ParserError::TokenizerError(message) | ParserError::ParserError(message) => {
                ParseError::syntax(message)
            }
            ParserError::RecursionLimitExceeded => ParseError::RecursionLimitExceeded,
        }
    }
}

/// Pull `Line: N, Column: M` out of a parser message.
///
/// The parser appends the location of the offending token as
/// `" at Line: N, Column: M"`; it is omitted when the location is unknown.
pub(crate) fn extract_position(message: &str) -> Option<SourcePosition> {
    let start = message.rfind("Line: ")?;
    let rest = &message[start + "Line: ".len()..];
    let (line, rest) = rest.split_once(", Column: ")?;
    let column: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();

    let line = line.trim().parse().ok()?;
    let column = column.parse().ok()?;
    if line == 0 {
        return None;
    }

    Some(SourcePosition { line, column })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_position() {
        let pos = extract_position("Expected: an expression, found: FROM at Line: 2, Column: 8");
        assert_eq!(pos, Some(SourcePosition { line: 2, column: 8 }));
    }

    #[test]
    fn test_extract_position_missing() {
        assert_eq!(extract_position("Expected: an expression, found: EOF"), None);
        assert_eq!(extract_position("at Line: x, Column: 3"), None);
        assert_eq!(extract_position("at Line: 0, Column: 0"), None);
    }

    #[test]
    fn test_from_parser_error() {
        let err: ParseError =
            ParserError::ParserError("Expected: ), found: EOF at Line: 1, Column: 12".into())
                .into();
        assert!(err.is_syntax());
        assert_eq!(err.position(), Some(SourcePosition { line: 1, column: 12 }));

        let err: ParseError = ParserError::RecursionLimitExceeded.into();
        assert_eq!(err, ParseError::RecursionLimitExceeded);
        assert_eq!(err.position(), None);
    }

    #[test]
    fn test_tokenizer_error_is_syntax() {
        let err: ParseError =
            ParserError::TokenizerError("Unterminated string literal at Line: 1, Column: 8".into())
                .into();
        assert!(err.is_syntax());
        assert_eq!(err.position(), Some(SourcePosition { line: 1, column: 8 }));
    }

    #[test]
    fn test_error_display_not_select() {
        let err = ParseError::NotSelect {
            found: "DELETE".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("SELECT"));
        assert!(msg.contains("DELETE"));
    }

    #[test]
    fn test_error_display_multiple_statements() {
        let msg = format!("{}", ParseError::MultipleStatements { count: 3 });
        assert!(msg.contains("single"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_error_serialization() {
        let err = ParseError::UnknownDialect {
            name: "oracle".to_string(),
        };
        let json = serde_json::to_string(&err);
        assert!(json.is_ok());
    }
}
