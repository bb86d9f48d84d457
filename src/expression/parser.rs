//! Parsing support for boolean expressions

use super::error::ExpressionError;
use super::Expr;
use lalrpop_util::ParseError;
use std::fmt;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    include!(concat!(env!("OUT_DIR"), "/expression/bool_expr.rs"));
}

impl Expr {
    /// Parse a boolean expression from a string
    ///
    /// Supported notation:
    /// - adjacency for AND: `ab`
    /// - `+` for OR: `a + b`
    /// - postfix `'` for NOT: `a'`, `(a + b)'`
    /// - `(...)` and `[...]` for grouping; each kind closes with its own
    ///   partner
    ///
    /// The input is normalized first (whitespace stripped, letters
    /// lowercased), so `A B' + c` parses the same as `ab'+c`. Error
    /// positions refer to the normalized string.
    pub fn parse(input: &str) -> Result<Self, ExpressionError> {
        let normalized = normalize(input);
        validate_charset(&normalized)?;
        validate_operators(&normalized)?;
        parser_impl::ExprParser::new()
            .parse(&normalized)
            .map_err(|e| syntax_error(e, &normalized))
    }
}

fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn validate_charset(input: &str) -> Result<(), ExpressionError> {
    for (position, character) in input.chars().enumerate() {
        if !matches!(character, 'a'..='z' | '(' | ')' | '[' | ']' | '\'' | '+') {
            return Err(ExpressionError::InvalidCharacter {
                character,
                position,
            });
        }
    }
    Ok(())
}

/// Reject the operator misuses that have a better diagnostic than the
/// generic parse failure: empty input, a leading or trailing `+`, and
/// brackets whose open/close counts disagree. Mismatched nesting such as
/// `(a+b]` is left to the parser.
fn validate_operators(input: &str) -> Result<(), ExpressionError> {
    if input.is_empty() {
        return Err(ExpressionError::MalformedOperator {
            message: Arc::from("expression is empty"),
            position: None,
        });
    }
    if input.starts_with('+') {
        return Err(ExpressionError::MalformedOperator {
            message: Arc::from("expression cannot start with '+'"),
            position: Some(0),
        });
    }
    if input.ends_with('+') {
        return Err(ExpressionError::MalformedOperator {
            message: Arc::from("expression cannot end with '+'"),
            position: Some(input.chars().count() - 1),
        });
    }
    for (open, close) in [('(', ')'), ('[', ']')] {
        let opened = input.chars().filter(|&c| c == open).count();
        let closed = input.chars().filter(|&c| c == close).count();
        if opened != closed {
            return Err(ExpressionError::MalformedOperator {
                message: Arc::from(
                    format!("unbalanced '{}' and '{}' brackets", open, close).as_str(),
                ),
                position: None,
            });
        }
    }
    Ok(())
}

fn syntax_error<T, E>(error: ParseError<usize, T, E>, input: &str) -> ExpressionError
where
    T: fmt::Display,
    E: fmt::Display,
{
    let (message, position) = match error {
        ParseError::InvalidToken { location } => (String::from("invalid token"), Some(location)),
        ParseError::UnrecognizedEof { location, .. } => {
            (String::from("unexpected end of expression"), Some(location))
        }
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            ..
        } => (format!("unexpected {}", token), Some(start)),
        ParseError::ExtraToken {
            token: (start, token, _),
        } => (format!("extra {}", token), Some(start)),
        ParseError::User { error } => (error.to_string(), None),
    };
    ExpressionError::InvalidSyntax {
        message: Arc::from(message.as_str()),
        input: Arc::from(input),
        position,
    }
}
