//! Error types for expression validation, parsing, and evaluation

use std::fmt;
use std::sync::Arc;

/// Errors produced while validating or parsing an expression string
///
/// Positions refer to the normalized input (whitespace stripped, lowercased).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    /// A character outside the `a-z ( ) [ ] ' +` alphabet
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Its position in the normalized input
        position: usize,
    },
    /// A misplaced operator or unbalanced grouping detected before parsing
    MalformedOperator {
        /// Description of the misuse
        message: Arc<str>,
        /// Position in the normalized input, when a single position applies
        position: Option<usize>,
    },
    /// The expression failed to parse
    InvalidSyntax {
        /// The error message from the parser
        message: Arc<str>,
        /// The normalized input string that failed to parse
        input: Arc<str>,
        /// Optional position in the input where the error occurred
        position: Option<usize>,
    },
}

impl fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid character {:?} at position {}. Valid characters are letters a-z, \
                 (), [], ', and +.",
                character, position
            ),
            ExpressionError::MalformedOperator { message, position } => {
                if let Some(pos) = position {
                    write!(f, "Malformed expression at position {}: {}", pos, message)
                } else {
                    write!(f, "Malformed expression: {}", message)
                }
            }
            ExpressionError::InvalidSyntax {
                message,
                input,
                position,
            } => {
                if let Some(pos) = position {
                    write!(
                        f,
                        "Failed to parse boolean expression at position {}: {}. Input: {:?}",
                        pos, message, input
                    )
                } else {
                    write!(
                        f,
                        "Failed to parse boolean expression: {}. Input: {:?}",
                        message, input
                    )
                }
            }
        }
    }
}

impl std::error::Error for ExpressionError {}

/// Errors produced while evaluating a parsed expression
///
/// Evaluation runs after validation; hitting one of these means a
/// structurally bad expression reached the pipeline, and the run aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// The expression refers to a variable outside the fixed variable order
    UnboundVariable {
        /// The variable with no assigned value
        variable: char,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UnboundVariable { variable } => write!(
                f,
                "Variable '{}' has no value in the current assignment",
                variable
            ),
        }
    }
}

impl std::error::Error for EvalError {}
