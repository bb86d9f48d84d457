//! Error types for the minimization pipeline
//!
//! Every failure mode is a programmatically distinguishable variant. The
//! validation variants are all detected before the algorithmic stages run;
//! [`Error::Eval`] is the one evaluation-time failure and aborts the run.

use crate::expression::{EvalError, ExpressionError};
use std::fmt;
use std::io;

/// The main error type for boolean function minimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested variable count is outside the supported 2..=4 range
    InvalidVariableCount {
        /// The count that was requested
        count: usize,
    },

    /// The expression uses a different number of distinct variables than
    /// requested
    InconsistentVariableCount {
        /// The requested count
        expected: usize,
        /// The number of distinct letters actually used
        found: usize,
    },

    /// A truth vector of the wrong length was supplied
    OutputCountMismatch {
        /// The required number of entries (`2^N`)
        expected: usize,
        /// The number of entries supplied
        found: usize,
    },

    /// The expression string failed validation or parsing
    Expression(ExpressionError),

    /// Evaluation hit a variable outside the fixed order
    Eval(EvalError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidVariableCount { count } => write!(
                f,
                "Unsupported variable count {}. Expected 2, 3, or 4 variables.",
                count
            ),
            Error::InconsistentVariableCount { expected, found } => write!(
                f,
                "Expression uses {} distinct variables, expected {}.",
                found, expected
            ),
            Error::OutputCountMismatch { expected, found } => write!(
                f,
                "Truth vector has {} entries, expected {}.",
                found, expected
            ),
            Error::Expression(err) => write!(f, "{}", err),
            Error::Eval(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Expression(err) => Some(err),
            Error::Eval(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExpressionError> for Error {
    fn from(err: ExpressionError) -> Self {
        Error::Expression(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

// Conversion to io::Error for callers that surface results through io APIs
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Expression(_) => io::Error::new(io::ErrorKind::InvalidData, err),
            Error::Eval(_) => io::Error::other(err),
            _ => io::Error::new(io::ErrorKind::InvalidInput, err),
        }
    }
}
