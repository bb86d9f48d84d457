//! Display formatting for boolean expressions

use super::Expr;
use std::fmt;

/// Context for formatting expressions with minimal brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside brackets
    And,  // Inside an AND operation
    Or,   // Inside an OR operation
    Not,  // Operand of a postfix negation
}

impl Expr {
    /// Format with operator precedence context to minimize brackets
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Expr::Variable(name) => write!(f, "{}", name),

            Expr::And(left, right) => {
                // AND needs brackets only under a postfix negation
                let needs_parens = ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::And)?;
                right.fmt_with_context(f, OpContext::And)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Expr::Or(left, right) => {
                // OR needs brackets inside AND or under a negation
                let needs_parens = ctx == OpContext::And || ctx == OpContext::Not;

                if needs_parens {
                    write!(f, "(")?;
                }

                left.fmt_with_context(f, OpContext::Or)?;
                write!(f, " + ")?;
                right.fmt_with_context(f, OpContext::Or)?;

                if needs_parens {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Expr::Not(inner) => {
                inner.fmt_with_context(f, OpContext::Not)?;
                write!(f, "'")
            }
        }
    }
}

/// Display formatting for boolean expressions
///
/// Renders the same notation the parser accepts, with brackets only where
/// precedence requires them: `(a + b)'c` rather than `((a + b)')(c)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}
