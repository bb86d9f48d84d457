//! Evaluation of expressions under a concrete variable assignment

use super::error::EvalError;
use super::Expr;

impl Expr {
    /// Evaluate the expression with one bit per variable
    ///
    /// `bits[i]` is the value assigned to `variables[i]`. Fails if the
    /// expression mentions a variable that `variables` does not cover.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::Expr;
    ///
    /// let expr = Expr::parse("ab + c'").unwrap();
    /// let vars = ['a', 'b', 'c'];
    ///
    /// assert!(expr.evaluate(&vars, &[true, true, true]).unwrap());
    /// assert!(!expr.evaluate(&vars, &[true, false, true]).unwrap());
    /// assert!(expr.evaluate(&vars, &[false, false, false]).unwrap());
    /// ```
    pub fn evaluate(&self, variables: &[char], bits: &[bool]) -> Result<bool, EvalError> {
        match self {
            Expr::Variable(name) => variables
                .iter()
                .position(|v| v == name)
                .and_then(|i| bits.get(i).copied())
                .ok_or(EvalError::UnboundVariable { variable: *name }),
            Expr::Not(inner) => Ok(!inner.evaluate(variables, bits)?),
            Expr::And(left, right) => {
                Ok(left.evaluate(variables, bits)? && right.evaluate(variables, bits)?)
            }
            Expr::Or(left, right) => {
                Ok(left.evaluate(variables, bits)? || right.evaluate(variables, bits)?)
            }
        }
    }
}
