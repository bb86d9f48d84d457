//! Validated boolean functions, the entry point of the pipeline

use crate::cover::{minimize, Minimization};
use crate::error::Error;
use crate::expression::Expr;
use crate::table::TruthTable;

const MIN_VARIABLES: usize = 2;
const MAX_VARIABLES: usize = 4;

/// A boolean function of 2 to 4 variables, parsed from an expression string
///
/// The variable order is fixed at construction: the distinct letters of the
/// expression, alphabetically. That order defines the bit position of every
/// truth table row and implicant pattern derived from the function.
///
/// # Examples
///
/// ```
/// use quine_logic::BoolFunction;
///
/// # fn main() -> Result<(), quine_logic::Error> {
/// let function = BoolFunction::new(2, "ab + ab'")?;
/// assert_eq!(function.variables(), &['a', 'b']);
///
/// let result = function.minimize()?;
/// assert_eq!(result.expressions(), ["a"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoolFunction {
    variables: Vec<char>,
    expr: Expr,
}

impl BoolFunction {
    /// Parse and validate `input` as a function of `num_vars` variables
    ///
    /// Fails if `num_vars` is outside 2..=4, if the expression does not use
    /// exactly `num_vars` distinct letters, or if it does not parse.
    pub fn new(num_vars: usize, input: &str) -> Result<Self, Error> {
        if !(MIN_VARIABLES..=MAX_VARIABLES).contains(&num_vars) {
            return Err(Error::InvalidVariableCount { count: num_vars });
        }
        let expr = Expr::parse(input)?;
        let variables = expr.variables();
        if variables.len() != num_vars {
            return Err(Error::InconsistentVariableCount {
                expected: num_vars,
                found: variables.len(),
            });
        }
        Ok(BoolFunction { variables, expr })
    }

    /// The fixed alphabetical variable order
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// The parsed expression
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Build the full truth table of the function
    pub fn truth_table(&self) -> Result<TruthTable, Error> {
        TruthTable::build(&self.variables, &self.expr)
    }

    /// Build the truth table and minimize it
    pub fn minimize(&self) -> Result<Minimization, Error> {
        Ok(minimize(&self.truth_table()?))
    }
}
