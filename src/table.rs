//! Truth tables and minterm extraction

use crate::error::Error;
use crate::expression::Expr;
use std::fmt;

/// A true row of a truth table, as a fixed-width bit-string
///
/// Bit 0 belongs to the first variable in the fixed alphabetical order and is
/// the most significant bit of the decimal view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minterm {
    bits: Vec<bool>,
}

impl Minterm {
    pub(crate) fn new(bits: Vec<bool>) -> Self {
        Minterm { bits }
    }

    /// The assignment bits, one per variable
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// The bit-string read as an unsigned binary integer
    pub fn decimal(&self) -> usize {
        self.bits
            .iter()
            .fold(0, |acc, &bit| (acc << 1) | usize::from(bit))
    }
}

impl fmt::Display for Minterm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", u8::from(bit))?;
        }
        Ok(())
    }
}

/// An ordered truth table over a fixed variable order
///
/// Rows are stored in numeric order of the assignment bit-string, so row `i`
/// holds the value of the function at assignment `i`. Built once, immutable
/// afterwards.
///
/// # Examples
///
/// ```
/// use quine_logic::{Expr, TruthTable};
///
/// let expr = Expr::parse("ab + ab'").unwrap();
/// let table = TruthTable::build(&['a', 'b'], &expr).unwrap();
///
/// assert_eq!(table.len(), 4);
/// let minterms = table.minterms();
/// assert_eq!(minterms.len(), 2);
/// assert_eq!(minterms[0].to_string(), "10");
/// assert_eq!(minterms[1].decimal(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct TruthTable {
    variables: Vec<char>,
    rows: Vec<(Vec<bool>, bool)>,
}

impl TruthTable {
    /// Build the table by evaluating `expr` once per assignment
    ///
    /// Enumerates `0..2^N` and converts each integer to its N-bit
    /// representation, most significant bit first to match the variable
    /// order.
    pub fn build(variables: &[char], expr: &Expr) -> Result<Self, Error> {
        let width = variables.len();
        let mut rows = Vec::with_capacity(1 << width);
        for key in 0..(1usize << width) {
            let bits = assignment_bits(key, width);
            let value = expr.evaluate(variables, &bits)?;
            rows.push((bits, value));
        }
        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
        })
    }

    /// Build directly from a truth vector
    ///
    /// `outputs[i]` is the function value at assignment `i`; the vector must
    /// have exactly `2^N` entries for `N` variables.
    pub fn from_outputs(variables: &[char], outputs: &[bool]) -> Result<Self, Error> {
        let width = variables.len();
        if outputs.len() != 1 << width {
            return Err(Error::OutputCountMismatch {
                expected: 1 << width,
                found: outputs.len(),
            });
        }
        let rows = outputs
            .iter()
            .enumerate()
            .map(|(key, &value)| (assignment_bits(key, width), value))
            .collect();
        Ok(TruthTable {
            variables: variables.to_vec(),
            rows,
        })
    }

    /// The fixed variable order
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Number of rows (`2^N`)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows in table order, as (assignment bits, value) pairs
    pub fn rows(&self) -> impl Iterator<Item = (&[bool], bool)> + '_ {
        self.rows.iter().map(|(bits, value)| (bits.as_slice(), *value))
    }

    /// The ordered minterms: every assignment mapped to true
    pub fn minterms(&self) -> Vec<Minterm> {
        self.rows
            .iter()
            .filter(|(_, value)| *value)
            .map(|(bits, _)| Minterm::new(bits.clone()))
            .collect()
    }
}

/// Row-per-line rendering in `"bits": value` form
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (bits, value) in &self.rows {
            write!(f, "\"")?;
            for &bit in bits {
                write!(f, "{}", u8::from(bit))?;
            }
            writeln!(f, "\": {}", value)?;
        }
        Ok(())
    }
}

fn assignment_bits(key: usize, width: usize) -> Vec<bool> {
    (0..width)
        .map(|position| (key >> (width - 1 - position)) & 1 == 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn rows_follow_numeric_assignment_order() {
        let expr = Expr::parse("ab").unwrap();
        let table = TruthTable::build(&['a', 'b'], &expr).unwrap();
        let keys: Vec<String> = table
            .rows()
            .map(|(bits, _)| bits.iter().map(|&b| if b { '1' } else { '0' }).collect())
            .collect();
        assert_eq!(keys, ["00", "01", "10", "11"]);
    }

    #[test]
    fn extracts_minterms_in_table_order() {
        let expr = Expr::parse("a'b + ab'").unwrap();
        let table = TruthTable::build(&['a', 'b'], &expr).unwrap();
        let minterms = table.minterms();
        let printed: Vec<String> = minterms.iter().map(ToString::to_string).collect();
        assert_eq!(printed, ["01", "10"]);
        let decimals: Vec<usize> = minterms.iter().map(Minterm::decimal).collect();
        assert_eq!(decimals, [1, 2]);
    }

    #[test]
    fn constant_false_has_no_minterms() {
        let expr = Expr::parse("ab(ab)'").unwrap();
        let table = TruthTable::build(&['a', 'b'], &expr).unwrap();
        assert!(table.minterms().is_empty());
    }

    #[test]
    fn constant_true_has_all_minterms() {
        let expr = Expr::parse("ab + (ab)'").unwrap();
        let table = TruthTable::build(&['a', 'b'], &expr).unwrap();
        assert_eq!(table.minterms().len(), 4);
    }

    #[test]
    fn from_outputs_checks_vector_length() {
        let err = TruthTable::from_outputs(&['a', 'b'], &[true, false]).unwrap_err();
        assert_eq!(
            err,
            Error::OutputCountMismatch {
                expected: 4,
                found: 2,
            }
        );
    }

    #[test]
    fn display_lists_rows_with_values() {
        let table = TruthTable::from_outputs(&['a', 'b'], &[false, true, false, true]).unwrap();
        let printed = table.to_string();
        assert_eq!(
            printed,
            "\"00\": false\n\"01\": true\n\"10\": false\n\"11\": true\n"
        );
    }
}
