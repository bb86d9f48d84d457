//! The minimization pipeline: truth table in, minimal covers out

use super::essential::essential_implicants;
use super::petrick::minimal_selections;
use super::primes::prime_implicants;
use super::Implicant;
use crate::table::TruthTable;
use itertools::Itertools;

/// One complete minimal cover of the function
///
/// Holds the essential implicants first, then the selection that closes the
/// remaining coverage, in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    implicants: Vec<Implicant>,
}

impl Solution {
    /// The implicants of this cover
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// Render the cover as a sum-of-products expression string
    ///
    /// Products are joined with ` + `. The empty cover is the constant-false
    /// function and renders `0`; an all-wildcard implicant renders `1`.
    pub fn expression(&self, variables: &[char]) -> String {
        if self.implicants.is_empty() {
            return String::from("0");
        }
        self.implicants
            .iter()
            .map(|implicant| implicant.literals(variables))
            .join(" + ")
    }
}

/// The result of minimizing a truth table
///
/// Carries every intermediate the pipeline produces: the full prime
/// implicant set, the essential subset, and one [`Solution`] per minimal
/// cover. Multiple solutions mean the covering search found several
/// selections of equal cost; all of them are faithful minimizations.
#[derive(Debug, Clone)]
pub struct Minimization {
    variables: Vec<char>,
    prime_implicants: Vec<Implicant>,
    essential_implicants: Vec<Implicant>,
    solutions: Vec<Solution>,
}

impl Minimization {
    /// The fixed variable order the patterns refer to
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Every prime implicant, in generation order
    pub fn prime_implicants(&self) -> &[Implicant] {
        &self.prime_implicants
    }

    /// The essential prime implicants, in selection order
    pub fn essential_implicants(&self) -> &[Implicant] {
        &self.essential_implicants
    }

    /// Every minimal cover
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Every minimal expression string, one per solution
    pub fn expressions(&self) -> Vec<String> {
        self.solutions
            .iter()
            .map(|solution| solution.expression(&self.variables))
            .collect()
    }
}

/// Minimize a truth table into every minimal sum-of-products cover
///
/// # Examples
///
/// ```
/// use quine_logic::{minimize, TruthTable};
///
/// // f(a, b) is true for assignments 10 and 11, i.e. f = a
/// let table = TruthTable::from_outputs(&['a', 'b'], &[false, false, true, true]).unwrap();
/// let result = minimize(&table);
///
/// assert_eq!(result.prime_implicants()[0].to_string(), "1-");
/// assert_eq!(result.expressions(), ["a"]);
/// ```
pub fn minimize(table: &TruthTable) -> Minimization {
    let minterms = table.minterms();
    let primes = prime_implicants(&minterms, table.variables().len());
    let (essentials, open) = essential_implicants(&primes, minterms);

    let remaining: Vec<Implicant> = primes
        .iter()
        .filter(|prime| !essentials.contains(prime))
        .cloned()
        .collect();
    let selections = minimal_selections(&remaining, &open);

    let solutions = selections
        .into_iter()
        .map(|selection| {
            let mut implicants = essentials.clone();
            implicants.extend(selection);
            Solution { implicants }
        })
        .collect();

    Minimization {
        variables: table.variables().to_vec(),
        prime_implicants: primes,
        essential_implicants: essentials,
        solutions,
    }
}
