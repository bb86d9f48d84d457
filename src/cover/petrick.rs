//! Covering search over the open minterms
//!
//! The requirement "every open minterm is covered" is a product of
//! per-minterm OR-clauses over the candidate implicants. Distributing that
//! product into a sum of products enumerates every way to close the cover;
//! absorption and the cost rules then cut it down to the minimal selections.

use super::Implicant;
use crate::table::Minterm;
use itertools::Itertools;
use log::debug;

/// Every minimum-cost selection of `remaining` implicants covering `open`
///
/// Cost is the number of implicants used; equal-sized selections are ranked
/// by combined wildcard count (more wildcards mean fewer literals in the
/// final expression), and every selection tied on both counts is returned.
/// With no open minterms the only selection is the empty one.
pub(crate) fn minimal_selections(
    remaining: &[Implicant],
    open: &[Minterm],
) -> Vec<Vec<Implicant>> {
    if open.is_empty() {
        return vec![Vec::new()];
    }

    // One OR-clause of candidate implicant indices per open minterm
    let clauses: Vec<Vec<usize>> = open
        .iter()
        .map(|minterm| {
            remaining
                .iter()
                .positions(|prime| prime.covers(minterm))
                .collect()
        })
        .collect();

    let terms = distribute(&clauses);
    let reduced = absorb(terms);

    let Some(fewest) = reduced.iter().map(Vec::len).min() else {
        return vec![Vec::new()];
    };
    let shortest: Vec<&Vec<usize>> = reduced
        .iter()
        .filter(|term| term.len() == fewest)
        .collect();

    let wildcard_total = |term: &[usize]| -> usize {
        term.iter().map(|&index| remaining[index].wildcards()).sum()
    };
    let Some(best) = shortest.iter().map(|term| wildcard_total(term)).max() else {
        return vec![Vec::new()];
    };

    let selections: Vec<Vec<Implicant>> = shortest
        .into_iter()
        .filter(|term| wildcard_total(term) == best)
        .map(|term| {
            term.iter()
                .map(|&index| remaining[index].clone())
                .collect()
        })
        .collect();
    debug!(
        "covering search kept {} selections of {} implicants",
        selections.len(),
        fewest
    );
    selections
}

/// Expand a product of OR-clauses into deduplicated product terms
///
/// Terms are canonicalized as ascending index sets so identical selections
/// compare equal regardless of the clause order that produced them. One
/// clause is folded in per step, keeping the working set deduplicated
/// throughout.
fn distribute(clauses: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut terms: Vec<Vec<usize>> = vec![Vec::new()];
    for clause in clauses {
        let mut expanded: Vec<Vec<usize>> = Vec::new();
        for term in &terms {
            for &index in clause {
                let mut combined = term.clone();
                combined.push(index);
                combined.sort_unstable();
                combined.dedup();
                if !expanded.contains(&combined) {
                    expanded.push(combined);
                }
            }
        }
        terms = expanded;
    }
    debug!("distributed cover product into {} terms", terms.len());
    terms
}

/// Apply the absorption law: drop every term containing a smaller term
///
/// Terms are deduplicated index sets, so a shorter subset is always a
/// strict generalization and one sweep reaches the fixed point.
fn absorb(terms: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let keep: Vec<bool> = terms
        .iter()
        .map(|term| {
            !terms.iter().any(|other| {
                other.len() < term.len() && other.iter().all(|index| term.contains(index))
            })
        })
        .collect();
    terms
        .into_iter()
        .zip(keep)
        .filter(|(_, kept)| *kept)
        .map(|(term, _)| term)
        .collect()
}
