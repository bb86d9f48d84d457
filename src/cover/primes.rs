//! Prime implicant generation

use super::Implicant;
use crate::table::Minterm;
use log::debug;

/// Generate the prime implicants of `minterms` over `width` variables
///
/// Terms are grouped by popcount; each round compares every term of a group
/// against every term of the next group and merges pairs that differ in
/// exactly one position. Merge results feed the next round, regrouped by
/// their own popcount and deduplicated. A term left unpaired in any round
/// cannot be generalized further and is prime. Rounds repeat until one
/// produces no merges; the candidate space shrinks every round, so this
/// terminates.
///
/// The returned set preserves generation order and deduplicates by first
/// occurrence.
pub(crate) fn prime_implicants(minterms: &[Minterm], width: usize) -> Vec<Implicant> {
    let mut groups: Vec<Vec<Implicant>> = vec![Vec::new(); width + 1];
    for minterm in minterms {
        let implicant = Implicant::from_minterm(minterm);
        groups[implicant.ones()].push(implicant);
    }

    let mut primes: Vec<Implicant> = Vec::new();
    loop {
        let mut next: Vec<Vec<Implicant>> = vec![Vec::new(); width + 1];
        let mut paired: Vec<Vec<bool>> = groups
            .iter()
            .map(|group| vec![false; group.len()])
            .collect();
        let mut merged_any = false;

        for level in 0..width {
            for (i, low) in groups[level].iter().enumerate() {
                for (j, high) in groups[level + 1].iter().enumerate() {
                    if let Some(merged) = low.combine(high) {
                        paired[level][i] = true;
                        paired[level + 1][j] = true;
                        merged_any = true;
                        let bucket = &mut next[merged.ones()];
                        if !bucket.contains(&merged) {
                            bucket.push(merged);
                        }
                    }
                }
            }
        }

        // Everything that never paired up this round is prime
        for (group, flags) in groups.iter().zip(&paired) {
            for (term, &was_paired) in group.iter().zip(flags) {
                if !was_paired && !primes.contains(term) {
                    primes.push(term.clone());
                }
            }
        }

        if !merged_any {
            break;
        }
        debug!(
            "merge round produced {} terms",
            next.iter().map(Vec::len).sum::<usize>()
        );
        groups = next;
    }

    primes
}
