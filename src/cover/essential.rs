//! Essential prime implicant selection

use super::Implicant;
use crate::table::Minterm;
use log::debug;

/// Select the essential implicants and the minterms left open by them
///
/// A minterm covered by exactly one prime implicant makes that implicant
/// essential. Minterms are scanned in reverse order so removal never
/// disturbs a pending index. Once the essential set is fixed, every minterm
/// it covers is already satisfied and drops out; whatever remains is open
/// for the covering search.
pub(crate) fn essential_implicants(
    primes: &[Implicant],
    minterms: Vec<Minterm>,
) -> (Vec<Implicant>, Vec<Minterm>) {
    let mut open = minterms;
    let mut essentials: Vec<Implicant> = Vec::new();

    for index in (0..open.len()).rev() {
        let covering: Vec<&Implicant> = primes
            .iter()
            .filter(|prime| prime.covers(&open[index]))
            .collect();
        if let [only] = covering[..] {
            if !essentials.contains(only) {
                essentials.push(only.clone());
            }
            open.remove(index);
        }
    }

    open.retain(|minterm| !essentials.iter().any(|essential| essential.covers(minterm)));

    debug!(
        "{} essential implicants, {} open minterms",
        essentials.len(),
        open.len()
    );
    (essentials, open)
}
