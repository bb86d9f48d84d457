//! Cover construction and minimization
//!
//! This module turns a truth table into every minimal sum-of-products cover
//! of its minterms. The stages run strictly forward and hand their results
//! to the next stage by value:
//!
//! 1. prime implicant generation: iterative merge rounds over
//!    popcount-adjacent groups
//! 2. essential implicant selection: implicants that are the unique cover
//!    of some minterm
//! 3. covering search: Petrick's method over whatever the essentials leave
//!    open, keeping every minimum-cost selection
//!
//! The pipeline entry is [`minimize`]; it returns a [`Minimization`] holding
//! the prime implicants, the essential subset, and one [`Solution`] per
//! minimal cover.

// Module declarations
mod essential;
mod implicant;
mod minimize;
mod petrick;
mod primes;

pub use implicant::Implicant;
pub use minimize::{minimize, Minimization, Solution};
