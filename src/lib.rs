//! # Quine-McCluskey Logic Minimizer
//!
//! This crate performs exact minimization of small boolean functions (2 to 4
//! variables) with the Quine-McCluskey algorithm, using Petrick's method to
//! enumerate *every* minimum-cost cover whenever the essential prime
//! implicants leave the choice open.
//!
//! ## Pipeline
//!
//! The computation is a pure function from an expression string to a set of
//! minimal sum-of-products expressions, staged strictly forward:
//!
//! 1. parse the expression into a tree ([`Expr`])
//! 2. evaluate it for every assignment to build a [`TruthTable`]
//! 3. extract the [`Minterm`]s (the true rows)
//! 4. merge minterm patterns into prime [`Implicant`]s
//! 5. select the essential implicants and close the remaining coverage with
//!    Petrick's method ([`minimize`])
//! 6. format each resulting cover back into an expression string
//!
//! ## Expression syntax
//!
//! Adjacency is AND, `+` is OR, a postfix `'` negates the preceding operand
//! or group, and `()`/`[]` both group. Parsing ignores case and whitespace.
//!
//! ## Examples
//!
//! A redundant function collapsing to a single literal:
//!
//! ```
//! use quine_logic::BoolFunction;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! let function = BoolFunction::new(2, "ab + ab'")?;
//! let result = function.minimize()?;
//! assert_eq!(result.expressions(), ["a"]);
//! # Ok(())
//! # }
//! ```
//!
//! Exclusive-or admits no merge at all, so both terms survive:
//!
//! ```
//! use quine_logic::BoolFunction;
//!
//! # fn main() -> Result<(), quine_logic::Error> {
//! let function = BoolFunction::new(2, "a'b + ab'")?;
//! let result = function.minimize()?;
//! assert_eq!(result.expressions(), ["ab' + a'b"]);
//! # Ok(())
//! # }
//! ```
//!
//! When several covers tie on cost, all of them are returned:
//! [`Minimization::solutions`] holds one entry per minimal cover.

// Public modules
pub mod cover;
pub mod error;
pub mod expression;
pub mod function;
pub mod table;

// Re-export high-level public API
pub use cover::{minimize, Implicant, Minimization, Solution};
pub use error::Error;
pub use expression::Expr;
pub use function::BoolFunction;
pub use table::{Minterm, TruthTable};
