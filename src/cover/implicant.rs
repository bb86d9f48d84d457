//! Implicant patterns over the three-valued {0, 1, don't-care} alphabet

use crate::table::Minterm;
use std::fmt;

/// A product term of the function, one position per variable
///
/// Each position is `Some(true)` (positive literal), `Some(false)` (negated
/// literal), or `None` (don't-care). An implicant covers an assignment when
/// every fixed position matches the assignment's bit. Equality is pattern
/// equality: the position of a don't-care matters.
///
/// Rendered with `-` for don't-care positions, so `1-` is the implicant
/// covering both `10` and `11`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Implicant {
    bits: Vec<Option<bool>>,
}

impl Implicant {
    /// The fully fixed implicant covering exactly `minterm`
    pub(crate) fn from_minterm(minterm: &Minterm) -> Self {
        Implicant {
            bits: minterm.bits().iter().map(|&bit| Some(bit)).collect(),
        }
    }

    /// Number of positive (1) positions
    pub(crate) fn ones(&self) -> usize {
        self.bits.iter().filter(|bit| **bit == Some(true)).count()
    }

    /// Number of don't-care positions
    pub fn wildcards(&self) -> usize {
        self.bits.iter().filter(|bit| bit.is_none()).count()
    }

    /// True if this implicant matches `minterm` at every fixed position
    pub fn covers(&self, minterm: &Minterm) -> bool {
        self.bits
            .iter()
            .zip(minterm.bits())
            .all(|(pattern, &bit)| match pattern {
                None => true,
                Some(fixed) => *fixed == bit,
            })
    }

    /// Merge two equal-width patterns that differ in exactly one position
    ///
    /// The differing position becomes a don't-care in the result; every
    /// other position (don't-cares included) carries over. Patterns that
    /// differ in zero or more than one position do not merge.
    pub(crate) fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.bits.len() != other.bits.len() {
            return None;
        }
        let mut differing = None;
        for (position, (a, b)) in self.bits.iter().zip(&other.bits).enumerate() {
            if a != b {
                if differing.is_some() {
                    return None;
                }
                differing = Some(position);
            }
        }
        let position = differing?;
        let mut bits = self.bits.clone();
        bits[position] = None;
        Some(Implicant { bits })
    }

    /// The literal product this implicant denotes
    ///
    /// Fixed positions emit their variable, with a `'` suffix for negated
    /// literals; don't-care positions emit nothing. The all-wildcard
    /// implicant is the constant-true product and renders `1`.
    pub fn literals(&self, variables: &[char]) -> String {
        let mut out = String::new();
        for (pattern, &variable) in self.bits.iter().zip(variables) {
            match pattern {
                Some(true) => out.push(variable),
                Some(false) => {
                    out.push(variable);
                    out.push('\'');
                }
                None => {}
            }
        }
        if out.is_empty() {
            out.push('1');
        }
        out
    }
}

#[cfg(test)]
impl Implicant {
    /// Test helper: parse a `1`/`0`/`-` pattern string
    pub(crate) fn from_pattern(pattern: &str) -> Self {
        Implicant {
            bits: pattern
                .chars()
                .map(|symbol| match symbol {
                    '1' => Some(true),
                    '0' => Some(false),
                    '-' => None,
                    other => panic!("invalid pattern symbol {:?}", other),
                })
                .collect(),
        }
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pattern in &self.bits {
            let symbol = match pattern {
                Some(true) => '1',
                Some(false) => '0',
                None => '-',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}
