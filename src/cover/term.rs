//! Term types for Boolean function minimization
//!
//! This module provides [`Term`], the product-term representation used
//! throughout the crate: a fixed-width pattern over the symbols 0, 1 and '-'.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

use crate::pla::PLAError;

/// A product term over a fixed set of input variables
///
/// Each position holds one of three symbols:
/// - `Some(false)` - the input must be 0
/// - `Some(true)` - the input must be 1
/// - `None` - don't care (`'-'`), the position has been generalized away
///
/// All terms participating in one minimization run share the same width.
/// A term with no don't-care positions is a *minterm*.
///
/// # Examples
///
/// ```
/// use qm_logic::Term;
///
/// let term: Term = "01-".parse().unwrap();
/// assert_eq!(term.len(), 3);
/// assert_eq!(term.ones(), 1);
/// assert!(!term.is_minterm());
/// assert_eq!(term.to_string(), "01-");
/// ```
#[derive(Clone, Debug)]
pub struct Term {
    bits: Arc<[Option<bool>]>,
}

impl Term {
    /// Create a term from a slice of symbols
    pub fn new(bits: &[Option<bool>]) -> Self {
        Term { bits: bits.into() }
    }

    /// Create a fully-specified term from the binary encoding of `value`
    ///
    /// Bit `width - 1` of `value` becomes the leftmost symbol, matching the
    /// usual textual notation (`Term::from_index(5, 4)` is `"0101"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::Term;
    ///
    /// assert_eq!(Term::from_index(5, 4).to_string(), "0101");
    /// assert_eq!(Term::from_index(0, 2).to_string(), "00");
    /// ```
    pub fn from_index(value: u64, width: usize) -> Self {
        let bits: Vec<Option<bool>> = (0..width)
            .rev()
            .map(|pos| Some(value >> pos & 1 == 1))
            .collect();
        Term { bits: bits.into() }
    }

    /// Width of the term (number of input variables)
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the term has zero width
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Get the symbols of this term
    pub fn bits(&self) -> &[Option<bool>] {
        &self.bits
    }

    /// Count of defined-1 positions
    ///
    /// Don't-care positions are not counted, so a term carrying `'-'` from a
    /// prior combination round is grouped by its remaining 1-count.
    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|b| **b == Some(true)).count()
    }

    /// True when every position is fully specified (no don't-cares)
    pub fn is_minterm(&self) -> bool {
        self.bits.iter().all(Option::is_some)
    }

    /// Covering check: does this term cover `minterm`?
    ///
    /// True iff, for every position where this term is not `'-'`, the symbol
    /// of `minterm` at that position is equal. A term with no don't-cares
    /// covers exactly itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::Term;
    ///
    /// let implicant: Term = "0-".parse().unwrap();
    /// assert!(implicant.covers(&"00".parse().unwrap()));
    /// assert!(implicant.covers(&"01".parse().unwrap()));
    /// assert!(!implicant.covers(&"11".parse().unwrap()));
    /// ```
    pub fn covers(&self, minterm: &Term) -> bool {
        self.bits
            .iter()
            .zip(minterm.bits.iter())
            .all(|(i_bit, m_bit)| i_bit.is_none() || i_bit == m_bit)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.bits[..] == other.bits[..]
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits[..].hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits[..].cmp(&other.bits[..])
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.bits.iter() {
            f.write_str(match bit {
                Some(false) => "0",
                Some(true) => "1",
                None => "-",
            })?;
        }
        Ok(())
    }
}

impl FromStr for Term {
    type Err = PLAError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = Vec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            bits.push(match character {
                '0' => Some(false),
                '1' => Some(true),
                '-' => None,
                _ => {
                    return Err(PLAError::InvalidSymbol {
                        character,
                        position,
                    })
                }
            });
        }
        Ok(Term { bits: bits.into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        for pattern in ["0", "1", "-", "01-", "1-0-1"] {
            let term: Term = pattern.parse().unwrap();
            assert_eq!(term.to_string(), pattern);
        }
    }

    #[test]
    fn test_parse_invalid_symbol() {
        let err = "0x1".parse::<Term>().unwrap_err();
        assert!(matches!(
            err,
            PLAError::InvalidSymbol {
                character: 'x',
                position: 1
            }
        ));
    }

    #[test]
    fn test_ones_ignores_dont_cares() {
        let term: Term = "1-1-0".parse().unwrap();
        assert_eq!(term.ones(), 2);
    }

    #[test]
    fn test_is_minterm() {
        assert!("011".parse::<Term>().unwrap().is_minterm());
        assert!(!"0-1".parse::<Term>().unwrap().is_minterm());
    }

    #[test]
    fn test_covers() {
        let implicant: Term = "-1-".parse().unwrap();
        assert!(implicant.covers(&"010".parse().unwrap()));
        assert!(implicant.covers(&"111".parse().unwrap()));
        assert!(!implicant.covers(&"001".parse().unwrap()));
    }

    #[test]
    fn test_covers_is_reflexive_for_minterms() {
        let minterm: Term = "101".parse().unwrap();
        assert!(minterm.covers(&minterm));
    }

    #[test]
    fn test_from_index_msb_first() {
        assert_eq!(Term::from_index(0b110, 3).to_string(), "110");
        assert_eq!(Term::from_index(1, 4).to_string(), "0001");
        assert!(Term::from_index(7, 3).is_minterm());
    }

    #[test]
    fn test_ordering_is_by_pattern() {
        let a: Term = "00".parse().unwrap();
        let b: Term = "01".parse().unwrap();
        let c: Term = "0-".parse().unwrap();
        assert!(a < b);
        // '-' (None) sorts before defined symbols
        assert!(c < a);
    }
}
