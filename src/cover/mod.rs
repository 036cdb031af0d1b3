//! Cover types for Boolean function minimization
//!
//! This module provides the [`Cover`] type for working with covers
//! (sum-of-products representations of Boolean functions) and the
//! [`Term`] product-term type they are built from.

mod error;
mod minimize;
mod term;

pub use error::CoverError;
pub use minimize::Minimizable;
pub use term::Term;

use std::collections::BTreeSet;

/// A cover: a Boolean function represented as a set of product terms
///
/// The dimensions are fixed at construction time - every term in a run
/// shares the same width, equal to the input-variable count. Duplicate
/// terms are preserved in insertion order; the minimization engine works
/// on the deduplicated [`term_set`](Cover::term_set).
///
/// The output count is carried for PLA I/O only; minimization consumes
/// input patterns alone.
///
/// # Examples
///
/// ```
/// use qm_logic::{Cover, Minimizable};
///
/// let mut cover = Cover::new(2, 1);
/// cover.add_term("00".parse().unwrap()).unwrap();
/// cover.add_term("01".parse().unwrap()).unwrap();
/// cover.add_term("11".parse().unwrap()).unwrap();
///
/// let minimized = cover.minimize().unwrap();
/// assert_eq!(minimized.num_terms(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cover {
    /// Number of input variables
    num_inputs: usize,
    /// Number of output variables
    num_outputs: usize,
    /// Product terms, in insertion order
    terms: Vec<Term>,
}

impl Cover {
    /// Create a new empty cover with the given dimensions
    ///
    /// # Examples
    ///
    /// ```
    /// use qm_logic::Cover;
    ///
    /// let cover = Cover::new(4, 1);
    /// assert_eq!(cover.num_inputs(), 4);
    /// assert_eq!(cover.num_outputs(), 1);
    /// assert_eq!(cover.num_terms(), 0);
    /// ```
    pub fn new(num_inputs: usize, num_outputs: usize) -> Self {
        Cover {
            num_inputs,
            num_outputs,
            terms: Vec::new(),
        }
    }

    pub(crate) fn from_parts(num_inputs: usize, num_outputs: usize, terms: Vec<Term>) -> Self {
        Cover {
            num_inputs,
            num_outputs,
            terms,
        }
    }

    /// Get the number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the number of outputs
    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    /// Get the number of terms, duplicates included
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// True when the cover holds no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Add a term to the cover
    ///
    /// The term width must equal the cover's input count.
    ///
    /// # Errors
    ///
    /// Returns [`CoverError::WidthMismatch`] when it does not.
    pub fn add_term(&mut self, term: Term) -> Result<(), CoverError> {
        if term.len() != self.num_inputs {
            return Err(CoverError::WidthMismatch {
                expected: self.num_inputs,
                actual: term.len(),
            });
        }
        self.terms.push(term);
        Ok(())
    }

    /// Terms of this cover, in insertion order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The deduplicated term set, in pattern order
    ///
    /// This is the seed collection handed to the minimization engine.
    pub fn term_set(&self) -> BTreeSet<Term> {
        self.terms.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests;
