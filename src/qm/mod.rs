//! The Quine-McCluskey minimization engine
//!
//! This module implements the algorithmic core of the crate: prime
//! implicant generation by iterative pairwise combination, the prime
//! implicant chart, and essential-implicant selection.
//!
//! The engine is a pure, one-shot batch computation. It owns all of its
//! intermediate state, never retries, and exposes a single entry point,
//! [`minimize`]. All collections are ordered, so two runs over the same
//! input produce identical results.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeSet;
//! use qm_logic::{qm, MinimizerConfig, Term};
//!
//! let minterms: BTreeSet<Term> = ["00", "01", "11"]
//!     .iter()
//!     .map(|p| p.parse().unwrap())
//!     .collect();
//!
//! let result = qm::minimize(&minterms, &MinimizerConfig::default()).unwrap();
//! assert_eq!(result.prime_implicants.len(), 2);
//! assert_eq!(result.essential_implicants.len(), 2);
//! ```

mod chart;
mod error;

pub use chart::Chart;
pub use error::MinimizationError;

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::cover::Term;
use crate::{MinimizerConfig, SelectionMode};

/// The outcome of one minimization run
#[derive(Clone, Debug)]
pub struct Minimization {
    /// All prime implicants, in generation order
    pub prime_implicants: Vec<Term>,
    /// The selected essential prime implicants, in discovery order
    pub essential_implicants: Vec<Term>,
    /// Minterms left unresolved by essential selection
    ///
    /// Under [`SelectionMode::SinglePass`] this may contain minterms that
    /// are in fact covered by a selected essential implicant; under
    /// [`SelectionMode::Iterative`] anything left here is a cyclic core
    /// that would need an exact-cover step to resolve.
    pub residual: Chart,
}

/// Partition terms by their count of defined-1 bits
///
/// Two terms can combine only if they differ in exactly one position and
/// are otherwise identical, which implies their 1-counts differ by exactly
/// one. Grouping lets the generator compare adjacent groups only instead
/// of all pairs.
pub fn group_by_ones<I>(terms: I) -> BTreeMap<usize, BTreeSet<Term>>
where
    I: IntoIterator<Item = Term>,
{
    let mut groups: BTreeMap<usize, BTreeSet<Term>> = BTreeMap::new();
    for term in terms {
        groups.entry(term.ones()).or_default().insert(term);
    }
    groups
}

/// Combine two terms that differ in exactly one position
///
/// The differing position becomes `'-'` in the result; all other positions
/// are copied unchanged. Returns `Ok(None)` when the terms differ in zero
/// or more than one position.
///
/// # Errors
///
/// Returns [`MinimizationError::LengthMismatch`] when the operand widths
/// differ. That is a data-integrity error, not a normal outcome.
///
/// # Examples
///
/// ```
/// use qm_logic::{qm, Term};
///
/// let a: Term = "00".parse().unwrap();
/// let b: Term = "01".parse().unwrap();
/// assert_eq!(qm::combine(&a, &b).unwrap(), Some("0-".parse().unwrap()));
///
/// let c: Term = "11".parse().unwrap();
/// assert_eq!(qm::combine(&a, &c).unwrap(), None);
/// ```
pub fn combine(left: &Term, right: &Term) -> Result<Option<Term>, MinimizationError> {
    if left.len() != right.len() {
        return Err(MinimizationError::LengthMismatch {
            left: left.clone(),
            right: right.clone(),
        });
    }
    let mut differing = None;
    for (position, (l_bit, r_bit)) in left.bits().iter().zip(right.bits()).enumerate() {
        if l_bit != r_bit {
            if differing.is_some() {
                return Ok(None);
            }
            differing = Some(position);
        }
    }
    match differing {
        None => Ok(None),
        Some(position) => {
            let mut bits = left.bits().to_vec();
            bits[position] = None;
            Ok(Some(Term::new(&bits)))
        }
    }
}

/// Generate all prime implicants of a term set
///
/// Runs combination rounds until no further combination occurs. Each round
/// groups the current terms by 1-count, combines every term of group `k`
/// against every term of group `k + 1`, carries the (deduplicated)
/// combined terms into the next round, and emits every uncombined term as
/// a prime implicant.
///
/// Within a round, primes are emitted in (1-count, pattern) order.
///
/// # Errors
///
/// Returns [`MinimizationError::TermBudgetExceeded`] when the total number
/// of generated intermediate terms exceeds `config.max_terms` - the loop
/// is exponential in the term width for dense, highly-overlapping inputs,
/// and the budget turns runaway growth into a clean failure.
pub fn prime_implicants(
    terms: &BTreeSet<Term>,
    config: &MinimizerConfig,
) -> Result<Vec<Term>, MinimizationError> {
    let mut primes: Vec<Term> = Vec::new();
    let mut grouped = group_by_ones(terms.iter().cloned());
    let mut generated = 0usize;
    let mut round = 0usize;

    while !grouped.is_empty() {
        round += 1;
        let mut next: BTreeMap<usize, BTreeSet<Term>> = BTreeMap::new();
        let mut used: BTreeSet<Term> = BTreeSet::new();

        for (&ones, group) in &grouped {
            let Some(neighbour) = grouped.get(&(ones + 1)) else {
                continue;
            };
            for left in group {
                for right in neighbour {
                    if let Some(combined) = combine(left, right)? {
                        if next.entry(combined.ones()).or_default().insert(combined) {
                            generated += 1;
                            // Checked per insertion so the budget bounds peak
                            // allocation, not just the end-of-round total
                            if let Some(budget) = config.max_terms {
                                if generated > budget {
                                    return Err(MinimizationError::TermBudgetExceeded { budget });
                                }
                            }
                        }
                        used.insert(left.clone());
                        used.insert(right.clone());
                    }
                }
            }
        }

        let round_primes = grouped
            .values()
            .flatten()
            .filter(|term| !used.contains(term))
            .cloned()
            .collect::<Vec<_>>();
        debug!(
            "round {}: {} groups, {} terms used, {} prime",
            round,
            grouped.len(),
            used.len(),
            round_primes.len()
        );
        primes.extend(round_primes);
        grouped = next;
    }

    Ok(primes)
}

/// Run the full minimization pipeline on a set of minterms
///
/// Generates the prime implicants, builds the coverage chart and selects
/// the essential implicants according to `config.selection`. This is the
/// single entry point for a run; nothing is cached or re-invoked.
///
/// # Errors
///
/// Propagates [`MinimizationError::TermBudgetExceeded`] from generation
/// and [`MinimizationError::UncoveredMinterm`] from chart construction.
pub fn minimize(
    minterms: &BTreeSet<Term>,
    config: &MinimizerConfig,
) -> Result<Minimization, MinimizationError> {
    let primes = prime_implicants(minterms, config)?;
    let chart = Chart::build(minterms, &primes)?;
    let (essentials, residual) = chart.select_essentials(config.selection);

    if !residual.is_empty() && config.selection == SelectionMode::Iterative {
        warn!(
            "{} minterms remain uncovered after essential selection; \
             resolving them needs an exact-cover step",
            residual.len()
        );
    }
    debug!(
        "minimization done: {} primes, {} essential, {} residual",
        primes.len(),
        essentials.len(),
        residual.len()
    );

    Ok(Minimization {
        prime_implicants: primes,
        essential_implicants: essentials,
        residual,
    })
}
