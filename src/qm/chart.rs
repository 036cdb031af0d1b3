//! Prime implicant chart and essential-implicant selection

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use log::debug;

use crate::cover::Term;
use crate::qm::MinimizationError;
use crate::SelectionMode;

/// The prime implicant chart
///
/// Maps each original minterm to the ordered list of prime implicants that
/// cover it, in the iteration order of the prime implicant set. The chart
/// is built once per run and consumed destructively by essential selection:
/// resolved minterms are removed, and whatever is left over is returned as
/// the residual chart.
///
/// Iteration over the chart is in minterm pattern order, so selection is
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chart {
    entries: BTreeMap<Term, Vec<Term>>,
}

impl Chart {
    /// Build the chart for `minterms` against `primes`
    ///
    /// # Errors
    ///
    /// Returns [`MinimizationError::UncoveredMinterm`] when some minterm is
    /// covered by no prime implicant. That cannot happen when the chart is
    /// built from the same term set the primes were generated from, so it
    /// is treated as a fatal consistency error rather than skipped.
    pub fn build(minterms: &BTreeSet<Term>, primes: &[Term]) -> Result<Self, MinimizationError> {
        let mut entries = BTreeMap::new();
        for minterm in minterms {
            let covering: Vec<Term> = primes
                .iter()
                .filter(|prime| prime.covers(minterm))
                .cloned()
                .collect();
            if covering.is_empty() {
                return Err(MinimizationError::UncoveredMinterm {
                    minterm: minterm.clone(),
                });
            }
            entries.insert(minterm.clone(), covering);
        }
        Ok(Chart { entries })
    }

    /// Number of minterms still present in the chart
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when every minterm has been resolved
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The prime implicants covering `minterm`, if it is still present
    pub fn covering(&self, minterm: &Term) -> Option<&[Term]> {
        self.entries.get(minterm).map(Vec::as_slice)
    }

    /// Iterate over the remaining (minterm, covering implicants) entries
    pub fn entries(&self) -> impl Iterator<Item = (&Term, &[Term])> {
        self.entries.iter().map(|(m, c)| (m, c.as_slice()))
    }

    /// Select essential prime implicants, consuming the chart
    ///
    /// Returns the essential implicants in discovery order together with
    /// the residual chart of unresolved minterms. See [`SelectionMode`] for
    /// the two selection behaviors; neither performs an exact-cover step on
    /// the residual.
    pub fn select_essentials(self, mode: SelectionMode) -> (Vec<Term>, Chart) {
        match mode {
            SelectionMode::SinglePass => self.select_single_pass(),
            SelectionMode::Iterative => self.select_iterative(),
        }
    }

    /// One pass over the chart; a unit entry selects its implicant as
    /// essential and removes that minterm only. Minterms that merely happen
    /// to be covered by an already-selected essential stay in the residual.
    fn select_single_pass(mut self) -> (Vec<Term>, Chart) {
        let mut essentials: Vec<Term> = Vec::new();
        let triggering: Vec<Term> = self
            .entries
            .iter()
            .filter(|(_, covering)| covering.len() == 1)
            .map(|(minterm, _)| minterm.clone())
            .collect();
        for minterm in triggering {
            if let Some(covering) = self.entries.remove(&minterm) {
                let implicant = covering.into_iter().next();
                if let Some(implicant) = implicant {
                    if !essentials.contains(&implicant) {
                        essentials.push(implicant);
                    }
                }
            }
        }
        debug!(
            "single-pass selection: {} essential, {} minterms residual",
            essentials.len(),
            self.entries.len()
        );
        (essentials, self)
    }

    /// Canonical selection: each new essential implicant removes every
    /// minterm it covers, and passes repeat until no unit entry remains.
    fn select_iterative(mut self) -> (Vec<Term>, Chart) {
        let mut essentials: Vec<Term> = Vec::new();
        loop {
            let next = self
                .entries
                .iter()
                .find(|(_, covering)| covering.len() == 1)
                .map(|(_, covering)| covering[0].clone());
            let Some(essential) = next else {
                break;
            };
            self.entries
                .retain(|minterm, _| !essential.covers(minterm));
            essentials.push(essential);
        }
        debug!(
            "iterative selection: {} essential, {} minterms residual",
            essentials.len(),
            self.entries.len()
        );
        (essentials, self)
    }
}
