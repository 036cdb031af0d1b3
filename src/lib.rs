//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes two-level Boolean functions given as sets of
//! product terms, using the Quine-McCluskey method: iterative pairwise
//! combination of terms into prime implicants, construction of the prime
//! implicant chart, and selection of the essential prime implicants.
//! It reads and writes the PLA sum-of-products exchange format used by
//! digital-logic design tools.
//!
//! ## Minimizing a cover
//!
//! ```
//! use qm_logic::{Cover, Minimizable, PLAWriter};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut cover = Cover::new(2, 1);
//! cover.add_term("00".parse()?)?;
//! cover.add_term("01".parse()?)?;
//! cover.add_term("11".parse()?)?;
//!
//! let minimized = cover.minimize()?;
//! assert_eq!(minimized.to_pla_string()?, ".i 2\n.o 1\n.p 2\n0-\n-1\n.e\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## PLA files
//!
//! ```
//! use qm_logic::{Cover, Minimizable, PLAReader, PLAWriter};
//! # use std::io::Write;
//!
//! # fn main() -> std::io::Result<()> {
//! # let mut temp = tempfile::NamedTempFile::new()?;
//! # temp.write_all(b".i 2\n.o 1\n.p 2\n01 |1\n11 |1\n.e\n")?;
//! # temp.flush()?;
//! # let input_path = temp.path();
//! let cover = Cover::from_pla_file(input_path)?;
//! let minimized = cover.minimize()?;
//!
//! # let output = tempfile::NamedTempFile::new()?;
//! // Write the selected implicants back out
//! minimized.to_pla_file(output.path())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting a run
//!
//! The [`qm`] module exposes the engine directly when the prime implicant
//! set, the chart or the residual is of interest, not just the final
//! cover:
//!
//! ```
//! use qm_logic::{qm, Cover, MinimizerConfig};
//!
//! let mut cover = Cover::new(3, 1);
//! cover.add_term("000".parse().unwrap()).unwrap();
//! cover.add_term("111".parse().unwrap()).unwrap();
//!
//! let run = qm::minimize(&cover.term_set(), &MinimizerConfig::default()).unwrap();
//! assert_eq!(run.prime_implicants.len(), 2);
//! assert!(run.residual.is_empty());
//! ```
//!
//! ## Essential-implicant selection modes
//!
//! Two selection behaviors are available (see [`SelectionMode`]). The
//! default, [`SelectionMode::SinglePass`], scans the chart exactly once
//! and removes only the minterm that triggered each selection, matching
//! the classical hand procedure this crate was modeled on; minterms that
//! happen to be covered by an already-selected essential stay in the
//! residual chart. [`SelectionMode::Iterative`] is the canonical variant:
//! every new essential implicant removes all minterms it covers, and
//! passes repeat until no uniquely-covered minterm remains. Neither mode
//! applies Petrick's method, so a cyclic residual is returned to the
//! caller rather than resolved.

pub mod cover;
#[cfg(feature = "generator")]
pub mod generator;
pub mod pla;
pub mod qm;

pub use cover::{Cover, CoverError, Minimizable, Term};
pub use pla::{PLAError, PLAReadError, PLAReader, PLAWriteError, PLAWriter};
pub use qm::{Chart, Minimization, MinimizationError};

/// Default cap on intermediate terms generated by the combination loop
pub const DEFAULT_TERM_BUDGET: usize = 1 << 20;

/// Essential-implicant selection behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// One pass over the chart; each uniquely-covered minterm selects its
    /// implicant and only that minterm is removed
    #[default]
    SinglePass,
    /// Iterate, removing every minterm covered by each new essential
    /// implicant, until no uniquely-covered minterm remains
    Iterative,
}

/// Configuration for a minimization run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Essential-implicant selection behavior
    pub selection: SelectionMode,
    /// Upper bound on intermediate terms generated by the combination
    /// loop; `None` disables the guard
    ///
    /// Prime implicant generation is exponential in the term width for
    /// dense, highly-overlapping inputs. The budget turns runaway growth
    /// into a clean [`MinimizationError::TermBudgetExceeded`] failure
    /// instead of memory exhaustion.
    pub max_terms: Option<usize>,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            selection: SelectionMode::default(),
            max_terms: Some(DEFAULT_TERM_BUDGET),
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MinimizerConfig::new();
        assert_eq!(config.selection, SelectionMode::SinglePass);
        assert_eq!(config.max_terms, Some(DEFAULT_TERM_BUDGET));
    }
}
