//! Minimizable trait and its implementation for covers

use crate::cover::Cover;
use crate::qm;
use crate::qm::MinimizationError;
use crate::MinimizerConfig;

/// Types that can be minimized with the Quine-McCluskey engine
///
/// All methods take `&self` and return a new minimized instance; the
/// original is never modified.
///
/// # Examples
///
/// ```
/// use qm_logic::{Cover, Minimizable, MinimizerConfig, SelectionMode};
///
/// let mut cover = Cover::new(2, 1);
/// cover.add_term("00".parse().unwrap()).unwrap();
/// cover.add_term("01".parse().unwrap()).unwrap();
/// cover.add_term("11".parse().unwrap()).unwrap();
///
/// let config = MinimizerConfig {
///     selection: SelectionMode::Iterative,
///     ..MinimizerConfig::default()
/// };
/// let minimized = cover.minimize_with_config(&config).unwrap();
/// assert_eq!(minimized.num_terms(), 2);
/// ```
pub trait Minimizable {
    /// Minimize with the default configuration
    ///
    /// # Errors
    ///
    /// Propagates any [`MinimizationError`] from the engine.
    fn minimize(&self) -> Result<Self, MinimizationError>
    where
        Self: Sized,
    {
        self.minimize_with_config(&MinimizerConfig::default())
    }

    /// Minimize with a custom configuration
    ///
    /// This is the method implementations must provide.
    ///
    /// # Errors
    ///
    /// Propagates any [`MinimizationError`] from the engine.
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError>
    where
        Self: Sized;
}

impl Minimizable for Cover {
    /// Runs the engine on the deduplicated term set and returns a new cover
    /// holding the essential prime implicants, with the same dimensions.
    fn minimize_with_config(&self, config: &MinimizerConfig) -> Result<Self, MinimizationError> {
        let seeds = self.term_set();
        let result = qm::minimize(&seeds, config)?;
        Ok(Cover::from_parts(
            self.num_inputs(),
            self.num_outputs(),
            result.essential_implicants,
        ))
    }
}
