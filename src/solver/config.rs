//! Pipeline configuration.

use crate::error::{Result, TspError};
use crate::local::LocalSearchConfig;
use crate::tour::MoveKind;

/// Improvement strategy applied to the greedy tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Variable Neighborhood Search over [`SolverConfig::neighborhoods`].
    #[default]
    Vns,
    /// Iterated Local Search under a single adjacent neighborhood.
    Ils {
        /// Neighborhood used for every descent.
        neighborhood: MoveKind,
    },
}

/// Configuration for [`TspSolver`](super::TspSolver).
///
/// # Examples
///
/// ```
/// use geo_tsp::solver::{SolverConfig, Strategy};
/// use geo_tsp::tour::MoveKind;
///
/// let config = SolverConfig::default()
///     .with_strategy(Strategy::Ils { neighborhood: MoveKind::TwoOpt })
///     .with_perturbation_strength(4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Improvement strategy.
    pub strategy: Strategy,

    /// Ordered neighborhoods for VNS.
    pub neighborhoods: Vec<MoveKind>,

    /// Descent settings shared by both strategies.
    pub local_search: LocalSearchConfig,

    /// Random exchanges per ILS perturbation.
    pub perturbation_strength: usize,

    /// Maximum ILS descents (0 = stop only on non-improvement).
    pub max_ils_iterations: usize,

    /// Seed for the random tour and ILS (None = seeded from the OS).
    pub seed: Option<u64>,

    /// Cache all pairwise distances before searching.
    pub precompute_distances: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            neighborhoods: MoveKind::ALL.to_vec(),
            local_search: LocalSearchConfig::default(),
            perturbation_strength: 3,
            max_ils_iterations: 0,
            seed: None,
            precompute_distances: false,
        }
    }
}

impl SolverConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_neighborhoods(mut self, neighborhoods: Vec<MoveKind>) -> Self {
        self.neighborhoods = neighborhoods;
        self
    }

    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    pub fn with_perturbation_strength(mut self, k: usize) -> Self {
        self.perturbation_strength = k;
        self
    }

    pub fn with_max_ils_iterations(mut self, n: usize) -> Self {
        self.max_ils_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_precompute_distances(mut self, enabled: bool) -> Self {
        self.precompute_distances = enabled;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.strategy == Strategy::Vns && self.neighborhoods.is_empty() {
            return Err(TspError::Config(
                "VNS requires at least one neighborhood".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.strategy, Strategy::Vns);
        assert_eq!(
            config.neighborhoods,
            vec![MoveKind::TwoOpt, MoveKind::Exchange, MoveKind::Reinsertion]
        );
        assert!(config.seed.is_none());
        assert!(!config.precompute_distances);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_vns_neighborhoods() {
        let config = SolverConfig::default().with_neighborhoods(Vec::new());
        assert!(matches!(config.validate(), Err(TspError::Config(_))));
    }

    #[test]
    fn test_ils_ignores_neighborhood_list() {
        let config = SolverConfig::default()
            .with_neighborhoods(Vec::new())
            .with_strategy(Strategy::Ils {
                neighborhood: MoveKind::Exchange,
            });
        assert!(config.validate().is_ok());
    }
}
