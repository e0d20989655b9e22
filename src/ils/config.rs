//! Iterated Local Search configuration.

use crate::local::LocalSearchConfig;

/// Configuration for the Iterated Local Search algorithm.
///
/// # Examples
///
/// ```
/// use geo_tsp::ils::IlsConfig;
///
/// let config = IlsConfig::default()
///     .with_perturbation_strength(4)
///     .with_max_iterations(100)
///     .with_seed(42);
/// assert_eq!(config.perturbation_strength, 4);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsConfig {
    /// Number of random exchanges applied between descents.
    pub perturbation_strength: usize,

    /// Maximum number of descents (0 = stop only on non-improvement).
    pub max_iterations: usize,

    /// Random seed for reproducibility (None = seeded from the OS).
    pub seed: Option<u64>,

    /// Descent settings.
    pub local_search: LocalSearchConfig,
}

impl Default for IlsConfig {
    fn default() -> Self {
        Self {
            perturbation_strength: 3,
            max_iterations: 0,
            seed: None,
            local_search: LocalSearchConfig::default(),
        }
    }
}

impl IlsConfig {
    pub fn with_perturbation_strength(mut self, k: usize) -> Self {
        self.perturbation_strength = k;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IlsConfig::default();
        assert_eq!(config.perturbation_strength, 3);
        assert_eq!(config.max_iterations, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = IlsConfig::default()
            .with_perturbation_strength(0)
            .with_max_iterations(5)
            .with_seed(9);
        assert_eq!(config.perturbation_strength, 0);
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.seed, Some(9));
    }
}
