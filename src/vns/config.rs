//! Variable Neighborhood Search configuration.

use crate::local::LocalSearchConfig;

/// Configuration parameters for Variable Neighborhood Search.
///
/// # Examples
///
/// ```
/// use geo_tsp::local::{Descent, LocalSearchConfig};
/// use geo_tsp::vns::VnsConfig;
///
/// let config = VnsConfig::default()
///     .with_local_search(LocalSearchConfig::default().with_descent(Descent::BestImprovement));
/// assert_eq!(config.local_search.descent, Descent::BestImprovement);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VnsConfig {
    /// Descent settings used for every neighborhood.
    pub local_search: LocalSearchConfig,
}

impl VnsConfig {
    /// Sets the descent settings.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }
}
