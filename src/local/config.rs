//! Local search configuration.

/// How a sweep picks which improving candidate to accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Descent {
    /// Accept each improving candidate as soon as it is found; later
    /// positions in the same sweep are proposed from the new tour.
    #[default]
    FirstImprovement,
    /// Propose every position from the same base tour and accept only
    /// the best candidate at the end of the sweep.
    BestImprovement,
}

/// Configuration for [`LocalSearchRunner`](super::LocalSearchRunner).
///
/// # Examples
///
/// ```
/// use geo_tsp::local::{Descent, LocalSearchConfig};
///
/// let config = LocalSearchConfig::default()
///     .with_descent(Descent::BestImprovement)
///     .with_max_sweeps(50);
/// assert_eq!(config.max_sweeps, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSearchConfig {
    /// Acceptance strategy within a sweep.
    pub descent: Descent,
    /// Maximum number of sweeps (0 = run to convergence).
    pub max_sweeps: usize,
}

impl LocalSearchConfig {
    pub fn with_descent(mut self, descent: Descent) -> Self {
        self.descent = descent;
        self
    }

    pub fn with_max_sweeps(mut self, n: usize) -> Self {
        self.max_sweeps = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.descent, Descent::FirstImprovement);
        assert_eq!(config.max_sweeps, 0);
    }
}
