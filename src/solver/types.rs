//! Pipeline output types.

use crate::geo::DistanceMetric;

/// A tour together with its cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredTour {
    pub tour: Vec<usize>,
    pub cost: f64,
}

impl ScoredTour {
    /// Evaluates `tour` against `metric`.
    pub fn evaluate<M: DistanceMetric + ?Sized>(metric: &M, tour: Vec<usize>) -> Self {
        let cost = metric.tour_cost(&tour);
        Self { tour, cost }
    }
}

/// The three tours produced by one pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    /// Uniform random permutation (baseline).
    pub random: ScoredTour,
    /// Nearest-neighbor construction from point 0.
    pub greedy: ScoredTour,
    /// Greedy tour after VNS or ILS.
    pub improved: ScoredTour,
}

impl SolveReport {
    /// Relative improvement of `improved` over `greedy`, in [0, 1].
    pub fn improvement_ratio(&self) -> f64 {
        if self.greedy.cost <= 0.0 {
            return 0.0;
        }
        ((self.greedy.cost - self.improved.cost) / self.greedy.cost).max(0.0)
    }
}
