//! Local search execution engine.
//!
//! # Algorithm (first improvement)
//!
//! 1. `current := input`
//! 2. Repeat while the previous sweep improved:
//!    a. For each position `p` in `0..n`: propose a candidate from
//!    `current` at `p`; if it is cheaper, it becomes `current`
//! 3. Return `current`, a local optimum under the neighborhood
//!
//! Best improvement proposes every position from the sweep's base tour
//! and moves only to the cheapest candidate.

use tracing::{debug, trace};

use super::config::{Descent, LocalSearchConfig};
use super::types::Neighborhood;
use super::IMPROVEMENT_EPSILON;
use crate::geo::DistanceMetric;

/// Result of a local search descent.
#[derive(Debug, Clone)]
pub struct LocalSearchResult {
    /// Final tour.
    pub best: Vec<usize>,
    /// Cost of the final tour.
    pub best_cost: f64,
    /// Number of sweeps executed (including the final non-improving one).
    pub sweeps: usize,
    /// Number of accepted candidates.
    pub improvements: usize,
    /// `false` if the sweep budget ran out before a local optimum was
    /// confirmed.
    pub converged: bool,
}

/// Hill-climbing runner.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Descends from `tour` under `neighborhood` until no candidate
    /// improves, or until `config.max_sweeps` sweeps have run.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_tsp::geo::{DistanceMatrix, DistanceMetric};
    /// use geo_tsp::local::{Adjacent, LocalSearchConfig, LocalSearchRunner};
    /// use geo_tsp::tour::MoveKind;
    ///
    /// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    /// let result = LocalSearchRunner::run(
    ///     &m,
    ///     &[0, 2, 1, 3],
    ///     &Adjacent(MoveKind::Exchange),
    ///     &LocalSearchConfig::default(),
    /// );
    /// assert!((result.best_cost - 4.0).abs() < 1e-9);
    /// assert!(result.converged);
    /// ```
    pub fn run<M, N>(
        metric: &M,
        tour: &[usize],
        neighborhood: &N,
        config: &LocalSearchConfig,
    ) -> LocalSearchResult
    where
        M: DistanceMetric + ?Sized,
        N: Neighborhood + ?Sized,
    {
        let mut current = tour.to_vec();
        let mut current_cost = metric.tour_cost(&current);
        let initial_cost = current_cost;
        let n = current.len();

        let mut sweeps = 0usize;
        let mut improvements = 0usize;
        let mut converged = false;

        loop {
            if config.max_sweeps > 0 && sweeps >= config.max_sweeps {
                break;
            }
            sweeps += 1;

            let improved = match config.descent {
                Descent::FirstImprovement => {
                    let mut improved = false;
                    for p in 0..n {
                        let candidate = neighborhood.propose(&current, p);
                        let candidate_cost = metric.tour_cost(&candidate);
                        if candidate_cost < current_cost - IMPROVEMENT_EPSILON {
                            current = candidate;
                            current_cost = candidate_cost;
                            improvements += 1;
                            improved = true;
                        }
                    }
                    improved
                }
                Descent::BestImprovement => {
                    let mut best_candidate: Option<(Vec<usize>, f64)> = None;
                    let mut threshold = current_cost - IMPROVEMENT_EPSILON;
                    for p in 0..n {
                        let candidate = neighborhood.propose(&current, p);
                        let candidate_cost = metric.tour_cost(&candidate);
                        if candidate_cost < threshold {
                            threshold = candidate_cost;
                            best_candidate = Some((candidate, candidate_cost));
                        }
                    }
                    match best_candidate {
                        Some((candidate, cost)) => {
                            current = candidate;
                            current_cost = cost;
                            improvements += 1;
                            true
                        }
                        None => false,
                    }
                }
            };

            trace!(sweep = sweeps, cost = current_cost, improved, "local search sweep");

            if !improved {
                converged = true;
                break;
            }
        }

        debug!(
            neighborhood = neighborhood.name(),
            initial_cost,
            final_cost = current_cost,
            sweeps,
            improvements,
            converged,
            "local search finished"
        );

        LocalSearchResult {
            best: current,
            best_cost: current_cost,
            sweeps,
            improvements,
            converged,
        }
    }
}
