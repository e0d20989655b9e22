//! ILS execution loop.
//!
//! # Algorithm
//!
//! 1. `best := initial`, `current := initial`
//! 2. Loop:
//!    a. **Descend**: local search from `current` → x
//!    b. If f(x) < f(best): best = x, current = x; otherwise stop
//!    c. **Perturb**: apply `perturbation_strength` random exchanges
//!    to `current`
//! 3. Return best
//!
//! Perturbation only runs when another descent follows; the returned
//! best tour is the same either way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::config::IlsConfig;
use crate::geo::DistanceMetric;
use crate::local::{LocalSearchRunner, Neighborhood, IMPROVEMENT_EPSILON};
use crate::tour::exchange;

/// Result of an Iterated Local Search run.
#[derive(Debug, Clone)]
pub struct IlsResult {
    /// Best tour found.
    pub best: Vec<usize>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Number of descents executed.
    pub iterations: usize,

    /// Best cost after each accepted descent, starting with the initial cost.
    pub cost_history: Vec<f64>,

    /// Whether cancelled externally.
    pub cancelled: bool,
}

/// Executes the Iterated Local Search algorithm.
pub struct IlsRunner;

impl IlsRunner {
    /// Runs ILS from `initial` under `neighborhood`.
    pub fn run<M, N>(
        metric: &M,
        initial: &[usize],
        neighborhood: &N,
        config: &IlsConfig,
    ) -> IlsResult
    where
        M: DistanceMetric + ?Sized,
        N: Neighborhood + ?Sized,
    {
        Self::run_with_cancel(metric, initial, neighborhood, config, None)
    }

    /// Runs ILS with an optional cancellation token, checked before each
    /// descent.
    pub fn run_with_cancel<M, N>(
        metric: &M,
        initial: &[usize],
        neighborhood: &N,
        config: &IlsConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> IlsResult
    where
        M: DistanceMetric + ?Sized,
        N: Neighborhood + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current = initial.to_vec();
        let mut best = current.clone();
        let mut best_cost = metric.tour_cost(&best);
        let mut cost_history = vec![best_cost];
        let mut iterations = 0usize;
        let mut cancelled = false;

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let descent =
                LocalSearchRunner::run(metric, &current, neighborhood, &config.local_search);
            iterations += 1;

            if descent.best_cost >= best_cost - IMPROVEMENT_EPSILON {
                trace!(
                    iteration = iterations,
                    cost = descent.best_cost,
                    "ils descent did not improve"
                );
                break;
            }

            best = descent.best.clone();
            best_cost = descent.best_cost;
            cost_history.push(best_cost);
            trace!(iteration = iterations, best_cost, "ils improved");

            current = descent.best;
            perturb(&mut current, config.perturbation_strength, &mut rng);
        }

        debug!(
            neighborhood = neighborhood.name(),
            iterations,
            best_cost,
            cancelled,
            "ils finished"
        );

        IlsResult {
            best,
            best_cost,
            iterations,
            cost_history,
            cancelled,
        }
    }
}

/// Applies `strength` exchanges at uniformly random position pairs.
///
/// Tours with fewer than two elements are left untouched.
pub fn perturb<R: Rng + ?Sized>(tour: &mut Vec<usize>, strength: usize, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    for _ in 0..strength {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        *tour = exchange(tour, i, j);
    }
}
