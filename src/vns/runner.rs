//! Variable Neighborhood Search execution engine.
//!
//! # Algorithm
//!
//! 1. `best := initial`
//! 2. For each neighborhood N_k in order:
//!    a. **Local search**: descend from `initial` under N_k → x_k
//!    b. **Keep or not**: if f(x_k) < f(best), set best = x_k
//! 3. Return best
//!
//! # Reference
//!
//! Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//! *Computers & Operations Research* 24(11), 1097-1100.

use tracing::debug;

use super::config::VnsConfig;
use crate::geo::DistanceMetric;
use crate::local::{LocalSearchRunner, Neighborhood, IMPROVEMENT_EPSILON};

/// Result of a VNS run.
#[derive(Debug, Clone)]
pub struct VnsResult {
    /// Best tour found (the initial tour if nothing improved).
    pub best: Vec<usize>,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Cost of the initial tour.
    pub initial_cost: f64,
    /// Local optimum cost reached under each neighborhood, in order.
    pub neighborhood_costs: Vec<f64>,
    /// Index of the neighborhood that produced `best`, if any improved.
    pub best_neighborhood: Option<usize>,
    /// Total local search sweeps across all neighborhoods.
    pub sweeps: usize,
}

/// Variable Neighborhood Search runner.
pub struct VnsRunner;

impl VnsRunner {
    /// Executes VNS from `initial` over `neighborhoods`.
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_tsp::geo::{DistanceMatrix, DistanceMetric};
    /// use geo_tsp::local::default_neighborhoods;
    /// use geo_tsp::vns::{VnsConfig, VnsRunner};
    ///
    /// let m = DistanceMatrix::euclidean(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
    /// let result = VnsRunner::run(&m, &[0, 2, 1, 3], &default_neighborhoods(), &VnsConfig::default());
    /// assert!((result.best_cost - 4.0).abs() < 1e-9);
    /// ```
    pub fn run<M, N>(
        metric: &M,
        initial: &[usize],
        neighborhoods: &[N],
        config: &VnsConfig,
    ) -> VnsResult
    where
        M: DistanceMetric + ?Sized,
        N: Neighborhood,
    {
        let initial_cost = metric.tour_cost(initial);
        let mut best = initial.to_vec();
        let mut best_cost = initial_cost;
        let mut best_neighborhood = None;
        let mut neighborhood_costs = Vec::with_capacity(neighborhoods.len());
        let mut sweeps = 0;

        for (k, neighborhood) in neighborhoods.iter().enumerate() {
            let descent =
                LocalSearchRunner::run(metric, initial, neighborhood, &config.local_search);
            sweeps += descent.sweeps;
            neighborhood_costs.push(descent.best_cost);

            if descent.best_cost < best_cost - IMPROVEMENT_EPSILON {
                best = descent.best;
                best_cost = descent.best_cost;
                best_neighborhood = Some(k);
            }
        }

        debug!(
            initial_cost,
            best_cost,
            best_neighborhood = ?best_neighborhood.map(|k| neighborhoods[k].name()),
            "vns finished"
        );

        VnsResult {
            best,
            best_cost,
            initial_cost,
            neighborhood_costs,
            best_neighborhood,
            sweeps,
        }
    }
}
