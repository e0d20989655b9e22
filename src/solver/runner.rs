//! Pipeline execution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::config::{SolverConfig, Strategy};
use super::types::{ScoredTour, SolveReport};
use crate::error::{Result, TspError};
use crate::geo::{DistanceMatrix, DistanceMetric, GeoModel};
use crate::ils::{IlsConfig, IlsRunner};
use crate::local::Adjacent;
use crate::tour::{greedy_tour, random_tour};
use crate::vns::{VnsConfig, VnsRunner};

/// Runs random, greedy, and improved construction over one instance.
pub struct TspSolver;

impl TspSolver {
    /// Solves `model` according to `config`.
    ///
    /// # Errors
    ///
    /// - [`TspError::EmptyInstance`] if the model has no points
    /// - [`TspError::Config`] if `config` fails validation
    ///
    /// # Examples
    ///
    /// ```
    /// use geo_tsp::geo::{GeoModel, PointRecord};
    /// use geo_tsp::solver::{SolverConfig, TspSolver};
    ///
    /// let model = GeoModel::from_records(vec![
    ///     PointRecord::new("Paris", 48.8566, 2.3522),
    ///     PointRecord::new("Lyon", 45.7640, 4.8357),
    ///     PointRecord::new("Marseille", 43.2965, 5.3698),
    ///     PointRecord::new("Bordeaux", 44.8378, -0.5792),
    /// ])
    /// .unwrap();
    ///
    /// let report = TspSolver::solve(&model, &SolverConfig::default().with_seed(1)).unwrap();
    /// assert!(report.improved.cost <= report.greedy.cost);
    /// ```
    pub fn solve(model: &GeoModel, config: &SolverConfig) -> Result<SolveReport> {
        if model.is_empty() {
            return Err(TspError::EmptyInstance);
        }
        config.validate()?;

        if config.precompute_distances {
            let matrix = DistanceMatrix::from_metric(model);
            Self::solve_with_metric(&matrix, config)
        } else {
            Self::solve_with_metric(model, config)
        }
    }

    /// Runs the pipeline against any metric.
    pub fn solve_with_metric<M: DistanceMetric + ?Sized>(
        metric: &M,
        config: &SolverConfig,
    ) -> Result<SolveReport> {
        let n = metric.point_count();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let random = ScoredTour::evaluate(metric, random_tour(n, &mut rng));
        info!(event = "random_tour", points = n, cost = random.cost);

        let greedy = ScoredTour::evaluate(metric, greedy_tour(n, |a, b| metric.distance(a, b)));
        info!(event = "greedy_tour", cost = greedy.cost);

        let improved = match config.strategy {
            Strategy::Vns => {
                let neighborhoods: Vec<Adjacent> =
                    config.neighborhoods.iter().copied().map(Adjacent).collect();
                let vns_config = VnsConfig::default().with_local_search(config.local_search);
                let result = VnsRunner::run(metric, &greedy.tour, &neighborhoods, &vns_config);
                ScoredTour {
                    tour: result.best,
                    cost: result.best_cost,
                }
            }
            Strategy::Ils { neighborhood } => {
                let ils_config = IlsConfig::default()
                    .with_perturbation_strength(config.perturbation_strength)
                    .with_max_iterations(config.max_ils_iterations)
                    .with_local_search(config.local_search)
                    .with_seed(rng.random());
                let result =
                    IlsRunner::run(metric, &greedy.tour, &Adjacent(neighborhood), &ils_config);
                ScoredTour {
                    tour: result.best,
                    cost: result.best_cost,
                }
            }
        };
        info!(
            event = "improved_tour",
            strategy = ?config.strategy,
            cost = improved.cost,
            gain = greedy.cost - improved.cost
        );

        Ok(SolveReport {
            random,
            greedy,
            improved,
        })
    }
}
