//! End-to-end solve pipeline.
//!
//! Builds a random baseline and a greedy nearest-neighbor tour, then
//! improves the greedy tour with VNS or ILS. The three scored tours are
//! what a front end displays and persists.
//!
//! # Key Types
//!
//! - [`SolverConfig`]: strategy, neighborhoods, budgets, seed
//! - [`TspSolver`]: runs the pipeline against a [`GeoModel`](crate::geo::GeoModel)
//! - [`SolveReport`]: random, greedy, and improved [`ScoredTour`]s

mod config;
mod runner;
mod types;

pub use config::{SolverConfig, Strategy};
pub use runner::TspSolver;
pub use types::{ScoredTour, SolveReport};
