//! Heuristic solver for the symmetric geographic Traveling Salesman Problem.
//!
//! Finds short closed tours over latitude/longitude points, measuring
//! great-circle distance in kilometers:
//!
//! - **Geo model**: points in radians, spherical-law-of-cosines distance,
//!   closed-tour cost, optional dense distance cache.
//! - **Tour construction**: uniform random permutation and
//!   nearest-neighbor greedy construction.
//! - **Move operators**: exchange, reinsertion, and 2-opt segment
//!   reversal, all pure functions on permutations.
//! - **Local search**: hill climbing to a local optimum under one
//!   adjacent-position neighborhood.
//! - **Variable Neighborhood Search (VNS)**: independent descents under
//!   an ordered neighborhood list, keeping the best.
//! - **Iterated Local Search (ILS)**: descent plus random exchange
//!   perturbation while the best keeps improving.
//!
//! # Architecture
//!
//! Everything above `geo` talks to a [`geo::DistanceMetric`], so the
//! engines run unchanged on great-circle distances, a cached matrix, or a
//! synthetic Euclidean instance. I/O lives at the edges in [`io`]; the
//! [`solver`] module wires the random → greedy → improved pipeline.

pub mod error;
pub mod geo;
pub mod ils;
pub mod io;
pub mod local;
pub mod solver;
pub mod tour;
pub mod vns;

pub use error::{Result, TspError};
