//! Local search (hill climbing) over a single neighborhood.
//!
//! A [`Neighborhood`] maps `(tour, position)` to one canonical candidate
//! tour. The runner sweeps every position, accepts improving candidates,
//! and repeats until a full sweep finds nothing better: a local optimum
//! under that neighborhood.
//!
//! Scanning one candidate per position keeps each sweep at O(n)
//! candidates (O(n²) with full cost re-evaluation) instead of the O(n²)
//! candidates of an all-pairs neighborhood.
//!
//! # References
//!
//! - Aarts & Lenstra (eds.) (1997), *Local Search in Combinatorial
//!   Optimization*, Wiley.

mod config;
mod runner;
mod types;

pub use config::{Descent, LocalSearchConfig};
pub use runner::{LocalSearchResult, LocalSearchRunner};
pub use types::{default_neighborhoods, from_fn, Adjacent, FromFn, Neighborhood};

/// Minimum cost decrease that counts as an improvement.
///
/// Guards against accepting moves whose only gain is floating-point
/// rounding, which could otherwise cycle between equal-cost tours.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;
