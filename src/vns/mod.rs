//! Variable Neighborhood Search (VNS).
//!
//! Runs a full local search descent under each neighborhood of an
//! ordered list, every descent starting from the same initial tour, and
//! keeps the cheapest result. Descents are independent, not chained: no
//! neighborhood sees another's output.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//!   Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

mod config;
mod runner;

pub use config::VnsConfig;
pub use runner::{VnsResult, VnsRunner};
