//! Iterated Local Search (ILS).
//!
//! Alternates a local search descent with a random perturbation of the
//! resulting local optimum. The search continues only while each descent
//! strictly improves on the best tour seen; the first non-improving
//! descent ends it.
//!
//! # References
//!
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//!   Search", in *Handbook of Metaheuristics*, 320-353.

mod config;
mod runner;

pub use config::IlsConfig;
pub use runner::{perturb, IlsResult, IlsRunner};
