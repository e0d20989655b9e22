//! Geographic point model and distance evaluation.
//!
//! Points are loaded once from degree coordinates, converted to radians,
//! and never modified afterwards. Everything downstream refers to them by
//! index and asks a [`DistanceMetric`] for pairwise distances and whole
//! tour costs.
//!
//! # Key Types
//!
//! - [`GeoModel`]: great-circle distances via the spherical law of cosines
//! - [`DistanceMatrix`]: dense cache of any metric, or explicit rows
//! - [`DistanceMetric`]: the trait the search engines evaluate against
//!
//! # References
//!
//! - Spherical law of cosines: Sinnott (1984), "Virtues of the Haversine",
//!   *Sky and Telescope* 68(2), 159 (discusses its rounding behavior)

mod matrix;
mod model;
mod types;

pub use matrix::DistanceMatrix;
pub use model::GeoModel;
pub use types::{to_radians, DistanceMetric, Point, PointRecord, EARTH_RADIUS_KM, PI};
