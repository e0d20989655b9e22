//! Input and output collaborators.
//!
//! The engine never touches files itself. Points arrive through a
//! [`PointSource`] and finished tours leave through a [`TourSink`]; the
//! text implementations here read the whitespace-separated point format
//! and write one tour per line as space-separated indices.
//!
//! # Point file format
//!
//! ```text
//! 3
//! Paris 48.8566 2.3522
//! Lyon 45.7640 4.8357
//! Marseille 43.2965 5.3698
//! ```
//!
//! The first token is the point count; each record is a label followed
//! by latitude and longitude in degrees. Tokens may be split across
//! lines arbitrarily.

mod reader;
mod writer;

pub use reader::{PointSource, TspTextReader};
pub use writer::{TourSink, TourWriter};
