//! Dense distance matrix.

use super::types::DistanceMetric;
use crate::error::{Result, TspError};

/// Precomputed n×n distances.
///
/// Built from any [`DistanceMetric`] to turn repeated trigonometry into a
/// table lookup, or from explicit rows for synthetic instances.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Caches every pairwise distance of `metric`. O(n²) time and memory.
    pub fn from_metric<M: DistanceMetric + ?Sized>(metric: &M) -> Self {
        let n = metric.point_count();
        let mut data = vec![0.0; n * n];
        for a in 0..n {
            for b in (a + 1)..n {
                let d = metric.distance(a, b);
                data[a * n + b] = d;
                data[b * n + a] = d;
            }
        }
        Self { n, data }
    }

    /// Builds a matrix from explicit rows.
    ///
    /// Rows must form a square matrix of finite, non-negative values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(TspError::Config(format!(
                    "distance matrix row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            if let Some(&bad) = row.iter().find(|d| !d.is_finite() || **d < 0.0) {
                return Err(TspError::Config(format!(
                    "distance matrix row {i} contains invalid distance {bad}"
                )));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Euclidean distances between planar coordinates.
    pub fn euclidean(coords: &[(f64, f64)]) -> Self {
        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for (a, &(xa, ya)) in coords.iter().enumerate() {
            for (b, &(xb, yb)) in coords.iter().enumerate() {
                data[a * n + b] = ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt();
            }
        }
        Self { n, data }
    }
}

impl DistanceMetric for DistanceMatrix {
    fn point_count(&self) -> usize {
        self.n
    }

    #[inline]
    fn distance(&self, a: usize, b: usize) -> f64 {
        self.data[a * self.n + b]
    }
}
