//! Neighborhood move operators.
//!
//! Each operator copies its input and returns the modified permutation.
//! Positions are validated up front: an out-of-range or mis-ordered pair
//! panics with a message naming the operator, never an opaque slice
//! index error.

use std::fmt;
use std::str::FromStr;

use crate::error::TspError;

/// Swaps the elements at positions `i` and `j`.
///
/// # Panics
/// Panics if `i` or `j` is out of range.
pub fn exchange(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    let n = tour.len();
    assert!(i < n && j < n, "exchange({i}, {j}) out of range for tour of length {n}");

    let mut new = tour.to_vec();
    new.swap(i, j);
    new
}

/// Removes the element at position `i` and inserts it at position `j`.
///
/// `j` indexes the shortened list (after removal), so `j <= n - 1`.
///
/// ```
/// use geo_tsp::tour::reinsertion;
/// assert_eq!(reinsertion(&[0, 1, 2, 3], 0, 2), vec![1, 2, 0, 3]);
/// ```
///
/// # Panics
/// Panics if `i >= n` or `j >= n`.
pub fn reinsertion(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    let n = tour.len();
    assert!(i < n && j < n, "reinsertion({i}, {j}) out of range for tour of length {n}");

    let mut new = tour.to_vec();
    let city = new.remove(i);
    new.insert(j, city);
    new
}

/// Reverses positions `[i, j]` inclusive (2-opt move).
///
/// ```
/// use geo_tsp::tour::two_opt;
/// assert_eq!(two_opt(&[0, 1, 2, 3], 1, 2), vec![0, 2, 1, 3]);
/// ```
///
/// # Panics
/// Panics if `i > j` or `j` is out of range.
pub fn two_opt(tour: &[usize], i: usize, j: usize) -> Vec<usize> {
    let n = tour.len();
    assert!(i <= j, "two_opt({i}, {j}) requires i <= j");
    assert!(j < n, "two_opt({i}, {j}) out of range for tour of length {n}");

    let mut new = tour.to_vec();
    new[i..=j].reverse();
    new
}

/// Kind of move operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Swap two positions.
    Exchange,
    /// Remove one element and reinsert it elsewhere.
    Reinsertion,
    /// Reverse a segment.
    TwoOpt,
}

impl MoveKind {
    /// All kinds, in the default neighborhood order.
    pub const ALL: [MoveKind; 3] = [MoveKind::TwoOpt, MoveKind::Exchange, MoveKind::Reinsertion];

    pub fn name(&self) -> &'static str {
        match self {
            MoveKind::Exchange => "exchange",
            MoveKind::Reinsertion => "reinsertion",
            MoveKind::TwoOpt => "two-opt",
        }
    }

    /// Applies this operator to `tour` at positions `i`, `j`.
    ///
    /// # Panics
    /// Panics under the same conditions as the underlying operator.
    pub fn apply(&self, tour: &[usize], i: usize, j: usize) -> Vec<usize> {
        match self {
            MoveKind::Exchange => exchange(tour, i, j),
            MoveKind::Reinsertion => reinsertion(tour, i, j),
            MoveKind::TwoOpt => two_opt(tour, i, j),
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveKind {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exchange" | "swap" => Ok(MoveKind::Exchange),
            "reinsertion" | "insert" | "relocate" => Ok(MoveKind::Reinsertion),
            "two-opt" | "two_opt" | "2opt" | "2-opt" => Ok(MoveKind::TwoOpt),
            other => Err(TspError::Config(format!(
                "unknown neighborhood `{other}` (expected two-opt, exchange, or reinsertion)"
            ))),
        }
    }
}

/// A concrete move: operator kind plus its two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub kind: MoveKind,
    pub i: usize,
    pub j: usize,
}

impl Move {
    pub fn new(kind: MoveKind, i: usize, j: usize) -> Self {
        Self { kind, i, j }
    }

    /// Produces the moved tour, leaving `tour` untouched.
    pub fn apply(&self, tour: &[usize]) -> Vec<usize> {
        self.kind.apply(tour, self.i, self.j)
    }
}
