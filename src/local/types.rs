//! Neighborhood trait and the adjacent-position neighborhoods.

use crate::tour::{Move, MoveKind};

/// Generates one candidate tour per scanned position.
///
/// Implementations must return a permutation of the same indices as
/// `tour` and must not depend on anything but their arguments, so the
/// runners can re-propose freely.
pub trait Neighborhood {
    /// Candidate produced from `tour` at `position` (`position < tour.len()`).
    fn propose(&self, tour: &[usize], position: usize) -> Vec<usize>;

    /// Short name used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<N: Neighborhood + ?Sized> Neighborhood for &N {
    fn propose(&self, tour: &[usize], position: usize) -> Vec<usize> {
        (**self).propose(tour, position)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<N: Neighborhood + ?Sized> Neighborhood for Box<N> {
    fn propose(&self, tour: &[usize], position: usize) -> Vec<usize> {
        (**self).propose(tour, position)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Applies a move between `position` and its successor `(position + 1) mod n`.
///
/// For [`MoveKind::TwoOpt`] the pair is ordered `(min, max)`; at the
/// wrap-around position this reverses the whole tour, which leaves the
/// closed-tour cost unchanged.
///
/// # Examples
///
/// ```
/// use geo_tsp::local::{Adjacent, Neighborhood};
/// use geo_tsp::tour::MoveKind;
///
/// let nb = Adjacent(MoveKind::Exchange);
/// assert_eq!(nb.propose(&[0, 1, 2, 3], 3), vec![3, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjacent(pub MoveKind);

impl Adjacent {
    /// The concrete move proposed at `position` for a tour of length `n`.
    pub fn move_at(&self, position: usize, n: usize) -> Move {
        let next = (position + 1) % n;
        match self.0 {
            MoveKind::TwoOpt => Move::new(self.0, position.min(next), position.max(next)),
            kind => Move::new(kind, position, next),
        }
    }
}

impl Neighborhood for Adjacent {
    fn propose(&self, tour: &[usize], position: usize) -> Vec<usize> {
        self.move_at(position, tour.len()).apply(tour)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}

impl From<MoveKind> for Adjacent {
    fn from(kind: MoveKind) -> Self {
        Adjacent(kind)
    }
}

/// Neighborhood backed by a closure.
pub struct FromFn<F> {
    name: &'static str,
    f: F,
}

impl<F> Neighborhood for FromFn<F>
where
    F: Fn(&[usize], usize) -> Vec<usize>,
{
    fn propose(&self, tour: &[usize], position: usize) -> Vec<usize> {
        (self.f)(tour, position)
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Wraps a `(tour, position) -> tour` function as a [`Neighborhood`].
///
/// ```
/// use geo_tsp::local::{from_fn, Neighborhood};
/// use geo_tsp::tour::exchange;
///
/// let opposite = from_fn("opposite", |t: &[usize], i| exchange(t, i, (i + t.len() / 2) % t.len()));
/// assert_eq!(opposite.propose(&[0, 1, 2, 3], 0), vec![2, 1, 0, 3]);
/// ```
pub fn from_fn<F>(name: &'static str, f: F) -> FromFn<F>
where
    F: Fn(&[usize], usize) -> Vec<usize>,
{
    FromFn { name, f }
}

/// Adjacent 2-opt, exchange, then reinsertion.
pub fn default_neighborhoods() -> Vec<Adjacent> {
    MoveKind::ALL.iter().copied().map(Adjacent).collect()
}
