//! Initial tour construction.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TspError};

/// Uniformly random permutation of `[0, n)`.
///
/// The caller owns the generator; seed it from the OS for independent
/// runs or with a fixed seed for reproducibility.
///
/// # Examples
///
/// ```
/// use geo_tsp::tour::{is_valid_permutation, random_tour};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let tour = random_tour(10, &mut rng);
/// assert!(is_valid_permutation(&tour, 10));
/// ```
pub fn random_tour<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour: Vec<usize> = (0..n).collect();
    tour.shuffle(rng);
    tour
}

/// Nearest-neighbor tour starting at index 0.
///
/// Each step appends the closest unvisited index to the last one. Ties
/// go to the lowest index: the scan runs in index order and only a
/// strictly smaller distance replaces the incumbent. Deterministic for a
/// given distance function.
///
/// # Complexity
/// O(n²) distance evaluations.
pub fn greedy_tour<F>(n: usize, distance: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> f64,
{
    if n == 0 {
        return Vec::new();
    }

    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    tour.push(0);
    visited[0] = true;

    for _ in 1..n {
        let last = tour[tour.len() - 1];
        let mut best: Option<usize> = None;
        let mut best_dist = f64::INFINITY;

        for j in (0..n).filter(|&j| !visited[j]) {
            let d = distance(last, j);
            // First unvisited index is the fallback when distances are
            // infinite or NaN.
            if best.is_none() || d < best_dist {
                best = Some(j);
                best_dist = d;
            }
        }

        // At least one index is unvisited while tour.len() < n.
        if let Some(next) = best {
            tour.push(next);
            visited[next] = true;
        }
    }

    tour
}

/// Returns `true` if `tour` contains each index in `[0, n)` exactly once.
pub fn is_valid_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in tour {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Like [`is_valid_permutation`], but reports what is wrong.
pub fn validate_tour(tour: &[usize], n: usize) -> Result<()> {
    if tour.len() != n {
        return Err(TspError::InvalidTour(format!(
            "expected {n} indices, got {}",
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &v) in tour.iter().enumerate() {
        if v >= n {
            return Err(TspError::InvalidTour(format!(
                "index {v} at position {pos} is out of range [0, {n})"
            )));
        }
        if seen[v] {
            return Err(TspError::InvalidTour(format!(
                "index {v} repeated at position {pos}"
            )));
        }
        seen[v] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{DistanceMatrix, DistanceMetric};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::euclidean(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
    }

    // ---- random_tour ----

    #[test]
    fn test_random_tour_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for n in [0, 1, 2, 10, 57] {
            let tour = random_tour(n, &mut rng);
            assert!(is_valid_permutation(&tour, n), "n={n}: {tour:?}");
        }
    }

    #[test]
    fn test_random_tour_reproducible_with_seed() {
        let a = random_tour(20, &mut StdRng::seed_from_u64(9));
        let b = random_tour(20, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_tour_successive_calls_differ() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = random_tour(30, &mut rng);
        let b = random_tour(30, &mut rng);
        assert_ne!(a, b);
    }

    // ---- greedy_tour ----

    #[test]
    fn test_greedy_unit_square_visits_in_order() {
        let m = unit_square();
        let tour = greedy_tour(4, |a, b| m.distance(a, b));
        assert_eq!(tour, vec![0, 1, 2, 3]);
        assert!((m.tour_cost(&tour) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_greedy_deterministic() {
        let coords: Vec<(f64, f64)> = (0..25)
            .map(|i| ((i * 7 % 11) as f64, (i * 5 % 13) as f64))
            .collect();
        let m = DistanceMatrix::euclidean(&coords);
        let a = greedy_tour(25, |x, y| m.distance(x, y));
        let b = greedy_tour(25, |x, y| m.distance(x, y));
        assert_eq!(a, b);
        assert!(is_valid_permutation(&a, 25));
    }

    #[test]
    fn test_greedy_ties_go_to_lowest_index() {
        // All distances equal: scan order decides
        let tour = greedy_tour(5, |_, _| 1.0);
        assert_eq!(tour, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_greedy_survives_nan_distances() {
        let tour = greedy_tour(4, |_, _| f64::NAN);
        assert!(is_valid_permutation(&tour, 4));
    }

    #[test]
    fn test_greedy_small_sizes() {
        assert!(greedy_tour(0, |_, _| 0.0).is_empty());
        assert_eq!(greedy_tour(1, |_, _| 0.0), vec![0]);
    }

    // ---- validation ----

    #[test]
    fn test_validate_tour_errors() {
        assert!(validate_tour(&[0, 1, 2], 3).is_ok());
        assert!(validate_tour(&[0, 1], 3).is_err());
        assert!(validate_tour(&[0, 1, 1], 3).is_err());
        assert!(validate_tour(&[0, 1, 3], 3).is_err());
    }

    #[test]
    fn test_is_valid_permutation() {
        assert!(is_valid_permutation(&[], 0));
        assert!(is_valid_permutation(&[2, 0, 1], 3));
        assert!(!is_valid_permutation(&[2, 2, 1], 3));
        assert!(!is_valid_permutation(&[0, 1, 2, 3], 3));
    }

    proptest! {
        #[test]
        fn prop_random_tour_is_permutation(n in 0usize..200, seed in any::<u64>()) {
            let tour = random_tour(n, &mut StdRng::seed_from_u64(seed));
            prop_assert!(is_valid_permutation(&tour, n));
        }

        #[test]
        fn prop_greedy_tour_is_permutation(
            coords in prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..40)
        ) {
            let m = DistanceMatrix::euclidean(&coords);
            let tour = greedy_tour(coords.len(), |a, b| m.distance(a, b));
            prop_assert!(is_valid_permutation(&tour, coords.len()));
        }
    }
}
