//! Point types and the distance metric trait.

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Value of π used for degree conversion, truncated to six decimals.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592;

/// Converts degrees to radians using [`PI`].
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    PI * degrees / 180.0
}

/// A labeled point as produced by an input provider, in degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointRecord {
    /// Point identifier (e.g. a city name).
    pub label: String,
    /// Latitude in degrees, in [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, in [-180, 180].
    pub longitude: f64,
}

impl PointRecord {
    pub fn new(label: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            label: label.into(),
            latitude,
            longitude,
        }
    }
}

/// A loaded point with coordinates in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    label: String,
    latitude: f64,
    longitude: f64,
}

impl Point {
    pub(crate) fn from_degrees(label: String, latitude: f64, longitude: f64) -> Self {
        Self {
            label,
            latitude: to_radians(latitude),
            longitude: to_radians(longitude),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude in radians.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in radians.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance to `other` in kilometers.
    ///
    /// The cosine sum is clamped to [-1, 1] before `acos`, so coincident
    /// and antipodal points never produce NaN.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let cos_angle = self.latitude.sin() * other.latitude.sin()
            + self.latitude.cos() * other.latitude.cos() * (other.longitude - self.longitude).cos();
        EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
    }
}

/// Pairwise distances over `point_count()` indexed points.
///
/// The search engines only ever see this trait, so any symmetric,
/// non-negative metric can stand in for [`GeoModel`](super::GeoModel).
///
/// # Panics
///
/// Implementations may panic when an index is `>= point_count()`.
pub trait DistanceMetric {
    /// Number of points.
    fn point_count(&self) -> usize;

    /// Distance between points `a` and `b`.
    fn distance(&self, a: usize, b: usize) -> f64;

    /// Cost of the closed tour: consecutive pairs plus last back to first.
    ///
    /// Tours with fewer than two elements cost 0.
    fn tour_cost(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour
            .windows(2)
            .map(|w| self.distance(w[0], w[1]))
            .sum();
        open + self.distance(tour[tour.len() - 1], tour[0])
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn point_count(&self) -> usize {
        (**self).point_count()
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        (**self).distance(a, b)
    }

    fn tour_cost(&self, tour: &[usize]) -> f64 {
        (**self).tour_cost(tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_radians_uses_truncated_pi() {
        assert!((to_radians(180.0) - 3.141592).abs() < 1e-12);
        assert!((to_radians(90.0) - 1.570796).abs() < 1e-12);
    }

    #[test]
    fn test_point_stores_radians() {
        let p = Point::from_degrees("Paris".into(), 48.8566, 2.3522);
        assert_eq!(p.label(), "Paris");
        assert!((p.latitude() - to_radians(48.8566)).abs() < 1e-15);
        assert!((p.longitude() - to_radians(2.3522)).abs() < 1e-15);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::from_degrees("A".into(), 43.6, 1.44);
        let d = p.distance_to(&p);
        assert!(!d.is_nan());
        assert!(d.abs() < 1e-3, "expected ~0, got {d}");
    }

    #[test]
    fn test_distance_to_self_near_pole_not_nan() {
        // The cosine sum rounds to just above 1 here.
        let p = Point::from_degrees("P".into(), -89.919, 0.0);
        let d = p.distance_to(&p);
        assert!(d.is_finite());
        assert!(d.abs() < 1e-3, "expected ~0, got {d}");
    }

    #[test]
    fn test_antipodal_points_not_nan() {
        let a = Point::from_degrees("A".into(), 0.0, 0.0);
        let b = Point::from_degrees("B".into(), 0.0, 180.0);
        let d = a.distance_to(&b);
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * PI).abs() < 1.0);
    }

    struct Line;

    impl DistanceMetric for Line {
        fn point_count(&self) -> usize {
            4
        }
        fn distance(&self, a: usize, b: usize) -> f64 {
            (a as f64 - b as f64).abs()
        }
    }

    #[test]
    fn test_tour_cost_closes_cycle() {
        // 0→1→2→3 = 3, plus 3→0 = 3
        assert!((Line.tour_cost(&[0, 1, 2, 3]) - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_tour_cost_degenerate_tours() {
        assert_eq!(Line.tour_cost(&[]), 0.0);
        assert_eq!(Line.tour_cost(&[2]), 0.0);
    }

    #[test]
    fn test_tour_cost_via_reference() {
        let metric: &dyn DistanceMetric = &Line;
        assert!((metric.tour_cost(&[0, 2]) - 4.0).abs() < 1e-12);
    }
}
