//! Geographic point model.

use tracing::debug;

use super::types::{DistanceMetric, Point, PointRecord};
use crate::error::{Result, TspError};
use crate::io::PointSource;

/// Immutable set of geographic points with great-circle distances.
///
/// # Examples
///
/// ```
/// use geo_tsp::geo::{DistanceMetric, GeoModel, PointRecord};
///
/// let model = GeoModel::from_records(vec![
///     PointRecord::new("Paris", 48.8566, 2.3522),
///     PointRecord::new("Lyon", 45.7640, 4.8357),
/// ])
/// .unwrap();
///
/// let d = model.distance(0, 1);
/// assert!(d > 380.0 && d < 400.0);
/// assert_eq!(model.distance(1, 1), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeoModel {
    points: Vec<Point>,
}

impl GeoModel {
    /// Builds the model from degree records, failing on the first
    /// non-finite or out-of-range coordinate.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = PointRecord>,
    {
        let mut points = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            validate_record(index, &record)?;
            points.push(Point::from_degrees(
                record.label,
                record.latitude,
                record.longitude,
            ));
        }
        debug!(points = points.len(), "geo model loaded");
        Ok(Self { points })
    }

    /// Reads every record from `source` and builds the model.
    pub fn from_source<S: PointSource + ?Sized>(source: &mut S) -> Result<Self> {
        Self::from_records(source.read_points()?)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Labels of the points along `tour`, in visiting order.
    pub fn labels<'a>(&'a self, tour: &'a [usize]) -> impl Iterator<Item = &'a str> + 'a {
        tour.iter().map(move |&i| self.points[i].label())
    }
}

impl DistanceMetric for GeoModel {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, a: usize, b: usize) -> f64 {
        if a == b {
            return 0.0;
        }
        self.points[a].distance_to(&self.points[b])
    }
}

fn validate_record(index: usize, record: &PointRecord) -> Result<()> {
    let invalid = |reason: String| TspError::InvalidCoordinate {
        index,
        label: record.label.clone(),
        reason,
    };

    if !record.latitude.is_finite() || !record.longitude.is_finite() {
        return Err(invalid(format!(
            "coordinates must be finite, got ({}, {})",
            record.latitude, record.longitude
        )));
    }
    if !(-90.0..=90.0).contains(&record.latitude) {
        return Err(invalid(format!(
            "latitude {} outside [-90, 90]",
            record.latitude
        )));
    }
    if !(-180.0..=180.0).contains(&record.longitude) {
        return Err(invalid(format!(
            "longitude {} outside [-180, 180]",
            record.longitude
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn france() -> GeoModel {
        GeoModel::from_records(vec![
            PointRecord::new("Paris", 48.8566, 2.3522),
            PointRecord::new("Lyon", 45.7640, 4.8357),
            PointRecord::new("Marseille", 43.2965, 5.3698),
            PointRecord::new("Toulouse", 43.6047, 1.4442),
            PointRecord::new("Bordeaux", 44.8378, -0.5792),
        ])
        .unwrap()
    }

    #[test]
    fn test_distance_symmetric() {
        let model = france();
        for a in 0..model.len() {
            for b in 0..model.len() {
                let ab = model.distance(a, b);
                let ba = model.distance(b, a);
                assert!((ab - ba).abs() < 1e-9, "d({a},{b})={ab} != d({b},{a})={ba}");
                assert!(ab >= 0.0);
            }
        }
    }

    #[test]
    fn test_distance_to_self_is_exactly_zero() {
        let model = france();
        for a in 0..model.len() {
            assert_eq!(model.distance(a, a), 0.0);
        }
    }

    #[test]
    fn test_coincident_points_not_nan() {
        let model = GeoModel::from_records(vec![
            PointRecord::new("A", 47.2184, -1.5536),
            PointRecord::new("B", 47.2184, -1.5536),
        ])
        .unwrap();
        let d = model.distance(0, 1);
        assert!(!d.is_nan());
        assert!(d < 1e-3);
    }

    #[test]
    fn test_paris_marseille_distance() {
        let model = france();
        // ~660 km as the crow flies
        let d = model.distance(0, 2);
        assert!(d > 640.0 && d < 680.0, "got {d}");
    }

    #[test]
    fn test_tour_cost_matches_edge_sum() {
        let model = france();
        let tour = [0, 1, 2, 3, 4];
        let expected: f64 = (0..5).map(|i| model.distance(tour[i], tour[(i + 1) % 5])).sum();
        assert!((model.tour_cost(&tour) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_singleton_tour_costs_zero() {
        let model = france();
        assert_eq!(model.tour_cost(&[3]), 0.0);
        assert_eq!(model.tour_cost(&[]), 0.0);
    }

    #[test]
    fn test_rejects_out_of_range_latitude() {
        let err = GeoModel::from_records(vec![
            PointRecord::new("ok", 10.0, 10.0),
            PointRecord::new("bad", 91.0, 0.0),
        ])
        .unwrap_err();
        match err {
            TspError::InvalidCoordinate { index, label, .. } => {
                assert_eq!(index, 1);
                assert_eq!(label, "bad");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_out_of_range_longitude() {
        let result = GeoModel::from_records(vec![PointRecord::new("bad", 0.0, -180.5)]);
        assert!(matches!(result, Err(TspError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_rejects_nan() {
        let result = GeoModel::from_records(vec![PointRecord::new("nan", f64::NAN, 0.0)]);
        assert!(matches!(result, Err(TspError::InvalidCoordinate { .. })));
    }

    #[test]
    fn test_empty_model() {
        let model = GeoModel::from_records(Vec::new()).unwrap();
        assert!(model.is_empty());
        assert_eq!(model.point_count(), 0);
    }

    #[test]
    fn test_labels_follow_tour() {
        let model = france();
        let labels: Vec<&str> = model.labels(&[2, 0]).collect();
        assert_eq!(labels, vec!["Marseille", "Paris"]);
    }
}
