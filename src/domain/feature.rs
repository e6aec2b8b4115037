use geo::{Contains, LineString, Polygon};
use serde::Deserialize;

use crate::domain::GeographicPoint;

/// Classification of a course feature, derived from its numeric feature id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    Unknown,
    Green,
    GreenSandtrap,
    FairwaySandtrap,
    FairwayWaterHazard,
    GreenWaterHazard,
    TeeBox,
    Fairway,
    FairwayCenter,
    Trees,
    BoundingBox,
}

impl FeatureType {
    /// Fixed id lookup. Id 27 is a legacy tee-box id still present in older
    /// course data; any unmapped id classifies as `Unknown`.
    pub fn from_id(id: i64) -> Self {
        match id {
            1 => FeatureType::Green,
            2 => FeatureType::GreenSandtrap,
            3 => FeatureType::FairwaySandtrap,
            4 => FeatureType::FairwayWaterHazard,
            5 => FeatureType::GreenWaterHazard,
            6 | 27 => FeatureType::TeeBox,
            7 => FeatureType::Fairway,
            8 => FeatureType::FairwayCenter,
            9 => FeatureType::Trees,
            10 => FeatureType::BoundingBox,
            _ => FeatureType::Unknown,
        }
    }

    pub fn is_green(self) -> bool {
        self == FeatureType::Green
    }

    pub fn is_tee_box(self) -> bool {
        self == FeatureType::TeeBox
    }

    pub fn is_fairway(self) -> bool {
        self == FeatureType::Fairway
    }

    pub fn is_fairway_center(self) -> bool {
        self == FeatureType::FairwayCenter
    }

    pub fn is_sand_trap(self) -> bool {
        matches!(
            self,
            FeatureType::GreenSandtrap | FeatureType::FairwaySandtrap
        )
    }

    pub fn is_water_hazard(self) -> bool {
        matches!(
            self,
            FeatureType::GreenWaterHazard | FeatureType::FairwayWaterHazard
        )
    }

    pub fn is_trees(self) -> bool {
        self == FeatureType::Trees
    }

    pub fn is_bounding_box(self) -> bool {
        self == FeatureType::BoundingBox
    }
}

/// A typed point cloud on a hole: green, tee box, hazard, and so on.
///
/// The point sequence describes an implicitly closed polygon (last point
/// joins back to the first). A feature with no points is legal and every
/// query below handles it.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub id: i64,
    #[serde(default)]
    pub points: Vec<GeographicPoint>,
}

impl Feature {
    pub fn new(id: i64, points: Vec<GeographicPoint>) -> Self {
        Self { id, points }
    }

    pub fn feature_type(&self) -> FeatureType {
        FeatureType::from_id(self.id)
    }

    pub fn is_green(&self) -> bool {
        self.feature_type().is_green()
    }

    pub fn is_tee_box(&self) -> bool {
        self.feature_type().is_tee_box()
    }

    pub fn is_fairway(&self) -> bool {
        self.feature_type().is_fairway()
    }

    pub fn is_fairway_center(&self) -> bool {
        self.feature_type().is_fairway_center()
    }

    pub fn is_sand_trap(&self) -> bool {
        self.feature_type().is_sand_trap()
    }

    pub fn is_water_hazard(&self) -> bool {
        self.feature_type().is_water_hazard()
    }

    /// Arithmetic-mean center of the feature's points, `None` when empty.
    pub fn centroid(&self) -> Option<GeographicPoint> {
        centroid(&self.points)
    }

    /// Point of the feature nearest to `reference`, `None` when empty.
    pub fn nearest_to(&self, reference: GeographicPoint) -> Option<GeographicPoint> {
        nearest(&self.points, reference)
    }

    /// Point of the feature farthest from `reference`, `None` when empty.
    pub fn farthest_from(&self, reference: GeographicPoint) -> Option<GeographicPoint> {
        farthest(&self.points, reference)
    }

    /// Largest geodesic distance in meters from any feature point to
    /// `reference`, `None` when empty.
    pub fn max_distance_to(&self, reference: GeographicPoint) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.distance_to(reference))
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }

    /// Smallest geodesic distance in meters from any feature point to
    /// `reference`, `None` when empty.
    pub fn min_distance_to(&self, reference: GeographicPoint) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.distance_to(reference))
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.min(d))))
    }

    /// Whether the feature's closed polygon contains `point`, treating
    /// lat/lon as a flat plane like the rest of the engine.
    pub fn contains(&self, point: GeographicPoint) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let ring: LineString<f64> = self
            .points
            .iter()
            .map(|p| geo::coord! { x: p.longitude, y: p.latitude })
            .collect();
        let polygon = Polygon::new(ring, vec![]);
        polygon.contains(&geo::point! { x: point.longitude, y: point.latitude })
    }
}

/// Arithmetic-mean center of a point set, `None` when empty.
pub fn centroid(points: &[GeographicPoint]) -> Option<GeographicPoint> {
    if points.is_empty() {
        return None;
    }
    let mut lat_sum = 0.0;
    let mut lon_sum = 0.0;
    for p in points {
        lat_sum += p.latitude;
        lon_sum += p.longitude;
    }
    let count = points.len() as f64;
    Some(GeographicPoint::new(lat_sum / count, lon_sum / count))
}

/// Point nearest to `reference`; ties keep the first-encountered point.
pub fn nearest(points: &[GeographicPoint], reference: GeographicPoint) -> Option<GeographicPoint> {
    let mut best: Option<(GeographicPoint, f64)> = None;
    for &p in points {
        let d = p.distance_to(reference);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((p, d)),
        }
    }
    best.map(|(p, _)| p)
}

/// Point farthest from `reference`; ties keep the first-encountered point.
pub fn farthest(points: &[GeographicPoint], reference: GeographicPoint) -> Option<GeographicPoint> {
    let mut best: Option<(GeographicPoint, f64)> = None;
    for &p in points {
        let d = p.distance_to(reference);
        match best {
            Some((_, best_d)) if d <= best_d => {}
            _ => best = Some((p, d)),
        }
    }
    best.map(|(p, _)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeographicPoint {
        GeographicPoint::new(lat, lon)
    }

    #[test]
    fn test_feature_type_from_id() {
        assert_eq!(FeatureType::from_id(1), FeatureType::Green);
        assert_eq!(FeatureType::from_id(6), FeatureType::TeeBox);
        assert_eq!(FeatureType::from_id(27), FeatureType::TeeBox);
        assert_eq!(FeatureType::from_id(8), FeatureType::FairwayCenter);
        assert_eq!(FeatureType::from_id(0), FeatureType::Unknown);
        assert_eq!(FeatureType::from_id(99), FeatureType::Unknown);
    }

    #[test]
    fn test_classification_predicates() {
        assert!(FeatureType::Green.is_green());
        assert!(FeatureType::GreenSandtrap.is_sand_trap());
        assert!(FeatureType::FairwaySandtrap.is_sand_trap());
        assert!(FeatureType::GreenWaterHazard.is_water_hazard());
        assert!(FeatureType::FairwayWaterHazard.is_water_hazard());
        assert!(!FeatureType::Fairway.is_fairway_center());
        assert!(FeatureType::FairwayCenter.is_fairway_center());
    }

    #[test]
    fn test_empty_feature_queries_return_none() {
        let feature = Feature::new(1, vec![]);
        let reference = point(0.0, 0.0);
        assert!(feature.centroid().is_none());
        assert!(feature.nearest_to(reference).is_none());
        assert!(feature.farthest_from(reference).is_none());
        assert!(feature.max_distance_to(reference).is_none());
        assert!(!feature.contains(reference));
    }

    #[test]
    fn test_centroid_is_mean() {
        let c = centroid(&[point(0.0, 0.0), point(1.0, 0.0), point(0.5, 0.3)]).unwrap();
        assert!((c.latitude - 0.5).abs() < 1e-12);
        assert!((c.longitude - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_and_farthest() {
        let points = [point(0.0, 0.0), point(0.0, 0.001), point(0.0, 0.005)];
        let reference = point(0.0, 0.0);
        assert_eq!(nearest(&points, reference), Some(points[0]));
        assert_eq!(farthest(&points, reference), Some(points[2]));
    }

    #[test]
    fn test_ties_keep_first_encountered() {
        // Two points equidistant from the reference
        let points = [point(0.0, 0.001), point(0.0, -0.001)];
        let reference = point(0.0, 0.0);
        assert_eq!(nearest(&points, reference), Some(points[0]));
        assert_eq!(farthest(&points, reference), Some(points[0]));
    }

    #[test]
    fn test_contains_closed_polygon() {
        // Open square: polygon closes implicitly
        let square = Feature::new(
            1,
            vec![
                point(0.0, 0.0),
                point(0.0, 1.0),
                point(1.0, 1.0),
                point(1.0, 0.0),
            ],
        );
        assert!(square.contains(point(0.5, 0.5)));
        assert!(!square.contains(point(1.5, 0.5)));
    }

    #[test]
    fn test_deserialize_decoded_shape() {
        let json = r#"{"id": 6, "points": [{"latitude": 0.0, "longitude": 0.0}]}"#;
        let feature: Feature = serde_json::from_str(json).unwrap();
        assert!(feature.is_tee_box());
        assert_eq!(feature.points.len(), 1);
    }
}
