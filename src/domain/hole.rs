use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::{Distance, Feature, GeographicPoint, feature};
use crate::geometry::HoleGeometry;

/// A tee position on a hole, as supplied by course data.
#[derive(Debug, Clone, Deserialize)]
pub struct HoleTee {
    pub tee_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    /// Listed playing distance for this tee; zero when course data omits it.
    #[serde(default)]
    pub distance: Distance,
}

/// One hole of a course: pars, handicaps, and the decoded feature set.
///
/// Features and tees are fixed at construction, so the derived
/// [`HoleGeometry`] is computed at most once per instance and can never go
/// stale.
#[derive(Debug, Clone, Deserialize)]
pub struct Hole {
    pub hole_id: i64,
    pub course_id: i64,
    pub course_version: i64,
    pub par_men: i32,
    pub par_women: i32,
    pub handicap_men: f32,
    pub handicap_women: f32,
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    tees: Vec<HoleTee>,
    #[serde(skip)]
    geometry: OnceLock<HoleGeometry>,
}

impl Hole {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hole_id: i64,
        course_id: i64,
        course_version: i64,
        par_men: i32,
        par_women: i32,
        handicap_men: f32,
        handicap_women: f32,
        features: Vec<Feature>,
        tees: Vec<HoleTee>,
    ) -> Self {
        Self {
            hole_id,
            course_id,
            course_version,
            par_men,
            par_women,
            handicap_men,
            handicap_women,
            features,
            tees,
            geometry: OnceLock::new(),
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn tees(&self) -> &[HoleTee] {
        &self.tees
    }

    /// Derived geometry, computed on first access and memoized.
    pub fn geometry(&self) -> &HoleGeometry {
        self.geometry
            .get_or_init(|| HoleGeometry::compute(&self.features))
    }

    pub fn green_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_green())
    }

    pub fn tee_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_tee_box())
    }

    pub fn fairway_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_fairway())
    }

    pub fn fairway_center_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_fairway_center())
    }

    pub fn sand_trap_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.is_sand_trap())
    }

    /// Every feature point except those belonging to water hazards.
    pub fn points_excluding_water(&self) -> Vec<GeographicPoint> {
        self.features
            .iter()
            .filter(|f| !f.is_water_hazard())
            .flat_map(|f| f.points.iter().copied())
            .collect()
    }

    /// Centroid of each tee box that has at least one point.
    pub fn tee_centers(&self) -> Vec<GeographicPoint> {
        self.tee_features().filter_map(|f| f.centroid()).collect()
    }

    /// Tee-box centroid farthest from the green center.
    pub fn farthest_tee_center(&self) -> Option<GeographicPoint> {
        let green = self.geometry().green_center?;
        feature::farthest(&self.tee_centers(), green)
    }

    /// Straight-line distance from the farthest tee centroid to the green
    /// center, zero when either is undefined.
    pub fn tee_to_green_distance(&self) -> Distance {
        match (self.farthest_tee_center(), self.geometry().green_center) {
            (Some(tee), Some(green)) => Distance::from_meters(tee.distance_to(green)),
            _ => Distance::ZERO,
        }
    }
}

/// A course: identity plus its holes, as supplied by course data.
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub course_id: i64,
    pub course_version: i64,
    pub name: String,
    /// Nominal course location (clubhouse), used as the calibration center.
    pub location: GeographicPoint,
    #[serde(default)]
    holes: Vec<Hole>,
}

impl Course {
    pub fn new(
        course_id: i64,
        course_version: i64,
        name: String,
        location: GeographicPoint,
        holes: Vec<Hole>,
    ) -> Self {
        Self {
            course_id,
            course_version,
            name,
            location,
            holes,
        }
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Holes sorted by hole id.
    pub fn ordered_holes(&self) -> Vec<&Hole> {
        let mut ordered: Vec<&Hole> = self.holes.iter().collect();
        ordered.sort_by_key(|h| h.hole_id);
        ordered
    }

    pub fn first_hole_id(&self) -> Option<i64> {
        self.holes.iter().map(|h| h.hole_id).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeographicPoint {
        GeographicPoint::new(lat, lon)
    }

    fn hole_with(features: Vec<Feature>) -> Hole {
        Hole::new(1, 10, 1, 4, 4, 9.0, 11.0, features, vec![])
    }

    #[test]
    fn test_geometry_is_memoized() {
        let hole = hole_with(vec![
            Feature::new(6, vec![point(0.0, 0.0)]),
            Feature::new(1, vec![point(0.003, 0.0)]),
        ]);
        let first = hole.geometry() as *const HoleGeometry;
        let second = hole.geometry() as *const HoleGeometry;
        assert_eq!(first, second);
    }

    #[test]
    fn test_feature_filters() {
        let hole = hole_with(vec![
            Feature::new(1, vec![]),
            Feature::new(2, vec![]),
            Feature::new(3, vec![]),
            Feature::new(6, vec![]),
            Feature::new(7, vec![]),
            Feature::new(8, vec![]),
        ]);
        assert_eq!(hole.green_features().count(), 1);
        assert_eq!(hole.tee_features().count(), 1);
        assert_eq!(hole.fairway_features().count(), 1);
        assert_eq!(hole.fairway_center_features().count(), 1);
        assert_eq!(hole.sand_trap_features().count(), 2);
    }

    #[test]
    fn test_points_excluding_water() {
        let hole = hole_with(vec![
            Feature::new(1, vec![point(0.0, 0.0)]),
            Feature::new(4, vec![point(1.0, 1.0)]),
            Feature::new(5, vec![point(2.0, 2.0)]),
        ]);
        assert_eq!(hole.points_excluding_water(), vec![point(0.0, 0.0)]);
    }

    #[test]
    fn test_farthest_tee_center() {
        let hole = hole_with(vec![
            Feature::new(1, vec![point(0.003, 0.0)]),
            Feature::new(6, vec![point(0.0, -0.0001), point(0.0, 0.0001)]),
            Feature::new(6, vec![point(-0.001, 0.0)]),
        ]);
        assert_eq!(hole.farthest_tee_center(), Some(point(-0.001, 0.0)));
    }

    #[test]
    fn test_tee_to_green_distance_zero_when_undefined() {
        let hole = hole_with(vec![Feature::new(6, vec![point(0.0, 0.0)])]);
        assert_eq!(hole.tee_to_green_distance(), Distance::ZERO);
    }

    #[test]
    fn test_ordered_holes() {
        let course = Course::new(
            10,
            1,
            "Pebble Creek".to_string(),
            point(0.0, 0.0),
            vec![
                Hole::new(3, 10, 1, 4, 4, 1.0, 1.0, vec![], vec![]),
                Hole::new(1, 10, 1, 4, 4, 1.0, 1.0, vec![], vec![]),
                Hole::new(2, 10, 1, 4, 4, 1.0, 1.0, vec![], vec![]),
            ],
        );
        let ids: Vec<i64> = course.ordered_holes().iter().map(|h| h.hole_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(course.first_hole_id(), Some(1));
    }

    #[test]
    fn test_deserialize_decoded_shape() {
        let json = r#"{
            "hole_id": 1,
            "course_id": 42,
            "course_version": 3,
            "par_men": 4,
            "par_women": 5,
            "handicap_men": 9.0,
            "handicap_women": 11.0,
            "features": [
                {"id": 6, "points": [{"latitude": 0.0, "longitude": 0.0}]},
                {"id": 1, "points": [{"latitude": 0.003, "longitude": 0.0}]}
            ],
            "tees": [{"tee_id": 2, "name": "Blue", "distance": 350.0}]
        }"#;
        let hole: Hole = serde_json::from_str(json).unwrap();
        assert_eq!(hole.tees().len(), 1);
        assert!((hole.tees()[0].distance.meters() - 350.0).abs() < 1e-12);
        assert!(hole.geometry().heading.is_some());
    }
}
