use serde::{Deserialize, Serialize};

use crate::geometry::spherical;

/// A WGS84 coordinate in degrees.
///
/// Equality is exact coordinate equality; there is no epsilon comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeographicPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeographicPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Geodesic distance to another point, in meters.
    pub fn distance_to(&self, other: GeographicPoint) -> f64 {
        spherical::distance_between(*self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_exact() {
        let a = GeographicPoint::new(37.7749, -122.4194);
        let b = GeographicPoint::new(37.7749, -122.4194);
        let c = GeographicPoint::new(37.7749 + 1e-12, -122.4194);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeographicPoint::new(37.7749, -122.4194);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn test_deserialize_decoded_shape() {
        let json = r#"{"latitude": 37.7749, "longitude": -122.4194}"#;
        let p: GeographicPoint = serde_json::from_str(json).unwrap();
        assert_eq!(p.latitude, 37.7749);
        assert_eq!(p.longitude, -122.4194);
    }
}
