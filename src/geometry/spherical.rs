use crate::domain::GeographicPoint;

/// Spherical Earth radius in meters, matching the value used by the
/// destination formula. A spherical approximation (not ellipsoidal) is
/// accurate to well under a meter at course scale.
pub const EARTH_RADIUS_M: f64 = 6_378_100.0;

/// Initial great-circle bearing from `from` to `to`, in degrees `[0, 360)`
/// measured clockwise from true north.
pub fn heading_between(from: GeographicPoint, to: GeographicPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    let mut degrees = y.atan2(x).to_degrees();
    if degrees < 0.0 {
        degrees += 360.0;
    }
    degrees
}

/// Destination point given an origin, a bearing in degrees, and a distance
/// in meters (standard direct geodesic formula on a sphere).
pub fn destination(origin: GeographicPoint, bearing_degrees: f64, distance_meters: f64) -> GeographicPoint {
    let bearing = bearing_degrees.to_radians();
    let lat = origin.latitude.to_radians();
    let lon = origin.longitude.to_radians();
    let angular = distance_meters / EARTH_RADIUS_M;

    let new_lat = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
    let new_lon = lon
        + (bearing.sin() * angular.sin() * lat.cos())
            .atan2(angular.cos() - lat.sin() * new_lat.sin());

    GeographicPoint {
        latitude: new_lat.to_degrees(),
        longitude: new_lon.to_degrees(),
    }
}

/// Geodesic point-to-point distance in meters (haversine on the same sphere
/// as [`destination`]).
pub fn distance_between(p1: GeographicPoint, p2: GeographicPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Arithmetic-mean midpoint of two points.
///
/// This is a flat approximation, not the true great-circle midpoint; the
/// error is negligible at course scale.
pub fn midpoint(p1: GeographicPoint, p2: GeographicPoint) -> GeographicPoint {
    GeographicPoint {
        latitude: (p1.latitude + p2.latitude) / 2.0,
        longitude: (p1.longitude + p2.longitude) / 2.0,
    }
}
