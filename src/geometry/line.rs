use crate::domain::GeographicPoint;

/// Perturbation applied to a shared coordinate when building a line through
/// two points that coincide in latitude or longitude, so the slope division
/// never hits zero.
pub const COINCIDENT_EPSILON: f64 = 1e-13;

/// A line in the equation form `a*x + b*y + c = 0`, over longitude as x and
/// latitude as y. Every constructor in this module fixes `b = -1`, so the
/// line can be read as `y = a*x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// Which half-plane a point falls in relative to a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSide {
    Right,
    Left,
    On,
}

impl GeometricLine {
    /// Line passing through two points.
    ///
    /// When the points share a latitude or longitude exactly, the first
    /// point's coordinate is perturbed by [`COINCIDENT_EPSILON`] before the
    /// slope is computed.
    pub fn through(p1: GeographicPoint, p2: GeographicPoint) -> Self {
        let mut x1 = p1.longitude;
        let mut y1 = p1.latitude;
        let x2 = p2.longitude;
        let y2 = p2.latitude;

        if x1 == x2 {
            x1 -= COINCIDENT_EPSILON;
        }
        if y1 == y2 {
            y1 -= COINCIDENT_EPSILON;
        }

        let slope = (y2 - y1) / (x2 - x1);
        Self {
            a: slope,
            b: -1.0,
            c: y1 - slope * x1,
        }
    }

    /// Line parallel to `self` passing through `point`.
    pub fn parallel_through(&self, point: GeographicPoint) -> Self {
        Self {
            a: self.a,
            b: -1.0,
            c: point.latitude - self.a * point.longitude,
        }
    }

    /// Line perpendicular to `self` passing through `point`.
    pub fn perpendicular_through(&self, point: GeographicPoint) -> Self {
        let a = -1.0 / self.a;
        Self {
            a,
            b: -1.0,
            c: point.latitude - a * point.longitude,
        }
    }

    /// Classify which half-plane `point` falls in: `Right` when its latitude
    /// is below `a*x + c`, `Left` when above, `On` when exactly equal.
    pub fn side(&self, point: GeographicPoint) -> LineSide {
        let y = point.latitude;
        let ax_plus_c = self.a * point.longitude + self.c;
        if y < ax_plus_c {
            LineSide::Right
        } else if y > ax_plus_c {
            LineSide::Left
        } else {
            LineSide::On
        }
    }

    /// Perpendicular distance from `point` to the line, in coordinate units.
    pub fn distance_to(&self, point: GeographicPoint) -> f64 {
        let numerator = (self.a * point.longitude + self.b * point.latitude + self.c).abs();
        let denominator = (self.a * self.a + self.b * self.b).sqrt();
        numerator / denominator
    }

    /// Intersection point of two non-parallel lines.
    ///
    /// Callers must not pass parallel lines; the bounding-rectangle engine
    /// only ever intersects an axis line with its perpendicular companion.
    pub fn intersection(&self, other: &GeometricLine) -> GeographicPoint {
        debug_assert!(self.a != other.a, "intersection of parallel lines");
        let x = (self.c - other.c) / (other.a - self.a);
        let y = self.a * x + self.c;
        GeographicPoint {
            latitude: y,
            longitude: x,
        }
    }
}
