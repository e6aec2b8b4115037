use crate::domain::{Distance, Feature, GeographicPoint, feature};
use crate::geometry::line::{GeometricLine, LineSide};
use crate::geometry::spherical;

/// Bounding rectangle oriented along the tee-to-green axis (not aligned to
/// latitude/longitude). Corners are stored in the fixed order top-left,
/// bottom-left, bottom-right, top-right, where "top" is the tee end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRectangle {
    pub top_left: GeographicPoint,
    pub bottom_left: GeographicPoint,
    pub bottom_right: GeographicPoint,
    pub top_right: GeographicPoint,
}

impl BoundingRectangle {
    pub fn corners(&self) -> [GeographicPoint; 4] {
        [
            self.top_left,
            self.bottom_left,
            self.bottom_right,
            self.top_right,
        ]
    }

    /// Side length along the playing axis.
    pub fn height(&self) -> Distance {
        Distance::from_meters(self.bottom_left.distance_to(self.top_left))
    }

    /// Side length across the playing axis.
    pub fn width(&self) -> Distance {
        Distance::from_meters(self.bottom_left.distance_to(self.bottom_right))
    }

    pub fn longest_side(&self) -> Distance {
        self.height().max(self.width())
    }

    /// Mean of the four corners.
    pub fn centroid(&self) -> GeographicPoint {
        let corners = self.corners();
        let lat = corners.iter().map(|c| c.latitude).sum::<f64>() / 4.0;
        let lon = corners.iter().map(|c| c.longitude).sum::<f64>() / 4.0;
        GeographicPoint::new(lat, lon)
    }
}

/// Every quantity derived from a hole's feature set.
///
/// All fields are `Option`: a hole without a usable green or tee reference
/// has no heading, rectangle, centroid, or distances, and that absence
/// propagates here instead of being defaulted (partially specified holes are
/// an expected state, not an error).
#[derive(Debug, Clone, Default)]
pub struct HoleGeometry {
    /// Centroid of all green-feature points.
    pub green_center: Option<GeographicPoint>,
    /// Farthest tee-box point from the green center.
    pub tee_reference: Option<GeographicPoint>,
    /// Compass bearing from the tee reference to the green center.
    pub heading: Option<f64>,
    pub bounding_rectangle: Option<BoundingRectangle>,
    /// Centroid of the bounding rectangle's corners.
    pub centroid: Option<GeographicPoint>,
    /// Playing distance from tee to green, via the fairway center when one
    /// exists.
    pub hole_distance: Option<Distance>,
    /// Depth of the green along the line of play.
    pub green_distance: Option<Distance>,
}

impl HoleGeometry {
    /// Derive all geometric quantities from a hole's features.
    pub fn compute(features: &[Feature]) -> Self {
        let green_points: Vec<GeographicPoint> = points_of(features, Feature::is_green);
        let green_center = feature::centroid(&green_points);

        let tee_points: Vec<GeographicPoint> = points_of(features, Feature::is_tee_box);
        let tee_reference = green_center.and_then(|green| feature::farthest(&tee_points, green));

        let heading = match (tee_reference, green_center) {
            (Some(tee), Some(green)) => Some(spherical::heading_between(tee, green)),
            _ => None,
        };

        let bounding_rectangle = match (tee_reference, green_center) {
            (Some(tee), Some(green)) => bounding_rectangle(features, tee, green),
            _ => None,
        };
        let centroid = bounding_rectangle.map(|rect| rect.centroid());

        let fairway_points: Vec<GeographicPoint> = points_of(features, Feature::is_fairway_center);
        let fairway_far = tee_reference.and_then(|tee| feature::farthest(&fairway_points, tee));

        // Green extremes are measured from the fairway center when one
        // exists, otherwise from the tee reference.
        let green_reference = fairway_far.or(tee_reference);
        let green_far = green_reference.and_then(|r| feature::farthest(&green_points, r));
        let green_near = green_reference.and_then(|r| feature::nearest(&green_points, r));

        let hole_distance = match (tee_reference, green_near, green_far) {
            (Some(tee), Some(_), Some(far)) => Some(match fairway_far {
                Some(center) => Distance::from_meters(tee.distance_to(center))
                    + Distance::from_meters(center.distance_to(far)),
                None => Distance::from_meters(tee.distance_to(far)),
            }),
            _ => None,
        };

        let green_distance = match (green_reference, green_near, green_far) {
            (Some(reference), Some(near), Some(far)) => Some(Distance::from_meters(
                reference.distance_to(far) - reference.distance_to(near),
            )),
            _ => None,
        };

        Self {
            green_center,
            tee_reference,
            heading,
            bounding_rectangle,
            centroid,
            hole_distance,
            green_distance,
        }
    }

    pub fn height(&self) -> Option<Distance> {
        self.bounding_rectangle.map(|rect| rect.height())
    }

    pub fn width(&self) -> Option<Distance> {
        self.bounding_rectangle.map(|rect| rect.width())
    }

    pub fn longest_side(&self) -> Option<Distance> {
        self.bounding_rectangle.map(|rect| rect.longest_side())
    }
}

fn points_of(features: &[Feature], predicate: impl Fn(&Feature) -> bool) -> Vec<GeographicPoint> {
    features
        .iter()
        .filter(|f| predicate(f))
        .flat_map(|f| f.points.iter().copied())
        .collect()
}

/// Rectangle oriented along the tee-to-green axis enclosing every
/// non-water-hazard feature point.
///
/// The axis line and its perpendicular through the tee/green midpoint split
/// the plane in four; the extreme point on each side (largest perpendicular
/// distance, first found wins ties) fixes one rectangle side. `None` when
/// any side has no points at all.
fn bounding_rectangle(
    features: &[Feature],
    tee: GeographicPoint,
    green: GeographicPoint,
) -> Option<BoundingRectangle> {
    let points = points_of(features, |f| !f.is_water_hazard());

    let axis = GeometricLine::through(tee, green);
    let (rightmost, leftmost) = extremes_against(&points, &axis);

    let mid = spherical::midpoint(tee, green);
    let perpendicular = axis.perpendicular_through(mid);
    let (topmost, bottommost) = extremes_against(&points, &perpendicular);

    let (rightmost, leftmost) = (rightmost?, leftmost?);
    let (topmost, bottommost) = (topmost?, bottommost?);

    let left_line = axis.parallel_through(leftmost);
    let right_line = axis.parallel_through(rightmost);
    let top_line = perpendicular.parallel_through(topmost);
    let bottom_line = perpendicular.parallel_through(bottommost);

    Some(BoundingRectangle {
        top_left: top_line.intersection(&left_line),
        bottom_left: bottom_line.intersection(&left_line),
        bottom_right: bottom_line.intersection(&right_line),
        top_right: top_line.intersection(&right_line),
    })
}

/// Per half-plane, the point with the largest perpendicular distance to the
/// line. Points exactly on the line are skipped. Returns `(right, left)`.
fn extremes_against(
    points: &[GeographicPoint],
    line: &GeometricLine,
) -> (Option<GeographicPoint>, Option<GeographicPoint>) {
    let mut right: Option<(GeographicPoint, f64)> = None;
    let mut left: Option<(GeographicPoint, f64)> = None;

    for &point in points {
        let slot = match line.side(point) {
            LineSide::Right => &mut right,
            LineSide::Left => &mut left,
            LineSide::On => continue,
        };
        let distance = line.distance_to(point);
        match slot {
            Some((_, best)) if distance <= *best => {}
            _ => *slot = Some((point, distance)),
        }
    }

    (right.map(|(p, _)| p), left.map(|(p, _)| p))
}
