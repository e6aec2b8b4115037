use crate::camera::{CameraPose, ScreenCalibration, camera_distance};
use crate::domain::{Distance, GeographicPoint, Hole};
use crate::geometry::spherical;

/// Current visible rectangle of the rendering surface, in screen points,
/// plus the top/bottom amounts occluded by UI overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub top_inset: f64,
    pub bottom_inset: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, top_inset: f64, bottom_inset: f64) -> Self {
        Self {
            width,
            height,
            top_inset,
            bottom_inset,
        }
    }

    pub fn visible_height(&self) -> f64 {
        self.height - (self.top_inset + self.bottom_inset)
    }

    /// Vertical offset in screen points from the full-viewport center to
    /// the center of the visible (inset-excluded) region.
    pub fn vertical_center_offset(&self) -> f64 {
        (self.top_inset + self.visible_height() / 2.0) - self.height / 2.0
    }
}

/// Frames holes in a viewport, correcting the look-at point for UI insets
/// using an altitude calibration table.
#[derive(Debug, Clone)]
pub struct CameraFramer {
    calibration: ScreenCalibration,
}

impl CameraFramer {
    pub fn new(calibration: ScreenCalibration) -> Self {
        Self { calibration }
    }

    pub fn calibration(&self) -> &ScreenCalibration {
        &self.calibration
    }

    /// Frame a hole from its derived geometry; `None` when the hole's
    /// centroid, heading, or distance is undefined.
    pub fn frame(&self, hole: &Hole, viewport: &Viewport) -> Option<CameraPose> {
        let geometry = hole.geometry();
        let centroid = geometry.centroid?;
        let heading = geometry.heading?;
        let distance = geometry.hole_distance?;
        Some(self.frame_hole(centroid, heading, distance, viewport))
    }

    /// Compute a camera pose that frames `hole_distance` meters of play
    /// centered on `centroid`, shifted so the hole is centered in the
    /// visible part of the viewport rather than behind the overlays.
    ///
    /// When no calibrated altitude exceeds the required camera distance the
    /// pose degrades to the uncorrected centroid rather than failing.
    pub fn frame_hole(
        &self,
        centroid: GeographicPoint,
        heading: f64,
        hole_distance: Distance,
        viewport: &Viewport,
    ) -> CameraPose {
        let naive_distance = camera_distance(hole_distance.meters(), 0.0);
        let Some(entry) = self.calibration.entry_above(naive_distance) else {
            return CameraPose::looking_at(centroid, naive_distance, heading);
        };

        let top_meters = viewport.top_inset * entry.meters_per_point;
        let bottom_meters = viewport.bottom_inset * entry.meters_per_point;
        let adjusted_distance = camera_distance(hole_distance.meters(), top_meters + bottom_meters);

        let Some(adjusted_entry) = self.calibration.entry_above(adjusted_distance) else {
            return CameraPose::looking_at(centroid, adjusted_distance, heading);
        };

        let offset_points = viewport.vertical_center_offset();
        let center = spherical::destination(
            centroid,
            heading,
            offset_points * adjusted_entry.meters_per_point,
        );

        CameraPose::looking_at(center, adjusted_distance, heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeographicPoint {
        GeographicPoint::new(lat, lon)
    }

    fn linear_calibration() -> ScreenCalibration {
        // meters-per-point grows with altitude, like a real top-down camera
        let mut altitude = 200.0;
        let mut pairs = Vec::new();
        while altitude < 5000.0 {
            pairs.push((altitude, altitude / 1000.0));
            altitude += 50.0;
        }
        ScreenCalibration::from_entries(pairs)
    }

    #[test]
    fn test_viewport_center_offset() {
        let viewport = Viewport::new(400.0, 800.0, 100.0, 0.0);
        assert_eq!(viewport.visible_height(), 700.0);
        // Visible center sits 50 points above the frame center
        assert_eq!(viewport.vertical_center_offset(), 50.0);

        let symmetric = Viewport::new(400.0, 800.0, 50.0, 50.0);
        assert_eq!(symmetric.vertical_center_offset(), 0.0);
    }

    #[test]
    fn test_empty_calibration_degrades_to_uncorrected_pose() {
        let framer = CameraFramer::new(ScreenCalibration::default());
        let viewport = Viewport::new(400.0, 800.0, 100.0, 0.0);
        let centroid = point(0.0005, 0.0);
        let pose = framer.frame_hole(centroid, 0.0, Distance::from_meters(400.0), &viewport);
        assert_eq!(pose.center, centroid);
        assert_eq!(pose.distance, camera_distance(400.0, 0.0));
        assert_eq!(pose.pitch, 0.0);
    }

    #[test]
    fn test_insets_increase_camera_distance() {
        let framer = CameraFramer::new(linear_calibration());
        let centroid = point(0.0005, 0.0);
        let occluded = Viewport::new(400.0, 800.0, 100.0, 40.0);
        let clear = Viewport::new(400.0, 800.0, 0.0, 0.0);
        let pose_occluded =
            framer.frame_hole(centroid, 0.0, Distance::from_meters(400.0), &occluded);
        let pose_clear = framer.frame_hole(centroid, 0.0, Distance::from_meters(400.0), &clear);
        assert!(pose_occluded.distance > pose_clear.distance);
    }

    #[test]
    fn test_offset_shifts_center_along_heading() {
        let framer = CameraFramer::new(linear_calibration());
        let centroid = point(0.0005, 0.0);
        let viewport = Viewport::new(400.0, 800.0, 100.0, 0.0);
        // Heading due north: a positive visible-center offset moves the
        // look-at point north of the raw centroid.
        let pose = framer.frame_hole(centroid, 0.0, Distance::from_meters(400.0), &viewport);
        assert!(pose.center.latitude > centroid.latitude);
        assert!((pose.center.longitude - centroid.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric_insets_keep_centroid() {
        let framer = CameraFramer::new(linear_calibration());
        let centroid = point(0.0005, 0.0);
        let viewport = Viewport::new(400.0, 800.0, 60.0, 60.0);
        let pose = framer.frame_hole(centroid, 0.0, Distance::from_meters(400.0), &viewport);
        // Offset is zero; destination along heading by zero meters
        assert!((pose.center.latitude - centroid.latitude).abs() < 1e-12);
    }

    #[test]
    fn test_unresolvable_adjusted_distance_degrades() {
        // Only one low calibration entry: the naive distance resolves but
        // the inset-adjusted one does not.
        let calibration = ScreenCalibration::from_entries([(1200.0, 500.0)]);
        let framer = CameraFramer::new(calibration);
        let centroid = point(0.0005, 0.0);
        let viewport = Viewport::new(400.0, 800.0, 100.0, 0.0);
        let pose = framer.frame_hole(centroid, 0.0, Distance::from_meters(400.0), &viewport);
        assert_eq!(pose.center, centroid);
        let top_meters = 100.0 * 500.0;
        assert_eq!(pose.distance, camera_distance(400.0, top_meters));
    }

    #[test]
    fn test_frame_returns_none_for_undefined_geometry() {
        use crate::domain::Feature;
        let hole = crate::domain::Hole::new(
            1,
            1,
            1,
            4,
            4,
            1.0,
            1.0,
            vec![Feature::new(6, vec![point(0.0, 0.0)])],
            vec![],
        );
        let framer = CameraFramer::new(linear_calibration());
        let viewport = Viewport::new(400.0, 800.0, 0.0, 0.0);
        assert!(framer.frame(&hole, &viewport).is_none());
    }
}
