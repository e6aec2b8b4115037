pub mod calibration;
pub mod framing;

pub use calibration::{CalibrationEntry, ScreenCalibration, ScreenScaleProbe};
pub use framing::{CameraFramer, Viewport};

use serde::Serialize;

use crate::domain::GeographicPoint;

/// Camera field of view in degrees, matching the external map renderer.
const FIELD_OF_VIEW_DEGREES: f64 = 30.0;

/// Lowest camera altitude the renderer supports.
pub const MIN_CAMERA_DISTANCE: f64 = 200.0;

/// A virtual camera pose handed to the external rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    /// Look-at coordinate.
    pub center: GeographicPoint,
    /// Camera distance from the look-at point, in meters.
    pub distance: f64,
    /// Compass heading in degrees.
    pub heading: f64,
    /// Pitch in degrees; 0 looks straight down.
    pub pitch: f64,
}

impl CameraPose {
    /// Top-down pose at the given center, distance, and heading.
    pub fn looking_at(center: GeographicPoint, distance: f64, heading: f64) -> Self {
        Self {
            center,
            distance,
            heading,
            pitch: 0.0,
        }
    }
}

/// Camera distance needed to frame `target_span` meters plus `padding`
/// meters of occluded screen, with a 20% margin, under the fixed field of
/// view. Never less than [`MIN_CAMERA_DISTANCE`].
pub fn camera_distance(target_span: f64, padding: f64) -> f64 {
    let margin = target_span * 0.2;
    let span_with_margin = target_span + padding + margin;
    let half_fov = (FIELD_OF_VIEW_DEGREES / 2.0).to_radians();
    MIN_CAMERA_DISTANCE.max((span_with_margin / 2.0) / half_fov.tan())
}
