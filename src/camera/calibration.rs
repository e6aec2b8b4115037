use crate::camera::CameraPose;
use crate::domain::GeographicPoint;

/// Render collaborator asked, per altitude sample, how many meters one
/// screen point covers when looking straight down from that altitude.
pub trait ScreenScaleProbe {
    /// `None` when the renderer cannot answer at this altitude.
    fn meters_per_point(&self, camera: &CameraPose) -> Option<f64>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationEntry {
    pub altitude: f64,
    pub meters_per_point: f64,
}

/// Altitude-to-screen-scale table sampled from the render collaborator,
/// ascending by altitude. Built once; concurrent framing calls only read it.
#[derive(Debug, Clone, Default)]
pub struct ScreenCalibration {
    entries: Vec<CalibrationEntry>,
}

impl ScreenCalibration {
    pub const MIN_ALTITUDE: f64 = 200.0;
    pub const MAX_ALTITUDE: f64 = 5000.0;
    pub const ALTITUDE_STEP: f64 = 50.0;

    /// Sample the probe at every altitude from 200 up to (excluding) 5000
    /// in steps of 50, looking straight down at `center`.
    ///
    /// Zero or non-finite scale reports are left out of the table so later
    /// lookups can never divide by zero.
    pub fn build(probe: &dyn ScreenScaleProbe, center: GeographicPoint) -> Self {
        let mut entries = Vec::new();
        let mut altitude = Self::MIN_ALTITUDE;
        while altitude < Self::MAX_ALTITUDE {
            let camera = CameraPose::looking_at(center, altitude, 0.0);
            if let Some(scale) = probe.meters_per_point(&camera)
                && scale.is_finite()
                && scale > 0.0
            {
                entries.push(CalibrationEntry {
                    altitude,
                    meters_per_point: scale,
                });
            }
            altitude += Self::ALTITUDE_STEP;
        }
        Self { entries }
    }

    /// Table from pre-sampled `(altitude, meters_per_point)` pairs; sorts
    /// by altitude and drops unusable scales.
    pub fn from_entries(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut entries: Vec<CalibrationEntry> = pairs
            .into_iter()
            .filter(|&(_, scale)| scale.is_finite() && scale > 0.0)
            .map(|(altitude, meters_per_point)| CalibrationEntry {
                altitude,
                meters_per_point,
            })
            .collect();
        entries.sort_by(|a, b| a.altitude.total_cmp(&b.altitude));
        Self { entries }
    }

    /// Smallest calibrated altitude strictly greater than `distance`.
    pub fn entry_above(&self, distance: f64) -> Option<CalibrationEntry> {
        self.entries.iter().find(|e| e.altitude > distance).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
