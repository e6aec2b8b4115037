use std::ops::Add;

use serde::{Deserialize, Serialize};

pub const METERS_TO_YARDS: f64 = 1.09361;
pub const YARDS_TO_METERS: f64 = 0.9144;
pub const MILES_TO_KM: f64 = 1.609;

/// Which family of display units the user has chosen. This is external
/// configuration (see [`crate::config::DisplayConfig`]), never hardcoded at
/// a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
    /// Yards for playing distances, meters for short distances.
    JapaneseHybrid,
}

/// How large a quantity is being displayed: `Long` maps to the system's big
/// unit (mile/kilometer), `Short` to its small unit (foot/meter), `Medium`
/// to the default working unit (yard/meter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceScale {
    Long,
    Medium,
    Short,
}

/// A distance stored canonically in meters. All display units are derived
/// conversions; ordering and addition are meters-based.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance {
    meters: f64,
}

impl Distance {
    pub const ZERO: Distance = Distance { meters: 0.0 };

    pub fn from_meters(meters: f64) -> Self {
        Self { meters }
    }

    pub fn from_yards(yards: f64) -> Self {
        Self {
            meters: yards * YARDS_TO_METERS,
        }
    }

    pub fn meters(&self) -> f64 {
        self.meters
    }

    pub fn yards(&self) -> f64 {
        self.meters * METERS_TO_YARDS
    }

    /// The larger of two distances, by meters.
    pub fn max(self, other: Distance) -> Distance {
        if other.meters > self.meters { other } else { self }
    }

    /// The smaller of two distances, by meters.
    pub fn min(self, other: Distance) -> Distance {
        if other.meters < self.meters { other } else { self }
    }

    /// Numeric value in the unit selected by `(system, scale)`.
    ///
    /// | system          | long                | medium | short |
    /// |-----------------|---------------------|--------|-------|
    /// | imperial        | miles               | yards  | feet  |
    /// | metric          | kilometers          | meters | meters|
    /// | japanese-hybrid | yards               | yards  | meters|
    pub fn value_in(&self, system: UnitSystem, scale: DistanceScale) -> f64 {
        match system {
            UnitSystem::JapaneseHybrid => match scale {
                DistanceScale::Short => self.meters,
                DistanceScale::Long | DistanceScale::Medium => self.yards(),
            },
            UnitSystem::Metric => match scale {
                DistanceScale::Long => self.meters / 1000.0,
                DistanceScale::Medium | DistanceScale::Short => self.meters,
            },
            UnitSystem::Imperial => match scale {
                DistanceScale::Long => self.meters / 1000.0 / MILES_TO_KM,
                DistanceScale::Medium => self.yards(),
                DistanceScale::Short => self.yards() * 3.0,
            },
        }
    }

    /// Unit label matching [`Self::value_in`]. Pluralization is driven by
    /// the canonical meters value being different from one.
    pub fn unit_label(
        &self,
        system: UnitSystem,
        scale: DistanceScale,
        abbreviated: bool,
        capitalized: bool,
    ) -> String {
        let plural = self.meters != 1.0;
        let label = match system {
            UnitSystem::JapaneseHybrid => match scale {
                DistanceScale::Short => {
                    if abbreviated {
                        "m"
                    } else {
                        pluralized("meter", "meters", plural)
                    }
                }
                DistanceScale::Long | DistanceScale::Medium => {
                    if abbreviated {
                        pluralized("yd", "yds", plural)
                    } else {
                        pluralized("yard", "yards", plural)
                    }
                }
            },
            UnitSystem::Metric => match scale {
                DistanceScale::Long => "km",
                DistanceScale::Medium | DistanceScale::Short => {
                    if abbreviated {
                        "m"
                    } else {
                        pluralized("meter", "meters", plural)
                    }
                }
            },
            UnitSystem::Imperial => match scale {
                DistanceScale::Long => {
                    if abbreviated {
                        "mi"
                    } else {
                        pluralized("mile", "miles", plural)
                    }
                }
                DistanceScale::Medium => {
                    if abbreviated {
                        pluralized("yd", "yds", plural)
                    } else {
                        pluralized("yard", "yards", plural)
                    }
                }
                DistanceScale::Short => {
                    if abbreviated {
                        "ft"
                    } else {
                        pluralized("foot", "feet", plural)
                    }
                }
            },
        };

        if capitalized {
            capitalize(label)
        } else {
            label.to_string()
        }
    }

    /// Formatted numeric value; `signed` prefixes positive values with `+`.
    pub fn display_value(
        &self,
        system: UnitSystem,
        scale: DistanceScale,
        precision: usize,
        signed: bool,
    ) -> String {
        let value = self.value_in(system, scale);
        if signed && value > 0.0 {
            format!("+{value:.precision$}")
        } else {
            format!("{value:.precision$}")
        }
    }

    /// Formatted value followed by its unit label.
    pub fn display_string(
        &self,
        system: UnitSystem,
        scale: DistanceScale,
        abbreviated: bool,
        capitalized: bool,
        precision: usize,
    ) -> String {
        format!(
            "{} {}",
            self.display_value(system, scale, precision, false),
            self.unit_label(system, scale, abbreviated, capitalized)
        )
    }
}

impl Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance::from_meters(self.meters + other.meters)
    }
}

fn pluralized<'a>(singular: &'a str, plural: &'a str, is_plural: bool) -> &'a str {
    if is_plural { plural } else { singular }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
