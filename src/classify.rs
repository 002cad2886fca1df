//! Threshold classification of raw sensor values
//!
//! [`classify`] maps one raw value of one channel to a [`Status`]: a discrete
//! [`Tier`], a short label and the banner text shown on the channel card.
//! Classification is pure; the same inputs always give the same status.
//!
//! Two band sets exist:
//!
//! | Channel | [`ThresholdProfile::Primary`]                          | [`ThresholdProfile::Legacy`]                     |
//! |---------|--------------------------------------------------------|--------------------------------------------------|
//! | soil    | `< 400` critical, `< 600` warning, else ok             | `<= 400` critical, `<= 700` warning, else ok      |
//! | smoke   | `> 400` critical, else ok                              | `> 200` critical, else ok                         |
//! | ldr     | `<= 300` critical, `<= 700` warning, else info         | `< 300` ok, `< 700` warning, else critical        |
//! | flame   | `== 0` critical, else ok                               | same                                              |
//!
//! Boundaries are exact: primary soil `400` is a warning, not critical.

use crate::types::{Channel, SensorReading};
use serde::{Deserialize, Serialize};

/// Discrete status classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Ok,
    Warning,
    Critical,
    Info,
}

impl Tier {
    /// Banner colour as RGBA, matching the success/warning/danger/info palette
    pub fn color(&self) -> [u8; 4] {
        match self {
            Tier::Ok => [25, 135, 84, 255],
            Tier::Warning => [255, 193, 7, 255],
            Tier::Critical => [220, 53, 69, 255],
            Tier::Info => [13, 202, 240, 255],
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Ok => write!(f, "ok"),
            Tier::Warning => write!(f, "warning"),
            Tier::Critical => write!(f, "critical"),
            Tier::Info => write!(f, "info"),
        }
    }
}

/// Which band set to classify with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdProfile {
    #[default]
    Primary,
    Legacy,
}

/// Result of classifying one value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub tier: Tier,
    pub label: &'static str,
    pub headline: &'static str,
}

impl Status {
    const fn new(tier: Tier, label: &'static str, headline: &'static str) -> Self {
        Self {
            tier,
            label,
            headline,
        }
    }
}

/// Classify a raw channel value with the given band set
pub fn classify(channel: Channel, value: f64, profile: ThresholdProfile) -> Status {
    match profile {
        ThresholdProfile::Primary => classify_primary(channel, value),
        ThresholdProfile::Legacy => classify_legacy(channel, value),
    }
}

fn classify_primary(channel: Channel, value: f64) -> Status {
    match channel {
        Channel::Soil => {
            if value < 400.0 {
                Status::new(
                    Tier::Critical,
                    "fluid leak risk",
                    "Status: CRITICAL Fluid Leak Risk",
                )
            } else if value < 600.0 {
                Status::new(
                    Tier::Warning,
                    "condensation risk",
                    "Status: Atmospheric Condensation Risk",
                )
            } else {
                Status::new(Tier::Ok, "nominal", "Life Support: Nominal Humidity")
            }
        }
        Channel::Smoke => {
            if value > 400.0 {
                Status::new(
                    Tier::Critical,
                    "contamination",
                    "Status: CRITICAL Air Contamination!",
                )
            } else {
                Status::new(Tier::Ok, "nominal", "Cabin Air: Nominal")
            }
        }
        Channel::Ldr => {
            if value <= 300.0 {
                Status::new(
                    Tier::Critical,
                    "extreme luminosity",
                    "Status: Extreme Luminosity Event",
                )
            } else if value <= 700.0 {
                Status::new(
                    Tier::Warning,
                    "unstable fluctuation",
                    "Status: Unstable Light Fluctuation",
                )
            } else {
                Status::new(Tier::Info, "low light", "Status: Low Light / Orbital Shadow")
            }
        }
        Channel::Flame => classify_flame(value),
    }
}

fn classify_legacy(channel: Channel, value: f64) -> Status {
    match channel {
        Channel::Soil => {
            if value > 700.0 {
                Status::new(Tier::Ok, "no signs of flood", "No signs of flood")
            } else if value > 400.0 {
                Status::new(Tier::Warning, "moisture detected", "Moisture detected")
            } else {
                Status::new(Tier::Critical, "water level rising", "Water level rising")
            }
        }
        Channel::Smoke => {
            if value > 200.0 {
                Status::new(
                    Tier::Critical,
                    "smoke or gas detected",
                    "Smoke or Gas Detected!",
                )
            } else {
                Status::new(Tier::Ok, "air is clean", "Air is Clean")
            }
        }
        Channel::Ldr => {
            if value < 300.0 {
                Status::new(Tier::Ok, "bright light, full power", "Bright Light, Full Power")
            } else if value < 700.0 {
                Status::new(
                    Tier::Warning,
                    "medium light, unstable power",
                    "Medium Light, Unstable Power",
                )
            } else {
                Status::new(Tier::Critical, "dark, no power", "It's Dark, No Power")
            }
        }
        Channel::Flame => classify_flame(value),
    }
}

// Active-low: zero means a flame is in view.
fn classify_flame(value: f64) -> Status {
    if value == 0.0 {
        Status::new(
            Tier::Critical,
            "combustion detected",
            "COMBUSTION DETECTED!",
        )
    } else {
        Status::new(Tier::Ok, "clear", "Thermal Scan: Clear")
    }
}

/// Statuses of every channel of a reading, in [`Channel::ALL`] order
pub fn classify_reading(reading: &SensorReading, profile: ThresholdProfile) -> [Status; 4] {
    Channel::ALL.map(|channel| classify(channel, reading.value(channel), profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tier(channel: Channel, value: f64) -> Tier {
        classify(channel, value, ThresholdProfile::Primary).tier
    }

    #[test]
    fn test_soil_boundaries() {
        assert_eq!(tier(Channel::Soil, 399.0), Tier::Critical);
        assert_eq!(tier(Channel::Soil, 400.0), Tier::Warning);
        assert_eq!(tier(Channel::Soil, 599.0), Tier::Warning);
        assert_eq!(tier(Channel::Soil, 600.0), Tier::Ok);
        assert_eq!(
            classify(Channel::Soil, 350.0, ThresholdProfile::Primary).label,
            "fluid leak risk"
        );
    }

    #[test]
    fn test_smoke_boundaries() {
        assert_eq!(tier(Channel::Smoke, 400.0), Tier::Ok);
        assert_eq!(tier(Channel::Smoke, 401.0), Tier::Critical);
        assert_eq!(
            classify(Channel::Smoke, 900.0, ThresholdProfile::Primary).label,
            "contamination"
        );
    }

    #[test]
    fn test_ldr_boundaries() {
        assert_eq!(tier(Channel::Ldr, 300.0), Tier::Critical);
        assert_eq!(tier(Channel::Ldr, 301.0), Tier::Warning);
        assert_eq!(tier(Channel::Ldr, 700.0), Tier::Warning);
        assert_eq!(tier(Channel::Ldr, 701.0), Tier::Info);
        assert_eq!(
            classify(Channel::Ldr, 800.0, ThresholdProfile::Primary).label,
            "low light"
        );
    }

    #[test]
    fn test_flame_polarity() {
        let detected = classify(Channel::Flame, 0.0, ThresholdProfile::Primary);
        assert_eq!(detected.tier, Tier::Critical);
        assert_eq!(detected.label, "combustion detected");

        let clear = classify(Channel::Flame, 1.0, ThresholdProfile::Primary);
        assert_eq!(clear.tier, Tier::Ok);
        assert_eq!(clear.label, "clear");
    }

    #[test]
    fn test_legacy_profile() {
        let legacy = |c, v| classify(c, v, ThresholdProfile::Legacy).tier;
        assert_eq!(legacy(Channel::Soil, 400.0), Tier::Critical);
        assert_eq!(legacy(Channel::Soil, 700.0), Tier::Warning);
        assert_eq!(legacy(Channel::Soil, 701.0), Tier::Ok);
        assert_eq!(legacy(Channel::Smoke, 201.0), Tier::Critical);
        assert_eq!(legacy(Channel::Ldr, 299.0), Tier::Ok);
        assert_eq!(legacy(Channel::Ldr, 700.0), Tier::Critical);
        assert_eq!(legacy(Channel::Flame, 0.0), Tier::Critical);
    }

    #[test]
    fn test_classify_reading_order() {
        let reading = SensorReading {
            soil: 350.0,
            smoke: 100.0,
            ldr: 800.0,
            flame: 1,
            timestamp: "t".to_string(),
        };
        let statuses = classify_reading(&reading, ThresholdProfile::Primary);
        let tiers: Vec<Tier> = statuses.iter().map(|s| s.tier).collect();
        assert_eq!(tiers, vec![Tier::Critical, Tier::Ok, Tier::Info, Tier::Ok]);
    }

    proptest! {
        #[test]
        fn test_soil_bands_hold(value in 0.0f64..1024.0) {
            let expected = if value < 400.0 {
                Tier::Critical
            } else if value < 600.0 {
                Tier::Warning
            } else {
                Tier::Ok
            };
            prop_assert_eq!(tier(Channel::Soil, value), expected);
        }

        #[test]
        fn test_nonzero_flame_is_clear(value in 1i64..1024) {
            prop_assert_eq!(tier(Channel::Flame, value as f64), Tier::Ok);
        }
    }
}
