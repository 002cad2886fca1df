//! Core data types for the telemetry dashboard
//!
//! This module contains the payloads received from the telemetry backend and
//! the small value types shared by every presentation component.
//!
//! # Main Types
//!
//! - [`SensorReading`] - One snapshot of all sensor channels (`GET /data`)
//! - [`Notification`] - One alert notification (`GET /notifications`)
//! - [`Severity`] - Alert severity as reported by the backend
//! - [`Channel`] - A monitored sensor dimension
//!
//! # Flame Polarity
//!
//! The flame sensor is active-low: a raw value of `0` means a flame was
//! detected and any other value means the scan is clear. Use
//! [`SensorReading::flame_detected`] instead of comparing the raw value.

use serde::{Deserialize, Serialize};

/// A monitored sensor dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Moisture probe (coolant leak & condensation)
    Soil,
    /// MQ-2 gas sensor (atmospheric purity)
    Smoke,
    /// Light dependent resistor (ambient light)
    Ldr,
    /// Flame sensor, active-low
    Flame,
}

impl Channel {
    /// All channels in display order
    pub const ALL: [Channel; 4] = [Channel::Soil, Channel::Smoke, Channel::Ldr, Channel::Flame];

    /// Channels that are plotted as a time series
    pub const CHARTED: [Channel; 3] = [Channel::Soil, Channel::Smoke, Channel::Ldr];

    /// Card title for the channel
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::Soil => "Coolant & Humidity",
            Channel::Smoke => "Atmospheric Purity",
            Channel::Ldr => "Ambient Light",
            Channel::Flame => "Thermal & Combustion",
        }
    }

    /// Short emoji-free tag used in log lines
    pub fn short_name(&self) -> &'static str {
        match self {
            Channel::Soil => "Soil",
            Channel::Smoke => "Smoke",
            Channel::Ldr => "LDR",
            Channel::Flame => "Flame",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// One snapshot of every sensor channel
///
/// Produced once per poll tick and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub soil: f64,
    pub smoke: f64,
    pub ldr: f64,
    pub flame: i64,
    /// Backend timestamp of the reading (`%Y-%m-%d %H:%M:%S`)
    pub timestamp: String,
}

impl SensorReading {
    /// Raw value for a channel
    pub fn value(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Soil => self.soil,
            Channel::Smoke => self.smoke,
            Channel::Ldr => self.ldr,
            Channel::Flame => self.flame as f64,
        }
    }

    /// Whether the flame sensor reports combustion (raw value `0`)
    pub fn flame_detected(&self) -> bool {
        self.flame == 0
    }
}

/// Alert severity as reported by the backend
///
/// Unknown strings are preserved so they still round-trip to a style class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    #[default]
    Info,
    Medium,
    Critical,
    Escalation,
    Other(String),
}

impl Severity {
    /// Style class name, e.g. `toast-critical`
    pub fn css_class(&self) -> String {
        format!("toast-{}", self.as_str())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Medium => "medium",
            Severity::Critical => "critical",
            Severity::Escalation => "escalation",
            Severity::Other(s) => s,
        }
    }

    pub fn is_escalation(&self) -> bool {
        matches!(self, Severity::Escalation)
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "info" => Severity::Info,
            "medium" => Severity::Medium,
            "critical" => Severity::Critical,
            "escalation" => Severity::Escalation,
            _ => Severity::Other(value),
        }
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One alert notification
///
/// The timestamp doubles as the identity key of the notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub timestamp: String,
    #[serde(default)]
    pub severity: Severity,
}

impl Notification {
    /// Identity used for toast deduplication
    pub fn identity(&self) -> &str {
        &self.timestamp
    }

    /// Timestamp without the fractional-second suffix
    pub fn display_timestamp(&self) -> &str {
        self.timestamp
            .split('.')
            .next()
            .unwrap_or(self.timestamp.as_str())
    }
}

/// Format a raw sensor value, dropping the fraction for whole numbers
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
