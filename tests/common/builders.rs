//! Test data builders for creating test objects

use telemetry_dashboard::config::{DashboardConfig, MemoryPreferenceStore};
use telemetry_dashboard::dashboard::DashboardState;
use telemetry_dashboard::{Notification, SensorReading, Severity};

/// Builder for creating test SensorReadings
pub struct ReadingBuilder {
    soil: f64,
    smoke: f64,
    ldr: f64,
    flame: i64,
    timestamp: String,
}

impl ReadingBuilder {
    /// All channels nominal
    pub fn new() -> Self {
        Self {
            soil: 700.0,
            smoke: 100.0,
            ldr: 800.0,
            flame: 1,
            timestamp: "2024-05-01 12:00:00".to_string(),
        }
    }

    pub fn soil(mut self, soil: f64) -> Self {
        self.soil = soil;
        self
    }

    pub fn smoke(mut self, smoke: f64) -> Self {
        self.smoke = smoke;
        self
    }

    pub fn ldr(mut self, ldr: f64) -> Self {
        self.ldr = ldr;
        self
    }

    pub fn flame(mut self, flame: i64) -> Self {
        self.flame = flame;
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = timestamp.to_string();
        self
    }

    pub fn build(self) -> SensorReading {
        SensorReading {
            soil: self.soil,
            smoke: self.smoke,
            ldr: self.ldr,
            flame: self.flame,
            timestamp: self.timestamp,
        }
    }
}

/// Build a notification with the given identity
pub fn notification(timestamp: &str, severity: Severity) -> Notification {
    Notification {
        title: format!("Alert {}", timestamp),
        body: "Threshold exceeded".to_string(),
        timestamp: timestamp.to_string(),
        severity,
    }
}

/// Dashboard state with default config and no persisted theme
pub fn test_state() -> DashboardState {
    DashboardState::new(
        &DashboardConfig::default(),
        Box::new(MemoryPreferenceStore::new()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_builder() {
        let reading = ReadingBuilder::new().soil(350.0).flame(0).build();
        assert_eq!(reading.soil, 350.0);
        assert!(reading.flame_detected());
    }
}
