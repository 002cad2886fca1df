//! Reading history and notification log views

use crate::types::{format_value, Notification, SensorReading, Severity};
use std::collections::VecDeque;

/// Message shown when the backend reports no notifications
pub const EMPTY_NOTIFICATIONS_MESSAGE: &str = "No notifications sent recently.";

/// One line of the reading history
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub summary: String,
    pub flame_detected: bool,
    /// Rendered with the dark palette
    pub dark: bool,
}

impl HistoryEntry {
    pub fn from_reading(reading: &SensorReading, dark: bool) -> Self {
        Self {
            timestamp: reading.timestamp.clone(),
            summary: summarize(reading),
            flame_detected: reading.flame_detected(),
            dark,
        }
    }
}

/// `Soil: 350 | Smoke: 100 | LDR: 800 | Flame: No`
pub fn summarize(reading: &SensorReading) -> String {
    format!(
        "Soil: {} | Smoke: {} | LDR: {} | Flame: {}",
        format_value(reading.soil),
        format_value(reading.smoke),
        format_value(reading.ldr),
        if reading.flame_detected() { "Yes" } else { "No" }
    )
}

/// Most-recent-first log of readings
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend an entry, dropping the oldest past capacity
    pub fn append(&mut self, reading: &SensorReading, dark: bool) {
        self.entries
            .push_front(HistoryEntry::from_reading(reading, dark));
        if self.entries.len() > self.capacity {
            self.entries.pop_back();
        }
    }

    /// Switch every existing entry to the given palette
    pub fn restyle(&mut self, dark: bool) {
        for entry in &mut self.entries {
            entry.dark = dark;
        }
    }

    /// Entries, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One rendered notification
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationLogEntry {
    pub title: String,
    pub body: String,
    /// Timestamp with the fractional seconds removed
    pub timestamp: String,
    pub severity: Severity,
    pub dark: bool,
}

impl NotificationLogEntry {
    pub fn from_notification(notification: &Notification, dark: bool) -> Self {
        Self {
            title: notification.title.clone(),
            body: notification.body.clone(),
            timestamp: notification.display_timestamp().to_string(),
            severity: notification.severity.clone(),
            dark,
        }
    }
}

/// Mirror of the backend's full notification log
///
/// Every render replaces the previous contents.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<NotificationLogEntry>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the log with a fresh snapshot, keeping backend order
    pub fn render(&mut self, notifications: &[Notification], dark: bool) {
        self.entries = notifications
            .iter()
            .map(|n| NotificationLogEntry::from_notification(n, dark))
            .collect();
    }

    pub fn restyle(&mut self, dark: bool) {
        for entry in &mut self.entries {
            entry.dark = dark;
        }
    }

    /// Placeholder text when there is nothing to show
    pub fn empty_message(&self) -> Option<&'static str> {
        self.entries
            .is_empty()
            .then_some(EMPTY_NOTIFICATIONS_MESSAGE)
    }

    pub fn entries(&self) -> &[NotificationLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
