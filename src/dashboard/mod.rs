//! Dashboard presentation state
//!
//! [`DashboardState`] is the single owner of everything the UI shows. Each
//! successful poll produces one [`TickSnapshot`], and [`DashboardState::apply_tick`]
//! fans it out to every component in one call, so a frame never observes a
//! half-applied tick:
//!
//! - status cards and raw readouts ([`crate::classify`])
//! - one rolling chart per charted channel ([`series`])
//! - the reading history and notification log ([`logs`])
//! - toasts for notifications not seen before ([`alerts`], [`toast`])
//!
//! Theme changes go through [`DashboardState::set_dark`], which restyles the
//! charts and logs immediately and persists the choice ([`theme`]).

pub mod alerts;
pub mod logs;
pub mod series;
pub mod theme;
pub mod toast;

pub use alerts::NotificationDeduplicator;
pub use logs::{HistoryEntry, HistoryLog, NotificationLog, NotificationLogEntry};
pub use series::{RollingSeries, SeriesChart, SeriesPoint};
pub use theme::ThemeController;
pub use toast::{Toast, ToastId, ToastPhase, ToastStack, ToastTimings};

use crate::classify::{classify_reading, Status, ThresholdProfile};
use crate::config::{DashboardConfig, PreferenceStore};
use crate::types::{Channel, Notification, SensorReading};
use std::time::Instant;

/// Everything fetched during one poll tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickSnapshot {
    pub reading: SensorReading,
    /// Full backend notification log, in backend order
    pub notifications: Vec<Notification>,
    /// Local wall-clock label for the chart x axis (`%H:%M:%S`)
    pub label: String,
}

impl TickSnapshot {
    pub fn new(
        reading: SensorReading,
        notifications: Vec<Notification>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            reading,
            notifications,
            label: label.into(),
        }
    }
}

/// What a tick changed, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSummary {
    pub new_toasts: usize,
    pub notifications: usize,
}

/// Status of one channel after the latest tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStatus {
    pub channel: Channel,
    pub value: f64,
    pub status: Status,
}

/// Complete presentation state of the dashboard
#[derive(Debug)]
pub struct DashboardState {
    profile: ThresholdProfile,
    statuses: Option<[ChannelStatus; 4]>,
    latest: Option<SensorReading>,
    charts: Vec<SeriesChart>,
    history: HistoryLog,
    notification_log: NotificationLog,
    dedup: NotificationDeduplicator,
    toasts: ToastStack,
    theme: ThemeController,
    ticks_applied: u64,
    last_tick_label: Option<String>,
}

impl DashboardState {
    /// Build the initial state, restoring the persisted theme first
    pub fn new(config: &DashboardConfig, store: Box<dyn PreferenceStore>) -> Self {
        let theme = ThemeController::new(store);
        let dark = theme.is_dark();

        let charts = Channel::CHARTED
            .iter()
            .map(|&channel| SeriesChart::new(channel, config.charts.capacity, dark))
            .collect();

        Self {
            profile: config.thresholds.profile,
            statuses: None,
            latest: None,
            charts,
            history: HistoryLog::new(config.logs.history_capacity),
            notification_log: NotificationLog::new(),
            dedup: NotificationDeduplicator::with_max_tracked(
                config.alerts.max_tracked_notifications,
            ),
            toasts: ToastStack::from_config(&config.alerts),
            theme,
            ticks_applied: 0,
            last_tick_label: None,
        }
    }

    /// Apply one successful tick to every component
    pub fn apply_tick(&mut self, snapshot: TickSnapshot, now: Instant) -> TickSummary {
        let TickSnapshot {
            reading,
            notifications,
            label,
        } = snapshot;
        let dark = self.theme.is_dark();

        let statuses = classify_reading(&reading, self.profile);
        self.statuses = Some(std::array::from_fn(|i| ChannelStatus {
            channel: Channel::ALL[i],
            value: reading.value(Channel::ALL[i]),
            status: statuses[i],
        }));

        for chart in &mut self.charts {
            chart.append(label.clone(), reading.value(chart.channel()));
        }

        self.history.append(&reading, dark);
        self.notification_log.render(&notifications, dark);

        let fresh = self.dedup.filter_new(&notifications);
        let new_toasts = fresh.len();
        for notification in fresh {
            self.toasts.push(notification, now);
        }

        self.latest = Some(reading);
        self.ticks_applied += 1;
        self.last_tick_label = Some(label);

        TickSummary {
            new_toasts,
            notifications: notifications.len(),
        }
    }

    /// Switch theme, restyle in place and persist the choice
    pub fn set_dark(&mut self, enabled: bool) {
        if let Err(e) = self.theme.set_dark(enabled) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }

        let color = series::tick_color(enabled);
        for chart in &mut self.charts {
            chart.set_tick_color(color);
        }
        self.history.restyle(enabled);
        self.notification_log.restyle(enabled);
    }

    /// Advance toast timers to `now`
    pub fn advance(&mut self, now: Instant) {
        self.toasts.advance(now);
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Per-channel statuses, `None` before the first tick
    pub fn statuses(&self) -> Option<&[ChannelStatus; 4]> {
        self.statuses.as_ref()
    }

    pub fn status(&self, channel: Channel) -> Option<&ChannelStatus> {
        self.statuses
            .as_ref()
            .and_then(|all| all.iter().find(|s| s.channel == channel))
    }

    /// Whether the flame card should be highlighted
    pub fn flame_alarm(&self) -> bool {
        self.latest
            .as_ref()
            .is_some_and(SensorReading::flame_detected)
    }

    pub fn charts(&self) -> &[SeriesChart] {
        &self.charts
    }

    pub fn chart(&self, channel: Channel) -> Option<&SeriesChart> {
        self.charts.iter().find(|c| c.channel() == channel)
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn notification_log(&self) -> &NotificationLog {
        &self.notification_log
    }

    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastStack {
        &mut self.toasts
    }

    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }

    pub fn last_tick_label(&self) -> Option<&str> {
        self.last_tick_label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Tier;
    use crate::config::{MemoryPreferenceStore, DARK_MODE_ENABLED, DARK_MODE_KEY};
    use crate::types::Severity;

    fn reading(soil: f64, smoke: f64, ldr: f64, flame: i64) -> SensorReading {
        SensorReading {
            soil,
            smoke,
            ldr,
            flame,
            timestamp: "2024-05-01 12:00:00".to_string(),
        }
    }

    fn state() -> DashboardState {
        DashboardState::new(
            &DashboardConfig::default(),
            Box::new(MemoryPreferenceStore::new()),
        )
    }

    #[test]
    fn test_initial_state_empty() {
        let state = state();
        assert!(state.statuses().is_none());
        assert_eq!(state.charts().len(), 3);
        assert!(state.charts().iter().all(|c| c.series().is_empty()));
        assert_eq!(state.ticks_applied(), 0);
        assert!(!state.flame_alarm());
    }

    #[test]
    fn test_apply_tick_fans_out() {
        let mut state = state();
        let now = Instant::now();
        let snapshot = TickSnapshot::new(reading(350.0, 100.0, 800.0, 1), vec![], "12:00:00");

        let summary = state.apply_tick(snapshot, now);
        assert_eq!(summary.new_toasts, 0);

        assert_eq!(state.status(Channel::Soil).unwrap().status.tier, Tier::Critical);
        assert_eq!(state.status(Channel::Ldr).unwrap().status.tier, Tier::Info);
        assert_eq!(state.status(Channel::Flame).unwrap().status.label, "clear");
        for chart in state.charts() {
            assert_eq!(chart.series().len(), 1);
            assert_eq!(chart.series().latest().unwrap().label, "12:00:00");
        }
        assert_eq!(
            state.chart(Channel::Smoke).unwrap().series().latest().unwrap().value,
            100.0
        );
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.notification_log().empty_message(), Some(logs::EMPTY_NOTIFICATIONS_MESSAGE));
        assert_eq!(state.last_tick_label(), Some("12:00:00"));
    }

    #[test]
    fn test_flame_alarm() {
        let mut state = state();
        state.apply_tick(
            TickSnapshot::new(reading(700.0, 100.0, 800.0, 0), vec![], "12:00:01"),
            Instant::now(),
        );
        assert!(state.flame_alarm());
        assert_eq!(
            state.status(Channel::Flame).unwrap().status.label,
            "combustion detected"
        );
    }

    #[test]
    fn test_notifications_toasted_once() {
        let mut state = state();
        let now = Instant::now();
        let notification = Notification {
            title: "Smoke".to_string(),
            body: "MQ-2 high".to_string(),
            timestamp: "12:00:00.5".to_string(),
            severity: Severity::Critical,
        };

        let first = state.apply_tick(
            TickSnapshot::new(reading(700.0, 500.0, 800.0, 1), vec![notification.clone()], "a"),
            now,
        );
        let second = state.apply_tick(
            TickSnapshot::new(reading(700.0, 500.0, 800.0, 1), vec![notification], "b"),
            now,
        );

        assert_eq!(first.new_toasts, 1);
        assert_eq!(second.new_toasts, 0);
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.notification_log().len(), 1);
    }

    #[test]
    fn test_set_dark_restyles_in_place() {
        let mut state = state();
        state.apply_tick(
            TickSnapshot::new(reading(700.0, 100.0, 800.0, 1), vec![], "a"),
            Instant::now(),
        );

        state.set_dark(true);
        assert!(state.is_dark());
        assert!(state
            .charts()
            .iter()
            .all(|c| c.style().tick_color == series::DARK_TICK_COLOR));
        assert!(state.history().iter().all(|e| e.dark));
        assert_eq!(state.charts()[0].series().len(), 1);
    }

    #[test]
    fn test_restored_theme_applies_before_first_tick() {
        let state = DashboardState::new(
            &DashboardConfig::default(),
            Box::new(MemoryPreferenceStore::with_value(DARK_MODE_KEY, DARK_MODE_ENABLED)),
        );
        assert!(state.is_dark());
        assert!(state
            .charts()
            .iter()
            .all(|c| c.style().tick_color == series::DARK_TICK_COLOR));
    }
}
