//! Scripted telemetry source and worker helpers

use crossbeam_channel::{bounded, Receiver};
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use telemetry_dashboard::backend::{PollMessage, PollWorker, TelemetrySource};
use telemetry_dashboard::dashboard::TickSnapshot;
use telemetry_dashboard::{DashboardError, Notification, Result, SensorReading};

/// Source that replays queued results in order
///
/// Once a queue runs dry every fetch from it fails with a network error.
#[derive(Default)]
pub struct ScriptedSource {
    readings: Mutex<VecDeque<Result<SensorReading>>>,
    notifications: Mutex<VecDeque<Result<Vec<Notification>>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one successful tick
    pub fn then_ok(self, reading: SensorReading, notifications: Vec<Notification>) -> Self {
        self.readings.lock().unwrap().push_back(Ok(reading));
        self.notifications
            .lock()
            .unwrap()
            .push_back(Ok(notifications));
        self
    }

    /// Queue one tick whose reading fetch fails
    pub fn then_reading_error(self, error: DashboardError) -> Self {
        self.readings.lock().unwrap().push_back(Err(error));
        self.notifications.lock().unwrap().push_back(Ok(Vec::new()));
        self
    }

    /// Queue one tick whose notification fetch fails
    pub fn then_notifications_error(self, reading: SensorReading, error: DashboardError) -> Self {
        self.readings.lock().unwrap().push_back(Ok(reading));
        self.notifications.lock().unwrap().push_back(Err(error));
        self
    }
}

fn exhausted<T>() -> Result<T> {
    Err(DashboardError::Network("script exhausted".to_string()))
}

impl TelemetrySource for ScriptedSource {
    async fn fetch_reading(&self) -> Result<SensorReading> {
        let next = self.readings.lock().unwrap().pop_front();
        next.unwrap_or_else(exhausted)
    }

    async fn fetch_notifications(&self) -> Result<Vec<Notification>> {
        let next = self.notifications.lock().unwrap().pop_front();
        next.unwrap_or_else(exhausted)
    }
}

/// Worker wired to a fresh channel
pub fn scripted_worker(
    source: ScriptedSource,
) -> (PollWorker<ScriptedSource>, Receiver<PollMessage>, Arc<AtomicBool>) {
    let (tx, rx) = bounded(16);
    let running = Arc::new(AtomicBool::new(true));
    let worker = PollWorker::new(source, tx, running.clone(), Duration::from_millis(10));
    (worker, rx, running)
}

/// Collect the tick snapshots currently queued on a receiver
pub fn drain_ticks(rx: &Receiver<PollMessage>) -> Vec<TickSnapshot> {
    rx.try_iter()
        .filter_map(|msg| match msg {
            PollMessage::Tick(snapshot) => Some(snapshot),
            PollMessage::Shutdown => None,
        })
        .collect()
}
