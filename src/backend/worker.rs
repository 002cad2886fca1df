//! Backend poll worker
//!
//! The worker owns a single-threaded tokio runtime and drives the poll
//! schedule: the first tick fires immediately, then one tick per interval.
//! Each tick fetches the reading and the notification log concurrently and
//! either delivers one [`PollMessage::Tick`] or nothing at all.
//!
//! Teardown is cooperative: clearing the shared `running` flag (or dropping
//! the receiver) stops the schedule, and a result that completes after
//! teardown is discarded instead of delivered.

use super::source::TelemetrySource;
use super::PollMessage;
use crate::dashboard::TickSnapshot;
use crate::error::{DashboardError, Result, ResultExt};
use crossbeam_channel::{Sender, TrySendError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Format of the chart x-axis label
pub const TICK_LABEL_FORMAT: &str = "%H:%M:%S";

/// Outcome of one tick, as seen by the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snapshot handed to the UI
    Delivered,
    /// Fetch failed or the UI queue was full; nothing applied
    Discarded,
    /// The dashboard is gone; stop polling
    Stopped,
}

/// Worker statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    pub ticks_delivered: u64,
    pub ticks_failed: u64,
    pub ticks_dropped: u64,
}

/// Polls a [`TelemetrySource`] on a fixed interval
pub struct PollWorker<S> {
    source: S,
    message_tx: Sender<PollMessage>,
    running: Arc<AtomicBool>,
    interval: Duration,
    stats: WorkerStats,
}

impl<S: TelemetrySource> PollWorker<S> {
    pub fn new(
        source: S,
        message_tx: Sender<PollMessage>,
        running: Arc<AtomicBool>,
        interval: Duration,
    ) -> Self {
        Self {
            source,
            message_tx,
            running,
            interval,
            stats: WorkerStats::default(),
        }
    }

    /// Fetch both endpoints concurrently
    ///
    /// Both requests always run to completion. Fails if either fetch fails;
    /// no partial snapshot is produced.
    pub async fn poll_once(&self) -> Result<TickSnapshot> {
        let (reading, notifications) = tokio::join!(
            self.source.fetch_reading(),
            self.source.fetch_notifications()
        );
        let reading = reading?;
        let notifications = notifications?;

        let label = chrono::Local::now().format(TICK_LABEL_FORMAT).to_string();
        Ok(TickSnapshot::new(reading, notifications, label))
    }

    /// Run one tick and hand the result to the UI
    pub async fn run_tick(&mut self) -> TickOutcome {
        let result = self.poll_once().await.context("Tick discarded");

        // The dashboard may have been torn down while the fetch was in flight
        if !self.is_running() {
            tracing::debug!("Dropping tick result after teardown");
            return TickOutcome::Stopped;
        }

        match result {
            Ok(snapshot) => self.deliver(snapshot),
            Err(e) => {
                self.stats.ticks_failed += 1;
                log_failure(&e);
                TickOutcome::Discarded
            }
        }
    }

    fn deliver(&mut self, snapshot: TickSnapshot) -> TickOutcome {
        match self.message_tx.try_send(PollMessage::Tick(snapshot)) {
            Ok(()) => {
                self.stats.ticks_delivered += 1;
                TickOutcome::Delivered
            }
            Err(TrySendError::Full(_)) => {
                self.stats.ticks_dropped += 1;
                tracing::warn!("UI is not keeping up, tick dropped");
                TickOutcome::Discarded
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("UI receiver dropped, stopping poller");
                self.running.store(false, Ordering::SeqCst);
                TickOutcome::Stopped
            }
        }
    }

    /// Poll until stopped
    pub async fn run_loop(&mut self) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.is_running() {
            interval.tick().await;
            if !self.is_running() {
                break;
            }
            if self.run_tick().await == TickOutcome::Stopped {
                break;
            }
        }
    }

    /// Blocking entry point for the backend thread
    pub fn run(mut self) {
        tracing::info!("Poller started ({:?} interval)", self.interval);

        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start poller runtime: {}", e);
                let _ = self.message_tx.send(PollMessage::Shutdown);
                return;
            }
        };

        runtime.block_on(self.run_loop());

        tracing::info!(
            "Poller stopped: {} delivered, {} failed, {} dropped",
            self.stats.ticks_delivered,
            self.stats.ticks_failed,
            self.stats.ticks_dropped
        );
        let _ = self.message_tx.try_send(PollMessage::Shutdown);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn stats(&self) -> WorkerStats {
        self.stats
    }
}

fn log_failure(error: &DashboardError) {
    if error.is_network() {
        tracing::warn!("{}", error);
    } else {
        tracing::error!("{}", error);
    }
}
