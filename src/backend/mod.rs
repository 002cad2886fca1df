//! Backend module for telemetry polling
//!
//! All network traffic happens on a dedicated thread so the UI never blocks
//! on a request. The thread and the UI communicate over a crossbeam channel.
//!
//! # Architecture
//!
//! - [`PollMessage`] - Messages sent from the poller to the UI
//! - [`FrontendReceiver`] - UI-side handle for draining messages and stopping the poller
//! - [`TelemetryBackend`] - Entry point that owns the source and runs the worker
//! - [`PollWorker`] - The poll schedule itself
//! - [`TelemetrySource`] / [`HttpTelemetrySource`] - Where readings come from
//!
//! # Example
//!
//! ```ignore
//! use telemetry_dashboard::backend::{HttpTelemetrySource, TelemetryBackend};
//! use telemetry_dashboard::config::DashboardConfig;
//!
//! let config = DashboardConfig::default();
//! let source = HttpTelemetrySource::new(&config.backend.base_url, config.backend.request_timeout())?;
//! let (backend, frontend) = TelemetryBackend::new(source, &config.backend);
//!
//! std::thread::spawn(move || backend.run());
//!
//! for msg in frontend.drain() {
//!     if let PollMessage::Tick(snapshot) = msg {
//!         state.apply_tick(snapshot, Instant::now());
//!     }
//! }
//! ```

pub mod source;
pub mod worker;

pub use source::{
    parse_payload, HttpTelemetrySource, TelemetrySource, DATA_ENDPOINT, NOTIFICATIONS_ENDPOINT,
};
pub use worker::{PollWorker, TickOutcome, WorkerStats, TICK_LABEL_FORMAT};

use crate::config::BackendConfig;
use crate::dashboard::TickSnapshot;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Ticks buffered between the poller and the UI
const MESSAGE_QUEUE_CAPACITY: usize = 64;

/// Message sent from the poller to the UI
#[derive(Debug, Clone)]
pub enum PollMessage {
    /// One complete, successful tick
    Tick(TickSnapshot),
    /// Poller is shutting down
    Shutdown,
}

/// Frontend handle for poller messages
pub struct FrontendReceiver {
    /// Receiver for poller messages
    pub receiver: Receiver<PollMessage>,
    /// Shared running flag
    running: Arc<AtomicBool>,
}

impl FrontendReceiver {
    /// Receive all pending messages
    pub fn drain(&self) -> Vec<PollMessage> {
        let mut messages = Vec::new();
        while let Ok(msg) = self.receiver.try_recv() {
            messages.push(msg);
        }
        messages
    }

    /// Whether the poller is still scheduled
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the poller; in-flight results are discarded
    pub fn shutdown(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Telemetry backend that runs in a separate thread
pub struct TelemetryBackend<S> {
    source: S,
    interval: Duration,
    message_sender: Sender<PollMessage>,
    running: Arc<AtomicBool>,
}

impl<S: TelemetrySource> TelemetryBackend<S> {
    /// Create a backend with its communication channel
    pub fn new(source: S, config: &BackendConfig) -> (Self, FrontendReceiver) {
        let (msg_tx, msg_rx) = bounded(MESSAGE_QUEUE_CAPACITY);
        let running = Arc::new(AtomicBool::new(true));

        let backend = Self {
            source,
            interval: config.poll_interval(),
            message_sender: msg_tx,
            running: running.clone(),
        };

        let frontend = FrontendReceiver {
            receiver: msg_rx,
            running,
        };

        (backend, frontend)
    }

    /// Run the poll loop until stopped
    pub fn run(self) {
        PollWorker::new(
            self.source,
            self.message_sender,
            self.running,
            self.interval,
        )
        .run();
    }

    /// Get a handle to stop the backend
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        self.running.clone()
    }
}
