//! # Telemetry Dashboard: live sensor monitoring
//!
//! A desktop dashboard for a small sensor station. It polls an HTTP telemetry
//! backend for the latest reading and the alert log, classifies every channel
//! against fixed thresholds, keeps rolling charts and logs, and raises toast
//! alerts for notifications it has not shown before.
//!
//! ## Architecture
//!
//! - **Backend**: Polls `/data` and `/notifications` in a separate thread
//! - **Dashboard**: Pure presentation state, updated once per successful tick
//! - **Frontend**: Renders the state using eframe/egui with egui_plot for charts
//! - **Communication**: Crossbeam channels for thread-safe data transfer
//!
//! ## Configuration
//!
//! Settings are read from `config.toml` in the platform config directory and
//! the theme choice is persisted in the platform data directory, both under
//! `dev.hxyulin.telemetry-dashboard`. `TELEMETRY_BACKEND_URL` overrides the
//! backend address.
//!
//! ## Example
//!
//! ```ignore
//! use telemetry_dashboard::{
//!     backend::{HttpTelemetrySource, TelemetryBackend},
//!     config::{DashboardConfig, FilePreferenceStore},
//!     dashboard::DashboardState,
//!     frontend::DashboardApp,
//! };
//!
//! fn main() -> eframe::Result<()> {
//!     let config = DashboardConfig::load_or_default();
//!     let state = DashboardState::new(&config, Box::new(FilePreferenceStore::open_default()));
//!
//!     let source = HttpTelemetrySource::new(&config.backend.base_url, config.backend.request_timeout())
//!         .expect("valid client");
//!     let (backend, frontend) = TelemetryBackend::new(source, &config.backend);
//!     std::thread::spawn(move || backend.run());
//!
//!     eframe::run_native(
//!         "Telemetry Dashboard",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, state, frontend, &config)))),
//!     )
//! }
//! ```

pub mod backend;
pub mod classify;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod frontend;
pub mod types;

// Re-export commonly used types
pub use backend::{FrontendReceiver, HttpTelemetrySource, PollMessage, TelemetryBackend, TelemetrySource};
pub use classify::{classify, Status, ThresholdProfile, Tier};
pub use config::DashboardConfig;
pub use dashboard::{DashboardState, TickSnapshot};
pub use error::{DashboardError, Result};
pub use frontend::DashboardApp;
pub use types::{Channel, Notification, SensorReading, Severity};
