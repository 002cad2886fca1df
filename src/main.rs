//! Telemetry Dashboard - Main Entry Point
//!
//! Polls the telemetry backend in a background thread and renders the live
//! dashboard.

use telemetry_dashboard::{
    backend::{HttpTelemetrySource, TelemetryBackend},
    config::{DashboardConfig, FilePreferenceStore},
    dashboard::DashboardState,
    frontend::DashboardApp,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,telemetry_dashboard=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Telemetry Dashboard");

    let config = DashboardConfig::load_or_default();
    tracing::info!("Polling {} every {:?}", config.backend.base_url, config.backend.poll_interval());

    // Theme preference is restored here so the first frame is already styled
    let preferences = FilePreferenceStore::open_default();
    let state = DashboardState::new(&config, Box::new(preferences));

    let source = HttpTelemetrySource::new(&config.backend.base_url, config.backend.request_timeout())
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;
    let (backend, frontend) = TelemetryBackend::new(source, &config.backend);
    let stop_handle = backend.stop_handle();

    let backend_handle = std::thread::Builder::new()
        .name("telemetry-poller".to_string())
        .spawn(move || backend.run())
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Telemetry Dashboard"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Telemetry Dashboard",
        native_options,
        Box::new(move |cc| {
            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_shadow.offset = [0, 0];
            cc.egui_ctx.set_style(style);

            Ok(Box::new(DashboardApp::new(cc, state, frontend, &config)))
        }),
    );

    // Signal the poller to stop; any in-flight result is discarded
    tracing::info!("Shutting down...");
    stop_handle.store(false, std::sync::atomic::Ordering::SeqCst);
    drop(backend_handle);

    result
}
