//! Frontend module for the dashboard UI
//!
//! [`DashboardApp`] drains poller messages into [`DashboardState`] once per
//! frame and renders it:
//!
//! - top bar with the dark-mode toggle
//! - channel status cards and the three live charts ([`panels`], [`plot`])
//! - history and notification log side panel
//! - toast overlay ([`toasts`])
//! - status bar ([`status_bar`])

pub mod panels;
pub mod plot;
pub mod status_bar;
pub mod toasts;

use crate::backend::{FrontendReceiver, PollMessage};
use crate::config::DashboardConfig;
use crate::dashboard::DashboardState;
use status_bar::{render_status_bar, StatusBarContext};
use std::time::{Duration, Instant};

/// egui theme for the dark-mode flag
pub fn egui_theme(dark: bool) -> egui::Theme {
    if dark {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    }
}

/// Main application
pub struct DashboardApp {
    state: DashboardState,
    frontend: FrontendReceiver,
    backend_url: String,
    poll_interval: Duration,
    exit_transition: Duration,
    /// Chart revisions as of the previous frame
    seen_revisions: Vec<u64>,
    poller_running: bool,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: DashboardState,
        frontend: FrontendReceiver,
        config: &DashboardConfig,
    ) -> Self {
        // Restored theme takes effect before the first frame
        cc.egui_ctx.set_theme(egui_theme(state.is_dark()));

        Self {
            state,
            frontend,
            backend_url: config.backend.base_url.clone(),
            poll_interval: config.backend.poll_interval(),
            exit_transition: Duration::from_millis(config.alerts.exit_transition_ms),
            seen_revisions: Vec::new(),
            poller_running: true,
        }
    }

    /// Apply every pending poller message; returns whether anything arrived
    fn process_backend_messages(&mut self, now: Instant) -> bool {
        let messages = self.frontend.drain();
        let had_messages = !messages.is_empty();

        for msg in messages {
            match msg {
                PollMessage::Tick(snapshot) => {
                    let summary = self.state.apply_tick(snapshot, now);
                    if summary.new_toasts > 0 {
                        tracing::info!("{} new alert(s)", summary.new_toasts);
                    }
                }
                PollMessage::Shutdown => {
                    tracing::info!("Poller reported shutdown");
                    self.poller_running = false;
                }
            }
        }

        had_messages
    }

    fn charts_changed(&mut self) -> bool {
        let revisions: Vec<u64> = self.state.charts().iter().map(|c| c.revision()).collect();
        let changed = revisions != self.seen_revisions;
        self.seen_revisions = revisions;
        changed
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Spacecraft Telemetry");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut dark = self.state.is_dark();
                    if ui.checkbox(&mut dark, "Dark mode").changed() {
                        self.state.set_dark(dark);
                        ctx.set_theme(egui_theme(dark));
                    }
                });
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let had_messages = self.process_backend_messages(now);
        self.state.advance(now);

        if had_messages || self.charts_changed() {
            ctx.request_repaint();
        }

        self.render_top_bar(ctx);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            render_status_bar(
                ui,
                &StatusBarContext {
                    backend_url: &self.backend_url,
                    poller_running: self.poller_running && self.frontend.is_running(),
                    ticks_applied: self.state.ticks_applied(),
                    last_tick_label: self.state.last_tick_label(),
                    active_toasts: self.state.toasts().len(),
                },
            );
        });

        egui::SidePanel::right("logs")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                panels::render_history(ui, self.state.history());
                ui.add_space(8.0);
                panels::render_notification_log(ui, self.state.notification_log());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            panels::render_status_cards(ui, &self.state);
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .id_salt("charts")
                .show(ui, |ui| {
                    for chart in self.state.charts() {
                        plot::render_chart(ui, chart);
                        ui.add_space(8.0);
                    }
                });
        });

        let events = toasts::render_toasts(ctx, self.state.toasts(), self.exit_transition);
        let toasts = self.state.toasts_mut();
        for id in events.dismissed {
            toasts.dismiss(id, now);
        }
        for id in events.finished {
            toasts.transition_complete(id);
        }

        let next_wake = self
            .state
            .toasts()
            .next_deadline(now)
            .map_or(self.poll_interval, |d| d.min(self.poll_interval));
        ctx.request_repaint_after(next_wake);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.frontend.shutdown();
    }
}
