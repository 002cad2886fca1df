//! Status cards and log panels

use crate::classify::Tier;
use crate::dashboard::{ChannelStatus, DashboardState, HistoryLog, NotificationLog};
use crate::frontend::plot::color32;
use crate::frontend::toasts::severity_color;
use crate::types::{format_value, Channel};
use egui::{Color32, RichText, Stroke, Ui};

/// Highlight colour of the flame card while combustion is detected
const FLAME_ALARM_FILL: Color32 = Color32::from_rgb(120, 20, 30);

/// Text colour of log entries for a palette
fn entry_text_color(dark: bool) -> Color32 {
    if dark {
        Color32::from_rgb(224, 224, 224)
    } else {
        Color32::from_rgb(33, 37, 41)
    }
}

/// Render the four channel cards side by side
pub fn render_status_cards(ui: &mut Ui, state: &DashboardState) {
    ui.columns(Channel::ALL.len(), |columns| {
        for (column, channel) in columns.iter_mut().zip(Channel::ALL) {
            let highlighted = channel == Channel::Flame && state.flame_alarm();
            render_card(column, channel, state.status(channel), highlighted);
        }
    });
}

fn render_card(ui: &mut Ui, channel: Channel, status: Option<&ChannelStatus>, highlighted: bool) {
    let mut frame = egui::Frame::new()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(8.0)
        .outer_margin(2.0)
        .corner_radius(4.0);

    if highlighted {
        frame = frame
            .fill(FLAME_ALARM_FILL)
            .stroke(Stroke::new(2.0, color32(Tier::Critical.color())));
    }

    frame.show(ui, |ui| {
        ui.set_min_height(72.0);
        ui.label(RichText::new(channel.display_name()).strong());

        let Some(status) = status else {
            ui.label(RichText::new("Awaiting telemetry...").weak());
            return;
        };

        ui.label(RichText::new(status.status.headline).color(color32(status.status.tier.color())));
        ui.label(RichText::new(format!("Raw: {}", format_value(status.value))).small());
    });
}

/// Render the most-recent-first reading history
pub fn render_history(ui: &mut Ui, history: &HistoryLog) {
    ui.heading("History");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("history_log")
        .max_height(ui.available_height() * 0.5)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if history.is_empty() {
                ui.label(RichText::new("No readings yet.").weak());
            }
            for entry in history.iter() {
                let color = if entry.flame_detected {
                    color32(Tier::Critical.color())
                } else {
                    entry_text_color(entry.dark)
                };
                ui.label(
                    RichText::new(format!("[{}] {}", entry.timestamp, entry.summary))
                        .color(color)
                        .small(),
                );
            }
        });
}

/// Render the backend's notification log
pub fn render_notification_log(ui: &mut Ui, log: &NotificationLog) {
    ui.heading("Notifications");
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt("notification_log")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            if let Some(message) = log.empty_message() {
                ui.label(RichText::new(message).weak());
                return;
            }

            for entry in log.entries() {
                egui::Frame::new()
                    .inner_margin(4.0)
                    .corner_radius(4.0)
                    .stroke(Stroke::new(1.0, severity_color(&entry.severity)))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(&entry.title)
                                    .strong()
                                    .color(entry_text_color(entry.dark)),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.label(RichText::new(&entry.timestamp).small().weak());
                                },
                            );
                        });
                        ui.label(RichText::new(&entry.body).color(entry_text_color(entry.dark)));
                    });
                ui.add_space(4.0);
            }
        });
}
