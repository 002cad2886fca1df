//! Toast overlay
//!
//! Entrance and exit are driven by `animate_bool_with_time`: a toast animates
//! in once it becomes visible and out once it starts dismissing. The exit is
//! reported complete when the animation value reaches zero.

use crate::dashboard::{ToastId, ToastPhase, ToastStack};
use crate::types::Severity;
use egui::{Color32, RichText};
use std::time::Duration;

const TOAST_WIDTH: f32 = 320.0;

/// Horizontal slide distance of the entrance and exit
const SLIDE_DISTANCE: f32 = 48.0;

/// Accent colour of a severity
pub fn severity_color(severity: &Severity) -> Color32 {
    match severity {
        Severity::Info => Color32::from_rgb(13, 110, 253),
        Severity::Medium => Color32::from_rgb(253, 126, 20),
        Severity::Critical => Color32::from_rgb(220, 53, 69),
        Severity::Escalation => Color32::from_rgb(111, 66, 193),
        Severity::Other(_) => Color32::from_rgb(108, 117, 125),
    }
}

/// User and animation events from one frame of the overlay
#[derive(Debug, Default)]
pub struct ToastEvents {
    /// Toasts whose exit transition finished
    pub finished: Vec<ToastId>,
    /// Toasts the user clicked away
    pub dismissed: Vec<ToastId>,
}

/// Draw the toast stack in the top-right corner
pub fn render_toasts(ctx: &egui::Context, toasts: &ToastStack, exit: Duration) -> ToastEvents {
    let mut events = ToastEvents::default();
    if toasts.is_empty() {
        return events;
    }

    let animation_time = exit.as_secs_f32();

    egui::Area::new(egui::Id::new("toast_stack"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH + SLIDE_DISTANCE);

            for toast in toasts.iter() {
                let shown = toast.phase() == ToastPhase::Visible;
                let t = ctx.animate_bool_with_time(
                    egui::Id::new(("toast", toast.id())),
                    shown,
                    animation_time,
                );

                if t <= 0.0 {
                    if toast.phase() == ToastPhase::Dismissing {
                        events.finished.push(toast.id());
                    }
                    continue;
                }

                let accent = severity_color(&toast.notification().severity);
                let response = ui
                    .scope(|ui| {
                        ui.multiply_opacity(t);
                        ui.horizontal(|ui| {
                            ui.add_space((1.0 - t) * SLIDE_DISTANCE);
                            egui::Frame::popup(ui.style())
                                .stroke(egui::Stroke::new(2.0, accent))
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.set_width(TOAST_WIDTH);
                                    ui.label(RichText::new(toast.heading()).strong().color(accent));
                                    ui.label(&toast.notification().body);
                                    ui.label(
                                        RichText::new(toast.notification().display_timestamp())
                                            .small()
                                            .weak(),
                                    );
                                })
                                .response
                        })
                        .inner
                    })
                    .inner
                    .interact(egui::Sense::click());

                if response.clicked() && toast.phase() != ToastPhase::Dismissing {
                    events.dismissed.push(toast.id());
                }
                ui.add_space(6.0);
            }
        });

    events
}
