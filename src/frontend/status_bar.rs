//! Status bar panel: bottom bar showing backend and tick info.

use egui::{Color32, RichText, Ui};

/// Context needed to render the status bar.
pub struct StatusBarContext<'a> {
    pub backend_url: &'a str,
    pub poller_running: bool,
    pub ticks_applied: u64,
    pub last_tick_label: Option<&'a str>,
    pub active_toasts: usize,
}

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, ctx: &StatusBarContext<'_>) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let (status_color, status_text) = if !ctx.poller_running {
            (Color32::GRAY, "Stopped")
        } else if ctx.ticks_applied > 0 {
            (Color32::GREEN, "Live")
        } else {
            (Color32::YELLOW, "Waiting")
        };
        ui.colored_label(status_color, "●");
        ui.label(RichText::new(format!("{}: {}", status_text, ctx.backend_url)).small());

        ui.separator();

        ui.label(RichText::new(format!("Ticks: {}", ctx.ticks_applied)).small());

        ui.separator();

        let last = ctx.last_tick_label.unwrap_or("-");
        ui.label(RichText::new(format!("Last update: {}", last)).small());

        if ctx.active_toasts > 0 {
            ui.separator();
            ui.label(RichText::new(format!("Alerts: {}", ctx.active_toasts)).small());
        }
    });
}
