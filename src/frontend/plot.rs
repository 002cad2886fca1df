//! Live chart rendering using egui_plot
//!
//! Charts are static views of a [`SeriesChart`]: zoom, drag and scroll are
//! disabled and the x axis is labelled with each point's tick label.

use crate::dashboard::SeriesChart;
use egui::{Color32, RichText, Ui};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

/// Height of each chart plot area
pub const CHART_HEIGHT: f32 = 160.0;

pub(crate) fn color32(rgba: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Render one chart with its title
pub fn render_chart(ui: &mut Ui, chart: &SeriesChart) {
    let style = chart.style();
    let series = chart.series();

    ui.label(RichText::new(style.title).strong());

    let labels: Vec<String> = series.iter().map(|p| p.label.clone()).collect();
    let capacity = series.capacity();
    let (y_min, y_max) = padded_range(series.value_range());

    ui.scope(|ui| {
        // Axis text picks up the override, leaving the rest of the UI alone
        ui.visuals_mut().override_text_color = Some(color32(style.tick_color));

        let plot = Plot::new(("chart", chart.channel().short_name()))
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_axes(true)
            .show_grid(true)
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value;
                if index < 0.0 || index.fract() != 0.0 {
                    return String::new();
                }
                labels.get(index as usize).cloned().unwrap_or_default()
            });

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [0.0, y_min],
                [(capacity.saturating_sub(1)).max(1) as f64, y_max],
            ));

            if series.is_empty() {
                return;
            }

            let line = Line::new(chart.channel().short_name(), PlotPoints::from(series.as_plot_points()))
                .color(color32(style.line_color))
                .width(2.0)
                .fill(y_min as f32);
            plot_ui.line(line);
        });
    });
}

fn padded_range(range: Option<(f64, f64)>) -> (f64, f64) {
    match range {
        Some((min, max)) if max > min => {
            let pad = (max - min) * 0.1;
            (min - pad, max + pad)
        }
        Some((value, _)) => (value - 1.0, value + 1.0),
        None => (0.0, 1.0),
    }
}
