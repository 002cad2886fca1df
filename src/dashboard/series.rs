//! Rolling chart series
//!
//! [`RollingSeries`] is a fixed-capacity FIFO of labelled points: every
//! append pushes to the tail and, once the capacity is exceeded, evicts
//! exactly one point from the head. [`SeriesChart`] pairs one series with the
//! styling of the chart that plots it.

use crate::types::Channel;
use std::collections::VecDeque;

/// Tick colour used in light mode (`#6c757d`)
pub const LIGHT_TICK_COLOR: [u8; 4] = [108, 117, 125, 255];

/// Tick colour used in dark mode (`#e0e0e0`)
pub const DARK_TICK_COLOR: [u8; 4] = [224, 224, 224, 255];

/// Line colour shared by every chart (`#e94560`)
pub const LINE_COLOR: [u8; 4] = [233, 69, 96, 255];

/// Tick colour for the given theme
pub fn tick_color(dark: bool) -> [u8; 4] {
    if dark {
        DARK_TICK_COLOR
    } else {
        LIGHT_TICK_COLOR
    }
}

/// A single labelled value
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Fixed-capacity, oldest-first-evicted series
#[derive(Debug, Clone)]
pub struct RollingSeries {
    capacity: usize,
    points: VecDeque<SeriesPoint>,
}

impl RollingSeries {
    /// Create an empty series; a capacity of zero is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            points: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Append a point, returning the evicted head if the capacity was exceeded
    pub fn append(&mut self, label: impl Into<String>, value: f64) -> Option<SeriesPoint> {
        self.points.push_back(SeriesPoint {
            label: label.into(),
            value,
        });

        if self.points.len() > self.capacity {
            self.points.pop_front()
        } else {
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in chronological order
    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    /// Most recently appended point
    pub fn latest(&self) -> Option<&SeriesPoint> {
        self.points.back()
    }

    /// Label of the point at an x position, for axis formatting
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.points.get(index).map(|p| p.label.as_str())
    }

    /// Points as `[index, value]` pairs for plotting
    pub fn as_plot_points(&self) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.value])
            .collect()
    }

    /// Min and max of the stored values
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for p in &self.points {
            min = min.min(p.value);
            max = max.max(p.value);
        }
        Some((min, max))
    }
}

/// Visual parameters of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub title: &'static str,
    pub line_color: [u8; 4],
    pub tick_color: [u8; 4],
}

/// One live chart: a channel's rolling series plus its styling
///
/// `revision` increases on every data or style change so the renderer can
/// redraw the plot in place instead of rebuilding it.
#[derive(Debug, Clone)]
pub struct SeriesChart {
    channel: Channel,
    series: RollingSeries,
    style: ChartStyle,
    revision: u64,
}

impl SeriesChart {
    pub fn new(channel: Channel, capacity: usize, dark: bool) -> Self {
        Self {
            channel,
            series: RollingSeries::new(capacity),
            style: ChartStyle {
                title: channel.display_name(),
                line_color: LINE_COLOR,
                tick_color: tick_color(dark),
            },
            revision: 0,
        }
    }

    /// Append a point and redraw
    pub fn append(&mut self, label: impl Into<String>, value: f64) {
        if let Some(evicted) = self.series.append(label, value) {
            tracing::trace!("{} chart evicted point {}", self.channel, evicted.label);
        }
        self.render();
    }

    /// Restyle the axis ticks; data is left untouched
    pub fn set_tick_color(&mut self, color: [u8; 4]) {
        if self.style.tick_color != color {
            self.style.tick_color = color;
            self.render();
        }
    }

    /// Mark the chart for an in-place redraw
    pub fn render(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn series(&self) -> &RollingSeries {
        &self.series
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_append_below_capacity() {
        let mut series = RollingSeries::new(3);
        assert!(series.append("a", 1.0).is_none());
        assert!(series.append("b", 2.0).is_none());
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest().unwrap().label, "b");
    }

    #[test]
    fn test_single_eviction_per_append() {
        let mut series = RollingSeries::new(2);
        series.append("a", 1.0);
        series.append("b", 2.0);
        let evicted = series.append("c", 3.0).unwrap();
        assert_eq!(evicted.label, "a");
        assert_eq!(series.len(), 2);

        let labels: Vec<_> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut series = RollingSeries::new(0);
        series.append("a", 1.0);
        series.append("b", 2.0);
        assert_eq!(series.capacity(), 1);
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_plot_points_and_range() {
        let mut series = RollingSeries::new(5);
        series.append("t0", 10.0);
        series.append("t1", -4.0);
        assert_eq!(series.as_plot_points(), vec![[0.0, 10.0], [1.0, -4.0]]);
        assert_eq!(series.value_range(), Some((-4.0, 10.0)));
        assert_eq!(series.label_at(1), Some("t1"));
    }

    #[test]
    fn test_tick_color_restyle_keeps_data() {
        let mut chart = SeriesChart::new(Channel::Soil, 20, false);
        chart.append("t0", 500.0);
        let revision = chart.revision();

        chart.set_tick_color(tick_color(true));
        assert_eq!(chart.style().tick_color, DARK_TICK_COLOR);
        assert_eq!(chart.series().len(), 1);
        assert!(chart.revision() > revision);
    }

    proptest! {
        #[test]
        fn test_keeps_last_capacity_points(values in prop::collection::vec(0.0f64..1024.0, 21..200)) {
            let mut series = RollingSeries::new(20);
            for (i, v) in values.iter().enumerate() {
                series.append(format!("t{}", i), *v);
                prop_assert!(series.len() <= 20);
            }

            let kept: Vec<f64> = series.iter().map(|p| p.value).collect();
            prop_assert_eq!(kept, values[values.len() - 20..].to_vec());
        }
    }
}
