//! Render sink that drives the D3.js chart and the label signals.

use crate::js_bridge::{self, ChartConfig};
use crate::state::AppState;
use cases_data::{ChartSeries, RenderSink};
use dioxus::prelude::*;

/// Forwards rendered views to the chart container and the `AppState` signals.
pub struct ChartSink {
    container_id: String,
    state: AppState,
    config: ChartConfig,
}

impl ChartSink {
    pub fn new(container_id: impl Into<String>, state: AppState) -> Self {
        Self {
            container_id: container_id.into(),
            state,
            config: ChartConfig::default(),
        }
    }
}

impl RenderSink for ChartSink {
    fn set_title(&mut self, title: &str) {
        self.config.title = title.to_string();
        self.state.chart_title.set(title.to_string());
    }

    fn set_series(&mut self, series: &ChartSeries) {
        log::info!(
            "rendering {} points into #{}",
            series.y.len(),
            self.container_id
        );
        self.state.point_count.set(series.y.len());
        js_bridge::render_line_chart(&self.container_id, series, &self.config);
    }

    fn set_range_label(&mut self, label: &str) {
        self.state.range_label.set(label.to_string());
    }
}
