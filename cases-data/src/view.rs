//! View binding: push a projection into a chart and a range label.

use crate::engine::Projection;
use crate::models::DateWindow;
use crate::selection::Selection;
use cases_utils::dates::format_date;
use serde::Serialize;

/// Column-oriented series as the line chart consumes it: `{"x": [...], "y": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    /// ISO `YYYY-MM-DD` dates.
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

impl From<&Projection> for ChartSeries {
    fn from(projection: &Projection) -> Self {
        let (x, y) = projection
            .points()
            .iter()
            .map(|p| (format_date(&p.date), p.value))
            .unzip();
        Self { x, y }
    }
}

/// Where a rendered view goes. The dashboard forwards to D3.js and signals,
/// the CLI writes text, tests record.
pub trait RenderSink {
    fn set_title(&mut self, title: &str);
    fn set_series(&mut self, series: &ChartSeries);
    fn set_range_label(&mut self, label: &str);
}

/// `Date Range: <start> . . . <end>` for a resolved window.
pub fn range_label(window: &DateWindow) -> String {
    format!(
        "Date Range: {} . . . {}",
        format_date(&window.start),
        format_date(&window.end)
    )
}

/// `<Metric> cases: <region>`
pub fn chart_title(selection: &Selection) -> String {
    format!("{} cases: {}", selection.metric, selection.region)
}

/// Render `projection` into `sink`. The label comes from the projection's own
/// window, so it always describes exactly the dates that were filtered.
pub fn render<S: RenderSink + ?Sized>(projection: &Projection, selection: &Selection, sink: &mut S) {
    sink.set_title(&chart_title(selection));
    sink.set_series(&ChartSeries::from(projection));
    sink.set_range_label(&range_label(projection.window()));
}

/// A sink that keeps the last rendered view. Handy for tests and previews.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSink {
    pub title: Option<String>,
    pub series: Option<ChartSeries>,
    pub label: Option<String>,
    pub renders: usize,
}

impl RenderSink for RecordingSink {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_series(&mut self, series: &ChartSeries) {
        self.series = Some(series.clone());
        self.renders += 1;
    }

    fn set_range_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::engine::project;
    use crate::models::{Metric, MonthRange, Record};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn scenario() -> Dataset {
        let record = |region: &str, m: u32, value: f64| Record {
            region: region.to_string(),
            date: NaiveDate::from_ymd_opt(2020, m, 1).unwrap(),
            positive: value * 10.0,
            negative: value,
        };
        Dataset::from_records(vec![record("X", 1, 5.0), record("W", 2, 1.0), record("X", 3, 9.0)])
    }

    fn select(region: &str, start: usize, end: usize) -> Selection {
        Selection {
            region: region.to_string(),
            metric: Metric::Negative,
            range: MonthRange::new(start, end),
        }
    }

    fn render_to_sink(data: &Dataset, selection: &Selection) -> RecordingSink {
        let mut sink = RecordingSink::default();
        render(&project(data, selection), selection, &mut sink);
        sink
    }

    #[test]
    fn render_pushes_series_label_and_title() {
        let data = scenario();
        let sink = render_to_sink(&data, &select("X", 0, 2));
        assert_eq!(
            sink.series,
            Some(ChartSeries {
                x: vec!["2020-01-01".to_string(), "2020-03-01".to_string()],
                y: vec![5.0, 9.0],
            })
        );
        assert_eq!(sink.label.as_deref(), Some("Date Range: 2020-01-01 . . . 2020-03-01"));
        assert_eq!(sink.title.as_deref(), Some("Negative cases: X"));
        assert_eq!(sink.renders, 1);
    }

    #[test]
    fn render_empty_series_without_error() {
        let data = scenario();
        let sink = render_to_sink(&data, &select("Y", 0, 2));
        assert_eq!(sink.series, Some(ChartSeries::default()));
        assert_eq!(sink.label.as_deref(), Some("Date Range: 2020-01-01 . . . 2020-03-01"));
    }

    #[test]
    fn label_and_chart_agree_on_clamped_end() {
        let data = scenario();
        let sink = render_to_sink(&data, &select("X", 0, 3));
        assert_eq!(sink.label.as_deref(), Some("Date Range: 2020-01-01 . . . 2020-03-01"));
        let series = sink.series.unwrap();
        assert_eq!(series.x.last().map(String::as_str), Some("2020-03-01"));
    }

    #[test]
    fn label_follows_narrowed_window() {
        let data = scenario();
        let sink = render_to_sink(&data, &select("X", 1, 1));
        assert_eq!(sink.label.as_deref(), Some("Date Range: 2020-02-01 . . . 2020-02-01"));
        assert_eq!(sink.series, Some(ChartSeries::default()));
    }

    #[test]
    fn chart_series_serializes_as_columns() {
        let series = ChartSeries {
            x: vec!["2020-01-01".to_string()],
            y: vec![5.0],
        };
        assert_eq!(
            serde_json::to_string(&series).unwrap(),
            r#"{"x":["2020-01-01"],"y":[5.0]}"#
        );
    }
}
