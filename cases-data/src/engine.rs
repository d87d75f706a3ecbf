//! Filter-and-project: (dataset, selection) to an ordered series.

use crate::dataset::Dataset;
use crate::models::{DateWindow, SeriesPoint};
use crate::selection::Selection;
use serde::Serialize;

/// The series for one selection, together with the window it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    window: DateWindow,
    points: Vec<SeriesPoint>,
}

/// Aggregate figures for a non-empty projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub total: f64,
    pub latest: SeriesPoint,
}

impl Projection {
    pub fn window(&self) -> &DateWindow {
        &self.window
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Count, extremes, sum and the last point in dataset order.
    pub fn summary(&self) -> Option<SeriesSummary> {
        let latest = *self.points.last()?;
        let (min, max, total) = self.points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, total), p| (min.min(p.value), max.max(p.value), total + p.value),
        );
        Some(SeriesSummary {
            count: self.points.len(),
            min,
            max,
            total,
            latest,
        })
    }
}

/// Select the records of `selection.region` dated inside the selected month
/// window (inclusive) and read the selected metric from each.
///
/// Output keeps dataset order. A region without records yields an empty
/// projection rather than an error.
pub fn project(dataset: &Dataset, selection: &Selection) -> Projection {
    let window = dataset.resolve_window(selection.range);
    let points: Vec<SeriesPoint> = dataset
        .records()
        .iter()
        .filter(|r| r.region == selection.region && window.contains(r.date))
        .map(|r| SeriesPoint {
            date: r.date,
            value: r.value(selection.metric),
        })
        .collect();
    log::debug!(
        "projected {} {} points for {} between {} and {}",
        points.len(),
        selection.metric.as_str(),
        selection.region,
        window.start,
        window.end
    );
    Projection { window, points }
}
