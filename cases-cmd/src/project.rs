//! `project`: print the series for a single selection.

use crate::output::{write_view, OutputFormat};
use crate::validate_event;
use cases_data::{project, render, Dataset, Metric, RecordingSink, Selection, SelectionEvent};
use cases_utils::dates::format_date;
use std::io::Write;

/// A selection as given on the command line; unset fields keep their initial values.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRequest {
    pub region: Option<String>,
    pub metric: Metric,
    pub start: usize,
    pub end: Option<usize>,
}

/// Turn a request into a selection by replaying it as widget events.
pub fn build_selection(dataset: &Dataset, request: &ProjectRequest) -> anyhow::Result<Selection> {
    let initial = Selection::initial(dataset)?;
    let events = [
        SelectionEvent::RegionChanged(
            request
                .region
                .clone()
                .unwrap_or_else(|| initial.region.clone()),
        ),
        SelectionEvent::MetricChanged(request.metric),
        SelectionEvent::RangeChanged {
            start: request.start,
            end: request.end.unwrap_or(initial.range.end),
        },
    ];
    let mut selection = initial;
    for event in events {
        validate_event(dataset, &event)?;
        selection = selection.apply(event, dataset);
    }
    Ok(selection)
}

pub fn run_project(
    dataset: &Dataset,
    request: &ProjectRequest,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let selection = build_selection(dataset, request)?;
    let projection = project(dataset, &selection);
    log::info!(
        "{} points for {} ({})",
        projection.len(),
        selection.region,
        selection.metric.as_str()
    );

    let mut view = RecordingSink::default();
    render(&projection, &selection, &mut view);
    write_view(&view, format, out)?;

    if format == OutputFormat::Text {
        match projection.summary() {
            Some(s) => writeln!(
                out,
                "# {} points; min {}, max {}, total {}, latest {} = {}",
                s.count,
                s.min,
                s.max,
                s.total,
                format_date(&s.latest.date),
                s.latest.value
            )?,
            None => writeln!(out, "# no data for this selection")?,
        }
    }
    Ok(())
}
