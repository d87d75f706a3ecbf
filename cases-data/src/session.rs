//! The reactive loop: event, transition, project, render.

use crate::dataset::Dataset;
use crate::engine::project;
use crate::error::ConfigurationError;
use crate::selection::{Selection, SelectionEvent};
use crate::view::{render, RenderSink};
use std::sync::Arc;

/// One dashboard session.
///
/// Owns its selection and its sink; the dataset is a shared read-only
/// snapshot. Each call to [`Session::handle`] runs to completion, render
/// included, before returning.
pub struct Session<S: RenderSink> {
    dataset: Arc<Dataset>,
    selection: Selection,
    sink: S,
}

impl<S: RenderSink> Session<S> {
    /// Build the initial selection and render it once.
    pub fn start(dataset: Arc<Dataset>, sink: S) -> Result<Self, ConfigurationError> {
        let selection = Selection::initial(&dataset)?;
        let mut session = Self {
            dataset,
            selection,
            sink,
        };
        session.refresh();
        Ok(session)
    }

    /// Apply a widget event and re-render.
    pub fn handle(&mut self, event: SelectionEvent) {
        log::debug!("handling {:?}", event);
        self.selection = self.selection.apply(event, &self.dataset);
        self.refresh();
    }

    fn refresh(&mut self) {
        let projection = project(&self.dataset, &self.selection);
        render(&projection, &self.selection, &mut self.sink);
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Metric, MonthRange};
    use crate::view::RecordingSink;
    use pretty_assertions::assert_eq;

    const CSV: &str = "\
Date,State,Negative,Positive
2020-01-01,X,5,50
2020-02-01,W,1,10
2020-03-01,X,9,90
";

    fn start() -> Session<RecordingSink> {
        let dataset = Arc::new(Dataset::from_csv_str(CSV).unwrap());
        Session::start(dataset, RecordingSink::default()).unwrap()
    }

    #[test]
    fn start_renders_initial_selection() {
        let session = start();
        assert_eq!(session.selection().region, "X");
        assert_eq!(session.selection().range, MonthRange::new(0, 2));
        let sink = session.sink();
        assert_eq!(sink.renders, 1);
        assert_eq!(sink.series.as_ref().unwrap().y, vec![5.0, 9.0]);
        assert_eq!(sink.label.as_deref(), Some("Date Range: 2020-01-01 . . . 2020-03-01"));
    }

    #[test]
    fn each_event_rerenders() {
        let mut session = start();
        session.handle(SelectionEvent::MetricChanged(Metric::Positive));
        assert_eq!(session.sink().series.as_ref().unwrap().y, vec![50.0, 90.0]);
        assert_eq!(session.sink().title.as_deref(), Some("Positive cases: X"));

        session.handle(SelectionEvent::RangeChanged { start: 0, end: 1 });
        assert_eq!(session.sink().series.as_ref().unwrap().y, vec![50.0]);
        assert_eq!(
            session.sink().label.as_deref(),
            Some("Date Range: 2020-01-01 . . . 2020-02-01")
        );

        session.handle(SelectionEvent::RegionChanged("W".into()));
        assert_eq!(session.sink().series.as_ref().unwrap().y, vec![10.0]);
        assert_eq!(session.into_sink().renders, 4);
    }

    #[test]
    fn raw_one_past_end_is_clamped_for_chart_and_label() {
        let mut session = start();
        session.handle(SelectionEvent::RangeChanged { start: 0, end: 3 });
        assert_eq!(session.selection().range, MonthRange::new(0, 3));
        let sink = session.sink();
        assert_eq!(sink.label.as_deref(), Some("Date Range: 2020-01-01 . . . 2020-03-01"));
        assert_eq!(
            sink.series.as_ref().unwrap().x,
            vec!["2020-01-01".to_string(), "2020-03-01".to_string()]
        );
    }

    #[test]
    fn sessions_share_the_dataset_but_not_the_selection() {
        let dataset = Arc::new(Dataset::from_csv_str(CSV).unwrap());
        let mut first = Session::start(Arc::clone(&dataset), RecordingSink::default()).unwrap();
        let second = Session::start(Arc::clone(&dataset), RecordingSink::default()).unwrap();
        first.handle(SelectionEvent::RegionChanged("W".into()));
        assert_eq!(first.selection().region, "W");
        assert_eq!(second.selection().region, "X");
        assert!(Arc::ptr_eq(first.dataset(), second.dataset()));
    }

    #[test]
    fn start_fails_without_regions() {
        let dataset = Arc::new(Dataset::from_csv_str("Date,State,Positive\n").unwrap());
        let err = Session::start(dataset, RecordingSink::default()).err();
        assert_eq!(err, Some(ConfigurationError::NoRegions));
    }
}
