//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Widgets never write `selection` directly; they call [`AppState::dispatch`].

use cases_data::{Dataset, Selection, SelectionEvent};
use dioxus::prelude::*;
use std::sync::Arc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset (None until loaded)
    pub dataset: Signal<Option<Arc<Dataset>>>,
    /// Current filter (None until the dataset is loaded)
    pub selection: Signal<Option<Selection>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Title of the last rendered chart
    pub chart_title: Signal<String>,
    /// Label of the last rendered date range
    pub range_label: Signal<String>,
    /// Number of points in the last rendered series
    pub point_count: Signal<usize>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            selection: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            chart_title: Signal::new(String::new()),
            range_label: Signal::new(String::new()),
            point_count: Signal::new(0),
        }
    }

    /// Install a freshly loaded dataset and its initial selection.
    pub fn install(&mut self, dataset: Arc<Dataset>, selection: Selection) {
        self.dataset.set(Some(dataset));
        self.selection.set(Some(selection));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    /// Record a fatal startup error.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Run one widget event through the selection transition.
    ///
    /// Events that arrive before the dataset is installed are dropped.
    pub fn dispatch(&mut self, event: SelectionEvent) {
        let Some(dataset) = self.dataset.peek().clone() else {
            log::warn!("ignoring {:?}: dataset not loaded", event);
            return;
        };
        let Some(current) = self.selection.peek().clone() else {
            return;
        };
        let next = current.apply(event, &dataset);
        if next != current {
            self.selection.set(Some(next));
        }
    }

    /// Number of month buckets, i.e. the upper bound of the range control.
    pub fn month_count(&self) -> usize {
        self.dataset
            .read()
            .as_ref()
            .map(|d| d.month_buckets().len())
            .unwrap_or(0)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
