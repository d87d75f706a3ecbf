//! Dataset store, selection state and filter engine for the case trends dashboard.
//!
//! # Architecture
//!
//! - [`Dataset`]: cleaned records plus `regions` (first-seen order) and
//!   `month_buckets` (first day of each month, ascending). Loaded once and
//!   never mutated.
//! - [`Selection`]: region, metric and raw month-range handle positions.
//!   Changed only through [`Selection::apply`].
//! - [`project`]: pure filter from (dataset, selection) to a [`Projection`].
//! - [`render`]: pushes a projection and its range label into a [`RenderSink`].
//! - [`Session`]: drives the loop one [`SelectionEvent`] at a time.
//!
//! # Usage
//!
//! ```rust
//! use cases_data::{Dataset, RecordingSink, SelectionEvent, Session};
//! use std::sync::Arc;
//!
//! let csv = "Date,State,Negative,Positive\n2020-01-01,X,5,50\n2020-03-01,X,9,90\n";
//! let dataset = Arc::new(Dataset::from_csv_str(csv).unwrap());
//! let mut session = Session::start(dataset, RecordingSink::default()).unwrap();
//! session.handle(SelectionEvent::RangeChanged { start: 0, end: 0 });
//! assert_eq!(
//!     session.sink().label.as_deref(),
//!     Some("Date Range: 2020-01-01 . . . 2020-01-01")
//! );
//! ```

mod dataset;
mod engine;
pub mod error;
mod loader;
pub mod models;
mod selection;
mod session;
mod view;

pub use dataset::Dataset;
pub use engine::{project, Projection, SeriesSummary};
pub use error::{ConfigurationError, DataLoadError, EventParseError, SelectionError};
pub use loader::{InvalidRowPolicy, LoadOptions};
pub use models::{DateWindow, Metric, MonthRange, Record, SeriesPoint};
pub use selection::{Selection, SelectionEvent};
pub use session::Session;
pub use view::{chart_title, range_label, render, ChartSeries, RecordingSink, RenderSink};
