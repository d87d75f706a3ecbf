//! Error types for loading the dataset and driving a selection.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while reading and cleaning the dataset.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("failed to read dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("line {line}: unparseable date {value:?}")]
    InvalidDate { line: u64, value: String },

    #[error("line {line}: region is blank")]
    MissingRegion { line: u64 },
}

/// Errors raised when the dataset cannot seed an initial selection.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("dataset has no regions to select")]
    NoRegions,

    #[error("dataset has no month buckets to select")]
    NoMonths,
}

/// An event the current dataset cannot accept.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("region {0:?} is not in the dataset")]
    UnknownRegion(String),

    #[error("month range start {start} is past its end {end}")]
    ReversedRange { start: usize, end: usize },

    #[error("month range end {end} is beyond the {count} month buckets")]
    EndOutOfRange { end: usize, count: usize },
}

/// Errors parsing a textual selection event such as `range 0 3`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EventParseError {
    #[error("empty event")]
    Empty,

    #[error("unknown event kind {0:?} (expected region, metric or range)")]
    UnknownKind(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("invalid range index {0:?}")]
    InvalidIndex(String),

    #[error("unknown metric {0:?} (expected positive or negative)")]
    UnknownMetric(String),
}
