//! Plain data types shared by the loader, the engine and the view binding.

use crate::error::EventParseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One cleaned row of the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub region: String,
    pub date: NaiveDate,
    pub positive: f64,
    pub negative: f64,
}

impl Record {
    /// The value of the numeric field named by `metric`.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Positive => self.positive,
            Metric::Negative => self.negative,
        }
    }
}

/// Which numeric column a projection reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Negative,
    Positive,
}

impl Metric {
    /// Widget option order.
    pub const ALL: [Metric; 2] = [Metric::Negative, Metric::Positive];

    /// Lowercase identifier used in events, CLI flags and option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Negative => "negative",
            Metric::Positive => "positive",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Negative => write!(f, "Negative"),
            Metric::Positive => write!(f, "Positive"),
        }
    }
}

impl FromStr for Metric {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "negative" => Ok(Metric::Negative),
            "positive" => Ok(Metric::Positive),
            _ => Err(EventParseError::UnknownMetric(s.trim().to_string())),
        }
    }
}

/// Raw handle positions of the month range control.
///
/// Indices point into the dataset's month buckets. The control spans
/// `[0, N]`, so `end` may be one past the last bucket; the dataset clamps
/// it when resolving a [`DateWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthRange {
    pub start: usize,
    pub end: usize,
}

impl MonthRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A month range resolved against the month buckets, after clamping.
///
/// Both the projected series and the range label are derived from the same
/// window, so they cannot disagree about the active dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start_index: usize,
    pub end_index: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Inclusive on both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A single (date, value) pair of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}
