//! Selection state and the events that transition it.

use crate::dataset::Dataset;
use crate::error::{ConfigurationError, EventParseError, SelectionError};
use crate::models::{Metric, MonthRange};
use std::str::FromStr;

/// The user's current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub region: String,
    pub metric: Metric,
    pub range: MonthRange,
}

/// A change notification from one of the three widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    RegionChanged(String),
    MetricChanged(Metric),
    /// Raw handle positions; `end` may equal the bucket count.
    RangeChanged { start: usize, end: usize },
}

impl Selection {
    /// The first region, the `Negative` metric and the full month range.
    pub fn initial(dataset: &Dataset) -> Result<Self, ConfigurationError> {
        let region = dataset
            .regions()
            .first()
            .ok_or(ConfigurationError::NoRegions)?
            .clone();
        let last = dataset
            .month_buckets()
            .len()
            .checked_sub(1)
            .ok_or(ConfigurationError::NoMonths)?;
        Ok(Self {
            region,
            metric: Metric::default(),
            range: MonthRange::new(0, last),
        })
    }

    /// Check whether `dataset` can accept `event`.
    ///
    /// Regions must be known and the range must satisfy
    /// `start <= end <= month_buckets().len()`.
    pub fn check(event: &SelectionEvent, dataset: &Dataset) -> Result<(), SelectionError> {
        match event {
            SelectionEvent::RegionChanged(region) => {
                if !dataset.contains_region(region) {
                    return Err(SelectionError::UnknownRegion(region.clone()));
                }
            }
            SelectionEvent::MetricChanged(_) => {}
            SelectionEvent::RangeChanged { start, end } => {
                let count = dataset.month_buckets().len();
                if start > end {
                    return Err(SelectionError::ReversedRange {
                        start: *start,
                        end: *end,
                    });
                }
                if *end > count {
                    return Err(SelectionError::EndOutOfRange { end: *end, count });
                }
            }
        }
        Ok(())
    }

    /// Apply one widget event, returning the next selection.
    ///
    /// Events carry values the widgets were built from, so an event that
    /// fails [`Selection::check`] means the wiring is wrong and panics.
    pub fn apply(&self, event: SelectionEvent, dataset: &Dataset) -> Self {
        if let Err(e) = Self::check(&event, dataset) {
            panic!("{e}");
        }
        let mut next = self.clone();
        match event {
            SelectionEvent::RegionChanged(region) => next.region = region,
            SelectionEvent::MetricChanged(metric) => next.metric = metric,
            SelectionEvent::RangeChanged { start, end } => {
                next.range = MonthRange::new(start, end);
            }
        }
        next
    }
}

/// Parses `region <name>`, `metric <positive|negative>` or `range <start> <end>`.
impl FromStr for SelectionEvent {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, rest) = match s.split_once(char::is_whitespace) {
            Some((kind, rest)) => (kind, rest.trim()),
            None => (s, ""),
        };
        match kind.to_ascii_lowercase().as_str() {
            "" => Err(EventParseError::Empty),
            "region" => {
                if rest.is_empty() {
                    return Err(EventParseError::MissingArgument("region name"));
                }
                Ok(SelectionEvent::RegionChanged(rest.to_string()))
            }
            "metric" => {
                if rest.is_empty() {
                    return Err(EventParseError::MissingArgument("metric name"));
                }
                Ok(SelectionEvent::MetricChanged(rest.parse()?))
            }
            "range" => {
                let mut parts = rest.split_whitespace();
                let start = parse_index(parts.next(), "range start")?;
                let end = parse_index(parts.next(), "range end")?;
                Ok(SelectionEvent::RangeChanged { start, end })
            }
            other => Err(EventParseError::UnknownKind(other.to_string())),
        }
    }
}

fn parse_index(raw: Option<&str>, what: &'static str) -> Result<usize, EventParseError> {
    let raw = raw.ok_or(EventParseError::MissingArgument(what))?;
    raw.parse()
        .map_err(|_| EventParseError::InvalidIndex(raw.to_string()))
}
