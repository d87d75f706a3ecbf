//! The immutable dataset and its cached lookups.

use crate::models::{DateWindow, MonthRange, Record};
use cases_utils::dates::month_start;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

/// Cleaned records plus the region and month-bucket lookups derived from them.
///
/// Built once at startup and never mutated afterwards. Share it behind an
/// `Arc` when more than one session needs it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    regions: Vec<String>,
    month_buckets: Vec<NaiveDate>,
}

impl Dataset {
    /// Build a dataset from already-cleaned records, deriving the lookups.
    ///
    /// `regions` keeps first-seen order. `month_buckets` holds the first day
    /// of every month that has at least one record, ascending.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut seen = HashSet::new();
        let mut regions = Vec::new();
        let mut months = BTreeSet::new();
        for record in &records {
            if seen.insert(record.region.as_str()) {
                regions.push(record.region.clone());
            }
            months.insert(month_start(&record.date));
        }
        let month_buckets = months.into_iter().collect();
        Self {
            records,
            regions,
            month_buckets,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    pub fn month_buckets(&self) -> &[NaiveDate] {
        &self.month_buckets
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }

    /// Earliest and latest record dates.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }

    /// Resolve raw range-control indices into concrete boundary dates.
    ///
    /// An index equal to the bucket count (one past the end, which the range
    /// control can report) is clamped to the last bucket. Anything further
    /// out, a reversed range, or a dataset without months is a caller bug.
    pub fn resolve_window(&self, range: MonthRange) -> DateWindow {
        let count = self.month_buckets.len();
        assert!(count > 0, "cannot resolve a month range without month buckets");
        assert!(
            range.start <= range.end,
            "month range start {} is past its end {}",
            range.start,
            range.end
        );
        assert!(
            range.end <= count,
            "month range end {} is beyond the {} month buckets",
            range.end,
            count
        );
        let last = count - 1;
        let start_index = range.start.min(last);
        let end_index = range.end.min(last);
        DateWindow {
            start_index,
            end_index,
            start: self.month_buckets[start_index],
            end: self.month_buckets[end_index],
        }
    }
}
