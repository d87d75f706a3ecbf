//! CSV loading and cleaning for the case dataset.
//!
//! # CSV Format
//!
//! Headers are required and matched case-insensitively:
//!
//! ```text
//! Date,State,Negative,Positive
//! 2020-04-01,Kerala,1215,24
//! ```
//!
//! `State`, `Date` and `Positive` must be present; `Negative` is optional and
//! defaults to zero. Other columns are ignored.

use crate::dataset::Dataset;
use crate::error::DataLoadError;
use crate::models::Record;
use cases_utils::dates::parse_date;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// What to do with a row whose date does not parse or whose region is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRowPolicy {
    /// Abort the load with the offending line number.
    #[default]
    Reject,
    /// Drop the row and report the dropped count in the log.
    Skip,
}

/// Knobs for [`Dataset::from_reader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadOptions {
    pub invalid_rows: InvalidRowPolicy,
}

/// Column positions located from the header row.
struct Columns {
    region: usize,
    date: usize,
    positive: usize,
    negative: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, DataLoadError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Ok(Self {
            region: find("State").ok_or(DataLoadError::MissingColumn("State"))?,
            date: find("Date").ok_or(DataLoadError::MissingColumn("Date"))?,
            positive: find("Positive").ok_or(DataLoadError::MissingColumn("Positive"))?,
            negative: find("Negative"),
        })
    }
}

/// Best-effort count coercion: anything that is not a finite, non-negative
/// number is `None`.
fn coerce_number(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
}

impl Dataset {
    /// Load and clean the dataset at `path` with the default options.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        Self::load_with(path, LoadOptions::default())
    }

    /// Load and clean the dataset at `path`.
    pub fn load_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading dataset from {}", path.display());
        Self::from_reader(file, options)
    }

    /// Parse an embedded CSV string with the default options.
    pub fn from_csv_str(csv_data: &str) -> Result<Self, DataLoadError> {
        Self::from_reader(csv_data.as_bytes(), LoadOptions::default())
    }

    /// Parse and clean CSV data from any reader.
    ///
    /// Non-numeric, blank or missing `Positive`/`Negative` cells become zero.
    /// Rows with an unparseable date or a blank region follow
    /// `options.invalid_rows`.
    pub fn from_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Self, DataLoadError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = Columns::locate(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut skipped = 0u32;
        let mut coerced = 0u32;
        for result in rdr.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let region = row.get(columns.region).unwrap_or("");
            if region.is_empty() {
                match options.invalid_rows {
                    InvalidRowPolicy::Reject => return Err(DataLoadError::MissingRegion { line }),
                    InvalidRowPolicy::Skip => {
                        skipped += 1;
                        continue;
                    }
                }
            }

            let raw_date = row.get(columns.date).unwrap_or("");
            let date = match parse_date(raw_date) {
                Ok(date) => date,
                Err(e) => match options.invalid_rows {
                    InvalidRowPolicy::Reject => {
                        return Err(DataLoadError::InvalidDate {
                            line,
                            value: raw_date.to_string(),
                        })
                    }
                    InvalidRowPolicy::Skip => {
                        log::debug!("line {}: {}", line, e);
                        skipped += 1;
                        continue;
                    }
                },
            };

            let positive = coerce_number(row.get(columns.positive)).unwrap_or_else(|| {
                coerced += 1;
                0.0
            });
            let negative = match columns.negative {
                Some(index) => coerce_number(row.get(index)).unwrap_or_else(|| {
                    coerced += 1;
                    0.0
                }),
                None => 0.0,
            };

            records.push(Record {
                region: region.to_string(),
                date,
                positive,
                negative,
            });
        }

        if skipped > 0 {
            log::warn!("dropped {} rows with a blank region or unparseable date", skipped);
        }
        if coerced > 0 {
            log::debug!("coerced {} unusable count cells to zero", coerced);
        }
        if columns.negative.is_none() {
            log::info!("dataset has no Negative column; defaulting it to zero");
        }

        let dataset = Dataset::from_records(records);
        log::info!(
            "loaded {} records across {} regions and {} months",
            dataset.len(),
            dataset.regions().len(),
            dataset.month_buckets().len()
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn skipping() -> LoadOptions {
        LoadOptions {
            invalid_rows: InvalidRowPolicy::Skip,
        }
    }

    #[test]
    fn load_records_from_csv() {
        let csv = "\
Date,State,Negative,Positive,Total
2020-04-01,Kerala,1215,24,1239
2020-04-02,Kerala,1300,30,1330
2020-04-01,Delhi,900,120,1020
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.regions(), ["Kerala", "Delhi"]);
        assert_eq!(dataset.month_buckets(), [date(2020, 4, 1)]);

        let first = &dataset.records()[0];
        assert_eq!(first.region, "Kerala");
        assert_eq!(first.date, date(2020, 4, 1));
        assert_eq!(first.negative, 1215.0);
        assert_eq!(first.positive, 24.0);
    }

    #[test]
    fn headers_match_case_insensitively() {
        let csv = "\
 state ,DATE,positive
Goa,2020-05-03,7
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(dataset.regions(), ["Goa"]);
        assert_eq!(dataset.records()[0].positive, 7.0);
    }

    #[test]
    fn negative_column_is_optional() {
        let csv = "\
State,Date,Positive
Goa,2020-05-03,7
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(dataset.records()[0].negative, 0.0);
    }

    #[test]
    fn missing_required_column_fails() {
        let csv = "State,Positive\nGoa,7\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Date")), "{err}");

        let err = Dataset::from_csv_str("Date,Positive\n2020-01-01,1\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("State")), "{err}");

        let err = Dataset::from_csv_str("Date,State\n2020-01-01,Goa\n").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn("Positive")), "{err}");
    }

    #[test]
    fn empty_input_is_missing_columns() {
        let err = Dataset::from_csv_str("").unwrap_err();
        assert!(matches!(err, DataLoadError::MissingColumn(_)), "{err}");
    }

    #[test]
    fn header_only_loads_empty_dataset() {
        let dataset = Dataset::from_csv_str("Date,State,Negative,Positive\n").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.regions().is_empty());
    }

    #[test]
    fn non_numeric_counts_become_zero() {
        let csv = "\
Date,State,Negative,Positive
2020-04-01,Kerala,,24
2020-04-02,Kerala,n/a,
2020-04-03,Kerala,NaN,12.5
2020-04-04,Kerala,40
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let values: Vec<(f64, f64)> = dataset
            .records()
            .iter()
            .map(|r| (r.negative, r.positive))
            .collect();
        assert_eq!(values, vec![(0.0, 24.0), (0.0, 0.0), (0.0, 12.5), (40.0, 0.0)]);
    }

    #[test]
    fn negative_counts_become_zero() {
        let csv = "\
Date,State,Negative,Positive
2020-04-01,Kerala,-5,3
2020-04-02,Kerala,7,-0.5
2020-04-03,Kerala,0,0
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        let values: Vec<(f64, f64)> = dataset
            .records()
            .iter()
            .map(|r| (r.negative, r.positive))
            .collect();
        assert_eq!(values, vec![(0.0, 3.0), (7.0, 0.0), (0.0, 0.0)]);
    }

    #[test]
    fn invalid_date_rejects_by_default() {
        let csv = "\
Date,State,Negative,Positive
2020-04-01,Kerala,1,2
not-a-date,Kerala,1,2
";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        match err {
            DataLoadError::InvalidDate { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "not-a-date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_rows_are_skipped_when_asked() {
        let csv = "\
Date,State,Negative,Positive
2020-04-01,Kerala,1,2
not-a-date,Kerala,1,2
2020-05-01,,1,2
2020-06-01,Goa,3,4
";
        let dataset = Dataset::from_reader(csv.as_bytes(), skipping()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.regions(), ["Kerala", "Goa"]);
        assert_eq!(dataset.month_buckets(), [date(2020, 4, 1), date(2020, 6, 1)]);
    }

    #[test]
    fn blank_region_rejects_by_default() {
        let csv = "Date,State,Positive\n2020-04-01,,2\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();
        assert!(matches!(err, DataLoadError::MissingRegion { line: 2 }), "{err}");
    }

    #[test]
    fn month_buckets_dedupe_and_sort() {
        let csv = "\
Date,State,Positive
2020-03-31,A,1
2020-01-15,A,1
2020-03-01,B,1
2020-01-01,B,1
2019-12-25,A,1
";
        let dataset = Dataset::from_csv_str(csv).unwrap();
        assert_eq!(
            dataset.month_buckets(),
            [date(2019, 12, 1), date(2020, 1, 1), date(2020, 3, 1)]
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Date,State,Negative,Positive").unwrap();
        writeln!(file, "2020-04-01,Kerala,10,2").unwrap();
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = Dataset::load(&path).unwrap_err();
        assert!(matches!(err, DataLoadError::Io { .. }), "{err}");
        assert!(err.to_string().contains("absent.csv"));
    }
}
