//! Shared utility functions for the case trends crates.

/// Date utility functions
pub mod dates {
    use crate::error::DateError;
    use chrono::{Datelike, NaiveDate, NaiveDateTime};

    /// Date-only formats accepted in the `Date` column, tried in order.
    pub const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d", "%m/%d/%Y"];

    /// Date-time formats accepted in the `Date` column. The time part is dropped.
    pub const DATE_TIME_FORMATS: [&str; 3] =
        ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in any of the accepted formats.
    pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DateError(String::from("empty date")));
        }
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(date);
            }
        }
        for format in DATE_TIME_FORMATS {
            if let Ok(date_time) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(date_time.date());
            }
        }
        Err(DateError(format!("unrecognized date {s:?}")))
    }

    /// Truncate a date to the first day of its month.
    pub fn month_start(date: &NaiveDate) -> NaiveDate {
        // Day 1 exists in every month.
        date.with_day(1).unwrap_or(*date)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_date_accepts_other_layouts() {
            let expected = NaiveDate::from_ymd_opt(2020, 4, 7).unwrap();
            assert_eq!(parse_date("2020/04/07").unwrap(), expected);
            assert_eq!(parse_date("20200407").unwrap(), expected);
            assert_eq!(parse_date("04/07/2020").unwrap(), expected);
            assert_eq!(parse_date(" 2020-04-07 ").unwrap(), expected);
        }

        #[test]
        fn test_parse_date_drops_time() {
            let expected = NaiveDate::from_ymd_opt(2020, 4, 7).unwrap();
            assert_eq!(parse_date("2020-04-07 13:45:00").unwrap(), expected);
            assert_eq!(parse_date("2020-04-07T13:45:00").unwrap(), expected);
        }

        #[test]
        fn test_parse_date_rejects_garbage() {
            assert!(parse_date("").is_err());
            assert!(parse_date("yesterday").is_err());
            assert!(parse_date("2020-13-01").is_err());
        }

        #[test]
        fn test_month_start() {
            let date = NaiveDate::from_ymd_opt(2021, 2, 28).unwrap();
            assert_eq!(month_start(&date), NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
            let first = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
            assert_eq!(month_start(&first), first);
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug)]
    pub struct DateError(pub String);

    impl fmt::Display for DateError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Date error: {}", self.0)
        }
    }

    impl std::error::Error for DateError {}
}
