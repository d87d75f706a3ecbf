//! `regions` and `months`: list the lookups the widgets are built from.

use cases_data::Dataset;
use cases_utils::dates::format_date;
use std::io::Write;

/// Print one state per line in first-seen order.
pub fn run_regions(dataset: &Dataset, out: &mut impl Write) -> anyhow::Result<()> {
    for region in dataset.regions() {
        writeln!(out, "{}", region)?;
    }
    Ok(())
}

/// Print `index<TAB>YYYY-MM-DD` for every month bucket.
pub fn run_months(dataset: &Dataset, out: &mut impl Write) -> anyhow::Result<()> {
    for (index, month) in dataset.month_buckets().iter().enumerate() {
        writeln!(out, "{}\t{}", index, format_date(month))?;
    }
    Ok(())
}
