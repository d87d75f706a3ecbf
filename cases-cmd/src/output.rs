//! Formatting of a rendered view for the terminal.

use cases_data::{ChartSeries, RecordingSink};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `#`-prefixed title and range label, then tab-separated date/value rows
    Text,
    /// `date,value` rows with a header
    Csv,
    /// One JSON object per render
    Json,
}

#[derive(Serialize)]
struct JsonView<'a> {
    title: &'a str,
    label: &'a str,
    series: &'a ChartSeries,
}

/// Write the last view captured by `view` in the requested format.
pub fn write_view(view: &RecordingSink, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let empty = ChartSeries::default();
    let series = view.series.as_ref().unwrap_or(&empty);
    let title = view.title.as_deref().unwrap_or_default();
    let label = view.label.as_deref().unwrap_or_default();

    match format {
        OutputFormat::Text => {
            writeln!(out, "# {}", title)?;
            writeln!(out, "# {}", label)?;
            for (date, value) in series.x.iter().zip(&series.y) {
                writeln!(out, "{}\t{}", date, value)?;
            }
        }
        OutputFormat::Csv => {
            log::info!("{} / {}", title, label);
            let mut wtr = csv::Writer::from_writer(Vec::new());
            wtr.write_record(["date", "value"])?;
            for (date, value) in series.x.iter().zip(&series.y) {
                wtr.write_record([date.as_str(), value.to_string().as_str()])?;
            }
            let bytes = wtr
                .into_inner()
                .map_err(|e| anyhow::anyhow!("failed to flush CSV output: {}", e.error()))?;
            out.write_all(&bytes)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string(&JsonView {
                title,
                label,
                series,
            })?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn view() -> RecordingSink {
        RecordingSink {
            title: Some("Negative cases: X".to_string()),
            series: Some(ChartSeries {
                x: vec!["2020-01-01".to_string(), "2020-03-01".to_string()],
                y: vec![5.0, 9.5],
            }),
            label: Some("Date Range: 2020-01-01 . . . 2020-03-01".to_string()),
            renders: 1,
        }
    }

    fn write(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_view(&view(), format, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_output() {
        assert_eq!(
            write(OutputFormat::Text),
            "# Negative cases: X\n# Date Range: 2020-01-01 . . . 2020-03-01\n2020-01-01\t5\n2020-03-01\t9.5\n"
        );
    }

    #[test]
    fn csv_output() {
        assert_eq!(
            write(OutputFormat::Csv),
            "date,value\n2020-01-01,5\n2020-03-01,9.5\n"
        );
    }

    #[test]
    fn json_output() {
        assert_eq!(
            write(OutputFormat::Json),
            concat!(
                r#"{"title":"Negative cases: X","label":"Date Range: 2020-01-01 . . . 2020-03-01","#,
                r#""series":{"x":["2020-01-01","2020-03-01"],"y":[5.0,9.5]}}"#,
                "\n"
            )
        );
    }

    #[test]
    fn empty_view_prints_headers_only() {
        let mut out = Vec::new();
        write_view(&RecordingSink::default(), OutputFormat::Csv, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "date,value\n");
    }
}
