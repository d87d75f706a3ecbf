//! Command implementations for the case trends CLI.
//!
//! Every subcommand loads the dataset named by [`DatasetArgs`] and writes its
//! report to the given writer, so the commands can be exercised without a
//! terminal.

use cases_data::{
    Dataset, InvalidRowPolicy, LoadOptions, Metric, Selection, SelectionError, SelectionEvent,
};
use clap::{Args, Subcommand};
use std::io::Write;
use std::path::PathBuf;

pub mod inspect;
pub mod output;
pub mod project;
pub mod replay;

pub use output::OutputFormat;

/// Where the dataset comes from and how strictly it is cleaned.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Path to the dataset CSV (columns State, Date, Positive, optional Negative)
    #[arg(
        short = 'd',
        long,
        env = "CASES_DATASET",
        default_value = "fixtures/dataset-india.csv",
        global = true
    )]
    pub dataset: PathBuf,

    /// Drop rows with an unparseable date or a blank state instead of failing
    #[arg(long, global = true)]
    pub skip_invalid_rows: bool,
}

impl DatasetArgs {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            invalid_rows: if self.skip_invalid_rows {
                InvalidRowPolicy::Skip
            } else {
                InvalidRowPolicy::Reject
            },
        }
    }

    pub fn load(&self) -> anyhow::Result<Dataset> {
        Ok(Dataset::load_with(&self.dataset, self.load_options())?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the states in first-seen order
    Regions,

    /// List the month buckets with their range indices
    Months,

    /// Print the series for one selection
    Project {
        /// State to plot (defaults to the first state in the dataset)
        #[arg(short = 'r', long)]
        region: Option<String>,

        /// Metric to plot: positive or negative
        #[arg(short = 'm', long, default_value = "negative")]
        metric: Metric,

        /// First month index (inclusive)
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Last month index (inclusive); the month count is accepted and means the last month
        #[arg(long)]
        end: Option<usize>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Replay widget events (one per line) and print every re-render
    Replay {
        /// Event script path, or `-` for stdin
        #[arg(short = 'e', long, default_value = "-")]
        events: String,

        /// Output format for each render
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub fn run(source: &DatasetArgs, command: Command, out: &mut impl Write) -> anyhow::Result<()> {
    let dataset = source.load()?;
    match command {
        Command::Regions => inspect::run_regions(&dataset, out),
        Command::Months => inspect::run_months(&dataset, out),
        Command::Project {
            region,
            metric,
            start,
            end,
            format,
        } => project::run_project(
            &dataset,
            &project::ProjectRequest {
                region,
                metric,
                start,
                end,
            },
            format,
            out,
        ),
        Command::Replay { events, format } => replay::run_replay(dataset, &events, format, out),
    }
}

/// Reject user-supplied events the selection transition would treat as bugs.
///
/// Widgets can only emit known regions and in-range handles; the CLI takes
/// arbitrary text, so it checks first and reports a normal error.
pub fn validate_event(dataset: &Dataset, event: &SelectionEvent) -> anyhow::Result<()> {
    Selection::check(event, dataset).map_err(|e| {
        let hint = match e {
            SelectionError::UnknownRegion(_) => "run `regions` to list them",
            _ => "run `months` to list them",
        };
        anyhow::anyhow!("{} ({})", e, hint)
    })
}
