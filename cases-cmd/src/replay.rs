//! `replay`: drive a dashboard session from a script of widget events.
//!
//! # Script Format
//!
//! One event per line; blank lines and `#` comments are ignored:
//!
//! ```text
//! metric positive
//! region Kerala
//! range 1 4
//! ```

use crate::output::{write_view, OutputFormat};
use crate::validate_event;
use anyhow::Context;
use cases_data::{Dataset, RecordingSink, SelectionEvent, Session};
use std::io::{Read, Write};
use std::sync::Arc;

pub fn run_replay(
    dataset: Dataset,
    events: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let script = read_script(events)?;
    replay_script(Arc::new(dataset), &script, format, out)?;
    Ok(())
}

fn read_script(source: &str) -> anyhow::Result<String> {
    let mut script = String::new();
    if source == "-" {
        std::io::stdin()
            .read_to_string(&mut script)
            .context("failed to read events from stdin")?;
    } else {
        script = std::fs::read_to_string(source)
            .with_context(|| format!("failed to read events from {}", source))?;
    }
    Ok(script)
}

/// Render the initial selection, then every event in `script`, in order.
///
/// Returns the number of events handled.
pub fn replay_script(
    dataset: Arc<Dataset>,
    script: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut session = Session::start(dataset, RecordingSink::default())?;
    write_view(session.sink(), format, out)?;

    let mut handled = 0;
    for (index, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line_no = index + 1;
        let event: SelectionEvent = line
            .parse()
            .with_context(|| format!("line {}: {:?}", line_no, line))?;
        validate_event(session.dataset(), &event).with_context(|| format!("line {}", line_no))?;
        session.handle(event);
        write_view(session.sink(), format, out)?;
        handled += 1;
    }
    log::info!("replayed {} events", handled);
    Ok(handled)
}
