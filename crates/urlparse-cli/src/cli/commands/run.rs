//! Run command: stream NDJSON events through the processor.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use urlparse_core::{Event, UrlParse};

use super::load_processor;

/// Counters reported after a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub events: u64,
    pub failed: u64,
}

/// Load the config, then transform events from `input` (or stdin) to stdout.
pub fn run_pipeline(config: Option<&Path>, input: Option<&Path>) -> Result<()> {
    let processor = load_processor(config)?;
    let stdout = io::stdout();
    let output = BufWriter::new(stdout.lock());

    let summary = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            run_events(&processor, BufReader::new(file), output)?
        }
        None => run_events(&processor, io::stdin().lock(), output)?,
    };

    tracing::info!(
        events = summary.events,
        failed = summary.failed,
        "urlparse run finished"
    );
    Ok(())
}

/// Transform every line of `input` and write one JSON object per line to `output`.
///
/// Events the processor rejects are still written (carrying `error.message` in
/// strict mode). Blank lines are skipped; a line that is not a JSON object aborts.
pub fn run_events<R: BufRead, W: Write>(
    processor: &UrlParse,
    input: R,
    mut output: W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        let mut event: Event = serde_json::from_str(&line)
            .with_context(|| format!("line {}: expected a JSON object", line_no))?;

        summary.events += 1;
        if let Err(err) = processor.run(&mut event) {
            summary.failed += 1;
            tracing::warn!(line = line_no, error = %err, "event left unchanged");
        }

        serde_json::to_writer(&mut output, &event)?;
        output.write_all(b"\n")?;
    }

    output.flush()?;
    Ok(summary)
}
