//! Loading a complete result set from a harness, file or stdin

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use testlens_core::prelude::*;
use testlens_core::{Aggregator, ResultSet, SourceLocator};

use crate::process::{HarnessCommand, HarnessEvent, HarnessProcess};

/// Buffered harness events between the reader tasks and the aggregator
const HARNESS_EVENT_BUFFER: usize = 256;

/// Where the event stream comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Spawn the harness and read its stdout
    Harness(HarnessCommand),
    /// Replay a recorded event log
    File(PathBuf),
    /// Read the event log from standard input
    Stdin,
}

impl LoadSource {
    pub fn describe(&self) -> String {
        match self {
            LoadSource::Harness(command) => command.display(),
            LoadSource::File(path) => path.display().to_string(),
            LoadSource::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Read the whole event stream from `source` and aggregate it.
///
/// Runs to completion; there is no partial result. Harness exit codes do
/// not count as failures since a harness exits non-zero whenever a test
/// fails.
pub async fn load(source: LoadSource, locator: SourceLocator) -> Result<ResultSet> {
    info!(
        "Loading test events from {} (locating *{} sources)",
        source.describe(),
        locator.suffix()
    );

    match source {
        LoadSource::Harness(command) => load_from_harness(&command, locator).await,
        LoadSource::File(path) => {
            let file = tokio::fs::File::open(&path).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::input_not_found(&path)
                } else {
                    Error::Io(e)
                }
            })?;
            aggregate_lines(BufReader::new(file), locator).await
        }
        LoadSource::Stdin => aggregate_lines(BufReader::new(tokio::io::stdin()), locator).await,
    }
}

/// Aggregate every line of an already-open reader until EOF
pub async fn aggregate_lines<R>(reader: R, locator: SourceLocator) -> Result<ResultSet>
where
    R: AsyncBufRead + Unpin,
{
    let mut aggregator = Aggregator::new(locator);
    let mut segments = reader.split(b'\n');

    while let Some(bytes) = segments
        .next_segment()
        .await
        .context("reading event log")?
    {
        aggregator.feed_line(&String::from_utf8_lossy(&bytes));
    }

    Ok(aggregator.finish())
}

async fn load_from_harness(command: &HarnessCommand, locator: SourceLocator) -> Result<ResultSet> {
    let (tx, mut rx) = mpsc::channel(HARNESS_EVENT_BUFFER);
    // Held until the stream is drained; dropping it early would kill the child.
    let _process = HarnessProcess::spawn(command, tx)?;

    let mut aggregator = Aggregator::new(locator);
    let mut exit_code = None;

    while let Some(event) = rx.recv().await {
        match event {
            HarnessEvent::Stdout(line) => aggregator.feed_line(&line),
            HarnessEvent::Stderr(line) => debug!("harness stderr: {}", line),
            HarnessEvent::Exited { code } => exit_code = code,
        }
    }

    let results = aggregator.finish();

    if results.is_empty() {
        warn!(
            "Harness '{}' produced no test events (exit code {:?})",
            command.display(),
            exit_code
        );
    } else {
        info!(
            "Harness finished with exit code {:?}, {} tests",
            exit_code,
            results.len()
        );
    }

    Ok(results)
}
