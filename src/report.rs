//! Plain report mode: one line per test, no terminal UI

use std::io::{self, IsTerminal, Write};

use color_eyre::eyre::{Result, WrapErr};
use crossterm::style::Stylize;

use testlens_app::config::Settings;
use testlens_core::{ResultSet, SourceLocator, TestRecord, TestStatus};
use testlens_runner::{load, LoadSource};

/// Load `source` to completion and print the report to stdout
pub async fn run(source: LoadSource, settings: &Settings, only_fail: bool) -> Result<()> {
    let locator = SourceLocator::new(&settings.runner.source_suffix)?;
    let description = source.describe();
    let results = load(source, locator)
        .await
        .wrap_err_with(|| format!("could not load test results from {description}"))?;

    let stdout = io::stdout();
    let colored = stdout.is_terminal();
    let mut out = stdout.lock();
    write_report(&mut out, &results, only_fail, colored)?;
    out.flush()?;
    Ok(())
}

/// Write every record in result order.
///
/// Failed tests are followed by their output, indented by two spaces.
pub fn write_report<W: Write>(
    out: &mut W,
    results: &ResultSet,
    only_fail: bool,
    colored: bool,
) -> io::Result<()> {
    for record in results.iter() {
        if only_fail && !record.status.is_failure() {
            continue;
        }

        write!(out, "* {}: ", record.id)?;
        write_status(out, record.status, colored)?;
        if record.status.is_failure() {
            write_failure_detail(out, record)?;
        } else {
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_status<W: Write>(out: &mut W, status: TestStatus, colored: bool) -> io::Result<()> {
    let label = status.label();
    if !colored {
        return write!(out, "{label}");
    }
    match status {
        TestStatus::Pass => write!(out, "{}", label.green()),
        TestStatus::Fail => write!(out, "{}", label.red().bold()),
        TestStatus::Skip => write!(out, "{}", label.yellow()),
        TestStatus::Unknown => write!(out, "{}", label.dark_grey()),
    }
}

fn write_failure_detail<W: Write>(out: &mut W, record: &TestRecord) -> io::Result<()> {
    match record.location() {
        Some((file, line)) => writeln!(out, " ({file}:{line})")?,
        None => writeln!(out)?,
    }
    for line in record.display_output() {
        writeln!(out, "  {line}")?;
    }
    Ok(())
}
