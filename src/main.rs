//! testlens - An interactive terminal dashboard for test-run event logs
//!
//! This is the binary entry point: argument parsing, logging bootstrap and
//! the choice between the dashboard and the plain report.

mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{error, info};

use testlens_app::config::{self, Settings};
use testlens_core::logging;
use testlens_runner::{HarnessCommand, LoadSource};
use testlens_tui::RunOutcome;

/// testlens - Browse test results failures-first
#[derive(Parser, Debug)]
#[command(name = "testlens", version)]
#[command(about = "An interactive terminal dashboard for test-run event logs", long_about = None)]
struct Args {
    /// Project directory the harness runs in
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Source file suffix used to locate failures (e.g. ".go")
    #[arg(long, value_name = "SUFFIX")]
    suffix: Option<String>,

    /// Width of the test list in columns
    #[arg(long, value_name = "COLUMNS")]
    sidebar_width: Option<u16>,

    /// Read a recorded event log instead of running the harness ("-" for stdin)
    #[arg(long, value_name = "FILE|-")]
    input: Option<PathBuf>,

    /// Print a plain report instead of starting the dashboard
    #[arg(long)]
    report: bool,

    /// Only list failing tests in the report
    #[arg(long, requires = "report")]
    only_fail: bool,

    /// Extra arguments appended to the harness command
    #[arg(last = true, value_name = "HARNESS_ARGS")]
    harness_args: Vec<String>,
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(suffix) = &self.suffix {
            settings.runner.source_suffix = suffix.clone();
        }
        if let Some(width) = self.sidebar_width {
            settings.ui.sidebar_width = width;
        }
        settings.normalize();
    }

    fn load_source(&self, project_path: &Path, settings: &Settings) -> LoadSource {
        match &self.input {
            Some(path) if path.as_os_str() == "-" => LoadSource::Stdin,
            Some(path) => LoadSource::File(path.clone()),
            None => LoadSource::Harness(
                HarnessCommand::new(&settings.runner.command, project_path)
                    .args(settings.runner.args.iter().cloned())
                    .args(self.harness_args.iter().cloned()),
            ),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init().wrap_err("failed to initialise logging")?;

    let project_path = args
        .path
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut settings = config::load_settings(&project_path);
    args.apply_overrides(&mut settings);
    let source = args.load_source(&project_path, &settings);

    if args.report {
        return report::run(source, &settings, args.only_fail).await;
    }

    match testlens_tui::run(&project_path, &settings, source).await {
        Ok(RunOutcome::Quit) => {
            info!("testlens exiting");
            Ok(())
        }
        Ok(RunOutcome::QuitAfterLoadFailure) => {
            info!("testlens exiting after a load failure");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Fatal error: {}", e);
            Err(e).wrap_err("testlens could not start")
        }
    }
}
