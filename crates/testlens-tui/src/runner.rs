//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the dashboard:
//! - `run`: sets up the terminal, the loader and the signal handler
//! - `run_loop`: drains background messages, draws, polls terminal input

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;

use testlens_app::config::Settings;
use testlens_app::process::process_message;
use testlens_app::signals::spawn_signal_handler;
use testlens_app::spawn::spawn_loader;
use testlens_app::{EditorLauncher, LayoutConfig, Message, ViewerState};
use testlens_core::prelude::*;
use testlens_core::SourceLocator;
use testlens_runner::LoadSource;

use crate::theme::Theme;
use crate::{event, render, terminal};

/// How the dashboard ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Quit,
    /// The user quit from the load-error screen
    QuitAfterLoadFailure,
}

/// Run the dashboard until the user quits
pub async fn run(project_path: &Path, settings: &Settings, source: LoadSource) -> Result<RunOutcome> {
    // Invalid suffixes are reported before the terminal is taken over
    let locator = SourceLocator::new(&settings.runner.source_suffix)?;

    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    let mut state = ViewerState::new(LayoutConfig::from(&settings.ui));
    let size = term.size()?;

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    msg_tx
        .send(Message::Resize {
            width: size.width,
            height: size.height,
        })
        .await
        .ok();

    let signal_task = spawn_signal_handler(msg_tx.clone());
    info!("Loading results from {}", source.describe());
    let loader_task = spawn_loader(source, locator, msg_tx);

    let launcher = Arc::new(EditorLauncher::from_settings(&settings.editor, project_path));
    debug!("Editor strategies: {:?}", launcher.strategy_names());
    let theme = Theme::from_env();

    let result = run_loop(&mut term, &mut state, msg_rx, &launcher, &theme);

    // Dropping the loader kills a harness that is still running
    loader_task.abort();
    signal_task.abort();
    terminal::restore();

    result?;
    Ok(if state.load_failed() {
        RunOutcome::QuitAfterLoadFailure
    } else {
        RunOutcome::Quit
    })
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut ViewerState,
    mut msg_rx: mpsc::Receiver<Message>,
    launcher: &Arc<EditorLauncher>,
    theme: &Theme,
) -> Result<()> {
    while !state.should_quit() {
        // Loader results, signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, launcher);
        }
        if state.should_quit() {
            break;
        }

        terminal.draw(|frame| render::view(frame, state, theme))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, launcher);
        }
    }

    Ok(())
}
