//! Action handlers: UpdateAction dispatch

use std::sync::Arc;

use tracing::{debug, warn};

use crate::editor::EditorLauncher;
use crate::handler::UpdateAction;

/// Execute an action without blocking the event loop
pub fn handle_action(action: UpdateAction, launcher: &Arc<EditorLauncher>) {
    match action {
        UpdateAction::OpenInEditor { file, line } => {
            let launcher = Arc::clone(launcher);
            // Fire-and-forget; the outcome never reaches the viewer state
            tokio::task::spawn_blocking(move || match launcher.open(&file, line) {
                Ok(editor) => debug!("Opened {}:{} in {}", file.display(), line, editor),
                Err(e) => warn!("Could not open {}:{}: {}", file.display(), line, e),
            });
        }
    }
}
