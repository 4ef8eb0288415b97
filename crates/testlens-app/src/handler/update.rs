//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use crate::message::Message;
use crate::state::ViewerState;

use super::{keys::handle_key, mouse::handle_mouse, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut ViewerState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Mouse(input) => match handle_mouse(state, input) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize { width, height } => {
            state.viewport_width = width;
            state.viewport_height = height;
            if !state.sized {
                debug!("First resize: {}x{}", width, height);
                state.sized = true;
            }
            state.clamp_scroll();
            UpdateResult::none()
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Load lifecycle
        // ─────────────────────────────────────────────────────────
        Message::LoadComplete(records) => {
            if !state.loading {
                warn!("Ignoring duplicate load result");
                return UpdateResult::none();
            }
            info!(
                "Loaded {} tests ({} failed)",
                records.len(),
                records.failed_count()
            );
            state.records = records;
            state.loading = false;
            state.cursor = 0;
            state.scroll_offset = 0;
            UpdateResult::none()
        }

        Message::LoadFailed(error) => {
            if !state.loading {
                warn!("Ignoring duplicate load failure: {}", error);
                return UpdateResult::none();
            }
            warn!("Load failed: {}", error);
            state.last_error = Some(error);
            state.loading = false;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation (only meaningful once the dashboard is up)
        // ─────────────────────────────────────────────────────────
        _ if !state.is_interactive() => UpdateResult::none(),

        Message::MoveUp => navigation::move_up(state),
        Message::MoveDown => navigation::move_down(state),
        Message::JumpFirst => navigation::jump_first(state),
        Message::JumpLast => navigation::jump_last(state),
        Message::ToggleFilter => navigation::toggle_filter(state),
        Message::ScrollUp => navigation::scroll_up(state),
        Message::ScrollDown => navigation::scroll_down(state),
        Message::Select => navigation::select(state),
        Message::WheelUp => navigation::wheel_up(state),
        Message::WheelDown => navigation::wheel_down(state),
        Message::Click { column, row } => navigation::click(state, column, row),
    }
}
