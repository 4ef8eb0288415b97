//! Cursor, filter and scroll transitions
//!
//! Every handler leaves the cursor inside the visible records and the scroll
//! offset inside the selected record's content.

use std::path::PathBuf;

use tracing::debug;

use crate::layout::sidebar;
use crate::state::ViewerState;

use super::{UpdateAction, UpdateResult};

// ─────────────────────────────────────────────────────────
// Test list
// ─────────────────────────────────────────────────────────

pub fn move_up(state: &mut ViewerState) -> UpdateResult {
    if state.cursor > 0 {
        state.select_index(state.cursor - 1);
    }
    UpdateResult::none()
}

pub fn move_down(state: &mut ViewerState) -> UpdateResult {
    if state.cursor < state.last_index() {
        state.select_index(state.cursor + 1);
    }
    UpdateResult::none()
}

pub fn jump_first(state: &mut ViewerState) -> UpdateResult {
    state.cursor = 0;
    state.scroll_offset = 0;
    UpdateResult::none()
}

pub fn jump_last(state: &mut ViewerState) -> UpdateResult {
    state.cursor = state.last_index();
    state.scroll_offset = 0;
    UpdateResult::none()
}

/// Flip the failures-only filter, keeping the cursor in range
pub fn toggle_filter(state: &mut ViewerState) -> UpdateResult {
    state.filter_active = !state.filter_active;
    state.clamp_cursor();
    state.scroll_offset = 0;
    debug!(
        "Filter {}: {} visible",
        if state.filter_active { "on" } else { "off" },
        state.visible_count()
    );
    UpdateResult::none()
}

// ─────────────────────────────────────────────────────────
// Detail pane
// ─────────────────────────────────────────────────────────

pub fn scroll_down(state: &mut ViewerState) -> UpdateResult {
    state.scroll_offset = state
        .scroll_offset
        .saturating_add(state.layout.page_size)
        .min(state.max_scroll());
    UpdateResult::none()
}

pub fn scroll_up(state: &mut ViewerState) -> UpdateResult {
    state.scroll_offset = state.scroll_offset.saturating_sub(state.layout.page_size);
    UpdateResult::none()
}

/// Ask for the selected test's source to be opened, when it has a location
pub fn select(state: &mut ViewerState) -> UpdateResult {
    match state.selected().and_then(|record| record.location()) {
        Some((file, line)) => UpdateResult::action(UpdateAction::OpenInEditor {
            file: PathBuf::from(file),
            line,
        }),
        None => {
            debug!("Selected test has no source location");
            UpdateResult::none()
        }
    }
}

// ─────────────────────────────────────────────────────────
// Mouse
// ─────────────────────────────────────────────────────────

/// Wheel moves the cursor like the arrow keys but keeps the scroll offset
/// where it still fits the new selection.
pub fn wheel_up(state: &mut ViewerState) -> UpdateResult {
    state.cursor = state.cursor.saturating_sub(1);
    state.clamp_scroll();
    UpdateResult::none()
}

pub fn wheel_down(state: &mut ViewerState) -> UpdateResult {
    state.cursor = (state.cursor + 1).min(state.last_index());
    state.clamp_scroll();
    UpdateResult::none()
}

/// Select the record drawn under a click in the test list
pub fn click(state: &mut ViewerState, column: u16, row: u16) -> UpdateResult {
    let geometry = state.geometry();
    let Some(list_row) = geometry.list_row_at(column, row) else {
        return UpdateResult::none();
    };

    let view = sidebar::build(state, &geometry);
    if let Some(index) = view.record_at(list_row) {
        state.select_index(index);
    }
    UpdateResult::none()
}
