//! Key event handlers for each viewer phase

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::ViewerState;

/// Convert key events to messages based on the current phase
pub fn handle_key(state: &ViewerState, key: InputKey) -> Option<Message> {
    if state.is_interactive() {
        handle_key_dashboard(key)
    } else {
        handle_key_waiting(key)
    }
}

/// Initializing, loading, load failed: only quitting is possible
fn handle_key_waiting(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_dashboard(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Test list
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::JumpFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::JumpLast),
        InputKey::Char('f') => Some(Message::ToggleFilter),
        InputKey::Enter => Some(Message::Select),

        // Detail pane
        InputKey::PageDown | InputKey::CharCtrl('d') => Some(Message::ScrollDown),
        InputKey::PageUp | InputKey::CharCtrl('u') => Some(Message::ScrollUp),

        _ => None,
    }
}
