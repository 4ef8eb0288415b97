//! Mouse event handlers

use crate::input_key::MouseInput;
use crate::message::Message;
use crate::state::ViewerState;

/// Convert mouse events to messages; ignored until the dashboard is up
pub fn handle_mouse(state: &ViewerState, input: MouseInput) -> Option<Message> {
    if !state.is_interactive() {
        return None;
    }
    Some(match input {
        MouseInput::WheelUp => Message::WheelUp,
        MouseInput::WheelDown => Message::WheelDown,
        MouseInput::LeftClick { column, row } => Message::Click { column, row },
    })
}
