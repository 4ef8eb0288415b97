//! Message processing: runs update() to a fixed point and dispatches actions

use std::sync::Arc;

use crate::actions::handle_action;
use crate::editor::EditorLauncher;
use crate::handler;
use crate::message::Message;
use crate::state::ViewerState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut ViewerState, message: Message, launcher: &Arc<EditorLauncher>) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, launcher);
        }

        msg = result.message;
    }
}
