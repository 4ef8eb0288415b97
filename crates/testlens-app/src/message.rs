//! Message types for the viewer (TEA pattern)

use testlens_core::ResultSet;

use crate::input_key::{InputKey, MouseInput};

/// Everything that can change [`crate::state::ViewerState`]
#[derive(Debug, Clone)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Terminal input
    // ─────────────────────────────────────────────────────────
    /// Raw key press, mapped to an intent by the key handler
    Key(InputKey),
    /// Raw mouse event, mapped to an intent by the mouse handler
    Mouse(MouseInput),
    /// Terminal size changed (also sent once at startup)
    Resize { width: u16, height: u16 },
    /// Poll timeout; no state change
    Tick,

    // ─────────────────────────────────────────────────────────
    // Load lifecycle (delivered once by the loader task)
    // ─────────────────────────────────────────────────────────
    LoadComplete(ResultSet),
    LoadFailed(String),

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    MoveUp,
    MoveDown,
    JumpFirst,
    JumpLast,
    ToggleFilter,
    ScrollUp,
    ScrollDown,
    /// Open the selected test's source location
    Select,

    // ─────────────────────────────────────────────────────────
    // Mouse intents
    // ─────────────────────────────────────────────────────────
    WheelUp,
    WheelDown,
    Click { column: u16, row: u16 },

    Quit,
}
