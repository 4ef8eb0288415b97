//! Abstract input events, independent of terminal library.
//!
//! `InputKey` and `MouseInput` keep testlens-app free of crossterm types.
//! The TUI crate converts crossterm events into these at its boundary.

/// Abstract input key event.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+d, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
}

/// Abstract mouse event; coordinates are 0-based terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseInput {
    WheelUp,
    WheelDown,
    LeftClick { column: u16, row: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('f'), InputKey::Char('f'));
        assert_ne!(InputKey::Char('d'), InputKey::CharCtrl('d'));
    }

    #[test]
    fn test_mouse_input_carries_position() {
        let click = MouseInput::LeftClick { column: 3, row: 7 };
        assert!(matches!(click, MouseInput::LeftClick { row: 7, .. }));
        assert_ne!(click, MouseInput::WheelUp);
    }
}
