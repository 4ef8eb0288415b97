//! testlens-tui - Terminal UI for testlens
//!
//! Draws the screens produced by [`testlens_app::layout`] with ratatui, polls
//! crossterm for input and runs the dashboard event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run, RunOutcome};
pub use theme::Theme;
