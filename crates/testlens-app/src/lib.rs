//! testlens-app - Viewer state and orchestration for testlens
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! dashboard: a pure [`handler::update`] over [`ViewerState`], a pure layout
//! engine turning that state into styled lines, configuration loading, and
//! the editor launcher behind [`UpdateAction::OpenInEditor`].

pub mod actions;
pub mod config;
pub mod editor;
pub mod handler;
pub mod input_key;
pub mod layout;
pub mod message;
pub mod process;
pub mod signals;
pub mod spawn;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export primary types
pub use editor::{EditorError, EditorLauncher, OpenStrategy};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::{InputKey, MouseInput};
pub use layout::{build_screen, Screen};
pub use message::Message;
pub use state::{LayoutConfig, ViewerState};
