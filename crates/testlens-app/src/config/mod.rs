//! Configuration file parsing for testlens
//!
//! Supports `.testlens/config.toml` in the project directory. Command-line
//! flags are applied on top by the binary.

pub mod settings;
pub mod types;

pub use settings::{
    config_path, detect_parent_ide, editor_config_for_ide, find_editor_config,
    is_command_available, load_settings, EditorConfig, KNOWN_EDITORS,
};
pub use types::*;
