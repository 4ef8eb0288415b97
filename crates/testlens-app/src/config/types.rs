//! Configuration types for `.testlens/config.toml`

use serde::{Deserialize, Serialize};
use testlens_core::DEFAULT_SOURCE_SUFFIX;

/// Narrowest sidebar that still fits the cursor, icon and a few name columns
pub const MIN_SIDEBAR_WIDTH: u16 = 12;

/// Application settings (.testlens/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub runner: RunnerSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub editor: EditorSettings,
}

// ─────────────────────────────────────────────────────────────────────────────
// Runner Settings
// ─────────────────────────────────────────────────────────────────────────────

/// How the test harness is invoked
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RunnerSettings {
    /// Harness executable
    #[serde(default = "default_command")]
    pub command: String,

    /// Arguments that make the harness emit JSON events
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// Suffix of source files referenced in test output (e.g. ".go", ".rs")
    #[serde(default = "default_source_suffix")]
    pub source_suffix: String,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: default_args(),
            source_suffix: default_source_suffix(),
        }
    }
}

pub(crate) fn default_command() -> String {
    "go".to_string()
}

fn default_args() -> Vec<String> {
    vec!["test".to_string(), "-json".to_string()]
}

fn default_source_suffix() -> String {
    DEFAULT_SOURCE_SUFFIX.to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// UI Settings
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Sidebar width in columns, including its border
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Lines moved per scroll-up / scroll-down in the detail pane
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            page_size: default_page_size(),
        }
    }
}

fn default_sidebar_width() -> u16 {
    30
}

fn default_page_size() -> usize {
    10
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Editor integration settings for opening a failing test's source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorSettings {
    /// Editor command or name (e.g., "code", "zed", "nvim").
    /// If empty, only the detected and well-known editors are tried.
    #[serde(default)]
    pub command: String,

    /// Pattern for opening a file at a line.
    /// Variables: $EDITOR, $FILE, $LINE
    #[serde(default = "default_open_pattern")]
    pub open_pattern: String,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            command: String::new(),
            open_pattern: default_open_pattern(),
        }
    }
}

pub(crate) fn default_open_pattern() -> String {
    "$EDITOR $FILE:$LINE".to_string()
}

/// IDE whose integrated terminal we are running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentIde {
    VSCode,
    VSCodeInsiders,
    Cursor,
    Zed,
    IntelliJ,
    Neovim,
}

impl ParentIde {
    pub fn display_name(&self) -> &'static str {
        match self {
            ParentIde::VSCode => "VS Code",
            ParentIde::VSCodeInsiders => "VS Code Insiders",
            ParentIde::Cursor => "Cursor",
            ParentIde::Zed => "Zed",
            ParentIde::IntelliJ => "IntelliJ IDEA",
            ParentIde::Neovim => "Neovim",
        }
    }
}
