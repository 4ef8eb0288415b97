//! Settings parser for .testlens/config.toml

use std::path::{Path, PathBuf};

use super::types::{
    default_command, default_open_pattern, EditorSettings, ParentIde, Settings,
    MIN_SIDEBAR_WIDTH,
};
use testlens_core::prelude::*;
use testlens_core::DEFAULT_SOURCE_SUFFIX;

const CONFIG_FILENAME: &str = "config.toml";
const TESTLENS_DIR: &str = ".testlens";

// ─────────────────────────────────────────────────────────────────────────────
// Editor Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Known editor configuration with command and open pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    pub command: &'static str,
    pub pattern: &'static str,
    pub display_name: &'static str,
}

/// Editors tried, in this order, after the configured and parent IDE.
pub const KNOWN_EDITORS: &[EditorConfig] = &[
    EditorConfig {
        command: "zed",
        pattern: "zed $FILE:$LINE",
        display_name: "Zed",
    },
    EditorConfig {
        command: "code",
        pattern: "code --reuse-window --goto $FILE:$LINE",
        display_name: "Visual Studio Code",
    },
    EditorConfig {
        command: "subl",
        pattern: "subl $FILE:$LINE",
        display_name: "Sublime Text",
    },
    EditorConfig {
        command: "atom",
        pattern: "atom $FILE:$LINE",
        display_name: "Atom",
    },
    EditorConfig {
        command: "vim",
        pattern: "vim +$LINE $FILE",
        display_name: "Vim",
    },
    EditorConfig {
        command: "nvim",
        pattern: "nvim +$LINE $FILE",
        display_name: "Neovim",
    },
    EditorConfig {
        command: "emacs",
        pattern: "emacs +$LINE $FILE",
        display_name: "Emacs",
    },
];

/// Detect if running inside an IDE's integrated terminal.
pub fn detect_parent_ide() -> Option<ParentIde> {
    use std::env;

    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        match term_program.as_str() {
            "vscode" => return Some(ParentIde::VSCode),
            "vscode-insiders" => return Some(ParentIde::VSCodeInsiders),
            "cursor" => return Some(ParentIde::Cursor),
            "Zed" => return Some(ParentIde::Zed),
            _ => {}
        }
    }

    if env::var("ZED_TERM").is_ok() {
        return Some(ParentIde::Zed);
    }

    if env::var("VSCODE_IPC_HOOK_CLI").is_ok() {
        return Some(ParentIde::VSCode);
    }

    if let Ok(terminal_emulator) = env::var("TERMINAL_EMULATOR") {
        if terminal_emulator.starts_with("JetBrains") {
            return Some(ParentIde::IntelliJ);
        }
    }

    // Neovim's :terminal exports its server address
    if env::var("NVIM").is_ok() {
        return Some(ParentIde::Neovim);
    }

    None
}

/// Get the editor config for a detected parent IDE.
pub fn editor_config_for_ide(ide: ParentIde) -> EditorConfig {
    match ide {
        ParentIde::VSCode => EditorConfig {
            command: "code",
            pattern: "code --reuse-window --goto $FILE:$LINE",
            display_name: "Visual Studio Code",
        },
        ParentIde::VSCodeInsiders => EditorConfig {
            command: "code-insiders",
            pattern: "code-insiders --reuse-window --goto $FILE:$LINE",
            display_name: "VS Code Insiders",
        },
        ParentIde::Cursor => EditorConfig {
            command: "cursor",
            pattern: "cursor --reuse-window --goto $FILE:$LINE",
            display_name: "Cursor",
        },
        ParentIde::Zed => EditorConfig {
            command: "zed",
            pattern: "zed $FILE:$LINE",
            display_name: "Zed",
        },
        ParentIde::IntelliJ => EditorConfig {
            command: "idea",
            pattern: "idea --line $LINE $FILE",
            display_name: "IntelliJ IDEA",
        },
        ParentIde::Neovim => EditorConfig {
            command: "nvim",
            pattern: "nvim --server $NVIM --remote +$LINE $FILE",
            display_name: "Neovim",
        },
    }
}

/// Find editor config by command name or path (`/usr/bin/nvim` matches `nvim`).
pub fn find_editor_config(cmd: &str) -> Option<EditorConfig> {
    let name = Path::new(cmd)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(cmd);

    KNOWN_EDITORS.iter().find(|e| e.command == name).copied()
}

/// Check if a command is available in PATH.
pub fn is_command_available(cmd: &str) -> bool {
    which::which(cmd).is_ok()
}

// ─────────────────────────────────────────────────────────────────────────────
// EditorSettings Implementation
// ─────────────────────────────────────────────────────────────────────────────

impl EditorSettings {
    /// The explicitly configured editor command and pattern, if any.
    ///
    /// With the default pattern, a known editor's own pattern is used so
    /// e.g. `command = "vim"` becomes `vim +$LINE $FILE`.
    pub fn configured(&self) -> Option<(String, String)> {
        let command = self.command.trim();
        if command.is_empty() {
            return None;
        }

        let pattern = if self.open_pattern == default_open_pattern() {
            find_editor_config(command)
                .map(|e| e.pattern.to_string())
                .unwrap_or_else(|| self.open_pattern.clone())
        } else {
            self.open_pattern.clone()
        };

        Some((command.to_string(), pattern))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Path of the project's config file
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(TESTLENS_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .testlens/config.toml
///
/// Returns default settings if the file doesn't exist or can't be parsed.
/// Out-of-range values are normalised.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let mut settings = match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    settings.normalize();
    settings
}

impl Settings {
    /// Clamp UI values and restore an unusable source suffix
    pub fn normalize(&mut self) {
        if self.ui.sidebar_width < MIN_SIDEBAR_WIDTH {
            warn!(
                "sidebar_width {} is below the minimum, using {}",
                self.ui.sidebar_width, MIN_SIDEBAR_WIDTH
            );
            self.ui.sidebar_width = MIN_SIDEBAR_WIDTH;
        }

        if self.ui.page_size == 0 {
            warn!("page_size must be at least 1");
            self.ui.page_size = 1;
        }

        let suffix = self.runner.source_suffix.trim();
        if suffix.is_empty() || suffix.chars().any(char::is_whitespace) {
            warn!(
                "Invalid source_suffix {:?}, using {}",
                self.runner.source_suffix, DEFAULT_SOURCE_SUFFIX
            );
            self.runner.source_suffix = DEFAULT_SOURCE_SUFFIX.to_string();
        } else if suffix.len() != self.runner.source_suffix.len() {
            self.runner.source_suffix = suffix.to_string();
        }

        if self.runner.command.trim().is_empty() {
            warn!("Empty runner command, using default harness");
            self.runner.command = default_command();
        }
    }
}
