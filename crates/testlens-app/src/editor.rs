//! Opening a test's source location in an external editor.
//!
//! Each way of opening a file is an [`OpenStrategy`]. The [`EditorLauncher`]
//! tries them in preference order: the configured editor, the IDE whose
//! integrated terminal we run in, the well-known editors, and finally the
//! platform's default opener. Failures are only logged; the viewer never
//! hears back.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{
    detect_parent_ide, editor_config_for_ide, is_command_available, EditorConfig,
    EditorSettings, KNOWN_EDITORS,
};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur when opening a file in an editor.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Editor executable not found in PATH
    #[error("Editor not installed: {0}")]
    NotInstalled(String),

    /// File not found at the specified path
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Failed to execute the editor command
    #[error("Failed to execute editor: {0}")]
    ExecutionFailed(#[from] std::io::Error),

    /// Pattern expanded to nothing
    #[error("Editor command is empty")]
    EmptyCommand,

    /// Path contains suspicious patterns (security check failed)
    #[error("Path rejected for security: {0}")]
    PathRejected(String),

    /// Every strategy failed
    #[error("No editor could open {}:{line}", file.display())]
    Exhausted { file: PathBuf, line: u32 },
}

// ─────────────────────────────────────────────────────────────────────────────
// Strategies
// ─────────────────────────────────────────────────────────────────────────────

/// One way of opening a file at a line
#[cfg_attr(test, mockall::automock)]
pub trait OpenStrategy: Send + Sync {
    /// Human-readable name for logs
    fn name(&self) -> String;

    /// Start the editor; returns once the process is spawned
    fn try_open(&self, file: &Path, line: u32) -> Result<(), EditorError>;
}

/// Runs an editor command built from a pattern like `vim +$LINE $FILE`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStrategy {
    pub command: String,
    pub pattern: String,
    pub display_name: String,
}

impl CommandStrategy {
    pub fn new(
        command: impl Into<String>,
        pattern: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            command: command.into(),
            pattern: pattern.into(),
            display_name: display_name.into(),
        }
    }
}

impl From<EditorConfig> for CommandStrategy {
    fn from(config: EditorConfig) -> Self {
        Self::new(config.command, config.pattern, config.display_name)
    }
}

impl OpenStrategy for CommandStrategy {
    fn name(&self) -> String {
        self.display_name.clone()
    }

    fn try_open(&self, file: &Path, line: u32) -> Result<(), EditorError> {
        let nvim_server = std::env::var("NVIM").unwrap_or_default();
        let argv = substitute_pattern(&self.pattern, &self.command, file, line, &nvim_server);
        let Some((program, args)) = argv.split_first() else {
            return Err(EditorError::EmptyCommand);
        };

        if !is_command_available(program) {
            return Err(EditorError::NotInstalled(program.clone()));
        }

        debug!("Running editor: {}", argv.join(" "));

        // Not waited on; the editor outlives this call
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        Ok(())
    }
}

/// The operating system's "open with default application" command
pub fn platform_opener() -> CommandStrategy {
    if cfg!(target_os = "macos") {
        CommandStrategy::new("open", "open $FILE", "System default (open)")
    } else if cfg!(windows) {
        CommandStrategy::new("cmd", "cmd /C start $FILE", "System default (start)")
    } else {
        CommandStrategy::new("xdg-open", "xdg-open $FILE", "System default (xdg-open)")
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pattern Substitution
// ─────────────────────────────────────────────────────────────────────────────

/// Expand a pattern into an argument vector.
///
/// The pattern is split on whitespace first, so a file path containing
/// spaces stays a single argument.
///
/// # Variables
///
/// - `$EDITOR` - Editor command (may itself contain arguments)
/// - `$FILE` - File path
/// - `$LINE` - Line number
/// - `$NVIM` - Neovim server address
pub fn substitute_pattern(
    pattern: &str,
    editor: &str,
    file_path: &Path,
    line: u32,
    nvim_server: &str,
) -> Vec<String> {
    let file_str = file_path.display().to_string();
    let line_str = line.to_string();

    let mut argv = Vec::new();
    for token in pattern.split_whitespace() {
        if token == "$EDITOR" {
            argv.extend(editor.split_whitespace().map(str::to_string));
            continue;
        }
        argv.push(
            token
                .replace("$EDITOR", editor)
                .replace("$FILE", &file_str)
                .replace("$LINE", &line_str)
                .replace("$NVIM", nvim_server),
        );
    }
    argv
}

// ─────────────────────────────────────────────────────────────────────────────
// Launcher
// ─────────────────────────────────────────────────────────────────────────────

/// Ordered fallback over a list of strategies
pub struct EditorLauncher {
    strategies: Vec<Box<dyn OpenStrategy>>,
    project_root: PathBuf,
}

impl std::fmt::Debug for EditorLauncher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorLauncher")
            .field("strategies", &self.strategy_names())
            .field("project_root", &self.project_root)
            .finish()
    }
}

impl EditorLauncher {
    pub fn new(strategies: Vec<Box<dyn OpenStrategy>>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            strategies,
            project_root: project_root.into(),
        }
    }

    /// Preference order: configured editor, parent IDE, known editors,
    /// platform opener. Duplicate command/pattern pairs are tried once.
    pub fn from_settings(settings: &EditorSettings, project_root: impl Into<PathBuf>) -> Self {
        let mut candidates: Vec<CommandStrategy> = Vec::new();

        if let Some((command, pattern)) = settings.configured() {
            candidates.push(CommandStrategy::new(command.clone(), pattern, command));
        }
        if let Some(ide) = detect_parent_ide() {
            debug!("Running inside {}", ide.display_name());
            candidates.push(editor_config_for_ide(ide).into());
        }
        candidates.extend(KNOWN_EDITORS.iter().copied().map(CommandStrategy::from));
        candidates.push(platform_opener());

        let mut unique: Vec<CommandStrategy> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let seen = unique
                .iter()
                .any(|s| s.command == candidate.command && s.pattern == candidate.pattern);
            if !seen {
                unique.push(candidate);
            }
        }

        let strategies = unique
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn OpenStrategy>)
            .collect();
        Self::new(strategies, project_root)
    }

    pub fn strategy_names(&self) -> Vec<String> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Open `file` at `line` with the first strategy that succeeds.
    ///
    /// Returns the name of the strategy that opened the file.
    pub fn open(&self, file: &Path, line: u32) -> Result<String, EditorError> {
        let raw = file.to_string_lossy();
        if sanitize_path(&raw).is_none() {
            return Err(EditorError::PathRejected(raw.into_owned()));
        }

        let resolved = resolve_file_path(file, &self.project_root);
        if !resolved.exists() {
            return Err(EditorError::FileNotFound(resolved));
        }

        for strategy in &self.strategies {
            match strategy.try_open(&resolved, line) {
                Ok(()) => {
                    info!(
                        "Opened {}:{} with {}",
                        resolved.display(),
                        line,
                        strategy.name()
                    );
                    return Ok(strategy.name());
                }
                Err(e) => debug!("{} could not open file: {}", strategy.name(), e),
            }
        }

        Err(EditorError::Exhausted {
            file: resolved,
            line,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Absolute paths are kept; relative ones are joined to the project root.
pub fn resolve_file_path(path: &Path, project_root: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Security
// ─────────────────────────────────────────────────────────────────────────────

/// Sanitize file path for security.
///
/// Prevents path traversal and other injection attacks by rejecting paths with:
/// - `..` (path traversal)
/// - Null bytes
/// - Shell metacharacters
///
/// # Returns
///
/// `Some(path)` if the path is safe, `None` if it contains suspicious patterns.
pub fn sanitize_path(path: &str) -> Option<String> {
    if path.contains("..") || path.contains('\0') {
        return None;
    }

    let dangerous_chars = ['|', '&', ';', '$', '`', '(', ')', '{', '}', '<', '>'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return None;
    }

    Some(path.to_string())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
