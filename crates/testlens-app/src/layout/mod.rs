//! Pure layout engine
//!
//! Turns a [`ViewerState`] into a [`Screen`]: styled text lines grouped by
//! region, with every wrapping, windowing and pagination decision already
//! made. The TUI crate only maps [`Role`]s to colours and writes the lines
//! into the frame, so everything here is testable without a terminal.

pub mod content;
pub mod geometry;
pub mod sidebar;
pub mod status;
pub mod wrap;

pub use geometry::Geometry;
pub use wrap::{wrap_name, wrap_text};

use testlens_core::TestStatus;
use unicode_width::UnicodeWidthStr;

use crate::state::ViewerState;

// ─────────────────────────────────────────────────────────────────────────────
// Styled text
// ─────────────────────────────────────────────────────────────────────────────

/// Semantic style of a span; the theme decides what it looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Text,
    Title,
    Muted,
    Selected,
    Pass,
    Fail,
    Skip,
    Pending,
    Link,
    Indicator,
    Success,
    Error,
    Loading,
}

impl Role {
    pub fn for_status(status: TestStatus) -> Self {
        match status {
            TestStatus::Pass => Role::Pass,
            TestStatus::Fail => Role::Fail,
            TestStatus::Skip => Role::Skip,
            TestStatus::Unknown => Role::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub role: Role,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

/// One terminal row worth of spans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    pub fn new(spans: Vec<StyledSpan>) -> Self {
        Self { spans }
    }

    pub fn plain(text: impl Into<String>, role: Role) -> Self {
        Self::new(vec![StyledSpan::new(text, role)])
    }

    pub fn blank() -> Self {
        Self::default()
    }

    /// Concatenated text of all spans
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width in terminal columns
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.width()).sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Screen
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// No resize seen yet
    Initializing,
    /// Harness still running
    Loading,
    LoadFailed,
    NoTests,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Centered message filling the whole viewport
    Placeholder {
        kind: PlaceholderKind,
        lines: Vec<StyledLine>,
    },
    Dashboard(Dashboard),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub geometry: Geometry,
    pub sidebar: sidebar::SidebarView,
    pub content: content::ContentView,
    pub status: StyledLine,
}

/// Lay out the whole viewport for the current state
pub fn build_screen(state: &ViewerState) -> Screen {
    if !state.sized {
        return placeholder(
            PlaceholderKind::Initializing,
            vec![StyledLine::plain("Initializing...", Role::Loading)],
        );
    }

    if state.loading {
        return placeholder(
            PlaceholderKind::Loading,
            vec![
                StyledLine::plain("Running tests...", Role::Loading),
                StyledLine::blank(),
                StyledLine::plain(
                    "This may take a moment depending on your test suite",
                    Role::Muted,
                ),
            ],
        );
    }

    if let Some(message) = &state.last_error {
        return placeholder(
            PlaceholderKind::LoadFailed,
            vec![
                StyledLine::plain(format!("Error: {message}"), Role::Error),
                StyledLine::blank(),
                StyledLine::plain("Press q to quit", Role::Muted),
            ],
        );
    }

    if state.records.is_empty() {
        return placeholder(
            PlaceholderKind::NoTests,
            vec![
                StyledLine::plain("No tests found.", Role::Text),
                StyledLine::blank(),
                StyledLine::plain("Press q to quit.", Role::Muted),
            ],
        );
    }

    let geometry = state.geometry();
    Screen::Dashboard(Dashboard {
        geometry,
        sidebar: sidebar::build(state, &geometry),
        content: content::build(state, &geometry),
        status: status::build(state, geometry.width as usize),
    })
}

fn placeholder(kind: PlaceholderKind, lines: Vec<StyledLine>) -> Screen {
    Screen::Placeholder { kind, lines }
}
