//! Viewer state (Model in TEA pattern)

use testlens_core::{ResultSet, TestRecord};

use crate::config::UiSettings;
use crate::layout::{content, Geometry};

/// Layout parameters fixed for the lifetime of the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Sidebar width in columns, including its border
    pub sidebar_width: u16,
    /// Lines per scroll-up / scroll-down step
    pub page_size: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::from(&UiSettings::default())
    }
}

impl From<&UiSettings> for LayoutConfig {
    fn from(ui: &UiSettings) -> Self {
        Self {
            sidebar_width: ui.sidebar_width,
            page_size: ui.page_size.max(1),
        }
    }
}

/// Complete viewer state
///
/// Mutated only by [`crate::handler::update`]. The cursor indexes the
/// visible records (all records, or only failures while filtered).
#[derive(Debug, Clone)]
pub struct ViewerState {
    pub records: ResultSet,
    pub cursor: usize,
    pub filter_active: bool,
    pub scroll_offset: usize,
    pub viewport_width: u16,
    pub viewport_height: u16,
    /// False until the first resize; geometry is unknown before that
    pub sized: bool,
    pub loading: bool,
    pub last_error: Option<String>,
    pub layout: LayoutConfig,
    quitting: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl ViewerState {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            records: ResultSet::default(),
            cursor: 0,
            filter_active: false,
            scroll_offset: 0,
            viewport_width: 0,
            viewport_height: 0,
            sized: false,
            loading: true,
            last_error: None,
            layout,
            quitting: false,
        }
    }

    /// Sized, loaded and not failed: navigation input is honoured
    pub fn is_interactive(&self) -> bool {
        self.sized && !self.loading && self.last_error.is_none()
    }

    pub fn load_failed(&self) -> bool {
        self.last_error.is_some()
    }

    // ─────────────────────────────────────────────────────────
    // Visible records
    // ─────────────────────────────────────────────────────────

    pub fn visible_records(&self) -> Vec<&TestRecord> {
        self.records
            .iter()
            .filter(|r| !self.filter_active || r.status.is_failure())
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        if self.filter_active {
            self.records.failed_count()
        } else {
            self.records.len()
        }
    }

    /// Record under the cursor
    pub fn selected(&self) -> Option<&TestRecord> {
        self.records
            .iter()
            .filter(|r| !self.filter_active || r.status.is_failure())
            .nth(self.cursor)
    }

    pub fn last_index(&self) -> usize {
        self.visible_count().saturating_sub(1)
    }

    // ─────────────────────────────────────────────────────────
    // Geometry & scrolling
    // ─────────────────────────────────────────────────────────

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.viewport_width, self.viewport_height, &self.layout)
    }

    /// Total detail-pane lines for the selected record at the current width
    pub fn content_line_count(&self) -> usize {
        self.selected()
            .map(|record| content::detail_lines(record, self.geometry().text_width as usize).len())
            .unwrap_or(0)
    }

    /// Largest scroll offset that still fills the detail pane
    pub fn max_scroll(&self) -> usize {
        // At least one line stays on screen, even with no text rows
        let height = (self.geometry().text_height as usize).max(1);
        self.content_line_count().saturating_sub(height)
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.last_index());
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Move the cursor, resetting scroll when the selection changes
    pub fn select_index(&mut self, index: usize) {
        let index = index.min(self.last_index());
        if index != self.cursor {
            self.cursor = index;
            self.scroll_offset = 0;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
