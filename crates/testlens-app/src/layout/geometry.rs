//! Screen geometry derived from the viewport and layout config

use crate::state::LayoutConfig;

/// Rows taken by the status bar (separator + text)
pub const STATUS_BAR_HEIGHT: u16 = 2;
/// Rows above the sidebar list (title + blank)
pub const SIDEBAR_HEADER_HEIGHT: u16 = 2;
/// Blank columns on each side of the detail text
pub const CONTENT_PADDING: u16 = 2;
/// One indicator row above and one below the detail text
pub const INDICATOR_ROWS: u16 = 2;

/// Cell-level placement of every region for a given viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
    /// Rows above the status bar
    pub body_height: u16,
    /// Sidebar columns, including its right border
    pub sidebar_width: u16,
    /// Rows available to the test list
    pub list_height: u16,
    /// Columns of the detail pane
    pub content_width: u16,
    /// Columns of detail text after padding
    pub text_width: u16,
    /// Rows of detail text between the indicator rows
    pub text_height: u16,
}

impl Geometry {
    pub fn new(width: u16, height: u16, layout: &LayoutConfig) -> Self {
        let body_height = height.saturating_sub(STATUS_BAR_HEIGHT);
        let sidebar_width = layout.sidebar_width.min(width);
        let content_width = width - sidebar_width;

        Self {
            width,
            height,
            body_height,
            sidebar_width,
            list_height: body_height.saturating_sub(SIDEBAR_HEADER_HEIGHT),
            content_width,
            text_width: content_width.saturating_sub(CONTENT_PADDING * 2),
            text_height: body_height.saturating_sub(INDICATOR_ROWS),
        }
    }

    /// Columns available for a test name on its first sidebar row.
    ///
    /// The row reads `<cursor> <icon> <name>` and keeps one column clear
    /// before the border.
    pub fn name_budget(&self) -> usize {
        (self.sidebar_width as usize).saturating_sub(6).max(1)
    }

    /// List row under a terminal cell, if the cell is inside the list
    pub fn list_row_at(&self, column: u16, row: u16) -> Option<usize> {
        if column >= self.sidebar_width || row < SIDEBAR_HEADER_HEIGHT {
            return None;
        }
        let list_row = row - SIDEBAR_HEADER_HEIGHT;
        (list_row < self.list_height).then_some(list_row as usize)
    }
}
