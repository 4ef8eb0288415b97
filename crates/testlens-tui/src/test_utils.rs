//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so full frames can be drawn and inspected
//! without a real terminal.

use std::collections::HashMap;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use testlens_app::handler::update;
use testlens_app::{Message, ViewerState};
use testlens_core::{order_results, ResultSet, TestRecord, TestStatus};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Draws a frame using a custom rendering function.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.content().contains(text)
    }

    /// Text of one row
    pub fn line(&self, y: u16) -> String {
        let buffer = self.buffer();
        let mut result = String::new();
        if y < buffer.area.height {
            for x in 0..buffer.area.width {
                result.push_str(buffer[(x, y)].symbol());
            }
        }
        result
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, y: u16, text: &str) -> bool {
        self.line(y).contains(text)
    }

    /// Get the content of a specific cell
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&str> {
        let buffer = self.buffer();
        if x < buffer.area.width && y < buffer.area.height {
            Some(buffer[(x, y)].symbol())
        } else {
            None
        }
    }

    /// Get all content as a string, one row per line
    pub fn content(&self) -> String {
        (0..self.buffer().area.height)
            .map(|y| self.line(y) + "\n")
            .collect()
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

pub fn record(id: &str, status: TestStatus, output: &[&str]) -> TestRecord {
    let mut record = TestRecord::new(id);
    record.status = status;
    record.output_lines = output.iter().map(|s| s.to_string()).collect();
    record
}

pub fn results(records: Vec<TestRecord>) -> ResultSet {
    let map: HashMap<String, TestRecord> = records.into_iter().map(|r| (r.id.clone(), r)).collect();
    order_results(map)
}

/// Viewer resized to the test terminal and loaded with `records`
pub fn ready_state(records: Vec<TestRecord>, width: u16, height: u16) -> ViewerState {
    let mut state = ViewerState::default();
    update(&mut state, Message::Resize { width, height });
    update(&mut state, Message::LoadComplete(results(records)));
    state
}
