//! Test list: windowing around the cursor and wrapped names

use std::ops::Range;

use testlens_core::{TestRecord, TestStatus};

use super::{wrap_name, Geometry, Role, StyledLine, StyledSpan};
use crate::state::ViewerState;

const CURSOR_MARKER: &str = "►";
const CONTINUATION_INDENT: &str = "    ";

pub fn status_icon(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Pass => "✓",
        TestStatus::Fail => "✗",
        TestStatus::Skip => "↷",
        TestStatus::Unknown => "?",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarView {
    pub title: StyledLine,
    pub rows: Vec<SidebarRow>,
}

/// One list row; `record` is the visible-record index it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarRow {
    pub record: Option<usize>,
    pub line: StyledLine,
}

impl SidebarView {
    /// Visible-record index drawn on list row `row`
    pub fn record_at(&self, row: usize) -> Option<usize> {
        self.rows.get(row).and_then(|r| r.record)
    }
}

/// Records to show: `[start, end)` containing `cursor`, at most `capacity`
/// long, centred on the cursor and shifted back so the end is never past
/// `count`.
pub fn visible_window(cursor: usize, capacity: usize, count: usize) -> Range<usize> {
    if count == 0 || capacity == 0 {
        return 0..0;
    }
    if count <= capacity {
        return 0..count;
    }

    let cursor = cursor.min(count - 1);
    let mut start = cursor.saturating_sub(capacity / 2);
    let mut end = start + capacity;
    if end > count {
        end = count;
        start = end - capacity;
    }
    start..end
}

pub fn build(state: &ViewerState, geometry: &Geometry) -> SidebarView {
    let title = if state.filter_active {
        "Tests (Failures Only)"
    } else {
        "Tests"
    };
    let title = StyledLine::plain(title, Role::Title);

    let records = state.visible_records();
    if records.is_empty() {
        return SidebarView {
            title,
            rows: vec![SidebarRow {
                record: None,
                line: StyledLine::plain("✓ All tests passed!", Role::Success),
            }],
        };
    }

    SidebarView {
        title,
        rows: list_rows(&records, state.cursor, geometry),
    }
}

/// Wrapped rows for the largest window around the cursor that fits
fn list_rows(records: &[&TestRecord], cursor: usize, geometry: &Geometry) -> Vec<SidebarRow> {
    let height = geometry.list_height as usize;
    let budget = geometry.name_budget();

    let mut capacity = height.min(records.len());
    loop {
        let window = visible_window(cursor, capacity, records.len());
        let mut rows = Vec::new();
        for index in window {
            rows.extend(record_rows(records[index], index, index == cursor, budget));
        }

        if rows.len() <= height || capacity <= 1 {
            // A single name taller than the list is cut off
            rows.truncate(height);
            return rows;
        }
        capacity -= 1;
    }
}

fn record_rows(record: &TestRecord, index: usize, selected: bool, budget: usize) -> Vec<SidebarRow> {
    let name_role = if selected { Role::Selected } else { Role::Text };
    let icon_role = if selected {
        Role::Selected
    } else {
        Role::for_status(record.status)
    };
    let marker = if selected { CURSOR_MARKER } else { " " };

    wrap_name(&record.id, budget)
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| {
            let spans = if i == 0 {
                vec![
                    StyledSpan::new(format!("{marker} "), name_role),
                    StyledSpan::new(status_icon(record.status), icon_role),
                    StyledSpan::new(format!(" {chunk}"), name_role),
                ]
            } else {
                vec![StyledSpan::new(
                    format!("{CONTINUATION_INDENT}{chunk}"),
                    name_role,
                )]
            };
            SidebarRow {
                record: Some(index),
                line: StyledLine::new(spans),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ready_state, record};

    fn texts(view: &SidebarView) -> Vec<String> {
        view.rows.iter().map(|r| r.line.text()).collect()
    }

    #[test]
    fn test_window_fits_everything() {
        assert_eq!(visible_window(0, 10, 4), 0..4);
        assert_eq!(visible_window(3, 4, 4), 0..4);
    }

    #[test]
    fn test_window_centres_on_cursor() {
        assert_eq!(visible_window(10, 6, 30), 7..13);
    }

    #[test]
    fn test_window_clamped_at_edges() {
        assert_eq!(visible_window(1, 6, 30), 0..6);
        assert_eq!(visible_window(29, 6, 30), 24..30);
        assert_eq!(visible_window(28, 5, 30), 25..30);
    }

    #[test]
    fn test_window_empty_inputs() {
        assert_eq!(visible_window(0, 0, 5), 0..0);
        assert_eq!(visible_window(0, 5, 0), 0..0);
    }

    #[test]
    fn test_window_always_contains_cursor() {
        for count in 1..20 {
            for capacity in 1..12 {
                for cursor in 0..count {
                    let w = visible_window(cursor, capacity, count);
                    assert!(w.contains(&cursor), "{cursor} {capacity} {count}");
                    assert_eq!(w.len(), capacity.min(count));
                }
            }
        }
    }

    #[test]
    fn test_rows_show_marker_and_icons() {
        let state = ready_state(
            vec![
                record("TestB", TestStatus::Fail, &[]),
                record("TestA", TestStatus::Pass, &[]),
                record("TestC", TestStatus::Skip, &[]),
            ],
            80,
            24,
        );
        let view = build(&state, &state.geometry());
        assert_eq!(view.title.text(), "Tests");
        insta::assert_debug_snapshot!(texts(&view), @r#"
        [
            "► ✗ TestB",
            "  ✓ TestA",
            "  ↷ TestC",
        ]
        "#);
        assert_eq!(view.rows[0].line.spans[1].role, Role::Selected);
        assert_eq!(view.rows[1].line.spans[1].role, Role::Pass);
    }

    #[test]
    fn test_long_name_wraps_with_indent() {
        // Sidebar 16 wide: name budget 10, continuation chunks of 8
        let mut state = ready_state(
            vec![
                record("TestParser/nested_case", TestStatus::Fail, &[]),
                record("TestZ", TestStatus::Pass, &[]),
            ],
            80,
            24,
        );
        state.layout.sidebar_width = 16;
        let view = build(&state, &state.geometry());
        assert_eq!(
            texts(&view),
            vec!["► ✗ TestParser", "    /nested_", "    case", "  ✓ TestZ"]
        );
        assert_eq!(view.record_at(0), Some(0));
        assert_eq!(view.record_at(2), Some(0));
        assert_eq!(view.record_at(3), Some(1));
        assert_eq!(view.record_at(4), None);
    }

    #[test]
    fn test_window_shrinks_to_fit_wrapped_rows() {
        // height 8: list_height 4; each record takes two rows
        let records = (0..6)
            .map(|i| record(&format!("TestLongName{i:02}"), TestStatus::Pass, &[]))
            .collect();
        let mut state = ready_state(records, 60, 8);
        state.layout.sidebar_width = 16;
        state.cursor = 3;
        let view = build(&state, &state.geometry());
        assert_eq!(view.rows.len(), 4);
        let shown: Vec<_> = view.rows.iter().filter_map(|r| r.record).collect();
        assert!(shown.contains(&3));
        assert_eq!(shown, vec![2, 2, 3, 3]);
    }

    #[test]
    fn test_filtered_empty_list() {
        let mut state = ready_state(vec![record("TestA", TestStatus::Pass, &[])], 80, 24);
        state.filter_active = true;
        let view = build(&state, &state.geometry());
        assert_eq!(view.title.text(), "Tests (Failures Only)");
        assert_eq!(texts(&view), vec!["✓ All tests passed!"]);
        assert_eq!(view.record_at(0), None);
    }
}
