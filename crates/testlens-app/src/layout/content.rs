//! Detail pane: the selected test's header, location and wrapped output

use testlens_core::{TestRecord, TestStatus};

use super::{wrap_text, Geometry, Role, StyledLine, StyledSpan};
use crate::state::ViewerState;

pub const SCROLL_UP_HINT: &str = "▲ Scroll up (Ctrl+U/PgUp)";
pub const SCROLL_DOWN_HINT: &str = "▼ Scroll down (Ctrl+D/PgDn)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    /// One page of the selected record's lines
    Detail {
        /// Shown on the row above the text when scrolled down
        above: Option<StyledLine>,
        lines: Vec<StyledLine>,
        /// Shown on the row below the text when more lines follow
        below: Option<StyledLine>,
    },
    /// Failures-only filter with nothing failing
    AllPassed { lines: Vec<StyledLine> },
}

/// Every line of the detail pane for `record`, before pagination.
///
/// Output lines are wrapped to `width`; the header lines are not.
pub fn detail_lines(record: &TestRecord, width: usize) -> Vec<StyledLine> {
    let mut header = vec![StyledSpan::new(record.id.clone(), Role::Title)];
    if record.status != TestStatus::Unknown {
        header.push(StyledSpan::new(" ", Role::Text));
        header.push(StyledSpan::new(
            record.status.label(),
            Role::for_status(record.status),
        ));
    }

    let mut lines = vec![StyledLine::new(header)];
    if let Some((file, line)) = record.location() {
        lines.push(StyledLine::plain(format!("{file}:{line}"), Role::Link));
    }
    lines.push(StyledLine::blank());

    for output in record.display_output() {
        lines.extend(
            wrap_text(output, width)
                .into_iter()
                .map(|wrapped| StyledLine::plain(wrapped, Role::Text)),
        );
    }

    lines
}

pub fn build(state: &ViewerState, geometry: &Geometry) -> ContentView {
    let Some(record) = state.selected() else {
        return all_passed();
    };

    let mut lines = detail_lines(record, geometry.text_width as usize);
    let total = lines.len();
    let height = geometry.text_height as usize;
    let offset = state.scroll_offset.min(total.saturating_sub(height));

    lines.drain(..offset);
    lines.truncate(height);

    ContentView::Detail {
        above: (offset > 0).then(|| StyledLine::plain(SCROLL_UP_HINT, Role::Indicator)),
        below: (offset + height < total)
            .then(|| StyledLine::plain(SCROLL_DOWN_HINT, Role::Indicator)),
        lines,
    }
}

fn all_passed() -> ContentView {
    ContentView::AllPassed {
        lines: vec![
            StyledLine::plain("🎉 All Tests Passed!", Role::Success),
            StyledLine::blank(),
            StyledLine::plain(
                "All tests in your test suite passed successfully.",
                Role::Text,
            ),
            StyledLine::plain("Press 'f' to show all tests", Role::Muted),
        ],
    }
}
