//! Bottom status line: counts on the left, key hints on the right

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Role, StyledLine, StyledSpan};
use crate::state::ViewerState;

pub const KEY_HINTS: &str = "f: toggle filter • q: quit";
const SEPARATOR: &str = " • ";

/// Status line exactly `width` columns wide.
///
/// The key hints need one blank column before them; when they no longer
/// fit they are dropped, and the counts are cut at the right edge.
pub fn build(state: &ViewerState, width: usize) -> StyledLine {
    let mut counts = Vec::new();
    let passed = state.records.passed_count();
    let failed = state.records.failed_count();
    if passed > 0 {
        counts.push(StyledSpan::new(format!("{passed} passed"), Role::Pass));
    }
    if failed > 0 {
        counts.push(StyledSpan::new(format!("{failed} failed"), Role::Fail));
    }

    let mut spans = Vec::new();
    for (i, span) in counts.into_iter().enumerate() {
        if i > 0 {
            spans.push(StyledSpan::new(SEPARATOR, Role::Muted));
        }
        spans.push(span);
    }

    let left = StyledLine::new(spans.clone()).width();
    let right = KEY_HINTS.width();
    if left + 1 + right <= width {
        spans.push(StyledSpan::new(" ".repeat(width - left - right), Role::Text));
        spans.push(StyledSpan::new(KEY_HINTS, Role::Muted));
        return StyledLine::new(spans);
    }

    let mut line = truncate(spans, width);
    let used = line.width();
    if used < width {
        line.spans.push(StyledSpan::new(" ".repeat(width - used), Role::Text));
    }
    line
}

/// Keep at most `width` columns of `spans`
fn truncate(spans: Vec<StyledSpan>, width: usize) -> StyledLine {
    let mut used = 0;
    let mut kept = Vec::new();
    for span in spans {
        let mut text = String::new();
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            text.push(c);
        }
        let cut = text.len() < span.text.len();
        if !text.is_empty() {
            kept.push(StyledSpan::new(text, span.role));
        }
        if cut {
            break;
        }
    }
    StyledLine::new(kept)
}
