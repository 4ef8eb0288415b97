//! Text wrapping for the detail pane and sidebar names
//!
//! Widths are terminal columns, measured with `unicode-width`.

use unicode_width::UnicodeWidthChar;

/// Number of leading chars that fit in `width` columns
fn fit_count(chars: &[char], width: usize) -> usize {
    let mut used = 0;
    for (i, c) in chars.iter().enumerate() {
        used += c.width().unwrap_or(0);
        if used > width {
            return i;
        }
    }
    chars.len()
}

/// Wrap `text` to `width` columns.
///
/// Each break prefers a space found between the middle of the line and the
/// boundary (the space right after the boundary counts); otherwise the line
/// is cut at the boundary. One leading space is removed from each
/// continuation. A zero width returns the text unchanged and empty text
/// yields a single empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;

    loop {
        let rest = &chars[start..];
        let fit = fit_count(rest, width);

        if fit == rest.len() {
            if !rest.is_empty() || lines.is_empty() {
                lines.push(rest.iter().collect());
            }
            break;
        }

        // A char wider than the whole line still has to go somewhere
        let fit = fit.max(1);
        if fit >= rest.len() {
            lines.push(rest.iter().collect());
            break;
        }
        let brk = (fit / 2 + 1..=fit)
            .rev()
            .find(|&i| rest[i] == ' ')
            .unwrap_or(fit);

        lines.push(rest[..brk].iter().collect());
        start += brk;
        if chars.get(start) == Some(&' ') {
            start += 1;
        }
    }

    lines
}

/// Split a test name into its first row and indented continuation chunks.
///
/// The first chunk takes up to `budget` columns; continuations take
/// `budget - 2` so they line up under the name after their indent.
pub fn wrap_name(name: &str, budget: usize) -> Vec<String> {
    let budget = budget.max(1);
    let chars: Vec<char> = name.chars().collect();

    let first = fit_count(&chars, budget).max(1).min(chars.len());
    let mut chunks = vec![chars[..first].iter().collect::<String>()];

    let continuation = budget.saturating_sub(2).max(1);
    let mut start = first;
    while start < chars.len() {
        let take = fit_count(&chars[start..], continuation).max(1);
        chunks.push(chars[start..start + take].iter().collect());
        start += take;
    }

    chunks
}
