//! Main render/view function (View in TEA pattern)
//!
//! All layout decisions are made by [`testlens_app::layout`]; this module
//! only maps roles to styles and writes lines into regions.

#[cfg(test)]
mod tests;

use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use testlens_app::layout::content::ContentView;
use testlens_app::layout::sidebar::SidebarView;
use testlens_app::layout::{build_screen, Dashboard, Screen, StyledLine};
use testlens_app::ViewerState;

use crate::layout::{self, ScreenAreas};
use crate::theme::Theme;

/// Render the complete UI for the current state
pub fn view(frame: &mut Frame, state: &ViewerState, theme: &Theme) {
    match build_screen(state) {
        Screen::Placeholder { lines, .. } => render_centered(frame, frame.area(), &lines, theme),
        Screen::Dashboard(dashboard) => render_dashboard(frame, &dashboard, theme),
    }
}

fn render_dashboard(frame: &mut Frame, dashboard: &Dashboard, theme: &Theme) {
    let areas = layout::create(&dashboard.geometry, frame.area());

    render_sidebar(frame, areas.sidebar, &dashboard.sidebar, theme);
    render_content(frame, &areas, &dashboard.content, theme);

    let separator = "─".repeat(areas.separator.width as usize);
    render_lines(
        frame,
        areas.separator,
        vec![Line::from(Span::styled(separator, theme.border()))],
    );
    render_lines(frame, areas.status, vec![to_line(&dashboard.status, theme)]);
}

fn render_sidebar(frame: &mut Frame, area: Rect, sidebar: &SidebarView, theme: &Theme) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![to_line(&sidebar.title, theme), Line::default()];
    lines.extend(sidebar.rows.iter().map(|row| to_line(&row.line, theme)));
    render_lines(frame, inner, lines);
}

fn render_content(frame: &mut Frame, areas: &ScreenAreas, content: &ContentView, theme: &Theme) {
    match content {
        ContentView::Detail {
            above,
            lines,
            below,
        } => {
            if let Some(indicator) = above {
                render_lines(frame, areas.above, vec![to_line(indicator, theme)]);
            }
            render_lines(
                frame,
                areas.text,
                lines.iter().map(|line| to_line(line, theme)).collect(),
            );
            if let Some(indicator) = below {
                render_lines(frame, areas.below, vec![to_line(indicator, theme)]);
            }
        }
        ContentView::AllPassed { lines } => render_centered(frame, areas.content, lines, theme),
    }
}

/// Lines centred both ways inside `area`
fn render_centered(frame: &mut Frame, area: Rect, lines: &[StyledLine], theme: &Theme) {
    let height = (lines.len() as u16).min(area.height);
    let centered = Rect::new(
        area.x,
        area.y + (area.height - height) / 2,
        area.width,
        height,
    );
    let paragraph = Paragraph::new(lines.iter().map(|l| to_line(l, theme)).collect::<Vec<_>>())
        .alignment(Alignment::Center);
    if !centered.is_empty() {
        frame.render_widget(paragraph, centered);
    }
}

fn render_lines(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    if !area.is_empty() {
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn to_line(line: &StyledLine, theme: &Theme) -> Line<'static> {
    Line::from(
        line.spans
            .iter()
            .map(|span| Span::styled(span.text.clone(), theme.style(span.role)))
            .collect::<Vec<_>>(),
    )
}
