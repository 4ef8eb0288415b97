//! Screen regions for the dashboard, derived from the layout geometry

use ratatui::layout::Rect;
use testlens_app::layout::geometry::CONTENT_PADDING;
use testlens_app::layout::Geometry;

/// Screen areas for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub sidebar: Rect,
    pub content: Rect,
    /// Row for the "scroll up" indicator
    pub above: Rect,
    pub text: Rect,
    /// Row for the "scroll down" indicator
    pub below: Rect,
    pub separator: Rect,
    pub status: Rect,
}

/// Place every region; areas are clipped to `frame` so a stale geometry
/// never draws outside the buffer.
pub fn create(geometry: &Geometry, frame: Rect) -> ScreenAreas {
    let body = geometry.body_height;
    let text_x = geometry.sidebar_width + CONTENT_PADDING;
    let clip = |rect: Rect| rect.intersection(frame);

    ScreenAreas {
        sidebar: clip(Rect::new(0, 0, geometry.sidebar_width, body)),
        content: clip(Rect::new(geometry.sidebar_width, 0, geometry.content_width, body)),
        above: clip(Rect::new(text_x, 0, geometry.text_width, body.min(1))),
        text: clip(Rect::new(text_x, 1, geometry.text_width, geometry.text_height)),
        below: clip(Rect::new(
            text_x,
            1 + geometry.text_height,
            geometry.text_width,
            body.saturating_sub(1).min(1),
        )),
        separator: clip(Rect::new(0, body, geometry.width, 1)),
        status: clip(Rect::new(0, body + 1, geometry.width, 1)),
    }
}
