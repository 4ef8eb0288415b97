//! Theme: how each layout [`Role`] looks on screen.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//!
//! A [`Theme`] is built once at startup and handed to the renderer by
//! reference; nothing here is global or mutable.

pub mod palette;
pub mod styles;

use ratatui::style::Style;
use testlens_app::layout::Role;

/// Role → style table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    text: Style,
    title: Style,
    muted: Style,
    selected: Style,
    pass: Style,
    fail: Style,
    skip: Style,
    pending: Style,
    link: Style,
    indicator: Style,
    success: Style,
    error: Style,
    loading: Style,
    border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: styles::text_primary(),
            title: styles::title(),
            muted: styles::text_muted(),
            selected: styles::selected_highlight(),
            pass: styles::status_green(),
            fail: styles::status_red(),
            skip: styles::status_yellow(),
            pending: styles::text_secondary(),
            link: styles::link(),
            indicator: styles::accent(),
            success: styles::success_banner(),
            error: styles::error_banner(),
            loading: styles::accent_bold(),
            border: styles::border_inactive(),
        }
    }
}

impl Theme {
    /// Theme without any colors, for terminals that set `NO_COLOR`
    pub fn plain() -> Self {
        let plain = Style::default();
        Self {
            text: plain,
            title: styles::bold(),
            muted: plain,
            selected: styles::reversed(),
            pass: plain,
            fail: plain,
            skip: plain,
            pending: plain,
            link: styles::underlined(),
            indicator: plain,
            success: styles::bold(),
            error: styles::bold(),
            loading: plain,
            border: plain,
        }
    }

    pub fn from_env() -> Self {
        match std::env::var_os("NO_COLOR") {
            Some(value) if !value.is_empty() => Self::plain(),
            _ => Self::default(),
        }
    }

    pub fn style(&self, role: Role) -> Style {
        match role {
            Role::Text => self.text,
            Role::Title => self.title,
            Role::Muted => self.muted,
            Role::Selected => self.selected,
            Role::Pass => self.pass,
            Role::Fail => self.fail,
            Role::Skip => self.skip,
            Role::Pending => self.pending,
            Role::Link => self.link,
            Role::Indicator => self.indicator,
            Role::Success => self.success,
            Role::Error => self.error,
            Role::Loading => self.loading,
        }
    }

    /// Sidebar border and status separator
    pub fn border(&self) -> Style {
        self.border
    }
}
