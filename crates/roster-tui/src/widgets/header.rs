//! Header bar widget
//!
//! Application title on the left, backend base URL on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Application title shown in the header
pub const APP_TITLE: &str = "Roster";

/// Main header showing the app title and the backend it talks to
pub struct MainHeader<'a> {
    base_url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(base_url: &'a str) -> Self {
        Self { base_url }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::styled(format!(" {APP_TITLE}"), styles::accent_bold()),
            Span::styled("  user administration", styles::text_muted()),
        ]);
        let title_width = title.width() as u16;

        let [left, right] =
            Layout::horizontal([Constraint::Length(title_width), Constraint::Min(0)]).areas(inner);
        title.render(left, buf);

        // The URL gives way first on narrow terminals
        let url = Line::from(vec![
            Span::styled("backend ", styles::text_muted()),
            Span::styled(format!("{} ", self.base_url), styles::text_secondary()),
        ])
        .right_aligned();
        if url.width() as u16 <= right.width {
            url.render(right, buf);
        }
    }
}
