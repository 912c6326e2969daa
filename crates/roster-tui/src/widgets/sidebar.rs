//! Navigation sidebar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use roster_app::Screen;

use crate::theme::styles;

/// Sidebar listing the screens, with the active one highlighted
pub struct Sidebar {
    active: Screen,
}

impl Sidebar {
    pub fn new(active: Screen) -> Self {
        Self { active }
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let block = styles::titled_block("Navigation", false);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = Screen::ALL
            .iter()
            .enumerate()
            .map(|(i, screen)| {
                let key = format!("F{} ", i + 1);
                if *screen == self.active {
                    Line::from(vec![
                        Span::styled(format!("▸ {}", screen.label()), styles::focused_selected()),
                        Span::raw(" "),
                        Span::styled(key, styles::keybinding()),
                    ])
                } else {
                    Line::from(vec![
                        Span::styled(format!("  {}", screen.label()), styles::text_secondary()),
                        Span::raw(" "),
                        Span::styled(key, styles::text_muted()),
                    ])
                }
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
