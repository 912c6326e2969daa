//! Footer bar: key hints and the last-updated stamp

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use roster_app::Screen;

use crate::theme::styles;

/// Key hints per screen as `(key, action)` pairs
pub fn key_hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Users => &[
            ("←/→", "page"),
            ("1-9", "jump"),
            ("+/-", "page size"),
            ("r", "reload"),
            ("a", "add user"),
            ("q", "quit"),
        ],
        Screen::AddUser => &[
            ("Tab", "next field"),
            ("←/→", "role"),
            ("Enter", "select"),
            ("Esc", "back"),
            ("Ctrl+C", "quit"),
        ],
    }
}

pub struct Footer {
    screen: Screen,
    last_updated: Option<DateTime<Local>>,
}

impl Footer {
    pub fn new(screen: Screen, last_updated: Option<DateTime<Local>>) -> Self {
        Self {
            screen,
            last_updated,
        }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in key_hints(self.screen).iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }
        Line::from(spans).render(area, buf);

        if let Some(updated) = self.last_updated {
            let stamp = Line::styled(
                format!("updated {} ", updated.format("%H:%M:%S")),
                styles::text_muted(),
            )
            .right_aligned();
            stamp.render(area, buf);
        }
    }
}
