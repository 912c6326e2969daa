//! Busy indicator

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame for the given tick count
pub fn frame(tick: u64) -> &'static str {
    FRAMES[(tick % FRAMES.len() as u64) as usize]
}

/// Centered spinner followed by a label
pub struct Spinner<'a> {
    label: &'a str,
    tick: u64,
}

impl<'a> Spinner<'a> {
    pub fn new(label: &'a str, tick: u64) -> Self {
        Self { label, tick }
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = Line::from(vec![
            Span::styled(frame(self.tick), styles::accent()),
            Span::styled(format!(" {}", self.label), styles::text_secondary()),
        ])
        .centered();
        let row = Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        };
        line.render(row, buf);
    }
}
