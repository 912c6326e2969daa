//! Pagination controls, summary line, and page-size selector

use std::ops::Range;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use roster_app::UsersList;

use crate::theme::styles;

/// Rows the widget needs
pub const PAGINATION_HEIGHT: u16 = 2;

/// Window of page indices that fits `max_buttons`, kept around `current`
pub fn visible_range(total: usize, current: usize, max_buttons: usize) -> Range<usize> {
    if total <= max_buttons {
        return 0..total;
    }
    let max_buttons = max_buttons.max(1);
    let start = current
        .saturating_sub(max_buttons / 2)
        .min(total - max_buttons);
    start..start + max_buttons
}

/// Two rows: `« 1 2 [3] 4 5 »` on top, summary and page size below
pub struct Pagination<'a> {
    list: &'a UsersList,
}

impl<'a> Pagination<'a> {
    pub fn new(list: &'a UsersList) -> Self {
        Self { list }
    }

    fn buttons_line(&self, width: u16) -> Line<'static> {
        let list = self.list;
        let total = list.total_pages();
        let label_width = total.max(1).to_string().len() + 2;
        // « and » plus two ellipses take 8 cells
        let max_buttons = (width as usize).saturating_sub(8) / (label_width + 1);
        let range = visible_range(total, list.current_page(), max_buttons);

        let edge_style = |enabled: bool| -> Style {
            if enabled {
                styles::accent()
            } else {
                styles::disabled()
            }
        };

        let mut spans = vec![Span::styled("«", edge_style(list.can_go_previous()))];
        spans.push(Span::raw(" "));
        if range.start > 0 {
            spans.push(Span::styled("… ", styles::text_muted()));
        }
        for button in list.page_buttons()[range.clone()].iter() {
            let style = if button.active {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", button.label()), style));
            spans.push(Span::raw(" "));
        }
        if range.end < total {
            spans.push(Span::styled("… ", styles::text_muted()));
        }
        spans.push(Span::styled("»", edge_style(list.can_go_next())));
        Line::from(spans)
    }

    fn page_size_line(&self) -> Line<'static> {
        let mut spans = vec![Span::styled("Page size: ", styles::text_muted())];
        for size in self.list.page_size_options() {
            if *size == self.list.page_size() {
                spans.push(Span::styled(format!("[{size}]"), styles::accent_bold()));
            } else {
                spans.push(Span::styled(format!(" {size} "), styles::text_secondary()));
            }
        }
        spans.push(Span::raw(" "));
        Line::from(spans).right_aligned()
    }
}

impl Widget for Pagination<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let buttons_row = Rect { height: 1, ..area };
        self.buttons_line(area.width).render(buttons_row, buf);

        if area.height < PAGINATION_HEIGHT {
            return;
        }
        let info_row = Rect {
            y: area.y + 1,
            height: 1,
            ..area
        };
        Line::styled(self.list.summary(), styles::text_secondary()).render(info_row, buf);
        self.page_size_line().render(info_row, buf);
    }
}
