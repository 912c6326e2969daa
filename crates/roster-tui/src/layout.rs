//! Screen layout definitions for the TUI
//!
//! Header across the top, footer across the bottom, and the body split into
//! the navigation sidebar and the content panel. Narrow terminals drop the
//! sidebar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height including borders
pub const HEADER_HEIGHT: u16 = 3;

/// Footer height (single line, no border)
pub const FOOTER_HEIGHT: u16 = 1;

/// Sidebar width including borders
pub const SIDEBAR_WIDTH: u16 = 22;

/// Narrowest terminal that still shows the sidebar
pub const MIN_WIDTH_FOR_SIDEBAR: u16 = 60;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title + backend URL
    pub header: Rect,

    /// Navigation entries; zero-sized when the terminal is too narrow
    pub sidebar: Rect,

    /// Active screen
    pub content: Rect,

    /// Key hints + last-updated stamp
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let sidebar_width = if area.width >= MIN_WIDTH_FOR_SIDEBAR {
        SIDEBAR_WIDTH
    } else {
        0
    };

    let [sidebar, content] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(body);

    ScreenAreas {
        header,
        sidebar,
        content,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard_terminal() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create(area);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sidebar.width, 22);
        assert_eq!(layout.content.width, 78);
        assert_eq!(layout.content.x, 22);
        assert_eq!(layout.content.y, 3);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(
            layout.header.height + layout.content.height + layout.footer.height,
            area.height
        );
        assert_eq!(layout.sidebar.width + layout.content.width, area.width);
        assert_eq!(layout.sidebar.height, layout.content.height);
    }

    #[test]
    fn test_narrow_terminal_hides_sidebar() {
        let layout = create(Rect::new(0, 0, 50, 24));
        assert!(layout.sidebar.is_empty());
        assert_eq!(layout.content.width, 50);
    }
}
