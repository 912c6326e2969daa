//! Users table for the listing screen

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Line,
    widgets::{Cell, Row, Table, Widget},
};

use roster_app::UsersList;

use crate::theme::styles;

/// Column headers, in display order
pub const COLUMNS: [&str; 6] = ["#", "First name", "Last name", "Email", "Roles", "Status"];

/// Table of the users on the current page, numbered continuously across pages
pub struct UsersTable<'a> {
    list: &'a UsersList,
}

impl<'a> UsersTable<'a> {
    pub fn new(list: &'a UsersList) -> Self {
        Self { list }
    }
}

impl Widget for UsersTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title)))
            .style(styles::accent_bold())
            .bottom_margin(1);

        let rows = self.list.users().iter().enumerate().map(|(index, user)| {
            Row::new(vec![
                Cell::from(self.list.row_number(index).to_string()).style(styles::text_muted()),
                Cell::from(user.first_name.as_str()),
                Cell::from(user.last_name.as_str()),
                Cell::from(user.email.as_str()),
                Cell::from(user.roles_label()),
                Cell::from(user.status.as_str()).style(status_style(&user.status)),
            ])
            .style(styles::text_primary())
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(18),
            Constraint::Percentage(18),
            Constraint::Percentage(28),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
        ];

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(area, buf);

        if self.list.users().is_empty() && area.height > 2 {
            let empty = Rect {
                y: area.y + 2,
                height: 1,
                ..area
            };
            Line::styled("No users found", styles::text_muted())
                .centered()
                .render(empty, buf);
        }
    }
}

fn status_style(status: &str) -> ratatui::style::Style {
    match status {
        "ACTIVE" => styles::status_green(),
        "BLOCKED" | "INACTIVE" | "DISABLED" => styles::status_red(),
        _ => styles::text_secondary(),
    }
}
