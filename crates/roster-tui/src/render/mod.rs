//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use roster_app::state::AppState;
use roster_app::{ListStatus, Screen};

use super::{layout, widgets};
use crate::theme::styles;

/// Card title around the listing
pub const USERS_CARD_TITLE: &str = "All registered users";

/// Heading above the listing card
pub const USERS_HEADING: &str = "User management";

/// Label next to the spinner while a page is loading
pub const LOADING_LABEL: &str = "Loading...";

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());

    frame.render_widget(widgets::MainHeader::new(state.base_url()), areas.header);
    if !areas.sidebar.is_empty() {
        frame.render_widget(widgets::Sidebar::new(state.screen), areas.sidebar);
    }
    frame.render_widget(
        widgets::Footer::new(state.screen, state.users.last_updated()),
        areas.footer,
    );

    match state.screen {
        Screen::Users => render_users(frame, state, areas.content),
        Screen::AddUser => render_add_user(frame, state, areas.content),
    }
}

/// Heading row and the remaining body
fn split_heading(area: Rect) -> (Rect, Rect) {
    let [heading, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    (heading, body)
}

fn render_users(frame: &mut Frame, state: &AppState, area: Rect) {
    let (heading, body) = split_heading(area);
    frame.render_widget(Line::styled(format!(" {USERS_HEADING}"), styles::heading()), heading);

    let card = styles::titled_block(USERS_CARD_TITLE, false);
    let inner = card.inner(body);
    frame.render_widget(card, body);

    // Exactly one of spinner, alert, or table is shown
    match state.users.status() {
        ListStatus::Loading => {
            frame.render_widget(widgets::Spinner::new(LOADING_LABEL, state.tick_count), inner);
        }
        ListStatus::Failed { message } => {
            let [alert, _] =
                Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles::status_red())
                .title(Line::styled(" Error ", styles::status_red()));
            let hint = Line::styled("  press r to retry", styles::text_muted());
            frame.render_widget(
                Paragraph::new(vec![Line::styled(format!(" {message}"), styles::status_red())])
                    .block(block)
                    .wrap(Wrap { trim: false }),
                alert,
            );
            if inner.height > alert.height {
                let hint_row = Rect {
                    y: alert.y + alert.height,
                    height: 1,
                    ..inner
                };
                frame.render_widget(hint, hint_row);
            }
        }
        ListStatus::Idle | ListStatus::Loaded => {
            let [table, pagination] = Layout::vertical([
                Constraint::Min(0),
                Constraint::Length(widgets::PAGINATION_HEIGHT),
            ])
            .areas(inner);
            frame.render_widget(widgets::UsersTable::new(&state.users), table);
            frame.render_widget(widgets::Pagination::new(&state.users), pagination);
        }
    }
}

fn render_add_user(frame: &mut Frame, state: &AppState, area: Rect) {
    let (heading, body) = split_heading(area);
    frame.render_widget(
        Line::styled(format!(" {}", Screen::AddUser.label()), styles::heading()),
        heading,
    );
    frame.render_widget(widgets::UserFormView::new(&state.form), body);
}
