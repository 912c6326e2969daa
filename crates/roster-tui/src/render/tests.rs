use super::*;
use crate::test_utils::{loaded_users_state, TestTerminal};
use roster_app::users_list::FETCH_ERROR_MESSAGE;
use roster_app::{handler, Message, UpdateAction};

/// Listing mounted with its first fetch still in flight, plus the fetch epoch
fn loading_state() -> (AppState, u64) {
    let mut state = AppState::default();
    let result = handler::update(&mut state, Message::Navigate(Screen::Users));
    match result.action {
        Some(UpdateAction::FetchUsers { epoch, .. }) => (state, epoch),
        other => panic!("expected a fetch, got {other:?}"),
    }
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::new();
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_loaded_listing_shows_table_only() {
    let state = loaded_users_state(100, 4);
    let term = draw(&state);

    assert!(term.buffer_contains(USERS_HEADING));
    assert!(term.buffer_contains(USERS_CARD_TITLE));
    assert!(term.buffer_contains("First name"));
    assert!(term.buffer_contains("Page 5 of 5 (100 users)"));
    assert!(!term.buffer_contains(LOADING_LABEL));
    assert!(!term.buffer_contains(FETCH_ERROR_MESSAGE));
}

#[test]
fn test_first_row_of_fifth_page_is_81() {
    let state = loaded_users_state(100, 4);
    let term = draw(&state);

    let line = term.find_line("First81").unwrap();
    assert!(term.line_contains(line, "81"));
    assert!(term.line_contains(line, "Last81"));
    // Row 81 directly follows the header and its margin
    let header = term.find_line("First name").unwrap();
    assert_eq!(line, header + 2);
}

#[test]
fn test_loading_shows_spinner_only() {
    let (state, _) = loading_state();
    let term = draw(&state);

    assert!(term.buffer_contains(LOADING_LABEL));
    assert!(!term.buffer_contains("First name"));
    assert!(!term.buffer_contains(FETCH_ERROR_MESSAGE));
}

#[test]
fn test_failure_shows_alert_only() {
    let (mut state, epoch) = loading_state();
    handler::update(
        &mut state,
        Message::UsersPageFailed {
            epoch,
            error: "connection refused".to_string(),
        },
    );
    let term = draw(&state);

    assert!(term.buffer_contains(FETCH_ERROR_MESSAGE));
    assert!(term.buffer_contains("press r to retry"));
    assert!(!term.buffer_contains("connection refused"));
    assert!(!term.buffer_contains(LOADING_LABEL));
    assert!(!term.buffer_contains("First name"));
}

#[test]
fn test_shell_renders_header_sidebar_footer() {
    let state = loaded_users_state(100, 0);
    let term = draw(&state);

    assert!(term.line_contains(1, "Roster"));
    assert!(term.buffer_contains("localhost:8080"));
    assert!(term.buffer_contains("Navigation"));
    assert!(term.buffer_contains("▸ Users"));
    assert!(term.buffer_contains("updated "));
}

#[test]
fn test_add_user_screen_shows_form() {
    let mut state = AppState::default();
    handler::update(&mut state, Message::Navigate(Screen::AddUser));
    let term = draw(&state);

    assert!(term.buffer_contains(widgets::FORM_TITLE));
    assert!(term.buffer_contains("▸ Add user"));
    assert!(term.buffer_contains("Enter email"));
    assert!(!term.buffer_contains(USERS_CARD_TITLE));
}

#[test]
fn test_narrow_terminal_hides_sidebar() {
    let state = loaded_users_state(100, 0);
    let mut term = TestTerminal::with_size(50, 32);
    term.draw_with(|frame| view(frame, &state));

    assert!(!term.buffer_contains("Navigation"));
    assert!(term.buffer_contains(USERS_CARD_TITLE));
}
