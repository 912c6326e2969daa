//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::navigation::Screen;
use crate::state::{AppPhase, AppState};
use crate::user_form::SubmitTicket;
use crate::users_list::{FetchTicket, PageApplied};
use tracing::{info, warn};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_count = state.tick_count.wrapping_add(1);
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Navigate(screen) => navigate(state, screen),

        // ─────────────────────────────────────────────────────────
        // Listing
        // ─────────────────────────────────────────────────────────
        Message::GoToPage(page) => fetch(state.users.go_to_page(page)),
        Message::PreviousPage => fetch(state.users.previous_page()),
        Message::NextPage => fetch(state.users.next_page()),
        Message::FirstPage => fetch(state.users.first_page()),
        Message::LastPage => fetch(state.users.last_page()),
        Message::SetPageSize(size) => fetch(state.users.set_page_size(size)),
        Message::CyclePageSize { forward } => fetch(state.users.cycle_page_size(forward)),
        Message::ReloadUsers => fetch(Some(state.users.reload())),

        Message::UsersPageLoaded { epoch, page } => match state.users.apply_page(epoch, page) {
            PageApplied::Refetch(ticket) => fetch(Some(ticket)),
            PageApplied::Applied | PageApplied::Stale => UpdateResult::none(),
        },

        Message::UsersPageFailed { epoch, error } => {
            state.users.apply_failure(epoch, &error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Creation form
        // ─────────────────────────────────────────────────────────
        Message::UpdateField { field, value } => {
            state.form.update_field(field, value);
            UpdateResult::none()
        }

        Message::FormInput(c) => {
            state.form.insert_char(c);
            UpdateResult::none()
        }

        Message::FormBackspace => {
            state.form.backspace();
            UpdateResult::none()
        }

        Message::FocusNext => {
            state.form.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.form.focus_prev();
            UpdateResult::none()
        }

        Message::CycleRole { forward } => {
            state.form.cycle_role(forward);
            UpdateResult::none()
        }

        Message::SubmitForm => submit(state.form.submit()),

        Message::CancelForm => {
            state.form.cancel();
            UpdateResult::none()
        }

        Message::UserCreated { epoch } => {
            if state.form.apply_created(epoch) {
                info!("User registered");
            }
            UpdateResult::none()
        }

        Message::UserCreateFailed {
            epoch,
            server_message,
            error,
        } => {
            if state.form.apply_failed(epoch, server_message) {
                warn!("User registration failed: {}", error);
            }
            UpdateResult::none()
        }
    }
}

/// Switch screens and mount the target controller
fn navigate(state: &mut AppState, screen: Screen) -> UpdateResult {
    info!("Navigating to {}", screen.route());
    state.screen = screen;
    match screen {
        Screen::Users => fetch(Some(state.users.mount())),
        Screen::AddUser => {
            state.form.mount();
            UpdateResult::none()
        }
    }
}

fn fetch(ticket: Option<FetchTicket>) -> UpdateResult {
    match ticket {
        Some(FetchTicket { epoch, request }) => {
            UpdateResult::action(UpdateAction::FetchUsers { epoch, request })
        }
        None => UpdateResult::none(),
    }
}

fn submit(ticket: Option<SubmitTicket>) -> UpdateResult {
    match ticket {
        Some(SubmitTicket { epoch, user }) => {
            UpdateResult::action(UpdateAction::CreateUser { epoch, user })
        }
        None => UpdateResult::none(),
    }
}
