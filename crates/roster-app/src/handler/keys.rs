//! Key event handlers for each screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::navigation::Screen;
use crate::state::AppState;
use crate::user_form::FormFocus;

/// Convert key events to messages based on the active screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if key.is_interrupt() {
        return Some(Message::Quit);
    }

    // Sidebar shortcuts work everywhere
    match key {
        InputKey::F(1) => return Some(Message::Navigate(Screen::Users)),
        InputKey::F(2) => return Some(Message::Navigate(Screen::AddUser)),
        _ => {}
    }

    match state.screen {
        Screen::Users => handle_key_users(key),
        Screen::AddUser => handle_key_add_user(state, key),
    }
}

/// Handle key events on the listing screen
fn handle_key_users(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),

        InputKey::Char('a') => Some(Message::Navigate(Screen::AddUser)),

        // Pages
        InputKey::Left | InputKey::PageUp | InputKey::Char('h') => Some(Message::PreviousPage),
        InputKey::Right | InputKey::PageDown | InputKey::Char('l') => Some(Message::NextPage),
        InputKey::Home | InputKey::Char('g') => Some(Message::FirstPage),
        InputKey::End | InputKey::Char('G') => Some(Message::LastPage),
        InputKey::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::GoToPage(page))
        }

        // Page size
        InputKey::Char('+' | ']') => Some(Message::CyclePageSize { forward: true }),
        InputKey::Char('-' | '[') => Some(Message::CyclePageSize { forward: false }),

        InputKey::Char('r') => Some(Message::ReloadUsers),

        _ => None,
    }
}

/// Handle key events on the creation form.
///
/// Printable keys type into the focused field, so there is no plain-letter
/// quit here.
fn handle_key_add_user(state: &AppState, key: InputKey) -> Option<Message> {
    let focus = state.form.focus();

    match key {
        InputKey::Esc => Some(Message::Navigate(Screen::Users)),

        InputKey::Tab | InputKey::Down => Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::FocusPrevious),

        InputKey::Enter => match focus {
            FormFocus::Submit if state.form.is_submittable() => Some(Message::SubmitForm),
            FormFocus::Submit => None,
            FormFocus::Cancel => Some(Message::CancelForm),
            _ => Some(Message::FocusNext),
        },

        InputKey::Left if focus == FormFocus::Role => Some(Message::CycleRole { forward: false }),
        InputKey::Right | InputKey::Char(' ') if focus == FormFocus::Role => {
            Some(Message::CycleRole { forward: true })
        }

        InputKey::Char(c) if focus.field().is_some_and(|f| f.is_text()) => {
            Some(Message::FormInput(c))
        }
        InputKey::Backspace if focus.field().is_some_and(|f| f.is_text()) => {
            Some(Message::FormBackspace)
        }

        _ => None,
    }
}
