//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::navigation::Screen;
use crate::user_form::FormField;
use roster_core::UserPage;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick for animations
    Tick,

    /// Leave the application
    Quit,

    /// Show a screen and mount its controller
    Navigate(Screen),

    // ─────────────────────────────────────────────────────────
    // Listing
    // ─────────────────────────────────────────────────────────
    /// Jump to a zero-based page
    GoToPage(usize),
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,

    /// Switch to a page size from the configured options
    SetPageSize(u32),

    /// Step through the configured page sizes
    CyclePageSize { forward: bool },

    /// Fetch the current page again
    ReloadUsers,

    /// A page fetch completed
    UsersPageLoaded { epoch: u64, page: UserPage },

    /// A page fetch failed
    UsersPageFailed { epoch: u64, error: String },

    // ─────────────────────────────────────────────────────────
    // Creation form
    // ─────────────────────────────────────────────────────────
    /// Replace a field's value
    UpdateField { field: FormField, value: String },

    /// Type a character into the focused field
    FormInput(char),
    FormBackspace,
    FocusNext,
    FocusPrevious,
    CycleRole { forward: bool },
    SubmitForm,
    CancelForm,

    /// A registration completed
    UserCreated { epoch: u64 },

    /// A registration failed
    UserCreateFailed {
        epoch: u64,
        /// Message supplied by the backend, if any
        server_message: Option<String>,
        /// Full error text for the log
        error: String,
    },
}
