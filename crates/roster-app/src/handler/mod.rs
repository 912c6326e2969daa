//! Handler module - TEA update function and key mapping
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per screen

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;
use roster_core::{NewUser, PageRequest};

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch one page of users; completes with `UsersPageLoaded` or
    /// `UsersPageFailed` carrying the same epoch
    FetchUsers { epoch: u64, request: PageRequest },

    /// Register a new user; completes with `UserCreated` or
    /// `UserCreateFailed` carrying the same epoch
    CreateUser { epoch: u64, user: NewUser },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
