//! roster-app - Application state and orchestration for Roster
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the listing and creation-form controllers, messages, the
//! update function, background actions, and configuration loading.

pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod process;
pub mod signals;
pub mod state;
pub mod user_form;
pub mod users_list;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::Screen;
pub use state::{AppPhase, AppState};
pub use user_form::{FormFocus, FormField, FormNotice, UserDraft, UserForm};
pub use users_list::{ListStatus, PageButton, UsersList};
