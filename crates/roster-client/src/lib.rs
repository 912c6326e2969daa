//! # roster-client - Admin Backend Client
//!
//! Talks to the user administration REST API: paged listing and
//! registration. Depends on [`roster_core`] for domain types and errors.
//!
//! ## Public API
//!
//! ### Directory seam
//! - [`UserDirectory`] - Async trait the app drives (`Send` futures)
//! - [`LocalUserDirectory`] - Same trait without the `Send` bound
//!
//! ### HTTP adapter
//! - [`HttpUserDirectory`] - reqwest implementation
//! - [`parse_base_url()`] - Normalize a configured base URL
//! - [`users_page_url()`] - URL of one listing page
//!
//! ### Test helpers (`test-helpers` feature)
//! - `test_utils::FakeDirectory` - Scripted in-memory directory

pub mod directory;
mod dto;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use directory::{LocalUserDirectory, UserDirectory};
pub use http::{
    parse_base_url, users_page_url, HttpUserDirectory, DEFAULT_TIMEOUT, REGISTER_PATH, USERS_PATH,
};
