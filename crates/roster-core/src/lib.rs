//! # roster-core - Core Domain Types
//!
//! Foundation crate for Roster. Provides domain types, client-side
//! validation, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`User`] - A user account as listed by the backend
//! - [`Role`] - Assignable role (Admin, Instructor, Client)
//! - [`NewUser`] - Registration payload for the creation form
//! - [`PageRequest`], [`UserPage`] - Paged listing request and response
//!
//! ### Validation (`validation`)
//! - [`is_valid_email()`] - `local@domain.tld` shape check
//! - [`meets_min_length()`] - Minimum length check for free-text fields
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use roster_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    NewUser, PageRequest, Role, UnknownRole, User, UserPage, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use validation::{is_valid_email, meets_min_length, MIN_FIELD_LEN};
