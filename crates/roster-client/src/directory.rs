//! The user directory seam between the app and the backend

use roster_core::prelude::*;
use roster_core::{NewUser, PageRequest, UserPage};

/// Remote collection of user accounts.
///
/// `UserDirectory` is the `Send` variant used by the event loop, which calls
/// it from spawned tokio tasks. Implementations surface every failure
/// (transport, non-2xx, decode) as an [`Error`]; callers decide how to
/// present it.
#[trait_variant::make(UserDirectory: Send)]
pub trait LocalUserDirectory {
    /// Fetch one page of users (`GET admin/users?page=&size=`)
    async fn list_users(&self, request: PageRequest) -> Result<UserPage>;

    /// Register a new account (`POST admin/users/register`)
    async fn register_user(&self, user: NewUser) -> Result<()>;
}
