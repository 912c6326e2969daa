//! Test utilities for the user directory
//!
//! Provides user builders and an in-memory [`FakeDirectory`] with scripted
//! responses and recorded calls.

use std::collections::VecDeque;
use std::sync::Mutex;

use roster_core::prelude::*;
use roster_core::{NewUser, PageRequest, User, UserPage};

use crate::directory::UserDirectory;

/// Creates a test user whose fields derive from `id`.
pub fn test_user(id: i64) -> User {
    User {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@example.com"),
        roles: vec!["CLIENT".to_string()],
        status: "ACTIVE".to_string(),
    }
}

/// Creates `count` test users with ids starting at `first_id`.
pub fn test_users(first_id: i64, count: usize) -> Vec<User> {
    (0..count as i64).map(|i| test_user(first_id + i)).collect()
}

/// Builds the page a backend holding `total` users would return.
pub fn test_page(request: PageRequest, total: u64) -> UserPage {
    let size = u64::from(request.size.max(1));
    let total_pages = total.div_ceil(size) as usize;
    let start = request.page as u64 * size;
    let count = total.saturating_sub(start).min(size) as usize;
    UserPage {
        content: test_users(start as i64 + 1, count),
        total_pages,
        total_elements: total,
    }
}

/// In-memory [`UserDirectory`].
///
/// Scripted responses are consumed first, in order. Once a queue runs dry,
/// listing answers from a backing population of `population` users and
/// registration succeeds.
#[derive(Debug, Default)]
pub struct FakeDirectory {
    population: u64,
    pages: Mutex<VecDeque<Result<UserPage>>>,
    registrations: Mutex<VecDeque<Result<()>>>,
    list_calls: Mutex<Vec<PageRequest>>,
    registered: Mutex<Vec<NewUser>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory backed by `total` generated users
    pub fn with_population(total: u64) -> Self {
        Self {
            population: total,
            ..Self::default()
        }
    }

    /// Queue the result of the next `list_users` call
    pub fn push_page(&self, result: Result<UserPage>) {
        self.pages.lock().unwrap().push_back(result);
    }

    /// Queue the result of the next `register_user` call
    pub fn push_registration(&self, result: Result<()>) {
        self.registrations.lock().unwrap().push_back(result);
    }

    /// Every page request seen so far
    pub fn list_calls(&self) -> Vec<PageRequest> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Every registration payload seen so far
    pub fn registered(&self) -> Vec<NewUser> {
        self.registered.lock().unwrap().clone()
    }
}

impl UserDirectory for FakeDirectory {
    async fn list_users(&self, request: PageRequest) -> Result<UserPage> {
        self.list_calls.lock().unwrap().push(request);
        let scripted = self.pages.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(test_page(request, self.population)))
    }

    async fn register_user(&self, user: NewUser) -> Result<()> {
        self.registered.lock().unwrap().push(user);
        let scripted = self.registrations.lock().unwrap().pop_front();
        scripted.unwrap_or(Ok(()))
    }
}
