//! Core domain types for user administration

use std::fmt;
use std::str::FromStr;

/// Page sizes offered by the listing screen
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [5, 10, 20, 50];

/// Page size used when nothing else is configured
pub const DEFAULT_PAGE_SIZE: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// A user account as reported by the backend.
///
/// Never edited in place; a fresh page fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Server-assigned identifier
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Role names in the order the backend returned them
    pub roles: Vec<String>,
    /// Free-form status label (e.g. "ACTIVE")
    pub status: String,
}

impl User {
    /// Role names joined for a single table cell
    pub fn roles_label(&self) -> String {
        self.roles.join(", ")
    }
}

/// Roles an administrator can assign when creating a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Instructor,
    Client,
}

impl Role {
    /// All assignable roles in display order
    pub const ALL: [Role; 3] = [Role::Admin, Role::Instructor, Role::Client];

    /// Wire name sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Instructor => "INSTRUCTOR",
            Role::Client => "CLIENT",
        }
    }

    /// Human-readable label for the role selector
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Instructor => "Instructor",
            Role::Client => "Client",
        }
    }

    /// Next role in [`Role::ALL`], `None` wraps to the first
    pub fn cycle_next(current: Option<Role>) -> Role {
        match current.and_then(|role| Self::ALL.iter().position(|r| *r == role)) {
            Some(index) => Self::ALL[(index + 1) % Self::ALL.len()],
            None => Self::ALL[0],
        }
    }

    /// Previous role in [`Role::ALL`], `None` wraps to the last
    pub fn cycle_prev(current: Option<Role>) -> Role {
        let last = Self::ALL.len() - 1;
        match current.and_then(|role| Self::ALL.iter().position(|r| *r == role)) {
            Some(0) | None => Self::ALL[last],
            Some(index) => Self::ALL[index - 1],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a role wire name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "INSTRUCTOR" => Ok(Role::Instructor),
            "CLIENT" => Ok(Role::Client),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Registration payload for a new account
#[derive(Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("role", &self.role)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paging
// ─────────────────────────────────────────────────────────────────────────────

/// A zero-based page index plus page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: usize, size: u32) -> Self {
        Self { page, size }
    }
}

/// One page of users plus the server-derived totals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPage {
    pub content: Vec<User>,
    pub total_pages: usize,
    pub total_elements: u64,
}
