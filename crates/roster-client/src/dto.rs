//! Wire shapes of the admin users endpoints
//!
//! The backend speaks camelCase JSON. These types stay private to the
//! client and are converted into `roster_core` domain types at the edge.

use roster_core::{NewUser, User, UserPage};
use serde::{Deserialize, Serialize};

/// Role object nested inside a listed user (`{"id": 1, "name": "ADMIN"}`).
/// Only the name is shown, so the id is left to serde's unknown-field skip.
#[derive(Debug, Deserialize)]
pub(crate) struct RoleDto {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<RoleDto>,
    #[serde(default)]
    pub status: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            id: dto.id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            roles: dto.roles.into_iter().map(|role| role.name).collect(),
            status: dto.status,
        }
    }
}

/// Body of `GET admin/users`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserPageDto {
    pub content: Vec<UserDto>,
    pub total_pages: usize,
    pub total_elements: u64,
}

impl From<UserPageDto> for UserPage {
    fn from(dto: UserPageDto) -> Self {
        UserPage {
            content: dto.content.into_iter().map(User::from).collect(),
            total_pages: dto.total_pages,
            total_elements: dto.total_elements,
        }
    }
}

/// Body of `POST admin/users/register`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterUserRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub role: &'a str,
}

impl<'a> From<&'a NewUser> for RegisterUserRequest<'a> {
    fn from(user: &'a NewUser) -> Self {
        RegisterUserRequest {
            email: &user.email,
            password: &user.password,
            first_name: &user.first_name,
            last_name: &user.last_name,
            role: user.role.as_str(),
        }
    }
}

/// Error body the backend may attach to a non-2xx response
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Pull the display message out of an error response body.
///
/// Bodies that are empty, not JSON, or lack a string `message` yield `None`.
pub(crate) fn parse_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty())
}
