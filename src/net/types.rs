#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as returned by `GET /users/me`.
///
/// Field names match the provider's snake_case wire format; the name parts
/// are optional because accounts created through invites may not have them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl AuthUser {
    /// Presentation name: "First Last" when available, falling back to the
    /// email address.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Token pair minted by the login and refresh endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in milliseconds.
    pub expires: i64,
}

/// The provider's `{ data: ... }` response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of `POST /auth/refresh`. `mode` is always `"json"` so the rotated
/// refresh token comes back in the body instead of a provider cookie.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
    pub mode: &'a str,
}

/// Body of `POST /auth/logout`.
#[derive(Debug, Serialize)]
pub struct LogoutRequest<'a> {
    pub refresh_token: &'a str,
}
