#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::AuthUser;

/// The credential record for the current browser session.
///
/// Tokens are rehydrated from cookies on construction; the profile only
/// ever comes from a successful `/users/me` call, so a fresh reload starts
/// with tokens but no user until the guards hydrate it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<AuthUser>,
}

impl Session {
    /// A session counts as authenticated only with both an access token and
    /// a fetched profile.
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    /// Drop both tokens and the cached profile.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.user = None;
    }
}
