#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;

/// Authentication state shared with the UI via a `RwSignal` context.
///
/// Pages read this to render the signed-in profile, a loading indicator,
/// and the last sign-in error. The auth client produces snapshots of it;
/// the canonical session record lives in [`crate::state::session::Session`].
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub error: Option<String>,
}
