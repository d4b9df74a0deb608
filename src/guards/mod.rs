//! Route guards for protected and guest-only pages.
//!
//! Guards are pure decision functions: read the session, optionally run
//! one lazy profile hydration, and return a [`Redirect`] or nothing. The
//! hosting page applies the directive with the router's `navigate`.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::net::api::IdentityApi;
use crate::net::auth_client::AuthClient;
use crate::util::cookies::TokenStore;

/// Navigation directive returned by a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Authenticated,
}

impl Redirect {
    /// Route path the host should navigate to.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Authenticated => "/authenticated",
        }
    }
}

/// Guard for protected routes: unauthenticated visitors go to `/login`.
pub async fn auth<A: IdentityApi, S: TokenStore>(
    client: &mut AuthClient<A, S>,
) -> Option<Redirect> {
    hydrate_session(client).await;
    if client.is_authenticated() { None } else { Some(Redirect::Login) }
}

/// Guard for login-only routes: authenticated visitors go to
/// `/authenticated`.
pub async fn guest<A: IdentityApi, S: TokenStore>(
    client: &mut AuthClient<A, S>,
) -> Option<Redirect> {
    hydrate_session(client).await;
    if client.is_authenticated() { Some(Redirect::Authenticated) } else { None }
}

/// Lazy hydration: a persisted token without a profile (fresh reload, or a
/// crash between the token write and the profile fetch) gets one
/// `fetch_user` to settle the session before the guard decides.
async fn hydrate_session<A: IdentityApi, S: TokenStore>(client: &mut AuthClient<A, S>) {
    if client.session.access_token.is_some() && !client.is_authenticated() {
        client.fetch_user().await;
    }
}
