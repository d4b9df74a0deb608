//! Auth client orchestrating login, refresh, and logout.
//!
//! The `AuthClient` is the bridge between the identity provider, the
//! cookie-persisted tokens, and the auth state rendered by pages. It is
//! the single owner of the refresh policy: an authenticated fetch that
//! fails gets exactly one silent refresh, and a rejected refresh tears the
//! whole session down.
//!
//! The client is generic over [`IdentityApi`] and [`TokenStore`] so the
//! session state machine runs natively in tests; [`AuthClient::browser`]
//! wires the production pair.

#[cfg(test)]
#[path = "auth_client_test.rs"]
mod auth_client_test;

use crate::config;
use crate::net::api::{ApiError, DirectusApi, IdentityApi};
use crate::net::types::AuthTokens;
use crate::state::auth::AuthState;
use crate::state::session::Session;
use crate::util::cookies::{CookieStore, TokenSlot, TokenStore};

/// Client-side authentication flows over a provider API and a token store.
pub struct AuthClient<A, S> {
    api: A,
    store: S,
    pub session: Session,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthClient<DirectusApi, CookieStore> {
    /// Client wired to the configured provider and cookie persistence.
    pub fn browser() -> Self {
        Self::new(DirectusApi::new(config::directus_url()), CookieStore)
    }
}

impl<A: IdentityApi, S: TokenStore> AuthClient<A, S> {
    /// Build a client, rehydrating persisted tokens from the store.
    ///
    /// The profile is never persisted, so after a reload the session may
    /// hold tokens without a user until a guard hydrates it.
    pub fn new(api: A, store: S) -> Self {
        let session = Session {
            access_token: store.get(TokenSlot::Access),
            refresh_token: store.get(TokenSlot::Refresh),
            user: None,
        };
        Self { api, store, session, loading: false, error: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Read access to the persistence adapter.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Plain state snapshot for the UI signal.
    pub fn snapshot(&self) -> AuthState {
        AuthState {
            user: self.session.user.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }

    /// Sign in with email and password.
    ///
    /// On success both tokens are stored and the profile is fetched; on
    /// failure the session is left untouched and [`AuthClient::error`]
    /// holds the provider's message. Returns whether the sign-in succeeded.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        if email.is_empty() || password.is_empty() {
            self.error = Some("Email and password are required".to_owned());
            return false;
        }

        self.loading = true;
        self.error = None;

        let ok = match self.api.login(email, password).await {
            Ok(tokens) => {
                self.store_tokens(&tokens);
                self.fetch_user().await;
                true
            }
            Err(err) => {
                self.error = Some(login_error_message(&err));
                false
            }
        };

        self.loading = false;
        ok
    }

    /// Fetch the profile for the current access token.
    ///
    /// Without a token this only clears the cached profile. A failed fetch
    /// gets one silent refresh; if that also fails the session is logged
    /// out.
    pub async fn fetch_user(&mut self) {
        let Some(token) = self.session.access_token.clone() else {
            self.session.user = None;
            return;
        };

        match self.api.me(&token).await {
            Ok(user) => self.session.user = Some(user),
            Err(_) => {
                // Access token may have expired mid-session.
                if !self.refresh().await {
                    self.logout().await;
                }
            }
        }
    }

    /// Exchange the stored refresh token for a rotated token pair.
    ///
    /// Returns false without a network call when no refresh token is
    /// stored, and leaves the session unchanged when the provider rejects
    /// the exchange.
    pub async fn refresh(&mut self) -> bool {
        let Some(refresh_token) = self.session.refresh_token.clone() else {
            return false;
        };

        match self.api.refresh(&refresh_token).await {
            Ok(tokens) => {
                self.store_tokens(&tokens);
                self.load_user().await;
                true
            }
            Err(_) => false,
        }
    }

    /// Sign out: best-effort server-side invalidation, then unconditional
    /// local teardown of tokens, profile, and error state.
    pub async fn logout(&mut self) {
        if let Some(refresh_token) = self.session.refresh_token.clone() {
            // The session is cleared regardless of what the provider says.
            let _ = self.api.logout(&refresh_token).await;
        }

        self.store.clear(TokenSlot::Access);
        self.store.clear(TokenSlot::Refresh);
        self.session.clear();
        self.error = None;
    }

    /// Single profile fetch without the refresh fallback; used right after
    /// a refresh has already minted a fresh access token.
    async fn load_user(&mut self) {
        let Some(token) = self.session.access_token.clone() else {
            self.session.user = None;
            return;
        };

        match self.api.me(&token).await {
            Ok(user) => self.session.user = Some(user),
            // Token-without-profile; the guards repair this on the next
            // navigation.
            Err(_) => self.session.user = None,
        }
    }

    fn store_tokens(&mut self, tokens: &AuthTokens) {
        self.store.set(TokenSlot::Access, &tokens.access_token);
        self.store.set(TokenSlot::Refresh, &tokens.refresh_token);
        self.session.access_token = Some(tokens.access_token.clone());
        self.session.refresh_token = Some(tokens.refresh_token.clone());
    }
}

/// Message shown on the login form for a failed sign-in.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Provider(message) => message.clone(),
        ApiError::Network(_) | ApiError::Unavailable => "Login failed".to_owned(),
    }
}
