//! REST client for the identity provider.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning [`ApiError::Unavailable`] since authentication
//! only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Provider rejections carry the first message from the `{errors: [...]}`
//! body so the login form can show it verbatim; everything else collapses
//! into [`ApiError::Network`]. Callers decide whether an error is
//! recoverable (refresh) or terminal (logout).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::net::types::{AuthTokens, AuthUser};
#[cfg(feature = "hydrate")]
use crate::net::types::{Data, LoginRequest, LogoutRequest, RefreshRequest};

/// Errors surfaced by identity provider calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The provider rejected the request and supplied a message.
    #[error("{0}")]
    Provider(String),
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Network(String),
    /// Browser-only endpoint invoked outside the browser build.
    #[error("identity provider not available outside the browser")]
    Unavailable,
}

/// The identity provider operations the auth client depends on.
///
/// The trait is the seam that keeps the session/refresh policy natively
/// testable; [`DirectusApi`] is the production implementation.
#[async_trait(?Send)]
pub trait IdentityApi {
    /// Exchange credentials for a token pair.
    ///
    /// # Errors
    ///
    /// [`ApiError::Provider`] when the credentials are rejected, otherwise
    /// [`ApiError::Network`].
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, ApiError>;

    /// Exchange a refresh token for a rotated token pair.
    ///
    /// # Errors
    ///
    /// [`ApiError::Provider`] when the refresh token is expired or revoked,
    /// otherwise [`ApiError::Network`].
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, ApiError>;

    /// Fetch the profile of the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// [`ApiError::Provider`] when the token is rejected, otherwise
    /// [`ApiError::Network`].
    async fn me(&self, access_token: &str) -> Result<AuthUser, ApiError>;

    /// Invalidate a refresh token server-side.
    ///
    /// # Errors
    ///
    /// Same split as the other calls; callers treat logout errors as
    /// non-fatal.
    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError>;
}

/// REST client for a Directus-style identity provider.
pub struct DirectusApi {
    base_url: String,
}

impl DirectusApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl IdentityApi for DirectusApi {
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/auth/login", self.base_url);
            let resp = post_json(&url, &LoginRequest { email, password }).await?;
            read_data::<AuthTokens>(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/auth/refresh", self.base_url);
            let resp = post_json(&url, &RefreshRequest { refresh_token, mode: "json" }).await?;
            read_data::<AuthTokens>(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(ApiError::Unavailable)
        }
    }

    async fn me(&self, access_token: &str) -> Result<AuthUser, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/users/me", self.base_url);
            let resp = gloo_net::http::Request::get(&url)
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            read_data::<AuthUser>(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{}/auth/logout", self.base_url);
            let resp = post_json(&url, &LogoutRequest { refresh_token }).await?;
            if resp.ok() {
                Ok(())
            } else {
                Err(into_api_error(resp).await)
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = refresh_token;
            Err(ApiError::Unavailable)
        }
    }
}

/// Extract the first provider error message from an error body.
///
/// The provider reports failures as `{"errors": [{"message": ...}, ...]}`;
/// anything that doesn't match yields `None` and callers fall back to a
/// generic message.
pub fn first_error_message(body: &serde_json::Value) -> Option<String> {
    body.get("errors")?
        .as_array()?
        .first()?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize>(
    url: &str,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError> {
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))
}

/// Unwrap a `{ data: ... }` success body, or map the failure status into
/// an [`ApiError`].
#[cfg(feature = "hydrate")]
async fn read_data<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(into_api_error(resp).await);
    }
    resp.json::<Data<T>>()
        .await
        .map(|envelope| envelope.data)
        .map_err(|err| ApiError::Network(err.to_string()))
}

#[cfg(feature = "hydrate")]
async fn into_api_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    match resp.json::<serde_json::Value>().await {
        Ok(body) => first_error_message(&body).map_or_else(
            || ApiError::Network(format!("request failed with status {status}")),
            ApiError::Provider,
        ),
        Err(_) => ApiError::Network(format!("request failed with status {status}")),
    }
}
