use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::{AuthTokens, AuthUser};
use crate::util::cookies::{MemoryStore, TokenSlot};

// =============================================================
// Fixtures
// =============================================================

fn user() -> AuthUser {
    AuthUser {
        id: "user-1".to_owned(),
        email: "test@example.com".to_owned(),
        first_name: None,
        last_name: None,
    }
}

/// Minimal scriptable provider; guards only ever reach `me`, `refresh`,
/// and `logout` through the hydration path.
struct MockApi {
    me_results: RefCell<VecDeque<Result<AuthUser, ApiError>>>,
    calls: RefCell<Vec<&'static str>>,
}

fn mock(me_results: Vec<Result<AuthUser, ApiError>>) -> Rc<MockApi> {
    Rc::new(MockApi {
        me_results: RefCell::new(me_results.into()),
        calls: RefCell::new(Vec::new()),
    })
}

#[async_trait(?Send)]
impl crate::net::api::IdentityApi for Rc<MockApi> {
    async fn login(&self, _email: &str, _password: &str) -> Result<AuthTokens, ApiError> {
        self.calls.borrow_mut().push("login");
        Err(ApiError::Network("login not scripted".to_owned()))
    }

    async fn refresh(&self, _refresh_token: &str) -> Result<AuthTokens, ApiError> {
        self.calls.borrow_mut().push("refresh");
        Err(ApiError::Provider("Invalid refresh token.".to_owned()))
    }

    async fn me(&self, _access_token: &str) -> Result<AuthUser, ApiError> {
        self.calls.borrow_mut().push("me");
        self.me_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("me not scripted".to_owned())))
    }

    async fn logout(&self, _refresh_token: &str) -> Result<(), ApiError> {
        self.calls.borrow_mut().push("logout");
        Ok(())
    }
}

fn anonymous(api: &Rc<MockApi>) -> AuthClient<Rc<MockApi>, MemoryStore> {
    AuthClient::new(Rc::clone(api), MemoryStore::default())
}

fn with_token(api: &Rc<MockApi>) -> AuthClient<Rc<MockApi>, MemoryStore> {
    let mut store = MemoryStore::default();
    store.set(TokenSlot::Access, "t");
    AuthClient::new(Rc::clone(api), store)
}

fn signed_in(api: &Rc<MockApi>) -> AuthClient<Rc<MockApi>, MemoryStore> {
    let mut client = with_token(api);
    client.session.user = Some(user());
    client
}

// =============================================================
// auth guard
// =============================================================

#[test]
fn auth_redirects_anonymous_visitors_to_login() {
    let api = mock(vec![]);
    let mut client = anonymous(&api);

    let redirect = block_on(auth(&mut client));

    assert_eq!(redirect, Some(Redirect::Login));
    // No token, so no hydration attempt either.
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn auth_allows_authenticated_sessions_without_network_calls() {
    let api = mock(vec![]);
    let mut client = signed_in(&api);

    assert_eq!(block_on(auth(&mut client)), None);
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn auth_hydrates_the_profile_before_deciding() {
    // Reload scenario: cookie token survived, in-memory profile did not.
    let api = mock(vec![Ok(user())]);
    let mut client = with_token(&api);

    assert_eq!(block_on(auth(&mut client)), None);
    assert_eq!(*api.calls.borrow(), vec!["me"]);
    assert_eq!(client.session.user, Some(user()));
}

#[test]
fn auth_redirects_when_hydration_cannot_recover() {
    // me fails and there is no refresh token: the cascade ends in logout.
    let api = mock(vec![Err(ApiError::Provider("Token expired.".to_owned()))]);
    let mut client = with_token(&api);

    assert_eq!(block_on(auth(&mut client)), Some(Redirect::Login));
    assert!(client.session.access_token.is_none());
    assert!(client.session.user.is_none());
}

// =============================================================
// guest guard
// =============================================================

#[test]
fn guest_allows_anonymous_visitors() {
    let api = mock(vec![]);
    let mut client = anonymous(&api);

    assert_eq!(block_on(guest(&mut client)), None);
    assert!(api.calls.borrow().is_empty());
}

#[test]
fn guest_redirects_authenticated_visitors_to_the_member_page() {
    let api = mock(vec![]);
    let mut client = signed_in(&api);

    assert_eq!(block_on(guest(&mut client)), Some(Redirect::Authenticated));
}

#[test]
fn guest_hydrates_then_redirects() {
    let api = mock(vec![Ok(user())]);
    let mut client = with_token(&api);

    assert_eq!(block_on(guest(&mut client)), Some(Redirect::Authenticated));
    assert_eq!(*api.calls.borrow(), vec!["me"]);
}

// =============================================================
// Redirect paths
// =============================================================

#[test]
fn redirect_paths_match_the_routes() {
    assert_eq!(Redirect::Login.path(), "/login");
    assert_eq!(Redirect::Authenticated.path(), "/authenticated");
}
