//! Cookie-backed token persistence.
//!
//! Tokens survive page reloads in two named cookies with different
//! lifetimes: the access token for 7 days, the refresh token for 30.
//! Access goes through the [`TokenStore`] trait so the auth client and the
//! guards never touch `document.cookie` directly; [`CookieStore`] is the
//! browser implementation and [`MemoryStore`] backs native tests and the
//! server-side stubs.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

/// The two persisted credential slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenSlot {
    Access,
    Refresh,
}

impl TokenSlot {
    /// Cookie name backing this slot.
    pub fn cookie_name(self) -> &'static str {
        match self {
            Self::Access => "auth_token",
            Self::Refresh => "auth_refresh_token",
        }
    }

    /// Declared cookie lifetime in seconds.
    pub fn max_age_secs(self) -> u32 {
        match self {
            Self::Access => 60 * 60 * 24 * 7,
            Self::Refresh => 60 * 60 * 24 * 30,
        }
    }
}

/// Persistence adapter for the two token slots.
pub trait TokenStore {
    fn get(&self, slot: TokenSlot) -> Option<String>;
    fn set(&mut self, slot: TokenSlot, value: &str);
    fn clear(&mut self, slot: TokenSlot);
}

/// Plain in-memory store for native tests and non-browser builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    access: Option<String>,
    refresh: Option<String>,
}

impl MemoryStore {
    fn slot_mut(&mut self, slot: TokenSlot) -> &mut Option<String> {
        match slot {
            TokenSlot::Access => &mut self.access,
            TokenSlot::Refresh => &mut self.refresh,
        }
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, slot: TokenSlot) -> Option<String> {
        match slot {
            TokenSlot::Access => self.access.clone(),
            TokenSlot::Refresh => self.refresh.clone(),
        }
    }

    fn set(&mut self, slot: TokenSlot, value: &str) {
        *self.slot_mut(slot) = Some(value.to_owned());
    }

    fn clear(&mut self, slot: TokenSlot) {
        *self.slot_mut(slot) = None;
    }
}

/// `document.cookie`-backed store. Requires a browser environment; outside
/// the `hydrate` build every operation is inert.
pub struct CookieStore;

impl TokenStore for CookieStore {
    fn get(&self, slot: TokenSlot) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            raw_cookies().and_then(|cookies| cookie_value(&cookies, slot.cookie_name()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = slot;
            None
        }
    }

    fn set(&mut self, slot: TokenSlot, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            write_cookie(&set_cookie(slot, value));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slot, value);
        }
    }

    fn clear(&mut self, slot: TokenSlot) {
        #[cfg(feature = "hydrate")]
        {
            write_cookie(&clear_cookie(slot));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = slot;
        }
    }
}

/// Find a named cookie in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name).then(|| value.to_owned())
    })
}

/// `Set-Cookie`-style assignment string for a slot, with its declared
/// expiry and lax same-site policy.
pub fn set_cookie(slot: TokenSlot, value: &str) -> String {
    format!(
        "{}={value}; Max-Age={}; Path=/; SameSite=Lax",
        slot.cookie_name(),
        slot.max_age_secs()
    )
}

/// Assignment string that expires a slot's cookie immediately.
pub fn clear_cookie(slot: TokenSlot) -> String {
    format!("{}=; Max-Age=0; Path=/; SameSite=Lax", slot.cookie_name())
}

#[cfg(feature = "hydrate")]
fn raw_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    document.cookie().ok()
}

#[cfg(feature = "hydrate")]
fn write_cookie(assignment: &str) {
    use wasm_bindgen::JsCast;

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(document) = document.dyn_into::<web_sys::HtmlDocument>() {
            let _ = document.set_cookie(assignment);
        }
    }
}
