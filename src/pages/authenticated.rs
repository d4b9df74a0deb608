//! Protected member page shown after a successful sign-in.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Member page — requires an authenticated session. The auth guard
/// hydrates the profile from the persisted token after a reload and
/// redirects to `/login` when the session cannot be recovered.
#[component]
pub fn AuthenticatedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Auth guard: runs once after mount.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut client = crate::net::auth_client::AuthClient::browser();
                match crate::guards::auth(&mut client).await {
                    Some(redirect) => navigate(redirect.path(), NavigateOptions::default()),
                    None => auth.set(client.snapshot()),
                }
            });
        });
    }

    let sign_out = Callback::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut client = crate::net::auth_client::AuthClient::browser();
                client.logout().await;
                auth.set(client.snapshot());
                navigate(crate::guards::Redirect::Login.path(), NavigateOptions::default());
            });
        }
    });

    let greeting = move || {
        auth.get().user.map_or_else(
            || "Loading...".to_owned(),
            |user| format!("Welcome back, {}", user.display_name()),
        )
    };
    let email = move || auth.get().user.map(|user| user.email);

    view! {
        <div class="authenticated-page">
            <h1>"Authenticated"</h1>
            <p class="authenticated-page__greeting">{greeting}</p>
            <p class="authenticated-page__email">{email}</p>
            <button class="btn" on:click=move |_| sign_out.run(())>
                "Sign Out"
            </button>
        </div>
    }
}
