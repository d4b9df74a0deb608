//! Login page with the email/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Login page — guest-only. An already-authenticated visitor is sent to
/// `/authenticated` by the guest guard; a successful sign-in navigates
/// there as well.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    // Guest guard: runs once after mount.
    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut client = crate::net::auth_client::AuthClient::browser();
                if let Some(redirect) = crate::guards::guest(&mut client).await {
                    navigate(redirect.path(), NavigateOptions::default());
                }
            });
        });
    }

    let submit = Callback::new(move |_| {
        let email_value = email.get();
        let password_value = password.get();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                auth.update(|state| {
                    state.loading = true;
                    state.error = None;
                });

                let mut client = crate::net::auth_client::AuthClient::browser();
                let ok = client.login(email_value.trim(), &password_value).await;
                auth.set(client.snapshot());

                if ok {
                    navigate(
                        crate::guards::Redirect::Authenticated.path(),
                        NavigateOptions::default(),
                    );
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Login"</h1>
            <form
                class="login-page__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="login-page__label">
                    "Email"
                    <input
                        class="login-page__input"
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                        }
                    />
                </label>
                <label class="login-page__label">
                    "Password"
                    <input
                        class="login-page__input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                        }
                    />
                </label>

                <Show when=move || auth.get().error.is_some()>
                    <p class="login-page__error">{move || auth.get().error.unwrap_or_default()}</p>
                </Show>

                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || auth.get().loading
                >
                    {move || if auth.get().loading { "Signing In..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
