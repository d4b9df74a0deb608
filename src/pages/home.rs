//! Public landing page.

use leptos::prelude::*;

/// Home page — a plain landing page with a link into the login flow.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Hello World"</h1>
            <a href="/login" class="btn btn--primary">
                "Login"
            </a>
        </div>
    }
}
