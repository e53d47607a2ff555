//! Dashboard landing page shown after signup or login.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::token_store::{LocalTokenStore, TokenStore};

/// Dashboard page. Redirects to `/login` if no token is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    // Clearing the auth state trips the redirect above.
    let on_logout = move |_| {
        if let Err(e) = LocalTokenStore.clear_token() {
            leptos::logging::warn!("logout: {e}");
        }
        auth.set(AuthState::from_token(None));
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <p class="dashboard-page__welcome">"You're signed in."</p>
        </div>
    }
}
