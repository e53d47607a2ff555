//! Login page with email + password.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::signup::{normalize_email_input, submit_button_class, submit_label};
use crate::net::api::HttpAuthApi;
use crate::net::types::LoginRequest;
use crate::util::auth::SIGNUP_ROUTE;
use crate::util::auth_flow::send_login;
use crate::util::submit_guard::{FormContext, submit_form};
use crate::util::token_store::LocalTokenStore;
use crate::util::validation::{LoginForm, validate_login};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = FormContext::from_context();
    let loading = ctx.loading;
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        submit_form(
            ctx,
            navigate.clone(),
            || validate_login(&form),
            |request: LoginRequest| async move { send_login(&HttpAuthApi::from_config(), &LocalTokenStore, &request).await },
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(normalize_email_input(&event_target_value(&ev)))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class=move || submit_button_class(loading.get()) type="submit">
                        {move || submit_label(loading.get(), "Login")}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href=SIGNUP_ROUTE attr:class="auth-link">
                        "Signup"
                    </A>
                </p>
            </div>
        </div>
    }
}
