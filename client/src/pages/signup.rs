//! Signup page: name, email and password with client-side checks.
//!
//! Submits go through `util::submit_guard`: a submit while a request is
//! outstanding is ignored, and only a stored token navigates away.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::net::types::SignupRequest;
use crate::util::auth::LOGIN_ROUTE;
use crate::util::auth_flow::send_signup;
use crate::util::submit_guard::{FormContext, submit_form};
use crate::util::token_store::LocalTokenStore;
use crate::util::validation::{PASSWORD_HINT, SignupForm, validate_signup};

/// Email is kept lowercase as it is typed.
pub(crate) fn normalize_email_input(raw: &str) -> String {
    raw.to_lowercase()
}

pub(crate) fn submit_label(loading: bool, idle: &'static str) -> &'static str {
    if loading { "Please wait..." } else { idle }
}

pub(crate) fn submit_button_class(loading: bool) -> &'static str {
    if loading {
        "auth-button auth-button--busy"
    } else {
        "auth-button"
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = FormContext::from_context();
    let loading = ctx.loading;
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        submit_form(
            ctx,
            navigate.clone(),
            || validate_signup(&form),
            |request: SignupRequest| async move { send_signup(&HttpAuthApi::from_config(), &LocalTokenStore, &request).await },
        );
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">"Signup"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <p class="auth-form__hint">
                        <em>{PASSWORD_HINT}</em>
                    </p>
                    <button class=move || submit_button_class(loading.get()) type="submit">
                        {move || submit_label(loading.get(), "Signup")}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href=LOGIN_ROUTE attr:class="auth-link">
                        "Login"
                    </A>
                </p>
            </div>
        </div>
    }
}
