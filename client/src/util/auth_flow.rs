//! Submit orchestration for the signup and login forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages validate through `util::submit_guard`, then hand the request to
//! `send_signup`/`send_login` and get back an `AuthOutcome` carrying the
//! single toast message to show. The token is written to the store only when
//! the backend returned one.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to one of a fixed set of messages. Nothing here
//! is fatal; the user stays on the form and can resubmit.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use crate::net::api::AuthApi;
use crate::net::types::{ApiError, AuthResponse, LoginRequest, SignupRequest};
use crate::state::toast::ToastKind;
use crate::util::token_store::TokenStore;

pub const MSG_SIGNUP_SUCCESS: &str = "Signup successful!";
pub const MSG_SIGNUP_FAILED: &str = "Signup failed.";
pub const MSG_EMAIL_EXISTS: &str = "Email already exists.";
pub const MSG_PASSWORD_REJECTED: &str = "Password does not meet requirements.";
pub const MSG_LOGIN_SUCCESS: &str = "Login successful!";
pub const MSG_LOGIN_FAILED: &str = "Login failed.";
pub const MSG_BAD_CREDENTIALS: &str = "Invalid email or password.";
pub const MSG_TRY_AGAIN: &str = "Oops! Try again later.";

/// Result of one submit attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The form failed a client-side check. No request was sent.
    Rejected(&'static str),
    /// A token was returned and stored.
    Authenticated(&'static str),
    /// The request was sent but no usable token came back.
    Failed(&'static str),
}

impl AuthOutcome {
    pub fn message(self) -> &'static str {
        match self {
            Self::Rejected(msg) | Self::Authenticated(msg) | Self::Failed(msg) => msg,
        }
    }

    pub fn toast_kind(self) -> ToastKind {
        match self {
            Self::Authenticated(_) => ToastKind::Success,
            Self::Rejected(_) | Self::Failed(_) => ToastKind::Error,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Message for a failed signup request.
///
/// 400/409 mentioning `email` means the address is taken; 400 mentioning
/// `password` means the backend's own strength rules rejected it. Anything
/// else, including no response at all, is generic.
pub fn signup_failure_message(err: &ApiError) -> &'static str {
    let (Some(status), Some(body)) = (err.status(), err.body()) else {
        return MSG_TRY_AGAIN;
    };
    if matches!(status, 400 | 409) && body.mentions("email") {
        MSG_EMAIL_EXISTS
    } else if status == 400 && body.mentions("password") {
        MSG_PASSWORD_REJECTED
    } else {
        MSG_TRY_AGAIN
    }
}

/// Message for a failed login request.
pub fn login_failure_message(err: &ApiError) -> &'static str {
    match err.status() {
        Some(400 | 401) => MSG_BAD_CREDENTIALS,
        _ => MSG_TRY_AGAIN,
    }
}

/// Call `POST /api/auth/signup` and store the returned token.
pub async fn send_signup<A, S>(api: &A, store: &S, request: &SignupRequest) -> AuthOutcome
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    match api.signup(request).await {
        Ok(resp) => store_token(store, resp, MSG_SIGNUP_SUCCESS, MSG_SIGNUP_FAILED),
        Err(err) => {
            leptos::logging::warn!("signup request failed: {err}");
            AuthOutcome::Failed(signup_failure_message(&err))
        }
    }
}

/// Call `POST /api/auth/login` and store the returned token.
pub async fn send_login<A, S>(api: &A, store: &S, request: &LoginRequest) -> AuthOutcome
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    match api.login(request).await {
        Ok(resp) => store_token(store, resp, MSG_LOGIN_SUCCESS, MSG_LOGIN_FAILED),
        Err(err) => {
            leptos::logging::warn!("login request failed: {err}");
            AuthOutcome::Failed(login_failure_message(&err))
        }
    }
}

fn store_token<S>(store: &S, resp: AuthResponse, success: &'static str, no_token: &'static str) -> AuthOutcome
where
    S: TokenStore + ?Sized,
{
    let Some(token) = resp.token else {
        return AuthOutcome::Failed(no_token);
    };
    match store.write_token(&token) {
        Ok(()) => AuthOutcome::Authenticated(success),
        Err(err) => {
            leptos::logging::warn!("token not persisted: {err}");
            AuthOutcome::Failed(MSG_TRY_AGAIN)
        }
    }
}
