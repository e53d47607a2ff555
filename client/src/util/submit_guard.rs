//! At-most-one submit in flight per form.
//!
//! `begin_submit` runs synchronously in the event handler. It ignores the
//! submit while a request is outstanding, validates, and raises the busy flag
//! only for a valid form. `finish_submit` lowers the flag once the request
//! resolves, whatever the outcome.

#[cfg(test)]
#[path = "submit_guard_test.rs"]
mod submit_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::components::toast_stack::show_outcome;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth_flow::AuthOutcome;

/// The loading flag a form shows while its request is outstanding.
pub trait BusyFlag {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

impl BusyFlag for RwSignal<bool> {
    fn is_busy(&self) -> bool {
        self.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

/// What a submit attempt turned into before any network call.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitStart<R> {
    /// A request is already in flight.
    Ignored,
    /// The form failed a client-side check; the flag was not raised.
    Rejected(&'static str),
    /// The flag is raised and the request may be sent.
    Started(R),
}

pub fn begin_submit<F, R>(flag: &F, validate: impl FnOnce() -> Result<R, &'static str>) -> SubmitStart<R>
where
    F: BusyFlag + ?Sized,
{
    if flag.is_busy() {
        return SubmitStart::Ignored;
    }
    match validate() {
        Ok(request) => {
            flag.set_busy(true);
            SubmitStart::Started(request)
        }
        Err(msg) => SubmitStart::Rejected(msg),
    }
}

#[cfg(any(test, feature = "hydrate"))]
pub async fn finish_submit<F, Fut>(flag: &F, request: Fut) -> AuthOutcome
where
    F: BusyFlag + ?Sized,
    Fut: Future<Output = AuthOutcome>,
{
    let outcome = request.await;
    flag.set_busy(false);
    outcome
}

/// Signals shared by the signup and login forms.
#[derive(Clone, Copy)]
pub struct FormContext {
    pub loading: RwSignal<bool>,
    pub toasts: RwSignal<ToastState>,
    pub auth: RwSignal<AuthState>,
}

impl FormContext {
    /// Fresh loading flag plus the app-wide toast and auth contexts.
    pub fn from_context() -> Self {
        Self {
            loading: RwSignal::new(false),
            toasts: expect_context::<RwSignal<ToastState>>(),
            auth: expect_context::<RwSignal<AuthState>>(),
        }
    }
}

/// Guard, validate and send one form submit, then toast the outcome and
/// navigate to the dashboard once a token is stored.
pub fn submit_form<R, Fut, N>(
    ctx: FormContext,
    navigate: N,
    validate: impl FnOnce() -> Result<R, &'static str>,
    send: impl FnOnce(R) -> Fut + 'static,
) where
    R: 'static,
    Fut: Future<Output = AuthOutcome> + 'static,
    N: Fn(&str, NavigateOptions) + 'static,
{
    match begin_submit(&ctx.loading, validate) {
        SubmitStart::Ignored => {}
        SubmitStart::Rejected(msg) => show_outcome(ctx.toasts, AuthOutcome::Rejected(msg)),
        SubmitStart::Started(request) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                use crate::util::auth::DASHBOARD_ROUTE;
                use crate::util::token_store::{LocalTokenStore, TokenStore};

                let outcome = finish_submit(&ctx.loading, send(request)).await;
                show_outcome(ctx.toasts, outcome);
                if outcome.is_authenticated() {
                    ctx.auth.set(AuthState::from_token(LocalTokenStore.read_token()));
                    navigate(DASHBOARD_ROUTE, NavigateOptions::default());
                }
            });

            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (request, send, navigate);
                ctx.loading.set_busy(false);
            }
        }
    }
}
