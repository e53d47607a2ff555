//! Toast notifications rendered above every page.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};
use crate::util::auth_flow::AuthOutcome;

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Push a toast and schedule its removal.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, text: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, text)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Show the message carried by a submit outcome.
pub fn show_outcome(toasts: RwSignal<ToastState>, outcome: AuthOutcome) {
    show_toast(toasts, outcome.toast_kind(), outcome.message());
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast {}", toast.kind.css_modifier())>
                            <span class="toast__text">{toast.text}</span>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| {
                                    toasts.update(|t| {
                                        t.dismiss(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
