//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards to coordinate login redirects. The token itself is
//! opaque; only its presence matters to the UI.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the stored token and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    /// True until the stored token has been read on the client.
    pub loading: bool,
}

impl AuthState {
    /// State before the browser has been consulted.
    pub fn pending() -> Self {
        Self { token: None, loading: true }
    }

    /// Loaded state from whatever token storage returned.
    pub fn from_token(token: Option<String>) -> Self {
        Self { token, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
