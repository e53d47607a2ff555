//! Wire types for the remote auth endpoints.
//!
//! DESIGN
//! ======
//! Response bodies are read as loose JSON and only the string fields the UI
//! branches on are extracted. A body that is not JSON, or carries a field of
//! the wrong type, degrades to "field absent" instead of a decode error.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// JSON body for `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    /// Always lowercased before it reaches the wire.
    pub email: String,
    pub password: String,
}

/// JSON body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful auth response. Only the opaque token is of interest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthResponse {
    /// Present only when the body carried a non-empty string `token`.
    pub token: Option<String>,
}

impl AuthResponse {
    /// Extract the token from a raw response body.
    pub fn from_body(body: &str) -> Self {
        let token = string_field(body, "token").filter(|t| !t.is_empty());
        Self { token }
    }
}

/// Error body returned alongside a non-2xx status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn from_body(body: &str) -> Self {
        Self {
            message: string_field(body, "message"),
            error: string_field(body, "error"),
        }
    }

    /// True when either `message` or `error` contains `needle`, ignoring case.
    pub fn mentions(&self, needle: &str) -> bool {
        [&self.message, &self.error]
            .into_iter()
            .flatten()
            .any(|text| text.to_lowercase().contains(needle))
    }
}

/// Failure of a single auth request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: ErrorBody },

    /// No response was received (connection refused, CORS, aborted body read).
    #[error("network error: {0}")]
    Network(String),

    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Unavailable => None,
        }
    }

    /// Error body when a response was received.
    pub fn body(&self) -> Option<&ErrorBody> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::Network(_) | Self::Unavailable => None,
        }
    }
}

fn string_field(body: &str, key: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get(key)?.as_str().map(str::to_owned)
}
