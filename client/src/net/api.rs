//! REST API helpers for the remote auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an `ApiError`; callers map it to a
//! user-facing message and never panic on a bad response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;

use super::types::{ApiError, AuthResponse, LoginRequest, SignupRequest};
use crate::config::{API_BASE_URL, api_url};

pub const SIGNUP_PATH: &str = "/api/auth/signup";
pub const LOGIN_PATH: &str = "/api/auth/login";

/// Auth endpoints used by the signup and login pages.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /api/auth/signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /api/auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;
}

/// `AuthApi` backed by `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Client pointed at the compile-time `API_BASE_URL`.
    pub fn from_config() -> Self {
        Self::new(API_BASE_URL)
    }

    pub fn endpoint(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

impl Default for HttpAuthApi {
    fn default() -> Self {
        Self::from_config()
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        post_json(&self.endpoint(SIGNUP_PATH), request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        post_json(&self.endpoint(LOGIN_PATH), request).await
    }
}

/// POST a JSON payload and classify the response.
///
/// A 2xx answer always yields an `AuthResponse`, even when the body is not
/// JSON; the caller decides what a missing token means.
async fn post_json<T: Serialize>(url: &str, payload: &T) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::ErrorBody;

        let resp = gloo_net::http::Request::post(url)
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !ok {
            return Err(ApiError::Status { status, body: ErrorBody::from_body(&body) });
        }
        Ok(AuthResponse::from_body(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, payload);
        Err(ApiError::Unavailable)
    }
}
