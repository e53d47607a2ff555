//! Build-time client configuration.
//!
//! `API_BASE_URL` is baked into the WASM bundle when it is compiled. Leaving
//! it unset sends auth requests to the origin that served the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the remote auth backend, without a trailing path.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "",
};

/// Join a base URL and an absolute API path, tolerating trailing slashes.
pub fn api_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
