//! Persistence of the opaque auth token.
//!
//! The browser implementation writes to `localStorage` under a fixed key.
//! Outside the browser every operation reports `StorageError::Unavailable`
//! and reads return `None`.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

pub const TOKEN_STORAGE_KEY: &str = "token";

/// Failure to reach or write browser storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No `window` or `localStorage` (SSR, native tests, storage disabled).
    #[error("local storage unavailable")]
    Unavailable,

    /// The storage call threw (quota exceeded, private mode).
    #[error("local storage write failed: {0}")]
    Write(String),
}

/// Where the auth token lives between page loads.
pub trait TokenStore {
    fn read_token(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the token could not be persisted.
    fn write_token(&self, token: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error if storage could not be reached.
    fn clear_token(&self) -> Result<(), StorageError>;
}

/// `TokenStore` backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl TokenStore for LocalTokenStore {
    fn read_token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()
                .ok()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|t| !t.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write_token(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(TOKEN_STORAGE_KEY, token)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(StorageError::Unavailable)
        }
    }

    fn clear_token(&self) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(TOKEN_STORAGE_KEY)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}
