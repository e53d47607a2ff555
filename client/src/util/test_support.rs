//! In-memory stand-ins for the network, token storage and busy flag.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::net::api::AuthApi;
use crate::net::types::{ApiError, AuthResponse, ErrorBody, LoginRequest, SignupRequest};
use crate::util::submit_guard::BusyFlag;
use crate::util::token_store::{StorageError, TokenStore};

pub(crate) struct FakeApi {
    reply: Result<AuthResponse, ApiError>,
    pub(crate) signups: RefCell<Vec<SignupRequest>>,
    logins: Cell<usize>,
}

impl FakeApi {
    pub(crate) fn replying(reply: Result<AuthResponse, ApiError>) -> Self {
        Self { reply, signups: RefCell::new(Vec::new()), logins: Cell::new(0) }
    }

    pub(crate) fn calls(&self) -> usize {
        self.signups.borrow().len() + self.logins.get()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.signups.borrow_mut().push(request.clone());
        self.reply.clone()
    }

    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.logins.set(self.logins.get() + 1);
        self.reply.clone()
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    pub(crate) writes: RefCell<Vec<String>>,
    pub(crate) fail: bool,
}

impl TokenStore for MemoryStore {
    fn read_token(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    fn write_token(&self, token: &str) -> Result<(), StorageError> {
        if self.fail {
            return Err(StorageError::Write("quota".to_owned()));
        }
        self.writes.borrow_mut().push(token.to_owned());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), StorageError> {
        self.writes.borrow_mut().clear();
        Ok(())
    }
}

impl BusyFlag for Cell<bool> {
    fn is_busy(&self) -> bool {
        self.get()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

pub(crate) fn token(value: &str) -> Result<AuthResponse, ApiError> {
    Ok(AuthResponse { token: Some(value.to_owned()) })
}

pub(crate) fn status(status: u16, body: &str) -> Result<AuthResponse, ApiError> {
    Err(ApiError::Status { status, body: ErrorBody::from_body(body) })
}
