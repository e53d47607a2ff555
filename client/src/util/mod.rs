//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod auth_flow;
pub mod submit_guard;
pub mod token_store;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;
