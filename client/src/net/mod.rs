//! Networking modules for the remote auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema and the
//! request error type.

pub mod api;
pub mod types;
