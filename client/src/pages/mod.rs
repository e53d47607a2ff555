//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates submit logic to
//! `util::auth_flow`.

pub mod dashboard;
pub mod login;
pub mod signup;
