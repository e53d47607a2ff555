//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read/write shared state from Leptos context providers.

pub mod toast_stack;
