//! UI-facing FFI crate for the Time Turner popup.
//!
//! Exposes the use-case API from [`api`] to the embedding UI runtime.

pub mod api;
