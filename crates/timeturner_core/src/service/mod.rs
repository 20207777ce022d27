//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate profile persistence into use-case level APIs.
//! - Compose calculator outputs into one render-ready dial snapshot.
//! - Keep UI/FFI layers decoupled from storage and calculation details.

pub mod dial_service;
pub mod profile_service;
