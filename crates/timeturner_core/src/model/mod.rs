//! Domain model for the Time Turner dial.
//!
//! # Responsibility
//! - Define the persisted birth profile and its wire shape.
//! - Keep one canonical record feeding every ring of the dial.
//!
//! # Invariants
//! - Exactly one profile record exists, stored under a fixed key.
//! - Model types carry no visual state; rendering stays in the UI.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod profile;
