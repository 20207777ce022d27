//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the key-value access contract for the persisted profile.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `BirthProfile::validate()` before
//!   persistence.
//! - Read paths reject invalid persisted state instead of masking it.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod profile_repo;
