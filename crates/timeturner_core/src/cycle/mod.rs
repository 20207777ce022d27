//! Temporal-cycle calculators.
//!
//! # Responsibility
//! - Derive zodiac, organ-hour and biorhythm positions from calendar input.
//! - Project evenly spaced ring items onto dial coordinates.
//!
//! # Invariants
//! - Every function here is total over its documented input domain, pure and
//!   free of shared state; callers may invoke them from any thread.
//! - Fixed lookup tables (zodiac ranges, organ windows, cycle periods) are
//!   domain conventions and must not be re-derived or reordered.
//!
//! # See also
//! - docs/architecture/cycles.md

pub mod biorhythm;
pub mod layout;
pub mod organ;
pub mod zodiac;
