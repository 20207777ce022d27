//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `timeturner_core` linkage.
//! - Keep output deterministic enough for quick local sanity checks.

use chrono::{Local, Timelike};
use timeturner_core::cycle::organ;

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // popup/FFI runtime setup.
    println!("timeturner_core ping={}", timeturner_core::ping());
    println!("timeturner_core version={}", timeturner_core::core_version());

    let now = Local::now().naive_local();
    let state = organ::organ_state(now.hour(), now.minute());
    println!(
        "organ_hour index={} organ={} next={} minutes_remaining={}",
        state.index, state.organ.name, state.next.name, state.minutes_until_transition
    );
}
