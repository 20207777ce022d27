//! Core domain logic for the Time Turner popup.
//! This crate is the single source of truth for dial calculations and the
//! persisted birth profile; the UI renders what it is handed and nothing more.

pub mod cycle;
pub mod db;
pub mod host;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use cycle::biorhythm::{
    elapsed_days, phase, readings, BiorhythmCycle, BiorhythmReading, Trend, CYCLES,
};
pub use cycle::layout::{
    dial_position, ring_position, Point, RingPoint, DIAL_CENTER, TOP_OFFSET_DEG,
};
pub use cycle::organ::{organ_state, OrganHour, OrganState, ORGAN_HOURS};
pub use cycle::zodiac::{resolve as resolve_zodiac, ZodiacRange, ZODIAC_RANGES};
pub use host::{acknowledge, HostAck};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::profile::{BirthProfile, Location, ProfileValidationError, PROFILE_RECORD_KEY};
pub use repo::profile_repo::{
    ProfileRepository, RepoError, RepoResult, SqliteProfileRepository,
};
pub use service::dial_service::{build_dial_snapshot, ClockHands, DialSnapshot, ZodiacPlacement};
pub use service::profile_service::{ProfileService, SaveProfileRequest};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
