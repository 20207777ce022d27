//! Profile use-case service.
//!
//! # Responsibility
//! - Provide stable load/save entry points for core callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Save paths validate before touching storage; an invalid form submission
//!   never reaches the calculators or the database.
//! - Service layer remains storage-agnostic.

use crate::model::profile::{BirthProfile, Location};
use crate::repo::profile_repo::{ProfileRepository, RepoResult};

/// Raw form submission from the profile editor, prior to validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveProfileRequest {
    pub name: String,
    /// `YYYY-MM-DD` as emitted by the date input.
    pub birth_date: String,
    /// `HH:MM` 24-hour as emitted by the time input.
    pub birth_time: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Use-case service wrapper for profile load/save.
pub struct ProfileService<R: ProfileRepository> {
    repo: R,
}

impl<R: ProfileRepository> ProfileService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a form submission and persists it as the profile record.
    ///
    /// Returns the captured profile so callers can refresh their state
    /// without a follow-up load.
    pub fn save_from_form(&self, request: &SaveProfileRequest) -> RepoResult<BirthProfile> {
        let profile = BirthProfile::from_wire(
            &request.name,
            &request.birth_date,
            &request.birth_time,
            Location {
                address: request.address.trim().to_string(),
                lat: request.lat,
                lng: request.lng,
            },
        )?;
        self.repo.save_profile(&profile)?;
        Ok(profile)
    }

    /// Persists an already-validated profile (import/restore paths).
    pub fn save_profile(&self, profile: &BirthProfile) -> RepoResult<()> {
        self.repo.save_profile(profile)
    }

    /// Loads the stored profile, if one has been captured.
    pub fn load_profile(&self) -> RepoResult<Option<BirthProfile>> {
        self.repo.load_profile()
    }

    /// Whether a complete profile exists; the UI gates the dial on this.
    pub fn is_profile_complete(&self) -> RepoResult<bool> {
        Ok(self.load_profile()?.is_some())
    }
}
