//! Birth profile domain model.
//!
//! # Responsibility
//! - Define the single persisted record driving every dial computation.
//! - Validate wire-format input before it reaches persistence or calculators.
//!
//! # Invariants
//! - A constructed `BirthProfile` is always internally valid: parseable date,
//!   minute-resolution time, coordinates within range, non-empty name.
//! - The serialized shape keeps the original extension field names
//!   (`birthDate`, `birthTime`, `location`) so stored records stay readable.
//!
//! # See also
//! - docs/architecture/data-model.md

use chrono::{NaiveDate, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key under which the profile record is persisted.
pub const PROFILE_RECORD_KEY: &str = "userData";

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
const WIRE_TIME_FORMAT: &str = "%H:%M";

// Strict HH:MM with a zero-padded hour, matching what the profile form emits.
static BIRTH_TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").expect("static pattern must compile"));

/// Free-text or geocoded birth place. Display-only: no calculator reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

/// The user's birth profile, captured once via the profile form.
///
/// Immutable after capture; edits replace the whole record (last-write-wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub name: String,
    /// Calendar birth date; the year only matters for biorhythm elapsed days.
    #[serde(rename = "birthDate")]
    pub birth_date: NaiveDate,
    /// Local time of day at birth, minute resolution.
    #[serde(rename = "birthTime", with = "wire_time")]
    pub birth_time: NaiveTime,
    pub location: Location,
}

/// Validation error for profile capture and persisted-record decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileValidationError {
    EmptyName,
    InvalidBirthDate(String),
    InvalidBirthTime(String),
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl Display for ProfileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "profile name must not be empty"),
            Self::InvalidBirthDate(raw) => {
                write!(f, "invalid birth date `{raw}`; expected YYYY-MM-DD")
            }
            Self::InvalidBirthTime(raw) => {
                write!(f, "invalid birth time `{raw}`; expected HH:MM in 24-hour form")
            }
            Self::LatitudeOutOfRange(lat) => {
                write!(f, "latitude {lat} outside [-90, 90]")
            }
            Self::LongitudeOutOfRange(lng) => {
                write!(f, "longitude {lng} outside [-180, 180]")
            }
        }
    }
}

impl Error for ProfileValidationError {}

impl BirthProfile {
    /// Builds a profile from the wire strings submitted by the profile form.
    ///
    /// # Errors
    /// - `EmptyName` for blank names.
    /// - `InvalidBirthDate` / `InvalidBirthTime` for unparseable fields.
    /// - Coordinate range errors for out-of-bounds geocoding results.
    pub fn from_wire(
        name: &str,
        birth_date: &str,
        birth_time: &str,
        location: Location,
    ) -> Result<Self, ProfileValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }

        let date_raw = birth_date.trim();
        let birth_date = NaiveDate::parse_from_str(date_raw, WIRE_DATE_FORMAT)
            .map_err(|_| ProfileValidationError::InvalidBirthDate(date_raw.to_string()))?;

        let time_raw = birth_time.trim();
        if !BIRTH_TIME_PATTERN.is_match(time_raw) {
            return Err(ProfileValidationError::InvalidBirthTime(time_raw.to_string()));
        }
        let birth_time = NaiveTime::parse_from_str(time_raw, WIRE_TIME_FORMAT)
            .map_err(|_| ProfileValidationError::InvalidBirthTime(time_raw.to_string()))?;

        let profile = Self {
            name: name.to_string(),
            birth_date,
            birth_time,
            location,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Re-checks invariants, used on both write and read paths so corrupted
    /// persisted records are rejected instead of masked.
    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProfileValidationError::EmptyName);
        }
        if !(-90.0..=90.0).contains(&self.location.lat) {
            return Err(ProfileValidationError::LatitudeOutOfRange(self.location.lat));
        }
        if !(-180.0..=180.0).contains(&self.location.lng) {
            return Err(ProfileValidationError::LongitudeOutOfRange(self.location.lng));
        }
        Ok(())
    }

    /// Birth hour as a fractional value, e.g. 13:31 -> 13.516...
    ///
    /// Drives the daily-ring rotation (15 degrees per hour).
    pub fn birth_hour_fraction(&self) -> f64 {
        f64::from(self.birth_time.hour()) + f64::from(self.birth_time.minute()) / 60.0
    }
}

mod wire_time {
    use super::WIRE_TIME_FORMAT;
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(WIRE_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, WIRE_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
