//! Dial snapshot composition.
//!
//! # Responsibility
//! - Compose zodiac, organ, biorhythm and clock outputs into one
//!   render-ready snapshot for a profile and a wall-clock instant.
//!
//! # Invariants
//! - Snapshots carry plain data only (indices, angles, phase values); no
//!   visual state leaks into the core.
//! - Building a snapshot is pure and idempotent for the same inputs; the UI
//!   drives recomputation on its own once-per-minute tick.

use crate::cycle::biorhythm::{self, BiorhythmReading};
use crate::cycle::organ::{self, OrganState};
use crate::cycle::zodiac;
use crate::model::profile::BirthProfile;
use chrono::{Datelike, NaiveDateTime, NaiveTime, Timelike};

/// Daily-ring rotation step: 360 degrees / 24 hours.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Resolved zodiac placement for the dial's outer ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacPlacement {
    pub name: &'static str,
    pub symbol: char,
    pub index: usize,
    /// Rotation bringing the birth sign to the pointer: `index * 30` degrees.
    pub ring_rotation_deg: f64,
}

/// Analog/digital clock state for the simple clock widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockHands {
    pub hour_deg: f64,
    pub minute_deg: f64,
    /// 24-hour `HH:MM` digital display string.
    pub digital: String,
}

/// Everything the popup needs to draw one frame of the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct DialSnapshot {
    pub zodiac: ZodiacPlacement,
    /// Daily-ring rotation: `-(birth_hour + birth_minute/60) * 15` degrees.
    pub daily_ring_rotation_deg: f64,
    pub organ: OrganState,
    pub biorhythm: [BiorhythmReading; 3],
    pub hands: ClockHands,
}

/// Builds the dial snapshot for a stored profile at a wall-clock instant.
pub fn build_dial_snapshot(profile: &BirthProfile, now: NaiveDateTime) -> DialSnapshot {
    let (index, range) = zodiac::resolve(profile.birth_date.month(), profile.birth_date.day());

    DialSnapshot {
        zodiac: ZodiacPlacement {
            name: range.name,
            symbol: range.symbol,
            index,
            ring_rotation_deg: zodiac::ring_rotation_deg(index),
        },
        daily_ring_rotation_deg: -profile.birth_hour_fraction() * DEGREES_PER_HOUR,
        organ: organ::organ_state(now.hour(), now.minute()),
        biorhythm: biorhythm::readings(profile.birth_date, now),
        hands: clock_hands(now.time()),
    }
}

/// Hand angles and digital string for the modern clock widget.
pub fn clock_hands(time: NaiveTime) -> ClockHands {
    let hour = time.hour();
    let minute = time.minute();
    ClockHands {
        hour_deg: f64::from(hour % 12) / 12.0 * 360.0 + f64::from(minute) / 60.0 * 30.0,
        minute_deg: f64::from(minute) / 60.0 * 360.0,
        digital: format!("{hour:02}:{minute:02}"),
    }
}
