//! Sinusoidal biorhythm cycles phased from the birth date.
//!
//! # Responsibility
//! - Count whole elapsed days between birth and an as-of instant.
//! - Evaluate the three fixed cycles and their display transforms.
//!
//! # Invariants
//! - Phase values are always in [-1, 1] and are 0 at elapsed day 0.
//! - Elapsed days use whole-day truncation, never fractional days.
//! - All three cycles are evaluated from the same elapsed-day count.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::f64::consts::TAU;

/// A fixed-period biorhythm cycle and its dial color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiorhythmCycle {
    pub name: &'static str,
    pub period_days: u32,
    /// Hex color used by the biorhythm ring and display panel.
    pub color: &'static str,
}

/// The three classic cycles, in display order.
pub const CYCLES: [BiorhythmCycle; 3] = [
    BiorhythmCycle { name: "Physical", period_days: 23, color: "#FF6B6B" },
    BiorhythmCycle { name: "Emotional", period_days: 28, color: "#4ECDC4" },
    BiorhythmCycle { name: "Intellectual", period_days: 33, color: "#FFD93D" },
];

/// Direction indicator derived from a phase value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Flat,
}

/// One evaluated cycle, ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiorhythmReading {
    pub cycle: &'static BiorhythmCycle,
    /// Raw phase value in [-1, 1].
    pub value: f64,
    /// `round(value * 100)`, shown as a percentage.
    pub percentage: i32,
    pub trend: Trend,
}

/// Whole days elapsed from birth midnight to `as_of`, truncated toward zero.
pub fn elapsed_days(birth_date: NaiveDate, as_of: NaiveDateTime) -> i64 {
    (as_of - birth_date.and_time(NaiveTime::MIN)).num_days()
}

/// Phase of one cycle after `elapsed` whole days: `sin(2π * elapsed / period)`.
pub fn phase(elapsed: i64, period_days: u32) -> f64 {
    (TAU * elapsed as f64 / f64::from(period_days)).sin()
}

/// Percentage form of a phase value.
pub fn percentage(value: f64) -> i32 {
    (value * 100.0).round() as i32
}

/// Trend indicator with a flat band around zero.
pub fn trend(value: f64) -> Trend {
    if value > 0.1 {
        Trend::Rising
    } else if value < -0.1 {
        Trend::Falling
    } else {
        Trend::Flat
    }
}

/// Evaluates all three cycles for one birth date and as-of instant.
pub fn readings(birth_date: NaiveDate, as_of: NaiveDateTime) -> [BiorhythmReading; 3] {
    let elapsed = elapsed_days(birth_date, as_of);
    [
        reading(&CYCLES[0], elapsed),
        reading(&CYCLES[1], elapsed),
        reading(&CYCLES[2], elapsed),
    ]
}

fn reading(cycle: &'static BiorhythmCycle, elapsed: i64) -> BiorhythmReading {
    let value = phase(elapsed, cycle.period_days);
    BiorhythmReading {
        cycle,
        value,
        percentage: percentage(value),
        trend: trend(value),
    }
}
