//! Zodiac sign resolution over calendar dates.
//!
//! # Responsibility
//! - Map a (month, day) pair to its zodiac range and ring index.
//!
//! # Invariants
//! - The twelve ranges partition the year exactly once; the only wraparound
//!   pair is Capricorn across the year boundary, and it sits at index 0.
//! - Index order is a fixed dial convention: rotating the zodiac ring by
//!   `index * 30` degrees brings the active sign to the pointer.

/// One calendar-date window mapped to an astrological sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacRange {
    pub name: &'static str,
    /// Single-glyph symbol rendered on the dial.
    pub symbol: char,
    /// Inclusive (month, day) window start.
    pub start: (u32, u32),
    /// Inclusive (month, day) window end.
    pub end: (u32, u32),
}

/// Ring rotation step: 360 degrees / 12 signs.
pub const DEGREES_PER_SIGN: f64 = 30.0;

/// Fixed sign table. Capricorn leads because it is the wraparound entry;
/// the rest follow in calendar order.
pub const ZODIAC_RANGES: [ZodiacRange; 12] = [
    ZodiacRange { name: "Capricorn", symbol: '♑', start: (12, 22), end: (1, 19) },
    ZodiacRange { name: "Aquarius", symbol: '♒', start: (1, 20), end: (2, 18) },
    ZodiacRange { name: "Pisces", symbol: '♓', start: (2, 19), end: (3, 20) },
    ZodiacRange { name: "Aries", symbol: '♈', start: (3, 21), end: (4, 19) },
    ZodiacRange { name: "Taurus", symbol: '♉', start: (4, 20), end: (5, 20) },
    ZodiacRange { name: "Gemini", symbol: '♊', start: (5, 21), end: (6, 20) },
    ZodiacRange { name: "Cancer", symbol: '♋', start: (6, 21), end: (7, 22) },
    ZodiacRange { name: "Leo", symbol: '♌', start: (7, 23), end: (8, 22) },
    ZodiacRange { name: "Virgo", symbol: '♍', start: (8, 23), end: (9, 22) },
    ZodiacRange { name: "Libra", symbol: '♎', start: (9, 23), end: (10, 22) },
    ZodiacRange { name: "Scorpio", symbol: '♏', start: (10, 23), end: (11, 21) },
    ZodiacRange { name: "Sagittarius", symbol: '♐', start: (11, 22), end: (12, 21) },
];

/// Resolves the zodiac range containing the given calendar date.
///
/// The year is irrelevant; only (month, day) membership is tested. The table
/// covers every calendar date, so the no-match branch falls back to the
/// first entry instead of failing.
pub fn resolve(month: u32, day: u32) -> (usize, &'static ZodiacRange) {
    let code = date_code(month, day);
    for (index, range) in ZODIAC_RANGES.iter().enumerate() {
        let start = date_code(range.start.0, range.start.1);
        let end = date_code(range.end.0, range.end.1);
        let matched = if start > end {
            // Wraparound window: Dec 22 .. Jan 19.
            code >= start || code <= end
        } else {
            code >= start && code <= end
        };
        if matched {
            return (index, range);
        }
    }
    (0, &ZODIAC_RANGES[0])
}

/// Rotation applied to the zodiac ring so the sign at `index` faces up.
pub fn ring_rotation_deg(index: usize) -> f64 {
    index as f64 * DEGREES_PER_SIGN
}

/// Encodes (month, day) as `month * 100 + day` for cheap ordered comparison.
fn date_code(month: u32, day: u32) -> u32 {
    month * 100 + day
}
