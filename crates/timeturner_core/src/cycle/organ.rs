//! Traditional-medicine organ-hour resolution.
//!
//! # Responsibility
//! - Map the hour of day to the active 2-hour organ window.
//! - Report minutes remaining until the next window transition.
//!
//! # Invariants
//! - The 12-entry table order is a fixed domain convention anchored at
//!   index 0 = the 23:00-01:00 window (Gallbladder). It is a lookup table,
//!   not derived from first principles; shifting it by one window changes
//!   which organ is reported active.
//! - `active_index` is in [0, 11] for every hour in [0, 23].

/// One 2-hour body-clock window assigned to a named organ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganHour {
    pub name: &'static str,
    /// Short functional description shown next to the active organ.
    pub function: &'static str,
}

/// Length of every organ window in minutes.
pub const WINDOW_MINUTES: u32 = 120;

/// Fixed organ table, index 0 = 23:00-01:00, advancing one entry per
/// 2-hour window.
pub const ORGAN_HOURS: [OrganHour; 12] = [
    OrganHour { name: "Gallbladder", function: "Decision Making" },
    OrganHour { name: "Liver", function: "Detoxification & Planning" },
    OrganHour { name: "Lung", function: "Breathing & Letting Go" },
    OrganHour { name: "Large Intestine", function: "Elimination" },
    OrganHour { name: "Stomach", function: "Breaking Down" },
    OrganHour { name: "Spleen", function: "Transformation" },
    OrganHour { name: "Heart", function: "Joy & Circulation" },
    OrganHour { name: "Small Intestine", function: "Sorting & Processing" },
    OrganHour { name: "Bladder", function: "Storage & Release" },
    OrganHour { name: "Kidney", function: "Vitality & Willpower" },
    OrganHour { name: "Pericardium", function: "Protection & Relationships" },
    OrganHour { name: "Triple Burner", function: "Temperature & Fluid" },
];

/// Active organ state for a wall-clock instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganState {
    pub index: usize,
    pub organ: &'static OrganHour,
    /// The organ taking over at the next window boundary (wraps 11 -> 0).
    pub next: &'static OrganHour,
    pub minutes_until_transition: u32,
}

/// Active window index for the given hour (0-23).
///
/// The `+ 1` shifts the window grid so index 0 covers 23:00-01:00.
pub fn active_index(hour: u32) -> usize {
    (((hour + 1) % 24) / 2) as usize
}

/// Minutes remaining in the current window.
///
/// Windows are anchored to even clock hours, so elapsed-within-window is
/// `minute + 60 * (hour mod 2)`.
pub fn minutes_until_transition(hour: u32, minute: u32) -> u32 {
    WINDOW_MINUTES - (minute + (hour % 2) * 60)
}

/// Resolves the full organ state for an (hour, minute) instant.
pub fn organ_state(hour: u32, minute: u32) -> OrganState {
    let index = active_index(hour);
    OrganState {
        index,
        organ: &ORGAN_HOURS[index],
        next: &ORGAN_HOURS[(index + 1) % ORGAN_HOURS.len()],
        minutes_until_transition: minutes_until_transition(hour, minute),
    }
}
