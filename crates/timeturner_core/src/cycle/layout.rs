//! Circular layout projection for dial rings.
//!
//! # Responsibility
//! - Place the item at `index` among `total` evenly spaced ring items.
//!
//! # Invariants
//! - Pure geometry: output depends only on the arguments, nothing is
//!   persisted.
//! - Counter-rotating glyphs to keep them upright is a consumer concern and
//!   deliberately not part of this contract.

/// A point on the dial canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Center of the 400x400 dial canvas.
pub const DIAL_CENTER: Point = Point { x: 200.0, y: 200.0 };

/// Default starting angle: item 0 sits at the top of the ring.
pub const TOP_OFFSET_DEG: f64 = -90.0;

/// Projected ring position, including the raw angle for rotation transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingPoint {
    pub x: f64,
    pub y: f64,
    pub angle_deg: f64,
}

/// Projects item `index` of `total` onto a circle of `radius` around `center`.
///
/// `total` must be >= 1 and `radius` positive; both hold for every dial ring.
pub fn ring_position(
    index: u32,
    total: u32,
    radius: f64,
    center: Point,
    offset_deg: f64,
) -> RingPoint {
    let angle_deg = f64::from(index) * 360.0 / f64::from(total) + offset_deg;
    let radians = angle_deg.to_radians();
    RingPoint {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
        angle_deg,
    }
}

/// Ring projection with the dial defaults (center (200, 200), start at top).
///
/// Used identically for the 12 zodiac glyphs, the 24 hour markers and any
/// other evenly spaced decoration.
pub fn dial_position(index: u32, total: u32, radius: f64) -> RingPoint {
    ring_position(index, total, radius, DIAL_CENTER, TOP_OFFSET_DEG)
}
