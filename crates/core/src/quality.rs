//! Quality bounds.
//!
//! Quality is stored as a plain integer on each item so that callers can
//! inject out-of-range values; the bounds are applied on write by the rules,
//! not on construction.

/// Lowest quality an ordinary item can hold.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality an ordinary item can hold.
pub const MAX_QUALITY: i32 = 50;

/// Quality carried by legendary items. Never enforced, only used to seed them.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Clamp a quality value into `[MIN_QUALITY, MAX_QUALITY]`.
pub fn clamp_quality(quality: i32) -> i32 {
    quality.clamp(MIN_QUALITY, MAX_QUALITY)
}
