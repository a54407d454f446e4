//! Per-pixel intensity functions for the single-image algorithms.
//!
//! All of them truncate toward zero, never round to nearest.

#[inline]
pub fn maximum(r: u8, g: u8, b: u8) -> u8 {
    r.max(g).max(b)
}

#[inline]
pub fn minimum(r: u8, g: u8, b: u8) -> u8 {
    r.min(g).min(b)
}

#[inline]
pub fn average(r: u8, g: u8, b: u8) -> u8 {
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

/// `floor(0.30 r + 0.59 g + 0.11 b)`, computed in hundredths so that
/// float error cannot push white down to 254.
#[inline]
pub fn weighted_average(r: u8, g: u8, b: u8) -> u8 {
    ((30 * u32::from(r) + 59 * u32::from(g) + 11 * u32::from(b)) / 100) as u8
}
