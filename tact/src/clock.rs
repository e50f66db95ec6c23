//! Millisecond time sources.
//!
//! All timestamps in this crate are `u32` milliseconds that wrap around after ~49.7 days.
//! Intervals are always computed with [`elapsed_ms`], which tolerates a single wrap
//! between the two readings.
use embassy_time::Instant;

/// A monotonic, wrapping millisecond counter.
pub trait Clock {
    /// Current time in milliseconds.
    fn now_millis(&self) -> u32;
}

impl<F: Fn() -> u32> Clock for F {
    fn now_millis(&self) -> u32 {
        self()
    }
}

/// [`Clock`] backed by the embassy time driver.
///
/// `Instant` counts in 64 bits; the value is truncated to `u32` so it wraps like a
/// 32-bit hardware millisecond counter.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_millis(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Milliseconds from `since` to `now`, modulo 2^32.
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
