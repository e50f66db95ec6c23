use super::{DebounceState, Debouncer};
use crate::clock::elapsed_ms;

/// Continuous-stability debouncer.
///
/// Every raw edge restarts the timer. The stable level follows the raw level once the raw
/// level has not changed for more than `window_ms`.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StabilityDebouncer {
    raw_level: bool,
    stable_level: bool,
    /// Timestamp of the last raw edge
    last_change: u32,
    window_ms: u32,
}

impl StabilityDebouncer {
    /// Create a debouncer which starts out stable at `level`.
    pub const fn new(level: bool, window_ms: u32) -> Self {
        Self {
            raw_level: level,
            stable_level: level,
            last_change: 0,
            window_ms,
        }
    }

    /// Timestamp of the last raw edge.
    pub fn last_change(&self) -> u32 {
        self.last_change
    }
}

impl Default for StabilityDebouncer {
    fn default() -> Self {
        Self::new(true, 50)
    }
}

impl Debouncer for StabilityDebouncer {
    fn debounce(&mut self, raw_level: bool, now: u32) -> DebounceState {
        if raw_level != self.raw_level {
            self.raw_level = raw_level;
            self.last_change = now;
        }

        if self.raw_level == self.stable_level {
            DebounceState::Ignored
        } else if elapsed_ms(now, self.last_change) > self.window_ms {
            self.stable_level = self.raw_level;
            DebounceState::Debounced
        } else {
            DebounceState::InProgress
        }
    }

    fn stable_level(&self) -> bool {
        self.stable_level
    }

    fn reset(&mut self, level: bool) {
        *self = Self::new(level, self.window_ms);
    }

    fn window_ms(&self) -> u32 {
        self.window_ms
    }

    fn set_window_ms(&mut self, window_ms: u32) {
        self.window_ms = window_ms;
    }
}
