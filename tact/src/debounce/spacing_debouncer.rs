use super::{DebounceState, Debouncer};
use crate::clock::elapsed_ms;

/// Minimum-spacing debouncer.
///
/// A raw level that differs from the stable level is accepted as soon as more than
/// `window_ms` has passed since the previous *accepted* transition. Raw edges in between
/// don't restart anything, so this enforces a minimum spacing between promotions rather
/// than a period of continuous stability. Even with a zero window a promotion needs the
/// clock to have moved past the previous one.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpacingDebouncer {
    raw_level: bool,
    stable_level: bool,
    /// Timestamp of the last promotion
    last_transition: u32,
    window_ms: u32,
}

impl SpacingDebouncer {
    /// Create a debouncer which starts out stable at `level`.
    pub const fn new(level: bool, window_ms: u32) -> Self {
        Self {
            raw_level: level,
            stable_level: level,
            last_transition: 0,
            window_ms,
        }
    }

    /// The most recent raw sample.
    pub fn raw_level(&self) -> bool {
        self.raw_level
    }

    /// Timestamp of the last accepted transition.
    pub fn last_transition(&self) -> u32 {
        self.last_transition
    }
}

impl Default for SpacingDebouncer {
    fn default() -> Self {
        Self::new(true, 40)
    }
}

impl Debouncer for SpacingDebouncer {
    fn debounce(&mut self, raw_level: bool, now: u32) -> DebounceState {
        self.raw_level = raw_level;

        if raw_level == self.stable_level {
            return DebounceState::Ignored;
        }

        if elapsed_ms(now, self.last_transition) > self.window_ms {
            self.stable_level = raw_level;
            self.last_transition = now;
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
