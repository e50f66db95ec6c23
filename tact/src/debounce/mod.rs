//! Debounce filters turning raw samples into a stable level.
pub mod spacing_debouncer;
pub mod stability_debouncer;

pub use spacing_debouncer::SpacingDebouncer;
pub use stability_debouncer::StabilityDebouncer;

/// A single-input debouncer working on physical levels and millisecond timestamps.
pub trait Debouncer {
    /// Feed a raw sample taken at `now`. Returns [`DebounceState::Debounced`] when the
    /// stable level was changed by this call.
    fn debounce(&mut self, raw_level: bool, now: u32) -> DebounceState;

    /// The current stable level.
    fn stable_level(&self) -> bool;

    /// Force the stable level, dropping any transition in progress and any timing
    /// reference kept from earlier samples.
    fn reset(&mut self, level: bool);

    /// The debounce window in milliseconds.
    fn window_ms(&self) -> u32;

    /// Change the debounce window. Takes effect on the next call to `debounce`.
    fn set_window_ms(&mut self, window_ms: u32);
}

/// Debounce state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// The stable level changed on this sample.
    Debounced,
    /// Raw and stable levels differ, but the change isn't accepted yet.
    InProgress,
    /// Raw level equals the stable level.
    Ignored,
}
