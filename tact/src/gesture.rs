//! Click, double click and long press detection on top of a debounced level.
use crate::clock::elapsed_ms;
use crate::config::{DEFAULT_DOUBLE_CLICK_WINDOW_MS, DEFAULT_LONG_PRESS_THRESHOLD_MS};
use crate::event::EventSet;

/// Coarse state of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GesturePhase {
    /// Released, nothing pending
    Idle,
    /// Held down
    Pressed,
    /// Released after a short click, waiting to see whether a second click follows
    AwaitingSecondClick,
}

/// Gesture classifier for a single button.
///
/// Works on the logical pressed state only; polarity and debouncing are handled before
/// [`update`](Self::update) is called. All timestamps are wrapping milliseconds.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GestureClassifier {
    /// Debounced pressed state seen by the last update
    pressed: bool,
    /// Start of the current (or last) press
    press_timestamp: u32,
    /// Last short click release
    last_release_timestamp: u32,
    awaiting_second_click: bool,
    /// Set once a long press has been reported for the current press,
    /// cleared on the next press
    long_press_fired: bool,
    double_click_window_ms: u32,
    long_press_threshold_ms: u32,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_WINDOW_MS, DEFAULT_LONG_PRESS_THRESHOLD_MS)
    }
}

impl GestureClassifier {
    pub const fn new(double_click_window_ms: u32, long_press_threshold_ms: u32) -> Self {
        Self {
            pressed: false,
            press_timestamp: 0,
            last_release_timestamp: 0,
            awaiting_second_click: false,
            long_press_fired: false,
            double_click_window_ms,
            long_press_threshold_ms,
        }
    }

    /// Back to idle: released, no pending click. Timing config is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.double_click_window_ms, self.long_press_threshold_ms);
    }

    /// Feed the debounced pressed state at `now` and collect this update's events.
    ///
    /// The order of checks matters: edges first, then the mid-hold long press, then the
    /// double click timeout.
    pub fn update(&mut self, pressed: bool, now: u32) -> EventSet {
        let mut events = EventSet::new();

        if pressed && !self.pressed {
            events.set_pressed(true);
            self.press_timestamp = now;
            self.long_press_fired = false;
        } else if !pressed && self.pressed {
            events.set_released(true);
            self.on_release(now, &mut events);
        }
        self.pressed = pressed;

        // Long press while still holding
        if self.pressed
            && !self.long_press_fired
            && elapsed_ms(now, self.press_timestamp) >= self.long_press_threshold_ms
        {
            debug!("Long press after holding {}ms", elapsed_ms(now, self.press_timestamp));
            events.set_long_press(true);
            self.long_press_fired = true;
            self.awaiting_second_click = false;
        }

        // No second click in time
        if self.awaiting_second_click && elapsed_ms(now, self.last_release_timestamp) > self.double_click_window_ms {
            debug!("Single click, released at {}", self.last_release_timestamp);
            events.set_single_click(true);
            self.awaiting_second_click = false;
        }

        events
    }

    fn on_release(&mut self, now: u32, events: &mut EventSet) {
        let duration = elapsed_ms(now, self.press_timestamp);

        if self.long_press_fired {
            // Already reported while holding, this press is done
            trace!("Released after long press, held {}ms", duration);
        } else if duration >= self.long_press_threshold_ms {
            debug!("Long press detected at release, held {}ms", duration);
            events.set_long_press(true);
            self.long_press_fired = true;
            self.awaiting_second_click = false;
        } else {
            if self.awaiting_second_click && elapsed_ms(now, self.last_release_timestamp) <= self.double_click_window_ms
            {
                debug!(
                    "Double click, {}ms between releases",
                    elapsed_ms(now, self.last_release_timestamp)
                );
                events.set_double_click(true);
                self.awaiting_second_click = false;
            } else {
                self.awaiting_second_click = true;
            }
            self.last_release_timestamp = now;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// How long the button has been held at `now`, 0 when released.
    pub fn pressed_duration(&self, now: u32) -> u32 {
        if self.pressed {
            elapsed_ms(now, self.press_timestamp)
        } else {
            0
        }
    }

    pub fn phase(&self) -> GesturePhase {
        if self.pressed {
            GesturePhase::Pressed
        } else if self.awaiting_second_click {
            GesturePhase::AwaitingSecondClick
        } else {
            GesturePhase::Idle
        }
    }

    pub fn long_press_fired(&self) -> bool {
        self.long_press_fired
    }

    pub fn double_click_window_ms(&self) -> u32 {
        self.double_click_window_ms
    }

    /// Takes effect on the next update, a pending click keeps its release timestamp.
    pub fn set_double_click_window_ms(&mut self, ms: u32) {
        self.double_click_window_ms = ms;
    }

    pub fn long_press_threshold_ms(&self) -> u32 {
        self.long_press_threshold_ms
    }

    /// Takes effect on the next update, a press in progress keeps its start timestamp.
    pub fn set_long_press_threshold_ms(&mut self, ms: u32) {
        self.long_press_threshold_ms = ms;
    }
}
