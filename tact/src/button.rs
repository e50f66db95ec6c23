//! A polled button: sampler, debouncer and gesture classifier in one.
//!
//! See [`Button`] for usage example.
use crate::clock::Clock;
use crate::config::ButtonConfig;
use crate::debounce::{DebounceState, Debouncer, SpacingDebouncer};
use crate::error::Error;
use crate::event::{EventMask, EventSet};
use crate::gesture::{GestureClassifier, GesturePhase};
use crate::sampler::{LevelSampler, Polarity};

/// A debounced button with click, double click and long press detection.
///
/// The button never blocks and never reads the clock by itself: the application loop calls
/// [`poll`](Self::poll) once per iteration with the current millisecond timestamp and
/// gets back the events of that poll. The poll period must be well below the debounce
/// window, otherwise short presses can be missed entirely.
///
/// # Example
///
/// ```rust,ignore
/// use tact::{Button, ButtonConfig, EmbassyClock, PinSampler, Polarity};
///
/// let mut button = Button::new(PinSampler::new(pin), ButtonConfig::default());
/// button.begin(Polarity::PullUp);
///
/// loop {
///     let events = button.poll_with(&EmbassyClock)?;
///     if events.double_click() {
///         // Toggle something
///     }
///     if events.long_press() {
///         // Fires while the button is still held
///     }
/// }
/// ```
pub struct Button<S: LevelSampler, D: Debouncer = SpacingDebouncer> {
    sampler: S,
    polarity: Polarity,
    debouncer: D,
    classifier: GestureClassifier,
    /// Events reported by `poll`
    mask: EventMask,
    /// Events of the last poll, after masking
    events: EventSet,
}

impl<S: LevelSampler> Button<S> {
    /// Create a button using the minimum-spacing debouncer.
    ///
    /// The button starts out released with pull-up polarity; call [`begin`](Self::begin)
    /// before polling.
    pub fn new(sampler: S, config: ButtonConfig) -> Self {
        let debouncer = SpacingDebouncer::new(Polarity::default().idle_level(), config.debounce_ms);
        Self::with_debouncer(sampler, debouncer, config)
    }
}

impl<S: LevelSampler, D: Debouncer> Button<S, D> {
    /// Create a button with a custom debouncer. The debouncer's window is overwritten by
    /// `config.debounce_ms`.
    pub fn with_debouncer(sampler: S, mut debouncer: D, config: ButtonConfig) -> Self {
        let polarity = Polarity::default();
        debouncer.set_window_ms(config.debounce_ms);
        debouncer.reset(polarity.idle_level());
        Self {
            sampler,
            polarity,
            debouncer,
            classifier: GestureClassifier::new(config.double_click_window_ms, config.long_press_threshold_ms),
            mask: config.events,
            events: EventSet::new(),
        }
    }

    /// Set the wiring polarity and put the button into the released state.
    ///
    /// Any gesture in progress is dropped. Pin setup is up to the caller.
    pub fn begin(&mut self, polarity: Polarity) {
        info!("Button begin, polarity: {:?}", polarity);
        self.polarity = polarity;
        self.debouncer.reset(polarity.idle_level());
        self.classifier.reset();
        self.events = EventSet::new();
    }

    /// Sample the input and run one step of the state machine at `now`.
    ///
    /// Returns the events of this poll, filtered by the configured event mask. If the
    /// sampler fails the events are cleared and the button state is left untouched.
    pub fn poll(&mut self, now: u32) -> Result<EventSet, Error<S::Error>> {
        self.events = EventSet::new();
        let raw_level = match self.sampler.read_level() {
            Ok(level) => level,
            Err(e) => {
                warn!("Failed to sample button level at {}", now);
                return Err(Error::Sampler(e));
            }
        };
        Ok(self.poll_level(raw_level, now))
    }

    /// Like [`poll`](Self::poll), reading the time from `clock` once.
    pub fn poll_with<C: Clock>(&mut self, clock: &C) -> Result<EventSet, Error<S::Error>> {
        self.poll(clock.now_millis())
    }

    /// Run one step of the state machine with a level sampled by the caller.
    pub fn poll_level(&mut self, raw_level: bool, now: u32) -> EventSet {
        match self.debouncer.debounce(raw_level, now) {
            DebounceState::Debounced => debug!(
                "Debounced level {} at {}, pressed: {}",
                raw_level,
                now,
                self.polarity.is_pressed(raw_level)
            ),
            DebounceState::InProgress => trace!("Bounce suppressed at {}", now),
            DebounceState::Ignored => {}
        }

        let pressed = self.polarity.is_pressed(self.debouncer.stable_level());
        let events = self.classifier.update(pressed, now);
        self.events = events.masked(self.mask);
        self.events
    }

    /// Apply all three timings at once. Gesture state is kept.
    pub fn configure(&mut self, debounce_ms: u32, double_click_window_ms: u32, long_press_threshold_ms: u32) {
        self.set_debounce_ms(debounce_ms);
        self.set_double_click_window_ms(double_click_window_ms);
        self.set_long_press_threshold_ms(long_press_threshold_ms);
    }

    /// Apply a whole config. Gesture state is kept.
    pub fn set_config(&mut self, config: ButtonConfig) {
        self.configure(
            config.debounce_ms,
            config.double_click_window_ms,
            config.long_press_threshold_ms,
        );
        self.set_events(config.events);
    }

    pub fn config(&self) -> ButtonConfig {
        ButtonConfig {
            debounce_ms: self.debouncer.window_ms(),
            double_click_window_ms: self.classifier.double_click_window_ms(),
            long_press_threshold_ms: self.classifier.long_press_threshold_ms(),
            events: self.mask,
        }
    }

    pub fn set_debounce_ms(&mut self, ms: u32) {
        self.debouncer.set_window_ms(ms);
    }

    pub fn set_double_click_window_ms(&mut self, ms: u32) {
        self.classifier.set_double_click_window_ms(ms);
    }

    pub fn set_long_press_threshold_ms(&mut self, ms: u32) {
        self.classifier.set_long_press_threshold_ms(ms);
    }

    /// Choose which events `poll` reports. Detection keeps running for masked events.
    pub fn set_events(&mut self, mask: EventMask) {
        self.mask = mask;
    }

    /// Whether the debounced level reads as pressed.
    pub fn is_pressed(&self) -> bool {
        self.polarity.is_pressed(self.debouncer.stable_level())
    }

    /// How long the button has been held at `now`, 0 when released.
    pub fn pressed_duration(&self, now: u32) -> u32 {
        self.classifier.pressed_duration(now)
    }

    pub fn pressed_duration_with<C: Clock>(&self, clock: &C) -> u32 {
        self.pressed_duration(clock.now_millis())
    }

    /// Events of the last poll.
    pub fn events(&self) -> EventSet {
        self.events
    }

    /// Whether the last poll saw a debounced press.
    pub fn was_pressed(&self) -> bool {
        self.events.pressed()
    }

    pub fn phase(&self) -> GesturePhase {
        self.classifier.phase()
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn debouncer(&self) -> &D {
        &self.debouncer
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn into_inner(self) -> S {
        self.sampler
    }
}
