//! Raw level sampling and button wiring polarity.
use core::convert::Infallible;

use embedded_hal::digital::InputPin;
use serde::{Deserialize, Serialize};

/// Describes how the button is physically wired.
///
/// Levels are `true` for HIGH and `false` for LOW everywhere in this crate. Whether a
/// level means "pressed" is only ever decided through the polarity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Button connects the pin to ground, pin is pulled up.
    /// Idle HIGH, pressed LOW.
    #[default]
    PullUp,
    /// Button connects the pin to voltage, pin is pulled down (or floats low).
    /// Idle LOW, pressed HIGH.
    PullDown,
}

impl Polarity {
    /// The physical level that means "pressed".
    pub const fn pressed_level(self) -> bool {
        match self {
            Polarity::PullUp => false,
            Polarity::PullDown => true,
        }
    }

    /// The physical level of a released button.
    pub const fn idle_level(self) -> bool {
        !self.pressed_level()
    }

    /// Whether the given physical level reads as pressed.
    pub const fn is_pressed(self, level: bool) -> bool {
        level == self.pressed_level()
    }
}

/// Source of raw samples for a single input.
pub trait LevelSampler {
    type Error;

    /// Read the instantaneous physical level, `true` = HIGH.
    fn read_level(&mut self) -> Result<bool, Self::Error>;
}

/// Closures are infallible samplers, handy for scripted input.
impl<F: FnMut() -> bool> LevelSampler for F {
    type Error = Infallible;

    fn read_level(&mut self) -> Result<bool, Self::Error> {
        Ok(self())
    }
}

/// Samples an [`InputPin`](https://docs.rs/embedded-hal/latest/embedded_hal/digital/trait.InputPin.html).
///
/// The pin must already be configured with the pull matching the [`Polarity`] given to
/// [`Button::begin`](crate::Button::begin); this crate never touches pin modes.
#[derive(Debug)]
pub struct PinSampler<P> {
    pin: P,
}

impl<P: InputPin> PinSampler<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: InputPin> LevelSampler for PinSampler<P> {
    type Error = P::Error;

    fn read_level(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }
}
