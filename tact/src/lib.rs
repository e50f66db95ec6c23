//! Polled button debouncing and gesture detection.
//!
//! `tact` turns a bouncy digital input into clean events: pressed, released, single click,
//! double click and long press. It needs nothing but a raw level and a millisecond
//! timestamp per poll. No interrupts, no timers, no blocking.
//!
//! The pipeline of a poll is
//!
//! [`LevelSampler`] → [`Debouncer`] → [`GestureClassifier`] → [`EventSet`]
//!
//! and [`Button`] wires the three together.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("The `defmt` and `log` features are mutually exclusive");

// This must go first so the macros are visible to the other modules.
pub(crate) mod fmt;

pub mod button;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod error;
pub mod event;
pub mod gesture;
pub mod sampler;

pub use button::Button;
pub use clock::{Clock, EmbassyClock, elapsed_ms};
pub use config::ButtonConfig;
pub use debounce::{DebounceState, Debouncer, SpacingDebouncer, StabilityDebouncer};
pub use error::Error;
pub use event::{ButtonEvent, EventMask, EventSet};
pub use gesture::{GestureClassifier, GesturePhase};
pub use sampler::{LevelSampler, PinSampler, Polarity};
