use serde::{Deserialize, Serialize};

use crate::event::{ButtonEvent, EventMask};

/// Default debounce window of the gesture detector.
pub const DEFAULT_DEBOUNCE_MS: u32 = 40;
/// Default maximum gap between two releases forming a double click.
pub const DEFAULT_DOUBLE_CLICK_WINDOW_MS: u32 = 300;
/// Default hold time for a long press.
pub const DEFAULT_LONG_PRESS_THRESHOLD_MS: u32 = 800;
/// Default debounce window of the press-only detector.
pub const PRESS_ONLY_DEBOUNCE_MS: u32 = 50;

/// Timing and event selection for a [`Button`](crate::Button).
///
/// No combination of values is rejected. Zero windows or a double click window longer than
/// the long press threshold produce degenerate but well-defined behavior.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Minimum spacing between accepted level transitions
    pub debounce_ms: u32,
    /// Maximum time between the first and second release of a double click
    pub double_click_window_ms: u32,
    /// Hold time after which a press counts as a long press
    pub long_press_threshold_ms: u32,
    /// Events reported by `poll`, stored as raw `EventMask` bits
    #[serde(with = "mask_bits")]
    pub events: EventMask,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonConfig {
    /// Gesture detector defaults: 40ms debounce, 300ms double click window, 800ms long press,
    /// all events enabled.
    pub const fn new() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            double_click_window_ms: DEFAULT_DOUBLE_CLICK_WINDOW_MS,
            long_press_threshold_ms: DEFAULT_LONG_PRESS_THRESHOLD_MS,
            events: EventMask::all(),
        }
    }

    /// A plain debounced press detector: 50ms debounce, only `pressed` is reported.
    pub const fn press_only() -> Self {
        Self {
            debounce_ms: PRESS_ONLY_DEBOUNCE_MS,
            events: EventMask::new().with_pressed(true),
            ..Self::new()
        }
    }

    pub const fn with_debounce_ms(mut self, ms: u32) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub const fn with_double_click_window_ms(mut self, ms: u32) -> Self {
        self.double_click_window_ms = ms;
        self
    }

    pub const fn with_long_press_threshold_ms(mut self, ms: u32) -> Self {
        self.long_press_threshold_ms = ms;
        self
    }

    pub const fn with_events(mut self, events: EventMask) -> Self {
        self.events = events;
        self
    }

    /// Whether `poll` reports the given event.
    pub const fn reports(&self, event: ButtonEvent) -> bool {
        self.events.contains(event)
    }
}

mod mask_bits {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::event::EventMask;

    pub fn serialize<S: Serializer>(mask: &EventMask, serializer: S) -> Result<S::Ok, S::Error> {
        mask.into_bits().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EventMask, D::Error> {
        // Unknown bits are dropped
        u8::deserialize(deserializer).map(|bits| EventMask::from_bits(bits).masked(EventMask::all()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::Polarity;

    #[test]
    fn test_defaults() {
        let config = ButtonConfig::default();
        assert_eq!(config.debounce_ms, 40);
        assert_eq!(config.double_click_window_ms, 300);
        assert_eq!(config.long_press_threshold_ms, 800);
        for event in ButtonEvent::ALL {
            assert!(config.reports(event));
        }
    }

    #[test]
    fn test_press_only() {
        let config = ButtonConfig::press_only();
        assert_eq!(config.debounce_ms, 50);
        assert!(config.reports(ButtonEvent::Pressed));
        assert!(!config.reports(ButtonEvent::Released));
        assert!(!config.reports(ButtonEvent::SingleClick));
        assert!(!config.reports(ButtonEvent::LongPress));
    }

    #[test]
    fn test_postcard_round_trip() {
        let mut buf = [0u8; 32];
        let config = ButtonConfig::press_only();
        let bytes = postcard::to_slice(&config, &mut buf).unwrap();
        // The mask is stored as a single raw byte at the end
        assert_eq!(bytes.last(), Some(&0b0_0001));
        assert_eq!(postcard::from_bytes::<ButtonConfig>(bytes).unwrap(), config);

        let config = ButtonConfig::default().with_long_press_threshold_ms(1500);
        let bytes = postcard::to_slice(&config, &mut buf).unwrap();
        assert_eq!(postcard::from_bytes::<ButtonConfig>(bytes).unwrap(), config);
    }

    #[test]
    fn test_deserialize_drops_unknown_event_bits() {
        let mut buf = [0u8; 32];
        let bytes = postcard::to_slice(&ButtonConfig::press_only(), &mut buf).unwrap();
        let len = bytes.len();
        buf[len - 1] = 0xFF;

        let config: ButtonConfig = postcard::from_bytes(&buf[..len]).unwrap();
        assert_eq!(config.events, EventMask::all());
        assert_eq!(config.events.into_bits(), 0b1_1111);
        assert_eq!(config.debounce_ms, 50);
    }

    #[test]
    fn test_polarity_round_trip() {
        let mut buf = [0u8; 4];
        for polarity in [Polarity::PullUp, Polarity::PullDown] {
            let bytes = postcard::to_slice(&polarity, &mut buf).unwrap();
            assert_eq!(postcard::from_bytes::<Polarity>(bytes).unwrap(), polarity);
        }
    }

    #[test]
    fn test_builder() {
        let config = ButtonConfig::new()
            .with_debounce_ms(5)
            .with_double_click_window_ms(250)
            .with_long_press_threshold_ms(1000)
            .with_events(EventMask::from(ButtonEvent::LongPress));
        assert_eq!(config.debounce_ms, 5);
        assert_eq!(config.double_click_window_ms, 250);
        assert_eq!(config.long_press_threshold_ms, 1000);
        assert!(config.reports(ButtonEvent::LongPress));
        assert!(!config.reports(ButtonEvent::Pressed));
    }
}
