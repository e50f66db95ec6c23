//! Per-poll button events.
use bitfield_struct::bitfield;
use heapless::Vec;

/// A single button event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Stable level went from released to pressed
    Pressed,
    /// Stable level went from pressed to released
    Released,
    /// The button was held for at least the long press threshold
    LongPress,
    /// A second short click was released within the double click window
    DoubleClick,
    /// A short click was not followed by a second one within the double click window
    SingleClick,
}

impl ButtonEvent {
    pub const ALL: [ButtonEvent; 5] = [
        ButtonEvent::Pressed,
        ButtonEvent::Released,
        ButtonEvent::LongPress,
        ButtonEvent::DoubleClick,
        ButtonEvent::SingleClick,
    ];
}

/// Events produced by one poll. Several flags can be set at once, e.g. `released` and
/// `long_press` when a long hold is only noticed at release.
///
/// The same layout doubles as [`EventMask`].
#[bitfield(u8)]
#[derive(PartialEq, Eq)]
pub struct EventSet {
    pub pressed: bool,
    pub released: bool,
    pub single_click: bool,
    pub double_click: bool,
    pub long_press: bool,
    #[bits(3)]
    __: u8,
}

/// Selects which events a [`Button`](crate::Button) reports.
pub type EventMask = EventSet;

impl EventSet {
    /// Every event flag set.
    pub const fn all() -> Self {
        Self::new()
            .with_pressed(true)
            .with_released(true)
            .with_single_click(true)
            .with_double_click(true)
            .with_long_press(true)
    }

    pub const fn is_empty(&self) -> bool {
        self.into_bits() == 0
    }

    pub const fn contains(&self, event: ButtonEvent) -> bool {
        match event {
            ButtonEvent::Pressed => self.pressed(),
            ButtonEvent::Released => self.released(),
            ButtonEvent::LongPress => self.long_press(),
            ButtonEvent::DoubleClick => self.double_click(),
            ButtonEvent::SingleClick => self.single_click(),
        }
    }

    pub fn insert(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Pressed => self.set_pressed(true),
            ButtonEvent::Released => self.set_released(true),
            ButtonEvent::LongPress => self.set_long_press(true),
            ButtonEvent::DoubleClick => self.set_double_click(true),
            ButtonEvent::SingleClick => self.set_single_click(true),
        }
    }

    /// Keep only the events enabled in `mask`.
    pub const fn masked(self, mask: EventMask) -> Self {
        Self::from_bits(self.into_bits() & mask.into_bits())
    }

    /// Iterate over the set events, in [`ButtonEvent::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = ButtonEvent> + '_ {
        ButtonEvent::ALL.into_iter().filter(|e| self.contains(*e))
    }

    pub fn to_vec(&self) -> Vec<ButtonEvent, 5> {
        self.iter().collect()
    }
}

impl From<ButtonEvent> for EventSet {
    fn from(event: ButtonEvent) -> Self {
        let mut set = EventSet::new();
        set.insert(event);
        set
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EventSet {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EventSet(pressed={}, released={}, single_click={}, double_click={}, long_press={})",
            self.pressed(),
            self.released(),
            self.single_click(),
            self.double_click(),
            self.long_press()
        )
    }
}
