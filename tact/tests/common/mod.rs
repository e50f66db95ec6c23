pub mod test_macro;

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use log::debug;
use tact::{Button, ButtonConfig, ButtonEvent, Debouncer, LevelSampler, Polarity, SpacingDebouncer};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// A scripted change of the contact state.
#[derive(Debug, Clone)]
pub struct TestLevelChange {
    pub pressed: bool,
    pub delay: u32, // Delay before this change in milliseconds
}

/// Raw level shared between the test and the button. Clones read the same line.
#[derive(Clone)]
pub struct ScriptedLine {
    level: Rc<Cell<bool>>,
}

impl ScriptedLine {
    pub fn new(level: bool) -> Self {
        Self {
            level: Rc::new(Cell::new(level)),
        }
    }

    pub fn set(&self, level: bool) {
        self.level.set(level);
    }
}

impl LevelSampler for ScriptedLine {
    type Error = Infallible;

    fn read_level(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level.get())
    }
}

pub fn create_button(config: ButtonConfig, polarity: Polarity) -> (Button<ScriptedLine>, ScriptedLine) {
    create_button_with_debouncer(config, polarity, SpacingDebouncer::default())
}

pub fn create_button_with_debouncer<D: Debouncer>(
    config: ButtonConfig,
    polarity: Polarity,
    debouncer: D,
) -> (Button<ScriptedLine, D>, ScriptedLine) {
    let line = ScriptedLine::new(polarity.idle_level());
    let mut button = Button::with_debouncer(line.clone(), debouncer, config);
    button.begin(polarity);
    (button, line)
}

/// Drive `button` through `sequence`, polling every `poll_period` ms from `start` for
/// `duration` ms. Returns every reported event with its time relative to `start`.
pub fn run_gesture_sequence<D: Debouncer>(
    button: &mut Button<ScriptedLine, D>,
    line: &ScriptedLine,
    polarity: Polarity,
    start: u32,
    sequence: &[TestLevelChange],
    duration: u32,
    poll_period: u32,
) -> Vec<(u32, ButtonEvent)> {
    // Absolute change times, relative to start
    let mut changes = Vec::new();
    let mut t = 0u32;
    for change in sequence {
        t += change.delay;
        changes.push((t, change.pressed));
    }

    let mut reported = Vec::new();
    let mut next_change = 0;
    let mut elapsed = 0u32;
    while elapsed <= duration {
        while next_change < changes.len() && changes[next_change].0 <= elapsed {
            let pressed = changes[next_change].1;
            line.set(if pressed {
                polarity.pressed_level()
            } else {
                polarity.idle_level()
            });
            next_change += 1;
        }

        let now = start.wrapping_add(elapsed);
        let events = button.poll(now).unwrap();
        for event in events.iter() {
            debug!("{}ms: {:?}", elapsed, event);
            reported.push((elapsed, event));
        }
        elapsed += poll_period;
    }
    reported
}
