extern crate tact;

/// Run a scripted press sequence against a fresh pull-up button polled every millisecond,
/// then compare the reported `(time, event)` pairs.
#[macro_export]
macro_rules! gesture_sequence_test {
    (
        config: $config:expr,
        sequence: [$([$pressed:expr, $delay:expr]),* $(,)?],
        duration: $duration:expr,
        expected_events: [$([$time:expr, $event:ident]),* $(,)?] $(,)?
    ) => {
        $crate::gesture_sequence_test! {
            config: $config,
            polarity: tact::Polarity::PullUp,
            start: 0,
            sequence: [$([$pressed, $delay]),*],
            duration: $duration,
            expected_events: [$([$time, $event]),*],
        }
    };
    (
        config: $config:expr,
        polarity: $polarity:expr,
        start: $start:expr,
        sequence: [$([$pressed:expr, $delay:expr]),* $(,)?],
        duration: $duration:expr,
        expected_events: [$([$time:expr, $event:ident]),* $(,)?] $(,)?
    ) => {{
        let polarity = $polarity;
        let (mut button, line) = $crate::common::create_button($config, polarity);
        let sequence = $crate::level_sequence![$([$pressed, $delay]),*];
        let expected: Vec<(u32, tact::ButtonEvent)> = vec![$(($time, tact::ButtonEvent::$event)),*];

        let reported = $crate::common::run_gesture_sequence(
            &mut button,
            &line,
            polarity,
            $start,
            &sequence,
            $duration,
            1,
        );
        assert_eq!(reported, expected, "Expected {:?} but actually {:?}", expected, reported);
    }};
}

// a rust macro to create a level sequence, `true` means the contact is closed
#[macro_export]
macro_rules! level_sequence {
    ($([$pressed:expr, $delay:expr]),* $(,)?) => {
        vec![
            $(
                $crate::common::TestLevelChange {
                    pressed: $pressed,
                    delay: $delay,
                },
            )*
        ]
    };
}
