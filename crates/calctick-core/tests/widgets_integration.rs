//! Integration tests driving both widgets through their public command API.

use calctick_core::{
    CalcCommand, CalcError, Event, ExpressionEngine, ManualClock, Operator, TimeTracker,
    TimerCommand, TimerMode, TrackerStatus,
};

fn press_all(engine: &mut ExpressionEngine, keys: &[&str]) -> Vec<Event> {
    keys.iter()
        .filter_map(|k| CalcCommand::from_key(k, true))
        .filter_map(|cmd| engine.apply(cmd))
        .collect()
}

#[test]
fn test_calculator_keyboard_session() {
    let mut engine = ExpressionEngine::new();

    let events = press_all(&mut engine, &["2", "+", "3", "*", "4", "Enter"]);
    assert_eq!(events.len(), 1);
    assert_eq!(engine.result(), "14");

    // Keep typing onto the original expression.
    press_all(&mut engine, &["-", "-", "/", "2", "="]);
    assert_eq!(engine.expression(), "2+3*4/2");
    assert_eq!(engine.result(), "8");

    press_all(&mut engine, &["Escape"]);
    let snap = engine.snapshot();
    assert_eq!(snap.expression, "");
    assert_eq!(snap.result, "");
}

#[test]
fn test_calculator_error_kinds() {
    let cases: [(&[CalcCommand], CalcError); 3] = [
        (
            &[
                CalcCommand::Digit('5'),
                CalcCommand::Operator(Operator::Div),
                CalcCommand::Digit('0'),
            ],
            CalcError::DivisionByZero,
        ),
        (
            &[
                CalcCommand::Digit('5'),
                CalcCommand::Operator(Operator::Add),
                CalcCommand::Digit('a'),
            ],
            CalcError::InvalidExpression,
        ),
        (
            &[
                CalcCommand::Operator(Operator::Mul),
                CalcCommand::Digit('5'),
            ],
            CalcError::InvalidSyntax,
        ),
    ];

    for (commands, expected) in cases {
        let mut engine = ExpressionEngine::new();
        for cmd in commands {
            engine.apply(*cmd);
        }
        match engine.apply(CalcCommand::Equals) {
            Some(Event::EvaluationFailed { error, .. }) => assert_eq!(error, expected),
            other => panic!("Expected EvaluationFailed({expected:?}), got {other:?}"),
        }
        assert!(engine.snapshot().error);
        assert_eq!(engine.result(), expected.label());
    }
}

#[test]
fn test_countdown_full_cycle() {
    let clock = ManualClock::new(0);
    let mut tracker = TimeTracker::new(clock.clone());
    tracker.apply(TimerCommand::SelectMode(TimerMode::Countdown));
    tracker.apply(TimerCommand::SetMinutes(0));
    tracker.apply(TimerCommand::SetSeconds(5));
    tracker.apply(TimerCommand::Start);

    let mut finished = Vec::new();
    for _ in 0..60 {
        clock.advance(100);
        finished.extend(tracker.tick());
    }

    assert_eq!(finished.len(), 1);
    assert_eq!(tracker.status(), TrackerStatus::Finished);
    assert_eq!(tracker.display_ms(), 0);
    assert_eq!(tracker.snapshot().display, "00:00");
}

#[test]
fn test_stopwatch_pause_resume_cycle() {
    let clock = ManualClock::new(42);
    let mut tracker = TimeTracker::new(clock.clone());

    tracker.apply(TimerCommand::Start);
    clock.advance(1000);
    tracker.apply(TimerCommand::Pause);
    assert_eq!(tracker.accumulated_ms(), 1000);

    tracker.apply(TimerCommand::Start);
    clock.advance(500);
    tracker.apply(TimerCommand::Pause);
    assert_eq!(tracker.accumulated_ms(), 1500);

    // Switching mode zeroes the counters.
    tracker.apply(TimerCommand::SelectMode(TimerMode::Countdown));
    assert_eq!(tracker.accumulated_ms(), 0);
    assert_eq!(tracker.status(), TrackerStatus::Idle);
}
