//! Toast lifecycle tests driven with injected time

mod common;

use common::builders::{notification, test_state, ReadingBuilder};
use std::time::{Duration, Instant};
use telemetry_dashboard::config::AlertConfig;
use telemetry_dashboard::dashboard::{TickSnapshot, ToastPhase, ToastStack};
use telemetry_dashboard::Severity;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_escalation_present_until_transition_complete() {
    let t0 = Instant::now();
    let mut state = test_state();
    state.apply_tick(
        TickSnapshot::new(
            ReadingBuilder::new().build(),
            vec![notification("esc-1", Severity::Escalation)],
            "12:00:00",
        ),
        t0,
    );
    let id = state.toasts().iter().next().unwrap().id();

    state.advance(t0 + ms(15_000));
    assert_eq!(state.toasts().get(id).unwrap().phase(), ToastPhase::Visible);

    state.advance(t0 + ms(20_000));
    assert_eq!(
        state.toasts().get(id).unwrap().phase(),
        ToastPhase::Dismissing
    );

    // Still in the stack long after the timer, until the exit completes
    state.advance(t0 + ms(60_000));
    assert!(state.toasts().get(id).is_some());

    assert!(state.toasts_mut().transition_complete(id));
    assert!(state.toasts().is_empty());
}

#[test]
fn test_normal_toast_dismisses_at_ten_seconds() {
    let t0 = Instant::now();
    let mut stack = ToastStack::from_config(&AlertConfig::default());
    let id = stack.push(notification("n-1", Severity::Medium), t0);

    stack.advance(t0 + ms(9_999));
    assert_eq!(stack.get(id).unwrap().phase(), ToastPhase::Visible);

    stack.advance(t0 + ms(10_000));
    assert_eq!(stack.get(id).unwrap().phase(), ToastPhase::Dismissing);
}

#[test]
fn test_configured_durations() {
    let config = AlertConfig {
        entrance_delay_ms: 0,
        normal_duration_ms: 1_000,
        escalation_duration_ms: 2_000,
        ..AlertConfig::default()
    };
    let t0 = Instant::now();
    let mut stack = ToastStack::from_config(&config);
    let normal = stack.push(notification("a", Severity::Info), t0);
    let escalation = stack.push(notification("b", Severity::Escalation), t0);

    stack.advance(t0);
    assert_eq!(stack.get(normal).unwrap().phase(), ToastPhase::Visible);

    stack.advance(t0 + ms(1_500));
    assert_eq!(stack.get(normal).unwrap().phase(), ToastPhase::Dismissing);
    assert_eq!(stack.get(escalation).unwrap().phase(), ToastPhase::Visible);
}

#[test]
fn test_manual_dismiss() {
    let t0 = Instant::now();
    let mut stack = ToastStack::default();
    let id = stack.push(notification("a", Severity::Critical), t0);
    stack.advance(t0 + ms(200));

    assert!(stack.dismiss(id, t0 + ms(300)));
    assert_eq!(stack.get(id).unwrap().phase(), ToastPhase::Dismissing);

    // Timer expiry afterwards keeps the first dismissal time
    stack.advance(t0 + ms(10_000));
    assert_eq!(stack.get(id).unwrap().dismissed_at(), Some(t0 + ms(300)));
}
