//! Behavioural tests for the toggle counter

use clapper_core::machine::{Mode, ToggleMachine, ToggleState, TRANSITIONS};
use clapper_core::Signal;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn after(toggles: usize) -> ToggleState {
    let mut machine = ToggleMachine::new();
    for _ in 0..toggles {
        machine.toggle();
    }
    machine.state()
}

#[test]
fn test_scenarios() {
    assert_eq!(after(0), ToggleState::new(Mode::Inactive, 0));
    assert_eq!(after(1), ToggleState::new(Mode::Active, 1));
    assert_eq!(after(2), ToggleState::new(Mode::Inactive, 1));
    assert_eq!(after(3), ToggleState::new(Mode::Active, 2));
    assert_eq!(after(100), ToggleState::new(Mode::Inactive, 50));
}

#[test]
fn test_count_matches_calls_made_while_inactive() {
    let mut machine = ToggleMachine::new();
    let mut calls_from_inactive = 0u64;

    for n in 1..=257u64 {
        if machine.mode() == Mode::Inactive {
            calls_from_inactive += 1;
        }
        let before = machine.count();
        let state = machine.toggle();

        assert_eq!(state.count, calls_from_inactive);
        assert!(state.count >= before);
        let expected = if n % 2 == 1 { Mode::Active } else { Mode::Inactive };
        assert_eq!(state.mode, expected);
    }
}

#[test]
fn test_state_is_pure_read() {
    let mut machine = ToggleMachine::new();
    machine.toggle();
    let first = machine.state();
    let second = machine.state();
    assert_eq!(first, second);
    assert_eq!(machine.state(), ToggleState::new(Mode::Active, 1));
}

#[test]
fn test_table_covers_both_modes() {
    let machine = ToggleMachine::new();
    assert_eq!(machine.transitions(), &TRANSITIONS[..]);
    let targets: Vec<_> = TRANSITIONS.iter().map(|t| (t.from, t.to)).collect();
    assert_eq!(
        targets,
        vec![(Mode::Inactive, Mode::Active), (Mode::Active, Mode::Inactive)]
    );
}

#[test]
fn test_published_snapshots() {
    let mut machine = ToggleMachine::new();
    let signal = Signal::new(machine.state());
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    signal.subscribe(move |state: &ToggleState| seen_clone.lock().push(state.to_string()));

    for _ in 0..3 {
        signal.set(machine.toggle());
    }

    assert_eq!(
        *seen.lock(),
        vec!["active (1)", "inactive (1)", "active (2)"]
    );
}
