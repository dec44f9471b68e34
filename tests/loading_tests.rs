// Host-side tests for the loading gate timeline and completion edge.

#![allow(dead_code)]
mod loading {
    include!("../src/core/loading.rs");
}

use loading::*;

#[test]
fn nothing_typed_at_zero() {
    let (msg, chars) = typed_state(0.0);
    assert_eq!(msg, 0);
    assert_eq!(chars, 0);
}

#[test]
fn first_message_types_character_by_character() {
    let (msg, chars) = typed_state(CHAR_INTERVAL_SEC * 3.5);
    assert_eq!(msg, 0);
    assert_eq!(chars, 3);
}

#[test]
fn pause_keeps_message_fully_revealed() {
    let first_len = STATUS_MESSAGES[0].chars().count();
    let t = first_len as f32 * CHAR_INTERVAL_SEC + MESSAGE_PAUSE_SEC * 0.5;
    let (msg, chars) = typed_state(t);
    assert_eq!(msg, 0);
    assert_eq!(chars, first_len);
}

#[test]
fn final_message_persists_forever() {
    let last = STATUS_MESSAGES.len() - 1;
    let (msg, chars) = typed_state(1e4);
    assert_eq!(msg, last);
    assert_eq!(chars, STATUS_MESSAGES[last].chars().count());
}

#[test]
fn progress_waits_for_delay_then_fills() {
    assert_eq!(progress(0.0), 0.0);
    assert_eq!(progress(PROGRESS_DELAY_SEC), 0.0);
    let half = progress(PROGRESS_DELAY_SEC + PROGRESS_DURATION_SEC * 0.5);
    assert!((half - 0.5).abs() < 1e-4);
    assert_eq!(progress(PROGRESS_DELAY_SEC + PROGRESS_DURATION_SEC), 1.0);
    assert_eq!(progress(1e4), 1.0);
}

#[test]
fn exit_opacity_fades_after_delay() {
    let start = PROGRESS_DELAY_SEC + PROGRESS_DURATION_SEC + EXIT_DELAY_SEC;
    assert_eq!(exit_opacity(start - 0.1), 1.0);
    let mid = exit_opacity(start + EXIT_FADE_SEC * 0.5);
    assert!((mid - 0.5).abs() < 1e-4);
    assert_eq!(exit_opacity(start + EXIT_FADE_SEC), 0.0);
}

#[test]
fn phase_sequence() {
    assert_eq!(phase(false, 100.0), GatePhase::NotStarted);
    assert_eq!(phase(true, 0.0), GatePhase::Announcing);
    let exit_start = PROGRESS_DELAY_SEC + PROGRESS_DURATION_SEC + EXIT_DELAY_SEC;
    assert_eq!(phase(true, exit_start + 0.01), GatePhase::Exiting);
    assert_eq!(phase(true, exit_start + EXIT_FADE_SEC + 0.01), GatePhase::Done);
}

#[test]
fn gate_does_not_advance_before_start() {
    let mut gate = LoadingGate::default();
    assert!(!gate.advance(10.0));
    assert_eq!(gate.phase(), GatePhase::NotStarted);
    assert!(!gate.is_done());
}

#[test]
fn gate_start_is_one_shot() {
    let mut gate = LoadingGate::default();
    assert!(gate.start());
    gate.advance(1.0);
    assert!(!gate.start());
    assert!(gate.elapsed() > 0.0);
}

#[test]
fn completion_edge_fires_exactly_once() {
    let mut gate = LoadingGate::default();
    gate.start();
    let mut edges = 0;
    for _ in 0..800 {
        if gate.advance(1.0 / 60.0) {
            edges += 1;
        }
    }
    assert_eq!(edges, 1);
    assert!(gate.is_done());
}

#[test]
fn negative_dt_is_clamped() {
    let mut gate = LoadingGate::default();
    gate.start();
    gate.advance(-5.0);
    assert_eq!(gate.elapsed(), 0.0);
}
