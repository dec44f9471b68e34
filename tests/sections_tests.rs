// Host-side tests for the scroll animation director.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod sections {
    include!("../src/core/sections.rs");
}

use sections::*;

const VH: f32 = 800.0;

fn rect(top: f32, bottom: f32) -> AnchorRect {
    AnchorRect { top, bottom }
}

fn offscreen_below() -> AnchorRect {
    rect(VH + 100.0, VH + 700.0)
}

#[test]
fn four_sections_by_default() {
    let d = ScrollDirector::default();
    assert_eq!(d.len(), SECTION_IDS.len());
    assert_eq!(d.active(), 0);
}

#[test]
fn section_enters_when_top_crosses_threshold() {
    let mut d = ScrollDirector::new(1);
    d.observe(&[rect(VH * 0.8, VH * 1.5)], VH);
    for _ in 0..600 {
        d.step(1.0 / 60.0);
    }
    assert!((d.animator(0).opacity() - 1.0).abs() < 1e-3);
    assert!(d.animator(0).translate_y().abs() < 0.1);
}

#[test]
fn offscreen_section_stays_hidden() {
    let mut d = ScrollDirector::new(1);
    d.observe(&[offscreen_below()], VH);
    d.step(1.0);
    assert_eq!(d.animator(0).opacity(), 0.0);
    assert!(d.animator(0).translate_y() > 0.0);
}

#[test]
fn scrolling_away_reverses_the_same_transition() {
    let mut d = ScrollDirector::new(1);
    d.observe(&[rect(100.0, 700.0)], VH);
    for _ in 0..600 {
        d.step(1.0 / 60.0);
    }
    d.observe(&[offscreen_below()], VH);
    for _ in 0..600 {
        d.step(1.0 / 60.0);
    }
    assert!(d.animator(0).opacity() < 1e-3);
    assert!(d.animator(0).settled());
}

#[test]
fn reobserving_same_state_is_idempotent() {
    let mut d = ScrollDirector::new(1);
    d.observe(&[rect(100.0, 700.0)], VH);
    for _ in 0..600 {
        d.step(1.0 / 60.0);
    }
    let before = d.animator(0).progress();
    d.observe(&[rect(100.0, 700.0)], VH);
    d.step(1.0 / 60.0);
    assert!((d.animator(0).progress() - before).abs() < 1e-4);
}

#[test]
fn concurrent_transitions_run_independently() {
    let mut d = ScrollDirector::new(2);
    d.observe(&[rect(100.0, 700.0), offscreen_below()], VH);
    for _ in 0..30 {
        d.step(1.0 / 60.0);
    }
    assert!(d.animator(0).opacity() > 0.0);
    assert_eq!(d.animator(1).opacity(), 0.0);
}

#[test]
fn active_follows_viewport_midpoint() {
    let mut d = ScrollDirector::new(3);
    let rects = [rect(-800.0, 0.0), rect(0.0, 800.0), rect(800.0, 1600.0)];
    assert_eq!(d.resolve_active(&rects, VH), 1);
}

#[test]
fn active_is_retained_when_nothing_contains_midpoint() {
    let mut d = ScrollDirector::new(2);
    let rects = [rect(0.0, 800.0), rect(800.0, 1600.0)];
    assert_eq!(d.resolve_active(&rects, VH), 0);
    // A gap between anchors spans the midpoint; the answer must not flap.
    let gap = [rect(-800.0, 100.0), rect(700.0, 1500.0)];
    assert_eq!(d.resolve_active(&gap, VH), 0);
}

#[test]
fn document_order_breaks_ties() {
    let mut d = ScrollDirector::new(2);
    let overlapping = [rect(0.0, 800.0), rect(0.0, 800.0)];
    assert_eq!(d.resolve_active(&overlapping, VH), 0);
}

#[test]
fn fast_scroll_lands_on_the_right_section() {
    let mut d = ScrollDirector::new(3);
    let top = [rect(0.0, 800.0), rect(800.0, 1600.0), rect(1600.0, 2400.0)];
    assert_eq!(d.resolve_active(&top, VH), 0);
    // Jump straight to the bottom without visiting the middle.
    let bottom = [
        rect(-1600.0, -800.0),
        rect(-800.0, 0.0),
        rect(0.0, 800.0),
    ];
    assert_eq!(d.resolve_active(&bottom, VH), 2);
}
