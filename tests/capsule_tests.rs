// Host-side tests for the capsule widget state machine and easing.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod motion {
    include!("../src/core/motion.rs");
}
mod capsule {
    include!("../src/core/capsule.rs");
}

use capsule::*;
use constants::*;
use glam::Vec3;

fn widget() -> CapsuleWidget {
    CapsuleWidget::new("tijara-pos", "Tijara-POS", 0, Vec3::new(-3.2, -0.2, 0.0))
}

#[test]
fn starts_idle_with_idle_glow() {
    let w = widget();
    assert_eq!(w.phase(), CapsulePhase::Idle);
    assert_eq!(w.glow_opacity, CAPSULE_GLOW_IDLE);
    assert_eq!(w.scale, 1.0);
}

#[test]
fn hover_transitions_both_ways() {
    let mut w = widget();
    w.set_hovered(true);
    assert_eq!(w.phase(), CapsulePhase::Hovered);
    w.set_hovered(false);
    assert_eq!(w.phase(), CapsulePhase::Idle);
}

#[test]
fn click_yields_slug_exactly_once() {
    let mut w = widget();
    w.set_hovered(true);
    assert_eq!(w.click(), Some("tijara-pos"));
    assert_eq!(w.phase(), CapsulePhase::Navigating);
    assert_eq!(w.click(), None);
}

#[test]
fn hover_is_ignored_while_navigating() {
    let mut w = widget();
    let _ = w.click();
    w.set_hovered(true);
    assert_eq!(w.phase(), CapsulePhase::Navigating);
    w.set_hovered(false);
    assert_eq!(w.phase(), CapsulePhase::Navigating);
}

#[test]
fn hover_speeds_up_spin() {
    let mut idle = widget();
    let mut hovered = widget();
    hovered.set_hovered(true);
    for i in 0..60 {
        let t = i as f32 / 60.0;
        idle.update(1.0 / 60.0, t);
        hovered.update(1.0 / 60.0, t);
    }
    assert!(hovered.rotation_y > idle.rotation_y);
}

#[test]
fn glow_and_scale_ease_toward_hover_targets() {
    let mut w = widget();
    w.set_hovered(true);
    for i in 0..600 {
        w.update(1.0 / 60.0, i as f32 / 60.0);
    }
    assert!((w.glow_opacity - CAPSULE_GLOW_HOVER).abs() < 1e-2);
    assert!((w.scale - CAPSULE_SCALE_HOVER).abs() < 1e-2);
}

#[test]
fn glow_returns_to_idle_after_unhover() {
    let mut w = widget();
    w.set_hovered(true);
    for i in 0..120 {
        w.update(1.0 / 60.0, i as f32 / 60.0);
    }
    w.set_hovered(false);
    for i in 120..720 {
        w.update(1.0 / 60.0, i as f32 / 60.0);
    }
    assert!((w.glow_opacity - CAPSULE_GLOW_IDLE).abs() < 1e-2);
    assert!((w.scale - 1.0).abs() < 1e-2);
}

#[test]
fn center_tracks_float_offset() {
    let mut w = widget();
    w.update(1.0 / 60.0, 2.0);
    let c = w.center();
    assert_eq!(c.x, w.base_position.x);
    assert_eq!(c.z, w.base_position.z);
    assert!((c.y - (w.base_position.y + w.float_y)).abs() < 1e-6);
    assert!(w.float_y.abs() <= CAPSULE_FLOAT_AMPLITUDE + 1e-6);
}

#[test]
fn sibling_floats_are_desynchronized() {
    let mut a = CapsuleWidget::new("a", "A", 0, Vec3::ZERO);
    let mut b = CapsuleWidget::new("b", "B", 1, Vec3::ZERO);
    a.update(1.0 / 60.0, 3.0);
    b.update(1.0 / 60.0, 3.0);
    assert!((a.float_y - b.float_y).abs() > 1e-4);
}
