// Host-side tests for the smoothed pointer and card tilt math.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod pointer {
    include!("../src/core/pointer.rs");
}

use constants::*;
use pointer::*;

#[test]
fn first_sample_snaps_displayed_position() {
    let mut p = PointerTrack::default();
    p.set_raw(300.0, 200.0);
    assert_eq!(p.displayed(), [300.0, 200.0]);
}

#[test]
fn later_samples_do_not_snap() {
    let mut p = PointerTrack::default();
    p.set_raw(0.0, 0.0);
    p.set_raw(100.0, 100.0);
    assert_eq!(p.raw(), [100.0, 100.0]);
    assert_eq!(p.displayed(), [0.0, 0.0]);
}

#[test]
fn step_eases_by_fixed_fraction() {
    let mut p = PointerTrack::default();
    p.set_raw(0.0, 0.0);
    p.set_raw(100.0, 0.0);
    p.step();
    assert!((p.displayed()[0] - 100.0 * CURSOR_EASE).abs() < 1e-4);
}

#[test]
fn displayed_converges_to_raw() {
    let mut p = PointerTrack::default();
    p.set_raw(0.0, 0.0);
    p.set_raw(640.0, 480.0);
    for _ in 0..200 {
        p.step();
    }
    let d = p.displayed();
    assert!((d[0] - 640.0).abs() < 0.5);
    assert!((d[1] - 480.0).abs() < 0.5);
}

#[test]
fn ndc_maps_corners_and_center() {
    let mut p = PointerTrack::default();
    p.set_raw(400.0, 300.0);
    assert_eq!(p.ndc(800.0, 600.0), [0.0, 0.0]);
    p.set_raw(800.0, 0.0);
    assert_eq!(p.ndc(800.0, 600.0), [1.0, 1.0]);
    p.set_raw(0.0, 600.0);
    assert_eq!(p.ndc(800.0, 600.0), [-1.0, -1.0]);
}

#[test]
fn ndc_guards_against_zero_viewport() {
    let mut p = PointerTrack::default();
    p.set_raw(100.0, 100.0);
    assert_eq!(p.ndc(0.0, 600.0), [0.0, 0.0]);
}

#[test]
fn card_tilt_is_zero_at_center() {
    assert_eq!(card_tilt([150.0, 250.0], [150.0, 250.0]), [0.0, 0.0]);
}

#[test]
fn card_tilt_direction_and_magnitude() {
    // Pointer below and left of center: tilts forward (positive x) and
    // toward the pointer (positive y).
    let [tx, ty] = card_tilt([100.0, 300.0], [150.0, 250.0]);
    assert!((tx - 50.0 / CARD_TILT_DIVISOR).abs() < 1e-4);
    assert!((ty - 50.0 / CARD_TILT_DIVISOR).abs() < 1e-4);
}
