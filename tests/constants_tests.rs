// Sanity relationships between the tuning constants; catches accidental
// edits that would silently break the scene framing or easing.

#![allow(dead_code)]
mod scene_constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use core_constants::*;
use scene_constants::*;

#[test]
fn camera_planes_are_ordered() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_Z > CAMERA_NEAR);
    assert!(CAMERA_FOV_RADIANS > 0.0 && CAMERA_FOV_RADIANS < std::f32::consts::PI);
}

#[test]
fn fog_band_sits_behind_the_scene_origin() {
    assert!(FOG_NEAR < FOG_FAR);
    assert!(FOG_NEAR >= CAMERA_Z);
    assert!(FOG_FAR <= CAMERA_FAR);
}

#[test]
fn backdrop_shell_lies_inside_the_far_plane() {
    assert!(BACKDROP_SHELL_MIN > 0.0);
    assert!(BACKDROP_SHELL_MIN + BACKDROP_SHELL_SPREAD + CAMERA_Z <= CAMERA_FAR);
}

#[test]
fn post_parameters_are_in_range() {
    assert!(BLOOM_STRENGTH > 0.0);
    assert!((0.0..1.0).contains(&BLOOM_THRESHOLD));
    assert!((0.0..1.0).contains(&VIGNETTE_OFFSET));
    assert!((0.0..=1.0).contains(&VIGNETTE_DARKNESS));
    assert!(CHROMA_OFFSET > 0.0 && CHROMA_OFFSET < 0.01);
}

#[test]
fn colors_are_normalized() {
    for c in [
        BACKGROUND_COLOR,
        CURSOR_LIGHT_COLOR,
        ACCENT_LIGHT_COLOR,
        PALETTE_ORANGE,
        PALETTE_CYAN,
        PALETTE_WHITE,
    ] {
        for ch in c {
            assert!((0.0..=1.0).contains(&ch));
        }
    }
}

#[test]
fn palette_weights_leave_room_for_white() {
    assert!(PALETTE_ORANGE_WEIGHT > 0.0);
    assert!(PALETTE_CYAN_WEIGHT > 0.0);
    assert!(PALETTE_ORANGE_WEIGHT + PALETTE_CYAN_WEIGHT < 1.0);
}

#[test]
fn hover_targets_exceed_idle_targets() {
    assert!(CAPSULE_HOVER_SPIN > CAPSULE_IDLE_SPIN);
    assert!(CAPSULE_GLOW_HOVER > CAPSULE_GLOW_IDLE);
    assert!(CAPSULE_SCALE_HOVER > 1.0);
    assert!(HOVER_SCALE > 1.0);
    assert!(CORE_GLOW_HOVER > CORE_GLOW_IDLE);
}

#[test]
fn cursor_ease_is_a_lag_fraction() {
    assert!(CURSOR_EASE > 0.0 && CURSOR_EASE < 1.0);
}

#[test]
fn capsule_row_fits_the_pick_radius() {
    // Neighboring capsules must not share pick spheres.
    assert!(CAPSULE_SPACING_X > 2.0 * CAPSULE_PICK_RADIUS);
}

#[test]
fn section_enter_fraction_is_inside_the_viewport() {
    assert!(SECTION_ENTER_FRACTION > 0.0 && SECTION_ENTER_FRACTION < 1.0);
    assert!(SECTION_SLIDE_PX > 0.0);
}

#[test]
fn ripple_lifetime_is_a_short_burst() {
    // Every click release spawns one; they must clear well under a second
    // or rapid clicking piles elements onto the body.
    assert!(RIPPLE_LIFETIME_SEC > 0.0 && RIPPLE_LIFETIME_SEC < 1.0);
}

#[test]
fn rates_are_positive() {
    for r in [
        CURSOR_LIGHT_EASE_RATE,
        PARALLAX_RATE,
        HOVER_SCALE_RATE,
        CAPSULE_EASE_RATE,
        SECTION_EASE_RATE,
    ] {
        assert!(r > 0.0);
    }
}
