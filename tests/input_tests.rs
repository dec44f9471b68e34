// Host-side tests for pure picking math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec3;
use input::*;

#[test]
fn ray_sphere_hits_straight_on() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 0.0, -5.0),
        1.0,
    );
    let t = result.unwrap();
    assert!((t - 4.0).abs() < 1e-4);
}

#[test]
fn ray_sphere_misses_off_axis() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(5.0, 0.0, -5.0),
        1.0,
    );
    assert!(result.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_rejected() {
    let result = ray_sphere(
        Vec3::ZERO,
        Vec3::new(0.0, 0.0, -1.0),
        Vec3::new(0.0, 0.0, 5.0),
        1.0,
    );
    assert!(result.is_none());
}

#[test]
fn pick_nearest_prefers_closer_sphere() {
    let centers = vec![
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::new(0.0, 0.0, -4.0),
        Vec3::new(0.0, 0.0, -7.0),
    ];
    let hit = pick_nearest(&centers, 1.0, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(hit, Some(1));
}

#[test]
fn pick_nearest_none_when_all_miss() {
    let centers = vec![Vec3::new(10.0, 0.0, -5.0), Vec3::new(-10.0, 0.0, -5.0)];
    let hit = pick_nearest(&centers, 1.0, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(hit, None);
}

#[test]
fn pick_nearest_empty_slice() {
    let hit = pick_nearest(&[], 1.0, Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(hit, None);
}
