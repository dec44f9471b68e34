// Host-side tests for the fixed camera and screen-to-world ray math.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use constants::CAMERA_Z;
use glam::Vec3;

#[test]
fn center_of_screen_ray_points_down_negative_z() {
    let (ro, rd) = camera::screen_to_world_ray(800.0, 600.0, 400.0, 300.0);
    assert_eq!(ro, Vec3::new(0.0, 0.0, CAMERA_Z));
    assert!(rd.x.abs() < 1e-4);
    assert!(rd.y.abs() < 1e-4);
    assert!(rd.z < -0.99);
}

#[test]
fn ray_direction_is_normalized() {
    let (_, rd) = camera::screen_to_world_ray(1280.0, 720.0, 100.0, 650.0);
    assert!((rd.length() - 1.0).abs() < 1e-4);
}

#[test]
fn right_of_center_tilts_ray_right() {
    let (_, rd) = camera::screen_to_world_ray(800.0, 600.0, 700.0, 300.0);
    assert!(rd.x > 0.0);
    assert!(rd.y.abs() < 1e-4);
}

#[test]
fn above_center_tilts_ray_up() {
    let (_, rd) = camera::screen_to_world_ray(800.0, 600.0, 400.0, 100.0);
    assert!(rd.y > 0.0);
}

#[test]
fn center_ray_reaches_world_origin() {
    let (ro, rd) = camera::screen_to_world_ray(1024.0, 768.0, 512.0, 384.0);
    let t = -ro.z / rd.z;
    let hit = ro + rd * t;
    assert!(hit.length() < 1e-3);
}
