use glam::Vec3;

/// Latest raw pointer position in canvas backing-store pixels, plus button
/// state. Written by pointer events, read once per frame.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Pick the nearest sphere hit along the ray, if any. Used for capsule
/// hover/click tests against each widget's bounding sphere.
#[inline]
pub fn pick_nearest(
    centers: &[Vec3],
    radius: f32,
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, center) in centers.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, radius) {
            if best.map_or(true, |(_, bt)| t < bt) {
                best = Some((i, t));
            }
        }
    }
    best.map(|(i, _)| i)
}
