// Decorative particle backdrop: a fixed-count point cloud on a spherical
// shell, generated once at construction.
//
// Per frame only the whole-cloud rotation and a small breathing scale
// change; individual points are never mutated after creation.

use super::constants::*;
use super::motion::breathing_scale;
use glam::Vec3;
use rand::prelude::*;
use rand::rngs::StdRng;

pub struct ParticleCloud {
    positions: Vec<Vec3>,
    colors: Vec<[f32; 3]>,
    pub rotation: Vec3,
    pub scale: f32,
}

impl ParticleCloud {
    pub fn new(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        for _ in 0..count {
            let radius = BACKDROP_SHELL_MIN + rng.gen::<f32>() * BACKDROP_SHELL_SPREAD;
            // Uniform on the sphere: azimuth uniform, polar via acos of a
            // uniform in [-1, 1] to avoid pole clustering.
            let theta = rng.gen::<f32>() * std::f32::consts::TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ));

            let pick = rng.gen::<f32>();
            colors.push(if pick < PALETTE_ORANGE_WEIGHT {
                PALETTE_ORANGE
            } else if pick < PALETTE_ORANGE_WEIGHT + PALETTE_CYAN_WEIGHT {
                PALETTE_CYAN
            } else {
                PALETTE_WHITE
            });
        }

        Self {
            positions,
            colors,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn update(&mut self, dt_sec: f32, elapsed: f32) {
        self.rotation.y += BACKDROP_SPIN_Y * dt_sec;
        self.rotation.x += BACKDROP_SPIN_X * dt_sec;
        self.scale = breathing_scale(elapsed, BREATHE_RATE, BREATHE_AMPLITUDE);
    }
}
