// Procedural hero mesh ensemble: glass blocks on two rings, connector
// points, a spinning core ring and a glowing center sphere.
//
// Descriptors are generated once from a seeded RNG at construction and never
// regenerated; identity is stable across frames (regeneration would cause
// visible popping). The per-frame update only advances rotations and eased
// targets.

use super::constants::*;
use super::motion::{ease_toward, smoothing_alpha};
use glam::Vec3;
use rand::prelude::*;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Icosahedron,
    Octahedron,
}

#[derive(Clone, Copy, Debug)]
pub struct BlockDescriptor {
    pub position: Vec3,
    pub base_rotation: Vec3,
    pub scale: f32,
    pub kind: ShapeKind,
    pub phase: f32,
}

impl BlockDescriptor {
    /// Idle wobble on top of the base rotation, a pure function of elapsed
    /// time plus the per-instance phase.
    pub fn rotation(&self, elapsed: f32) -> Vec3 {
        let t = elapsed * BLOCK_WOBBLE_RATE + self.phase;
        Vec3::new(
            self.base_rotation.x + t.sin() * BLOCK_WOBBLE_AMPLITUDE,
            self.base_rotation.y + (t * 0.7).cos() * BLOCK_WOBBLE_AMPLITUDE,
            self.base_rotation.z,
        )
    }
}

pub struct HeroEnsemble {
    blocks: Vec<BlockDescriptor>,
    connectors: Vec<Vec3>,
    pub group_rotation: Vec3,
    pub group_scale: f32,
    pub core_glow: f32,
    hovered: bool,
}

impl HeroEnsemble {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut blocks = Vec::with_capacity(INNER_BLOCK_COUNT + OUTER_BLOCK_COUNT);

        for i in 0..INNER_BLOCK_COUNT {
            let angle = (i as f32 / INNER_BLOCK_COUNT as f32) * std::f32::consts::TAU;
            let radius = INNER_RING_RADIUS + rng.gen::<f32>() * 0.5;
            blocks.push(BlockDescriptor {
                position: Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius * 0.5,
                    (rng.gen::<f32>() - 0.5) * 1.5,
                ),
                base_rotation: random_rotation(&mut rng),
                scale: 0.3 + rng.gen::<f32>() * 0.3,
                kind: match i % 3 {
                    0 => ShapeKind::Icosahedron,
                    1 => ShapeKind::Octahedron,
                    _ => ShapeKind::Cube,
                },
                phase: rng.gen::<f32>() * 100.0,
            });
        }

        for i in 0..OUTER_BLOCK_COUNT {
            let angle = (i as f32 / OUTER_BLOCK_COUNT as f32) * std::f32::consts::TAU + 0.3;
            let radius = OUTER_RING_RADIUS + rng.gen::<f32>() * 0.5;
            blocks.push(BlockDescriptor {
                position: Vec3::new(
                    angle.cos() * radius,
                    angle.sin() * radius * 0.6,
                    (rng.gen::<f32>() - 0.5) * 2.0,
                ),
                base_rotation: random_rotation(&mut rng),
                scale: 0.15 + rng.gen::<f32>() * 0.2,
                kind: ShapeKind::Cube,
                phase: rng.gen::<f32>() * 100.0,
            });
        }

        // Glowing midpoints between some neighboring blocks.
        let mut connectors = Vec::new();
        for i in 0..blocks.len() - 1 {
            if rng.gen::<f32>() > 0.5 {
                connectors.push((blocks[i].position + blocks[i + 1].position) * 0.5);
            }
        }

        Self {
            blocks,
            connectors,
            group_rotation: Vec3::ZERO,
            group_scale: 1.0,
            core_glow: CORE_GLOW_IDLE,
            hovered: false,
        }
    }

    pub fn blocks(&self) -> &[BlockDescriptor] {
        &self.blocks
    }

    pub fn connectors(&self) -> &[Vec3] {
        &self.connectors
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    /// Per-frame group motion: damped parallax toward the pointer-derived
    /// target, slow constant Z spin, hover scale/glow ease. The pointer ndc
    /// must be normalized against the live viewport size.
    pub fn update(&mut self, dt_sec: f32, pointer_ndc: [f32; 2]) {
        self.hovered =
            (pointer_ndc[0] * pointer_ndc[0] + pointer_ndc[1] * pointer_ndc[1]).sqrt()
                < HOVER_RADIUS_NDC;

        let target_x = pointer_ndc[1] * PARALLAX_COEFF;
        let target_y = pointer_ndc[0] * PARALLAX_COEFF;
        let alpha = smoothing_alpha(dt_sec, PARALLAX_RATE);
        self.group_rotation.x = ease_toward(self.group_rotation.x, target_x, alpha);
        self.group_rotation.y = ease_toward(self.group_rotation.y, target_y, alpha);
        self.group_rotation.z += GROUP_SPIN_RATE * dt_sec;

        let scale_alpha = smoothing_alpha(dt_sec, HOVER_SCALE_RATE);
        let scale_target = if self.hovered { HOVER_SCALE } else { 1.0 };
        self.group_scale = ease_toward(self.group_scale, scale_target, scale_alpha);

        let glow_target = if self.hovered {
            CORE_GLOW_HOVER
        } else {
            CORE_GLOW_IDLE
        };
        self.core_glow = ease_toward(self.core_glow, glow_target, scale_alpha);
    }

    /// Core ring angle, a pure function of elapsed time.
    pub fn core_ring_angle(elapsed: f32) -> f32 {
        elapsed * CORE_RING_SPIN_RATE
    }
}

fn random_rotation(rng: &mut StdRng) -> Vec3 {
    Vec3::new(
        rng.gen::<f32>() * std::f32::consts::PI,
        rng.gen::<f32>() * std::f32::consts::PI,
        rng.gen::<f32>() * std::f32::consts::PI,
    )
}
