// Interactive capsule widget: one clickable 3D object per project.
//
// State machine: {Idle} ⇄ {Hovered} → (click) → {Navigating}, terminal.
// Per-frame update order is fixed: rotation, then float, then glow, then
// scale. All easing is time-proportional so behavior is frame-rate
// independent.

use super::constants::*;
use super::motion::{ease_toward, float_offset, smoothing_alpha};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapsulePhase {
    Idle,
    Hovered,
    Navigating,
}

#[derive(Clone, Debug)]
pub struct CapsuleWidget {
    pub slug: String,
    pub title: String,
    pub base_position: Vec3,
    phase: CapsulePhase,
    float_phase: f32,
    pub rotation_y: f32,
    pub float_y: f32,
    pub glow_opacity: f32,
    pub scale: f32,
}

impl CapsuleWidget {
    pub fn new(slug: &str, title: &str, index: usize, base_position: Vec3) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            base_position,
            phase: CapsulePhase::Idle,
            // Index-derived phase desynchronizes sibling floats.
            float_phase: index as f32,
            rotation_y: index as f32 * CAPSULE_BASE_ROT_STEP,
            float_y: 0.0,
            glow_opacity: CAPSULE_GLOW_IDLE,
            scale: 1.0,
        }
    }

    pub fn phase(&self) -> CapsulePhase {
        self.phase
    }

    /// Pointer enter/leave. Ignored once navigating.
    pub fn set_hovered(&mut self, hovered: bool) {
        match (self.phase, hovered) {
            (CapsulePhase::Navigating, _) => {}
            (_, true) => self.phase = CapsulePhase::Hovered,
            (_, false) => self.phase = CapsulePhase::Idle,
        }
    }

    /// Click action. Returns the navigation target slug exactly once; a
    /// second click while already navigating is a no-op.
    pub fn click(&mut self) -> Option<&str> {
        if self.phase == CapsulePhase::Navigating {
            return None;
        }
        self.phase = CapsulePhase::Navigating;
        Some(&self.slug)
    }

    pub fn update(&mut self, dt_sec: f32, elapsed: f32) {
        let hovered = self.phase == CapsulePhase::Hovered;

        let spin = if hovered {
            CAPSULE_HOVER_SPIN
        } else {
            CAPSULE_IDLE_SPIN
        };
        self.rotation_y += spin * dt_sec;

        self.float_y = float_offset(
            elapsed,
            self.float_phase,
            CAPSULE_FLOAT_RATE,
            CAPSULE_FLOAT_AMPLITUDE,
        );

        let alpha = smoothing_alpha(dt_sec, CAPSULE_EASE_RATE);
        let glow_target = if hovered {
            CAPSULE_GLOW_HOVER
        } else {
            CAPSULE_GLOW_IDLE
        };
        self.glow_opacity = ease_toward(self.glow_opacity, glow_target, alpha);

        let scale_target = if hovered { CAPSULE_SCALE_HOVER } else { 1.0 };
        self.scale = ease_toward(self.scale, scale_target, alpha);
    }

    /// World-space center for ray picking, including the float offset.
    pub fn center(&self) -> Vec3 {
        self.base_position + Vec3::new(0.0, self.float_y, 0.0)
    }
}
