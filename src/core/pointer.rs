// Smoothed pointer state shared by the cursor layer and the scene parallax.
//
// One instance is constructed at startup and passed by reference; nothing
// here is module-level mutable state, so the lifecycle is explicit and the
// math is testable on the host.

use super::constants::{CARD_TILT_DIVISOR, CURSOR_EASE};

#[derive(Clone, Copy, Debug)]
pub struct PointerTrack {
    raw: [f32; 2],
    displayed: [f32; 2],
    initialized: bool,
}

impl Default for PointerTrack {
    fn default() -> Self {
        Self {
            raw: [0.0, 0.0],
            displayed: [0.0, 0.0],
            initialized: false,
        }
    }
}

impl PointerTrack {
    /// Record the latest raw pointer position (client px). Called from the
    /// pointer-move handler; never touches the displayed position.
    pub fn set_raw(&mut self, x: f32, y: f32) {
        self.raw = [x, y];
        if !self.initialized {
            // First sample snaps so the cursor never lerps in from (0, 0).
            self.displayed = [x, y];
            self.initialized = true;
        }
    }

    /// Advance the displayed position one frame toward the raw target.
    /// Fixed per-frame ease: the visual cursor trails with inertia and never
    /// snaps.
    pub fn step(&mut self) {
        self.displayed[0] += (self.raw[0] - self.displayed[0]) * CURSOR_EASE;
        self.displayed[1] += (self.raw[1] - self.displayed[1]) * CURSOR_EASE;
    }

    pub fn raw(&self) -> [f32; 2] {
        self.raw
    }

    pub fn displayed(&self) -> [f32; 2] {
        self.displayed
    }

    /// Normalized device coordinates against the live viewport size
    /// (x right, y up, both in [-1, 1]).
    pub fn ndc(&self, viewport_w: f32, viewport_h: f32) -> [f32; 2] {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return [0.0, 0.0];
        }
        [
            (self.raw[0] / viewport_w) * 2.0 - 1.0,
            -((self.raw[1] / viewport_h) * 2.0 - 1.0),
        ]
    }
}

/// Tilt angles (degrees, x then y) for a hoverable card, proportional to the
/// pointer's offset from the card center. The divisor bounds the tilt
/// implicitly; no hard clamp.
#[inline]
pub fn card_tilt(pointer: [f32; 2], card_center: [f32; 2]) -> [f32; 2] {
    [
        (pointer[1] - card_center[1]) / CARD_TILT_DIVISOR,
        (card_center[0] - pointer[0]) / CARD_TILT_DIVISOR,
    ]
}
