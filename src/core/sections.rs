// Scroll/viewport animation director.
//
// Each registered anchor owns a progress value in [0, 1]; crossing the
// visibility threshold retargets it to 1 (enter) or back to 0 (exit), and
// the same eased transition runs either direction. Re-observing the same
// state is idempotent, so scroll-past-and-back never stacks animations.
//
// The active anchor for nav highlighting is resolved geometrically on every
// scroll frame (which anchor contains the viewport's vertical midpoint)
// rather than from edge-triggered events, so a fast scroll that skips a
// trigger zone still lands on the right section. When no anchor qualifies
// the previous active is retained.

use super::constants::{SECTION_EASE_RATE, SECTION_ENTER_FRACTION, SECTION_SLIDE_PX};
use super::motion::{ease_toward, smoothing_alpha};

pub static SECTION_IDS: &[&str] = &["home", "projects", "about", "contact"];

/// Vertical extent of one anchor relative to the viewport top, in px.
#[derive(Clone, Copy, Debug)]
pub struct AnchorRect {
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct SectionAnimator {
    progress: f32,
    target: f32,
}

impl Default for SectionAnimator {
    fn default() -> Self {
        Self {
            progress: 0.0,
            target: 0.0,
        }
    }
}

impl SectionAnimator {
    pub fn enter(&mut self) {
        self.target = 1.0;
    }

    pub fn exit(&mut self) {
        self.target = 0.0;
    }

    pub fn step(&mut self, dt_sec: f32) {
        let alpha = smoothing_alpha(dt_sec, SECTION_EASE_RATE);
        self.progress = ease_toward(self.progress, self.target, alpha);
        // Snap near the endpoints so repeated triggers settle exactly.
        if (self.progress - self.target).abs() < 1e-3 {
            self.progress = self.target;
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn settled(&self) -> bool {
        self.progress == self.target
    }

    /// Opacity for the section contents.
    pub fn opacity(&self) -> f32 {
        self.progress
    }

    /// Upward slide offset in px (starts below, eases to rest).
    pub fn translate_y(&self) -> f32 {
        (1.0 - self.progress) * SECTION_SLIDE_PX
    }
}

pub struct ScrollDirector {
    animators: Vec<SectionAnimator>,
    active: usize,
}

impl Default for ScrollDirector {
    fn default() -> Self {
        Self::new(SECTION_IDS.len())
    }
}

impl ScrollDirector {
    pub fn new(section_count: usize) -> Self {
        Self {
            animators: vec![SectionAnimator::default(); section_count],
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    pub fn animator(&self, i: usize) -> &SectionAnimator {
        &self.animators[i]
    }

    /// Feed the latest measured rects. Each anchor's enter/exit fires
    /// independently; transitions run concurrently across anchors.
    pub fn observe(&mut self, rects: &[AnchorRect], viewport_h: f32) {
        for (anim, rect) in self.animators.iter_mut().zip(rects) {
            let entered =
                rect.top < viewport_h * SECTION_ENTER_FRACTION && rect.bottom > 0.0;
            if entered {
                anim.enter();
            } else {
                anim.exit();
            }
        }
    }

    /// Resolve the active anchor from the viewport midpoint; retains the
    /// previous answer while no anchor contains it. Document order breaks
    /// ties (first match wins).
    pub fn resolve_active(&mut self, rects: &[AnchorRect], viewport_h: f32) -> usize {
        let mid = viewport_h * 0.5;
        for (i, rect) in rects.iter().enumerate().take(self.animators.len()) {
            if rect.top <= mid && rect.bottom >= mid {
                self.active = i;
                break;
            }
        }
        self.active
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn step(&mut self, dt_sec: f32) {
        for anim in &mut self.animators {
            anim.step(dt_sec);
        }
    }
}
