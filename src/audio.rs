//! One-shot UI sound blips on a shared AudioContext.
//!
//! Each blip is an oscillator plus gain envelope created on demand, started
//! and stopped on the audio clock; nothing persistent beyond the context.
//! Playback is gated by an enabled flag toggled from the sound button.

use crate::constants::{BLIP_GAIN, CLICK_BLIP_HZ, POWER_UP_BASE_HZ, WHOOSH_BASE_HZ};
use web_sys as web;

pub struct SoundBoard {
    ctx: Option<web::AudioContext>,
    enabled: bool,
}

impl SoundBoard {
    /// Construct with no context; [`SoundBoard::unlock`] creates it inside a
    /// user gesture, where browsers allow it to start.
    pub fn new() -> Self {
        Self {
            ctx: None,
            enabled: true,
        }
    }

    /// Create and resume the context. Must run inside a gesture handler;
    /// autoplay policy suspends contexts created outside one, which would
    /// mute everything the frame loop schedules later.
    pub fn unlock(&mut self) {
        if let Some(ctx) = self.context() {
            let _ = ctx.resume();
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    fn context(&mut self) -> Option<&web::AudioContext> {
        if self.ctx.is_none() {
            match web::AudioContext::new() {
                Ok(ctx) => self.ctx = Some(ctx),
                Err(e) => {
                    log::warn!("AudioContext error: {:?}", e);
                    return None;
                }
            }
        }
        self.ctx.as_ref()
    }

    /// Short square-wave tick for button and capsule clicks.
    pub fn click_blip(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(ctx) = self.context() {
            one_shot(
                ctx,
                web::OscillatorType::Square,
                CLICK_BLIP_HZ,
                CLICK_BLIP_HZ,
                0.08,
                BLIP_GAIN,
            );
        }
    }

    /// Rising sine sweep played when the active section changes.
    pub fn whoosh(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(ctx) = self.context() {
            one_shot(
                ctx,
                web::OscillatorType::Sine,
                WHOOSH_BASE_HZ,
                WHOOSH_BASE_HZ * 2.0,
                0.35,
                BLIP_GAIN * 0.7,
            );
        }
    }

    /// Triumphant two-octave sweep for the loading-gate completion.
    pub fn power_up(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(ctx) = self.context() {
            one_shot(
                ctx,
                web::OscillatorType::Triangle,
                POWER_UP_BASE_HZ,
                POWER_UP_BASE_HZ * 4.0,
                0.5,
                BLIP_GAIN,
            );
        }
    }
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::new()
    }
}

fn one_shot(
    audio_ctx: &web::AudioContext,
    osc_type: web::OscillatorType,
    start_hz: f32,
    end_hz: f32,
    duration_sec: f64,
    peak_gain: f32,
) {
    if let Ok(src) = web::OscillatorNode::new(audio_ctx) {
        src.set_type(osc_type);
        src.frequency().set_value(start_hz);
        if let Ok(g) = web::GainNode::new(audio_ctx) {
            g.gain().set_value(0.0);
            let now = audio_ctx.current_time();
            let t0 = now + 0.005;
            if (end_hz - start_hz).abs() > f32::EPSILON {
                let _ = src
                    .frequency()
                    .linear_ramp_to_value_at_time(end_hz, t0 + duration_sec);
            }
            let _ = g.gain().linear_ramp_to_value_at_time(peak_gain, t0 + 0.02);
            let _ = g.gain().linear_ramp_to_value_at_time(0.0, t0 + duration_sec);
            let _ = src.connect_with_audio_node(&g);
            let _ = g.connect_with_audio_node(&audio_ctx.destination());
            let _ = src.start_with_when(t0);
            let _ = src.stop_with_when(t0 + duration_sec + 0.05);
        }
    }
}
