// Small easing and oscillation helpers shared by the animated widgets.
//
// Every smoothed value in the scene converges through one of these, so the
// frame loop stays a plain sequence of `ease_toward` calls with no hidden
// timeline state.

/// Time-proportional smoothing factor for an exponential approach.
///
/// `rate` is in 1/seconds; the returned alpha is stable under varying frame
/// times (two 8 ms steps land where one 16 ms step does).
#[inline]
pub fn smoothing_alpha(dt_sec: f32, rate: f32) -> f32 {
    1.0 - (-dt_sec * rate).exp()
}

/// Move `current` toward `target` by the given alpha in [0, 1].
#[inline]
pub fn ease_toward(current: f32, target: f32, alpha: f32) -> f32 {
    current + (target - current) * alpha
}

/// Sinusoidal vertical float with a per-instance phase so siblings
/// desynchronize.
#[inline]
pub fn float_offset(elapsed: f32, phase: f32, rate: f32, amplitude: f32) -> f32 {
    (elapsed * rate + phase).sin() * amplitude
}

/// Periodic whole-object scale "breathing" around 1.0.
#[inline]
pub fn breathing_scale(elapsed: f32, rate: f32, amplitude: f32) -> f32 {
    1.0 + (elapsed * rate).sin() * amplitude
}
