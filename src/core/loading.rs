// Loading gate: a one-shot intro sequence gating the rest of the page.
//
// Typed-message reveal and progress fill are pure functions of elapsed time
// rather than accumulated timer callbacks; progress is recomputable at any
// frame and cancellation is just dropping the gate.

pub static STATUS_MESSAGES: &[&str] = &[
    "INITIATING CORE PROTOCOLS...",
    "ACCESSING DIGITAL ASSETS...",
    "AUTHENTICATING USER: HAMZA ELGARN...",
    "ESTABLISHING SECURE CONNECTION...",
    "[LOAD COMPLETE]",
];

pub const CHAR_INTERVAL_SEC: f32 = 0.035;
pub const MESSAGE_PAUSE_SEC: f32 = 0.35;
pub const PROGRESS_DELAY_SEC: f32 = 0.8;
pub const PROGRESS_DURATION_SEC: f32 = 3.0;
pub const EXIT_DELAY_SEC: f32 = 0.5;
pub const EXIT_FADE_SEC: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatePhase {
    NotStarted,
    Announcing,
    Exiting,
    Done,
}

/// Message index plus revealed-character count at `elapsed` seconds after
/// start. The final message, once fully typed, remains displayed.
pub fn typed_state(elapsed: f32) -> (usize, usize) {
    let mut t = elapsed.max(0.0);
    let last = STATUS_MESSAGES.len() - 1;
    for (i, msg) in STATUS_MESSAGES.iter().enumerate() {
        let type_time = msg.chars().count() as f32 * CHAR_INTERVAL_SEC;
        if t < type_time {
            return (i, (t / CHAR_INTERVAL_SEC) as usize);
        }
        if i == last {
            return (last, msg.chars().count());
        }
        t -= type_time + MESSAGE_PAUSE_SEC;
        if t < 0.0 {
            // Inside the pause after message i: it stays fully revealed.
            return (i, msg.chars().count());
        }
    }
    (last, STATUS_MESSAGES[last].chars().count())
}

/// Progress-bar fill in [0, 1]. Independent of the typing timeline by
/// design: typing finishing early never affects fill timing.
pub fn progress(elapsed: f32) -> f32 {
    ((elapsed - PROGRESS_DELAY_SEC) / PROGRESS_DURATION_SEC).clamp(0.0, 1.0)
}

fn exit_start() -> f32 {
    PROGRESS_DELAY_SEC + PROGRESS_DURATION_SEC + EXIT_DELAY_SEC
}

/// Opacity of the gate container during {Exiting}, 1.0 before it.
pub fn exit_opacity(elapsed: f32) -> f32 {
    (1.0 - (elapsed - exit_start()) / EXIT_FADE_SEC).clamp(0.0, 1.0)
}

pub fn phase(started: bool, elapsed: f32) -> GatePhase {
    if !started {
        return GatePhase::NotStarted;
    }
    if elapsed < exit_start() {
        GatePhase::Announcing
    } else if elapsed < exit_start() + EXIT_FADE_SEC {
        GatePhase::Exiting
    } else {
        GatePhase::Done
    }
}

/// Stateful wrapper owning the exactly-once completion edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoadingGate {
    started: bool,
    elapsed: f32,
    completed: bool,
}

impl LoadingGate {
    /// User-triggered start. Re-triggers while running are no-ops.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.elapsed = 0.0;
        true
    }

    /// Advance by one frame. Returns `true` exactly once, on the frame the
    /// exit fade completes; the caller fires its completion callback on that
    /// edge and never again.
    pub fn advance(&mut self, dt_sec: f32) -> bool {
        if !self.started || self.completed {
            return false;
        }
        self.elapsed += dt_sec.max(0.0);
        if self.phase() == GatePhase::Done {
            self.completed = true;
            return true;
        }
        false
    }

    pub fn phase(&self) -> GatePhase {
        phase(self.started, self.elapsed)
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_done(&self) -> bool {
        self.completed
    }
}
