// Shared tuning constants for the portfolio scene and widgets.

// Cursor smoothing
pub const CURSOR_EASE: f32 = 0.15; // per-frame ease factor, lower = more lag
pub const CARD_TILT_DIVISOR: f32 = 20.0; // px offset -> degrees
pub const RIPPLE_LIFETIME_SEC: f32 = 0.6;

// Hero ensemble
pub const INNER_BLOCK_COUNT: usize = 8;
pub const OUTER_BLOCK_COUNT: usize = 5;
pub const INNER_RING_RADIUS: f32 = 1.5;
pub const OUTER_RING_RADIUS: f32 = 2.5;
pub const BLOCK_WOBBLE_RATE: f32 = 0.3;
pub const BLOCK_WOBBLE_AMPLITUDE: f32 = 0.1;
pub const PARALLAX_COEFF: f32 = 0.3; // pointer ndc -> target group tilt
pub const PARALLAX_RATE: f32 = 3.0; // 1/s, exponential approach rate
pub const GROUP_SPIN_RATE: f32 = 0.05; // rad/s around Z
pub const HOVER_RADIUS_NDC: f32 = 0.5;
pub const HOVER_SCALE: f32 = 1.1;
pub const HOVER_SCALE_RATE: f32 = 6.0;
pub const CORE_RING_SPIN_RATE: f32 = 0.2;
pub const CORE_GLOW_IDLE: f32 = 1.0;
pub const CORE_GLOW_HOVER: f32 = 2.0;

// Capsule widgets
pub const CAPSULE_IDLE_SPIN: f32 = 0.05; // rad/s
pub const CAPSULE_HOVER_SPIN: f32 = 0.3;
pub const CAPSULE_FLOAT_RATE: f32 = 0.5;
pub const CAPSULE_FLOAT_AMPLITUDE: f32 = 0.1;
pub const CAPSULE_GLOW_IDLE: f32 = 0.2;
pub const CAPSULE_GLOW_HOVER: f32 = 0.6;
pub const CAPSULE_SCALE_HOVER: f32 = 1.08;
pub const CAPSULE_EASE_RATE: f32 = 5.0; // 1/s, shared by glow and scale
pub const CAPSULE_PICK_RADIUS: f32 = 1.1;
pub const CAPSULE_BASE_ROT_STEP: f32 = std::f32::consts::PI * 0.3;

// Particle backdrop
pub const BACKDROP_PARTICLE_COUNT: usize = 1000;
pub const BACKDROP_SHELL_MIN: f32 = 15.0;
pub const BACKDROP_SHELL_SPREAD: f32 = 25.0;
pub const BACKDROP_SPIN_Y: f32 = 0.02; // rad/s
pub const BACKDROP_SPIN_X: f32 = 0.01;
pub const BREATHE_RATE: f32 = 0.5;
pub const BREATHE_AMPLITUDE: f32 = 0.02;

// Weighted palette: orange, cyan, white
pub const PALETTE_ORANGE: [f32; 3] = [1.0, 0.341, 0.133];
pub const PALETTE_CYAN: [f32; 3] = [0.0, 0.831, 1.0];
pub const PALETTE_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const PALETTE_ORANGE_WEIGHT: f32 = 0.2;
pub const PALETTE_CYAN_WEIGHT: f32 = 0.2;

// Scroll director
pub const SECTION_EASE_RATE: f32 = 4.0; // 1/s toward shown/hidden
pub const SECTION_ENTER_FRACTION: f32 = 0.85; // top above this * viewport => entered
pub const SECTION_SLIDE_PX: f32 = 40.0;

// Contact form
pub const SUCCESS_RESET_SEC: f32 = 5.0;
