/// Scene, lighting and post-processing tuning constants.
///
/// These express intended behavior (camera framing, fog band, bloom curve)
/// and keep magic numbers out of the render and frame code.
// Camera
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOV_RADIANS: f32 = 50.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Background and fog (#050510)
pub const BACKGROUND_COLOR: [f32; 3] = [0.0196, 0.0196, 0.0627];
pub const FOG_NEAR: f32 = 8.0;
pub const FOG_FAR: f32 = 25.0;

// Lighting rig
pub const AMBIENT_INTENSITY: f32 = 0.1;
pub const CURSOR_LIGHT_COLOR: [f32; 3] = [1.0, 0.341, 0.133]; // #FF5722
pub const CURSOR_LIGHT_INTENSITY: f32 = 2.0;
pub const CURSOR_LIGHT_Z: f32 = 3.0;
pub const CURSOR_LIGHT_EASE_RATE: f32 = 3.0; // 1/s toward smoothed pointer
pub const ACCENT_LIGHT_COLOR: [f32; 3] = [0.0, 0.831, 1.0]; // #00D4FF
pub const ACCENT_LIGHT_INTENSITY: f32 = 0.5;
pub const ACCENT_LIGHT_POS: [f32; 3] = [3.0, 3.0, 2.0];

// Post-processing
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const VIGNETTE_OFFSET: f32 = 0.3;
pub const VIGNETTE_DARKNESS: f32 = 0.7;
pub const CHROMA_OFFSET: f32 = 0.0005;

// Capsule row layout (world units)
pub const CAPSULE_SPACING_X: f32 = 3.2;
pub const CAPSULE_ROW_Y: f32 = -0.2;
pub const CAPSULE_ROW_Z: f32 = 0.0;

// Particle sprite size (world units at unit distance)
pub const PARTICLE_SPRITE_SIZE: f32 = 0.08;

// UI sound blips
pub const CLICK_BLIP_HZ: f32 = 880.0;
pub const WHOOSH_BASE_HZ: f32 = 220.0;
pub const POWER_UP_BASE_HZ: f32 = 330.0;
pub const BLIP_GAIN: f32 = 0.12;
