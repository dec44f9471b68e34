//! Pure, host-testable core: every state machine and per-frame update rule,
//! with no platform types. The wasm layers at the crate root only wire DOM
//! events into these and paint the results back out.

pub mod capsule;
pub mod config;
pub mod constants;
pub mod contact;
pub mod ensemble;
pub mod gallery;
pub mod loading;
pub mod motion;
pub mod particles;
pub mod pointer;
pub mod projects;
pub mod sections;

pub use capsule::*;
pub use config::*;
pub use constants::*;
pub use contact::*;
pub use ensemble::*;
pub use gallery::*;
pub use loading::*;
pub use motion::*;
pub use particles::*;
pub use pointer::*;
pub use projects::*;
pub use sections::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
