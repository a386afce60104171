//! Pixel Patrol - a tiny pixel-art platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `level`: Hardcoded level data and the display-to-sim geometry scaler
//! - `input`: Key-state sampler fed by host keyboard events
//! - `renderer`: Software low-res frame + WebGPU nearest-neighbor blit

pub mod input;
pub mod level;
pub mod renderer;
pub mod sim;

pub use input::{InputState, Intent};
pub use level::Level;

/// Game configuration constants
pub mod consts {
    /// Display surface dimensions (canvas pixels)
    pub const DISPLAY_W: u32 = 960;
    pub const DISPLAY_H: u32 = 540;

    /// Nearest-neighbor upscale factor; display / scale must divide evenly
    pub const PIXEL_SCALE: u32 = 3;

    /// Low-resolution frame dimensions
    pub const FRAME_W: u32 = DISPLAY_W / PIXEL_SCALE;
    pub const FRAME_H: u32 = DISPLAY_H / PIXEL_SCALE;

    /// World extents in simulation units (one unit = one low-res pixel)
    pub const WORLD_W: f32 = FRAME_W as f32;
    pub const WORLD_H: f32 = FRAME_H as f32;

    /// Player run tuning, units/tick. All increments are fixed per-tick
    /// values, not delta-time scaled; one tick fires per animation frame.
    pub const MAX_RUN_SPEED: f32 = 2.2;
    pub const RUN_ACCEL: f32 = 0.4;
    /// Horizontal decay factor applied when no direction is held
    pub const FRICTION: f32 = 0.78;

    /// Vertical tuning (units/tick)
    pub const GRAVITY: f32 = 0.32;
    pub const MAX_FALL_SPEED: f32 = 6.0;
    pub const JUMP_IMPULSE: f32 = 5.4;

    /// Stomp detection: player bottom must be within this distance of the
    /// hazard top, while falling, to count as a landing
    pub const STOMP_TOLERANCE: f32 = 6.0;
    /// Upward velocity granted after a successful stomp
    pub const STOMP_BOUNCE: f32 = 4.5;

    /// Starting lives
    pub const START_LIVES: u32 = 3;

    /// Score awards
    pub const PICKUP_SCORE: u32 = 1;
    pub const STOMP_SCORE: u32 = 2;
}
