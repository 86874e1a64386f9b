//! Pong - a deterministic two-player paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, game state)
//! - `input`: Logical actions and the held-key input source
//! - `clock`: Frame time to fixed simulation steps
//! - `renderer`: Draw sequencing for an external rendering surface
//! - `settings`: Arena size, physics options and key bindings

pub mod clock;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use clock::FixedStep;
pub use input::{Action, HeldKeys, InputSource, KeyBindings};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Arena dimensions
    pub const ARENA_WIDTH: u32 = 800;
    pub const ARENA_HEIGHT: u32 = 480;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance from the arena edge to the paddle center
    pub const PADDLE_X_OFFSET: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 300.0;

    /// Ball defaults (16x16 sprite)
    pub const BALL_HALF_WIDTH: f32 = 8.0;
    pub const BALL_HALF_HEIGHT: f32 = 8.0;
    pub const BALL_START_SPEED: f32 = 200.0;
    /// Serve direction, deliberately unnormalized
    pub const BALL_START_DIR: (f32, f32) = (1.0, -1.0);
}

/// Sign of a component, with zero mapped to zero
#[inline]
pub fn signum_or_zero(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Half extents of the ball sprite
#[inline]
pub fn ball_half_extents() -> Vec2 {
    Vec2::new(consts::BALL_HALF_WIDTH, consts::BALL_HALF_HEIGHT)
}

/// Full size of a paddle
#[inline]
pub fn paddle_size() -> Vec2 {
    Vec2::new(consts::PADDLE_WIDTH, consts::PADDLE_HEIGHT)
}
