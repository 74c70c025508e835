//! Brickfall - a tiny fixed-timestep Breakout
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, tick order)
//! - `renderer`: Draw-command surface and the wgpu pipeline that presents it
//! - `platform`: Keyboard state and frame pacing for the native loop
//! - `settings`: Immutable game configuration loaded at startup

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Default game configuration constants
pub mod consts {
    /// Logical viewport size
    pub const VIEWPORT_WIDTH: f32 = 640.0;
    pub const VIEWPORT_HEIGHT: f32 = 480.0;

    /// Target ticks (and frames) per second
    pub const FPS: u32 = 60;

    /// Block grid dimensions
    pub const BLOCK_COLS: u32 = 10;
    pub const BLOCK_ROWS: u32 = 1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 15.0;

    /// Ball defaults - the ball is a square of this side
    pub const BALL_SIZE: f32 = 5.0;
    /// Ball speed is the paddle speed minus this offset
    pub const BALL_SPEED_OFFSET: f32 = 2.0;

    /// Window caption
    pub const WINDOW_TITLE: &str = "BreakOut!";
}
