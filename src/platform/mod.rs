//! Platform abstraction layer
//!
//! Handles the native side of the game loop:
//! - Keyboard state (held arrows, quit)
//! - Frame pacing at the configured rate

pub mod input;
pub mod time;

pub use input::KeyState;
pub use time::FrameClock;
