//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick (no elapsed-time scaling)
//! - No randomness
//! - Stable block order
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BlockBounce, WallContact};
pub use rect::Rect;
pub use state::{
    Ball, BallHits, Block, BlockField, ControlStrategy, GameState, Paddle, Viewport,
};
pub use tick::{TickInput, tick};
