//! Collision tests and reflection rules
//!
//! Everything here is a pure function over rectangles. The ball applies the
//! results in a fixed order (paddle, blocks, walls) in `Ball::update`.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::Viewport;

/// How a block hit decides whether to reflect horizontal velocity.
///
/// Vertical velocity is always inverted on a block hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockBounce {
    /// Flip when `ball.left < block.right || ball.right > block.left`.
    /// Holds for any overlapping pair, so every hit flips both axes.
    #[default]
    Legacy,
    /// Flip only when the horizontal penetration is strictly shallower than
    /// the vertical one (a side hit).
    ShallowAxis,
}

/// Walls touched by the ball this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    /// Left or right edge crossed
    pub side: bool,
    /// Top edge crossed
    pub ceiling: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.ceiling
    }
}

/// Ball overlaps the paddle
#[inline]
pub fn paddle_contact(ball: &Rect, paddle: &Rect) -> bool {
    ball.intersects(paddle)
}

/// Whether an intersecting block hit reflects horizontal velocity
pub fn flips_horizontal(ball: &Rect, block: &Rect, rule: BlockBounce) -> bool {
    match rule {
        BlockBounce::Legacy => ball.left() < block.right() || ball.right() > block.left(),
        BlockBounce::ShallowAxis => {
            let depth = ball.overlap(block);
            depth.x < depth.y
        }
    }
}

/// Which viewport edges the ball is past. There is no floor.
pub fn wall_contact(ball: &Rect, viewport: Viewport) -> WallContact {
    WallContact {
        side: ball.left() < 0.0 || ball.right() > viewport.width,
        ceiling: ball.top() < 0.0,
    }
}
