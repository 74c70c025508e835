//! Drawing the game state
//!
//! Rendering only reads the simulation. Draw order is back to front:
//! paddle, blocks, ball.

use super::vertex::colors;
use super::Surface;
use crate::sim::{Ball, Block, BlockField, GameState, Paddle};

/// Block outline width in viewport units
pub const BLOCK_OUTLINE: f32 = 1.0;

pub trait Render {
    fn render(&self, surface: &mut dyn Surface);
}

impl Render for Block {
    fn render(&self, surface: &mut dyn Surface) {
        surface.outline_rect(self.body, colors::BLOCK, BLOCK_OUTLINE);
    }
}

impl Render for BlockField {
    fn render(&self, surface: &mut dyn Surface) {
        for block in self {
            block.render(surface);
        }
    }
}

impl Render for Paddle {
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.body, colors::PADDLE);
    }
}

impl Render for Ball {
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.body, colors::BALL);
    }
}

impl Render for GameState {
    fn render(&self, surface: &mut dyn Surface) {
        self.paddle.render(surface);
        self.blocks.render(surface);
        self.ball.render(surface);
    }
}
