//! Game state and core simulation types
//!
//! The paddle, the block field and the ball are owned by `GameState`; nothing
//! else holds a reference to them between ticks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{self, BlockBounce};
use super::rect::Rect;
use super::tick::TickInput;
use crate::settings::Settings;

/// Fixed logical play area, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A destructible block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub body: Rect,
    pub alive: bool,
}

impl Block {
    pub fn new(body: Rect) -> Self {
        Self { body, alive: true }
    }

    /// Mark dead. Removal happens on the next `BlockField::update`.
    pub fn kill(&mut self) {
        if self.alive {
            log::debug!(
                "Block at ({}, {}) destroyed",
                self.body.left(),
                self.body.top()
            );
        }
        self.alive = false;
    }
}

/// Ordered collection of blocks laid out on a grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockField {
    blocks: Vec<Block>,
}

impl BlockField {
    /// Lay out `cols x rows` blocks filling the top third of the viewport
    pub fn from_settings(settings: &Settings) -> Self {
        let (width, height) = settings.block_size();
        Self::grid(settings.cols, settings.rows, width, height)
    }

    /// Block (i, j) sits at (i * width, j * height); column-major order, no gaps
    pub fn grid(cols: u32, rows: u32, width: f32, height: f32) -> Self {
        let mut blocks = Vec::with_capacity((cols * rows) as usize);
        for i in 0..cols {
            for j in 0..rows {
                let body = Rect::new(i as f32 * width, j as f32 * height, width, height);
                blocks.push(Block::new(body));
            }
        }
        Self { blocks }
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Reap dead blocks, keeping survivor order. Returns how many were removed.
    pub fn update(&mut self) -> usize {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.alive);
        let reaped = before - self.blocks.len();
        if reaped > 0 {
            log::debug!("Reaped {} blocks, {} left", reaped, self.blocks.len());
            if self.blocks.is_empty() {
                log::info!("All blocks cleared");
            }
        }
        reaped
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks still in play (dead ones linger until the next reap)
    pub fn alive_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Block> {
        self.blocks.iter_mut()
    }

    pub fn as_slice(&self) -> &[Block] {
        &self.blocks
    }
}

impl<'a> IntoIterator for &'a BlockField {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Who moves the paddle, fixed when the paddle is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlStrategy {
    /// Greedy ball tracking
    #[default]
    Ai,
    /// Held arrow keys
    Keyboard,
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Rect,
    /// Horizontal step per tick
    pub speed: f32,
    pub control: ControlStrategy,
}

impl Paddle {
    /// Centered horizontally, three paddle-heights above the bottom edge
    pub fn from_settings(settings: &Settings) -> Self {
        let (w, h) = (settings.paddle_width, settings.paddle_height);
        let x = settings.viewport_width / 2.0 - w / 2.0;
        let y = settings.viewport_height - h * 3.0;
        Self {
            body: Rect::new(x, y, w, h),
            speed: settings.paddle_speed,
            control: settings.control,
        }
    }

    /// Move per the control strategy, then clamp into the viewport
    pub fn update(&mut self, ball: &Ball, input: &TickInput, viewport: Viewport) {
        let dx = match self.control {
            ControlStrategy::Ai => self.track(ball),
            ControlStrategy::Keyboard => self.steer(input),
        };
        self.body.translate(Vec2::new(dx, 0.0));
        self.check_bounds(viewport);
    }

    /// Step toward the ball's center. Overshoot is expected at this speed.
    fn track(&self, ball: &Ball) -> f32 {
        let own = self.body.center().x;
        let target = ball.body.center().x;
        if own > target {
            -self.speed
        } else if own < target {
            self.speed
        } else {
            0.0
        }
    }

    /// Right takes precedence when both keys are held
    fn steer(&self, input: &TickInput) -> f32 {
        if input.right {
            self.speed
        } else if input.left {
            -self.speed
        } else {
            0.0
        }
    }

    fn check_bounds(&mut self, viewport: Viewport) {
        if self.body.left() < 0.0 {
            self.body.set_left(0.0);
        } else if self.body.right() > viewport.width {
            self.body.set_right(viewport.width);
        }
    }
}

/// What the ball touched during one update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallHits {
    pub paddle: bool,
    pub blocks: u32,
    pub side_wall: bool,
    pub ceiling: bool,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Rect,
    pub vel: Vec2,
    /// Horizontal reflection rule for block hits
    pub bounce: BlockBounce,
}

impl Ball {
    /// Centered horizontally, two ball-sizes above `paddle_top`, heading up-left
    pub fn from_settings(settings: &Settings, paddle_top: f32) -> Self {
        let size = settings.ball_size;
        let speed = settings.ball_speed();
        Self {
            body: Rect::new(
                settings.viewport_width / 2.0 - size / 2.0,
                paddle_top - size * 2.0,
                size,
                size,
            ),
            vel: Vec2::splat(-speed),
            bounce: settings.block_bounce,
        }
    }

    /// Resolve collisions against paddle, blocks and walls, then move.
    ///
    /// Blocks hit here are only marked dead; they stay in `blocks` (and keep
    /// colliding) until the field is reaped on the next tick.
    pub fn update(
        &mut self,
        blocks: &mut BlockField,
        paddle: &Paddle,
        viewport: Viewport,
    ) -> BallHits {
        let mut hits = BallHits {
            paddle: self.check_paddle_collision(paddle),
            blocks: self.check_block_collisions(blocks),
            ..Default::default()
        };
        let walls = self.check_bounds(viewport);
        hits.side_wall = walls.side;
        hits.ceiling = walls.ceiling;
        self.integrate();
        hits
    }

    /// Rest on top of the paddle and head back up
    pub fn check_paddle_collision(&mut self, paddle: &Paddle) -> bool {
        if !collision::paddle_contact(&self.body, &paddle.body) {
            return false;
        }
        self.body.set_bottom(paddle.body.top() - 1.0);
        self.vel.y = -self.vel.y;
        true
    }

    /// Every overlapping block is processed, so an even number of hits in
    /// one tick cancels out on each axis.
    pub fn check_block_collisions(&mut self, blocks: &mut BlockField) -> u32 {
        let mut count = 0;
        for block in blocks.iter_mut() {
            if !self.body.intersects(&block.body) {
                continue;
            }
            if collision::flips_horizontal(&self.body, &block.body, self.bounce) {
                self.vel.x = -self.vel.x;
            }
            self.vel.y = -self.vel.y;
            block.kill();
            count += 1;
        }
        count
    }

    /// Side walls only reflect (the next move carries the ball back in).
    /// The ceiling also clamps.
    pub fn check_bounds(&mut self, viewport: Viewport) -> collision::WallContact {
        let contact = collision::wall_contact(&self.body, viewport);
        if contact.side {
            self.vel.x = -self.vel.x;
        }
        if contact.ceiling {
            self.body.set_top(0.0);
            self.vel.y = -self.vel.y;
        }
        contact
    }

    #[inline]
    pub fn integrate(&mut self) {
        self.body.translate(self.vel);
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub viewport: Viewport,
    pub paddle: Paddle,
    pub blocks: BlockField,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let paddle = Paddle::from_settings(settings);
        let ball = Ball::from_settings(settings, paddle.body.top());
        let blocks = BlockField::from_settings(settings);
        log::info!(
            "New game: {}x{} viewport, {} blocks, {:?} paddle",
            settings.viewport_width,
            settings.viewport_height,
            blocks.len(),
            paddle.control
        );
        Self::from_parts(settings.viewport(), paddle, blocks, ball)
    }

    /// Assemble a state from explicit bodies (scenarios, tests)
    pub fn from_parts(viewport: Viewport, paddle: Paddle, blocks: BlockField, ball: Ball) -> Self {
        Self {
            viewport,
            paddle,
            blocks,
            ball,
            time_ticks: 0,
        }
    }

    /// Advance one tick
    pub fn update(&mut self, input: &TickInput) -> BallHits {
        super::tick::tick(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VIEW: Viewport = Viewport::new(640.0, 480.0);

    fn paddle_at(x: f32, control: ControlStrategy) -> Paddle {
        Paddle {
            body: Rect::new(x, 435.0, 40.0, 15.0),
            speed: 15.0,
            control,
        }
    }

    fn ball_at(x: f32, y: f32, vel: Vec2) -> Ball {
        Ball {
            body: Rect::new(x, y, 5.0, 5.0),
            vel,
            bounce: BlockBounce::Legacy,
        }
    }

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(&Settings::default());
        assert_eq!(state.paddle.body, Rect::new(300.0, 435.0, 40.0, 15.0));
        assert_eq!(state.ball.body, Rect::new(317.5, 425.0, 5.0, 5.0));
        assert_eq!(state.ball.vel, Vec2::new(-13.0, -13.0));
        assert_eq!(state.blocks.len(), 10);
        assert_eq!(state.paddle.control, ControlStrategy::Ai);
    }

    #[test]
    fn test_grid_positions_column_major() {
        let field = BlockField::grid(3, 2, 10.0, 5.0);
        let origins: Vec<_> = field.iter().map(|b| (b.body.left(), b.body.top())).collect();
        assert_eq!(
            origins,
            vec![(0.0, 0.0), (0.0, 5.0), (10.0, 0.0), (10.0, 5.0), (20.0, 0.0), (20.0, 5.0)]
        );
        assert!(field.iter().all(|b| b.alive && b.body.size == Vec2::new(10.0, 5.0)));
    }

    #[test]
    fn test_reap_without_dead_blocks_is_noop() {
        let mut field = BlockField::grid(10, 1, 64.0, 160.0);
        let before = field.clone();
        assert_eq!(field.update(), 0);
        assert_eq!(field, before);
        assert_eq!(field.update(), 0);
        assert_eq!(field, before);
    }

    #[test]
    fn test_reap_keeps_survivor_order() {
        let mut field = BlockField::grid(5, 1, 10.0, 10.0);
        // Adjacent dead blocks must both go
        field.iter_mut().nth(1).unwrap().kill();
        field.iter_mut().nth(2).unwrap().kill();
        field.iter_mut().nth(4).unwrap().kill();
        assert_eq!(field.alive_count(), 2);
        assert_eq!(field.len(), 5);

        assert_eq!(field.update(), 3);
        let lefts: Vec<_> = field.iter().map(|b| b.body.left()).collect();
        assert_eq!(lefts, vec![0.0, 30.0]);
    }

    #[test]
    fn test_ai_tracks_ball() {
        let ball = ball_at(100.0, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(300.0, ControlStrategy::Ai);
        paddle.update(&ball, &TickInput::default(), VIEW);
        assert_eq!(paddle.body.left(), 285.0);

        let ball = ball_at(500.0, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(300.0, ControlStrategy::Ai);
        paddle.update(&ball, &TickInput::default(), VIEW);
        assert_eq!(paddle.body.left(), 315.0);
    }

    #[test]
    fn test_ai_holds_when_centered() {
        // Ball center 320 == paddle center 320
        let ball = ball_at(317.5, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(300.0, ControlStrategy::Ai);
        paddle.update(&ball, &TickInput::default(), VIEW);
        assert_eq!(paddle.body.left(), 300.0);
    }

    #[test]
    fn test_ai_overshoots_and_oscillates() {
        // Ball center 325: paddle center 320 -> 335 -> 320 -> 335
        let ball = ball_at(322.5, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut lefts = Vec::new();
        for _ in 0..4 {
            paddle.update(&ball, &TickInput::default(), VIEW);
            lefts.push(paddle.body.left());
        }
        assert_eq!(lefts, vec![315.0, 300.0, 315.0, 300.0]);
    }

    #[test]
    fn test_keyboard_ignores_ball() {
        let ball = ball_at(0.0, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(300.0, ControlStrategy::Keyboard);

        paddle.update(&ball, &TickInput::default(), VIEW);
        assert_eq!(paddle.body.left(), 300.0);

        let right = TickInput {
            right: true,
            ..Default::default()
        };
        paddle.update(&ball, &right, VIEW);
        assert_eq!(paddle.body.left(), 315.0);

        let left = TickInput {
            left: true,
            ..Default::default()
        };
        paddle.update(&ball, &left, VIEW);
        assert_eq!(paddle.body.left(), 300.0);

        let both = TickInput {
            left: true,
            right: true,
        };
        paddle.update(&ball, &both, VIEW);
        assert_eq!(paddle.body.left(), 315.0);
    }

    #[test]
    fn test_paddle_snaps_to_edges() {
        let ball = ball_at(0.0, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(5.0, ControlStrategy::Ai);
        paddle.update(&ball, &TickInput::default(), VIEW);
        assert_eq!(paddle.body.left(), 0.0);

        let ball = ball_at(639.0, 200.0, Vec2::ZERO);
        let mut paddle = paddle_at(590.0, ControlStrategy::Ai);
        paddle.update(&ball, &TickInput::default(), VIEW);
        assert_eq!(paddle.body.right(), 640.0);
        assert_eq!(paddle.body.width(), 40.0);
    }

    #[test]
    fn test_ball_bounces_off_paddle() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut ball = ball_at(310.0, 433.0, Vec2::new(4.0, 7.0));

        assert!(ball.check_paddle_collision(&paddle));
        assert_eq!(ball.vel, Vec2::new(4.0, -7.0));
        assert_eq!(ball.body.bottom(), 434.0);
    }

    #[test]
    fn test_full_update_after_paddle_bounce() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::default();
        let mut ball = ball_at(310.0, 433.0, Vec2::new(4.0, 7.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert!(hits.paddle);
        assert_eq!(ball.vel, Vec2::new(4.0, -7.0));
        // Snapped to 429, then moved by the new velocity
        assert_eq!(ball.body.pos, Vec2::new(314.0, 422.0));
    }

    #[test]
    fn test_ball_reflects_off_left_wall() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::default();
        let mut ball = ball_at(-2.0, 300.0, Vec2::new(-13.0, 13.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert!(hits.side_wall);
        assert_eq!(ball.vel, Vec2::new(13.0, 13.0));
        // No clamp: the reflected velocity carries it back in
        assert_eq!(ball.body.left(), 11.0);
    }

    #[test]
    fn test_ball_reflects_and_clamps_at_ceiling() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::default();
        let mut ball = ball_at(300.0, -4.0, Vec2::new(-13.0, -13.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert!(hits.ceiling);
        assert_eq!(ball.vel, Vec2::new(-13.0, 13.0));
        assert_eq!(ball.body.pos, Vec2::new(287.0, 13.0));
    }

    #[test]
    fn test_ball_falls_through_floor() {
        let paddle = paddle_at(0.0, ControlStrategy::Ai);
        let mut blocks = BlockField::default();
        let mut ball = ball_at(300.0, 478.0, Vec2::new(0.0, 13.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert_eq!(hits, BallHits::default());
        assert_eq!(ball.body.top(), 491.0);
        assert_eq!(ball.vel, Vec2::new(0.0, 13.0));
    }

    #[test]
    fn test_block_hit_marks_dead_but_keeps_it() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::grid(10, 1, 64.0, 160.0);
        let mut ball = ball_at(90.0, 158.0, Vec2::new(-13.0, -13.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert_eq!(hits.blocks, 1);
        // Legacy rule flips both axes
        assert_eq!(ball.vel, Vec2::new(13.0, 13.0));
        assert_eq!(blocks.len(), 10);
        assert_eq!(blocks.alive_count(), 9);
        assert!(!blocks.as_slice()[1].alive);
    }

    #[test]
    fn test_shallow_axis_only_flips_vertical_on_bottom_hit() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::grid(10, 1, 64.0, 160.0);
        let mut ball = ball_at(90.0, 158.0, Vec2::new(-13.0, -13.0));
        ball.bounce = BlockBounce::ShallowAxis;

        ball.update(&mut blocks, &paddle, VIEW);
        assert_eq!(ball.vel, Vec2::new(-13.0, 13.0));
    }

    #[test]
    fn test_two_block_hits_cancel_out() {
        // Straddling the seam between blocks 0 and 1
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::grid(10, 1, 64.0, 160.0);
        let mut ball = ball_at(62.0, 157.0, Vec2::new(-13.0, -13.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert_eq!(hits.blocks, 2);
        assert_eq!(ball.vel, Vec2::new(-13.0, -13.0));
        assert_eq!(blocks.alive_count(), 8);
    }

    #[test]
    fn test_dead_block_still_collides_until_reaped() {
        let paddle = paddle_at(300.0, ControlStrategy::Ai);
        let mut blocks = BlockField::grid(1, 1, 64.0, 160.0);
        blocks.iter_mut().next().unwrap().kill();
        let mut ball = ball_at(30.0, 150.0, Vec2::new(0.0, -5.0));

        let hits = ball.update(&mut blocks, &paddle, VIEW);
        assert_eq!(hits.blocks, 1);
        assert_eq!(ball.vel.y, 5.0);
    }

    proptest! {
        #[test]
        fn paddle_always_inside_viewport(
            start in -200.0f32..840.0,
            ball_x in -100.0f32..740.0,
            left in any::<bool>(),
            right in any::<bool>(),
            keyboard in any::<bool>(),
        ) {
            let control = if keyboard { ControlStrategy::Keyboard } else { ControlStrategy::Ai };
            let mut paddle = paddle_at(start, control);
            let ball = ball_at(ball_x, 200.0, Vec2::ZERO);
            paddle.update(&ball, &TickInput { left, right }, VIEW);
            prop_assert!(paddle.body.left() >= 0.0);
            prop_assert!(paddle.body.right() <= VIEW.width);
        }
    }
}
