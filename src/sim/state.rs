//! Game state and core simulation types
//!
//! Pure data: everything that advances lives in `tick`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp_span;
use crate::consts::*;

/// Which side of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Left, pointer controlled
    Player,
    /// Right, scripted
    Opponent,
}

/// Something that happened during the last tick (observational only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball was returned by a paddle
    PaddleHit(Side),
    /// Ball left the arena past this side's paddle and was re-served
    BallOut(Side),
}

/// The fixed play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(DEFAULT_ARENA_WIDTH, DEFAULT_ARENA_HEIGHT)
    }
}

impl Arena {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Arena center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether two paddles and a ball fit side by side
    pub fn is_playable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 2.0 * (PADDLE_MARGIN + PADDLE_WIDTH) + BALL_SIZE
            && self.height >= PADDLE_HEIGHT.max(BALL_SIZE)
    }
}

/// A paddle. X is fixed per side, only Y moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge, kept within [0, arena.height - height]
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    /// A paddle for `side`, vertically centred in `arena`
    pub fn new(side: Side, arena: &Arena) -> Self {
        let x = match side {
            Side::Player => PADDLE_MARGIN,
            Side::Opponent => arena.width - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        Self {
            x,
            y: arena.height / 2.0 - PADDLE_HEIGHT / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Largest valid Y inside `arena`
    #[inline]
    pub fn max_y(&self, arena: &Arena) -> f32 {
        arena.height - self.height
    }

    /// Clamp Y into the arena
    pub fn clamp_to(&mut self, arena: &Arena) {
        self.y = clamp_span(self.y, self.max_y(arena));
    }
}

/// The ball, described by the top-left of its bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Diameter
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: BALL_SIZE,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Place the ball in the middle of `arena` and pick a new launch vector
    pub fn serve<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        self.pos = arena.center() - Vec2::splat(self.size / 2.0);
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(
            SERVE_SPEED_X * dir,
            rng.random_range(-SERVE_SPEED_Y_MAX..=SERVE_SPEED_Y_MAX),
        );
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Fixed for the session
    pub arena: Arena,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Last pointer-derived player Y, already clamped
    pub player_target_y: f32,
    /// Ticks simulated so far
    pub ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl SimState {
    /// Create a fresh state: paddles centred, ball served from the middle
    pub fn new<R: Rng + ?Sized>(arena: Arena, rng: &mut R) -> Self {
        let player = Paddle::new(Side::Player, &arena);
        let opponent = Paddle::new(Side::Opponent, &arena);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(&arena, rng);

        Self {
            arena,
            player,
            opponent,
            ball,
            player_target_y: player.y,
            ticks: 0,
            events: Vec::new(),
        }
    }

    /// Record a new player target, clamped to the valid paddle range
    pub fn set_player_target(&mut self, y: f32) {
        if y.is_finite() {
            self.player_target_y = clamp_span(y, self.player.max_y(&self.arena));
        }
    }

    /// Paddle for `side`
    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }
}
