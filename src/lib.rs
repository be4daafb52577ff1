//! Paddle Pong - a classic two-paddle arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball kinematics, collisions, opponent)
//! - `renderer`: Read-only drawing of the simulation onto a 2D surface
//! - `input`: Pointer-driven player paddle target
//! - `settings`: Arena size, colour theme and seed
//! - `game`: Frame driver tying input, simulation and rendering together

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use input::PointerTarget;
pub use settings::{Palette, Settings, Theme};

/// Game configuration constants
///
/// Motion is expressed in arena units per tick, not per second.
pub mod consts {
    /// Default arena dimensions (canvas pixels)
    pub const DEFAULT_ARENA_WIDTH: f32 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 30.0;

    /// Ball diameter
    pub const BALL_SIZE: f32 = 16.0;
    /// Horizontal serve speed (sign is random)
    pub const SERVE_SPEED_X: f32 = 5.0;
    /// Vertical serve speed is uniform in [-SERVE_SPEED_Y_MAX, SERVE_SPEED_Y_MAX]
    pub const SERVE_SPEED_Y_MAX: f32 = 3.0;

    /// Horizontal speed multiplier applied on every paddle hit (uncapped)
    pub const PADDLE_SPEEDUP: f32 = 1.1;
    /// Vertical exit speed for a hit at the very tip of a paddle
    pub const DEFLECT_SPEED: f32 = 5.0;

    /// Opponent holds still while its center is within this distance of the ball
    pub const OPPONENT_DEADBAND: f32 = 10.0;
    /// Opponent movement per tick
    pub const OPPONENT_STEP: f32 = 4.0;

    /// Center net: NET_WIDTH x NET_SEGMENT dashes every NET_SPACING from NET_OFFSET
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_SEGMENT: f32 = 25.0;
    pub const NET_SPACING: f32 = 40.0;
    pub const NET_OFFSET: f32 = 20.0;
}

/// Clamp `value` into `[0, max]`, treating a negative `max` as 0
#[inline]
pub fn clamp_span(value: f32, max: f32) -> f32 {
    value.max(0.0).min(max.max(0.0))
}
