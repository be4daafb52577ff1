//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed motion per tick, never scaled by wall-clock time
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{deflect, hits_front_face, impact_offset, out_of_bounds, touches_wall};
pub use state::{Arena, Ball, GameEvent, Paddle, Side, SimState};
pub use tick::{reset, step, track_opponent};
