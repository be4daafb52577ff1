//! Collision detection and response for axis-aligned boxes
//!
//! Everything here is a pure function of the ball, a paddle and the arena.
//! Only the paddle edge facing the middle of the arena (the front face)
//! can return the ball; a ball that has already slipped past stays lost.

use super::state::{Arena, Ball, Paddle, Side};
use crate::clamp_span;
use crate::consts::{DEFLECT_SPEED, PADDLE_SPEEDUP};

/// Whether the ball touches or overshoots the top or bottom wall
#[inline]
pub fn touches_wall(ball: &Ball, arena: &Arena) -> bool {
    ball.top() <= 0.0 || ball.bottom() >= arena.height
}

/// Bounce off the top/bottom wall: flip vertical velocity and clamp Y back inside
pub fn bounce_off_wall(ball: &mut Ball, arena: &Arena) {
    ball.vel.y = -ball.vel.y;
    ball.pos.y = clamp_span(ball.pos.y, arena.height - ball.size);
}

/// Whether the vertical spans of ball and paddle overlap (edges inclusive)
#[inline]
pub fn overlaps_vertically(ball: &Ball, paddle: &Paddle) -> bool {
    ball.bottom() >= paddle.top() && ball.top() <= paddle.bottom()
}

/// Front-face hit test
///
/// Player (left): the ball's left edge lies within the paddle's horizontal span.
/// Opponent (right): the ball's right edge has reached the paddle's left edge
/// and is no more than one ball size beyond the paddle's right edge.
pub fn hits_front_face(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let in_face = match side {
        Side::Player => ball.left() <= paddle.right() && ball.left() >= paddle.left(),
        Side::Opponent => {
            ball.right() >= paddle.left() && ball.right() <= paddle.right() + ball.size
        }
    };
    in_face && overlaps_vertically(ball, paddle)
}

/// Impact offset of the ball center from the paddle center, in half-heights
///
/// Within [-1, 1] when the ball center is on the paddle, beyond that for
/// edge-grazing hits.
#[inline]
pub fn impact_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.center().y - paddle.center_y()) / (paddle.height / 2.0)
}

/// Return the ball off a paddle
///
/// Reverses and speeds up horizontal motion, replaces vertical motion based on
/// where it struck, then snaps the ball flush against the front face.
pub fn deflect(ball: &mut Ball, paddle: &Paddle, side: Side) {
    ball.vel.x *= -PADDLE_SPEEDUP;
    ball.vel.y = impact_offset(ball, paddle) * DEFLECT_SPEED;
    ball.pos.x = match side {
        Side::Player => paddle.right(),
        Side::Opponent => paddle.left() - ball.size,
    };
}

/// Side that conceded if the ball has left the arena horizontally
pub fn out_of_bounds(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.left() < 0.0 {
        Some(Side::Player)
    } else if ball.left() > arena.width {
        Some(Side::Opponent)
    } else {
        None
    }
}
