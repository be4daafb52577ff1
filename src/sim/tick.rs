//! Fixed tick simulation
//!
//! One call to [`step`] is one rendered frame's worth of motion. Order matters:
//! later checks rely on the clamping done by earlier ones.

use rand::Rng;

use super::collision::{bounce_off_wall, deflect, hits_front_face, out_of_bounds, touches_wall};
use super::state::{GameEvent, Side, SimState};
use crate::consts::{OPPONENT_DEADBAND, OPPONENT_STEP};

/// Advance the game state by one tick
pub fn step<R: Rng + ?Sized>(state: &mut SimState, rng: &mut R) {
    state.events.clear();
    state.ticks += 1;

    // Player paddle follows the pointer target and nothing else
    state.player.y = state.player_target_y;
    state.player.clamp_to(&state.arena);

    // Ball translation
    state.ball.pos += state.ball.vel;

    // Top and bottom walls
    if touches_wall(&state.ball, &state.arena) {
        bounce_off_wall(&mut state.ball, &state.arena);
        state.events.push(GameEvent::WallBounce);
    }

    // Paddles
    for side in [Side::Player, Side::Opponent] {
        let paddle = *state.paddle(side);
        if hits_front_face(&state.ball, &paddle, side) {
            deflect(&mut state.ball, &paddle, side);
            state.events.push(GameEvent::PaddleHit(side));
            log::trace!(
                "{:?} hit at tick {}, ball vel = {:?}",
                side,
                state.ticks,
                state.ball.vel
            );
        }
    }

    // Out of bounds overrides any bounce computed above
    if let Some(side) = out_of_bounds(&state.ball, &state.arena) {
        reset(state, rng);
        state.events.push(GameEvent::BallOut(side));
        log::info!("{:?} conceded at tick {}", side, state.ticks);
    }

    track_opponent(state);

    debug_assert!(
        state.ball.pos.is_finite() && state.ball.vel.is_finite(),
        "non-finite ball after tick {}: {:?}",
        state.ticks,
        state.ball
    );
}

/// Re-serve the ball from the center. Paddles and player target are untouched.
pub fn reset<R: Rng + ?Sized>(state: &mut SimState, rng: &mut R) {
    state.ball.serve(&state.arena, rng);
}

/// Move the opponent a fixed step toward the ball, with a dead zone
pub fn track_opponent(state: &mut SimState) {
    let paddle_center = state.opponent.center_y();
    let ball_center = state.ball.center().y;

    if paddle_center < ball_center - OPPONENT_DEADBAND {
        state.opponent.y += OPPONENT_STEP;
    } else if paddle_center > ball_center + OPPONENT_DEADBAND {
        state.opponent.y -= OPPONENT_STEP;
    }
    state.opponent.clamp_to(&state.arena);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Arena;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const EPS: f32 = 1e-4;

    fn new_state(seed: u64) -> (SimState, Pcg32) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = SimState::new(Arena::new(800.0, 600.0), &mut rng);
        (state, rng)
    }

    fn assert_served(state: &SimState) {
        let arena = state.arena;
        assert_eq!(
            state.ball.pos,
            Vec2::new(
                arena.width / 2.0 - BALL_SIZE / 2.0,
                arena.height / 2.0 - BALL_SIZE / 2.0
            )
        );
        assert_eq!(state.ball.vel.x.abs(), SERVE_SPEED_X);
        assert!(state.ball.vel.y.abs() <= SERVE_SPEED_Y_MAX);
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let (mut state, mut rng) = new_state(1);
        state.ball.pos = Vec2::new(400.0, 300.0);
        state.ball.vel = Vec2::new(5.0, -2.0);

        step(&mut state, &mut rng);
        assert_eq!(state.ball.pos, Vec2::new(405.0, 298.0));
        assert!(state.events.is_empty());
        assert_eq!(state.ticks, 1);
    }

    #[test]
    fn test_exit_left_resets() {
        let (mut state, mut rng) = new_state(2);
        state.ball.pos = Vec2::new(0.0, state.arena.height / 2.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        step(&mut state, &mut rng);
        assert_served(&state);
        assert_eq!(state.events, vec![GameEvent::BallOut(Side::Player)]);
    }

    #[test]
    fn test_exit_right_resets() {
        let (mut state, mut rng) = new_state(3);
        state.ball.pos = Vec2::new(798.0, 100.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        step(&mut state, &mut rng);
        assert_served(&state);
        assert_eq!(state.events, vec![GameEvent::BallOut(Side::Opponent)]);
    }

    #[test]
    fn test_reset_leaves_paddles_alone() {
        let (mut state, mut rng) = new_state(4);
        state.set_player_target(12.0);
        state.player.y = 12.0;
        state.opponent.y = 400.0;
        state.ball.pos = Vec2::new(-100.0, 0.0);

        reset(&mut state, &mut rng);
        assert_served(&state);
        assert_eq!(state.player.y, 12.0);
        assert_eq!(state.player_target_y, 12.0);
        assert_eq!(state.opponent.y, 400.0);
    }

    #[test]
    fn test_player_paddle_return_from_center() {
        let (mut state, mut rng) = new_state(5);
        let paddle = state.player;
        state.ball.pos = Vec2::new(paddle.right() + 3.0, paddle.center_y() - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        step(&mut state, &mut rng);
        assert!((state.ball.vel.x - 5.5).abs() < EPS);
        assert!(state.ball.vel.y.abs() < EPS);
        assert_eq!(state.ball.left(), paddle.right());
        assert_eq!(state.events, vec![GameEvent::PaddleHit(Side::Player)]);
    }

    #[test]
    fn test_opponent_paddle_return_mirrored() {
        let (mut state, mut rng) = new_state(6);
        let paddle = state.opponent;
        // Ball center 20 units below the paddle center
        state.ball.pos = Vec2::new(
            paddle.left() - BALL_SIZE - 3.0,
            paddle.center_y() + 20.0 - BALL_SIZE / 2.0,
        );
        state.ball.vel = Vec2::new(5.0, 0.0);

        step(&mut state, &mut rng);
        assert!((state.ball.vel.x + 5.5).abs() < EPS);
        assert!((state.ball.vel.y - 2.5).abs() < EPS);
        assert_eq!(state.ball.right(), paddle.left());
    }

    #[test]
    fn test_ball_behind_player_paddle_not_returned() {
        let (mut state, mut rng) = new_state(7);
        let paddle = state.player;
        state.ball.pos = Vec2::new(paddle.left() - 2.0, paddle.center_y() - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        step(&mut state, &mut rng);
        assert_eq!(state.ball.vel.x, -5.0);
        assert_eq!(state.ball.pos.x, paddle.left() - 7.0);
    }

    #[test]
    fn test_top_wall_bounce() {
        let (mut state, mut rng) = new_state(8);
        state.ball.pos = Vec2::new(400.0, 0.0);
        state.ball.vel = Vec2::new(0.0, -3.0);

        step(&mut state, &mut rng);
        assert_eq!(state.ball.vel.y, 3.0);
        assert_eq!(state.ball.pos.y, 0.0);
        assert_eq!(state.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_opponent_moves_down_toward_ball() {
        let (mut state, mut rng) = new_state(9);
        state.opponent.y = 200.0;
        // Opponent center 240; ball center 260 after moving
        state.ball.pos = Vec2::new(400.0, 260.0 - BALL_SIZE / 2.0);
        state.ball.vel = Vec2::ZERO;

        step(&mut state, &mut rng);
        assert_eq!(state.opponent.y, 204.0);
    }

    #[test]
    fn test_opponent_moves_up_and_holds_in_deadband() {
        let (mut state, mut rng) = new_state(10);
        state.opponent.y = 300.0;
        state.ball.pos = Vec2::new(400.0, 100.0);
        state.ball.vel = Vec2::ZERO;

        step(&mut state, &mut rng);
        assert_eq!(state.opponent.y, 296.0);

        // Center within 10 of the ball center
        state.opponent.y = 100.0 + BALL_SIZE / 2.0 - PADDLE_HEIGHT / 2.0 + 10.0;
        let before = state.opponent.y;
        step(&mut state, &mut rng);
        assert_eq!(state.opponent.y, before);
    }

    #[test]
    fn test_opponent_clamped_at_bottom() {
        let (mut state, mut rng) = new_state(11);
        state.opponent.y = 518.0;
        state.ball.pos = Vec2::new(400.0, 584.0);
        state.ball.vel = Vec2::ZERO;

        step(&mut state, &mut rng);
        assert_eq!(state.opponent.y, 520.0);
    }

    #[test]
    fn test_player_paddle_follows_target_only() {
        let (mut state, mut rng) = new_state(12);
        state.set_player_target(100.0);
        state.ball.pos = Vec2::new(400.0, 100.0);
        state.ball.vel = Vec2::ZERO;

        for _ in 0..5 {
            step(&mut state, &mut rng);
            assert_eq!(state.player.y, 100.0);
        }
    }

    #[test]
    fn test_speedup_compounds_per_hit() {
        let (mut state, mut rng) = new_state(13);
        state.ball.vel = Vec2::new(-SERVE_SPEED_X, 0.0);

        for n in 1..=12 {
            let side = if state.ball.vel.x < 0.0 {
                Side::Player
            } else {
                Side::Opponent
            };
            let paddle = *state.paddle(side);
            let y = paddle.center_y() - BALL_SIZE / 2.0;
            state.ball.vel.y = 0.0;
            // Put the leading edge on the front face after this tick's move
            state.ball.pos = match side {
                Side::Player => Vec2::new(paddle.right() - state.ball.vel.x, y),
                Side::Opponent => Vec2::new(paddle.left() - BALL_SIZE - state.ball.vel.x, y),
            };

            step(&mut state, &mut rng);
            assert_eq!(state.events, vec![GameEvent::PaddleHit(side)]);
            let expected = SERVE_SPEED_X * PADDLE_SPEEDUP.powi(n);
            assert!(
                (state.ball.vel.x.abs() - expected).abs() < expected * 1e-4,
                "hit {n}: {} vs {expected}",
                state.ball.vel.x
            );
        }
    }

    #[test]
    fn test_determinism() {
        let (mut a, mut rng_a) = new_state(99999);
        let (mut b, mut rng_b) = new_state(99999);

        for i in 0..2000 {
            let target = (i as f32 * 0.37).sin() * 300.0 + 260.0;
            a.set_player_target(target);
            b.set_player_target(target);
            step(&mut a, &mut rng_a);
            step(&mut b, &mut rng_b);
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.opponent, b.opponent);
        assert_eq!(a.player, b.player);
    }

    proptest! {
        #[test]
        fn prop_ball_inside_vertical_bounds(
            seed in any::<u64>(),
            targets in proptest::collection::vec(-100.0f32..700.0, 1..400),
        ) {
            let (mut state, mut rng) = new_state(seed);
            for target in targets {
                state.set_player_target(target);
                step(&mut state, &mut rng);
                prop_assert!(state.ball.top() >= 0.0);
                prop_assert!(state.ball.top() <= state.arena.height - BALL_SIZE);
                prop_assert!(
                    state.opponent.y >= 0.0
                        && state.opponent.y <= state.arena.height - PADDLE_HEIGHT
                );
                prop_assert!(
                    state.player.y >= 0.0 && state.player.y <= state.arena.height - PADDLE_HEIGHT
                );
            }
        }

        #[test]
        fn prop_wall_resolution_clamps(
            x in 100.0f32..700.0,
            y in -20.0f32..620.0,
            vy in -15.0f32..15.0,
        ) {
            let (mut state, mut rng) = new_state(1);
            state.ball.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(0.0, vy);
            step(&mut state, &mut rng);
            prop_assert!(state.ball.top() >= 0.0);
            prop_assert!(state.ball.top() <= state.arena.height - BALL_SIZE);
        }

        #[test]
        fn prop_reset_serves_from_center(seed in any::<u64>()) {
            let (mut state, mut rng) = new_state(seed);
            state.ball.pos = Vec2::new(-50.0, 10.0);
            reset(&mut state, &mut rng);
            prop_assert_eq!(state.ball.pos, Vec2::new(392.0, 292.0));
            prop_assert_eq!(state.ball.vel.x.abs(), SERVE_SPEED_X);
            prop_assert!(state.ball.vel.y >= -SERVE_SPEED_Y_MAX);
            prop_assert!(state.ball.vel.y <= SERVE_SPEED_Y_MAX);
        }
    }
}
