//! 2D rendering module
//!
//! The renderer only reads the simulation. Anything that can fill rectangles
//! and circles is a [`Surface`]: the browser canvas on the web, a recorded
//! [`DrawList`] for headless runs and tests.

pub mod draw_list;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawCommand, DrawList};
#[cfg(target_arch = "wasm32")]
pub use canvas::Canvas2d;

use crate::consts::{NET_OFFSET, NET_SEGMENT, NET_SPACING, NET_WIDTH};
use crate::settings::Palette;
use crate::sim::SimState;

/// A drawing target
pub trait Surface {
    /// Fill an axis-aligned rectangle given by its top-left corner
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);

    /// Fill a circle given by its center
    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: &str);
}

/// Draw one frame, back to front
pub fn render<S: Surface + ?Sized>(state: &SimState, palette: &Palette, surface: &mut S) {
    let arena = &state.arena;

    // Background
    surface.fill_rect(0.0, 0.0, arena.width, arena.height, palette.background);

    // Net
    let net_x = arena.width / 2.0 - NET_WIDTH / 2.0;
    let mut y = NET_OFFSET;
    while y < arena.height {
        surface.fill_rect(net_x, y, NET_WIDTH, NET_SEGMENT, palette.net);
        y += NET_SPACING;
    }

    // Player paddle sits wherever the pointer last put it
    let player = &state.player;
    surface.fill_rect(
        player.x,
        state.player_target_y,
        player.width,
        player.height,
        palette.paddle,
    );

    let opponent = &state.opponent;
    surface.fill_rect(
        opponent.x,
        opponent.y,
        opponent.width,
        opponent.height,
        palette.paddle,
    );

    let ball = &state.ball;
    let center = ball.center();
    surface.fill_circle(center.x, center.y, ball.radius(), palette.ball);
}
