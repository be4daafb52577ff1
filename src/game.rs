//! Frame driver
//!
//! One [`Game::frame`] per display refresh: take the latest pointer target,
//! step the simulation once, draw the result.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::PADDLE_HEIGHT;
use crate::input::PointerTarget;
use crate::renderer::{Surface, render};
use crate::settings::{Palette, Settings};
use crate::sim::{Arena, GameEvent, SimState, step};

/// Game instance holding all state
pub struct Game {
    state: SimState,
    rng: Pcg32,
    pointer: PointerTarget,
    palette: Palette,
    seed: u64,
}

impl Game {
    pub fn new(arena: Arena, palette: Palette, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let state = SimState::new(arena, &mut rng);
        let pointer = PointerTarget::new(&arena, PADDLE_HEIGHT);
        log::info!(
            "Game initialized with seed {} on a {}x{} arena",
            seed,
            arena.width,
            arena.height
        );
        Self {
            state,
            rng,
            pointer,
            palette,
            seed,
        }
    }

    /// Build from settings, using `fallback_seed` when none is configured
    pub fn from_settings(settings: &Settings, fallback_seed: u64) -> Self {
        Self::new(
            settings.arena(),
            settings.palette(),
            settings.seed.unwrap_or(fallback_seed),
        )
    }

    /// Handle for the pointer listener
    pub fn pointer(&self) -> PointerTarget {
        self.pointer.clone()
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance one tick without drawing
    pub fn update(&mut self) -> &[GameEvent] {
        self.state.set_player_target(self.pointer.latest());
        step(&mut self.state, &mut self.rng);
        for event in &self.state.events {
            log::debug!("tick {}: {:?}", self.state.ticks, event);
        }
        &self.state.events
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        render(&self.state, &self.palette, surface);
    }

    /// Step then render, once per display frame
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.update();
        self.draw(surface);
    }
}
