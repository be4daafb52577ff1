//! Pointer input for the player paddle
//!
//! The pointer listener and the frame loop share one clamped scalar: the
//! paddle's target Y. Writes are last-write-wins and the frame reads one
//! coherent value per tick, so a relaxed atomic is all the synchronization
//! needed.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::clamp_span;
use crate::sim::Arena;

/// Shared handle to the player paddle's target Y
#[derive(Debug, Clone)]
pub struct PointerTarget {
    /// f32 bits of the clamped target
    bits: Arc<AtomicU32>,
    paddle_height: f32,
    max_y: f32,
}

impl PointerTarget {
    /// Start with the paddle vertically centred in `arena`
    pub fn new(arena: &Arena, paddle_height: f32) -> Self {
        let start = arena.height / 2.0 - paddle_height / 2.0;
        Self {
            bits: Arc::new(AtomicU32::new(start.to_bits())),
            paddle_height,
            max_y: arena.height - paddle_height,
        }
    }

    /// Aim the paddle's center at pointer height `pointer_y` (arena units)
    pub fn set_pointer_y(&self, pointer_y: f32) {
        if !pointer_y.is_finite() {
            log::debug!("Ignoring non-finite pointer y");
            return;
        }
        let target = clamp_span(pointer_y - self.paddle_height / 2.0, self.max_y);
        self.bits.store(target.to_bits(), Ordering::Relaxed);
    }

    /// Latest clamped target Y
    pub fn latest(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

/// Convert a DOM client Y into arena units
///
/// `rect_top` and `rect_height` describe the canvas' on-screen box, which can
/// differ in size from its backing pixel buffer.
pub fn map_client_y(client_y: f32, rect_top: f32, rect_height: f32, arena_height: f32) -> f32 {
    let local = client_y - rect_top;
    if rect_height > 0.0 {
        local * arena_height / rect_height
    } else {
        local
    }
}
