//! Paddle module - player-controlled rectangle with vertical motion
//!
//! A paddle only ever moves vertically. Its velocity is set directly by input
//! handling (no acceleration), and every [`Paddle::move_step`] clamps it back
//! inside the arena. Clamping is a hard stop, not a bounce: the velocity is
//! left untouched, so a paddle pinned against an edge stays there while its
//! key is held.

use crate::surface::Surface;
use crate::types::{Rect, Rgb, Vector2i};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paddle {
    position: Vector2i,
    width: i32,
    height: i32,
    velocity: i32,
    arena_height: i32,
    color: Rgb,
}

impl Paddle {
    /// Create a stationary paddle with its top-left corner at `position`.
    pub fn new(position: Vector2i, width: i32, height: i32, arena_height: i32) -> Self {
        Self {
            position,
            width,
            height,
            velocity: 0,
            arena_height,
            color: Rgb::WHITE,
        }
    }

    pub fn position(&self) -> Vector2i {
        self.position
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    /// Set the vertical velocity. Negative moves up.
    pub fn set_velocity(&mut self, velocity: i32) {
        self.velocity = velocity;
    }

    /// Advance one frame and clamp to the arena.
    ///
    /// Any velocity is accepted; motion saturates instead of overflowing.
    pub fn move_step(&mut self) {
        self.position.y = self.position.y.saturating_add(self.velocity);

        if self.position.y <= 0 {
            self.position.y = 0;
        } else if self.position.y.saturating_add(self.height) >= self.arena_height {
            self.position.y = self.arena_height - self.height;
        }
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.bounding_rect(), self.color);
    }
}
