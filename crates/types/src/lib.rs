//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Playing Surface
//!
//! The simulation runs on a fixed logical surface measured in pixels:
//!
//! - **Width**: 850 (x grows to the right)
//! - **Height**: 550 (y grows downwards)
//!
//! Presentation layers scale this surface onto whatever they draw to.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Target frame rate |
//! | `BALL_RADIUS` | 5 | Ball radius in pixels |
//! | `BALL_VELOCITY` | (6, 2) | Serve velocity in pixels per frame |
//! | `PADDLE_WIDTH` | 20 | Paddle width in pixels |
//! | `PADDLE_HEIGHT` | 60 | Paddle height in pixels |
//! | `PADDLE_OFFSET` | 200 | Paddle distance from the horizontal centre |
//! | `PADDLE_SPEED` | 10 | Paddle speed while a key is held |
//! | `WINNING_SCORE` | 11 | Points needed to finish a match |
//! | `SCORE_FONT_SIZE` | 72 | Score text size in pixels |
//!
//! # Examples
//!
//! ```
//! use tui_pong_types::{Key, Rect, Side, Vector2i, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! let paddle = Rect::new(225, 245, 20, 60);
//! assert!(paddle.contains(Vector2i::new(230, 250)));
//! assert!(!paddle.contains(Vector2i::new(245, 250)));
//!
//! assert_eq!(Key::LeftUp.side(), Some(Side::Left));
//! assert_eq!(Side::Left.opponent(), Side::Right);
//!
//! assert_eq!(SCREEN_WIDTH, 850);
//! assert_eq!(SCREEN_HEIGHT, 550);
//! ```

use std::ops::{Add, AddAssign};

/// Logical surface width in pixels
pub const SCREEN_WIDTH: i32 = 850;

/// Logical surface height in pixels
pub const SCREEN_HEIGHT: i32 = 550;

/// Target frame rate
pub const FPS: u32 = 60;

/// Ball radius in pixels
pub const BALL_RADIUS: i32 = 5;

/// Serve velocity (pixels per frame)
pub const BALL_VELOCITY: Vector2i = Vector2i::new(6, 2);

/// Paddle width in pixels
pub const PADDLE_WIDTH: i32 = 20;

/// Paddle height in pixels
pub const PADDLE_HEIGHT: i32 = 60;

/// Horizontal distance between the surface centre and each paddle's left edge
pub const PADDLE_OFFSET: i32 = 200;

/// Paddle speed while a movement key is held (pixels per frame)
pub const PADDLE_SPEED: i32 = 10;

/// A match finishes when either player reaches this score
pub const WINNING_SCORE: u32 = 11;

/// Score text size in pixels
pub const SCORE_FONT_SIZE: i32 = 72;


/// Integer 2D vector used for positions and velocities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2i {
    pub x: i32,
    pub y: i32,
}

impl Vector2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vector2i {
    type Output = Self;

    /// Saturates at the `i32` bounds instead of overflowing.
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Vector2i {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Size of a drawing surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: i32,
    pub height: i32,
}

impl Extent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Integer centre of the surface
    pub const fn center(&self) -> Vector2i {
        Vector2i::new(self.width / 2, self.height / 2)
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Axis-aligned rectangle (top-left corner plus size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Point containment with inclusive top-left and exclusive bottom-right edges
    pub const fn contains(&self, p: Vector2i) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One of the two players
///
/// - **Left**: player 1, paddle on the left half, scores when the ball exits right
/// - **Right**: player 2, paddle on the right half, scores when the ball exits left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Index into per-player arrays (left = 0, right = 1)
    pub const fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Logical key bindings
///
/// These are independent of any keyboard layout; the input crate maps
/// physical keys (Q/A for player 1, P/L for player 2) onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Player 1 paddle up
    LeftUp,
    /// Player 1 paddle down
    LeftDown,
    /// Player 2 paddle up
    RightUp,
    /// Player 2 paddle down
    RightDown,
    /// Start a new match once the current one is finished
    Restart,
}

impl Key {
    /// Paddle this key steers, if any
    pub const fn side(self) -> Option<Side> {
        match self {
            Key::LeftUp | Key::LeftDown => Some(Side::Left),
            Key::RightUp | Key::RightDown => Some(Side::Right),
            Key::Restart => None,
        }
    }

    /// Paddle velocity requested while this key is held
    pub const fn paddle_velocity(self) -> i32 {
        match self {
            Key::LeftUp | Key::RightUp => -PADDLE_SPEED,
            Key::LeftDown | Key::RightDown => PADDLE_SPEED,
            Key::Restart => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Key::LeftUp => "leftUp",
            Key::LeftDown => "leftDown",
            Key::RightUp => "rightUp",
            Key::RightDown => "rightDown",
            Key::Restart => "restart",
        }
    }
}

/// Discrete input event delivered once per frame by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// The user asked to close the game
    Close,
    KeyDown(Key),
    KeyUp(Key),
}
