//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Pong rules, match state and the frame loop.
//! It has **no dependencies** on terminals or windows; drawing and input go
//! through the [`Surface`], [`InputSource`] and [`FramePacer`] traits, which
//! makes it:
//!
//! - **Deterministic**: integer physics, same inputs produce identical matches
//! - **Testable**: every rule is exercised without a display
//! - **Portable**: any presentation layer can drive it
//! - **Fast**: the per-frame update does not allocate
//!
//! # Module Structure
//!
//! - [`paddle`]: vertical paddle motion with arena clamping
//! - [`ball`]: ball motion, ordered wall/goal rules and paddle deflection
//! - [`scoreboard`]: per-player points
//! - [`game_state`]: the match controller (input, update, win condition, drawing)
//! - [`surface`]: drawing contract for presentation layers
//! - [`frame`]: the fixed-order frame loop
//! - [`clock`]: fixed-rate frame pacing
//!
//! # Game Rules
//!
//! - The ball serves from the centre at (6, 2) pixels per frame
//! - Touching the right edge scores for the left player, the left edge for the right player
//! - Top and bottom walls reflect the ball without scoring
//! - A paddle deflects the ball when the ball's centre enters it while moving towards it
//! - First player to 11 points finishes the match
//!
//! # Example
//!
//! ```
//! use tui_pong_core::{GameState, MatchPhase};
//! use tui_pong_types::{InputEvent, Key, Side};
//!
//! let mut game = GameState::default();
//!
//! // Player 1 holds "up".
//! game.handle_event(InputEvent::KeyDown(Key::LeftUp));
//! game.tick();
//! assert_eq!(game.paddle(Side::Left).position().y, 235);
//!
//! assert_eq!(game.phase(), MatchPhase::Playing);
//! assert_eq!(game.scoreboard().scores(), [0, 0]);
//! ```
//!
//! # Timing
//!
//! One call to [`GameState::tick`](game_state::GameState::tick) is one frame.
//! Velocities are in pixels per frame, so game speed is tied to the frame
//! rate (60 FPS, paced by [`FrameClock`]).

pub mod ball;
pub mod clock;
pub mod frame;
pub mod game_state;
pub mod paddle;
pub mod scoreboard;
pub mod surface;

pub use tui_pong_types as types;

// Re-export commonly used types for convenience
pub use ball::{first_wall_contact, Ball, BallStep, WallContact, WallRule, WALL_RULES};
pub use clock::FrameClock;
pub use frame::{run, run_frame, EventBatch, FramePacer, InputSource, MAX_EVENTS_PER_FRAME};
pub use game_state::{GameState, MatchPhase};
pub use paddle::Paddle;
pub use scoreboard::Scoreboard;
pub use surface::{Surface, TextImage};
