//! Terminal input module (game-facing).
//!
//! This module maps `crossterm` key events into [`crate::types::InputEvent`]
//! and provides a [`TerminalInput`] source for the frame loop. Terminals
//! without key-release events are handled by [`KeyReleaseTracker`].
//!
//! Bindings: `Q`/`A` move player 1 up/down, `P`/`L` move player 2 up/down,
//! `R` starts a new match once one has finished, `Esc` or `Ctrl-C` closes.

pub mod handler;
pub mod map;
pub mod source;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use handler::{KeyReleaseTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_event, map_key_code, map_key_event, should_close};
pub use source::TerminalInput;
