//! Terminal presentation layer.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget toolkits and instead implements the core's pixel
//! [`Surface`](crate::core::Surface) on top of a framebuffer of colored cells
//! that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Scale the fixed 850x550 playing surface to any terminal size
//! - Write only changed cells each frame

pub mod canvas;
pub mod fb;
pub mod font;
pub mod renderer;

pub use tui_pong_core as core;
pub use tui_pong_types as types;

pub use canvas::{Canvas, FrameSink, Offscreen};
pub use fb::{Cell, FrameBuffer, Rgb, Viewport};
pub use font::{GlyphText, MAX_GLYPHS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TITLE};

/// Canvas that draws straight to the terminal.
pub type TerminalCanvas = Canvas<TerminalRenderer>;
