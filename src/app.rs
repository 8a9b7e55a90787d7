//! Application context: the terminal session plus everything the frame loop needs.
//!
//! [`App::start`] acquires the terminal; dropping the `App` always restores
//! it, whether the game loop returned normally, failed, or unwound.

use anyhow::Result;

use crate::config::AppConfig;
use crate::core::{FrameClock, GameState};
use crate::input::{KeyReleaseTracker, TerminalInput};
use crate::term::{Canvas, FrameSink, TerminalCanvas, TerminalRenderer, Viewport};
use crate::types::{Extent, FPS};

pub struct App {
    state: GameState,
    canvas: TerminalCanvas,
    input: TerminalInput,
    clock: FrameClock,
}

impl App {
    pub fn start(config: &AppConfig) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        if let Err(err) = renderer.enter(config.keyboard_enhancement) {
            let _ = renderer.exit();
            return Err(err);
        }

        let viewport = renderer.viewport().unwrap_or(Viewport::new(80, 24));
        let tracker = KeyReleaseTracker::new(renderer.reports_key_release())
            .with_timeout_ms(config.key_release_timeout_ms);
        let extent = Extent::default();

        Ok(Self {
            state: GameState::new(extent),
            canvas: Canvas::new(extent, viewport, renderer),
            input: TerminalInput::new(tracker),
            clock: FrameClock::new(FPS),
        })
    }

    /// Play until the user closes the game.
    pub fn run(&mut self) -> Result<()> {
        crate::core::run(
            &mut self.state,
            &mut self.canvas,
            &mut self.input,
            &mut self.clock,
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(err) = self.canvas.sink_mut().exit() {
            log::error!("failed to restore terminal: {err:#}");
        }
    }
}
