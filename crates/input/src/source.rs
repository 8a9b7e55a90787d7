//! crossterm-backed input source.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::core::{EventBatch, InputSource};
use crate::handler::KeyReleaseTracker;
use crate::map::map_event;

/// Polls the terminal without blocking and maps its events for the game.
pub struct TerminalInput {
    tracker: KeyReleaseTracker,
    started: Instant,
}

impl TerminalInput {
    pub fn new(tracker: KeyReleaseTracker) -> Self {
        if !tracker.release_events() {
            log::warn!(
                "key release events unavailable, releasing held keys after {}ms; \
                 auto-repeat follows only the last pressed key, so a player's held \
                 key stops when the other player presses one",
                tracker.timeout_ms()
            );
        }
        Self {
            tracker,
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self, out: &mut EventBatch) -> Result<()> {
        let now = self.now_ms();

        while !out.is_full() && event::poll(Duration::ZERO)? {
            let Some(mapped) = map_event(event::read()?) else {
                continue;
            };
            if let Some(ev) = self.tracker.observe(mapped, now) {
                out.push(ev);
            }
        }

        self.tracker.expire(now, out);
        Ok(())
    }
}
