//! Fixed-order frame loop.
//!
//! Every frame runs the same sequence regardless of match phase:
//!
//! 1. poll input and dispatch every event to the [`GameState`]
//! 2. draw and present
//! 3. simulate (only while the match is being played)
//! 4. wait for the next frame slot
//!
//! The loop stops only after a close request has been observed; the frame
//! that saw the request still finishes.

use anyhow::Result;
use arrayvec::ArrayVec;

use crate::game_state::GameState;
use crate::surface::Surface;
use crate::types::InputEvent;

/// Maximum number of input events handled in a single frame.
///
/// Anything beyond stays queued in the input source until the next poll.
pub const MAX_EVENTS_PER_FRAME: usize = 32;

pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>;

/// Non-blocking source of input events.
pub trait InputSource {
    /// Append pending events to `out` without blocking. Stops when `out` is full.
    fn poll_events(&mut self, out: &mut EventBatch) -> Result<()>;
}

/// Frame pacing primitive.
pub trait FramePacer {
    /// Block until the target frame duration has elapsed since the previous call.
    fn tick(&mut self);
}

/// Run a single frame. Returns `true` while the loop should keep going.
pub fn run_frame<S, I>(
    state: &mut GameState,
    surface: &mut S,
    input: &mut I,
    events: &mut EventBatch,
) -> Result<bool>
where
    S: Surface,
    I: InputSource,
{
    events.clear();
    input.poll_events(events)?;
    for event in events.drain(..) {
        state.handle_event(event);
    }

    state.draw(surface)?;
    state.tick();

    Ok(!state.close_requested())
}

/// Run frames until the game is closed.
pub fn run<S, I, P>(state: &mut GameState, surface: &mut S, input: &mut I, pacer: &mut P) -> Result<()>
where
    S: Surface,
    I: InputSource,
    P: FramePacer,
{
    let mut events = EventBatch::new();
    while !state.close_requested() {
        run_frame(state, surface, input, &mut events)?;
        pacer.tick();
    }
    log::info!("close requested after {} frames", state.frame());
    Ok(())
}
