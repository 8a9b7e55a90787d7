//! Game state module - the match controller
//!
//! [`GameState`] owns the ball, both paddles and the scoreboard. It turns
//! input events into paddle velocities, advances the simulation one frame at a
//! time, evaluates the win condition and draws everything through a
//! [`Surface`].
//!
//! # Phases
//!
//! A match starts in [`MatchPhase::Playing`] and moves to
//! [`MatchPhase::Finished`] as soon as either score equals
//! [`WINNING_SCORE`]. Once finished the simulation is frozen: [`GameState::tick`]
//! is a no-op, but input is still handled (so the game can be closed or
//! restarted) and the final frame keeps being drawn.

use anyhow::Result;

use crate::ball::{Ball, BallStep};
use crate::paddle::Paddle;
use crate::scoreboard::Scoreboard;
use crate::surface::{Surface, TextImage};
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchPhase {
    Playing,
    Finished,
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    arena: Extent,
    ball: Ball,
    left: Paddle,
    right: Paddle,
    scoreboard: Scoreboard,
    phase: MatchPhase,
    close_requested: bool,
    /// Monotonic match id (increments on restart).
    match_id: u32,
    /// Frames simulated in the current match.
    frame: u32,
    background: Rgb,
    foreground: Rgb,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Extent::default())
    }
}

impl GameState {
    /// Create a match on a surface of the given size, ready to play.
    pub fn new(arena: Extent) -> Self {
        Self {
            arena,
            ball: serve(arena),
            left: paddle_for(Side::Left, arena),
            right: paddle_for(Side::Right, arena),
            scoreboard: Scoreboard::new(),
            phase: MatchPhase::Playing,
            close_requested: false,
            match_id: 0,
            frame: 0,
            background: Rgb::BLACK,
            foreground: Rgb::WHITE,
        }
    }

    /// Reset ball, paddles and scores and start a new match.
    pub fn restart(&mut self) {
        self.ball = serve(self.arena);
        self.left = paddle_for(Side::Left, self.arena);
        self.right = paddle_for(Side::Right, self.arena);
        self.scoreboard.reset();
        self.phase = MatchPhase::Playing;
        self.match_id = self.match_id.wrapping_add(1);
        self.frame = 0;
        log::info!("match {} started", self.match_id);
    }

    pub fn arena(&self) -> Extent {
        self.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == MatchPhase::Finished
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn match_id(&self) -> u32 {
        self.match_id
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Player who reached the winning score, once the match is finished.
    pub fn winner(&self) -> Option<Side> {
        if self.is_finished() {
            self.scoreboard.reached(WINNING_SCORE)
        } else {
            None
        }
    }

    /// Apply one input event.
    ///
    /// Key-down sets the paddle velocity for that key; releasing either of a
    /// paddle's keys stops it, even if the other key is still held.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Close => {
                self.close_requested = true;
            }
            InputEvent::KeyDown(Key::Restart) => {
                if self.is_finished() {
                    self.restart();
                }
            }
            InputEvent::KeyDown(key) => {
                if let Some(side) = key.side() {
                    self.paddle_mut(side).set_velocity(key.paddle_velocity());
                }
            }
            InputEvent::KeyUp(key) => {
                if let Some(side) = key.side() {
                    self.paddle_mut(side).set_velocity(0);
                }
            }
        }
    }

    /// Advance ball and paddles by one frame, applying any goal to the scoreboard.
    pub fn update(&mut self) -> BallStep {
        let step = self.ball.move_step(&self.left, &self.right);
        if let Some(side) = step.scorer() {
            let points = self.scoreboard.award(side);
            let [l, r] = self.scoreboard.scores();
            log::info!("{} player scores ({points}), now {l}-{r}", side.as_str());
        }

        self.left.move_step();
        self.right.move_step();
        self.frame = self.frame.wrapping_add(1);
        step
    }

    /// Finish the match once either score equals the winning score.
    pub fn decide_continue(&mut self) {
        if let Some(side) = self.scoreboard.reached(WINNING_SCORE) {
            if self.phase == MatchPhase::Playing {
                let [l, r] = self.scoreboard.scores();
                log::info!("match {} finished: {} wins {l}-{r}", self.match_id, side.as_str());
            }
            self.phase = MatchPhase::Finished;
        }
    }

    /// Simulate one frame if the match is still being played.
    pub fn tick(&mut self) -> Option<BallStep> {
        if self.phase != MatchPhase::Playing {
            return None;
        }
        let step = self.update();
        self.decide_continue();
        Some(step)
    }

    /// Draw the full frame and present it.
    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<()> {
        surface.fill(self.background);
        self.ball.draw(surface);
        self.left.draw(surface);
        self.right.draw(surface);
        self.draw_score(surface, Side::Left);
        self.draw_score(surface, Side::Right);
        surface.present()
    }

    fn draw_score<S: Surface>(&self, surface: &mut S, side: Side) {
        let mut digits = [0u8; 10];
        let text = format_u32(self.scoreboard.get(side), &mut digits);
        let image = surface.render_text(text, SCORE_FONT_SIZE, self.foreground, self.background);
        let x = match side {
            Side::Left => 0,
            Side::Right => surface.extent().width - image.width(),
        };
        surface.blit(&image, Vector2i::new(x, 0));
    }
}

fn serve(arena: Extent) -> Ball {
    Ball::new(arena.center(), BALL_RADIUS, BALL_VELOCITY, arena)
}

fn paddle_for(side: Side, arena: Extent) -> Paddle {
    let center = arena.center();
    let top = center.y - PADDLE_HEIGHT / 2;
    let left = match side {
        Side::Left => center.x - PADDLE_OFFSET,
        Side::Right => center.x + PADDLE_OFFSET,
    };
    Paddle::new(
        Vector2i::new(left, top),
        PADDLE_WIDTH,
        PADDLE_HEIGHT,
        arena.height,
    )
}

/// Write `value` as decimal digits into `buf` without allocating.
fn format_u32(mut value: u32, buf: &mut [u8; 10]) -> &str {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("0")
}
