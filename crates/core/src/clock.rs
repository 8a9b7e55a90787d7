//! Fixed-rate frame clock.
//!
//! Pacing is advisory: if a frame takes longer than its slot the clock does
//! not try to catch up, it simply starts timing the next frame from now.

use std::time::{Duration, Instant};

use crate::frame::FramePacer;

#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Option<Instant>,
    overruns: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: None,
            overruns: 0,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Frames that took longer than their slot.
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Time left in the current frame slot at `now`.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self.frame.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

impl FramePacer for FrameClock {
    fn tick(&mut self) {
        let now = Instant::now();
        let wait = self.remaining(now);
        if !wait.is_zero() {
            std::thread::sleep(wait);
        } else if let Some(last) = self.last {
            self.overruns += 1;
            log::debug!(
                "frame overran its slot: {:?} > {:?}",
                now.saturating_duration_since(last),
                self.frame
            );
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_fps_slot() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_duration(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_first_tick_does_not_wait() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.remaining(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn test_tick_waits_for_slot() {
        let mut clock = FrameClock::new(100);
        clock.tick();
        let start = Instant::now();
        clock.tick();
        assert!(start.elapsed() >= Duration::from_millis(5));
        assert_eq!(clock.overruns(), 0);
    }

    #[test]
    fn test_slow_frame_counts_overrun() {
        let mut clock = FrameClock::new(1000);
        clock.tick();
        std::thread::sleep(Duration::from_millis(5));
        clock.tick();
        assert_eq!(clock.overruns(), 1);
    }
}
