//! Per-player point counters for one match.

use crate::types::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scoreboard {
    scores: [u32; 2],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        self.scores[side.index()]
    }

    /// Scores as `[left, right]`.
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    /// Add one point for `side` and return the new total.
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = &mut self.scores[side.index()];
        *slot = slot.saturating_add(1);
        *slot
    }

    pub fn reset(&mut self) {
        self.scores = [0, 0];
    }

    /// Side whose score equals `target`, checking left first.
    pub fn reached(&self, target: u32) -> Option<Side> {
        [Side::Left, Side::Right]
            .into_iter()
            .find(|side| self.get(*side) == target)
    }
}
