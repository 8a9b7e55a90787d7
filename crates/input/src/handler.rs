//! Held-key tracking for terminal environments.
//!
//! Terminals that speak the kitty keyboard protocol report key releases and
//! the game sees real `KeyUp` events. Most other terminals only report presses
//! (plus auto-repeat while a key is held). For those, a held key is released
//! once no press or repeat has been seen for `timeout_ms`.
//!
//! Auto-repeat only repeats the most recently pressed key, so without release
//! events two players holding keys at the same time will see the earlier key
//! time out. Release-capable terminals do not have this limitation.

use crate::core::EventBatch;
use crate::types::{InputEvent, Key};

/// Default synthetic release delay when the terminal does not report releases.
///
/// Longer than a typical auto-repeat start delay, so a held key does not
/// stutter before repeats kick in.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 400;

const TRACKED_KEYS: [Key; 4] = [Key::LeftUp, Key::LeftDown, Key::RightUp, Key::RightDown];

fn slot(key: Key) -> Option<usize> {
    match key {
        Key::LeftUp => Some(0),
        Key::LeftDown => Some(1),
        Key::RightUp => Some(2),
        Key::RightDown => Some(3),
        Key::Restart => None,
    }
}

/// The other movement key of the same paddle.
fn sibling(key: Key) -> Option<Key> {
    match key {
        Key::LeftUp => Some(Key::LeftDown),
        Key::LeftDown => Some(Key::LeftUp),
        Key::RightUp => Some(Key::RightDown),
        Key::RightDown => Some(Key::RightUp),
        Key::Restart => None,
    }
}

/// Tracks which paddle keys are held.
#[derive(Debug, Clone)]
pub struct KeyReleaseTracker {
    /// Last press/repeat time per tracked key, `None` when not held.
    held: [Option<u64>; 4],
    release_events: bool,
    timeout_ms: u64,
}

impl Default for KeyReleaseTracker {
    fn default() -> Self {
        Self::new(false)
    }
}

impl KeyReleaseTracker {
    /// `release_events` says whether the terminal is known to report key releases.
    pub fn new(release_events: bool) -> Self {
        Self {
            held: [None; 4],
            release_events,
            timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn is_held(&self, key: Key) -> bool {
        slot(key).map(|i| self.held[i].is_some()).unwrap_or(false)
    }

    /// Record an incoming event and decide whether the game should see it.
    ///
    /// Repeated key-downs for a key that is already held only refresh its
    /// timestamp. Without release events, pressing one key of a paddle drops
    /// the other from the held set, so its timeout cannot stop the paddle
    /// while the new key is held. A real key-up proves the terminal reports
    /// releases, which switches the timeout fallback off.
    pub fn observe(&mut self, event: InputEvent, now_ms: u64) -> Option<InputEvent> {
        match event {
            InputEvent::KeyDown(key) => {
                let Some(i) = slot(key) else {
                    return Some(event);
                };
                let was_held = self.held[i].is_some();
                self.held[i] = Some(now_ms);
                if !self.release_events {
                    if let Some(j) = sibling(key).and_then(slot) {
                        self.held[j] = None;
                    }
                }
                if was_held {
                    None
                } else {
                    Some(event)
                }
            }
            InputEvent::KeyUp(key) => {
                if !self.release_events {
                    log::debug!("terminal reports key releases, disabling release timeout");
                    self.release_events = true;
                }
                if let Some(i) = slot(key) {
                    self.held[i] = None;
                }
                Some(event)
            }
            InputEvent::Close => Some(event),
        }
    }

    /// Emit synthetic key-ups for keys that have not been refreshed in time.
    ///
    /// Keys that do not fit in `out` stay held and are released on a later call.
    pub fn expire(&mut self, now_ms: u64, out: &mut EventBatch) {
        if self.release_events {
            return;
        }
        for (i, key) in TRACKED_KEYS.iter().enumerate() {
            let Some(last) = self.held[i] else {
                continue;
            };
            if now_ms.saturating_sub(last) <= self.timeout_ms {
                continue;
            }
            if out.try_push(InputEvent::KeyUp(*key)).is_err() {
                return;
            }
            self.held[i] = None;
        }
    }
}
