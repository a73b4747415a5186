// Key press filtering
//
// Terminals send repeated Press events while a key is held. Action keys
// (space, t, l, digits) should fire once per press; scroll keys repeat after
// an initial delay. Terminals that never send Release events get a debounce
// window instead.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Re-trigger window for action keys on terminals without Release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBehavior {
    /// Fire once per press
    StateChange,
    /// Fire on press, then every `interval` once `delay` has passed
    Repeatable { delay: Duration, interval: Duration },
}

impl KeyBehavior {
    pub fn scroll() -> Self {
        Self::Repeatable {
            delay: Duration::from_millis(400),
            interval: Duration::from_millis(40),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Held {
    since: Instant,
    last_fired: Instant,
}

pub struct InputHandler {
    held: HashMap<KeyCode, Held>,
    behaviors: HashMap<KeyCode, KeyBehavior>,
}

impl InputHandler {
    /// Every key fires once per press
    pub fn new() -> Self {
        Self {
            held: HashMap::new(),
            behaviors: HashMap::new(),
        }
    }

    pub fn configure(&mut self, keys: &[KeyCode], behavior: KeyBehavior) {
        for key in keys {
            self.behaviors.insert(*key, behavior);
        }
    }

    /// Returns true if the press should trigger its action
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.press_at(key, Instant::now())
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    fn press_at(&mut self, key: KeyCode, now: Instant) -> bool {
        let behavior = self
            .behaviors
            .get(&key)
            .copied()
            .unwrap_or(KeyBehavior::StateChange);

        let Some(held) = self.held.get_mut(&key) else {
            self.held.insert(
                key,
                Held {
                    since: now,
                    last_fired: now,
                },
            );
            return true;
        };

        let fire = match behavior {
            KeyBehavior::StateChange => now.duration_since(held.last_fired) >= ACTION_DEBOUNCE,
            KeyBehavior::Repeatable { delay, interval } => {
                now.duration_since(held.since) >= delay
                    && now.duration_since(held.last_fired) >= interval
            }
        };
        if fire {
            held.last_fired = now;
        }
        fire
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        let mut handler = Self::new();
        handler.configure(
            &[
                KeyCode::Up,
                KeyCode::Down,
                KeyCode::PageUp,
                KeyCode::PageDown,
            ],
            KeyBehavior::scroll(),
        );
        handler
    }
}
