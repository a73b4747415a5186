//! Animation timing configuration
//!
//! Defaults follow the portfolio site: 30ms per typed character, a 2s hold on
//! the finished snippet, a new role every 3s and a caret blinking once a second.

use crate::typewriter::Timing;
use serde::Deserialize;
use std::time::Duration;

/// Animation timing (all values in milliseconds)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationConfig {
    /// Delay between typed characters; deletion runs at half this
    pub typing_speed_ms: u64,
    /// Hold time once a snippet is fully typed
    pub pause_end_ms: u64,
    /// Interval between hero role changes
    pub role_interval_ms: u64,
    /// Caret visible/hidden half-period
    pub caret_blink_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: 30,
            pause_end_ms: 2000,
            role_interval_ms: 3000,
            caret_blink_ms: 500,
        }
    }
}

/// Animation settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileAnimation {
    pub typing_speed_ms: Option<u64>,
    pub pause_end_ms: Option<u64>,
    pub role_interval_ms: Option<u64>,
    pub caret_blink_ms: Option<u64>,
}

impl AnimationConfig {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileAnimation>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            typing_speed_ms: file.typing_speed_ms.unwrap_or(defaults.typing_speed_ms),
            pause_end_ms: file.pause_end_ms.unwrap_or(defaults.pause_end_ms),
            // Zero would spin the rotator / caret on every tick
            role_interval_ms: file
                .role_interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.role_interval_ms),
            caret_blink_ms: file
                .caret_blink_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.caret_blink_ms),
        }
    }

    pub fn timing(&self) -> Timing {
        Timing::from_millis(self.typing_speed_ms, self.pause_end_ms)
    }

    pub fn role_interval(&self) -> Duration {
        Duration::from_millis(self.role_interval_ms)
    }

    pub fn caret_blink(&self) -> Duration {
        Duration::from_millis(self.caret_blink_ms)
    }
}
