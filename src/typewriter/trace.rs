//! Deterministic timeline of a typewriter run
//!
//! Drives a [`TypewriterView`] with the [`ManualTimer`] fake clock so the full
//! character-by-character sequence can be printed or asserted without sleeping.

use super::timer::ManualTimer;
use super::view::TypewriterView;
use super::{Phase, Typewriter};
use std::fmt;
use std::time::Duration;

/// State right after one timer firing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceEntry {
    /// Fake time since mount
    pub at: Duration,
    pub label: String,
    pub phase: Phase,
    pub text: String,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>8}ms  {:<12} {:<8} {:?}",
            self.at.as_millis(),
            self.label,
            self.phase.as_str(),
            self.text
        )
    }
}

/// Run `steps` timer firings from a fresh mount and record each one
pub fn trace(machine: Typewriter, steps: usize) -> Vec<TraceEntry> {
    let mut view = TypewriterView::new(machine, ManualTimer::new(), ());
    view.mount();

    let mut entries = Vec::with_capacity(steps);
    for _ in 0..steps {
        let Some(token) = view.timer_mut().advance() else {
            break;
        };
        let at = view.timer().now();
        view.on_timer(token);

        let machine = view.machine();
        entries.push(TraceEntry {
            at,
            label: machine.current().label.clone(),
            phase: machine.phase(),
            text: machine.visible_text().to_string(),
        });
    }
    entries
}
