// Typewriter state machine for the hero code window
//
// Types a snippet one character at a time, holds it on screen, deletes it at
// double speed, then moves on to the next snippet. The cycle never ends.
//
// State Diagram:
//
//                 type_char (typing_speed)
//                 ┌──────┐
//                 ▼      │
//   mount ──▶ [Typing] ──┘
//                 │
//                 │ visible == full
//                 ▼
//          [PausedAtFull] ──begin_deleting (pause_end)──▶ [Deleting] ◀─┐
//                                                            │    │    │
//                                                            │    └────┘
//                                                            │  delete_char (typing_speed / 2)
//                                                            │
//              next snippet, no extra delay  ◀───────────────┘ visible == ""
//
// The machine itself never sleeps. `next_step()` names the one action the next
// timer firing performs and how long to wait for it; `view` wires that to a
// `Timer` and a `Surface`.

pub mod timer;
pub mod trace;
pub mod view;

#[cfg(test)]
pub use timer::ManualTimer;
pub use timer::{Timer, TimerToken, TokioTimer};
pub use view::{Surface, TypewriterView};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// One fixed (label, text) pair cycled through by the typewriter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Shown in the window header (e.g. "Python")
    pub label: String,
    /// Full text the typewriter types out
    pub text: String,
}

impl Snippet {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    /// Length in chars, the unit the typewriter steps by
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Delays driving the typewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Interval between typed characters; deletion runs at half of it
    pub typing_speed: Duration,
    /// Hold time once a snippet is fully typed
    pub pause_end: Duration,
}

impl Timing {
    /// Floor for the typing interval so deletion never gets a zero delay
    const MIN_TYPING_SPEED: Duration = Duration::from_millis(1);

    pub fn new(typing_speed: Duration, pause_end: Duration) -> Self {
        Self {
            typing_speed: typing_speed.max(Self::MIN_TYPING_SPEED),
            pause_end,
        }
    }

    pub fn from_millis(typing_speed_ms: u64, pause_end_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(typing_speed_ms),
            Duration::from_millis(pause_end_ms),
        )
    }

    pub fn delete_speed(&self) -> Duration {
        self.typing_speed / 2
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::from_millis(30, 2000)
    }
}

/// Observable phase of the cycle (for the status bar and trace output)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full text on screen, waiting for the pause to elapse
    PausedAtFull,
    Deleting,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Typing => "typing",
            Phase::PausedAtFull => "paused",
            Phase::Deleting => "deleting",
        }
    }
}

/// What the pending timer does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TypeChar,
    BeginDeleting,
    DeleteChar,
}

/// The next scheduled mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub delay: Duration,
    pub action: Action,
}

/// What a render surface receives on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterFrame<'a> {
    pub label: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    /// The cycle needs at least one snippet
    NoSnippets,
}

impl fmt::Display for TypewriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypewriterError::NoSnippets => write!(f, "typewriter needs at least one snippet"),
        }
    }
}

impl std::error::Error for TypewriterError {}

/// Typewriter state: which snippet, how much of it is visible, which direction
#[derive(Debug, Clone)]
pub struct Typewriter {
    snippets: Vec<Snippet>,
    timing: Timing,
    index: usize,
    /// Visible prefix length in chars
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(snippets: Vec<Snippet>, timing: Timing) -> Result<Self, TypewriterError> {
        if snippets.is_empty() {
            return Err(TypewriterError::NoSnippets);
        }

        Ok(Self {
            snippets,
            timing,
            index: 0,
            visible: 0,
            deleting: false,
        })
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn current(&self) -> &Snippet {
        &self.snippets[self.index]
    }

    /// Visible prefix length in chars
    pub fn visible_len(&self) -> usize {
        self.visible
    }

    /// The visible prefix of the current snippet
    pub fn visible_text(&self) -> &str {
        let text = &self.current().text;
        match text.char_indices().nth(self.visible) {
            Some((byte, _)) => &text[..byte],
            None => text,
        }
    }

    pub fn frame(&self) -> TypewriterFrame<'_> {
        TypewriterFrame {
            label: &self.current().label,
            text: self.visible_text(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.is_deleting() {
            Phase::Deleting
        } else if self.at_full() {
            Phase::PausedAtFull
        } else {
            Phase::Typing
        }
    }

    fn at_full(&self) -> bool {
        self.visible == self.current().len()
    }

    /// Append one character. No-op at the full boundary or while deleting.
    pub fn type_char(&mut self) -> bool {
        if self.deleting || self.at_full() {
            return false;
        }
        self.visible += 1;
        true
    }

    /// Flip into deleting mode. Only allowed with the full text on screen.
    ///
    /// An empty snippet has nothing to delete, so it moves on right away.
    pub fn begin_deleting(&mut self) -> bool {
        if self.deleting || !self.at_full() {
            return false;
        }
        self.deleting = true;
        if self.visible == 0 {
            self.advance();
        }
        true
    }

    /// Remove one character. Emptying the text moves on to the next snippet.
    pub fn delete_char(&mut self) -> bool {
        if !self.deleting || self.visible == 0 {
            return false;
        }
        self.visible -= 1;
        if self.visible == 0 {
            self.advance();
        }
        true
    }

    fn advance(&mut self) {
        self.deleting = false;
        self.index = (self.index + 1) % self.snippets.len();
        tracing::trace!(
            index = self.index,
            label = %self.current().label,
            "typewriter advanced"
        );
    }

    /// Perform a scheduled action, returning whether state changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::TypeChar => self.type_char(),
            Action::BeginDeleting => self.begin_deleting(),
            Action::DeleteChar => self.delete_char(),
        }
    }

    /// The single action the next timer firing should perform
    ///
    /// After a snippet is deleted the next snippet starts typing one regular
    /// typing interval later; there is no separate start pause.
    pub fn next_step(&self) -> Step {
        match self.phase() {
            Phase::Typing => Step {
                delay: self.timing.typing_speed,
                action: Action::TypeChar,
            },
            Phase::PausedAtFull => Step {
                delay: self.timing.pause_end,
                action: Action::BeginDeleting,
            },
            Phase::Deleting => Step {
                delay: self.timing.delete_speed(),
                action: Action::DeleteChar,
            },
        }
    }
}
