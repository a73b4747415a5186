// Modal overlays
//
// A modal captures all input while open. App holds Option<Modal>; the event
// loop acts on the returned ModalAction.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing to do
    None,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
}

/// (key, description) rows for the help overlay
pub const HELP_ROWS: &[(&str, &str)] = &[
    ("space", "Pause / resume the animation"),
    ("t", "Next theme"),
    ("l", "Toggle system logs"),
    ("↑ ↓ PgUp PgDn", "Scroll logs"),
    ("Home End", "Jump to first / latest log"),
    ("1-9", "Copy contact link to clipboard"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

impl Modal {
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Modal::Help => " Keyboard Shortcuts ",
        }
    }
}
