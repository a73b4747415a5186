//! System clipboard access for copying contact links
//!
//! `arboard` talks to the platform clipboard (X11/Wayland, macOS, Windows).
//! A fresh handle is opened per copy so nothing is held between key presses.

use anyhow::{Context, Result};

/// Destination for copied text
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The platform clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        // Fails on headless Linux without a display server
        arboard::Clipboard::new()
            .context("Failed to access clipboard")?
            .set_text(text)
            .context("Failed to set clipboard text")
    }
}
