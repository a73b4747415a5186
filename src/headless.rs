// Headless mode - typewriter on plain stdout
//
// Used when FOLIO_NO_TUI is set. On a terminal the current frame is redrawn
// in place; when stdout is a pipe or file each frame is written as one line,
// which makes the output easy to diff or grep. Logs go to stderr.

use crate::config::Config;
use crate::content::Portfolio;
use crate::typewriter::{Surface, TokioTimer, TypewriterFrame, TypewriterView};
use anyhow::{bail, Result};
use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawMode {
    /// Erase the previous frame and draw over it
    InPlace,
    /// One line per frame, text escaped
    Lines,
}

/// Writes typewriter frames to any `Write`
pub struct StdoutSurface<W: Write> {
    out: W,
    mode: RedrawMode,
    /// Line breaks in the last in-place frame, to move back over
    drawn_lines: u16,
    failure: Option<io::Error>,
}

impl<W: Write> StdoutSurface<W> {
    pub fn new(out: W, mode: RedrawMode) -> Self {
        Self {
            out,
            mode,
            drawn_lines: 0,
            failure: None,
        }
    }

    /// First write error, if any; later frames are skipped once set
    pub fn failure(&self) -> Option<&io::Error> {
        self.failure.as_ref()
    }

    fn write_frame(&mut self, frame: TypewriterFrame<'_>) -> io::Result<()> {
        match self.mode {
            RedrawMode::Lines => {
                writeln!(self.out, "{}\t{:?}", frame.label, frame.text)?;
            }
            RedrawMode::InPlace => {
                if self.drawn_lines > 0 {
                    queue!(self.out, cursor::MoveUp(self.drawn_lines))?;
                }
                queue!(
                    self.out,
                    cursor::MoveToColumn(0),
                    Clear(ClearType::FromCursorDown),
                    Print(format!("── {} ──\r\n", frame.label)),
                    Print(frame.text.replace('\n', "\r\n")),
                    Print("▌"),
                )?;
                // Header line plus one per newline in the text
                let breaks = 1 + frame.text.matches('\n').count();
                self.drawn_lines = u16::try_from(breaks).unwrap_or(u16::MAX);
            }
        }
        self.out.flush()
    }
}

impl<W: Write> Surface for StdoutSurface<W> {
    fn render(&mut self, frame: TypewriterFrame<'_>) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = self.write_frame(frame) {
            self.failure = Some(e);
        }
    }
}

/// Run the typewriter on stdout until Ctrl+C
pub async fn run_headless(portfolio: Portfolio, config: Config) -> Result<()> {
    let machine = portfolio.typewriter(config.animation.timing())?;
    let stdout = io::stdout();
    let mode = if stdout.is_terminal() {
        RedrawMode::InPlace
    } else {
        RedrawMode::Lines
    };

    let (timer, mut rx) = TokioTimer::new();
    let mut view = TypewriterView::new(machine, timer, StdoutSurface::new(stdout, mode));
    tracing::info!(?mode, snippets = portfolio.snippets.len(), "Headless typewriter started");
    view.mount();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            Some(token) = rx.recv() => {
                view.on_timer(token);
            }
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted, stopping typewriter");
                break;
            }
        }

        if let Some(e) = view.surface().failure() {
            bail!("Failed to write to stdout: {}", e);
        }
    }

    view.unmount();
    if mode == RedrawMode::InPlace {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::{ManualTimer, Snippet, Timing, Typewriter};

    fn view(mode: RedrawMode) -> TypewriterView<ManualTimer, StdoutSurface<Vec<u8>>> {
        let machine = Typewriter::new(
            vec![Snippet::new("Rust", "a\nb"), Snippet::new("Go", "go")],
            Timing::from_millis(10, 100),
        )
        .unwrap();
        TypewriterView::new(machine, ManualTimer::new(), StdoutSurface::new(Vec::new(), mode))
    }

    fn fire(view: &mut TypewriterView<ManualTimer, StdoutSurface<Vec<u8>>>, n: usize) {
        for _ in 0..n {
            let token = view.timer_mut().advance().unwrap();
            view.on_timer(token);
        }
    }

    #[test]
    fn test_lines_mode_writes_one_line_per_frame() {
        let mut view = view(RedrawMode::Lines);
        view.mount();
        fire(&mut view, 3);
        view.unmount();

        let out = String::from_utf8(view.surface().out.clone()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            ["Rust\t\"\"", "Rust\t\"a\"", "Rust\t\"a\\n\"", "Rust\t\"a\\nb\""]
        );
    }

    #[test]
    fn test_in_place_tracks_lines_to_erase() {
        let mut view = view(RedrawMode::InPlace);
        view.mount();
        assert_eq!(view.surface().drawn_lines, 1);
        fire(&mut view, 2);
        // "a\n" typed: header + one break
        assert_eq!(view.surface().drawn_lines, 2);

        let out = String::from_utf8_lossy(&view.surface().out).to_string();
        assert!(out.contains("── Rust ──"));
        assert!(out.contains('▌'));
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_recorded() {
        let mut surface = StdoutSurface::new(Broken, RedrawMode::Lines);
        surface.render(TypewriterFrame {
            label: "Rust",
            text: "",
        });
        assert_eq!(
            surface.failure().map(|e| e.kind()),
            Some(io::ErrorKind::BrokenPipe)
        );
    }
}
