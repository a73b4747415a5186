// TUI module - the portfolio hero in the terminal
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, redraw ticks, animation timers)
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod views;

use crate::config::Config;
use crate::content::Portfolio;
use crate::logging::LogBuffer;
use crate::typewriter::{TimerToken, TokioTimer};
use anyhow::{Context, Result};
use app::App;
use clipboard::SystemClipboard;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw cadence for caret blink and toast expiry
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI until the user quits
pub async fn run_tui(portfolio: Portfolio, config: Config, log_buffer: LogBuffer) -> Result<()> {
    let machine = portfolio.typewriter(config.animation.timing())?;
    let (typewriter_timer, mut typewriter_rx) = TokioTimer::new();
    let (role_timer, mut role_rx) = TokioTimer::new();

    let mut app = App::new(
        portfolio,
        machine,
        (typewriter_timer, role_timer),
        &config,
        log_buffer,
        Box::new(SystemClipboard),
    );

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    app.start();
    let result = run_event_loop(&mut terminal, &mut app, &mut typewriter_rx, &mut role_rx).await;

    // Timers stop before the screen is torn down
    drop(app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on whichever comes first: keyboard/mouse input, the redraw tick,
/// or a timer token for one of the two animations.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    typewriter_rx: &mut mpsc::Receiver<TimerToken>,
    role_rx: &mut mpsc::Receiver<TimerToken>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => app.tick(),

            Some(token) = typewriter_rx.recv() => app.on_typewriter_timer(token),

            Some(token) = role_rx.recv() => app.on_role_timer(token),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Layered dispatch: modal first, then global keys
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    let key = key_event.code;
    if !app.handle_key_press(key) {
        return;
    }

    // Modal captures all input while open
    if let Some(modal) = app.modal.as_mut() {
        if modal.handle_input(key) == ModalAction::Close {
            app.modal = None;
        }
        return;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.next_theme(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_logs(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(n) = c.to_digit(10) {
                app.copy_contact(n as usize);
            }
        }
        KeyCode::Up if app.show_logs => app.logs_scroll.scroll_up(),
        KeyCode::Down if app.show_logs => app.logs_scroll.scroll_down(),
        KeyCode::PageUp if app.show_logs => app.logs_scroll.page_up(),
        KeyCode::PageDown if app.show_logs => app.logs_scroll.page_down(),
        KeyCode::Home if app.show_logs => app.logs_scroll.scroll_to_top(),
        KeyCode::End if app.show_logs => app.logs_scroll.scroll_to_bottom(),
        _ => {}
    }
}

/// Mouse wheel scrolls the logs panel
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if !app.show_logs || app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.logs_scroll.scroll_up(),
        MouseEventKind::ScrollDown => app.logs_scroll.scroll_down(),
        _ => {}
    }
}
