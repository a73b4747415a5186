// TUI application state
//
// Owns the mounted typewriter and role rotator, plus UI chrome state (theme,
// logs panel, help modal, toast). The event loop feeds timer tokens and key
// presses in; views::draw reads everything back out.

use super::clipboard::ClipboardSink;
use super::components::toast::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use super::scroll::ScrollState;
use crate::config::Config;
use crate::content::Portfolio;
use crate::logging::LogBuffer;
use crate::rotator::{RoleRotator, RotatorView};
use crate::theme::Theme;
use crate::typewriter::{
    Phase, Surface, Timer, TimerToken, TokioTimer, Typewriter, TypewriterFrame, TypewriterView,
};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Surface backing the code window: keeps the latest frame for drawing
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CodeBuffer {
    pub label: String,
    pub text: String,
    /// Frames rendered so far
    pub frames: u64,
}

impl Surface for CodeBuffer {
    fn render(&mut self, frame: TypewriterFrame<'_>) {
        self.label.clear();
        self.label.push_str(frame.label);
        self.text.clear();
        self.text.push_str(frame.text);
        self.frames += 1;
    }
}

pub struct App<T: Timer = TokioTimer> {
    pub portfolio: Portfolio,
    pub typewriter: TypewriterView<T, CodeBuffer>,
    pub roles: RotatorView<T>,
    pub theme: Theme,

    pub log_buffer: LogBuffer,
    pub show_logs: bool,
    pub logs_scroll: ScrollState,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,

    pub paused: bool,
    pub should_quit: bool,
    pub start_time: Instant,

    role_rotation: bool,
    caret_blink: Duration,
    input_handler: InputHandler,
    clipboard: Box<dyn ClipboardSink>,
}

impl<T: Timer> App<T> {
    /// Build the app around an already-validated typewriter. Nothing animates
    /// until [`start`](Self::start).
    pub fn new(
        portfolio: Portfolio,
        machine: Typewriter,
        timers: (T, T),
        config: &Config,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let (typewriter_timer, role_timer) = timers;
        let roles = RotatorView::new(
            RoleRotator::new(portfolio.roles.clone()),
            role_timer,
            config.animation.role_interval(),
        );

        Self {
            typewriter: TypewriterView::new(machine, typewriter_timer, CodeBuffer::default()),
            roles,
            portfolio,
            theme: Theme::by_name(&config.theme),
            log_buffer,
            show_logs: config.features.logs_panel,
            logs_scroll: ScrollState::new(),
            modal: None,
            toast: None,
            paused: false,
            should_quit: false,
            start_time: Instant::now(),
            role_rotation: config.features.role_rotation,
            caret_blink: config.animation.caret_blink(),
            input_handler: InputHandler::default(),
            clipboard,
        }
    }

    /// Mount the animations
    pub fn start(&mut self) {
        self.typewriter.mount();
        if self.role_rotation {
            self.roles.mount();
        }
        tracing::info!(
            snippets = self.typewriter.machine().snippets().len(),
            roles = self.portfolio.roles.len(),
            theme = %self.theme.name,
            "Portfolio view started"
        );
    }

    pub fn on_typewriter_timer(&mut self, token: TimerToken) {
        self.typewriter.on_timer(token);
    }

    pub fn on_role_timer(&mut self, token: TimerToken) {
        if self.roles.on_timer(token) {
            let rotator = self.roles.rotator();
            tracing::debug!(
                index = rotator.index(),
                role = rotator.current().unwrap_or_default(),
                "role rotated"
            );
        }
    }

    /// Periodic housekeeping from the tick interval
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Unmount both animations (state kept) or mount them again
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            self.typewriter.unmount();
            self.roles.unmount();
            self.show_toast("⏸ Paused");
        } else {
            self.start();
            self.show_toast("▶ Resumed");
        }
    }

    pub fn next_theme(&mut self) {
        self.theme = self.theme.next();
        tracing::info!("Theme changed to {}", self.theme.name);
        self.show_toast(format!("Theme: {}", self.theme.name));
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn toggle_help(&mut self) {
        self.modal = match self.modal {
            Some(Modal::Help) => None,
            None => Some(Modal::Help),
        };
    }

    /// Copy the nth contact (1-based, as on the keyboard)
    pub fn copy_contact(&mut self, n: usize) {
        let Some(contact) = n.checked_sub(1).and_then(|i| self.portfolio.contacts.get(i)) else {
            return;
        };
        let (label, href) = (contact.label.clone(), contact.href.clone());

        match self.clipboard.copy(&href) {
            Ok(()) => {
                tracing::info!("Copied {} link", label);
                self.show_toast(format!("✓ Copied {}", label));
            }
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Role shown under the name; the first role when rotation is off
    pub fn current_role(&self) -> Option<&str> {
        self.roles.rotator().current()
    }

    pub fn phase(&self) -> Phase {
        self.typewriter.machine().phase()
    }

    /// (1-based snippet number, snippet count)
    pub fn snippet_position(&self) -> (usize, usize) {
        let machine = self.typewriter.machine();
        (machine.index() + 1, machine.snippets().len())
    }

    /// Typed fraction of the current snippet, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        let machine = self.typewriter.machine();
        let snippet = machine.current();
        if snippet.is_empty() {
            return 1.0;
        }
        machine.visible_len() as f64 / snippet.len() as f64
    }

    pub fn caret_visible(&self) -> bool {
        caret_on(self.start_time.elapsed(), self.caret_blink)
    }

    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

/// Caret is on for the first half-period, off for the second
fn caret_on(elapsed: Duration, half_period: Duration) -> bool {
    let half = half_period.as_millis().max(1);
    (elapsed.as_millis() / half) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Contact;
    use crate::typewriter::{ManualTimer, Snippet, Timing};
    use anyhow::anyhow;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeClipboard {
        copied: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardSink for FakeClipboard {
        fn copy(&mut self, text: &str) -> anyhow::Result<()> {
            if self.fail {
                return Err(anyhow!("no display"));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn portfolio() -> Portfolio {
        Portfolio {
            name: "Ada".to_string(),
            tagline: String::new(),
            bio: String::new(),
            roles: vec!["Engineer".to_string(), "Writer".to_string()],
            snippets: vec![Snippet::new("Rust", "fn"), Snippet::new("Go", "go")],
            contacts: vec![
                Contact::new("Email", "mailto:ada@example.com"),
                Contact::new("GitHub", "https://github.com/ada"),
            ],
        }
    }

    fn app_with(config: &Config, clipboard: FakeClipboard) -> App<ManualTimer> {
        let portfolio = portfolio();
        let machine = Typewriter::new(portfolio.snippets.clone(), Timing::from_millis(10, 100))
            .unwrap();
        App::new(
            portfolio,
            machine,
            (ManualTimer::new(), ManualTimer::new()),
            config,
            LogBuffer::new(),
            Box::new(clipboard),
        )
    }

    fn app() -> App<ManualTimer> {
        app_with(&Config::default(), FakeClipboard::default())
    }

    /// Fire the typewriter's next timer through the app
    fn tick_typewriter(app: &mut App<ManualTimer>) {
        let token = app.typewriter.timer_mut().advance().unwrap();
        app.on_typewriter_timer(token);
    }

    #[test]
    fn test_start_mounts_both_animations() {
        let mut app = app();
        assert!(!app.typewriter.is_mounted());
        app.start();
        assert!(app.typewriter.is_mounted());
        assert!(app.roles.is_mounted());
        assert_eq!(app.typewriter.surface().label, "Rust");
        assert_eq!(app.typewriter.surface().frames, 1);
    }

    #[test]
    fn test_role_rotation_disabled_keeps_first_role() {
        let mut config = Config::default();
        config.features.role_rotation = false;
        let mut app = app_with(&config, FakeClipboard::default());
        app.start();
        assert!(!app.roles.is_mounted());
        assert_eq!(app.current_role(), Some("Engineer"));
    }

    #[test]
    fn test_typewriter_ticks_update_code_buffer() {
        let mut app = app();
        app.start();
        tick_typewriter(&mut app);
        tick_typewriter(&mut app);
        assert_eq!(app.typewriter.surface().text, "fn");
        assert_eq!(app.phase(), Phase::PausedAtFull);
        assert_eq!(app.progress(), 1.0);
        assert_eq!(app.snippet_position(), (1, 2));
    }

    #[test]
    fn test_role_timer_rotates() {
        let mut app = app();
        app.start();
        let token = app.roles.timer_mut().advance().unwrap();
        app.on_role_timer(token);
        assert_eq!(app.current_role(), Some("Writer"));
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut app = app();
        app.start();
        tick_typewriter(&mut app);

        app.toggle_pause();
        assert!(app.paused);
        assert!(!app.typewriter.is_mounted());
        assert_eq!(app.typewriter.timer().pending(), 0);
        assert!(app.toast.is_some());

        app.toggle_pause();
        assert!(app.typewriter.is_mounted());
        tick_typewriter(&mut app);
        assert_eq!(app.typewriter.surface().text, "fn");
    }

    #[test]
    fn test_copy_contact_uses_one_based_index() {
        let clipboard = FakeClipboard::default();
        let mut app = app_with(&Config::default(), clipboard.clone());

        app.copy_contact(2);
        app.copy_contact(0);
        app.copy_contact(9);

        assert_eq!(*clipboard.copied.borrow(), ["https://github.com/ada"]);
        assert_eq!(app.toast.as_ref().unwrap().message, "✓ Copied GitHub");
    }

    #[test]
    fn test_copy_failure_shows_toast() {
        let clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        let mut app = app_with(&Config::default(), clipboard);
        app.copy_contact(1);
        assert_eq!(app.toast.as_ref().unwrap().message, "✗ Failed to copy");
    }

    #[test]
    fn test_theme_cycles_from_config() {
        let mut config = Config::default();
        config.theme = "nord".to_string();
        let mut app = app_with(&config, FakeClipboard::default());
        assert_eq!(app.theme.name, "Nord");
        app.next_theme();
        assert_eq!(app.theme.name, "Gruvbox");
    }

    #[test]
    fn test_help_toggles() {
        let mut app = app();
        app.toggle_help();
        assert_eq!(app.modal, Some(Modal::Help));
        app.toggle_help();
        assert_eq!(app.modal, None);
    }

    #[test]
    fn test_caret_blinks_on_half_period() {
        let half = Duration::from_millis(500);
        assert!(caret_on(Duration::from_millis(0), half));
        assert!(caret_on(Duration::from_millis(499), half));
        assert!(!caret_on(Duration::from_millis(500), half));
        assert!(caret_on(Duration::from_millis(1000), half));
    }
}
