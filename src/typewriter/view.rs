//! Mounted typewriter: machine + timer + render surface
//!
//! The view holds at most one pending timer. Every delivered token that
//! matches it performs one action, renders once, and schedules exactly one
//! successor. Unmounting (explicitly or by dropping the view) cancels the
//! pending timer, so nothing mutates after teardown.

use super::timer::{Timer, TimerToken};
use super::{Action, Typewriter, TypewriterFrame};

/// Where the typewriter's output goes (code window, stdout, a test recorder)
pub trait Surface {
    fn render(&mut self, frame: TypewriterFrame<'_>);
}

/// A surface that ignores frames (callers read state straight off the view)
impl Surface for () {
    fn render(&mut self, _frame: TypewriterFrame<'_>) {}
}

pub struct TypewriterView<T: Timer, S: Surface> {
    machine: Typewriter,
    timer: T,
    surface: S,
    pending: Option<(TimerToken, Action)>,
}

impl<T: Timer, S: Surface> TypewriterView<T, S> {
    /// Build an unmounted view; nothing is scheduled until [`mount`](Self::mount)
    pub fn new(machine: Typewriter, timer: T, surface: S) -> Self {
        Self {
            machine,
            timer,
            surface,
            pending: None,
        }
    }

    pub fn machine(&self) -> &Typewriter {
        &self.machine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    /// Render the current frame and start the cycle. No-op if already mounted.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        self.surface.render(self.machine.frame());
        self.schedule_next();
        tracing::debug!(
            snippet = %self.machine.current().label,
            "typewriter mounted"
        );
    }

    /// Handle a delivered token; returns false for stale or foreign tokens
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        let action = match self.pending {
            Some((pending, action)) if pending == token => action,
            _ => {
                tracing::trace!(token = token.id(), "ignoring stale typewriter timer");
                return false;
            }
        };
        self.pending = None;
        self.timer.fired(token);

        self.machine.apply(action);
        self.surface.render(self.machine.frame());
        self.schedule_next();
        true
    }

    /// Cancel the pending timer. State is kept, so a later mount resumes.
    pub fn unmount(&mut self) {
        if let Some((token, _)) = self.pending.take() {
            self.timer.cancel(token);
            tracing::debug!("typewriter unmounted");
        }
    }

    fn schedule_next(&mut self) {
        let step = self.machine.next_step();
        let token = self.timer.schedule_once(step.delay);
        self.pending = Some((token, step.action));
    }
}

impl<T: Timer, S: Surface> Drop for TypewriterView<T, S> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::timer::{ManualTimer, TokioTimer};
    use crate::typewriter::{Snippet, Timing};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    /// Counts renders; shared so it can be inspected after the view is gone
    #[derive(Clone, Default)]
    struct Spy(Rc<RefCell<Vec<String>>>);

    impl Surface for Spy {
        fn render(&mut self, frame: TypewriterFrame<'_>) {
            self.0.borrow_mut().push(frame.text.to_string());
        }
    }

    impl Spy {
        fn count(&self) -> usize {
            self.0.borrow().len()
        }
    }

    fn machine(texts: &[&str]) -> Typewriter {
        let snippets = texts
            .iter()
            .map(|t| Snippet::new("code", *t))
            .collect();
        Typewriter::new(snippets, Timing::from_millis(10, 2000)).unwrap()
    }

    #[test]
    fn test_mount_renders_and_schedules_once() {
        let spy = Spy::default();
        let mut view = TypewriterView::new(machine(&["ab"]), ManualTimer::new(), spy.clone());

        view.mount();
        view.mount();

        assert_eq!(spy.count(), 1);
        assert_eq!(view.timer().pending(), 1);
    }

    #[test]
    fn test_each_tick_schedules_exactly_one_successor() {
        let mut view = TypewriterView::new(machine(&["abc", "d"]), ManualTimer::new(), ());
        view.mount();

        for _ in 0..50 {
            let token = view.timer_mut().advance().unwrap();
            assert!(view.on_timer(token));
            assert_eq!(view.timer().pending(), 1);
        }
    }

    #[test]
    fn test_stale_token_is_ignored() {
        let spy = Spy::default();
        let mut view = TypewriterView::new(machine(&["ab"]), ManualTimer::new(), spy.clone());
        view.mount();

        let token = view.timer_mut().advance().unwrap();
        assert!(view.on_timer(token));
        // Delivering the same token again must not type another character
        assert!(!view.on_timer(token));
        assert_eq!(view.machine().visible_text(), "a");
        assert_eq!(spy.count(), 2);
    }

    #[test]
    fn test_unmount_stops_all_mutation() {
        let spy = Spy::default();
        let mut view = TypewriterView::new(machine(&["abc"]), ManualTimer::new(), spy.clone());
        view.mount();
        let token = view.timer_mut().advance().unwrap();
        view.on_timer(token);

        // Timer pending, then teardown
        let renders = spy.count();
        let late = view.timer_mut().advance();
        view.unmount();

        assert!(!view.is_mounted());
        if let Some(late) = late {
            assert!(!view.on_timer(late));
        }
        assert_eq!(view.timer().pending(), 0);
        assert_eq!(spy.count(), renders);
        assert_eq!(view.machine().visible_text(), "a");
    }

    #[test]
    fn test_remount_resumes_from_preserved_state() {
        let mut view = TypewriterView::new(machine(&["abc"]), ManualTimer::new(), ());
        view.mount();
        let token = view.timer_mut().advance().unwrap();
        view.on_timer(token);
        view.unmount();

        view.mount();
        let token = view.timer_mut().advance().unwrap();
        assert!(view.on_timer(token));
        assert_eq!(view.machine().visible_text(), "ab");
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_types_on_schedule() {
        let (timer, mut rx) = TokioTimer::new();
        let mut view = TypewriterView::new(machine(&["ab"]), timer, ());
        view.mount();

        let token = rx.recv().await.unwrap();
        assert!(view.on_timer(token));
        assert_eq!(view.machine().visible_text(), "a");

        let token = rx.recv().await.unwrap();
        assert!(view.on_timer(token));
        assert_eq!(view.machine().visible_text(), "ab");
        assert_eq!(view.timer().outstanding(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_with_pending_timer_renders_nothing_more() {
        let spy = Spy::default();
        let (timer, mut rx) = TokioTimer::new();
        let mut view = TypewriterView::new(machine(&["abc"]), timer, spy.clone());
        view.mount();
        assert_eq!(spy.count(), 1);

        drop(view);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(rx.recv().await, None);
        assert_eq!(spy.count(), 1);
    }
}
