// Role rotator for the hero title
//
// Cycles through the portfolio's role titles on a fixed interval. Same timer
// contract as the typewriter view: one pending timer while mounted, cancelled
// on unmount or drop.

use crate::typewriter::{Timer, TimerToken};
use std::time::Duration;

/// Cyclic cursor over role titles
#[derive(Debug, Clone)]
pub struct RoleRotator {
    roles: Vec<String>,
    index: usize,
}

impl RoleRotator {
    pub fn new(roles: Vec<String>) -> Self {
        Self { roles, index: 0 }
    }

    /// Current role, or None when there are no roles at all
    pub fn current(&self) -> Option<&str> {
        self.roles.get(self.index).map(String::as_str)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn advance(&mut self) {
        if !self.is_empty() {
            self.index = (self.index + 1) % self.roles.len();
        }
    }
}

/// A [`RoleRotator`] driven by a repeating one-shot timer
pub struct RotatorView<T: Timer> {
    rotator: RoleRotator,
    timer: T,
    interval: Duration,
    pending: Option<TimerToken>,
}

impl<T: Timer> RotatorView<T> {
    pub fn new(rotator: RoleRotator, timer: T, interval: Duration) -> Self {
        Self {
            rotator,
            timer,
            interval,
            pending: None,
        }
    }

    pub fn rotator(&self) -> &RoleRotator {
        &self.rotator
    }

    #[cfg(test)]
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    /// Start rotating. A single role (or none) has nothing to rotate to.
    pub fn mount(&mut self) {
        if self.is_mounted() || self.rotator.len() < 2 {
            return;
        }
        self.pending = Some(self.timer.schedule_once(self.interval));
    }

    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        if self.pending != Some(token) {
            return false;
        }
        self.timer.fired(token);
        self.rotator.advance();
        self.pending = Some(self.timer.schedule_once(self.interval));
        true
    }

    pub fn unmount(&mut self) {
        if let Some(token) = self.pending.take() {
            self.timer.cancel(token);
        }
    }
}

impl<T: Timer> Drop for RotatorView<T> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::ManualTimer;

    fn roles(names: &[&str]) -> RoleRotator {
        RoleRotator::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_rotator_wraps() {
        let mut r = roles(&["a", "b", "c"]);
        assert_eq!(r.current(), Some("a"));
        r.advance();
        r.advance();
        assert_eq!(r.current(), Some("c"));
        r.advance();
        assert_eq!(r.current(), Some("a"));
    }

    #[test]
    fn test_empty_rotator() {
        let mut r = roles(&[]);
        r.advance();
        assert_eq!(r.current(), None);
        assert!(r.is_empty());
    }

    #[test]
    fn test_view_rotates_on_interval() {
        let mut view = RotatorView::new(
            roles(&["AI/ML Engineer", "IoT Innovator"]),
            ManualTimer::new(),
            Duration::from_millis(3000),
        );
        view.mount();

        let token = view.timer_mut().advance().unwrap();
        assert_eq!(view.timer_mut().now(), Duration::from_millis(3000));
        assert!(view.on_timer(token));
        assert_eq!(view.rotator().current(), Some("IoT Innovator"));

        let token = view.timer_mut().advance().unwrap();
        assert_eq!(view.timer_mut().now(), Duration::from_millis(6000));
        assert!(view.on_timer(token));
        assert_eq!(view.rotator().index(), 0);
    }

    #[test]
    fn test_single_role_never_schedules() {
        let mut view = RotatorView::new(
            roles(&["solo"]),
            ManualTimer::new(),
            Duration::from_millis(3000),
        );
        view.mount();
        assert!(!view.is_mounted());
        assert_eq!(view.timer_mut().pending(), 0);
    }

    #[test]
    fn test_unmount_cancels() {
        let mut view = RotatorView::new(
            roles(&["a", "b"]),
            ManualTimer::new(),
            Duration::from_millis(3000),
        );
        view.mount();
        view.unmount();
        assert_eq!(view.timer_mut().pending(), 0);
        assert_eq!(view.rotator().current(), Some("a"));
    }
}
