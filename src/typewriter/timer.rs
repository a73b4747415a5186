//! One-shot timer seam
//!
//! A view asks its timer to fire once after a delay and gets a token back.
//! When the delay elapses the token is handed back to the view, which looks up
//! what it was waiting for. Cancelling a token guarantees it is never handed
//! back.
//!
//! Two implementations:
//! - [`TokioTimer`]: a spawned task per timer, delivered over an mpsc channel
//! - [`ManualTimer`]: a fake clock stepped by hand (tests, `folio trace`)

use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one scheduled firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

impl TimerToken {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Single-shot delay primitive
pub trait Timer {
    /// Arrange for the returned token to be delivered once, after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerToken;

    /// Withdraw a scheduled token. Unknown or already-fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);

    /// Acknowledge that a token was delivered, releasing anything held for it
    fn fired(&mut self, _token: TimerToken) {}
}

/// Buffer for fired tokens; a view has at most one in flight
const FIRED_CHANNEL_CAPACITY: usize = 16;

/// Timer backed by tokio tasks
///
/// Fired tokens arrive on the receiver returned by [`TokioTimer::new`]; the
/// owner's event loop passes them back to the view. Dropping the timer aborts
/// every outstanding task.
pub struct TokioTimer {
    fired_tx: mpsc::Sender<TimerToken>,
    next_id: u64,
    tasks: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioTimer {
    pub fn new() -> (Self, mpsc::Receiver<TimerToken>) {
        let (fired_tx, fired_rx) = mpsc::channel(FIRED_CHANNEL_CAPACITY);
        let timer = Self {
            fired_tx,
            next_id: 0,
            tasks: HashMap::new(),
        };
        (timer, fired_rx)
    }

    /// Number of tasks not yet acknowledged or cancelled
    #[cfg(test)]
    pub fn outstanding(&self) -> usize {
        self.tasks.len()
    }
}

impl Timer for TokioTimer {
    fn schedule_once(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;

        // Deadline is fixed now, not when the task first gets polled
        let deadline = tokio::time::Instant::now() + delay;
        let tx = self.fired_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            // Receiver gone means the owner shut down - nothing to deliver to
            let _ = tx.send(token).await;
        });
        self.tasks.insert(token, handle);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.tasks.remove(&token) {
            handle.abort();
        }
    }

    fn fired(&mut self, token: TimerToken) {
        self.tasks.remove(&token);
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

/// Deterministic fake clock
///
/// Nothing fires on its own: [`ManualTimer::advance`] jumps the clock to the
/// earliest pending token and returns it.
#[derive(Debug, Default)]
pub struct ManualTimer {
    now: Duration,
    next_id: u64,
    /// (due time, token), kept in schedule order
    pending: Vec<(Duration, TimerToken)>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current fake time since the timer was created
    pub fn now(&self) -> Duration {
        self.now
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Jump to the earliest due token and hand it out
    ///
    /// Ties go to whichever token was scheduled first.
    pub fn advance(&mut self) -> Option<TimerToken> {
        let (pos, _) = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(_, (due, token))| (*due, *token))?;
        let (due, token) = self.pending.remove(pos);
        self.now = due;
        Some(token)
    }
}

impl Timer for ManualTimer {
    fn schedule_once(&mut self, delay: Duration) -> TimerToken {
        let token = TimerToken(self.next_id);
        self.next_id += 1;
        self.pending.push((self.now + delay, token));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, t)| *t != token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_timer_fires_in_due_order() {
        let mut timer = ManualTimer::new();
        let slow = timer.schedule_once(Duration::from_millis(30));
        let fast = timer.schedule_once(Duration::from_millis(10));

        assert_eq!(timer.advance(), Some(fast));
        assert_eq!(timer.now(), Duration::from_millis(10));
        assert_eq!(timer.advance(), Some(slow));
        assert_eq!(timer.now(), Duration::from_millis(30));
        assert_eq!(timer.advance(), None);
    }

    #[test]
    fn test_manual_timer_delay_is_relative_to_now() {
        let mut timer = ManualTimer::new();
        timer.schedule_once(Duration::from_millis(20));
        timer.advance();

        timer.schedule_once(Duration::from_millis(5));
        timer.advance();
        assert_eq!(timer.now(), Duration::from_millis(25));
    }

    #[test]
    fn test_manual_timer_cancel() {
        let mut timer = ManualTimer::new();
        let token = timer.schedule_once(Duration::from_millis(10));
        timer.cancel(token);
        assert_eq!(timer.pending(), 0);
        assert_eq!(timer.advance(), None);
        assert_eq!(timer.now(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_delivers_after_delay() {
        let (mut timer, mut rx) = TokioTimer::new();
        let token = timer.schedule_once(Duration::from_millis(50));

        tokio::time::sleep(Duration::from_millis(49)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(token));

        timer.fired(token);
        assert_eq!(timer.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_cancel_suppresses_delivery() {
        let (mut timer, mut rx) = TokioTimer::new();
        let token = timer.schedule_once(Duration::from_millis(50));
        timer.cancel(token);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(timer.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_timer_drop_aborts_tasks() {
        let (mut timer, mut rx) = TokioTimer::new();
        timer.schedule_once(Duration::from_millis(10));
        timer.schedule_once(Duration::from_millis(20));
        drop(timer);

        tokio::time::sleep(Duration::from_millis(100)).await;
        // All senders are gone and nothing was delivered
        assert_eq!(rx.recv().await, None);
    }
}
