//! Restartable delayed delivery of values.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Delivers the most recently scheduled value once no new value has been
/// scheduled for a full `delay`.
///
/// Each [`schedule`](Self::schedule) aborts the pending timer task and
/// starts a new one, so a burst of requests results in a single delivery.
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, tx: UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Restarts the timer; `value` is sent when it expires.
    pub fn schedule(&mut self, value: T) {
        self.cancel();

        let delay = self.delay;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver is gone once the session shuts down.
            let _ = tx.send(value);
        }));
    }

    /// Drops the pending value, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::{Instant, sleep};

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);
        let start = Instant::now();

        debouncer.schedule(1);
        assert!(debouncer.is_pending());

        assert_eq!(rx.recv().await, Some(1));
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_only_last_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);
        let start = Instant::now();

        debouncer.schedule(1);
        sleep(Duration::from_millis(100)).await;
        debouncer.schedule(2);
        sleep(Duration::from_millis(200)).await;
        debouncer.schedule(3);

        assert_eq!(rx.recv().await, Some(3));
        assert!(start.elapsed() >= Duration::from_millis(600));

        sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(DELAY, tx);

        debouncer.schedule("stale");
        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
        assert!(!debouncer.cancel());

        sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut debouncer = Debouncer::new(DELAY, tx);
            debouncer.schedule(5);
        }

        // Every sender is gone once the aborted task is dropped.
        assert_eq!(rx.recv().await, None);
    }
}
