//! Debouncing for lookups driven by keystrokes

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Last-value-wins settle window.
///
/// Every call to [`Debouncer::settle`] waits for the window to pass. Only the
/// most recent call of a burst gets its value back; earlier calls resolve to
/// `None` so they never reach the network.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `Some(value)` if no newer value arrived during the window.
    pub async fn settle<T>(&self, value: T) -> Option<T> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;
        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(value)
        } else {
            None
        }
    }

    /// Invalidate every pending call, e.g. when the field is cleared.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_of_burst_settles() {
        let debouncer = Debouncer::new(Duration::from_millis(600));

        let (a, b, c) = tokio::join!(
            debouncer.settle("0000"),
            async {
                sleep(Duration::from_millis(200)).await;
                debouncer.settle("0000-0002").await
            },
            async {
                sleep(Duration::from_millis(400)).await;
                debouncer.settle("0000-0002-1825-0097").await
            },
        );

        assert_eq!(a, None);
        assert_eq!(b, None);
        assert_eq!(c, Some("0000-0002-1825-0097"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_both_settle() {
        let debouncer = Debouncer::default();
        assert_eq!(debouncer.settle(1).await, Some(1));
        assert_eq!(debouncer.settle(2).await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_value() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let (value, _) = tokio::join!(debouncer.settle("x"), async {
            sleep(Duration::from_millis(100)).await;
            debouncer.cancel();
        });
        assert_eq!(value, None);
    }
}
