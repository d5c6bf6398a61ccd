use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// Default quiescence window for input-triggered recalculation.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Coalescing scheduler: at most one pending execution per key.
///
/// `schedule` arms a timer for the key; scheduling again before it fires
/// aborts the pending task, so only the most recently scheduled closure for
/// a key ever runs. This bounds recomputation frequency under rapid typing
/// without changing the final result.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<HashMap<String, JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn schedule<F>(&self, key: &str, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.remove(key) {
            previous.abort();
        }

        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        pending.insert(key.to_string(), handle);
    }

    /// Drop a pending execution without running it, e.g. when the field it
    /// was scheduled for has been cleared.
    pub async fn cancel(&self, key: &str) {
        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.remove(key) {
            previous.abort();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
