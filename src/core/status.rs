use crate::domain::model::StatusKind;
use crate::domain::ports::StatusSink;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub const DISMISS_AFTER: Duration = Duration::from_millis(3000);
pub const FADE_FOR: Duration = Duration::from_millis(300);

/// Drives transient status notifications: show a message, then after the
/// dismissal delay start the fade and finally clear it. A newer announcement
/// supersedes the pending dismissal timer.
pub struct StatusController<S: StatusSink + 'static> {
    sink: Arc<S>,
    dismiss_after: Duration,
    fade_for: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<S: StatusSink + 'static> StatusController<S> {
    pub fn new(sink: Arc<S>) -> Self {
        Self::with_timing(sink, DISMISS_AFTER, FADE_FOR)
    }

    pub fn with_timing(sink: Arc<S>, dismiss_after: Duration, fade_for: Duration) -> Self {
        Self {
            sink,
            dismiss_after,
            fade_for,
            pending: Mutex::new(None),
        }
    }

    pub async fn announce(&self, message: &str, kind: StatusKind) {
        self.sink.show(message, kind);

        let mut pending = self.pending.lock().await;
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let sink = Arc::clone(&self.sink);
        let dismiss_after = self.dismiss_after;
        let fade_for = self.fade_for;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            sink.fade();
            tokio::time::sleep(fade_for).await;
            sink.clear();
        }));
    }
}
