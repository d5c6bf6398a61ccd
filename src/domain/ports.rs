use crate::domain::model::StatusKind;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A destination the resolved message text can be copied to. The dashboard
/// wires two of these: the system clipboard and a legacy select-and-copy
/// fallback.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Sink for transient status notifications. `show` replaces whatever is
/// currently displayed; `fade` starts the dismiss transition; `clear`
/// removes the message entirely.
pub trait StatusSink: Send + Sync {
    fn show(&self, message: &str, kind: StatusKind);
    fn fade(&self);
    fn clear(&self);
}
