use crate::domain::model::CopyMethod;
use crate::domain::ports::Clipboard;
use crate::utils::error::{Result, ToolError};

/// Copies resolved message text to the clipboard, falling back to a second
/// mechanism when the primary one is unavailable. The operation only fails
/// when both paths fail.
pub struct CopyService<P: Clipboard, F: Clipboard> {
    primary: P,
    fallback: F,
}

impl<P: Clipboard, F: Clipboard> CopyService<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub async fn copy(&self, text: &str) -> Result<CopyMethod> {
        if text.is_empty() {
            return Err(ToolError::ClipboardError {
                message: "Nothing to copy".to_string(),
            });
        }

        match self.primary.write_text(text).await {
            Ok(()) => Ok(CopyMethod::Primary),
            Err(primary_err) => {
                tracing::warn!("Primary clipboard write failed: {}", primary_err);
                match self.fallback.write_text(text).await {
                    Ok(()) => Ok(CopyMethod::Fallback),
                    Err(fallback_err) => Err(ToolError::ClipboardError {
                        message: format!(
                            "both copy paths failed: {}; {}",
                            primary_err, fallback_err
                        ),
                    }),
                }
            }
        }
    }
}
