use crate::domain::ports::{Clipboard, ShareMessage, ShareTarget};
use crate::error::{Result, SplitError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// A clipboard that keeps the most recently copied text in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// application and read the copied text back through another.
#[derive(Default, Clone)]
pub struct InMemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last copied text, if anything was copied.
    pub fn contents(&self) -> Result<Option<String>> {
        let contents = self
            .contents
            .lock()
            .map_err(|e| SplitError::Clipboard(e.to_string()))?;
        Ok(contents.clone())
    }
}

impl Clipboard for InMemoryClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| SplitError::Clipboard(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// A share target that records every message it accepts.
///
/// When built with [`RecordingShareTarget::cancelling`] it rejects every
/// share as if the user dismissed the share sheet.
#[derive(Default, Clone)]
pub struct RecordingShareTarget {
    shared: Arc<RwLock<Vec<ShareMessage>>>,
    cancel: bool,
}

impl RecordingShareTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancelling() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }

    pub async fn shared(&self) -> Vec<ShareMessage> {
        self.shared.read().await.clone()
    }
}

#[async_trait]
impl ShareTarget for RecordingShareTarget {
    async fn share(&self, message: &ShareMessage) -> Result<()> {
        if self.cancel {
            return Err(SplitError::ShareCancelled);
        }
        let mut shared = self.shared.write().await;
        shared.push(message.clone());
        Ok(())
    }
}
