use crate::domain::ports::{Clipboard, ShareMessage, ShareTarget};
use crate::error::{Result, SplitError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// A clipboard backed by a file. Each copy replaces the file contents.
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Clipboard for FileClipboard {
    fn copy_text(&self, text: &str) -> Result<()> {
        std::fs::write(&self.path, text)
            .map_err(|e| SplitError::Clipboard(format!("{}: {}", self.path.display(), e)))
    }
}

/// Shares by writing the message as JSON to a file.
#[derive(Debug, Clone)]
pub struct FileShareTarget {
    path: PathBuf,
}

impl FileShareTarget {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ShareTarget for FileShareTarget {
    async fn share(&self, message: &ShareMessage) -> Result<()> {
        let body = serde_json::to_vec_pretty(message)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}

/// The share capability of a platform that has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableShareTarget;

#[async_trait]
impl ShareTarget for UnavailableShareTarget {
    async fn share(&self, _message: &ShareMessage) -> Result<()> {
        Err(SplitError::ShareUnavailable)
    }
}
