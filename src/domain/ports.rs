use super::currency::CurrencyRateTable;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Text handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
}

/// Somewhere copied text ends up.
pub trait Clipboard: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<()>;
}

/// An external share capability. May be missing or cancelled by the user.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn share(&self, message: &ShareMessage) -> Result<()>;
}

/// Provider of currency conversion factors.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn load_rates(&self) -> Result<CurrencyRateTable>;
}

pub type ClipboardBox = Box<dyn Clipboard>;
pub type ShareTargetBox = Box<dyn ShareTarget>;
pub type RateSourceBox = Box<dyn RateSource>;
