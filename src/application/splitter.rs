use crate::domain::bill::BillInput;
use crate::domain::currency::CurrencyRateTable;
use crate::domain::ports::{ClipboardBox, RateSourceBox, ShareMessage, ShareTargetBox};
use crate::domain::split::{SplitBreakdown, SplitCalculator, format_amount};
use crate::error::Result;
use serde::Serialize;

pub const SHARE_TITLE: &str = "Split Bill";
pub const COPIED_TITLE: &str = "Copied to clipboard!";

/// A computed split together with its display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitQuote {
    pub input: BillInput,
    pub breakdown: SplitBreakdown,
    /// Per-person amount as shown to the user, e.g. `$27.50`.
    pub display: String,
}

/// Confirmation shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

/// What actually happened when the user asked to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared(ShareMessage),
    /// Sharing failed and the amount was copied instead.
    Copied(Notice),
}

/// Entry point for splitting a bill and handing the result to the user.
///
/// `BillSplitter` owns the rate table and the clipboard/share adapters.
/// Calculation is delegated to [`SplitCalculator`]; this type only adds
/// formatting and the copy/share actions.
pub struct BillSplitter {
    rates: CurrencyRateTable,
    clipboard: ClipboardBox,
    share_target: ShareTargetBox,
}

impl BillSplitter {
    /// Creates a new `BillSplitter`.
    ///
    /// # Arguments
    ///
    /// * `rates` - Conversion factors relative to USD.
    /// * `clipboard` - Destination for the copy action.
    /// * `share_target` - Platform share capability, possibly unavailable.
    pub fn new(rates: CurrencyRateTable, clipboard: ClipboardBox, share_target: ShareTargetBox) -> Self {
        Self {
            rates,
            clipboard,
            share_target,
        }
    }

    /// Loads rates once from `source` and builds a splitter around them.
    pub async fn from_source(
        source: RateSourceBox,
        clipboard: ClipboardBox,
        share_target: ShareTargetBox,
    ) -> Result<Self> {
        let rates = source.load_rates().await?;
        Ok(Self::new(rates, clipboard, share_target))
    }

    pub fn rates(&self) -> &CurrencyRateTable {
        &self.rates
    }

    pub fn quote(&self, input: &BillInput) -> Result<SplitQuote> {
        let breakdown = SplitCalculator::breakdown(input, &self.rates)?;
        let display = format_amount(breakdown.currency, breakdown.per_person);
        Ok(SplitQuote {
            input: input.clone(),
            breakdown,
            display,
        })
    }

    /// Copies the per-person amount to the clipboard.
    pub fn copy(&self, input: &BillInput) -> Result<Notice> {
        let quote = self.quote(input)?;
        self.copy_quote(&quote)
    }

    /// Shares the per-person amount, copying it instead if sharing fails.
    ///
    /// Share failures are never returned; only a failing copy is.
    pub async fn share(&self, input: &BillInput) -> Result<ShareOutcome> {
        let quote = self.quote(input)?;
        let message = ShareMessage {
            title: SHARE_TITLE.to_string(),
            text: format!("Each person owes: {}", quote.display),
        };

        match self.share_target.share(&message).await {
            Ok(()) => {
                tracing::info!(text = %message.text, "shared split");
                Ok(ShareOutcome::Shared(message))
            }
            Err(e) => {
                tracing::info!(reason = %e, "share failed, copying instead");
                self.copy_quote(&quote).map(ShareOutcome::Copied)
            }
        }
    }

    fn copy_quote(&self, quote: &SplitQuote) -> Result<Notice> {
        self.clipboard.copy_text(&quote.display)?;
        tracing::debug!(display = %quote.display, "copied split");
        Ok(Notice {
            title: COPIED_TITLE.to_string(),
            description: format!("{} per person", quote.display),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::{BillUpdate, Headcount};
    use crate::domain::currency::CurrencyCode;
    use crate::domain::ports::Clipboard;
    use crate::error::SplitError;
    use crate::infrastructure::file::UnavailableShareTarget;
    use crate::infrastructure::in_memory::{InMemoryClipboard, RecordingShareTarget};
    use crate::infrastructure::rates::StaticRateSource;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy_text(&self, _text: &str) -> Result<()> {
            Err(SplitError::Clipboard("denied".to_string()))
        }
    }

    fn dinner() -> BillInput {
        BillInput::new(dec!(100), Headcount::clamped(4)).apply(BillUpdate::SetTaxPercent(dec!(10)))
    }

    #[test]
    fn test_quote_display() {
        let splitter = BillSplitter::new(
            CurrencyRateTable::default(),
            Box::new(InMemoryClipboard::new()),
            Box::new(UnavailableShareTarget),
        );

        let quote = splitter.quote(&dinner()).unwrap();
        assert_eq!(quote.display, "$27.50");
        assert_eq!(quote.breakdown.grand_total, dec!(110));
    }

    #[test]
    fn test_copy_writes_display_string() {
        let clipboard = InMemoryClipboard::new();
        let splitter = BillSplitter::new(
            CurrencyRateTable::default(),
            Box::new(clipboard.clone()),
            Box::new(UnavailableShareTarget),
        );

        let notice = splitter.copy(&dinner()).unwrap();
        assert_eq!(notice.title, "Copied to clipboard!");
        assert_eq!(notice.description, "$27.50 per person");
        assert_eq!(clipboard.contents().unwrap().as_deref(), Some("$27.50"));
    }

    #[tokio::test]
    async fn test_share_success_does_not_copy() {
        let clipboard = InMemoryClipboard::new();
        let target = RecordingShareTarget::new();
        let splitter = BillSplitter::new(
            CurrencyRateTable::default(),
            Box::new(clipboard.clone()),
            Box::new(target.clone()),
        );

        let outcome = splitter.share(&dinner()).await.unwrap();
        let expected = ShareMessage {
            title: "Split Bill".to_string(),
            text: "Each person owes: $27.50".to_string(),
        };
        assert_eq!(outcome, ShareOutcome::Shared(expected.clone()));
        assert_eq!(target.shared().await, vec![expected]);
        assert!(clipboard.contents().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_share_unavailable_falls_back_to_copy() {
        let clipboard = InMemoryClipboard::new();
        let splitter = BillSplitter::new(
            CurrencyRateTable::default(),
            Box::new(clipboard.clone()),
            Box::new(UnavailableShareTarget),
        );

        let outcome = splitter.share(&dinner()).await.unwrap();
        assert!(matches!(outcome, ShareOutcome::Copied(ref notice) if notice.description == "$27.50 per person"));
        assert_eq!(clipboard.contents().unwrap().as_deref(), Some("$27.50"));
    }

    #[tokio::test]
    async fn test_share_cancelled_falls_back_to_copy() {
        let clipboard = InMemoryClipboard::new();
        let splitter = BillSplitter::new(
            CurrencyRateTable::default(),
            Box::new(clipboard.clone()),
            Box::new(RecordingShareTarget::cancelling()),
        );

        let outcome = splitter.share(&dinner()).await.unwrap();
        assert!(matches!(outcome, ShareOutcome::Copied(_)));
        assert_eq!(clipboard.contents().unwrap().as_deref(), Some("$27.50"));
    }

    #[tokio::test]
    async fn test_copy_failure_surfaces_after_share_failure() {
        let splitter = BillSplitter::new(
            CurrencyRateTable::default(),
            Box::new(BrokenClipboard),
            Box::new(UnavailableShareTarget),
        );

        let result = splitter.share(&dinner()).await;
        assert!(matches!(result, Err(SplitError::Clipboard(_))));
    }

    #[tokio::test]
    async fn test_unknown_currency_is_not_swallowed_by_share() {
        let clipboard = InMemoryClipboard::new();
        let rates = CurrencyRateTable::new(BTreeMap::from([(CurrencyCode::Usd, dec!(1))]));
        let splitter = BillSplitter::new(
            rates,
            Box::new(clipboard.clone()),
            Box::new(RecordingShareTarget::new()),
        );

        let input = dinner().apply(BillUpdate::SetCurrency(CurrencyCode::Eur));
        let result = splitter.share(&input).await;
        assert!(matches!(result, Err(SplitError::UnknownCurrency(_))));
        assert!(clipboard.contents().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_from_source() {
        let table = CurrencyRateTable::default().with_rate(CurrencyCode::Eur, dec!(0.5));
        let splitter = BillSplitter::from_source(
            Box::new(StaticRateSource::new(table)),
            Box::new(InMemoryClipboard::new()),
            Box::new(UnavailableShareTarget),
        )
        .await
        .unwrap();

        let input = dinner().apply(BillUpdate::SetCurrency(CurrencyCode::Eur));
        assert_eq!(splitter.quote(&input).unwrap().display, "€13.75");
    }
}
