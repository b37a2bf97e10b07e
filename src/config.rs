use crate::domain::currency::{CurrencyCode, CurrencyRateTable};
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Settings read from an optional TOML file.
///
/// ```toml
/// default_currency = "EUR"
///
/// [rates]
/// USD = 1.0
/// EUR = 0.91
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SplitConfig {
    pub default_currency: CurrencyCode,
    pub rates: CurrencyRateTable,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    default_currency: Option<String>,
    rates: Option<BTreeMap<String, Decimal>>,
}

impl SplitConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(source)?;

        let default_currency = match raw.default_currency {
            Some(code) => code.parse()?,
            None => CurrencyCode::default(),
        };
        let rates = match raw.rates {
            Some(entries) => parse_rates(entries)?,
            None => CurrencyRateTable::default(),
        };

        Ok(Self {
            default_currency,
            rates,
        })
    }

    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = tokio::fs::read_to_string(path.as_ref()).await?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }
}

/// Builds a rate table from code/factor pairs, rejecting codes we cannot display.
fn parse_rates(entries: BTreeMap<String, Decimal>) -> Result<CurrencyRateTable> {
    let rates = entries
        .into_iter()
        .map(|(code, rate)| Ok((code.parse::<CurrencyCode>()?, rate)))
        .collect::<Result<BTreeMap<_, _>>>()?;
    Ok(CurrencyRateTable::new(rates))
}
