use crate::error::{Result, SplitError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The currencies a bill can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
}

impl CurrencyCode {
    pub const ALL: [CurrencyCode; 4] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Jpy,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Jpy => "JPY",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "$",
            CurrencyCode::Eur => "€",
            CurrencyCode::Gbp => "£",
            CurrencyCode::Jpy => "¥",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "US Dollar",
            CurrencyCode::Eur => "Euro",
            CurrencyCode::Gbp => "British Pound",
            CurrencyCode::Jpy => "Japanese Yen",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        CurrencyCode::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SplitError::UnknownCurrency(trimmed.to_string()))
    }
}

/// Multiplicative conversion factors relative to USD.
///
/// The table is plain configuration data: the calculator only ever reads
/// from it, so a table loaded from a file or a live source can replace the
/// built-in one without touching the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyRateTable {
    rates: BTreeMap<CurrencyCode, Decimal>,
}

impl CurrencyRateTable {
    pub fn new(rates: BTreeMap<CurrencyCode, Decimal>) -> Self {
        Self { rates }
    }

    /// Looks up the factor for `code`, failing rather than defaulting when absent.
    pub fn rate(&self, code: CurrencyCode) -> Result<Decimal> {
        self.rates
            .get(&code)
            .copied()
            .ok_or_else(|| SplitError::UnknownCurrency(code.to_string()))
    }

    pub fn with_rate(mut self, code: CurrencyCode, rate: Decimal) -> Self {
        self.rates.insert(code, rate);
        self
    }

    pub fn currencies(&self) -> impl Iterator<Item = CurrencyCode> + '_ {
        self.rates.keys().copied()
    }
}

impl Default for CurrencyRateTable {
    fn default() -> Self {
        Self::new(BTreeMap::from([
            (CurrencyCode::Usd, dec!(1.0)),
            (CurrencyCode::Eur, dec!(0.91)),
            (CurrencyCode::Gbp, dec!(0.79)),
            (CurrencyCode::Jpy, dec!(149.50)),
        ]))
    }
}
