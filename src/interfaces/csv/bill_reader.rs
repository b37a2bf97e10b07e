use crate::domain::bill::{BillInput, coerce_amount, coerce_flag, coerce_headcount};
use crate::domain::currency::CurrencyCode;
use crate::error::{Result, SplitError};
use serde::Deserialize;
use std::io::Read;

/// One row of a bills CSV, exactly as typed.
///
/// Every column is read as text so that malformed numbers can be coerced the
/// same way the form does instead of failing the row.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BillRecord {
    total: String,
    people: String,
    tax: String,
    tip: String,
    service: String,
    round_up: String,
    currency: String,
}

impl BillRecord {
    fn into_input(self, default_currency: CurrencyCode) -> Result<BillInput> {
        let currency = if self.currency.trim().is_empty() {
            default_currency
        } else {
            self.currency.parse()?
        };

        Ok(BillInput {
            total: coerce_amount(&self.total),
            people: coerce_headcount(&self.people),
            tax_percent: coerce_amount(&self.tax),
            tip_percent: coerce_amount(&self.tip),
            service_charge_enabled: coerce_flag(&self.service),
            round_up_enabled: coerce_flag(&self.round_up),
            currency,
        })
    }
}

/// Reads bills from a CSV source.
///
/// Expects a header row naming `total, people, tax, tip, service, round_up,
/// currency`. Missing trailing columns fall back to the empty form values.
pub struct BillReader<R: Read> {
    reader: csv::Reader<R>,
    default_currency: CurrencyCode,
}

impl<R: Read> BillReader<R> {
    /// Creates a new `BillReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self {
            reader,
            default_currency: CurrencyCode::default(),
        }
    }

    /// Currency used for rows whose `currency` column is empty.
    pub fn with_default_currency(mut self, currency: CurrencyCode) -> Self {
        self.default_currency = currency;
        self
    }

    /// Returns an iterator that lazily reads and coerces bills.
    pub fn bills(self) -> impl Iterator<Item = Result<BillInput>> {
        let default_currency = self.default_currency;
        self.reader.into_deserialize().map(move |result| {
            result
                .map_err(SplitError::from)
                .and_then(|record: BillRecord| record.into_input(default_currency))
        })
    }
}
