use crate::application::splitter::SplitQuote;
use crate::domain::currency::CurrencyCode;
use crate::domain::split::round_for_display;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct QuoteRecord<'a> {
    total: Decimal,
    people: u32,
    currency: CurrencyCode,
    grand_total: String,
    per_person: String,
    display: &'a str,
}

/// Writes split results as CSV, one row per bill.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_quote(&mut self, quote: &SplitQuote) -> Result<()> {
        self.writer.serialize(QuoteRecord {
            total: quote.input.total,
            people: quote.input.people.get(),
            currency: quote.breakdown.currency,
            grand_total: format!("{:.2}", round_for_display(quote.breakdown.grand_total)),
            per_person: format!("{:.2}", round_for_display(quote.breakdown.per_person)),
            display: &quote.display,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::{BillInput, BillUpdate, Headcount};
    use crate::domain::currency::CurrencyRateTable;
    use crate::domain::split::{SplitCalculator, format_amount};
    use rust_decimal_macros::dec;

    fn quote(input: BillInput) -> SplitQuote {
        let breakdown = SplitCalculator::breakdown(&input, &CurrencyRateTable::default()).unwrap();
        let display = format_amount(breakdown.currency, breakdown.per_person);
        SplitQuote {
            input,
            breakdown,
            display,
        }
    }

    #[test]
    fn test_writes_header_and_rows() {
        let mut buffer = Vec::new();
        {
            let mut writer = QuoteWriter::new(&mut buffer);
            writer
                .write_quote(&quote(BillInput::new(dec!(100), Headcount::clamped(3))))
                .unwrap();
            writer
                .write_quote(&quote(
                    BillInput::new(dec!(100), Headcount::ONE)
                        .apply(BillUpdate::SetCurrency(CurrencyCode::Eur)),
                ))
                .unwrap();
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "total,people,currency,grand_total,per_person,display");
        assert_eq!(lines[1], "100,3,USD,100.00,33.33,$33.33");
        assert_eq!(lines[2], "100,1,EUR,100.00,91.00,€91.00");
    }
}
