use crate::domain::bill::BillInput;
use crate::domain::currency::{CurrencyCode, CurrencyRateTable};
use crate::error::{Result, SplitError};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Flat surcharge applied to the subtotal when the service charge is enabled.
pub const SERVICE_CHARGE_PERCENT: Decimal = dec!(10);

const HUNDRED: Decimal = dec!(100);

/// Every intermediate value of a split, in the order they are computed.
///
/// All amounts except `per_person` are in the base currency (USD).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitBreakdown {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub tip: Decimal,
    pub service_charge: Decimal,
    pub grand_total: Decimal,
    /// Per-person share in the base currency, after optional rounding up.
    pub per_person_base: Decimal,
    pub rate: Decimal,
    pub currency: CurrencyCode,
    /// Per-person share converted to `currency`. Not rounded for display.
    pub per_person: Decimal,
}

/// Pure bill-splitting arithmetic.
pub struct SplitCalculator;

impl SplitCalculator {
    /// Computes the amount each person owes, in the bill's currency.
    pub fn compute_per_person_amount(input: &BillInput, rates: &CurrencyRateTable) -> Result<Decimal> {
        Ok(Self::breakdown(input, rates)?.per_person)
    }

    /// Runs the split and keeps every intermediate amount.
    ///
    /// Order: tax, tip, service charge, grand total, divide by people,
    /// optional ceiling (still in the base currency), then conversion.
    pub fn breakdown(input: &BillInput, rates: &CurrencyRateTable) -> Result<SplitBreakdown> {
        let rate = rates.rate(input.currency)?;
        let total = input.total;

        let tax = percent_of(total, input.tax_percent)?;
        let tip = percent_of(total, input.tip_percent)?;
        let service_charge = if input.service_charge_enabled {
            percent_of(total, SERVICE_CHARGE_PERCENT)?
        } else {
            Decimal::ZERO
        };

        let grand_total = [tax, tip, service_charge]
            .into_iter()
            .try_fold(total, |acc, amount| acc.checked_add(amount))
            .ok_or(SplitError::ArithmeticOverflow)?;

        let mut per_person_base = grand_total
            .checked_div(Decimal::from(input.people))
            .ok_or(SplitError::ArithmeticOverflow)?;
        if input.round_up_enabled {
            per_person_base = per_person_base.ceil();
        }

        let per_person = per_person_base
            .checked_mul(rate)
            .ok_or(SplitError::ArithmeticOverflow)?;

        tracing::debug!(
            %grand_total,
            people = input.people.get(),
            %per_person_base,
            currency = %input.currency,
            %per_person,
            "computed split"
        );

        Ok(SplitBreakdown {
            subtotal: total,
            tax,
            tip,
            service_charge,
            grand_total,
            per_person_base,
            rate,
            currency: input.currency,
            per_person,
        })
    }
}

fn percent_of(amount: Decimal, percent: Decimal) -> Result<Decimal> {
    amount
        .checked_mul(percent)
        .and_then(|product| product.checked_div(HUNDRED))
        .ok_or(SplitError::ArithmeticOverflow)
}

/// Rounds an amount to two places for display. Midpoints round away from zero.
///
/// Values too large to carry two decimals keep their integer scale.
pub fn round_for_display(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Formats an amount as `<symbol><amount>` with exactly two decimals, e.g. `€91.00`.
pub fn format_amount(currency: CurrencyCode, amount: Decimal) -> String {
    format!("{}{:.2}", currency.symbol(), round_for_display(amount))
}
