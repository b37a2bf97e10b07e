use crate::domain::currency::CurrencyCode;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::str::FromStr;

/// Number of people sharing a bill.
///
/// Wraps a `NonZeroU32` so the split never divides by zero. Anything coming
/// from user input goes through [`Headcount::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Headcount(NonZeroU32);

impl Headcount {
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Builds a headcount from any integer, raising values below one to one.
    pub fn clamped(value: i64) -> Self {
        let value = u32::try_from(value.max(1)).unwrap_or(u32::MAX);
        NonZeroU32::new(value).map(Self).unwrap_or(Self::ONE)
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }

    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self::clamped(i64::from(self.get()) - 1)
    }
}

impl Default for Headcount {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<Headcount> for Decimal {
    fn from(headcount: Headcount) -> Self {
        Decimal::from(headcount.get())
    }
}

/// The state of the bill form at one point in time.
///
/// Values are never mutated in place: each edit goes through
/// [`BillInput::apply`], which returns the next state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillInput {
    pub total: Decimal,
    pub people: Headcount,
    pub tax_percent: Decimal,
    pub tip_percent: Decimal,
    pub service_charge_enabled: bool,
    pub round_up_enabled: bool,
    pub currency: CurrencyCode,
}

/// A single edit to the bill form.
#[derive(Debug, Clone, PartialEq)]
pub enum BillUpdate {
    SetTotal(Decimal),
    SetPeople(i64),
    SetHeadcount(Headcount),
    IncrementPeople,
    DecrementPeople,
    SetTaxPercent(Decimal),
    SetTipPercent(Decimal),
    SetServiceCharge(bool),
    ToggleServiceCharge,
    SetRoundUp(bool),
    ToggleRoundUp,
    SetCurrency(CurrencyCode),
}

impl BillInput {
    pub fn new(total: Decimal, people: Headcount) -> Self {
        Self {
            total,
            people,
            ..Self::default()
        }
    }

    pub fn apply(self, update: BillUpdate) -> Self {
        match update {
            BillUpdate::SetTotal(total) => Self { total, ..self },
            BillUpdate::SetPeople(n) => Self {
                people: Headcount::clamped(n),
                ..self
            },
            BillUpdate::SetHeadcount(people) => Self { people, ..self },
            BillUpdate::IncrementPeople => Self {
                people: self.people.increment(),
                ..self
            },
            BillUpdate::DecrementPeople => Self {
                people: self.people.decrement(),
                ..self
            },
            BillUpdate::SetTaxPercent(tax_percent) => Self {
                tax_percent,
                ..self
            },
            BillUpdate::SetTipPercent(tip_percent) => Self {
                tip_percent,
                ..self
            },
            BillUpdate::SetServiceCharge(enabled) => Self {
                service_charge_enabled: enabled,
                ..self
            },
            BillUpdate::ToggleServiceCharge => Self {
                service_charge_enabled: !self.service_charge_enabled,
                ..self
            },
            BillUpdate::SetRoundUp(enabled) => Self {
                round_up_enabled: enabled,
                ..self
            },
            BillUpdate::ToggleRoundUp => Self {
                round_up_enabled: !self.round_up_enabled,
                ..self
            },
            BillUpdate::SetCurrency(currency) => Self { currency, ..self },
        }
    }

    /// Applies a sequence of edits in order.
    pub fn apply_all(self, updates: impl IntoIterator<Item = BillUpdate>) -> Self {
        updates.into_iter().fold(self, Self::apply)
    }
}

/// Coerces free-form numeric text to a decimal, the way the form does.
///
/// Empty or malformed input becomes zero.
pub fn coerce_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Coerces free-form text to a headcount. Malformed input counts as one person.
pub fn coerce_headcount(raw: &str) -> Headcount {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(n) => Headcount::clamped(n),
        Err(_) => {
            let amount = coerce_amount(trimmed).trunc();
            let fallback = if amount.is_sign_negative() { 1 } else { i64::MAX };
            Headcount::clamped(amount.to_i64().unwrap_or(fallback))
        }
    }
}

/// Interprets a checkbox-style value. Unrecognised text is treated as unchecked.
pub fn coerce_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "on"
    )
}
