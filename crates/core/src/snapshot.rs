//! Flat storage record for money values.
//!
//! A snapshot carries the four scalars needed to rebuild a value:
//! amount, currency code, precision and locale.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tally_shared::{Currency, MoneyResult};

use crate::money::Money;

/// Storage form of a money value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Exact amount in major units.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Currency precision.
    pub precision: u32,
    /// Currency display locale.
    pub locale: String,
}

impl From<&Money> for Snapshot {
    fn from(money: &Money) -> Self {
        let currency = money.currency();
        Self {
            amount: money.amount(),
            currency: currency.code().to_string(),
            precision: currency.precision(),
            locale: currency.locale().to_string(),
        }
    }
}

/// Converts a money value into its storage record.
#[must_use]
pub fn to_snapshot(money: &Money) -> Snapshot {
    Snapshot::from(money)
}

/// Rebuilds a money value from its storage record.
///
/// The snapshot is validated like raw input, so a stored negative balance
/// is rejected on restore.
///
/// # Errors
///
/// Returns `InvalidCurrency` for an empty code and `InvalidAmount` for a
/// negative amount.
pub fn from_snapshot(snapshot: Snapshot) -> MoneyResult<Money> {
    let currency = Currency::new(snapshot.currency, snapshot.locale, snapshot.precision);
    Money::new(snapshot.amount, Arc::new(currency))
}
