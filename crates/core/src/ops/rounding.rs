//! Rounding engine: maps exact amounts onto a currency's minor-unit grid.
//!
//! The amount is cut to `precision` fractional digits under the selected
//! policy. Only exact halves distinguish the three `Half*` modes, and only
//! `HalfEven` looks at the parity of the kept digit.

use rust_decimal::Decimal;
use tally_shared::RoundingMode;
use tally_shared::types::decimal::pad_scale;

use crate::money::Money;

/// Rounds `money` to its currency precision under `mode`.
///
/// The result keeps the currency and carries exactly `precision` fractional
/// digits (`25` at precision 2 is `25.00`). Amounts smaller than half a
/// minor unit round to zero under the nearest-neighbor modes.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rust_decimal_macros::dec;
/// use tally_core::{money, round};
/// use tally_shared::{Currency, RoundingMode};
///
/// let usd = Arc::new(Currency::new("USD", "en-US", 2));
/// let m = money(24.995, &usd).unwrap();
/// assert_eq!(round(&m, RoundingMode::HalfEven).amount(), dec!(25.00));
/// ```
#[must_use]
pub fn round(money: &Money, mode: RoundingMode) -> Money {
    money.with_amount(round_amount(
        money.amount(),
        money.currency().precision(),
        mode,
    ))
}

/// Rounds `money` with the default policy (half away from zero).
#[must_use]
pub fn round_default(money: &Money) -> Money {
    round(money, RoundingMode::default())
}

/// Rounds a bare decimal to `precision` fractional digits under `mode`.
#[must_use]
pub fn round_amount(amount: Decimal, precision: u32, mode: RoundingMode) -> Decimal {
    let rounded = amount.round_dp_with_strategy(precision, mode.strategy());
    pad_scale(rounded, precision)
}
