//! Proportional allocation of one money value across a ratio vector.
//!
//! Allocation never loses or creates value:
//! 1. Floor each exact share at the scale of the input amount
//! 2. Compute the remainder (amount - sum of floors)
//! 3. Hand out the remainder one smallest unit at a time, left to right,
//!    skipping zero ratios
//!
//! Shares are computed on integer mantissas, so the floors are exact even
//! when `amount * ratio` needs more digits than a `Decimal` can hold.
//!
//! The tie-break is strictly positional. Two ratio vectors that floor to the
//! same base shares distribute the remainder identically, regardless of how
//! close each share was to rounding up.

use rust_decimal::Decimal;
use tally_shared::types::decimal::mantissa_at;
use tally_shared::{MoneyError, MoneyResult};

use crate::money::Money;
use crate::money::validation::validate_ratios;

/// Splits `money` into `ratios.len()` shares that sum exactly to it.
///
/// Ratios may be written as percentages or plain weights: `[25, 75]` and
/// `[1, 3]` allocate the same way. Zero ratios are allowed and always yield
/// zero. The smallest unit handed out is the last digit of the input amount
/// (`1` for `1003`, `0.01` for `10.03`).
///
/// # Errors
///
/// Returns `InvalidRatios` if `ratios` is empty, contains a negative entry,
/// or has no positive entry. Returns `Overflow` if the ratios are too large
/// or too finely scaled to be weighed exactly in `i128`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rust_decimal_macros::dec;
/// use tally_core::{allocate, money};
/// use tally_shared::Currency;
///
/// let usd = Arc::new(Currency::new("USD", "en-US", 2));
/// let bill = money(1003.0, &usd).unwrap();
/// let shares = allocate(&bill, &[dec!(0), dec!(50), dec!(50)]).unwrap();
/// let amounts: Vec<_> = shares.iter().map(|s| s.amount()).collect();
/// assert_eq!(amounts, vec![dec!(0), dec!(502), dec!(501)]);
/// ```
pub fn allocate(money: &Money, ratios: &[Decimal]) -> MoneyResult<Vec<Money>> {
    validate_ratios(ratios)?;

    let amount = money.amount();
    let scale = amount.scale();
    let units = amount.mantissa();

    let weights = integer_weights(ratios)?;
    let total = weights
        .iter()
        .try_fold(0i128, |acc, w| acc.checked_add(*w))
        .ok_or(MoneyError::Overflow)?;

    // units = quotient * total + rest, with 0 <= rest < total
    let quotient = units.div_euclid(total);
    let rest = units.rem_euclid(total);

    let mut shares = weights
        .iter()
        .map(|weight| floor_share(quotient, rest, *weight, total))
        .collect::<MoneyResult<Vec<_>>>()?;

    let allocated = shares
        .iter()
        .try_fold(0i128, |acc, s| acc.checked_add(*s))
        .ok_or(MoneyError::Overflow)?;
    let mut remainder = units - allocated;

    for (share, weight) in shares.iter_mut().zip(&weights) {
        if remainder == 0 {
            break;
        }
        if *weight > 0 {
            *share += 1;
            remainder -= 1;
        }
    }
    if remainder != 0 {
        return Err(MoneyError::Overflow);
    }

    shares
        .into_iter()
        .map(|share| {
            Decimal::try_from_i128_with_scale(share, scale)
                .map(|amount| money.with_amount(amount))
                .map_err(|_| MoneyError::Overflow)
        })
        .collect()
}

/// Ratios as integers at their widest common scale.
fn integer_weights(ratios: &[Decimal]) -> MoneyResult<Vec<i128>> {
    let scale = ratios.iter().map(Decimal::scale).max().unwrap_or(0);
    ratios
        .iter()
        .map(|ratio| mantissa_at(*ratio, scale).ok_or(MoneyError::Overflow))
        .collect()
}

/// `floor(units * weight / total)` given `units = quotient * total + rest`.
fn floor_share(quotient: i128, rest: i128, weight: i128, total: i128) -> MoneyResult<i128> {
    let whole = quotient.checked_mul(weight);
    let part = rest.checked_mul(weight).map(|p| p / total);
    whole
        .zip(part)
        .and_then(|(whole, part)| whole.checked_add(part))
        .ok_or(MoneyError::Overflow)
}
