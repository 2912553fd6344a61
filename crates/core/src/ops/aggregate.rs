//! Collection folds over money values: sum, minimum, maximum.

use rust_decimal::Decimal;
use tally_shared::{MoneyError, MoneyResult};

use crate::money::Money;
use crate::money::validation::validate_same_currency;

/// Sums a collection of money values sharing one currency.
///
/// # Errors
///
/// Returns `EmptyCollection` for an empty slice and `MixedCurrency` if any
/// element's currency code differs from the first.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rust_decimal_macros::dec;
/// use tally_core::{money, sum};
/// use tally_shared::Currency;
///
/// let usd = Arc::new(Currency::new("USD", "en-US", 2));
/// let items = [
///     money(100.0, &usd).unwrap(),
///     money(24.99, &usd).unwrap(),
///     money(18.25, &usd).unwrap(),
/// ];
/// assert_eq!(sum(&items).unwrap().amount(), dec!(143.24));
/// ```
pub fn sum(values: &[Money]) -> MoneyResult<Money> {
    let first = validate_same_currency(values)?;
    let total = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, m| acc.checked_add(m.amount()))
        .ok_or(MoneyError::Overflow)?;
    Ok(first.with_amount(total))
}

/// Returns the smallest value; ties keep the earliest element.
///
/// # Errors
///
/// Returns `EmptyCollection` for an empty slice and `MixedCurrency` if the
/// currencies differ.
pub fn minimum(values: &[Money]) -> MoneyResult<Money> {
    extreme(values, |candidate, best| candidate.amount() < best.amount())
}

/// Returns the largest value; ties keep the earliest element.
///
/// # Errors
///
/// Returns `EmptyCollection` for an empty slice and `MixedCurrency` if the
/// currencies differ.
pub fn maximum(values: &[Money]) -> MoneyResult<Money> {
    extreme(values, |candidate, best| candidate.amount() > best.amount())
}

fn extreme(values: &[Money], replaces: impl Fn(&Money, &Money) -> bool) -> MoneyResult<Money> {
    let first = validate_same_currency(values)?;
    let best = values
        .iter()
        .skip(1)
        .fold(first, |best, m| if replaces(m, best) { m } else { best });
    Ok(best.clone())
}
