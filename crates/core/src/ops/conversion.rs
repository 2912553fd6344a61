//! Currency conversion through an externally supplied rate table.
//!
//! Rates are quoted against one common base: `USD = 1`, `EUR = 0.9155`
//! means one USD buys 0.9155 EUR. Conversion goes through the base:
//! `amount / rate(source) * rate(target)`. The result is not rounded.

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyError, MoneyResult};

use crate::money::Money;

/// Exchange rates keyed by currency code.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rate for `code`, replacing any previous value.
    pub fn insert(&mut self, code: impl Into<String>, rate: Decimal) {
        self.rates.insert(code.into(), rate);
    }

    /// Returns the rate for `code`, if present.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(code).copied()
    }

    /// Number of rates in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table holds no rates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn positive_rate(&self, code: &str) -> MoneyResult<Decimal> {
        let rate = self
            .rate(code)
            .ok_or_else(|| MoneyError::MissingExchangeRate(code.to_string()))?;
        if rate <= Decimal::ZERO {
            return Err(MoneyError::InvalidExchangeRate {
                code: code.to_string(),
                rate,
            });
        }
        Ok(rate)
    }
}

impl<S: Into<String>> FromIterator<(S, Decimal)> for RateTable {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        Self {
            rates: iter.into_iter().map(|(code, rate)| (code.into(), rate)).collect(),
        }
    }
}

/// Converts `money` into `target` using `rates`.
///
/// # Errors
///
/// Returns `MissingExchangeRate` if the target or source code has no rate
/// (the target is checked first), and `InvalidExchangeRate` if a rate is not
/// strictly positive.
pub fn convert(money: &Money, target: Arc<Currency>, rates: &RateTable) -> MoneyResult<Money> {
    let target_rate = rates.positive_rate(target.code())?;
    let source_rate = rates.positive_rate(money.currency().code())?;

    if money.currency().same_code(&target) {
        return Ok(Money::from_trusted(money.amount(), target));
    }

    let converted = money
        .amount()
        .checked_div(source_rate)
        .and_then(|base| base.checked_mul(target_rate))
        .ok_or(MoneyError::Overflow)?;

    Ok(Money::from_trusted(converted, target))
}
