//! Money value: an exact decimal amount tied to a currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every operation returns a new value; nothing is mutated in place.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use tally_shared::types::decimal::{pad_scale, parse_raw, percent_of, pow10};
use tally_shared::{Currency, MoneyError, MoneyResult, RoundingMode};

use super::validation::{
    ensure_same_currency, validate_amount, validate_currency, validate_percentage,
};

/// A monetary amount in a specific currency.
///
/// The amount is stored without precision loss, independent of the
/// currency's minor-unit precision: `24.2656 USD` is a valid value.
///
/// Construction rejects negative amounts, but arithmetic results are not
/// re-validated, so `subtract` may legitimately return a negative value.
#[derive(Debug, Clone)]
pub struct Money {
    amount: Decimal,
    currency: Arc<Currency>,
}

impl Money {
    /// Creates a new money value from an exact decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` for an empty currency code and
    /// `InvalidAmount` for a negative amount.
    pub fn new(amount: Decimal, currency: Arc<Currency>) -> MoneyResult<Self> {
        validate_currency(&currency)?;
        validate_amount(amount)?;
        Ok(Self { amount, currency })
    }

    /// Creates a new money value from a raw binary float.
    ///
    /// The float is read by its shortest decimal form, so `24.995` is stored
    /// as exactly `24.995`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCurrency` for an empty currency code and
    /// `InvalidAmount` for NaN, infinite, out-of-range or negative input.
    pub fn from_f64(amount: f64, currency: Arc<Currency>) -> MoneyResult<Self> {
        validate_currency(&currency)?;
        let parsed =
            parse_raw(amount).ok_or_else(|| MoneyError::InvalidAmount(amount.to_string()))?;
        Self::new(parsed, currency)
    }

    /// Creates a money value from an integer count of minor units.
    ///
    /// `1003` cents of USD is `10.03 USD`.
    pub fn from_minor_units(units: i64, currency: Arc<Currency>) -> MoneyResult<Self> {
        validate_currency(&currency)?;
        let amount =
            Decimal::try_new(units, currency.precision()).map_err(|_| MoneyError::Overflow)?;
        Self::new(amount, currency)
    }

    /// Builds a value without validation. Used for operation results.
    pub(crate) fn from_trusted(amount: Decimal, currency: Arc<Currency>) -> Self {
        Self { amount, currency }
    }

    /// Same currency, different amount.
    pub(crate) fn with_amount(&self, amount: Decimal) -> Self {
        Self::from_trusted(amount, Arc::clone(&self.currency))
    }

    /// Returns the exact amount in major units (dollars for USD).
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency descriptor.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the shared handle to the currency descriptor.
    #[must_use]
    pub const fn shared_currency(&self) -> &Arc<Currency> {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Exact amount expressed in minor units (cents for USD), not rounded.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` if the scaled amount does not fit.
    pub fn minor_units(&self) -> MoneyResult<Decimal> {
        pow10(self.currency.precision())
            .and_then(|factor| self.amount.checked_mul(factor))
            .ok_or(MoneyError::Overflow)
    }

    /// Runs `op` on both amounts once the currency contract holds.
    fn checked_binary<T>(
        &self,
        other: &Self,
        op: impl FnOnce(Decimal, Decimal) -> T,
    ) -> MoneyResult<T> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(op(self.amount, other.amount))
    }

    /// Adds another money value of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currency codes differ.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        let sum = self
            .checked_binary(other, Decimal::checked_add)?
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(sum))
    }

    /// Subtracts another money value of the same currency.
    ///
    /// The result may be negative.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currency codes differ.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        let difference = self
            .checked_binary(other, Decimal::checked_sub)?
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(difference))
    }

    /// Scales the amount by `factor`.
    pub fn multiply(&self, factor: Decimal) -> MoneyResult<Self> {
        let product = self
            .amount
            .checked_mul(factor)
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(product))
    }

    /// Adds `percent`% of the amount, e.g. `18` for 18% VAT.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentage` if `percent` is negative.
    pub fn add_percentage(&self, percent: Decimal) -> MoneyResult<Self> {
        validate_percentage(percent)?;
        let result = percent_of(self.amount, percent)
            .and_then(|part| self.amount.checked_add(part))
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(result))
    }

    /// Subtracts `percent`% of the amount, e.g. `20` for a 20% discount.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPercentage` if `percent` is negative.
    pub fn subtract_percentage(&self, percent: Decimal) -> MoneyResult<Self> {
        validate_percentage(percent)?;
        let result = percent_of(self.amount, percent)
            .and_then(|part| self.amount.checked_sub(part))
            .ok_or(MoneyError::Overflow)?;
        Ok(self.with_amount(result))
    }

    /// Orders two money values of the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyMismatch` if the currency codes differ.
    pub fn compare(&self, other: &Self) -> MoneyResult<Ordering> {
        self.checked_binary(other, |a, b| a.cmp(&b))
    }

    /// Exact equality of amount and currency code.
    ///
    /// Never fails: values in different currencies are simply not equal.
    #[must_use]
    pub fn is_equal_to(&self, other: &Self) -> bool {
        self == other
    }

    /// Returns true if this value is strictly less than `other`.
    pub fn is_less_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_lt())
    }

    /// Returns true if this value is strictly greater than `other`.
    pub fn is_greater_than(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_gt())
    }

    /// Returns true if this value is less than or equal to `other`.
    pub fn is_less_than_or_equal_to(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_le())
    }

    /// Returns true if this value is greater than or equal to `other`.
    pub fn is_greater_than_or_equal_to(&self, other: &Self) -> MoneyResult<bool> {
        Ok(self.compare(other)?.is_ge())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency.same_code(&other.currency)
    }
}

impl Eq for Money {}

impl PartialOrd for Money {
    /// `None` across currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for Money {
    /// Amount rounded half-up to currency precision, then the code: `25.00 USD`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self.currency.precision();
        let shown = self
            .amount
            .round_dp_with_strategy(precision, RoundingMode::HalfUp.strategy());
        write!(f, "{} {}", pad_scale(shown, precision), self.currency.code())
    }
}

/// Factory for money values from raw numeric input.
///
/// # Errors
///
/// Returns `InvalidCurrency` for an empty currency code and `InvalidAmount`
/// for NaN, infinite or negative input.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rust_decimal_macros::dec;
/// use tally_core::money;
/// use tally_shared::Currency;
///
/// let usd = Arc::new(Currency::new("USD", "en-US", 2));
/// let price = money(10.01, &usd).unwrap();
/// let total = price.add(&money(14.2556, &usd).unwrap()).unwrap();
/// assert_eq!(total.amount(), dec!(24.2656));
/// ```
pub fn money(amount: f64, currency: &Arc<Currency>) -> MoneyResult<Money> {
    Money::from_f64(amount, Arc::clone(currency))
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
