//! Money error types.
//!
//! Every error is reported at the point of the violated precondition.
//! An operation either returns a complete value or one of these errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by money construction, arithmetic and the helpers built on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Construction Errors ==========
    /// Currency code is empty.
    #[error("Invalid currency")]
    InvalidCurrency,

    /// Raw amount is not a finite, non-negative number.
    #[error("Amount must be a non-negative number, got {0}")]
    InvalidAmount(String),

    // ========== Arithmetic Errors ==========
    /// Percentage argument is negative.
    #[error("Percentage must be non-negative, got {0}")]
    InvalidPercentage(Decimal),

    /// Binary operation between two different currencies.
    #[error("Currencies must match for this operation: {expected} vs {found}")]
    CurrencyMismatch {
        /// Currency code of the receiver.
        expected: String,
        /// Currency code of the other operand.
        found: String,
    },

    /// Result does not fit in the decimal representation.
    #[error("Arithmetic overflow")]
    Overflow,

    // ========== Allocation Errors ==========
    /// Ratio vector is empty, has a negative entry, or has no positive entry.
    #[error("Invalid ratios: {0}")]
    InvalidRatios(String),

    // ========== Collection Errors ==========
    /// Collection helper called with no elements.
    #[error("No Money objects provided")]
    EmptyCollection,

    /// Collection holds more than one currency.
    #[error("All Money objects must have the same currency: {expected} vs {found}")]
    MixedCurrency {
        /// Currency code of the first element.
        expected: String,
        /// First differing currency code.
        found: String,
    },

    // ========== Conversion Errors ==========
    /// No rate for the currency in the rate table.
    #[error("Exchange rate for currency {0} not available")]
    MissingExchangeRate(String),

    /// Rate is zero or negative.
    #[error("Exchange rate for currency {code} must be positive, got {rate}")]
    InvalidExchangeRate {
        /// Currency code of the rate.
        code: String,
        /// The offending rate.
        rate: Decimal,
    },
}

impl MoneyError {
    /// Returns a stable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCurrency => "INVALID_CURRENCY",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidPercentage(_) => "INVALID_PERCENTAGE",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::Overflow => "OVERFLOW",
            Self::InvalidRatios(_) => "INVALID_RATIOS",
            Self::EmptyCollection => "EMPTY_COLLECTION",
            Self::MixedCurrency { .. } => "MIXED_CURRENCY",
            Self::MissingExchangeRate(_) => "MISSING_EXCHANGE_RATE",
            Self::InvalidExchangeRate { .. } => "INVALID_EXCHANGE_RATE",
        }
    }

    /// Returns true if the error comes from mixing currencies.
    #[must_use]
    pub const fn is_currency_error(&self) -> bool {
        matches!(
            self,
            Self::CurrencyMismatch { .. } | Self::MixedCurrency { .. }
        )
    }
}
