//! Precondition checks shared by money construction and the helpers built on it.

use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyError, MoneyResult};

use super::Money;

/// Validates that a currency has a non-empty code.
///
/// # Errors
///
/// Returns `InvalidCurrency` if the code is empty.
pub fn validate_currency(currency: &Currency) -> MoneyResult<()> {
    if currency.code().is_empty() {
        return Err(MoneyError::InvalidCurrency);
    }
    Ok(())
}

/// Validates that a raw amount is non-negative.
///
/// Negative zero compares equal to zero and is accepted.
pub fn validate_amount(amount: Decimal) -> MoneyResult<()> {
    if amount < Decimal::ZERO {
        return Err(MoneyError::InvalidAmount(amount.to_string()));
    }
    Ok(())
}

/// Validates that a percentage is non-negative.
pub fn validate_percentage(percent: Decimal) -> MoneyResult<()> {
    if percent < Decimal::ZERO {
        return Err(MoneyError::InvalidPercentage(percent));
    }
    Ok(())
}

/// The currency contract for every binary money operation.
///
/// Currencies match when their codes match; locale and precision are not compared.
pub fn ensure_same_currency(expected: &Currency, found: &Currency) -> MoneyResult<()> {
    if !expected.same_code(found) {
        return Err(MoneyError::CurrencyMismatch {
            expected: expected.code().to_string(),
            found: found.code().to_string(),
        });
    }
    Ok(())
}

/// Validates that a money collection is non-empty.
pub fn validate_non_empty(values: &[Money]) -> MoneyResult<()> {
    if values.is_empty() {
        return Err(MoneyError::EmptyCollection);
    }
    Ok(())
}

/// Validates that a money collection is non-empty and holds a single currency.
///
/// Returns the first element so callers can fold from it.
pub fn validate_same_currency(values: &[Money]) -> MoneyResult<&Money> {
    validate_non_empty(values)?;
    let first = &values[0];

    if let Some(other) = values
        .iter()
        .find(|m| !m.currency().same_code(first.currency()))
    {
        return Err(MoneyError::MixedCurrency {
            expected: first.currency().code().to_string(),
            found: other.currency().code().to_string(),
        });
    }

    Ok(first)
}

/// Validates an allocation ratio vector.
///
/// The vector must be non-empty, free of negative entries, and hold at
/// least one strictly positive entry.
pub fn validate_ratios(ratios: &[Decimal]) -> MoneyResult<()> {
    if ratios.is_empty() {
        return Err(MoneyError::InvalidRatios("ratio list is empty".to_string()));
    }
    if let Some(negative) = ratios.iter().find(|r| **r < Decimal::ZERO) {
        return Err(MoneyError::InvalidRatios(format!(
            "ratio {negative} is negative"
        )));
    }
    if !ratios.iter().any(|r| *r > Decimal::ZERO) {
        return Err(MoneyError::InvalidRatios(
            "at least one ratio must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use rust_decimal_macros::dec;

    fn usd() -> Arc<Currency> {
        Arc::new(Currency::new("USD", "en-US", 2))
    }

    fn eur() -> Arc<Currency> {
        Arc::new(Currency::new("EUR", "de-DE", 2))
    }

    #[test]
    fn test_validate_currency() {
        assert!(validate_currency(&usd()).is_ok());
        assert_eq!(
            validate_currency(&Currency::new("", "en-US", 2)),
            Err(MoneyError::InvalidCurrency)
        );
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(dec!(0)).is_ok());
        assert!(validate_amount(dec!(-0)).is_ok());
        assert!(validate_amount(dec!(100.25)).is_ok());
        assert_eq!(
            validate_amount(dec!(-100)),
            Err(MoneyError::InvalidAmount("-100".to_string()))
        );
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage(dec!(0)).is_ok());
        assert!(validate_percentage(dec!(18)).is_ok());
        assert_eq!(
            validate_percentage(dec!(-1)),
            Err(MoneyError::InvalidPercentage(dec!(-1)))
        );
    }

    #[test]
    fn test_ensure_same_currency() {
        assert!(ensure_same_currency(&usd(), &usd()).is_ok());
        assert!(
            ensure_same_currency(&usd(), &Currency::new("USD", "es-US", 2)).is_ok(),
            "locale is not part of currency identity"
        );
        assert_eq!(
            ensure_same_currency(&usd(), &eur()),
            Err(MoneyError::CurrencyMismatch {
                expected: "USD".to_string(),
                found: "EUR".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_non_empty() {
        assert_eq!(validate_non_empty(&[]), Err(MoneyError::EmptyCollection));
        let one = [Money::new(dec!(1), usd()).unwrap()];
        assert!(validate_non_empty(&one).is_ok());
    }

    #[test]
    fn test_validate_same_currency() {
        let usd = usd();
        let values = [
            Money::new(dec!(100), usd.clone()).unwrap(),
            Money::new(dec!(24.99), usd.clone()).unwrap(),
        ];
        assert_eq!(validate_same_currency(&values).unwrap().amount(), dec!(100));

        let mixed = [
            Money::new(dec!(100), usd.clone()).unwrap(),
            Money::new(dec!(24.99), eur()).unwrap(),
            Money::new(dec!(18.25), usd).unwrap(),
        ];
        assert_eq!(
            validate_same_currency(&mixed).unwrap_err(),
            MoneyError::MixedCurrency {
                expected: "USD".to_string(),
                found: "EUR".to_string(),
            }
        );
        assert_eq!(
            validate_same_currency(&[]).unwrap_err(),
            MoneyError::EmptyCollection
        );
    }

    #[test]
    fn test_validate_ratios() {
        assert!(validate_ratios(&[dec!(1), dec!(3)]).is_ok());
        assert!(validate_ratios(&[dec!(0), dec!(50), dec!(50)]).is_ok());
        assert!(matches!(
            validate_ratios(&[]),
            Err(MoneyError::InvalidRatios(_))
        ));
        assert!(matches!(
            validate_ratios(&[dec!(0), dec!(0)]),
            Err(MoneyError::InvalidRatios(_))
        ));
        assert!(matches!(
            validate_ratios(&[dec!(2), dec!(-1)]),
            Err(MoneyError::InvalidRatios(_))
        ));
    }
}
