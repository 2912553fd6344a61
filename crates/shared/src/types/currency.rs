//! Currency descriptor.
//!
//! A currency is identified by its code alone. Precision and locale travel
//! with it so that rounding and formatting need no registry lookup.

use serde::{Deserialize, Serialize};

/// A currency with its code, display locale and minor-unit precision.
///
/// Descriptors are immutable once built and are shared between money values
/// (wrap them in `Arc` to hand the same descriptor to many values).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    code: String,
    #[serde(default)]
    locale: String,
    precision: u32,
}

impl Currency {
    /// Creates a new currency descriptor.
    ///
    /// No validation happens here; an empty code is rejected when the
    /// currency is first used to build money.
    #[must_use]
    pub fn new(code: impl Into<String>, locale: impl Into<String>, precision: u32) -> Self {
        Self {
            code: code.into(),
            locale: locale.into(),
            precision,
        }
    }

    /// Currency code, e.g. "USD".
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display locale, opaque to the engine.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Number of minor-unit digits (2 for cents, 0 for yen).
    #[must_use]
    pub const fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns true if both descriptors carry the same code.
    #[must_use]
    pub fn same_code(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_new() {
        let usd = Currency::new("USD", "en-US", 2);
        assert_eq!(usd.code(), "USD");
        assert_eq!(usd.locale(), "en-US");
        assert_eq!(usd.precision(), 2);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::new("JPY", "ja-JP", 0).to_string(), "JPY");
    }

    #[test]
    fn test_same_code_ignores_locale_and_precision() {
        let usd = Currency::new("USD", "en-US", 2);
        let usd_other = Currency::new("USD", "es-US", 4);
        let eur = Currency::new("EUR", "de-DE", 2);

        assert!(usd.same_code(&usd_other));
        assert!(!usd.same_code(&eur));
        assert_ne!(usd, usd_other);
    }

    #[test]
    fn test_currency_deserialize_without_locale() {
        let currency: Currency =
            serde_json::from_str(r#"{"code":"UGX","precision":0}"#).unwrap();
        assert_eq!(currency.code(), "UGX");
        assert_eq!(currency.locale(), "");
        assert_eq!(currency.precision(), 0);
    }
}
