//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::{Currency, RoundingMode};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Currencies that codes are resolved against.
    #[serde(default)]
    pub currencies: Vec<Currency>,
    /// Exchange rates relative to a common base currency.
    #[serde(default)]
    pub rates: Vec<RateConfig>,
    /// Rounding configuration.
    #[serde(default)]
    pub rounding: RoundingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// One exchange rate entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RateConfig {
    /// Currency code.
    pub code: String,
    /// Units of this currency per unit of the base currency.
    pub value: Decimal,
}

/// Rounding configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundingConfig {
    /// Mode used when a caller does not pick one.
    #[serde(default)]
    pub mode: RoundingMode,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "tally_cli=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Builds configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or has the wrong shape.
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Looks up a configured currency by code (case-insensitive).
    #[must_use]
    pub fn currency(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
    }

    /// Rate entries as `(code, value)` pairs.
    pub fn rate_entries(&self) -> impl Iterator<Item = (String, Decimal)> + '_ {
        self.rates.iter().map(|r| (r.code.clone(), r.value))
    }
}
