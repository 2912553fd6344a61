//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides the leaf types used by the money engine:
//! - Decimal helpers that keep money math in base 10
//! - The currency descriptor
//! - The canonical rounding mode
//! - The money error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, RoundingMode};
