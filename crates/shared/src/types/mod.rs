//! Common types used across the engine.

pub mod currency;
pub mod decimal;
pub mod rounding;

pub use currency::Currency;
pub use rounding::RoundingMode;
