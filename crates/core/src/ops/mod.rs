//! Operations over money values.
//!
//! - `rounding` - Currency-precision rounding under a chosen mode
//! - `allocation` - Lossless proportional splitting
//! - `aggregate` - Sum, minimum and maximum of collections
//! - `conversion` - Exchange through a rate table

pub mod aggregate;
pub mod allocation;
pub mod conversion;
pub mod rounding;

#[cfg(test)]
mod props;

pub use aggregate::{maximum, minimum, sum};
pub use allocation::allocate;
pub use conversion::{RateTable, convert};
pub use rounding::{round, round_amount, round_default};
