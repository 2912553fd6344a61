//! Core monetary engine for Tally.
//!
//! This crate holds the value type and the pure calculations on it. It has
//! no I/O: configuration and logging live in the binaries.
//!
//! # Modules
//!
//! - `money` - The immutable `Money` value and its input validation
//! - `ops` - Rounding, allocation, aggregates and conversion
//! - `snapshot` - Flat storage records

pub mod money;
pub mod ops;
pub mod snapshot;

pub use money::{Money, money};
pub use ops::{
    RateTable, allocate, convert, maximum, minimum, round, round_amount, round_default, sum,
};
pub use snapshot::{Snapshot, from_snapshot, to_snapshot};
