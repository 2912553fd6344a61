//! Money value model.
//!
//! This module implements the currency-safe value type:
//! - `Money` construction from raw or exact input
//! - Arithmetic and comparison guarded by one currency contract
//! - Shared precondition checks

pub mod validation;
pub mod value;

pub use value::{Money, money};
