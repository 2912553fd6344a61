//! Decimal amount helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` values: exact base-10 numbers with up
//! to 28 fractional digits. The helpers here cover the few operations the
//! engine needs beyond the plain `Decimal` API, all without panicking.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Largest scale a `Decimal` can carry.
pub const MAX_SCALE: u32 = 28;

/// Converts a raw binary float into a decimal without carrying its binary
/// representation error.
///
/// The float is read through its shortest round-trip text form, so `24.995`
/// becomes exactly `24.995` rather than `24.99499999999999886...`.
/// Returns `None` for NaN, infinities and magnitudes outside `Decimal` range.
#[must_use]
pub fn parse_raw(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string()).ok()
}

/// Integer mantissa of `value` rescaled to `scale` fractional digits.
///
/// `10.03` at scale 4 is `100300`. Returns `None` if `scale` is below the
/// value's own scale (digits would be lost) or the result leaves `i128`.
#[must_use]
pub fn mantissa_at(value: Decimal, scale: u32) -> Option<i128> {
    let widen = scale.checked_sub(value.scale())?;
    10i128
        .checked_pow(widen)
        .and_then(|factor| value.mantissa().checked_mul(factor))
}

/// `value * percent / 100`, or `None` on overflow.
#[must_use]
pub fn percent_of(value: Decimal, percent: Decimal) -> Option<Decimal> {
    value
        .checked_mul(percent)?
        .checked_div(Decimal::ONE_HUNDRED)
}

/// `10^exp`, or `None` past the decimal range.
#[must_use]
pub fn pow10(exp: u32) -> Option<Decimal> {
    (0..exp).try_fold(Decimal::ONE, |acc, _| acc.checked_mul(Decimal::TEN))
}

/// Pads `value` with trailing zeros up to `scale` fractional digits.
///
/// Only ever widens the scale; a value already at or past `scale` is
/// returned as is.
#[must_use]
pub fn pad_scale(value: Decimal, scale: u32) -> Decimal {
    if value.scale() >= scale || scale > MAX_SCALE {
        return value;
    }
    let mut padded = value;
    padded.rescale(scale);
    padded
}
