//! Property-based tests for money operations.
//!
//! - Allocation preserves the total and honors zero ratios
//! - Rounding lands on the currency grid and is idempotent
//! - Same-currency arithmetic is exact

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use tally_shared::{Currency, MoneyError, RoundingMode};

use super::aggregate::sum;
use super::allocation::allocate;
use super::rounding::round;
use crate::money::Money;

fn usd() -> Arc<Currency> {
    Arc::new(Currency::new("USD", "en-US", 2))
}

/// Strategy to generate non-negative amounts with 0 to 4 fractional digits.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 0u32..=4).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Strategy to generate ratio vectors with at least one positive entry.
fn ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(0u32..1000, 1..12)
        .prop_filter("at least one positive ratio", |values| {
            values.iter().any(|v| *v > 0)
        })
        .prop_map(|values| values.into_iter().map(Decimal::from).collect())
}

/// Strategy to generate amounts over the whole 96-bit mantissa range, scale 0 to 28.
fn full_range_amount() -> impl Strategy<Value = Decimal> {
    (0i128..(1i128 << 96), 0u32..=28)
        .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale))
}

/// Strategy to generate whole-number ratios up to `u32::MAX`.
fn wide_ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(any::<u32>(), 1..8)
        .prop_filter("at least one positive ratio", |values| {
            values.iter().any(|v| *v > 0)
        })
        .prop_map(|values| values.into_iter().map(Decimal::from).collect())
}

/// Strategy to generate ratios with 64-bit mantissas and scale 0 to 10.
fn extreme_ratios() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec((any::<u64>(), 0u32..=10), 1..8)
        .prop_map(|values| {
            values
                .into_iter()
                .map(|(mantissa, scale)| Decimal::from_i128_with_scale(i128::from(mantissa), scale))
                .collect::<Vec<_>>()
        })
        .prop_filter("at least one positive ratio", |ratios| {
            ratios.iter().any(|r| *r > Decimal::ZERO)
        })
}

fn any_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(RoundingMode::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The shares of an allocation always sum to the original amount.
    #[test]
    fn prop_allocate_preserves_total(amount in amount(), ratios in ratios()) {
        let money = Money::new(amount, usd()).unwrap();
        let shares = allocate(&money, &ratios).unwrap();

        prop_assert_eq!(shares.len(), ratios.len());
        let total: Decimal = shares.iter().map(Money::amount).sum();
        prop_assert_eq!(total, amount, "shares {:?} lost value", shares);
    }

    /// Any representable amount splits exactly across 32-bit ratios.
    #[test]
    fn prop_allocate_preserves_full_range_total(
        amount in full_range_amount(),
        ratios in wide_ratios(),
    ) {
        let money = Money::new(amount, usd()).unwrap();
        let shares = allocate(&money, &ratios).unwrap();

        let total = shares
            .iter()
            .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.amount()))
            .unwrap();
        prop_assert_eq!(total, amount, "shares {:?} lost value", shares);
    }

    /// With extreme ratios an allocation either sums exactly or reports overflow.
    #[test]
    fn prop_allocate_is_exact_or_overflows(
        amount in full_range_amount(),
        ratios in extreme_ratios(),
    ) {
        let money = Money::new(amount, usd()).unwrap();
        match allocate(&money, &ratios) {
            Ok(shares) => {
                prop_assert_eq!(shares.len(), ratios.len());
                let total = shares
                    .iter()
                    .try_fold(Decimal::ZERO, |acc, s| acc.checked_add(s.amount()))
                    .unwrap();
                prop_assert_eq!(total, amount);
            }
            Err(err) => prop_assert_eq!(err, MoneyError::Overflow),
        }
    }

    /// Zero ratios always receive zero; positive inputs never go negative.
    #[test]
    fn prop_allocate_zero_ratios_get_nothing(amount in amount(), ratios in ratios()) {
        let money = Money::new(amount, usd()).unwrap();
        let shares = allocate(&money, &ratios).unwrap();

        for (share, ratio) in shares.iter().zip(&ratios) {
            prop_assert!(!share.is_negative());
            if ratio.is_zero() {
                prop_assert!(share.is_zero(), "zero ratio got {}", share.amount());
            }
        }
    }

    /// Shares differ from their exact value by at most one smallest unit.
    #[test]
    fn prop_allocate_shares_are_near_exact(amount in amount(), ratios in ratios()) {
        let money = Money::new(amount, usd()).unwrap();
        let shares = allocate(&money, &ratios).unwrap();
        let total: Decimal = ratios.iter().copied().sum();
        let unit = Decimal::new(1, amount.scale());

        for (share, ratio) in shares.iter().zip(&ratios) {
            let exact = amount * ratio / total;
            prop_assert!((share.amount() - exact).abs() <= unit);
        }
    }

    /// Rounded amounts sit on the currency grid and rounding twice changes nothing.
    #[test]
    fn prop_round_is_idempotent(amount in amount(), mode in any_mode()) {
        let money = Money::new(amount, usd()).unwrap();
        let once = round(&money, mode);
        let twice = round(&once, mode);

        prop_assert_eq!(once.amount().scale(), 2);
        prop_assert_eq!(once.amount(), twice.amount());
    }

    /// Rounding moves an amount by less than one minor unit.
    #[test]
    fn prop_round_stays_within_one_unit(amount in amount(), mode in any_mode()) {
        let money = Money::new(amount, usd()).unwrap();
        let rounded = round(&money, mode);
        prop_assert!((rounded.amount() - amount).abs() < Decimal::new(1, 2));
    }

    /// Adding then subtracting the same value is exact.
    #[test]
    fn prop_add_subtract_round_trip(a in amount(), b in amount()) {
        let usd = usd();
        let x = Money::new(a, usd.clone()).unwrap();
        let y = Money::new(b, usd).unwrap();

        let back = x.add(&y).unwrap().subtract(&y).unwrap();
        prop_assert_eq!(back.amount(), a);
        prop_assert_eq!(x.add(&y).unwrap(), y.add(&x).unwrap());
    }

    /// Summing a collection equals chaining pairwise additions.
    #[test]
    fn prop_sum_matches_pairwise_add(values in prop::collection::vec(amount(), 1..10)) {
        let usd = usd();
        let items: Vec<Money> = values
            .iter()
            .map(|v| Money::new(*v, usd.clone()).unwrap())
            .collect();

        let chained = items[1..]
            .iter()
            .try_fold(items[0].clone(), |acc, m| acc.add(m))
            .unwrap();
        prop_assert_eq!(sum(&items).unwrap(), chained);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// 0.01 over three equal ratios: the single unit goes to the first share.
    #[test]
    fn test_allocate_penny_by_3() {
        let money = Money::new(dec!(0.01), usd()).unwrap();
        let shares = allocate(&money, &[dec!(1), dec!(1), dec!(1)]).unwrap();
        let amounts: Vec<_> = shares.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![dec!(0.01), dec!(0), dec!(0)]);
    }

    /// Rounding a value already on the grid only pads the scale.
    #[test]
    fn test_round_on_grid() {
        let money = Money::new(dec!(24.99), usd()).unwrap();
        for mode in RoundingMode::ALL {
            assert_eq!(round(&money, mode).amount(), dec!(24.99));
        }
    }
}
