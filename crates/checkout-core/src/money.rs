//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    549.99 is stored as 549.990000000000009094947...  ❌ WRONG!          │
//! │                                                                         │
//! │  THE INTEGER CENTS PROBLEM                                              │
//! │    15% off $549.99 = $467.4915  → cents would lose the 0.0015          │
//! │    before the line is multiplied by its quantity                       │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimal, truncated once                           │
//! │    Unit prices keep every digit, the basket total is truncated         │
//! │    (never rounded) to 2 places at the very end                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let price = Money::from_cents(10950); // $109.50
//! let doubled = price * 2;              // $219.00
//! let total = doubled + Money::from_cents(3000);
//!
//! assert_eq!(total, Money::from_cents(24900));
//! assert_eq!(total.to_string(), "$249.00");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::DiscountRate;
use crate::MONEY_SCALE;

// =============================================================================
// Money Type
// =============================================================================

/// An exact monetary amount in the store currency.
///
/// ## Design Decisions
/// - **Decimal (signed)**: a misconfigured flat discount can produce a
///   negative unit price, and that has to be representable
/// - **Full precision**: no rounding happens until [`Money::truncate_to_cents`]
/// - **Serde**: serialized as a decimal string (`"549.99"`)
///
/// ## Where Money is Used
/// ```text
/// Item::price() ──┬──► BulkDiscount::price_per_unit() ──┐
///                 │                                     ▼
///                 └──────────────────────► PricingEngine::item_price_per_unit()
///                                                       │
///                                          × paid quantity, summed
///                                                       │
///                                                       ▼
///                                     PricingEngine::total() (truncated)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::from_cents(54999);
    /// assert_eq!(price.amount(), dec!(549.99));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, MONEY_SCALE))
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Drops every digit beyond the second decimal place.
    ///
    /// Rounds toward zero, so a sub-cent remainder can never push a total up.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use rust_decimal_macros::dec;
    ///
    /// let total = Money::new(dec!(24.999));
    /// assert_eq!(total.truncate_to_cents(), Money::new(dec!(24.99)));
    ///
    /// let refund = Money::new(dec!(-10.005));
    /// assert_eq!(refund.truncate_to_cents(), Money::new(dec!(-10.00)));
    /// ```
    pub fn truncate_to_cents(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero),
        )
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(10950); // $109.50
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_cents(21900));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// Unlike a tax calculation nothing is rounded here; the result keeps
    /// every fractional digit of `amount × (1 − rate)`.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::types::DiscountRate;
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::new(dec!(549.99));
    /// let discounted = price.apply_discount_rate(DiscountRate::from_bps(1500)); // 15% off
    /// assert_eq!(discounted, Money::new(dec!(467.4915)));
    /// ```
    pub fn apply_discount_rate(&self, rate: DiscountRate) -> Money {
        // 10_000 bps = 1.0000, so the remaining share is (10_000 - bps) at scale 4
        let remaining = Decimal::new(10_000 - i64::from(rate.bps()), 4);
        Money(self.0 * remaining)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with exactly two decimals, truncating any sub-cent digits.
///
/// ## Note
/// Uses a fixed `$` symbol. `PricingConfig::format_money` honours the
/// configured currency symbol instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.truncate_to_cents().0;
        shown.rescale(MONEY_SCALE);
        let sign = if shown.is_sign_negative() && !shown.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}${}", sign, shown.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count (for line totals).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), dec!(10.99));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::new(dec!(249))), "$249.00");
        assert_eq!(format!("{}", Money::new(dec!(-10))), "-$10.00");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_display_truncates_sub_cent_digits() {
        assert_eq!(format!("{}", Money::new(dec!(467.4915))), "$467.49");
        assert_eq!(format!("{}", Money::new(dec!(24.999))), "$24.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));

        let mut running = Money::zero();
        running += a;
        running -= b;
        assert_eq!(running, b);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::from_cents(10950), Money::from_cents(3000)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(13950));

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::new(dec!(249)), Money::new(dec!(249.00)));
    }

    #[test]
    fn test_truncate_never_rounds_up() {
        assert_eq!(
            Money::new(dec!(1399.999)).truncate_to_cents(),
            Money::new(dec!(1399.99))
        );
        assert_eq!(
            Money::new(dec!(0.009)).truncate_to_cents(),
            Money::zero()
        );
    }

    #[test]
    fn test_apply_discount_rate() {
        let price = Money::new(dec!(30.00));
        assert_eq!(
            price.apply_discount_rate(DiscountRate::from_bps(1667)),
            Money::new(dec!(24.999))
        );
        assert_eq!(
            price.apply_discount_rate(DiscountRate::zero()),
            price
        );
        assert!(price
            .apply_discount_rate(DiscountRate::from_bps(10_000))
            .is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(54999)).unwrap();
        assert_eq!(json, "\"549.99\"");
    }
}
