//! # Pricing Rules
//!
//! The closed set of promotions the engine understands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                                                                   │
//! │  ├── PayForXReceiveY  "3 for 2 on Apple TV"      free units, same item  │
//! │  ├── BundleDeal       "free VGA with a Macbook"  free units, other item │
//! │  └── BulkDiscount     "iPad $499.99 if 4+"       cheaper unit price     │
//! │                                                                         │
//! │  Discount (only inside BulkDiscount)                                   │
//! │  ├── Percentage       bps off the list price                           │
//! │  └── Flat             fixed amount off the list price                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are plain data. The only arithmetic living here is the discounted
//! unit price of a bulk discount; everything that depends on a basket lives
//! in [`crate::engine`].

use serde::{Deserialize, Serialize};

use crate::catalog::Item;
use crate::money::Money;
use crate::types::DiscountRate;

// =============================================================================
// Discount
// =============================================================================

/// A reduction applied to a single item's list price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discount {
    /// Removes a share of the price.
    #[serde(rename = "percent_bps")]
    Percentage(DiscountRate),

    /// Removes a fixed amount from the price.
    ///
    /// Must not exceed the list price; the engine does not check.
    Flat(Money),
}

impl Discount {
    /// Applies the discount to `price`, keeping full precision.
    pub fn apply(&self, price: Money) -> Money {
        match self {
            Discount::Percentage(rate) => price.apply_discount_rate(*rate),
            Discount::Flat(amount) => price - *amount,
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// "Buy `pay_for`, get `receive` free" on a single item.
///
/// For every full group of `pay_for` units scanned, `receive` further units of
/// the same item cost nothing. A 3-for-2 deal is `pay_for: 3, receive: 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayForXReceiveY {
    pub item: Item,
    pub pay_for: u32,
    pub receive: u32,
}

/// A free unit of `bundled` for every `min` units of `purchased`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleDeal {
    pub purchased: Item,
    #[serde(default = "default_bundle_min")]
    pub min: u32,
    pub bundled: Item,
}

fn default_bundle_min() -> u32 {
    1
}

impl BundleDeal {
    /// One free `bundled` per `purchased`, the common case.
    pub fn one_for_one(purchased: Item, bundled: Item) -> Self {
        BundleDeal {
            purchased,
            min: default_bundle_min(),
            bundled,
        }
    }
}

/// A cheaper unit price for every unit of `item` once `min` are scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkDiscount {
    pub item: Item,
    pub min: u32,
    pub discount: Discount,
}

impl BulkDiscount {
    /// The discounted price of a single unit.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{BulkDiscount, Discount, Item, Money};
    ///
    /// let rule = BulkDiscount {
    ///     item: Item::SuperIpad,
    ///     min: 4,
    ///     discount: Discount::Flat(Money::from_cents(5000)),
    /// };
    /// assert_eq!(rule.price_per_unit(), Money::from_cents(49999));
    /// ```
    pub fn price_per_unit(&self) -> Money {
        self.discount.apply(self.item.price())
    }
}

/// A pricing rule, as supplied to [`crate::PricingEngine::new`].
///
/// Serialized with a `kind` tag so rule sets read naturally in TOML:
///
/// ```toml
/// [[rules]]
/// kind = "pay_for_x_receive_y"
/// item = "atv"
/// pay_for = 3
/// receive = 1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Rule {
    #[serde(rename = "pay_for_x_receive_y")]
    PayForXReceiveY(PayForXReceiveY),
    #[serde(rename = "bundle_deal")]
    BundleDeal(BundleDeal),
    #[serde(rename = "bulk_discount")]
    BulkDiscount(BulkDiscount),
}

impl From<PayForXReceiveY> for Rule {
    fn from(rule: PayForXReceiveY) -> Self {
        Rule::PayForXReceiveY(rule)
    }
}

impl From<BundleDeal> for Rule {
    fn from(rule: BundleDeal) -> Self {
        Rule::BundleDeal(rule)
    }
}

impl From<BulkDiscount> for Rule {
    fn from(rule: BulkDiscount) -> Self {
        Rule::BulkDiscount(rule)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
