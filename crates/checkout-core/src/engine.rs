//! # Pricing Engine
//!
//! Turns a basket and a rule set into a payable total.
//!
//! ## Evaluation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PricingEngine::total()                           │
//! │                                                                         │
//! │  Basket ──► item_counts()          {atv: 3, vga: 1}                     │
//! │                 │                                                       │
//! │                 ├──► included_items()  PayForXReceiveY  [atv]           │
//! │                 ├──► bundled_items()   BundleDeal       []              │
//! │                 │         └──── pooled into free_items() [atv]          │
//! │                 ▼                                                       │
//! │  paid_item_counts()   counts − free_item_counts()  {atv: 2, vga: 1}     │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  Σ qty × item_price_per_unit()   (BulkDiscount if eligible)             │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  truncate to cents ──────────────────────────────► $249.00              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every query is a pure function of the current basket and the rules; only
//! [`PricingEngine::scan`] mutates anything.
//!
//! ## Rule Interaction
//! Free units from every rule are pooled before they are subtracted, so a
//! 3-for-2 on an item and a bundle deal that gives the same item away both
//! reduce its paid count in one pass. When the pool is larger than what was
//! actually scanned (a bundle deal whose free item is not in the basket, or
//! rules that overlap), the paid count stops at zero.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::iter;
use tracing::{debug, warn};

use crate::basket::Basket;
use crate::catalog::Item;
use crate::money::Money;
use crate::rules::{BulkDiscount, BundleDeal, PayForXReceiveY, Rule};

// =============================================================================
// Free-unit arithmetic
// =============================================================================

/// Free units earned by a pay-for-X-receive-Y rule on `count` scanned units.
///
/// A zero `pay_for` earns nothing rather than dividing by zero.
fn included_units(rule: &PayForXReceiveY, count: u32) -> u32 {
    count
        .checked_div(rule.pay_for)
        .map_or(0, |groups| groups.saturating_mul(rule.receive))
}

/// Free `bundled` units earned by `count` scanned `purchased` units.
fn bundled_units(rule: &BundleDeal, count: u32) -> u32 {
    count.checked_div(rule.min).unwrap_or(0)
}

// =============================================================================
// Pricing Engine
// =============================================================================

/// A checkout session: one basket priced under one rule set.
///
/// ## Example
/// ```rust
/// use checkout_core::{BundleDeal, Item, Money, PricingEngine, PayForXReceiveY};
///
/// let mut checkout = PricingEngine::new(vec![
///     PayForXReceiveY { item: Item::AppleTv, pay_for: 3, receive: 1 }.into(),
///     BundleDeal::one_for_one(Item::MacbookPro, Item::VgaAdapter).into(),
/// ]);
/// checkout.scan([Item::AppleTv, Item::AppleTv, Item::AppleTv, Item::VgaAdapter]);
///
/// assert_eq!(checkout.total(), Money::from_cents(24900));
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine {
    basket: Basket,
    rules: Vec<Rule>,

    // Partitioned once at construction, each in configuration order.
    multi_buys: Vec<PayForXReceiveY>,
    bundle_deals: Vec<BundleDeal>,
    bulk_discounts: Vec<BulkDiscount>,
}

impl PricingEngine {
    /// Creates an engine with an empty basket.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut multi_buys = Vec::new();
        let mut bundle_deals = Vec::new();
        let mut bulk_discounts = Vec::new();
        for rule in &rules {
            match rule {
                Rule::PayForXReceiveY(rule) => multi_buys.push(*rule),
                Rule::BundleDeal(rule) => bundle_deals.push(*rule),
                Rule::BulkDiscount(rule) => bulk_discounts.push(*rule),
            }
        }

        debug!(
            rules = rules.len(),
            multi_buys = multi_buys.len(),
            bundle_deals = bundle_deals.len(),
            bulk_discounts = bulk_discounts.len(),
            "Pricing engine created"
        );

        PricingEngine {
            basket: Basket::new(),
            rules,
            multi_buys,
            bundle_deals,
            bulk_discounts,
        }
    }

    /// The rule set, in configuration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The basket being priced.
    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    /// Adds one or more items to the basket.
    pub fn scan<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Item>,
    {
        let before = self.basket.len();
        self.basket.scan(items);
        debug!(
            scanned = self.basket.len() - before,
            basket_size = self.basket.len(),
            "Items scanned"
        );
    }

    /// Maps each distinct scanned item to its number of instances.
    pub fn item_counts(&self) -> HashMap<Item, u32> {
        self.basket.occurrence_counts()
    }

    /// Number of scanned instances of `item`.
    pub fn item_count(&self, item: Item) -> u32 {
        self.basket.occurrence_count(item)
    }

    /// Units made free by pay-for-X-receive-Y rules.
    ///
    /// For each rule, `floor(count / pay_for) × receive` copies of its item,
    /// concatenated in rule order.
    pub fn included_items(&self) -> Vec<Item> {
        self.multi_buys
            .iter()
            .flat_map(|rule| {
                let free = included_units(rule, self.item_count(rule.item));
                iter::repeat(rule.item).take(free as usize)
            })
            .collect()
    }

    /// Units made free by bundle deals.
    ///
    /// For each rule, `floor(count(purchased) / min)` copies of the bundled
    /// item, whether or not any were scanned.
    pub fn bundled_items(&self) -> Vec<Item> {
        self.bundle_deals
            .iter()
            .flat_map(|rule| {
                let free = bundled_units(rule, self.item_count(rule.purchased));
                iter::repeat(rule.bundled).take(free as usize)
            })
            .collect()
    }

    /// Every free unit: [`Self::included_items`] followed by
    /// [`Self::bundled_items`].
    ///
    /// One entry per unit, so the list grows with `receive`; pricing only
    /// ever reads [`Self::free_item_counts`].
    pub fn free_items(&self) -> Vec<Item> {
        let mut free = self.included_items();
        free.extend(self.bundled_items());
        free
    }

    /// The price charged for each paid unit of `item`.
    ///
    /// The first bulk discount (in rule order) on `item` whose minimum is met
    /// wins; otherwise the list price.
    pub fn item_price_per_unit(&self, item: Item) -> Money {
        let count = self.item_count(item);
        self.bulk_discounts
            .iter()
            .find(|rule| rule.item == item && count >= rule.min)
            .map_or_else(|| item.price(), BulkDiscount::price_per_unit)
    }

    /// Free units per item, pooled across every free-item rule.
    ///
    /// Counts the same units [`Self::free_items`] lists, without materialising
    /// them. Pooled counts saturate at `u32::MAX`; items earning nothing are
    /// absent.
    pub fn free_item_counts(&self) -> HashMap<Item, u32> {
        let included = self
            .multi_buys
            .iter()
            .map(|rule| (rule.item, included_units(rule, self.item_count(rule.item))));
        let bundled = self
            .bundle_deals
            .iter()
            .map(|rule| (rule.bundled, bundled_units(rule, self.item_count(rule.purchased))));

        let mut free = HashMap::new();
        for (item, units) in included.chain(bundled).filter(|(_, units)| *units > 0) {
            let pooled: &mut u32 = free.entry(item).or_insert(0);
            *pooled = pooled.saturating_add(units);
        }
        free
    }

    /// Units to charge for, per distinct scanned item.
    ///
    /// Scanned count minus pooled free count, never below zero.
    pub fn paid_item_counts(&self) -> HashMap<Item, u32> {
        let free = self.free_item_counts();

        self.item_counts()
            .into_iter()
            .map(|(item, count)| {
                let free_count = free.get(&item).copied().unwrap_or(0);
                if free_count > count {
                    warn!(
                        sku = item.sku(),
                        scanned = count,
                        free = free_count,
                        "Free units exceed scanned units; paying for none"
                    );
                }
                (item, count.saturating_sub(free_count))
            })
            .collect()
    }

    /// The amount payable, truncated (never rounded) to cents.
    pub fn total(&self) -> Money {
        let total = self
            .paid_item_counts()
            .into_iter()
            .map(|(item, qty)| self.item_price_per_unit(item) * qty)
            .sum::<Money>()
            .truncate_to_cents();

        debug!(total = %total, items = self.basket.len(), "Basket priced");
        total
    }

    /// Itemised breakdown of the current basket.
    ///
    /// Lines are in catalog order. `total` is always equal to [`Self::total`].
    pub fn receipt(&self) -> Receipt {
        let counts = self.item_counts();
        let paid = self.paid_item_counts();

        let mut lines: Vec<ReceiptLine> = counts
            .into_iter()
            .map(|(item, scanned)| {
                let paid = paid.get(&item).copied().unwrap_or(0);
                let unit_price = self.item_price_per_unit(item);
                ReceiptLine {
                    item,
                    scanned,
                    free: scanned - paid,
                    paid,
                    unit_price,
                    line_total: unit_price * paid,
                }
            })
            .collect();
        lines.sort_by_key(|line| line.item);

        let subtotal = lines
            .iter()
            .map(|line| line.item.price() * line.scanned)
            .sum::<Money>();
        let total = self.total();

        Receipt {
            lines,
            subtotal,
            savings: subtotal - total,
            total,
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One item's line on a [`Receipt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub item: Item,
    /// Units scanned.
    pub scanned: u32,
    /// Units given away by free-item rules.
    pub free: u32,
    /// Units charged for.
    pub paid: u32,
    /// Price per paid unit, full precision.
    pub unit_price: Money,
    /// `unit_price × paid`, full precision.
    pub line_total: Money,
}

/// Itemised summary of a priced basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    /// Every scanned unit at list price.
    pub subtotal: Money,
    /// `subtotal − total`.
    pub savings: Money,
    /// Amount payable, truncated to cents.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
