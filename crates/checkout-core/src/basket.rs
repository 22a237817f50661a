//! # Basket
//!
//! The scanned items of one checkout session.
//!
//! ## Invariants
//! - Append-only: items are scanned in, never removed
//! - Scan order is kept but never affects pricing
//! - Counts are derived on demand, so there is no cached state to go stale

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::Item;

/// Counts how often each item occurs in `items`.
///
/// Items that do not occur are absent from the map.
pub(crate) fn count_occurrences<'a, I>(items: I) -> HashMap<Item, u32>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(*item).or_insert(0) += 1;
    }
    counts
}

/// A mutable collection of scanned item instances.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    items: Vec<Item>,
}

impl Basket {
    /// Creates an empty basket.
    pub fn new() -> Self {
        Basket { items: Vec::new() }
    }

    /// Appends one or more item instances.
    ///
    /// ```rust
    /// use checkout_core::{Basket, Item};
    ///
    /// let mut basket = Basket::new();
    /// basket.scan([Item::AppleTv, Item::AppleTv]);
    /// basket.scan(Some(Item::VgaAdapter));
    /// assert_eq!(basket.len(), 3);
    /// ```
    pub fn scan<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Item>,
    {
        self.items.extend(items);
    }

    /// Maps each distinct scanned item to its number of instances.
    pub fn occurrence_counts(&self) -> HashMap<Item, u32> {
        count_occurrences(&self.items)
    }

    /// Number of instances of `item`, or 0 if it was never scanned.
    pub fn occurrence_count(&self, item: Item) -> u32 {
        self.items.iter().filter(|scanned| **scanned == item).count() as u32
    }

    /// Scanned items in scan order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Total number of scanned instances.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for Basket {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Basket {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
