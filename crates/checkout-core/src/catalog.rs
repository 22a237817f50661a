//! # Catalog
//!
//! The fixed set of items the register can scan.
//!
//! ```text
//! ┌──────────────┬───────┬────────────┐
//! │ Item         │ SKU   │ List price │
//! ├──────────────┼───────┼────────────┤
//! │ Super iPad   │ ipd   │    $549.99 │
//! │ Macbook Pro  │ mbp   │   $1399.99 │
//! │ Apple TV     │ atv   │    $109.50 │
//! │ VGA Adapter  │ vga   │     $30.00 │
//! └──────────────┴───────┴────────────┘
//! ```
//!
//! Items compare and hash by identity, never by price, so they can key the
//! occurrence counts directly.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::money::Money;
use crate::validation::validate_sku;

/// An item that can be purchased.
///
/// Serialized as its SKU (`"ipd"`, `"mbp"`, ...), which is also how rule
/// configuration refers to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Item {
    #[serde(rename = "ipd")]
    SuperIpad,
    #[serde(rename = "mbp")]
    MacbookPro,
    #[serde(rename = "atv")]
    AppleTv,
    #[serde(rename = "vga")]
    VgaAdapter,
}

impl Item {
    /// Every catalog item, in catalog order.
    pub const ALL: [Item; 4] = [
        Item::SuperIpad,
        Item::MacbookPro,
        Item::AppleTv,
        Item::VgaAdapter,
    ];

    /// Stock Keeping Unit - the business identifier.
    pub const fn sku(&self) -> &'static str {
        match self {
            Item::SuperIpad => "ipd",
            Item::MacbookPro => "mbp",
            Item::AppleTv => "atv",
            Item::VgaAdapter => "vga",
        }
    }

    /// Display name shown on receipts.
    pub const fn name(&self) -> &'static str {
        match self {
            Item::SuperIpad => "Super iPad",
            Item::MacbookPro => "Macbook Pro",
            Item::AppleTv => "Apple TV",
            Item::VgaAdapter => "VGA Adapter",
        }
    }

    /// The undiscounted list price.
    pub fn price(&self) -> Money {
        Money::new(match self {
            Item::SuperIpad => dec!(549.99),
            Item::MacbookPro => dec!(1399.99),
            Item::AppleTv => dec!(109.50),
            Item::VgaAdapter => dec!(30.00),
        })
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks an item up by SKU.
///
/// ## Example
/// ```rust
/// use checkout_core::Item;
///
/// assert_eq!("atv".parse::<Item>().unwrap(), Item::AppleTv);
/// assert!("xyz".parse::<Item>().is_err());
/// ```
impl FromStr for Item {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sku = s.trim();
        validate_sku(sku)?;

        Item::ALL
            .into_iter()
            .find(|item| item.sku() == sku)
            .ok_or_else(|| CoreError::UnknownSku(sku.to_string()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skus_are_unique() {
        for (i, a) in Item::ALL.iter().enumerate() {
            for b in &Item::ALL[i + 1..] {
                assert_ne!(a.sku(), b.sku());
            }
        }
    }

    #[test]
    fn test_list_prices() {
        assert_eq!(Item::SuperIpad.price(), Money::from_cents(54999));
        assert_eq!(Item::MacbookPro.price(), Money::from_cents(139999));
        assert_eq!(Item::AppleTv.price(), Money::from_cents(10950));
        assert_eq!(Item::VgaAdapter.price(), Money::from_cents(3000));
    }

    #[test]
    fn test_parse_by_sku() {
        for item in Item::ALL {
            assert_eq!(item.sku().parse::<Item>().unwrap(), item);
        }
        assert_eq!(" mbp ".parse::<Item>().unwrap(), Item::MacbookPro);
    }

    #[test]
    fn test_parse_unknown_sku() {
        let err = "tvs".parse::<Item>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownSku(ref sku) if sku == "tvs"));
    }

    #[test]
    fn test_parse_malformed_sku() {
        for sku in ["", "tv", "ATV", "ipad", "a b"] {
            let err = sku.parse::<Item>().unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)), "{sku:?}");
        }
    }

    #[test]
    fn test_serializes_as_sku() {
        assert_eq!(serde_json::to_string(&Item::VgaAdapter).unwrap(), "\"vga\"");
        let item: Item = serde_json::from_str("\"ipd\"").unwrap();
        assert_eq!(item, Item::SuperIpad);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Item::AppleTv.to_string(), "Apple TV");
    }
}
