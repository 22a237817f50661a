//! # Validation Module
//!
//! Opt-in checks for SKUs and rule sets.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  PricingConfig::from_toml_str                                          │
//! │  ├── Shape checks (deserialization)                                    │
//! │  └── THIS MODULE: validate_rules()                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  PricingEngine::new                                                    │
//! │  └── No checks: whatever the arithmetic yields is the price            │
//! │                                                                         │
//! │  Rules built directly in Rust skip this module unless the caller       │
//! │  runs it.                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::validate_rules;
//! use checkout_core::{BundleDeal, Item, PricingConfig, Rule};
//!
//! assert!(validate_rules(&PricingConfig::default().rules).is_ok());
//!
//! let self_bundle: Rule = BundleDeal::one_for_one(Item::AppleTv, Item::AppleTv).into();
//! assert!(validate_rules(&[self_bundle]).is_err());
//! ```

use std::collections::HashSet;

use tracing::warn;

use crate::catalog::Item;
use crate::error::ValidationError;
use crate::rules::{BulkDiscount, BundleDeal, Discount, PayForXReceiveY, Rule};
use crate::types::DiscountRate;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Length of every catalog SKU (`ipd`, `mbp`, `atv`, `vga`).
const SKU_LEN: usize = 3;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the shape of a SKU.
///
/// ## Rules
/// - Must not be empty
/// - Exactly three characters
/// - Only lowercase ASCII letters
///
/// This checks the shape only; whether the SKU exists is
/// [`Item`]'s `FromStr`.
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > SKU_LEN {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: SKU_LEN,
        });
    }

    if sku.len() < SKU_LEN || !sku.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must be three lowercase letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Rule Validators
// =============================================================================

fn validate_positive(field: &str, value: u32) -> ValidationResult<()> {
    if value == 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a discount against the item it will be applied to.
///
/// ## Rules
/// - Percentage between 0 and 10000 bps
/// - Flat amount not negative and not above the list price
pub fn validate_discount(item: Item, discount: &Discount) -> ValidationResult<()> {
    match discount {
        Discount::Percentage(rate) => {
            if rate.bps() > DiscountRate::MAX_BPS {
                return Err(ValidationError::OutOfRange {
                    field: "percent_bps".to_string(),
                    min: 0,
                    max: i64::from(DiscountRate::MAX_BPS),
                });
            }
        }
        Discount::Flat(amount) => {
            if amount.is_negative() {
                return Err(ValidationError::MustBePositive {
                    field: "flat".to_string(),
                });
            }
            if *amount > item.price() {
                return Err(ValidationError::DiscountExceedsPrice {
                    sku: item.sku().to_string(),
                    discount: *amount,
                    price: item.price(),
                });
            }
        }
    }
    Ok(())
}

/// Validates a single rule in isolation.
pub fn validate_rule(rule: &Rule) -> ValidationResult<()> {
    match rule {
        Rule::PayForXReceiveY(PayForXReceiveY { pay_for, .. }) => {
            validate_positive("pay_for", *pay_for)
        }
        Rule::BundleDeal(BundleDeal {
            purchased,
            min,
            bundled,
        }) => {
            validate_positive("min", *min)?;
            if purchased == bundled {
                return Err(ValidationError::SelfBundle {
                    sku: purchased.sku().to_string(),
                });
            }
            Ok(())
        }
        Rule::BulkDiscount(BulkDiscount {
            item,
            min,
            discount,
        }) => {
            validate_positive("min", *min)?;
            validate_discount(*item, discount)
        }
    }
}

/// Validates a whole rule set.
///
/// Runs [`validate_rule`] on every rule, then rejects two bulk discounts on
/// the same item (the engine would silently use the first eligible one).
pub fn validate_rules(rules: &[Rule]) -> ValidationResult<()> {
    let mut discounted = HashSet::new();

    for rule in rules {
        validate_rule(rule)?;

        if let Rule::BulkDiscount(bulk) = rule {
            if !discounted.insert(bulk.item) {
                warn!(sku = bulk.item.sku(), "Overlapping bulk discounts");
                return Err(ValidationError::OverlappingBulkDiscount {
                    sku: bulk.item.sku().to_string(),
                });
            }
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
