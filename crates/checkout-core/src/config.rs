//! # Pricing Configuration
//!
//! The rule set a register runs with, as data.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. TOML text handed over by the caller  ──► from_toml_str()            │
//! │     (file, env var, remote config: not this crate's concern)            │
//! │                                                                         │
//! │  2. Defaults (this file)                 ──► PricingConfig::default()   │
//! │     The standard store promotions                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! currency_symbol = "$"
//!
//! [[rules]]
//! kind = "bundle_deal"
//! purchased = "mbp"
//! min = 1            # optional, defaults to 1
//! bundled = "vga"
//!
//! [[rules]]
//! kind = "pay_for_x_receive_y"
//! item = "atv"
//! pay_for = 3
//! receive = 1
//!
//! [[rules]]
//! kind = "bulk_discount"
//! item = "ipd"
//! min = 4
//! discount = { flat = "50" }   # or { percent_bps = 1500 }
//! ```

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Item;
use crate::engine::PricingEngine;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rules::{BulkDiscount, BundleDeal, Discount, PayForXReceiveY, Rule};
use crate::validation::validate_rules;
use crate::MONEY_SCALE;

/// Pricing configuration for one register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency symbol used by [`PricingConfig::format_money`].
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Promotions, in the order they are configured.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for PricingConfig {
    /// The standard store promotions.
    ///
    /// ## Default Rules
    /// - Free VGA Adapter with every Macbook Pro
    /// - 3 for the price of 2 on Apple TV
    /// - Super iPad drops $50 each when buying 4 or more
    fn default() -> Self {
        PricingConfig {
            currency_symbol: default_currency_symbol(),
            rules: vec![
                BundleDeal::one_for_one(Item::MacbookPro, Item::VgaAdapter).into(),
                PayForXReceiveY {
                    item: Item::AppleTv,
                    pay_for: 3,
                    receive: 1,
                }
                .into(),
                BulkDiscount {
                    item: Item::SuperIpad,
                    min: 4,
                    discount: Discount::Flat(Money::new(dec!(50))),
                }
                .into(),
            ],
        }
    }
}

impl PricingConfig {
    /// Parses and validates a TOML rule set.
    ///
    /// ## Errors
    /// - `CoreError::Config` for malformed TOML, unknown SKUs or rule kinds
    /// - `CoreError::Validation` for rules that break a pricing invariant
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Item, PricingConfig};
    ///
    /// let config = PricingConfig::from_toml_str(r#"
    ///     [[rules]]
    ///     kind = "pay_for_x_receive_y"
    ///     item = "atv"
    ///     pay_for = 3
    ///     receive = 1
    /// "#).unwrap();
    ///
    /// let mut checkout = config.engine();
    /// checkout.scan([Item::AppleTv; 3]);
    /// assert_eq!(checkout.total().to_string(), "$219.00");
    /// ```
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        let config: PricingConfig =
            toml::from_str(text).map_err(|e| CoreError::Config(e.to_string()))?;
        validate_rules(&config.rules)?;

        info!(rules = config.rules.len(), "Pricing configuration loaded");
        Ok(config)
    }

    /// Serializes the configuration back to TOML text.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string(self).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Starts a checkout session under these rules.
    pub fn engine(&self) -> PricingEngine {
        debug!(rules = self.rules.len(), "Starting checkout session");
        PricingEngine::new(self.rules.clone())
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// Sub-cent digits are truncated, matching how totals are charged.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Money, PricingConfig};
    ///
    /// let config = PricingConfig {
    ///     currency_symbol: "A$".to_string(),
    ///     ..PricingConfig::default()
    /// };
    /// assert_eq!(config.format_money(Money::from_cents(194998)), "A$1949.98");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        let mut shown = amount.truncate_to_cents().amount();
        shown.rescale(MONEY_SCALE);

        format!(
            "{}{}{}",
            if amount.is_negative() && !shown.is_zero() {
                "-"
            } else {
                ""
            },
            self.currency_symbol,
            shown.abs()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiscountRate;

    const STANDARD_RULES: &str = r#"
        currency_symbol = "$"

        [[rules]]
        kind = "bundle_deal"
        purchased = "mbp"
        min = 1
        bundled = "vga"

        [[rules]]
        kind = "pay_for_x_receive_y"
        item = "atv"
        pay_for = 3
        receive = 1

        [[rules]]
        kind = "bulk_discount"
        item = "ipd"
        min = 4
        discount = { flat = "50" }
    "#;

    #[test]
    fn test_parse_standard_rules_matches_default() {
        let config = PricingConfig::from_toml_str(STANDARD_RULES).unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn test_parse_percentage_discount_and_defaults() {
        let config = PricingConfig::from_toml_str(
            r#"
            [[rules]]
            kind = "bundle_deal"
            purchased = "ipd"
            bundled = "vga"

            [[rules]]
            kind = "bulk_discount"
            item = "atv"
            min = 2
            discount = { percent_bps = 1000 }
            "#,
        )
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(
            config.rules,
            vec![
                BundleDeal::one_for_one(Item::SuperIpad, Item::VgaAdapter).into(),
                BulkDiscount {
                    item: Item::AppleTv,
                    min: 2,
                    discount: Discount::Percentage(DiscountRate::from_bps(1000)),
                }
                .into(),
            ]
        );
    }

    #[test]
    fn test_empty_config_has_no_rules() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_unknown_sku_is_config_error() {
        let err = PricingConfig::from_toml_str(
            r#"
            [[rules]]
            kind = "pay_for_x_receive_y"
            item = "tv"
            pay_for = 3
            receive = 1
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_invalid_rule_is_validation_error() {
        let err = PricingConfig::from_toml_str(
            r#"
            [[rules]]
            kind = "bulk_discount"
            item = "vga"
            min = 1
            discount = { flat = "45" }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PricingConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(PricingConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_default_engine_prices_standard_basket() {
        let mut checkout = PricingConfig::default().engine();
        checkout.scan([Item::MacbookPro, Item::VgaAdapter, Item::SuperIpad]);
        assert_eq!(checkout.total(), Money::from_cents(194998));
    }

    #[test]
    fn test_format_money() {
        let config = PricingConfig::default();
        assert_eq!(config.format_money(Money::from_cents(24900)), "$249.00");
        assert_eq!(config.format_money(Money::new(dec!(24.999))), "$24.99");
        assert_eq!(config.format_money(Money::from_cents(-1000)), "-$10.00");
        assert_eq!(config.format_money(Money::zero()), "$0.00");
    }
}
