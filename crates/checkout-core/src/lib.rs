//! # checkout-core: Pure Pricing Logic for a Checkout Register
//!
//! This crate prices a basket of scanned items under a set of promotions.
//! It contains only pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Caller (register UI, CLI, test harness)            │   │
//! │  │        scan item ──► scan item ──► ask for total               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   rules   │  │  basket   │  │  engine   │  │   │
//! │  │   │   Item    │  │   Rule    │  │  Basket   │  │ Pricing-  │  │   │
//! │  │   │   SKU     │  │ Discount  │  │  counts   │  │  Engine   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   money   │  │  config   │  │ validation│                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The fixed item catalog
//! - [`rules`] - Pricing rules and discounts
//! - [`basket`] - Scanned items and occurrence counts
//! - [`engine`] - The pricing engine and receipts
//! - [`money`] - Exact decimal money (no floating point!)
//! - [`config`] - Rule sets as TOML
//! - [`validation`] - Opt-in rule checks
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same basket + same rules = same total, every time
//! 2. **No I/O**: configuration arrives as text, output is values
//! 3. **Exact Money**: decimals end to end, truncated to cents only at the total
//! 4. **Never Fails**: scanning and pricing cannot error; only parsing can
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Item, Money, PricingConfig};
//!
//! let mut checkout = PricingConfig::default().engine();
//! checkout.scan([Item::AppleTv, Item::AppleTv]);
//! checkout.scan([Item::SuperIpad; 5]);
//!
//! // Five iPads trigger the $50 bulk discount
//! assert_eq!(checkout.total(), Money::from_cents(271895));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use basket::Basket;
pub use catalog::Item;
pub use config::PricingConfig;
pub use engine::{PricingEngine, Receipt, ReceiptLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rules::{BulkDiscount, BundleDeal, Discount, PayForXReceiveY, Rule};
pub use types::DiscountRate;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal places kept in a charged amount.
pub const MONEY_SCALE: u32 = 2;
