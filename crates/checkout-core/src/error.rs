//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError          - SKU lookup and configuration loading             │
//! │  └── ValidationError  - A rule set that breaks a pricing invariant     │
//! │                                                                         │
//! │  PricingEngine itself never fails: scanning and pricing are total      │
//! │  functions. Errors only arise at the edges, while turning text into    │
//! │  items and rules.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (SKU, field, limits)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning caller input into catalog items and rules.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No catalog item has this SKU.
    #[error("Unknown SKU: {0}")]
    UnknownSku(String),

    /// Rule configuration text could not be parsed.
    #[error("Invalid pricing configuration: {0}")]
    Config(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A rule or input that breaks a pricing invariant.
///
/// The engine does not check these itself; callers opt in through
/// [`crate::validation`].
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A flat discount larger than the price it applies to.
    #[error("Discount of {discount} on {sku} exceeds its list price {price}")]
    DiscountExceedsPrice {
        sku: String,
        discount: Money,
        price: Money,
    },

    /// A bundle deal that gives away the item being purchased.
    #[error("Bundle deal on {sku} bundles the purchased item itself")]
    SelfBundle { sku: String },

    /// More than one bulk discount targets the same item.
    #[error("More than one bulk discount targets {sku}")]
    OverlappingBulkDiscount { sku: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownSku("tv".to_string());
        assert_eq!(err.to_string(), "Unknown SKU: tv");

        let err = ValidationError::DiscountExceedsPrice {
            sku: "vga".to_string(),
            discount: Money::from_cents(4000),
            price: Money::from_cents(3000),
        };
        assert_eq!(
            err.to_string(),
            "Discount of $40.00 on vga exceeds its list price $30.00"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "pay_for".to_string(),
        };
        assert_eq!(err.to_string(), "pay_for must be positive");

        let err = ValidationError::OutOfRange {
            field: "percent_bps".to_string(),
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "percent_bps must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::SelfBundle {
            sku: "mbp".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
