//! # Domain Types
//!
//! Small value types shared by the catalog, the rules and the engine.

use serde::{Deserialize, Serialize};

// =============================================================================
// Discount Rate
// =============================================================================

/// Discount rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% off, 10000 bps = free
///
/// Values above 10000 are representable but describe a negative price;
/// `validation::validate_rules` rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// The largest meaningful rate (100%).
    pub const MAX_BPS: u32 = 10_000;

    /// Creates a discount rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    /// Creates a discount rate from a whole percentage.
    ///
    /// Saturates at `u32::MAX` bps instead of overflowing.
    ///
    /// ```rust
    /// use checkout_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::from_percent(15).bps(), 1500);
    /// ```
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        DiscountRate(percent.saturating_mul(100))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero discount rate.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
