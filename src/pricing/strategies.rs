use std::fmt::Debug;

use tracing::warn;

use crate::common::simple_types::Price;

pub const FIXED_DISCOUNT_AMOUNT: f64 = 10.;
pub const PERCENTAGE_DISCOUNT_FACTOR: f64 = 0.80;

/// A pricing policy that maps an original price to a discounted one.
///
/// Implementations are stateless and may be shared between calculators.
pub trait DiscountStrategy: Debug + Send + Sync {
    fn apply_discount(&self, price: Price) -> Price;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Human-readable label, e.g. "with 20% discount".
    fn description(&self) -> &'static str;
}

// ---------------------------
// Fixed amount
// ---------------------------

/// Takes a flat 10 units off, never going below zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedDiscount;

impl DiscountStrategy for FixedDiscount {
    fn apply_discount(&self, price: Price) -> Price {
        let (discounted, clamped) = price.saturating_sub(FIXED_DISCOUNT_AMOUNT);
        if clamped {
            warn!(%price, "fixed discount exceeds price, flooring at zero");
        }
        discounted
    }

    fn name(&self) -> &'static str {
        "fixed"
    }

    fn description(&self) -> &'static str {
        "with fixed discount"
    }
}

// ---------------------------
// Percentage
// ---------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct PercentageDiscount;

impl DiscountStrategy for PercentageDiscount {
    fn apply_discount(&self, price: Price) -> Price {
        price.scale(PERCENTAGE_DISCOUNT_FACTOR)
    }

    fn name(&self) -> &'static str {
        "percentage"
    }

    fn description(&self) -> &'static str {
        "with 20% discount"
    }
}

// ---------------------------
// None
// ---------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct NoDiscount;

impl DiscountStrategy for NoDiscount {
    fn apply_discount(&self, price: Price) -> Price {
        price
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn description(&self) -> &'static str {
        "without discount"
    }
}
