//! Discounted pricing through interchangeable discount strategies.
//!
//! A [`PriceCalculator`](pricing::PriceCalculator) holds one
//! [`DiscountStrategy`](pricing::DiscountStrategy) at a time; swap it to change
//! how the next price is computed.

pub mod common;
pub mod pricing;
