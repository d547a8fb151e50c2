pub mod calculator;
pub mod demo;
pub mod strategies;

#[cfg(test)]
mod tests;

pub use calculator::PriceCalculator;
pub use strategies::{DiscountStrategy, FixedDiscount, NoDiscount, PercentageDiscount};

pub type Result<T> = std::result::Result<T, crate::common::errors::PricingError>;
