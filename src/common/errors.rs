use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Price was negative, NaN or infinite
    #[error("invalid price: {value} (expected a finite, non-negative amount)")]
    InvalidArgument { value: f64 },

    /// `calculate_price` was called before any strategy was set
    #[error("no discount strategy assigned")]
    NoStrategyAssigned,
}
