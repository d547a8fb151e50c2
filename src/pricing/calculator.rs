use std::sync::Arc;

use tracing::{debug, trace};

use crate::common::errors::PricingError;
use crate::common::simple_types::Price;
use crate::pricing::strategies::DiscountStrategy;
use crate::pricing::Result;

/// Computes prices through whichever discount strategy is currently assigned.
#[derive(Clone, Debug, Default)]
pub struct PriceCalculator {
    strategy: Option<Arc<dyn DiscountStrategy>>,
}

impl PriceCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: Arc<dyn DiscountStrategy>) -> Self {
        Self {
            strategy: Some(strategy),
        }
    }

    pub fn set_discount_strategy(&mut self, strategy: Arc<dyn DiscountStrategy>) {
        trace!(strategy = strategy.name(), "discount strategy assigned");
        self.strategy = Some(strategy);
    }

    pub fn discount_strategy(&self) -> Option<&dyn DiscountStrategy> {
        self.strategy.as_deref()
    }

    pub fn calculate_price(&self, original_price: Price) -> Result<Price> {
        let strategy = self
            .strategy
            .as_deref()
            .ok_or(PricingError::NoStrategyAssigned)?;

        let discounted = strategy.apply_discount(original_price);
        debug!(
            strategy = strategy.name(),
            %original_price,
            %discounted,
            "price calculated"
        );
        Ok(discounted)
    }

    /// Validates a raw amount before pricing it.
    pub fn calculate_raw(&self, original_price: f64) -> Result<Price> {
        let price = Price::try_from(original_price)?;
        self.calculate_price(price)
    }
}
