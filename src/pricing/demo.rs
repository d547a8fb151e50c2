use std::sync::Arc;

use crate::common::simple_types::Price;
use crate::pricing::calculator::PriceCalculator;
use crate::pricing::strategies::{DiscountStrategy, FixedDiscount, NoDiscount, PercentageDiscount};
use crate::pricing::Result;

pub const DEMO_PRICE: f64 = 100.;

fn price_line(label: &str, result: Result<Price>) -> String {
    match result {
        Ok(price) => format!("Price {label}: ${price}"),
        Err(e) => format!("Error: {e}"),
    }
}

/// Prices `DEMO_PRICE` under each strategy in turn, then exercises the two
/// error paths. Returns the lines to print.
pub fn run() -> Vec<String> {
    let strategies: [Arc<dyn DiscountStrategy>; 3] = [
        Arc::new(FixedDiscount),
        Arc::new(PercentageDiscount),
        Arc::new(NoDiscount),
    ];

    let mut calculator = PriceCalculator::new();
    let mut lines = Vec::with_capacity(strategies.len() + 2);
    for strategy in strategies {
        let label = strategy.description();
        calculator.set_discount_strategy(strategy);
        lines.push(price_line(label, calculator.calculate_raw(DEMO_PRICE)));
    }

    lines.push(price_line(
        "without strategy",
        PriceCalculator::new().calculate_raw(DEMO_PRICE),
    ));
    lines.push(price_line(
        "with negative input",
        calculator.calculate_raw(-DEMO_PRICE),
    ));
    lines
}
