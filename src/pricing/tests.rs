use std::sync::Arc;

use crate::common::errors::PricingError;
use crate::common::simple_types::Price;

use super::calculator::PriceCalculator;
use super::strategies::{DiscountStrategy, FixedDiscount, NoDiscount, PercentageDiscount};

fn priced(strategy: impl DiscountStrategy + 'static, amount: f64) -> f64 {
    PriceCalculator::with_strategy(Arc::new(strategy))
        .calculate_raw(amount)
        .unwrap()
        .value()
}

#[test]
fn fixed_discount_on_one_hundred() {
    assert_eq!(priced(FixedDiscount, 100.), 90.);
}

#[test]
fn percentage_discount_on_one_hundred() {
    assert!((priced(PercentageDiscount, 100.) - 80.).abs() < 1e-9);
}

#[test]
fn no_discount_on_one_hundred() {
    assert_eq!(priced(NoDiscount, 100.), 100.);
}

#[test]
fn fixed_discount_below_ten_is_clamped() {
    assert_eq!(priced(FixedDiscount, 5.), 0.);
}

#[test]
fn pricing_without_strategy_fails() {
    let calculator = PriceCalculator::new();
    assert!(calculator.discount_strategy().is_none());

    let err = calculator
        .calculate_price(Price::create(100.).unwrap())
        .unwrap_err();
    assert_eq!(err, PricingError::NoStrategyAssigned);
}

#[test]
fn negative_raw_price_is_rejected() {
    let calculator = PriceCalculator::with_strategy(Arc::new(NoDiscount));
    let err = calculator.calculate_raw(-1.).unwrap_err();
    assert_eq!(err, PricingError::InvalidArgument { value: -1. });
}

#[test]
fn swapping_strategy_affects_only_later_calls() {
    let price = Price::create(100.).unwrap();
    let mut calculator = PriceCalculator::with_strategy(Arc::new(FixedDiscount));

    let before = calculator.calculate_price(price).unwrap();
    calculator.set_discount_strategy(Arc::new(PercentageDiscount));
    let after = calculator.calculate_price(price).unwrap();

    assert_eq!(before.value(), 90.);
    assert!((after.value() - 80.).abs() < 1e-9);
    assert_eq!(calculator.discount_strategy().map(|s| s.name()), Some("percentage"));
}

#[test]
fn one_strategy_can_serve_many_calculators() {
    let shared: Arc<dyn DiscountStrategy> = Arc::new(PercentageDiscount);
    let first = PriceCalculator::with_strategy(Arc::clone(&shared));
    let mut second = PriceCalculator::new();
    second.set_discount_strategy(Arc::clone(&shared));

    let price = Price::create(50.).unwrap();
    assert_eq!(
        first.calculate_price(price).unwrap(),
        second.calculate_price(price).unwrap()
    );
    assert_eq!(Arc::strong_count(&shared), 3);
}
