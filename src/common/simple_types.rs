use std::fmt;

use crate::common::errors::PricingError;

/// A non-negative, finite monetary amount in the base currency unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Price {
    value: f64,
}

impl Price {
    pub fn create(value: f64) -> Result<Self, PricingError> {
        if !value.is_finite() || value < 0. {
            return Err(PricingError::InvalidArgument { value });
        }
        // adding positive zero turns -0.0 into 0.0
        Ok(Self { value: value + 0. })
    }

    pub fn zero() -> Self {
        Self { value: 0. }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Subtracts `amount`, flooring at zero. The flag is set when the floor
    /// was hit.
    pub(crate) fn saturating_sub(self, amount: f64) -> (Self, bool) {
        let value = self.value - amount;
        if value < 0. {
            (Self::zero(), true)
        } else {
            (Self { value }, false)
        }
    }

    /// Scales by a factor in `[0, 1]`, which keeps the result non-negative.
    pub(crate) fn scale(self, factor: f64) -> Self {
        debug_assert!((0. ..=1.).contains(&factor));
        Self {
            value: self.value * factor,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value)
    }
}

impl TryFrom<f64> for Price {
    type Error = PricingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Price::create(value)
    }
}
