use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::Serialize;

/// Non-negative money amount. Anything below zero, or not a number,
/// floors to zero on construction.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Price::ZERO;
        }

        Price(value)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.2}", self.0)
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::new(value)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price::new(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, quantity: u32) -> Price {
        Price::new(self.0 * f64::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}
