use std::iter::Sum;
use std::num::NonZeroU32;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::errors::ProductError;

/// Catalog identifier of a product. Unique within one catalog snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ProductId)
            .map_err(|_| format!("Invalid product id: {}", s))
    }
}

/// Unit price in the catalog currency. Always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Result<Self, ProductError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ProductError::NegativePrice);
        }
        Ok(Self(amount))
    }

    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Price of `quantity` units.
    pub fn times(&self, quantity: NonZeroU32) -> Self {
        Self(self.0 * f64::from(quantity.get()))
    }
}

/// Two decimal places, no currency symbol.
impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), Add::add)
    }
}
