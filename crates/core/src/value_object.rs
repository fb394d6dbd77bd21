//! Value object trait: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Price(149.99)` (two prices with the same amount are equal)
/// - **Entity**: `Product { id: ProductId(2), .. }` (same id means the same product)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Unit price of a product, in the seller's currency.
///
/// Always finite and non-negative. Zero is allowed (free items).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_input("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_input("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl ValueObject for Price {}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_zero_and_positive_amounts() {
        assert_eq!(Price::new(0.0).unwrap(), Price::ZERO);
        assert_eq!(Price::new(299.99).unwrap().amount(), 299.99);
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(Price::new(-0.01), Err(DomainError::InvalidInput(_))));
        assert!(matches!(Price::new(f64::NAN), Err(DomainError::InvalidInput(_))));
        assert!(matches!(Price::new(f64::INFINITY), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let ok: Price = serde_json::from_str("89.99").unwrap();
        assert_eq!(ok.amount(), 89.99);
        assert!(serde_json::from_str::<Price>("-1").is_err());
    }

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::new(10.0).unwrap().to_string(), "10.00");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn every_non_negative_finite_amount_is_a_price(amount in 0.0f64..1.0e12) {
            let price = Price::new(amount).unwrap();
            prop_assert_eq!(price.amount(), amount);
        }
    }
}
