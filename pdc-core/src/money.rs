use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use utoipa::ToSchema;

/// A monetary amount carried with exactly two fraction digits, so that a
/// price submitted as `"627.00"` is stored and returned as `"627.00"`.
/// Serialized as a string, matching the wire format of price fields.
#[derive(Debug, ToSchema, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
#[schema(value_type = String, example = "627.00")]
pub struct Money(Decimal);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("'{0}' is not a decimal amount")]
    NotDecimal(String),
    #[error("amounts carry at most 2 fraction digits, got {0}")]
    TooPrecise(u32),
}

impl Money {
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        if amount.scale() > 2 {
            return Err(MoneyError::TooPrecise(amount.scale()));
        }
        let mut amount = amount;
        amount.rescale(2);
        Ok(Self(amount))
    }

    pub fn zero() -> Self {
        Self(Decimal::new(0, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str_exact(s).map_err(|_| MoneyError::NotDecimal(s.to_owned()))?;
        Self::new(amount)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_fraction_digits_round_trip() {
        let money: Money = "627.00".parse().unwrap();
        assert_eq!("627.00", money.to_string());
        assert_eq!("\"627.00\"", serde_json::to_string(&money).unwrap());
    }

    #[test]
    fn whole_amounts_are_rescaled_to_two_digits() {
        let money: Money = "627".parse().unwrap();
        assert_eq!("627.00", money.to_string());

        let money: Money = "627.5".parse().unwrap();
        assert_eq!("627.50", money.to_string());
    }

    #[test]
    fn three_fraction_digits_are_rejected() {
        assert_eq!(Err(MoneyError::TooPrecise(3)), "627.005".parse::<Money>());
    }

    #[test]
    fn non_decimal_input_is_rejected() {
        assert!(matches!(
            "abc".parse::<Money>(),
            Err(MoneyError::NotDecimal(_))
        ));
    }

    #[test]
    fn deserializes_from_json_string() {
        let money: Money = serde_json::from_str("\"0.00\"").unwrap();
        assert_eq!(Money::zero(), money);
    }

    #[test]
    fn negative_amounts_are_flagged() {
        let money: Money = "-1.00".parse().unwrap();
        assert!(money.is_negative());
        assert!(!Money::zero().is_negative());
    }
}
