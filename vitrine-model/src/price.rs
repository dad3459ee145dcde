use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// Unit price in the storefront's currency.
///
/// Catalogs may spell the amount as a number or as a string such as
/// `"4.50"` or `"$4.50"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> crate::Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ModelError::InvalidPrice(amount));
        }
        Ok(Price(amount))
    }

    /// Parse a textual amount, tolerating a leading `$` and whitespace.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let amount = digits
            .parse::<f64>()
            .map_err(|_| ModelError::UnparseablePrice(raw.to_string()))?;
        Price::new(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrice {
            Number(f64),
            Text(String),
        }

        let price = match RawPrice::deserialize(deserializer)? {
            RawPrice::Number(amount) => Price::new(amount),
            RawPrice::Text(text) => Price::parse(&text),
        };
        price.map_err(serde::de::Error::custom)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_two_decimals() {
        assert_eq!(Price::new(4.5).unwrap().to_string(), "$4.50");
        assert_eq!(Price::new(12.0).unwrap().to_string(), "$12.00");
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(Price::new(-1.0).is_err());
        assert!(Price::new(f64::NAN).is_err());
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }

    #[test]
    fn accepts_numeric_strings() {
        let price: Price = serde_json::from_str(r#""4.50""#).unwrap();
        assert_eq!(price.amount(), 4.5);
        let price: Price = serde_json::from_str(r#"" $12 ""#).unwrap();
        assert_eq!(price.to_string(), "$12.00");
        let price: Price = serde_json::from_str("7").unwrap();
        assert_eq!(price.amount(), 7.0);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let err = serde_json::from_str::<Price>(r#""market price""#).unwrap_err();
        assert!(err.to_string().contains("market price"));
        assert!(matches!(
            Price::parse("-2"),
            Err(ModelError::InvalidPrice(_))
        ));
    }
}
