use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ModelError;

/// Catalog identifier for a product.
///
/// Catalog feeds are inconsistent about whether ids are numbers or strings,
/// so both are accepted and normalised to text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: impl Into<String>) -> crate::Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ModelError::EmptyProductId);
        }
        Ok(ProductId(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        let raw = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        };
        ProductId::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_normalise_to_text() {
        let ids: Vec<ProductId> =
            serde_json::from_str(r#"[7, "latte", 18446744073709551615]"#)
                .unwrap();
        assert_eq!(ids[0].as_str(), "7");
        assert_eq!(ids[1].as_str(), "latte");
        assert_eq!(ids[2].as_str(), "18446744073709551615");
    }

    #[test]
    fn blank_id_is_rejected() {
        assert_eq!(ProductId::new("  "), Err(ModelError::EmptyProductId));
        assert!(serde_json::from_str::<ProductId>(r#""""#).is_err());
    }
}
