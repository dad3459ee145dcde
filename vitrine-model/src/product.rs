use serde::{Deserialize, Deserializer, Serialize};

use crate::{ids::ProductId, image::ImageRef, price::Price};

/// A product option group (size, milk, extra shot...). The carousel never
/// looks inside; it only forwards modifiers to the dialog trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifier(pub serde_json::Value);

/// One card in the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(alias = "imageSrc", alias = "image_src")]
    pub image: ImageRef,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub modifiers: Vec<Modifier>,
}

/// Treat an explicit `null` list the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Product {
    pub fn new(id: ProductId, image: ImageRef, title: impl Into<String>) -> Self {
        Self {
            id,
            image,
            title: title.into(),
            description: None,
            price: None,
            modifiers: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Description text, or an empty string when the catalog omits it.
    pub fn description_or_blank(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Formatted price, or an empty string when the catalog omits it.
    pub fn price_label(&self) -> String {
        self.price.map(|p| p.to_string()).unwrap_or_default()
    }
}
