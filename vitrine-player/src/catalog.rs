//! Product catalog loading.
//!
//! A catalog file is either a JSON array of products, a JSON object with a
//! `products` array, or a TOML document with `[[products]]` tables.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use vitrine_model::{ImageRef, Modifier, Price, Product, ProductId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("invalid demo product: {0}")]
    Demo(#[from] vitrine_model::ModelError),
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Product>),
    Document(CatalogDocument),
}

/// Ordered product list shown by the carousel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Read a catalog file during start-up, before the runtime exists.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse(&contents, path)
    }

    /// Parse catalog text. The file extension picks the format; unknown
    /// extensions try JSON first, then TOML.
    pub fn parse(contents: &str, origin: &Path) -> Result<Self, CatalogError> {
        let parse_error = |reason: String| CatalogError::Parse {
            path: origin.to_path_buf(),
            reason,
        };

        let products = match origin.extension().and_then(|ext| ext.to_str()) {
            Some("json") => parse_json(contents).map_err(parse_error)?,
            Some("toml") => parse_toml(contents).map_err(parse_error)?,
            _ => match parse_json(contents) {
                Ok(products) => products,
                Err(json_err) => parse_toml(contents).map_err(|toml_err| {
                    parse_error(format!(
                        "not JSON ({json_err}) and not TOML ({toml_err})"
                    ))
                })?,
            },
        };

        log::debug!(
            "loaded {} products from {}",
            products.len(),
            origin.display()
        );
        Ok(Self { products })
    }

    /// Small built-in catalog used when no catalog file is configured.
    pub fn demo() -> Result<Self, CatalogError> {
        let entries: [(&str, &str, &str, &str, f64); 5] = [
            (
                "espresso",
                "https://images.unsplash.com/photo-1510707577719-ae7c14805e3a?w=600",
                "Espresso",
                "A short, intense shot pulled from freshly ground beans.",
                2.5,
            ),
            (
                "cappuccino",
                "https://images.unsplash.com/photo-1572442388796-11668a67e53d?w=600",
                "Cappuccino",
                "Espresso topped with steamed milk and a thick layer of foam.",
                3.75,
            ),
            (
                "latte",
                "https://images.unsplash.com/photo-1561882468-9110e03e0f78?w=600",
                "Caffe Latte",
                "Smooth espresso with plenty of steamed milk.",
                4.0,
            ),
            (
                "croissant",
                "https://images.unsplash.com/photo-1555507036-ab1f4038808a?w=600",
                "Butter Croissant",
                "Flaky, golden and baked every morning.",
                3.25,
            ),
            (
                "cheesecake",
                "https://images.unsplash.com/photo-1533134242443-d4fd215305ad?w=600",
                "Cheesecake",
                "Creamy baked cheesecake on a biscuit base.",
                5.5,
            ),
        ];

        let size = Modifier(serde_json::json!({
            "name": "Size",
            "options": ["Small", "Regular", "Large"],
        }));

        let mut products = Vec::with_capacity(entries.len());
        for (id, image, title, description, price) in entries {
            let product = Product::new(
                ProductId::new(id)?,
                ImageRef::parse(image)?,
                title,
            )
            .with_description(description)
            .with_price(Price::new(price)?)
            .with_modifiers(vec![size.clone()]);
            products.push(product);
        }

        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn parse_json(contents: &str) -> Result<Vec<Product>, String> {
    serde_json::from_str::<JsonCatalog>(contents)
        .map(|catalog| match catalog {
            JsonCatalog::List(products) => products,
            JsonCatalog::Document(document) => document.products,
        })
        .map_err(|err| err.to_string())
}

fn parse_toml(contents: &str) -> Result<Vec<Product>, String> {
    toml::from_str::<CatalogDocument>(contents)
        .map(|document| document.products)
        .map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_is_well_formed() {
        let catalog = Catalog::demo().unwrap();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.products().iter().all(|p| p.image.is_remote()));
        assert!(catalog.products().iter().all(|p| p.price.is_some()));
    }

    #[test]
    fn json_array_and_document_forms_are_equivalent() {
        let list = r#"[{"id": 1, "imageSrc": "img/a.png", "title": "A"}]"#;
        let doc = r#"{"products": [{"id": "1", "image": "img/a.png", "title": "A"}]}"#;
        let a = Catalog::parse(list, Path::new("a.json")).unwrap();
        let b = Catalog::parse(doc, Path::new("b.json")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_extension_falls_back_to_toml() {
        let toml = "[[products]]\nid = \"x\"\nimage = \"x.png\"\ntitle = \"X\"\nprice = 1.5\n";
        let catalog = Catalog::parse(toml, Path::new("catalog.txt")).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].price_label(), "$1.50");
    }

    #[test]
    fn parse_error_names_the_file() {
        let err = Catalog::parse("[{", Path::new("broken.json")).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::demo().unwrap();
        let id = ProductId::new("latte").unwrap();
        assert_eq!(catalog.find(&id).map(|p| p.title.as_str()), Some("Caffe Latte"));
    }
}
