use std::fs;

use tempfile::TempDir;
use vitrine_player::{Catalog, CatalogError};

const TOML_CATALOG: &str = r#"
[[products]]
id = "tea"
image = "https://example.com/tea.png"
title = "Green Tea"
description = "Loose leaf sencha."
price = 3.2

[[products]]
id = 42
imageSrc = "images/scone.png"
title = "Scone"
modifiers = [{ name = "Jam", options = ["Strawberry", "Apricot"] }]
"#;

#[test]
fn loads_toml_catalog_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, TOML_CATALOG).unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let scone = catalog.get(1).unwrap();
    assert_eq!(scone.id.as_str(), "42");
    assert_eq!(scone.price_label(), "");
    assert_eq!(scone.description_or_blank(), "");
    assert_eq!(scone.modifiers.len(), 1);
    assert!(!scone.image.is_remote());
}

#[test]
fn json_catalog_formats_numeric_price() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[{"id": "a", "imageSrc": "https://example.com/a.png", "title": "A", "price": 12}]"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path).unwrap();
    assert_eq!(catalog.products()[0].price_label(), "$12.00");
}

#[test]
fn missing_catalog_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Catalog::load(dir.path().join("none.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn empty_product_image_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"[{"id": "a", "image": "  ", "title": "A"}]"#).unwrap();
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}
