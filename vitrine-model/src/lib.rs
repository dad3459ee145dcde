//! Product data model consumed by the Vitrine carousel.
//!
//! Products are immutable from the carousel's point of view. They are
//! supplied by whatever owns the catalog and only read while rendering
//! cards and building dialog requests.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod image;
pub mod price;
pub mod product;

pub use error::{ModelError, Result};
pub use ids::ProductId;
pub use image::ImageRef;
pub use price::Price;
pub use product::{Modifier, Product};
