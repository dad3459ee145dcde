//! Desktop product carousel built on iced.
//!
//! The behaviour lives in `vitrine-core`; this crate renders it, wires
//! input and timers into the controller, loads images and catalogs, and
//! hosts the "add to cart" dialog seam.

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod dialog;
pub mod images;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;

pub use catalog::{Catalog, CatalogError};
pub use dialog::{ButtonTrigger, DialogRequest, DialogTrigger};
pub use images::ImageLoadError;
pub use messages::Message;
pub use state::State;
