//! UI-facing events emitted by the backend worker.

use shared::domain::Product;

pub enum UiEvent {
    Info(String),
    CatalogLoaded { products: Vec<Product> },
    CatalogLoadFailed { reason: String },
}
