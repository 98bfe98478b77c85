//! UI layer for the catalog browser: app shell, controls, and product table.

pub mod app;

pub use app::{CatalogApp, StartupConfig, DEFAULT_PRODUCTS_URL};
