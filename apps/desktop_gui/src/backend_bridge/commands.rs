//! Commands the UI queues for the backend worker.

pub enum BackendCommand {
    LoadCatalog { products_url: String },
}
