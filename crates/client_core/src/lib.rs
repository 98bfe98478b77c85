use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use shared::{domain::Product, error::LoadFailure};
use tokio::task::JoinHandle;

pub mod catalog;

/// Smoothing delay applied before the one-shot catalog fetch so the loading
/// indicator does not flash on fast connections.
pub const CATALOG_FETCH_DELAY: Duration = Duration::from_secs(1);

/// The remote product catalog: one read, no parameters, yielding an ordered
/// sequence of records or a `LoadFailure`.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadFailure>;
}

/// HTTP implementation of [`ProductSource`] over a JSON array endpoint.
pub struct HttpProductSource {
    http: Client,
    products_url: String,
}

impl HttpProductSource {
    pub fn new(products_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            products_url: products_url.into(),
        }
    }

    pub fn products_url(&self) -> &str {
        &self.products_url
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, LoadFailure> {
        tracing::info!(url = %self.products_url, "fetching product catalog");
        let response = self
            .http
            .get(&self.products_url)
            .send()
            .await
            .map_err(|err| LoadFailure::new(format!("failed to reach product source: {err}")))?
            .error_for_status()
            .map_err(|err| {
                LoadFailure::new(format!("product source returned error status: {err}"))
            })?;

        response
            .json::<Vec<Product>>()
            .await
            .map_err(|err| LoadFailure::new(format!("invalid product payload: {err}")))
    }
}

/// Handle to the in-flight delayed load. Aborting before completion
/// guarantees the completion callback never runs, so a view torn down while
/// the fetch is pending sees no late state mutation.
pub struct PendingLoad {
    handle: JoinHandle<()>,
}

impl PendingLoad {
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn the one-shot catalog load: wait out the smoothing delay, poll the
/// source exactly once, and hand the outcome to `on_complete`. Must be
/// called from within a Tokio runtime.
pub fn spawn_delayed_load<F>(
    source: Arc<dyn ProductSource>,
    delay: Duration,
    on_complete: F,
) -> PendingLoad
where
    F: FnOnce(Result<Vec<Product>, LoadFailure>) + Send + 'static,
{
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        on_complete(source.fetch_products().await);
    });
    PendingLoad { handle }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
