use thiserror::Error;

/// The single failure the catalog surfaces: the product source could not be
/// reached or its payload could not be decoded.
#[derive(Debug, Error)]
#[error("product source load failed: {message}")]
pub struct LoadFailure {
    pub message: String,
}

impl LoadFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
