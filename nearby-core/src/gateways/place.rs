use async_trait::async_trait;
use thiserror::Error;

use crate::entities::Place;

/// Failure of a place fetch with a human-readable message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Remote source of the available places.
#[async_trait]
pub trait PlaceGateway {
    /// Fetch the raw, unordered place collection.
    async fn fetch_available_places(&self) -> Result<Vec<Place>, FetchError>;
}
