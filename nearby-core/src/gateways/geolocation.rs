use async_trait::async_trait;
use thiserror::Error;

use crate::entities::MapPoint;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("geolocation permission denied")]
    PermissionDenied,
    #[error("current position unavailable")]
    Unavailable,
}

/// Single-shot source of the caller's current position.
///
/// Resolves at most once, either with the current position or with an
/// explicit failure. Implementations are also allowed to stay pending
/// forever, e.g. when no position source exists in the environment.
#[async_trait]
pub trait GeolocationGateway {
    async fn current_position(&self) -> Result<MapPoint, PositionError>;
}
