use async_trait::async_trait;

use nearby_core::{
    entities::MapPoint,
    gateways::geolocation::{GeolocationGateway, PositionError},
};

/// Resolves immediately with a configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(MapPoint);

impl FixedPosition {
    pub fn new(pos: MapPoint) -> Self {
        Self(pos)
    }
}

#[async_trait]
impl GeolocationGateway for FixedPosition {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        debug!("Using the fixed position {}", self.0);
        Ok(self.0)
    }
}

/// Denies every position request.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedPosition;

#[async_trait]
impl GeolocationGateway for DeniedPosition {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        Err(PositionError::PermissionDenied)
    }
}

/// A position source that never resolves.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailablePosition;

#[async_trait]
impl GeolocationGateway for UnavailablePosition {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        warn!("No position source available: the request will never resolve");
        std::future::pending().await
    }
}
