use async_trait::async_trait;

use nearby_core::{
    entities::MapPoint,
    gateways::geolocation::{GeolocationGateway, PositionError},
};
use nearby_gateways::position::{FixedPosition, UnavailablePosition};

use crate::config::Config;

pub fn position_gateway(cfg: &Config) -> PositionGw {
    if let Some(pos) = cfg.position.fixed {
        log::info!("Use fixed position gateway ({pos})");
        PositionGw::new(FixedPosition::new(pos))
    } else {
        log::warn!("No position was configured: the place list will not finish loading");
        PositionGw::new(UnavailablePosition)
    }
}

pub struct PositionGw(Box<dyn GeolocationGateway + Send + Sync + 'static>);

impl PositionGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: GeolocationGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

#[async_trait]
impl GeolocationGateway for PositionGw {
    async fn current_position(&self) -> Result<MapPoint, PositionError> {
        self.0.current_position().await
    }
}
