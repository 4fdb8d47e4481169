use std::{path::PathBuf, sync::Arc};

use anyhow::{anyhow, Result};
use clap::Parser;

use nearby_application::AvailablePlacesController;
use nearby_core::{entities::MapPoint, view::OnSelectPlace};
use nearby_gateways::http::PlacesApi;

mod config;
mod gateways;
mod view;

#[derive(Debug, Parser)]
#[command(
    name = "nearby",
    about = "Lists the available places ordered by distance from the current position.",
    version
)]
struct Args {
    /// Configuration file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of the remote place API.
    #[arg(long)]
    api_url: Option<String>,

    /// Latitude of the current position in degrees.
    #[arg(long, requires = "lng")]
    lat: Option<f64>,

    /// Longitude of the current position in degrees.
    #[arg(long, requires = "lat")]
    lng: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config)?;
    if let Some(api_url) = args.api_url {
        cfg.api.url = api_url;
    }
    if let (Some(lat), Some(lng)) = (args.lat, args.lng) {
        let fixed = MapPoint::try_from_lat_lng_deg(lat, lng)
            .map_err(|_| anyhow!("Invalid position: {lat},{lng}"))?;
        cfg.position.fixed = Some(fixed);
    }
    run(cfg)
}

fn run(cfg: config::Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async move {
        let fetch = PlacesApi::new(cfg.api.url.clone());
        let geolocation = gateways::position_gateway(&cfg);
        let on_select: OnSelectPlace =
            Arc::new(|place| log::info!("Selected place: {}", place.title));
        let controller = AvailablePlacesController::new(
            fetch,
            geolocation,
            view::ConsoleView,
            view::ConsoleView,
            on_select,
        );
        controller.activate().await;
    });
    Ok(())
}
