use anyhow::{anyhow, Result};
use nearby_entities::geo::MapPoint;
use std::{env, fs, io::ErrorKind, path::Path};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "nearby.toml";

const ENV_NAME_API_URL: &str = "NEARBY_API_URL";

pub struct Config {
    pub api: Api,
    pub position: Position,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(api_url) = env::var(ENV_NAME_API_URL) {
            cfg.api.url = api_url;
        }
        Ok(cfg)
    }
}

pub struct Api {
    /// Base URL of the remote place API.
    pub url: String,
}

pub struct Position {
    /// Fixed current position used instead of a geolocation request.
    pub fixed: Option<MapPoint>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, position } = from;

        let raw::Api { url } = api.unwrap_or_default();
        if url.trim().is_empty() {
            return Err(anyhow!("Empty API base URL"));
        }
        let api = Api {
            url: url.trim_end_matches('/').to_owned(),
        };

        let raw::Position { lat, lng } = position.unwrap_or_default();
        let fixed = match (lat, lng) {
            (Some(lat), Some(lng)) => Some(
                MapPoint::try_from_lat_lng_deg(lat, lng)
                    .map_err(|_| anyhow!("Invalid position: {lat},{lng}"))?,
            ),
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "Incomplete position: both 'lat' and 'lng' are required"
                ));
            }
        };
        let position = Position { fixed };

        Ok(Self { api, position })
    }
}
