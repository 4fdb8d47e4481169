use async_trait::async_trait;
use serde::Deserialize;

use nearby_core::{
    entities::{Id, Image, MapPoint, Place},
    gateways::place::{FetchError, PlaceGateway},
};

/// Remote place API.
#[derive(Debug, Clone)]
pub struct PlacesApi {
    url: String,
    client: reqwest::Client,
}

impl PlacesApi {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PlaceGateway for PlacesApi {
    async fn fetch_available_places(&self) -> Result<Vec<Place>, FetchError> {
        let url = format!("{}/places", self.url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::new(err.to_string()))?;
        if !response.status().is_success() {
            return Err(FetchError::new("Failed to fetch places"));
        }
        let PlacesResponse { places } = response
            .json()
            .await
            .map_err(|err| FetchError::new(err.to_string()))?;
        Ok(places.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Deserialize)]
struct PlacesResponse {
    places: Vec<PlaceDto>,
}

#[derive(Debug, Deserialize)]
struct PlaceDto {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image: Option<ImageDto>,
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ImageDto {
    src: String,
    alt: String,
}

impl From<PlaceDto> for Place {
    fn from(from: PlaceDto) -> Self {
        let PlaceDto {
            id,
            title,
            description,
            image,
            lat,
            lon,
        } = from;
        let image = image.and_then(|img| match img.src.parse() {
            Ok(src) => Some(Image { src, alt: img.alt }),
            Err(err) => {
                warn!("Ignoring invalid image URL of place {id}: {err}");
                None
            }
        });
        Self {
            id: Id::from(id),
            title,
            description,
            pos: MapPoint::from_lat_lng_deg(lat, lon),
            image,
        }
    }
}
