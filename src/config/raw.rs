use serde::Deserialize;

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub position: Option<Position>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self {
            url: DEFAULT_API_URL.to_owned(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Position {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}
