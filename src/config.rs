use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    pub openweather_base_url: String,
    pub openweather_host: String,
    pub openweather_api_key: String,
    pub auth_tokens: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            openweather_base_url: env::var("OPENWEATHER_BASE_URL").unwrap_or_else(|_| {
                "https://community-open-weather-map.p.rapidapi.com".to_string()
            }),
            openweather_host: env::var("OPENWEATHER_HOST")
                .unwrap_or_else(|_| "community-open-weather-map.p.rapidapi.com".to_string()),
            openweather_api_key: env::var("OPENWEATHER_API_KEY")
                .map_err(|_| anyhow::anyhow!("OPENWEATHER_API_KEY not set"))?,
            auth_tokens: env::var("AUTH_TOKENS").unwrap_or_default(),
        })
    }
}
