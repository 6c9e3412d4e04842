use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

// The upstream request shape is fixed; nothing from the inbound request
// leaks into it.
const FORECAST_PATH: &str = "/weather";
const FORECAST_LOCATION: &str = "Gandia,es";
const FORECAST_UNITS: &str = "metric";

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Outbound fetch of the upstream forecast body.
#[async_trait]
pub trait ForecastFetcher: Send + Sync {
    async fn fetch_forecast(&self) -> Result<String, UpstreamError>;
}

pub struct WeatherApiProxy {
    client: Client,
    config: Config,
}

impl WeatherApiProxy {
    pub fn new(config: Config) -> Self {
        let client = Client::builder()
            .user_agent("WeatherForecastServer/1.0")
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[async_trait]
impl ForecastFetcher for WeatherApiProxy {
    async fn fetch_forecast(&self) -> Result<String, UpstreamError> {
        let url = format!("{}{}", self.config.openweather_base_url, FORECAST_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[("q", FORECAST_LOCATION), ("units", FORECAST_UNITS)])
            .header("x-rapidapi-host", &self.config.openweather_host)
            .header("x-rapidapi-key", &self.config.openweather_api_key)
            .send()
            .await?;

        // Pass-through: the body is returned verbatim whatever the upstream
        // status was; only a failed exchange is an error.
        Ok(response.text().await?)
    }
}
