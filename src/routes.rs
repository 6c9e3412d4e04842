use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::{
    auth::Authenticator,
    config::Config,
    forecast::{generate_forecast, ForecastEntry, RandomSource},
    store::{UrlRecord, UrlStore},
    upstream::ForecastFetcher,
};

// Shared application state; handlers depend on the collaborator traits only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn UrlStore>,
    pub random: Arc<dyn RandomSource>,
    pub authenticator: Arc<dyn Authenticator>,
    pub weather_proxy: Arc<dyn ForecastFetcher>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_forecast(State(state): State<AppState>) -> Json<Vec<ForecastEntry>> {
    Json(generate_forecast(state.random.as_ref(), chrono::Utc::now()))
}

pub async fn get_private_greeting(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<String, StatusCode> {
    // Guard first: without a valid credential the greeting never runs.
    let identity = match state.authenticator.authenticate(&headers) {
        Some(identity) => identity,
        None => return Err(StatusCode::UNAUTHORIZED),
    };

    Ok(format!("Hi {}.", identity.name))
}

pub async fn get_url(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UrlRecord>, StatusCode> {
    match state.store.find_by_id(id).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Url lookup failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get_proxied_forecast(State(state): State<AppState>) -> Result<String, StatusCode> {
    match state.weather_proxy.fetch_forecast().await {
        Ok(body) => Ok(body),
        Err(e) => {
            tracing::error!("Upstream forecast fetch failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weatherforecast", get(get_forecast))
        .route("/weatherforecast/private", get(get_private_greeting))
        .route("/weatherforecast/url/:id", get(get_url))
        .route("/weatherforecast/proxy", get(get_proxied_forecast))
        .with_state(state)
}
