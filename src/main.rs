use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_forecast_server::auth::BearerAuth;
use weather_forecast_server::config::Config;
use weather_forecast_server::forecast::ThreadRngSource;
use weather_forecast_server::routes::{create_router, AppState};
use weather_forecast_server::store::SqliteUrlStore;
use weather_forecast_server::upstream::WeatherApiProxy;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_forecast_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the record store
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:./weather_urls.db?mode=rwc".to_string());
    let pool = SqlitePool::connect(&database_url).await?;
    let store = SqliteUrlStore::new(pool);
    store.init_tables().await?;

    // Token table guarding the private endpoint
    let authenticator = BearerAuth::from_token_spec(&config.auth_tokens)?;

    // Upstream weather client
    let weather_proxy = WeatherApiProxy::new(config.clone());

    let state = AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        random: Arc::new(ThreadRngSource),
        authenticator: Arc::new(authenticator),
        weather_proxy: Arc::new(weather_proxy),
    };

    let app = create_router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
    tracing::info!("Server starting on http://0.0.0.0:8080");

    axum::serve(listener, app).await?;

    Ok(())
}
