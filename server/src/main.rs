mod config;
mod error;
mod routes;

use config::HostConfig;
use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_env()?;
    if config.service.is_placeholder() {
        tracing::warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set; auth requests will fail");
    }

    let app = routes::app(config.service)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(StartupError::Bind)?;

    tracing::info!(port = config.port, "portal listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
