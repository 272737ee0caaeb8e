#![recursion_limit = "256"]

mod bridge;
mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments use the environment.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let backend = upstream::HttpBackend::new(&config).expect("backend client init failed");
    tracing::info!(backend = %config.backend_url, "stars backend configured");

    let port = config.port;
    let state = state::AppState::new(Arc::new(backend), config);

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "stars listening");
    axum::serve(listener, app).await.expect("server failed");
}
