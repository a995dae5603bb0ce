mod config;
mod error;
mod glossary;
mod llm;
mod normalize;
mod prompt;
mod routes;
mod state;
mod types;

use anyhow::Result;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dedego_backend=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;
    let cors = build_cors(&config.allowed_origins);
    let addr = SocketAddr::new(config.host.parse()?, config.port);

    let app_state = AppState::new(config)?;

    let app = routes::create_routes(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS for the configured origin allow-list: credentials enabled, methods
/// and headers mirrored. Wildcards are not usable with credentials, so the
/// mirror variants stand in for "all".
fn build_cors(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
